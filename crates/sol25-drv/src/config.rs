//! Argument classification (`spec.md` §6 "Inputs", "CLI surface").
//!
//! Mirrors the teacher workspace's `Config`-struct convention
//! (`faxc-drv::Config`) in miniature: argument handling is a small,
//! dedicated step before dispatch rather than inlined into `main`. There is
//! no external configuration file or environment surface — `spec.md` §6
//! "Environment/persisted state: None" is unchanged — so this module's only
//! job is classifying `std::env::args()`.

use sol25_util::exit_code;

/// What the driver should do once argument classification is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    /// Print usage and exit 0.
    PrintHelp,
    /// Read stdin and run the pipeline.
    Run,
}

/// Classifies the process's argument vector (excluding `argv[0]`).
///
/// `--help`/`-h` is recognized at any position in the vector, matching the
/// original's `"--help" in sys.argv or "-h" in sys.argv`. Combined with any
/// other argument, or any other argument on its own, is `PARAM` (10).
pub fn classify_args(args: &[String]) -> Result<CliAction, i32> {
    let has_help = args.iter().any(|a| a == "--help" || a == "-h");

    if has_help {
        return if args.len() > 1 { Err(exit_code::PARAM) } else { Ok(CliAction::PrintHelp) };
    }

    if !args.is_empty() {
        return Err(exit_code::PARAM);
    }

    Ok(CliAction::Run)
}
