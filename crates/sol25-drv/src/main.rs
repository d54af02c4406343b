use std::io::Read;

use sol25_drv::{classify_args, init_tracing, run_pipeline, CliAction, USAGE};
use sol25_util::exit_code;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match classify_args(&args) {
        Err(code) => {
            eprintln!("error: invalid arguments; try --help");
            std::process::exit(code);
        }
        Ok(CliAction::PrintHelp) => {
            print!("{USAGE}");
        }
        Ok(CliAction::Run) => run_from_stdin(),
    }
}

fn run_from_stdin() {
    let mut source = String::new();
    if std::io::stdin().read_to_string(&mut source).is_err() {
        eprintln!("error: failed to read standard input as UTF-8");
        std::process::exit(exit_code::INPUT_FILE);
    }

    match run_pipeline(&source) {
        Ok(xml) => print!("{xml}"),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
