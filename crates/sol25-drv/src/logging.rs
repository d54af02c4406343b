//! Ambient observability (`spec.md` §6.5 — not part of the core contract,
//! carried regardless of the non-goals that scope out *features*).
//!
//! Grounded on `faxt`'s `tracing` + `tracing-subscriber` pairing: an
//! env-filter-driven subscriber writing to stderr, so it never contaminates
//! the XML document on stdout. `spec.md` §7's "the message text is not part
//! of the contract" rule holds here too — nothing downstream parses this
//! output.

use tracing_subscriber::EnvFilter;

/// Installs a process-wide `tracing` subscriber. Defaults to `info` level;
/// respects `RUST_LOG` when set. Safe to call more than once — a second
/// call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
