use crate::db::Database;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::thread;

/// Closes `db` and exits with `128 + signal` on SIGHUP, SIGINT or SIGTERM.
pub fn install(db: Database) -> std::io::Result<()> {
    let mut signals = Signals::new([SIGHUP, SIGINT, SIGTERM])?;

    thread::Builder::new()
        .name("shutdown".into())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                tracing::info!("Received signal {signal}, shutting down");
                db.close();
                std::process::exit(exit_code(signal));
            }
        })?;

    Ok(())
}

fn exit_code(signal: i32) -> i32 {
    128 + signal
}
