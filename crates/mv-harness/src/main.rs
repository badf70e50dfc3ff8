use std::io;
use std::process::ExitCode;

use mv_harness::runner;

/// Runs the fixed verification plan against the kernel and exits 0 only if
/// every test passed, so the harness can gate automated builds.
fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match runner::run(&mut out) {
        Ok(summary) if summary.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("harness: failed to write report: {}", err);
            ExitCode::from(1)
        }
    }
}
