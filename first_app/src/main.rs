mod app;

use std::process::ExitCode;

use app::{AppError, FirstApp};
use lve_engine::foundation::logging;
use lve_engine::window::WindowBackend;

fn main() -> ExitCode {
    logging::init();
    ExitCode::from(exit_status(FirstApp::new))
}

/// Open the app, run it, and map the outcome to a process exit status
///
/// Errors are written to stderr and yield 1.
fn exit_status<B, F>(open: F) -> u8
where
    B: WindowBackend,
    F: FnOnce() -> Result<FirstApp<B>, AppError>,
{
    match open().and_then(|mut app| app.run()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}
