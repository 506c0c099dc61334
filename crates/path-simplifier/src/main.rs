use path_simplifier::{Settings, run, setup_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let _guard = setup_logging();
    let settings = Settings::from_cli();

    match run(settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
