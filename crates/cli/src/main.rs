use std::process::ExitCode;

fn main() -> ExitCode {
    fitquiz_cli::run()
}
