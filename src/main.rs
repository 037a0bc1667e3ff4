use std::process::ExitCode;

fn main() -> ExitCode {
    match gotribe_admin_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
