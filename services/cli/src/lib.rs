mod cli;
mod demo;
mod render;
mod session;

use counselor_assessment::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
