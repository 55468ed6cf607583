mod cli;
mod report;
mod score;

use team_fit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
