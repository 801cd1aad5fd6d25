mod cli;
mod lookup;

use abit_rank::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
