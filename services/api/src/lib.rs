mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use registration_docs::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
