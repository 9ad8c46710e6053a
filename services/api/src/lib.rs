//! HTTP service and command line front end for admission scoring.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use admission_score::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
