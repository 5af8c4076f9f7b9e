mod cli;
mod demo;
mod server;

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
