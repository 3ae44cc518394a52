mod app;
mod cli;
mod error;
mod input;
mod logging;
mod terminal;
mod text;

use std::process::ExitCode;

use clap::Parser;
use log::info;
use typeahead::SearchController;

use crate::app::App;
use crate::cli::Cli;
use crate::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    logging::init(cli.log_level, cli.log_dir.clone())?;

    let dataset = cli.load_dataset()?;
    let config = cli.search_config()?;
    info!(
        "Starting with {} entries, delay {:?}",
        dataset.len(),
        config.delay
    );

    let controller = SearchController::new(dataset, config);
    App::new(controller).run().await
}
