use std::io;

use anyhow::Result;
use clap::Parser;

use base::requests::ureq::UreqRequestApi;
use fotostatus::cli::Cli;
use fotostatus::commands::run;
use fotostatus::logging::init_logger;
use fotostatus::{AppContext, Settings};
use order_store::JsonFileOrderStorage;
use status_api::PhotoprintitStatusApi;

fn main() -> Result<()> {
    // a missing .env file is fine, the environment and defaults still apply
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(store) = cli.store {
        settings.store_path = Some(store);
    }

    init_logger(settings.log_level, settings.log_file.as_deref())?;

    let store_path = settings.resolve_store_path()?;
    log::debug!("using the order store {}", store_path.display());

    let mut ctx = AppContext {
        storage: JsonFileOrderStorage::new(store_path),
        status_api: PhotoprintitStatusApi::new(settings.status_api, UreqRequestApi::new()),
        out: io::stdout(),
        request_delay: settings.request_delay,
        show_progress: true,
    };

    run(cli.command, &mut ctx)
}
