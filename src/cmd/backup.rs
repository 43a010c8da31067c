use crate::{
    client::{ApiConfig, AuthMode, LarderApi},
    entities::EntityService,
    loader::FolderLoader,
    pipeline::BackupPipeline,
    BackupArgs, Config,
};
use log::{debug, info};
use tokio::time::Duration;

/// Back up the whole account to a bookmark file in the target directory.
pub async fn backup(config: &Config, args: &BackupArgs) -> Result<(), anyhow::Error> {
    debug!("Backing up to {}", args.dir.display());

    let settings = &config.settings;
    let api_config = ApiConfig::new(settings);
    let api = LarderApi::new(&args.token, AuthMode::Token, &api_config)?;
    let throttling = Duration::from_millis(settings.request_throttling);
    let service = EntityService::new(api, &settings.api_url, throttling);
    let loader = FolderLoader::new(service);
    let max_workers = args.workers.unwrap_or(settings.max_workers);
    let pipeline = BackupPipeline::new(loader, max_workers, throttling);

    info!("Starting Larder backup ...");
    let target_file = pipeline.run(&args.dir).await?;
    info!("... backup completed: {}", target_file.display());

    Ok(())
}
