use clap::Parser;
use larder_backup::{cmd, Args, Config, Logger, Subcommands};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    Logger::init(args.verbose);
    let config = Config::init()?;

    run_app(args, config).await?;

    Ok(())
}

async fn run_app(args: Args, config: Config) -> Result<(), anyhow::Error> {
    match args.subcommands {
        Subcommands::Backup(backup_args) => cmd::backup(&config, &backup_args).await?,
        Subcommands::Config(config_args) => cmd::configure(config, config_args)?,
    }

    Ok(())
}
