use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Describes the available arguments in the CLI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub subcommands: Subcommands,
}

/// Describes the available subcommands in the CLI.
#[derive(Subcommand, Debug)]
pub enum Subcommands {
    /// Back up the whole account to a browser-importable bookmark file.
    Backup(BackupArgs),
    /// Configure the settings used for backup runs.
    Config(ConfigArgs),
}

/// Describes the arguments for the `backup` subcommand.
#[derive(ClapArgs, Debug)]
pub struct BackupArgs {
    /// The access token from the Larder settings page.
    pub token: String,
    /// The directory where the backup file is written.
    pub dir: PathBuf,
    /// Override the configured number of workers for this run.
    #[arg(long)]
    pub workers: Option<usize>,
}

/// Describes the arguments for the `config` subcommand.
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub set_max_workers: SetMaxWorkers,
    #[command(flatten)]
    pub set_request_timeout: SetRequestTimeout,
    #[command(flatten)]
    pub set_request_throttling: SetRequestThrottling,
    #[command(flatten)]
    pub set_max_idle_connections_per_host: SetMaxIdleConnectionsPerHost,
    #[command(flatten)]
    pub set_idle_connections_timeout: SetIdleConnectionsTimeout,
}

#[derive(ClapArgs, Debug)]
#[group(required = false)]
pub struct SetMaxWorkers {
    /// The number of workers processing folders in a backup run.
    #[arg(long)]
    pub max_workers: Option<usize>,
}

#[derive(ClapArgs, Debug)]
#[group(required = false)]
pub struct SetRequestTimeout {
    #[arg(long)]
    pub request_timeout: Option<u64>,
}

#[derive(ClapArgs, Debug)]
#[group(required = false)]
pub struct SetRequestThrottling {
    #[arg(long)]
    pub request_throttling: Option<u64>,
}

#[derive(ClapArgs, Debug)]
#[group(required = false)]
pub struct SetMaxIdleConnectionsPerHost {
    #[arg(long)]
    pub max_idle_connections_per_host: Option<usize>,
}

#[derive(ClapArgs, Debug)]
#[group(required = false)]
pub struct SetIdleConnectionsTimeout {
    #[arg(long)]
    pub idle_connections_timeout: Option<u64>,
}
