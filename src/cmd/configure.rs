use crate::{Config, ConfigArgs};
use log::debug;

/// Persist the settings used for backup runs.
pub fn configure(mut config: Config, args: ConfigArgs) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    if let Some(max_workers) = args.set_max_workers.max_workers {
        config.settings.set_max_workers(max_workers);
    }

    if let Some(request_timeout) = args.set_request_timeout.request_timeout {
        config.settings.set_request_timeout(request_timeout);
    }

    if let Some(request_throttling) = args.set_request_throttling.request_throttling {
        config.settings.set_request_throttling(request_throttling);
    }

    if let Some(max_idle_connections_per_host) = args
        .set_max_idle_connections_per_host
        .max_idle_connections_per_host
    {
        config
            .settings
            .set_max_idle_connections_per_host(max_idle_connections_per_host);
    }

    if let Some(idle_connections_timeout) =
        args.set_idle_connections_timeout.idle_connections_timeout
    {
        config
            .settings
            .set_idle_connections_timeout(idle_connections_timeout);
    }

    config.settings.write(&config.settings_path)?;

    Ok(())
}
