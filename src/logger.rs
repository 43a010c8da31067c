use env_logger::{Builder, Env};

pub struct Logger;

impl Logger {
    pub fn init(verbosity: u8) {
        let log_filter = match verbosity {
            0 => "larder_backup=info",
            1 => "larder_backup=debug,info",
            _ => "larder_backup=trace,info",
        };

        // Default to INFO level logs if RUST_LOG is not set.
        Builder::from_env(Env::default().default_filter_or(log_filter)).init();
    }
}
