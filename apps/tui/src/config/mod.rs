mod config;

pub use config::{get_poll_interval, init_app_config};
