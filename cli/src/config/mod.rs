mod config;
mod log_config;
mod marker_config;

pub use config::get_config_manager;
pub use log_config::LogConfig;
pub use marker_config::MarkerConfig;
