pub mod app_config;
pub mod classify;
pub mod config;
pub mod products;
pub mod weights;

use thiserror::Error;

pub use app_config::AppConfig;
pub use classify::{
    classify, has_five_pound_bag, has_twenty_five_pound_bag, is_available, Classification,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{InspectionStatus, ProductRecord};
pub use weights::{label_of, WeightLabel};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
