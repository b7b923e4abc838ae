pub mod config;
pub mod error;
pub mod localization;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::*;
