//! Application configuration

pub mod settings;

pub use settings::{AppConfig, CaptchaConfig, CorsConfig, ServerConfig, WordPressConfig};
