use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub wordpress: WordPressConfig,
    pub captcha: CaptchaConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    /// Public address of this site, used as the WordPress `redirect_to`
    /// target when a request carries no `Referer`.
    pub public_url: Option<String>,
}

/// The external CMS that owns leads, accounts and checkout.
///
/// `base_url` has no default: a deployment that forgets it must fail at
/// startup instead of talking to some other host.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WordPressConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CaptchaConfig {
    pub site_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_bytes: 64 * 1024,
            public_url: None,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Layers compiled defaults, an optional `config.toml` and `APP__*`
    /// environment variables, then validates the result.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::Message(
                "Max body size must be greater than 0".to_string(),
            ));
        }

        self.wordpress_base_url()?;

        if let Some(public_url) = self.public_url() {
            Url::parse(public_url).map_err(|e| {
                ConfigError::Message(format!("Invalid public URL '{}': {}", public_url, e))
            })?;
        }

        if self.captcha_site_key().is_none() {
            tracing::warn!("No hCaptcha site key configured - lead forms cannot be submitted");
        }

        Ok(())
    }

    /// The parsed WordPress base URL with any trailing slash removed.
    pub fn wordpress_base_url(&self) -> Result<Url, ConfigError> {
        let raw = self.wordpress.base_url.trim().trim_end_matches('/');

        if raw.is_empty() {
            return Err(ConfigError::Message(
                "WordPress base URL must be set (APP__WORDPRESS__BASE_URL)".to_string(),
            ));
        }

        let url = Url::parse(raw).map_err(|e| {
            ConfigError::Message(format!("Invalid WordPress base URL '{}': {}", raw, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ConfigError::Message(format!(
                "WordPress base URL must be an absolute http(s) URL, got '{}'",
                raw
            )));
        }

        Ok(url)
    }

    /// The trimmed site key, or `None` when it is unset or blank.
    pub fn captcha_site_key(&self) -> Option<&str> {
        self.captcha
            .site_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn public_url(&self) -> Option<&str> {
        self.server
            .public_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AppConfig {
        let mut config = AppConfig::default();
        config.wordpress.base_url = "https://wp.example.org".to_string();
        config
    }

    #[test]
    fn test_default_config_requires_base_url() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("APP__WORDPRESS__BASE_URL"));
    }

    #[test]
    fn test_config_validation() {
        assert!(configured().validate().is_ok());

        let mut config = configured();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = configured();
        config.wordpress.base_url = "   ".to_string();
        assert!(config.validate().is_err());

        let mut config = configured();
        config.wordpress.base_url = "ftp://wp.example.org".to_string();
        assert!(config.validate().is_err());

        let mut config = configured();
        config.wordpress.base_url = "wp.example.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let mut config = configured();
        config.wordpress.base_url = "https://wp.example.org/".to_string();

        let url = config.wordpress_base_url().unwrap();
        assert_eq!(url.as_str().trim_end_matches('/'), "https://wp.example.org");
    }

    #[test]
    fn test_captcha_site_key_blank_is_missing() {
        let mut config = configured();
        assert_eq!(config.captcha_site_key(), None);

        config.captcha.site_key = Some("   ".to_string());
        assert_eq!(config.captcha_site_key(), None);

        config.captcha.site_key = Some(" 10000000-ffff-ffff-ffff-000000000001 ".to_string());
        assert_eq!(
            config.captcha_site_key(),
            Some("10000000-ffff-ffff-ffff-000000000001")
        );

        // A missing key is not fatal; the forms render an inline error instead.
        config.captcha.site_key = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_public_url_must_parse() {
        let mut config = configured();
        config.server.public_url = Some("https://sadopak.example".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(config.public_url(), Some("https://sadopak.example"));

        config.server.public_url = Some("not a url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = configured();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");

        let mut config = configured();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 8080;
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_config_loading_from_environment() {
        std::env::set_var("APP__WORDPRESS__BASE_URL", "https://cms.example.net");

        let config = AppConfig::load().expect("Should load configuration");

        assert_eq!(config.wordpress.base_url, "https://cms.example.net");
        assert_eq!(config.server.port, 3000);
        assert!(config.validate().is_ok());
    }
}
