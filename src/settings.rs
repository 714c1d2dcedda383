use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default backend method that exchanges an authorization code for tokens
pub const DEFAULT_AUTH_CODE_PATH: &str = "/api/method/shopee.api.auth.handle_auth_code";

/// Default anti-forgery header understood by the backend
pub const DEFAULT_CSRF_HEADER: &str = "X-Frappe-CSRF-Token";

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: basic_toml::Error,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RelaySettings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
    pub shopee: ShopeeSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// Public base URL the browser is redirected back to
    pub redirect_base_url: String,
    pub cors_origins: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    pub auth_code_path: String,
    pub csrf_header: String,
    /// Anti-forgery token issued by the backend, sent verbatim
    pub csrf_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopeeSettings {
    pub host: String,
    pub partner_id: Option<String>,
    pub partner_key: Option<String>,
    pub redirect_path: String,
    pub deauth_redirect_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            redirect_base_url: "http://localhost:8080".to_string(),
            cors_origins: "http://localhost:3000,http://localhost:8080".to_string(),
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            auth_code_path: DEFAULT_AUTH_CODE_PATH.to_string(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            csrf_token: String::new(),
        }
    }
}

impl Default for ShopeeSettings {
    fn default() -> Self {
        Self {
            host: "https://openplatform.shopee.cn".to_string(),
            partner_id: None,
            partner_key: None,
            redirect_path: "/auth-callback".to_string(),
            deauth_redirect_path: "/deauth-callback".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl RelaySettings {
    /// Load settings from configuration files and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A settings file cannot be read or parsed
    /// - Logger initialization fails
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_env_file(Path::new(".env"));

        let mut settings = Self::load_base_settings(
            Path::new("Settings.toml"),
            std::env::var("RELAY_SECRETS_DIR").ok().as_deref(),
        )?;

        Self::apply_env_overrides(&mut settings);

        Self::logger_builder(&settings.logging).try_init()?;

        Ok(settings)
    }

    /// Logger filtered by the configured level (`RUST_LOG` syntax)
    #[must_use]
    pub fn logger_builder(logging_settings: &LoggingSettings) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&logging_settings.level);
        builder
    }

    /// Load base settings from TOML file(s) or use defaults
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables (applied separately after loading base settings)
    /// 2. Settings.toml in `RELAY_SECRETS_DIR` (if specified and exists)
    /// 3. The given settings file (if exists)
    /// 4. Default settings
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read or parsed
    pub fn load_base_settings(
        default_path: &Path,
        secrets_dir: Option<&str>,
    ) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        if default_path.exists() {
            settings = Self::from_file(default_path)?;
            println!("✓ Loaded base settings from {}", default_path.display());
        }

        if let Some(secrets_dir) = secrets_dir {
            let secrets_path = Path::new(secrets_dir).join("Settings.toml");
            if secrets_path.exists() {
                settings = Self::from_file(&secrets_path)?;
                println!("✓ Overriding settings from {}", secrets_path.display());
            } else {
                println!(
                    "ℹ RELAY_SECRETS_DIR set but no Settings.toml found at: {}",
                    secrets_path.display()
                );
            }
        }

        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        basic_toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(settings: &mut Self) {
        Self::apply_application_env_overrides(&mut settings.application);
        Self::apply_backend_env_overrides(&mut settings.backend);
        Self::apply_shopee_env_overrides(&mut settings.shopee);
        Self::apply_logging_env_overrides(&mut settings.logging);
    }

    fn apply_application_env_overrides(app_settings: &mut ApplicationSettings) {
        if let Ok(host) = std::env::var("HOST") {
            app_settings.host = host;
        }
        if let Ok(port_str) = std::env::var("PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                app_settings.port = port;
            }
        }
        if let Ok(redirect_base_url) = std::env::var("REDIRECT_BASE_URL") {
            app_settings.redirect_base_url = redirect_base_url;
        }
        if let Ok(cors_origins) = std::env::var("CORS_ORIGINS") {
            app_settings.cors_origins = cors_origins;
        }
    }

    /// Apply environment overrides for the token-exchange backend
    pub fn apply_backend_env_overrides(backend_settings: &mut BackendSettings) {
        if let Ok(base_url) = std::env::var("BACKEND_URL") {
            backend_settings.base_url = base_url;
        }
        if let Ok(path) = std::env::var("BACKEND_AUTH_CODE_PATH") {
            backend_settings.auth_code_path = path;
        }
        if let Ok(header) = std::env::var("CSRF_HEADER") {
            backend_settings.csrf_header = header;
        }
        if let Ok(token) = std::env::var("CSRF_TOKEN") {
            backend_settings.csrf_token = token;
        }
    }

    /// Apply environment overrides for Shopee partner credentials
    pub fn apply_shopee_env_overrides(shopee_settings: &mut ShopeeSettings) {
        if let Ok(host) = std::env::var("SHOPEE_HOST") {
            shopee_settings.host = host;
        }
        // Empty values are treated as unset so the link handlers report missing credentials
        if let Ok(partner_id) = std::env::var("SHOPEE_PARTNER_ID") {
            shopee_settings.partner_id = Some(partner_id).filter(|v| !v.is_empty());
        }
        if let Ok(partner_key) = std::env::var("SHOPEE_PARTNER_KEY") {
            shopee_settings.partner_key = Some(partner_key).filter(|v| !v.is_empty());
        }
    }

    fn apply_logging_env_overrides(logging_settings: &mut LoggingSettings) {
        if let Ok(log_level) = std::env::var("RUST_LOG") {
            logging_settings.level = log_level;
        }
    }

    /// Load environment variables from a dotenv-style file
    fn load_env_file(path: &Path) {
        if let Ok(contents) = fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    std::env::set_var(key.trim(), value.trim());
                }
            }
        }
    }

    /// Get the bind address for the server
    #[must_use]
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }

    /// Get CORS origins as a vector of strings
    #[must_use]
    pub fn get_cors_origins(&self) -> Vec<String> {
        self.application
            .cors_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Full URL of the token-exchange endpoint
    #[must_use]
    pub fn auth_code_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.backend.base_url.trim_end_matches('/'),
            self.backend.auth_code_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clean_env_vars() {
        for var in [
            "BACKEND_URL",
            "BACKEND_AUTH_CODE_PATH",
            "CSRF_HEADER",
            "CSRF_TOKEN",
            "SHOPEE_HOST",
            "SHOPEE_PARTNER_ID",
            "SHOPEE_PARTNER_KEY",
            "RELAY_SECRETS_DIR",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_backend_defaults() {
        let settings = RelaySettings::default();
        assert_eq!(
            settings.backend.auth_code_path,
            "/api/method/shopee.api.auth.handle_auth_code"
        );
        assert_eq!(settings.backend.csrf_header, "X-Frappe-CSRF-Token");
        assert_eq!(settings.shopee.redirect_path, "/auth-callback");
        assert_eq!(
            settings.auth_code_endpoint(),
            "http://localhost:8000/api/method/shopee.api.auth.handle_auth_code"
        );
    }

    #[test]
    fn test_auth_code_endpoint_strips_trailing_slash() {
        let mut settings = RelaySettings::default();
        settings.backend.base_url = "https://erp.example.com/".to_string();
        assert_eq!(
            settings.auth_code_endpoint(),
            "https://erp.example.com/api/method/shopee.api.auth.handle_auth_code"
        );
    }

    #[test]
    #[serial]
    fn test_backend_env_override() {
        clean_env_vars();
        let mut backend = BackendSettings::default();

        std::env::set_var("BACKEND_URL", "https://erp.example.com");
        std::env::set_var("CSRF_TOKEN", "token-from-env");

        RelaySettings::apply_backend_env_overrides(&mut backend);

        assert_eq!(backend.base_url, "https://erp.example.com");
        assert_eq!(backend.csrf_token, "token-from-env");
        assert_eq!(backend.csrf_header, DEFAULT_CSRF_HEADER);

        clean_env_vars();
    }

    #[test]
    #[serial]
    fn test_empty_partner_credentials_are_unset() {
        clean_env_vars();
        let mut shopee = ShopeeSettings {
            partner_id: Some("1001".to_string()),
            ..ShopeeSettings::default()
        };

        std::env::set_var("SHOPEE_PARTNER_ID", "");
        std::env::set_var("SHOPEE_PARTNER_KEY", "secret");

        RelaySettings::apply_shopee_env_overrides(&mut shopee);

        assert_eq!(shopee.partner_id, None);
        assert_eq!(shopee.partner_key.as_deref(), Some("secret"));

        clean_env_vars();
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[backend]\nbase_url = \"https://erp.example.com\"\ncsrf_token = \"abc\""
        )
        .unwrap();

        let settings = RelaySettings::load_base_settings(file.path(), None).unwrap();

        assert_eq!(settings.backend.base_url, "https://erp.example.com");
        assert_eq!(settings.backend.csrf_token, "abc");
        assert_eq!(settings.backend.auth_code_path, DEFAULT_AUTH_CODE_PATH);
        assert_eq!(settings.application.port, 8080);
    }

    #[test]
    fn test_secrets_dir_takes_precedence() {
        let root = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(root.path(), "[backend]\ncsrf_token = \"root\"\n").unwrap();

        let secrets_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            secrets_dir.path().join("Settings.toml"),
            "[backend]\ncsrf_token = \"secret\"\n",
        )
        .unwrap();

        let settings = RelaySettings::load_base_settings(
            root.path(),
            secrets_dir.path().to_str(),
        )
        .unwrap();

        assert_eq!(settings.backend.csrf_token, "secret");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[backend\nbase_url = 1").unwrap();

        let result = RelaySettings::load_base_settings(file.path(), None);
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_logging_level_drives_logger_filter() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[logging]\nlevel = \"debug\"\n").unwrap();

        let settings = RelaySettings::load_base_settings(file.path(), None).unwrap();
        let logger = RelaySettings::logger_builder(&settings.logging).build();
        assert_eq!(logger.filter(), log::LevelFilter::Debug);

        let quiet = LoggingSettings {
            level: "warn".to_string(),
        };
        assert_eq!(
            RelaySettings::logger_builder(&quiet).build().filter(),
            log::LevelFilter::Warn
        );
    }

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings =
            RelaySettings::load_base_settings(&dir.path().join("Settings.toml"), None).unwrap();
        assert_eq!(settings.get_bind_address(), "0.0.0.0:8080");
        assert_eq!(
            settings.get_cors_origins(),
            vec!["http://localhost:3000", "http://localhost:8080"]
        );
    }
}
