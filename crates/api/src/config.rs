//! Application configuration loaded from environment variables.

/// Which write-auth variant the server enforces.
///
/// Exactly one variant is active per process; flipping the mode changes
/// both the write gate and what `/api/token` hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Writes require an `X-Token` header equal to the loaded secret.
    SharedSecret,
    /// Writes require a `Bearer` JWT signed with the loaded secret.
    Jwt,
}

impl AuthMode {
    /// Parses an `AUTH_MODE` value, falling back to the shared-secret
    /// variant for anything unrecognized.
    pub fn parse(value: &str) -> Self {
        match value {
            "jwt" => AuthMode::Jwt,
            "shared-secret" => AuthMode::SharedSecret,
            other => {
                if !other.is_empty() {
                    tracing::warn!(value = other, "unknown AUTH_MODE, using shared-secret");
                }
                AuthMode::SharedSecret
            }
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `APP_ENV` — environment tag reported by health/config (default: `"dev"`)
/// - `DATABASE_URL` — `sqlite:///<path>` or bare path (default: `"sqlite:///data/app.db"`)
/// - `LOG_LEVEL` — tracing filter fallback when `RUST_LOG` is unset (default: `"info"`)
/// - `CORS_ORIGINS` — comma-separated allowed origins (default: none)
/// - `API_TOKEN_SECRET_PATH` — write-auth secret file (default: `"/run/secrets/api_token_secret"`)
/// - `DB_PASSWORD_SECRET_PATH` — optional database-password secret file
/// - `AUTH_MODE` — `"shared-secret"` or `"jwt"` (default: `"shared-secret"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub env: String,
    pub database_url: String,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub secret_path: String,
    pub db_password_secret_path: Option<String>,
    pub auth_mode: AuthMode,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults. Resolved once at startup; handlers never consult the
    /// environment themselves.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:///data/app.db".to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            cors_origins: parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_default()),
            secret_path: std::env::var("API_TOKEN_SECRET_PATH")
                .unwrap_or_else(|_| "/run/secrets/api_token_secret".to_string()),
            db_password_secret_path: std::env::var("DB_PASSWORD_SECRET_PATH").ok(),
            auth_mode: AuthMode::parse(&std::env::var("AUTH_MODE").unwrap_or_default()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            env: "dev".to_string(),
            database_url: "sqlite:///data/app.db".to_string(),
            log_level: "info".to_string(),
            cors_origins: Vec::new(),
            secret_path: "/run/secrets/api_token_secret".to_string(),
            db_password_secret_path: None,
            auth_mode: AuthMode::SharedSecret,
        }
    }
}

/// Splits a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.env, "dev");
        assert_eq!(config.database_url, "sqlite:///data/app.db");
        assert_eq!(config.log_level, "info");
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.auth_mode, AuthMode::SharedSecret);
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:5173, https://demo.example.com ,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://demo.example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_origins_empty_input() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ,").is_empty());
    }

    #[test]
    fn test_auth_mode_parsing() {
        assert_eq!(AuthMode::parse("jwt"), AuthMode::Jwt);
        assert_eq!(AuthMode::parse("shared-secret"), AuthMode::SharedSecret);
        assert_eq!(AuthMode::parse(""), AuthMode::SharedSecret);
        assert_eq!(AuthMode::parse("something-else"), AuthMode::SharedSecret);
    }
}
