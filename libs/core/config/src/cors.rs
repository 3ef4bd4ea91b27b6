use crate::{ConfigError, FromEnv};
use std::env;

/// Origins allowed to call the API from a browser.
///
/// `CORS_ALLOWED_ORIGIN` takes a comma separated list. When it is unset the
/// single `FRONTEND_URL` origin is used instead. One of the two is required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    fn parse(key: &str, raw: &str) -> Result<Self, ConfigError> {
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: key.to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        if let Ok(raw) = env::var("CORS_ALLOWED_ORIGIN") {
            return Self::parse("CORS_ALLOWED_ORIGIN", &raw);
        }

        match env::var("FRONTEND_URL") {
            Ok(raw) => Self::parse("FRONTEND_URL", &raw),
            Err(_) => Err(ConfigError::MissingEnvVar(
                "CORS_ALLOWED_ORIGIN (or FRONTEND_URL)".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_from_allowed_origin_list() {
        temp_env::with_vars(
            [
                (
                    "CORS_ALLOWED_ORIGIN",
                    Some("http://localhost:3000, https://shop.example.com ,"),
                ),
                ("FRONTEND_URL", Some("http://ignored")),
            ],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["http://localhost:3000", "https://shop.example.com"]
                );
            },
        );
    }

    #[test]
    fn test_cors_falls_back_to_frontend_url() {
        temp_env::with_vars(
            [
                ("CORS_ALLOWED_ORIGIN", None),
                ("FRONTEND_URL", Some("http://localhost:5173")),
            ],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(config, CorsConfig::new(["http://localhost:5173"]));
            },
        );
    }

    #[test]
    fn test_cors_missing_both() {
        temp_env::with_vars_unset(["CORS_ALLOWED_ORIGIN", "FRONTEND_URL"], || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }

    #[test]
    fn test_cors_empty_list_rejected() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { .. }));
        });
    }
}
