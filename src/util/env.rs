use std::collections::HashMap;

use thiserror::Error;

pub const DEFAULT_REPORT_PAGE_SIZE: i64 = 500;

/// Process configuration, sourced from the environment (with `.env` support
/// for local runs). Constructed once in `main`.
#[derive(Debug, Clone)]
pub struct Env {
    pub database_url: String,
    pub report_page_size: i64,
}

impl Env {
    pub fn from_env() -> EnvResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    pub fn from_iter<Iter>(iter: Iter) -> EnvResult<Self>
    where
        Iter: IntoIterator<Item = (String, String)>,
    {
        let mut vars: HashMap<String, String> = iter.into_iter().collect();

        let database_url = vars
            .remove("DATABASE_URL")
            .ok_or(EnvErr::Missing("DATABASE_URL"))?;

        let report_page_size = match vars.remove("REPORT_PAGE_SIZE") {
            Some(raw) => raw.parse::<i64>().map_err(|e| EnvErr::Invalid {
                var: "REPORT_PAGE_SIZE",
                reason: e.to_string(),
            })?,
            None => DEFAULT_REPORT_PAGE_SIZE,
        };

        if report_page_size < 1 {
            return Err(EnvErr::Invalid {
                var: "REPORT_PAGE_SIZE",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database_url,
            report_page_size,
        })
    }
}

pub type EnvResult<T> = core::result::Result<T, EnvErr>;

#[derive(Debug, Error)]
pub enum EnvErr {
    #[error("missing required environment variable '{0}'")]
    Missing(&'static str),

    #[error("invalid value for environment variable '{var}': {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[cfg(test)]
mod test {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reads_required_and_optional_vars() {
        let env = Env::from_iter(vars(&[
            ("DATABASE_URL", "postgres://localhost/mangrove"),
            ("REPORT_PAGE_SIZE", "250"),
        ]))
        .unwrap();

        assert_eq!(env.database_url, "postgres://localhost/mangrove");
        assert_eq!(env.report_page_size, 250);
    }

    #[test]
    fn page_size_defaults_when_unset() {
        let env = Env::from_iter(vars(&[("DATABASE_URL", "postgres://localhost/mangrove")]))
            .unwrap();

        assert_eq!(env.report_page_size, DEFAULT_REPORT_PAGE_SIZE);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Env::from_iter(vars(&[])).unwrap_err();
        assert!(matches!(err, EnvErr::Missing("DATABASE_URL")));
    }

    #[test]
    fn rejects_unparseable_or_non_positive_page_size() {
        let base = ("DATABASE_URL", "postgres://localhost/mangrove");

        for bad in ["five hundred", "0", "-3"] {
            let err =
                Env::from_iter(vars(&[base, ("REPORT_PAGE_SIZE", bad)])).unwrap_err();
            assert!(matches!(err, EnvErr::Invalid { var: "REPORT_PAGE_SIZE", .. }));
        }
    }
}
