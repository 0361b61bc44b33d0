use axum_extra::extract::cookie::Key;
use std::net::SocketAddr;

use crate::error::{AppError, Result};

pub const DEFAULT_DATABASE_PATH: &str = "./data";
pub const DEFAULT_EXPENSES_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_TODOS_ADDR: &str = "127.0.0.1:5001";

fn parse_addr(name: &str, value: &str) -> Result<SocketAddr> {
    value
        .parse()
        .map_err(|e| AppError::Config(format!("{name}={value:?} is not a socket address: {e}")))
}

#[derive(Debug, Clone)]
pub struct ExpensesConfig {
    pub database_path: String,
    pub addr: SocketAddr,
}

impl ExpensesConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_path =
            lookup("DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        let addr = lookup("EXPENSES_ADDR").unwrap_or_else(|| DEFAULT_EXPENSES_ADDR.to_string());

        Ok(Self {
            database_path,
            addr: parse_addr("EXPENSES_ADDR", &addr)?,
        })
    }
}

#[derive(Clone)]
pub struct TodosConfig {
    pub addr: SocketAddr,
    /// Cookie key for flash messages; generated per process when unset.
    pub flash_key: Key,
}

impl TodosConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = lookup("TODOS_ADDR").unwrap_or_else(|| DEFAULT_TODOS_ADDR.to_string());

        let flash_key = match lookup("FLASH_SECRET") {
            Some(secret) => Key::try_from(secret.as_bytes()).map_err(|_| {
                AppError::Config("FLASH_SECRET must be at least 64 bytes".to_string())
            })?,
            None => Key::generate(),
        };

        Ok(Self {
            addr: parse_addr("TODOS_ADDR", &addr)?,
            flash_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_expenses_defaults() {
        let config = ExpensesConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_path, "./data");
        assert_eq!(config.addr.port(), 5000);
    }

    #[test]
    fn test_expenses_overrides() {
        let config = ExpensesConfig::from_lookup(lookup_from(&[
            ("DATABASE_PATH", "/tmp/expenses-db"),
            ("EXPENSES_ADDR", "0.0.0.0:8080"),
        ]))
        .unwrap();
        assert_eq!(config.database_path, "/tmp/expenses-db");
        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_bad_address_is_config_error() {
        let result = ExpensesConfig::from_lookup(lookup_from(&[("EXPENSES_ADDR", "nowhere")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_todos_defaults() {
        let config = TodosConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr.port(), 5001);
    }

    #[test]
    fn test_short_flash_secret_rejected() {
        let result = TodosConfig::from_lookup(lookup_from(&[("FLASH_SECRET", "dev")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_long_flash_secret_accepted() {
        let secret = "x".repeat(64);
        let result = TodosConfig::from_lookup(lookup_from(&[("FLASH_SECRET", secret.as_str())]));
        assert!(result.is_ok());
    }
}
