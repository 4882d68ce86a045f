//! Startup configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_RPS_SEED` | unset | Seed the opponent for a reproducible game |
//! | `TUI_RPS_HISTORY` | `3` | Rounds kept in the on-screen history (1 to 64) |
//! | `TUI_RPS_LOG_PATH` | unset | Write `tracing` output to this file |
//!
//! Malformed values fall back to the defaults.

use crate::types::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub history_capacity: usize,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TUI_RPS_SEED").and_then(|s| s.trim().parse().ok());

        let history_capacity = lookup("TUI_RPS_HISTORY")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_HISTORY_CAPACITY)
            .clamp(1, MAX_HISTORY_CAPACITY);

        let log_path = lookup("TUI_RPS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            history_capacity,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn parses_all_variables() {
        let cfg = config(&[
            ("TUI_RPS_SEED", "42"),
            ("TUI_RPS_HISTORY", " 6 "),
            ("TUI_RPS_LOG_PATH", "/tmp/rps.log"),
        ]);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.history_capacity, 6);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/rps.log"));
    }

    #[test]
    fn malformed_values_fall_back() {
        let cfg = config(&[
            ("TUI_RPS_SEED", "not-a-number"),
            ("TUI_RPS_HISTORY", "-1"),
            ("TUI_RPS_LOG_PATH", "   "),
        ]);
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn zero_history_is_clamped() {
        assert_eq!(config(&[("TUI_RPS_HISTORY", "0")]).history_capacity, 1);
    }

    #[test]
    fn huge_history_is_capped() {
        assert_eq!(
            config(&[("TUI_RPS_HISTORY", "65535")]).history_capacity,
            MAX_HISTORY_CAPACITY
        );
        let max = usize::MAX.to_string();
        assert_eq!(
            config(&[("TUI_RPS_HISTORY", &max)]).history_capacity,
            MAX_HISTORY_CAPACITY
        );
    }
}
