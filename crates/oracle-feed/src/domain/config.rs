//! Oracle configuration

use super::{ConfigError, FreshnessPolicy, ThresholdFormula};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Default number of decimals in reported prices
pub const DEFAULT_DECIMALS: u8 = 8;

/// What to do with a signature whose signer cannot be counted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignerPolicy {
    /// Abort admission on the first untrusted or unrecoverable signer
    #[default]
    Strict,
    /// Exclude untrusted or unrecoverable signers and decide on the rest
    SkipUntrusted,
}

impl SignerPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "skip_untrusted" => Some(Self::SkipUntrusted),
            _ => None,
        }
    }
}

/// Oracle configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Human-readable feed name, e.g. "ETH / USD"
    pub description: String,
    pub decimals: u8,
    pub freshness: FreshnessPolicy,
    pub threshold: ThresholdFormula,
    pub signer_policy: SignerPolicy,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            description: String::new(),
            decimals: DEFAULT_DECIMALS,
            freshness: FreshnessPolicy::default(),
            threshold: ThresholdFormula::default(),
            signer_policy: SignerPolicy::default(),
        }
    }
}

impl OracleConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ORACLE_DESCRIPTION`: Feed description (default: empty)
    /// - `ORACLE_DECIMALS`: Price decimals (default: 8)
    /// - `ORACLE_MAX_FUTURE_DRIFT_SECS`: Future tolerance (default: 300)
    /// - `ORACLE_MAX_AGE_SECS`: Maximum observation age (default: 3600)
    /// - `ORACLE_THRESHOLD_FORMULA`: `supermajority_plus_one` (default) or `supermajority`
    /// - `ORACLE_SIGNER_POLICY`: `strict` (default) or `skip_untrusted`
    ///
    /// Unparseable values are logged and replaced by their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`OracleConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            description: lookup("ORACLE_DESCRIPTION").unwrap_or(defaults.description),

            decimals: parse_or(&lookup, "ORACLE_DECIMALS", defaults.decimals, u8::from_str),

            freshness: FreshnessPolicy {
                max_future_drift_secs: parse_or(
                    &lookup,
                    "ORACLE_MAX_FUTURE_DRIFT_SECS",
                    defaults.freshness.max_future_drift_secs,
                    u64::from_str,
                ),
                max_age_secs: parse_or(
                    &lookup,
                    "ORACLE_MAX_AGE_SECS",
                    defaults.freshness.max_age_secs,
                    u64::from_str,
                ),
            },

            threshold: parse_or(
                &lookup,
                "ORACLE_THRESHOLD_FORMULA",
                defaults.threshold,
                |v| ThresholdFormula::parse(v).ok_or(()),
            ),

            signer_policy: parse_or(
                &lookup,
                "ORACLE_SIGNER_POLICY",
                defaults.signer_policy,
                |v| SignerPolicy::parse(v).ok_or(()),
            ),
        }
    }

    /// Reject configurations the admission path cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.freshness.max_age_secs == 0 {
            return Err(ConfigError::ZeroMaxAge);
        }
        Ok(())
    }

    /// Parse a JSON document, then validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::InvalidValue {
            key: "json",
            value: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_or<F, P, T, E>(lookup: &F, key: &'static str, default: T, parse: P) -> T
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, E>,
    T: std::fmt::Debug,
{
    match lookup(key) {
        None => default,
        Some(raw) => match parse(raw.trim()) {
            Ok(value) => value,
            Err(_) => {
                warn!(key, value = %raw, ?default, "invalid config value, using default");
                default
            }
        },
    }
}
