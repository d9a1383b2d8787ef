//! Settings resolution
//!
//! Connection settings are resolved once per invocation from `S3_*`
//! environment variables, then individual fields may be overridden by CLI
//! flags. There is no config file and no ambient global state: the resolved
//! record is passed by value to whoever needs it.
//!
//! No validation is performed on the endpoint URL or credentials; a wrong
//! value surfaces as a failure from the store call that uses it.

/// Default endpoint when `S3_ENDPOINT` is unset (local MinIO).
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:9000";

/// Default region when `S3_REGION` is unset.
const DEFAULT_REGION: &str = "us-east-1";

/// Resolved connection settings for an S3-compatible endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Endpoint URL
    pub endpoint: String,

    /// Access key ID (empty when unset)
    pub access_key: String,

    /// Secret access key (empty when unset)
    pub secret_key: String,

    /// Region name
    pub region: String,

    /// Whether to verify TLS certificates
    pub verify_ssl: bool,
}

/// Per-field overrides from CLI flags
///
/// A field only takes effect when it is `Some`; an omitted flag never
/// clobbers the environment-derived value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub region: Option<String>,
    pub verify_ssl: Option<bool>,
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through a caller-supplied variable lookup
    ///
    /// Tests use this to resolve settings without touching the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            endpoint: lookup("S3_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            access_key: lookup("S3_ACCESS_KEY").unwrap_or_default(),
            secret_key: lookup("S3_SECRET_KEY").unwrap_or_default(),
            region: lookup("S3_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            verify_ssl: parse_bool(lookup("S3_VERIFY_SSL").as_deref(), true),
        }
    }

    /// Apply CLI overrides, consuming and returning the settings
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(endpoint) = &overrides.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(access_key) = &overrides.access_key {
            self.access_key = access_key.clone();
        }
        if let Some(secret_key) = &overrides.secret_key {
            self.secret_key = secret_key.clone();
        }
        if let Some(region) = &overrides.region {
            self.region = region.clone();
        }
        if let Some(verify_ssl) = overrides.verify_ssl {
            self.verify_ssl = verify_ssl;
        }
        self
    }
}

/// Parse a truthy environment string
///
/// `1`, `true`, `yes`, and `on` (case-insensitive, surrounding whitespace
/// ignored) are true; any other set value is false; `None` yields `default`.
pub fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_bool_truthy() {
        for v in ["1", "true", "yes", "on", "TRUE", "Yes", "ON", " true "] {
            assert!(parse_bool(Some(v), false), "{v} should be true");
        }
    }

    #[test]
    fn test_parse_bool_falsy() {
        for v in ["0", "false", "no", "off", "2", "", "enabled"] {
            assert!(!parse_bool(Some(v), true), "{v} should be false");
        }
    }

    #[test]
    fn test_parse_bool_unset_uses_default() {
        assert!(parse_bool(None, true));
        assert!(!parse_bool(None, false));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.endpoint, "http://127.0.0.1:9000");
        assert_eq!(settings.access_key, "");
        assert_eq!(settings.secret_key, "");
        assert_eq!(settings.region, "us-east-1");
        assert!(settings.verify_ssl);
    }

    #[test]
    fn test_from_lookup_reads_env() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("S3_ENDPOINT", "https://minio.example.com"),
            ("S3_ACCESS_KEY", "minioadmin"),
            ("S3_SECRET_KEY", "minioadmin"),
            ("S3_REGION", "eu-west-1"),
            ("S3_VERIFY_SSL", "no"),
        ]));
        assert_eq!(settings.endpoint, "https://minio.example.com");
        assert_eq!(settings.access_key, "minioadmin");
        assert_eq!(settings.secret_key, "minioadmin");
        assert_eq!(settings.region, "eu-west-1");
        assert!(!settings.verify_ssl);
    }

    #[test]
    fn test_overrides_apply_only_when_set() {
        let base = Settings::from_lookup(lookup_from(&[
            ("S3_ENDPOINT", "http://env:9000"),
            ("S3_REGION", "env-region"),
        ]));

        let settings = base.clone().with_overrides(&Overrides {
            region: Some("flag-region".to_string()),
            verify_ssl: Some(false),
            ..Default::default()
        });

        // Overridden fields change, omitted flags keep the env values.
        assert_eq!(settings.region, "flag-region");
        assert!(!settings.verify_ssl);
        assert_eq!(settings.endpoint, "http://env:9000");
        assert_eq!(settings.access_key, "");

        let untouched = base.clone().with_overrides(&Overrides::default());
        assert_eq!(untouched, base);
    }
}
