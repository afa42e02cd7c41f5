use anyhow::{Context, bail};
use football_api::client::DEFAULT_DOMAIN;
use football_api::transport::DEFAULT_TIMEOUT;
use std::fmt;
use std::time::Duration;

pub const KEY_VAR: &str = "API_FOOTBALL_KEY";
pub const DOMAIN_VAR: &str = "API_FOOTBALL_DOMAIN";
pub const TIMEOUT_VAR: &str = "API_FOOTBALL_TIMEOUT_SECS";

#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub domain: String,
    pub timeout: Duration,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let set = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let Some(api_key) = set(KEY_VAR) else {
            bail!("{KEY_VAR} is not set");
        };
        let domain = set(DOMAIN_VAR).unwrap_or_else(|| DEFAULT_DOMAIN.to_owned());
        let timeout = match set(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{TIMEOUT_VAR} must be a whole number of seconds"))?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self { api_key, domain, timeout })
    }
}
