//! Configuration loading and resolution.
//!
//! Every setting resolves as: explicit flag, then environment, then default.

use std::time::Duration;

use anyhow::{Context, Result};
use wowarmory::client::{ClientOptions, DEFAULT_ARMORY_URL, DEFAULT_STATUS_URL};

pub const ENV_ARMORY_URL: &str = "ARMORY_URL";
pub const ENV_STATUS_URL: &str = "ARMORY_STATUS_URL";
pub const ENV_TIMEOUT_MS: &str = "ARMORY_TIMEOUT_MS";

/// Settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigFlags {
    pub armory_url: Option<String>,
    pub status_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

/// Resolve client options from flags and the process environment.
pub fn resolve_options(flags: &ConfigFlags) -> Result<ClientOptions> {
    resolve_options_from(flags, |key| std::env::var(key).ok())
}

/// Resolve client options, reading environment variables through `env`.
pub fn resolve_options_from<F>(flags: &ConfigFlags, env: F) -> Result<ClientOptions>
where
    F: Fn(&str) -> Option<String>,
{
    let armory_url = resolve_url(
        flags.armory_url.as_deref(),
        env(ENV_ARMORY_URL),
        DEFAULT_ARMORY_URL,
    )
    .with_context(|| format!("invalid armory URL (--armory-url / {ENV_ARMORY_URL})"))?;
    let status_url = resolve_url(
        flags.status_url.as_deref(),
        env(ENV_STATUS_URL),
        DEFAULT_STATUS_URL,
    )
    .with_context(|| format!("invalid status URL (--status-url / {ENV_STATUS_URL})"))?;

    let timeout_ms = match flags.timeout_ms {
        Some(ms) => Some(ms),
        None => env(ENV_TIMEOUT_MS)
            .map(|raw| {
                raw.trim().parse::<u64>().with_context(|| {
                    format!("{ENV_TIMEOUT_MS} must be a number of milliseconds, got '{raw}'")
                })
            })
            .transpose()?,
    };

    Ok(ClientOptions {
        armory_url,
        status_url,
        // 0 means wait forever, same as leaving it unset.
        timeout: timeout_ms.filter(|ms| *ms > 0).map(Duration::from_millis),
    })
}

fn resolve_url(explicit: Option<&str>, env_value: Option<String>, default: &str) -> Result<String> {
    let raw = explicit
        .map(str::to_string)
        .or(env_value)
        .unwrap_or_else(|| default.to_string());
    url::Url::parse(&raw).with_context(|| format!("'{raw}' is not a valid URL"))?;
    Ok(raw)
}
