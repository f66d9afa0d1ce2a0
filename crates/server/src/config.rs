use std::{env, path::PathBuf, str::FromStr, time::Duration};

use courier::sequencer::Fallback;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_WAKEUP_INTERVAL: Duration = Duration::from_secs(14 * 60);
const TRUTHY: [&str; 5] = ["1", "true", "yes", "y", "on"];
const BASE_URL_KEYS: [&str; 3] = ["BACKEND_URL", "PUBLIC_URL", "RENDER_EXTERNAL_URL"];

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wakeup {
    pub target: String,
    pub interval: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub fallback: Fallback,
    pub wakeup: Option<Wakeup>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            port: try_load(&var, "PORT", DEFAULT_PORT)?,
            seed_path: var("ORDERS_SEED_PATH").map(PathBuf::from),
            fallback: try_load(&var, "ROUTE_FALLBACK", Fallback::default())?,
            wakeup: load_wakeup(&var),
        })
    }
}

fn try_load<F, T>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidValue {
                key,
                value,
                reason: err.to_string(),
            }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn load_wakeup<F>(var: &F) -> Option<Wakeup>
where
    F: Fn(&str) -> Option<String>,
{
    if !var("WAKEUP_ENABLED").is_some_and(|value| to_boolean(&value)) {
        return None;
    }

    let interval = match var("WAKEUP_INTERVAL_MS") {
        None => DEFAULT_WAKEUP_INTERVAL,
        Some(value) => match value.trim().parse::<u64>() {
            Ok(millis) if millis > 0 => Duration::from_millis(millis),
            _ => {
                warn!("Invalid WAKEUP_INTERVAL_MS value {value:?}, using default");
                DEFAULT_WAKEUP_INTERVAL
            }
        },
    };

    let target = var("WAKEUP_URL").or_else(|| {
        BASE_URL_KEYS
            .iter()
            .find_map(|key| var(*key))
            .map(|base| format!("{}/health", normalize_base_url(&base)))
    });

    match target {
        Some(target) => Some(Wakeup { target, interval }),
        None => {
            warn!(
                "WAKEUP_ENABLED is set but none of WAKEUP_URL, {} is provided",
                BASE_URL_KEYS.join(", ")
            );
            None
        }
    }
}

fn to_boolean(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    TRUTHY.contains(&value.as_str())
}

fn normalize_base_url(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}
