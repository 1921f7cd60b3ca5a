use serde::Deserialize;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

// Runtime/server configuration.
//
// Values come from an optional TOML file named by `ACTIONS_CONFIG`, then from the
// environment, which wins. Empty environment values count as unset.
//
// | Variable            | Default                      |
// |---------------------|------------------------------|
// | `PORT`              | `3000`                       |
// | `BIND_HOST`         | `0.0.0.0`                    |
// | `API_TOKEN`         | unset (all protected = 401)  |
// | `INSTAGRAM_MODE`    | `live`                       |
// | `IG_USER_ID`        | unset                        |
// | `IG_ACCESS_TOKEN`   | unset                        |
// | `IG_GRAPH_BASE_URL` | `https://graph.facebook.com` |
// | `IG_GRAPH_VERSION`  | `v19.0`                      |
// | `IG_TIMEOUT_MS`     | unset (no timeout)           |

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_GRAPH_VERSION: &str = "v19.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstagramMode {
    // Calls the Graph API business discovery endpoint.
    #[default]
    Live,
    // Synthesizes profile and posts locally.
    Mock,
}

impl FromStr for InstagramMode {
    type Err = UnknownInstagramMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(InstagramMode::Live),
            "mock" => Ok(InstagramMode::Mock),
            _ => Err(UnknownInstagramMode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInstagramMode(pub String);

impl fmt::Display for UnknownInstagramMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown instagram mode {:?} (expected live or mock)", self.0)
    }
}

impl std::error::Error for UnknownInstagramMode {}

#[derive(Clone, PartialEq)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    pub api_token: Option<String>,
    pub instagram: InstagramConfig,
}

#[derive(Clone, PartialEq)]
pub struct InstagramConfig {
    pub mode: InstagramMode,
    pub user_id: Option<String>,
    pub access_token: Option<String>,
    pub graph_base_url: String,
    pub graph_version: String,
    // None keeps the upstream call unbounded.
    pub timeout: Option<Duration>,
}

// Secrets stay out of logs.
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("bind_addr", &self.bind_addr)
            .field("api_token_set", &self.api_token.is_some())
            .field("instagram", &self.instagram)
            .finish()
    }
}

impl fmt::Debug for InstagramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstagramConfig")
            .field("mode", &self.mode)
            .field("user_id", &self.user_id)
            .field("access_token_set", &self.access_token.is_some())
            .field("graph_base_url", &self.graph_base_url)
            .field("graph_version", &self.graph_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: String,
        source: std::io::Error,
    },
    Parse {
        path: String,
        source: toml::de::Error,
    },
    Invalid {
        key: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config file {path}: {source}")
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config file {path}: {source}")
            }
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}

// Shape of the optional TOML file; every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    port: Option<u16>,
    bind_host: Option<String>,
    api_token: Option<String>,
    instagram: FileInstagramConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileInstagramConfig {
    mode: Option<InstagramMode>,
    user_id: Option<String>,
    access_token: Option<String>,
    graph_base_url: Option<String>,
    graph_version: Option<String>,
    timeout_ms: Option<u64>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Resolve configuration from any key/value source; tests pass a map instead of the
    // process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let file = match var("ACTIONS_CONFIG") {
            Some(path) => load_file(Path::new(&path))?,
            None => FileConfig::default(),
        };

        let port = match var("PORT") {
            Some(value) => parse_value("PORT", &value)?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };
        let host = var("BIND_HOST")
            .or(file.bind_host)
            .unwrap_or_else(|| DEFAULT_BIND_HOST.to_string());
        let ip: IpAddr = parse_value("BIND_HOST", &host)?;

        let mode = match var("INSTAGRAM_MODE") {
            Some(value) => parse_value("INSTAGRAM_MODE", &value)?,
            None => file.instagram.mode.unwrap_or_default(),
        };
        let timeout_ms = match var("IG_TIMEOUT_MS") {
            Some(value) => Some(parse_value::<u64>("IG_TIMEOUT_MS", &value)?),
            None => file.instagram.timeout_ms,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            api_token: var("API_TOKEN").or(file.api_token),
            instagram: InstagramConfig {
                mode,
                user_id: var("IG_USER_ID").or(file.instagram.user_id),
                access_token: var("IG_ACCESS_TOKEN").or(file.instagram.access_token),
                graph_base_url: var("IG_GRAPH_BASE_URL")
                    .or(file.instagram.graph_base_url)
                    .unwrap_or_else(|| DEFAULT_GRAPH_BASE_URL.to_string()),
                graph_version: var("IG_GRAPH_VERSION")
                    .or(file.instagram.graph_version)
                    .unwrap_or_else(|| DEFAULT_GRAPH_VERSION.to_string()),
                timeout: timeout_ms.map(Duration::from_millis),
            },
        })
    }
}

fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
