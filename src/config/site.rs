//! Site configuration (site.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid listen address {0:?}, expected [host]:port")]
    InvalidAddr(String),

    #[error("listen port must be greater than 1024, got {0}")]
    PrivilegedPort(u16),
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // Server
    pub addr: String,
    pub assets_dir: String,

    // Directory
    pub posts_dir: String,
    pub output_dir: String,
    /// Write static files instead of serving
    pub output: bool,

    // Go vanity imports
    pub module_prefix: String,
    pub repo_base: String,
    pub modules: Vec<ModuleConfig>,
}

/// A Go module served from the vanity domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Import path below the module prefix, e.g. `x`
    pub name: String,
    /// Repository name below the repo base, e.g. `exp`
    pub repo: String,
}

impl ModuleConfig {
    pub fn new(name: &str, repo: &str) -> Self {
        Self {
            name: name.to_string(),
            repo: repo.to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "chrisrx.dev".to_string(),
            author: "ChrisRx".to_string(),

            addr: ":8080".to_string(),
            assets_dir: String::new(),

            posts_dir: "posts".to_string(),
            output_dir: ".".to_string(),
            output: false,

            module_prefix: "go.chrisrx.dev".to_string(),
            repo_base: "https://github.com/ChrisRx".to_string(),
            modules: vec![
                ModuleConfig::new("ptr", "ptr-go"),
                ModuleConfig::new("x", "exp"),
                ModuleConfig::new("leaselock", "leaselock"),
                ModuleConfig::new("log", "log-go"),
                ModuleConfig::new("group", "group-go"),
                ModuleConfig::new("quake-kube", "quake-kube"),
                ModuleConfig::new("result", "result-go"),
                ModuleConfig::new("run", "run-go"),
                ModuleConfig::new("tools", "tools-go"),
                ModuleConfig::new("webos", "webos"),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `site.yml` from `base_dir`, or the defaults when it is absent
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self, ConfigError> {
        let path = base_dir.as_ref().join("site.yml");
        if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve and validate the listen address
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_addr(&self.addr)
    }

    /// Look up a module by its name
    pub fn module(&self, name: &str) -> Option<&ModuleConfig> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Full import path of a module, e.g. `go.chrisrx.dev/x`
    pub fn import_path(&self, module: &ModuleConfig) -> String {
        format!("{}/{}", self.module_prefix.trim_end_matches('/'), module.name)
    }

    /// Repository URL of a module
    pub fn repo_url(&self, module: &ModuleConfig) -> String {
        format!("{}/{}", self.repo_base.trim_end_matches('/'), module.repo)
    }
}

/// Parse `[host]:port`; an empty host listens on all interfaces
fn parse_addr(addr: &str) -> Result<SocketAddr, ConfigError> {
    let invalid = || ConfigError::InvalidAddr(addr.to_string());

    let (host, port) = addr.rsplit_once(':').ok_or_else(invalid)?;
    let port: u16 = port.parse().map_err(|_| invalid())?;
    if port <= 1024 {
        return Err(ConfigError::PrivilegedPort(port));
    }

    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() {
        return Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port));
    }
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    (host, port)
        .to_socket_addrs()
        .map_err(|_| invalid())?
        .next()
        .ok_or_else(invalid)
}
