//
// Kornilios Kourtis <kkourt@kkourt.io>
//
// vim: set expandtab softtabstop=4 tabstop=4 shiftwidth=4:
//

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "CLUE_CONFIG";

/// Server configuration (JSON). Missing fields take their default value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub addr: IpAddr,
    pub port: u16,
    /// directory holding index.html and pkg/
    pub static_dir: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::Io(p, e) => write!(f, "cannot read {}: {}", p.display(), e),
            ConfigError::Parse(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 8080,
            static_dir: PathBuf::from("frontend"),
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> Result<Config, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Parse)
    }

    /// No path means defaults
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            None => Ok(Config::default()),
            Some(p) => {
                let s = std::fs::read_to_string(p).map_err(|e| ConfigError::Io(p.to_path_buf(), e))?;
                Config::from_json(&s)
            }
        }
    }

    pub fn sockaddr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn pkg_dir(&self) -> PathBuf {
        self.static_dir.join("pkg")
    }
}

/// first command line argument, then $CLUE_CONFIG
pub fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::load(None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.sockaddr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.index_file(), PathBuf::from("frontend/index.html"));
        assert_eq!(cfg.pkg_dir(), PathBuf::from("frontend/pkg"));
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let cfg = Config::from_json(r#"{"port": 9000, "static_dir": "/srv/clue"}"#).unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.addr, Config::default().addr);
        assert_eq!(cfg.index_file(), PathBuf::from("/srv/clue/index.html"));

        let cfg = Config::from_json(r#"{"addr": "0.0.0.0"}"#).unwrap();
        assert_eq!(cfg.sockaddr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bad_config() {
        assert!(matches!(Config::from_json("{"), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_json(r#"{"port": "x"}"#), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_json(r#"{"addr": "nowhere"}"#), Err(ConfigError::Parse(_))));

        let missing = std::env::temp_dir().join("clue-no-such-config.json");
        assert!(matches!(Config::load(Some(missing.as_path())), Err(ConfigError::Io(_, _))));
    }

    #[test]
    fn load_file() {
        let path = std::env::temp_dir().join(format!("clue-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"port": 8181}"#).unwrap();
        let cfg = Config::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.port, 8181);
    }
}
