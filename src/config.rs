use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CHAPTERS_DIR: &str = "chapters";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_STATIC_URL_PATH: &str = "/static";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Contents of `reader.toml`. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub chapters_dir: Option<String>,
    pub static_dir: Option<String>,
    pub static_url_path: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Resolved configuration handed to every component at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Directory holding `chap<N>.txt` files
    pub chapters_dir: PathBuf,
    /// Directory holding companion images, served publicly
    pub static_dir: PathBuf,
    /// URL prefix the static directory is mounted under, e.g. `/static`
    pub static_url_path: String,
    pub host: String,
    pub port: u16,
}

impl ReaderConfig {
    /// Defaults rooted at `base`.
    pub fn rooted_at(base: &Path) -> Self {
        Self {
            chapters_dir: base.join(DEFAULT_CHAPTERS_DIR),
            static_dir: base.join(DEFAULT_STATIC_DIR),
            static_url_path: DEFAULT_STATIC_URL_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Merge a parsed config file over the defaults. Relative directories
    /// resolve against `base`.
    pub fn from_file(file: &ConfigFile, base: &Path) -> Self {
        let mut config = Self::rooted_at(base);
        if let Some(dir) = &file.chapters_dir {
            config.chapters_dir = base.join(dir);
        }
        if let Some(dir) = &file.static_dir {
            config.static_dir = base.join(dir);
        }
        if let Some(prefix) = &file.static_url_path {
            config.static_url_path = normalize_url_path(prefix);
        }
        if let Some(host) = &file.host {
            config.host = host.clone();
        }
        if let Some(port) = file.port {
            config.port = port;
        }
        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Leading slash, no trailing slash. An empty or all-slash prefix maps to
/// the default.
pub fn normalize_url_path(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_STATIC_URL_PATH.to_string();
    }
    format!("/{}", trimmed)
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("reader.toml")
}

pub fn load_config_file(path: Option<&Path>) -> anyhow::Result<Option<ConfigFile>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Load `reader.toml` (or the given path) and resolve it. Without a config
/// file, defaults are rooted at the current directory.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ReaderConfig> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    match load_config_file(Some(&path))? {
        Some(file) => {
            tracing::debug!("Loaded config from {}", path.display());
            Ok(ReaderConfig::from_file(&file, &base))
        }
        None => Ok(ReaderConfig::rooted_at(Path::new("."))),
    }
}

pub fn write_config(path: &Path, config: &ConfigFile, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// The file `init` writes: every default spelled out.
pub fn default_config_file() -> ConfigFile {
    ConfigFile {
        chapters_dir: Some(DEFAULT_CHAPTERS_DIR.to_string()),
        static_dir: Some(DEFAULT_STATIC_DIR.to_string()),
        static_url_path: Some(DEFAULT_STATIC_URL_PATH.to_string()),
        host: Some(DEFAULT_HOST.to_string()),
        port: Some(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_url_path() {
        assert_eq!(normalize_url_path("static"), "/static");
        assert_eq!(normalize_url_path("/assets/"), "/assets");
        assert_eq!(normalize_url_path("/"), "/static");
        assert_eq!(normalize_url_path(""), "/static");
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("reader.toml"))).unwrap();
        assert_eq!(config, ReaderConfig::rooted_at(Path::new(".")));
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_config_file_resolves_relative_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reader.toml");
        std::fs::write(
            &path,
            "chapters_dir = \"book\"\nstatic_url_path = \"img/\"\nport = 8080\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.chapters_dir, dir.path().join("book"));
        assert_eq!(config.static_dir, dir.path().join("static"));
        assert_eq!(config.static_url_path, "/img");
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reader.toml");

        write_config(&path, &default_config_file(), false).unwrap();
        assert!(write_config(&path, &default_config_file(), false).is_err());
        write_config(&path, &default_config_file(), true).unwrap();

        let parsed = load_config_file(Some(&path)).unwrap().unwrap();
        assert_eq!(parsed, default_config_file());
    }
}
