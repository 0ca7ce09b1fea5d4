use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional config file mirroring the CLI flags. Each value applies only
/// where the corresponding flag was not given on the command line.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    #[serde(default)]
    pub(crate) limit: Option<u32>,
    #[serde(default)]
    pub(crate) timeout: Option<u64>,
    #[serde(default)]
    pub(crate) json_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) csv_path: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        eprintln!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/sxfetch/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("sxfetch").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/sxfetch/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("sxfetch").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.sxfetch.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".sxfetch.toml"));
        }

        paths
    }
}
