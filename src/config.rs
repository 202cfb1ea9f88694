use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub colors: ColorsConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub server_url: String,
    pub poll_interval_ms: u64,
    pub default_mode: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            server_url: "http://127.0.0.1:8082".to_string(),
            poll_interval_ms: 1000,
            default_mode: "live-bars".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub theme: String,
    pub bar_low: String,
    pub bar_mid: String,
    pub bar_high: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            theme: "dark".to_string(),
            bar_low: "#2d5a27".to_string(),
            bar_mid: "#b5890a".to_string(),
            bar_high: "#a12e2e".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub cycle_theme: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            cycle_theme: "t".to_string(),
        }
    }
}

pub fn parse_key(s: &str) -> Option<KeyCode> {
    match s {
        "Enter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Esc),
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("corebars").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.server_url, "http://127.0.0.1:8082");
        assert_eq!(config.general.poll_interval_ms, 1000);
        assert_eq!(config.general.default_mode, "live-bars");
        assert_eq!(config.colors.theme, "dark");
        assert_eq!(config.keybinds.quit, "q");
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[general]
poll_interval_ms = 500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.poll_interval_ms, 500);
        // Other fields should be defaults
        assert_eq!(config.general.server_url, "http://127.0.0.1:8082");
        assert_eq!(config.colors.theme, "dark");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r##"
[general]
server_url = "https://metrics.example.net"
poll_interval_ms = 250
default_mode = "poll-bars"

[colors]
theme = "light"
bar_high = "#ff0000"

[keybinds]
quit = "x"
"##;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.server_url, "https://metrics.example.net");
        assert_eq!(config.general.poll_interval_ms, 250);
        assert_eq!(config.general.default_mode, "poll-bars");
        assert_eq!(config.colors.theme, "light");
        assert_eq!(config.colors.bar_high, "#ff0000");
        assert_eq!(config.keybinds.quit, "x");
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.general.poll_interval_ms, 1000);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("corebars_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.general.poll_interval_ms, 1000);
        let _ = std::fs::remove_file(&temp);
    }

    #[test]
    fn parse_key_variants() {
        assert_eq!(parse_key("q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("Enter"), Some(KeyCode::Enter));
        assert_eq!(parse_key("Esc"), Some(KeyCode::Esc));
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("longword"), None);
    }
}
