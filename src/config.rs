//! User configuration — animation tuning and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/silkscroll/config.toml` (default
//! `~/.config/silkscroll/config.toml`).  Unknown keys and malformed values
//! fall back to defaults; there is no hard failure path for config.

use std::path::PathBuf;

/// Application configuration — animation tuning knobs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Damping factor per frame, in (0, 1].  Smaller = smoother / laggier.
    pub easing: f64,
    /// Frame clock rate in frames per second.
    pub frame_rate: u32,
    /// Rows of real scroll per mouse-wheel notch.
    pub wheel_step: f64,
    /// How many alternating sections the page shows.
    pub sections: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            easing: 0.1,
            frame_rate: 60,
            wheel_step: 3.0,
            sections: 6,
        }
    }
}

impl AppConfig {
    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse(&contents);
            }
        }
        Self::default()
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "easing" => {
                    if let Ok(v) = value.parse::<f64>() {
                        config.easing = v.clamp(0.01, 1.0);
                    }
                }
                "frame_rate" => {
                    if let Ok(v) = value.parse::<u32>() {
                        // Keep this bounded for predictable pacing.
                        config.frame_rate = v.clamp(1, 240);
                    }
                }
                "wheel_step" => {
                    if let Ok(v) = value.parse::<f64>() {
                        config.wheel_step = v.clamp(0.0, 100.0);
                    }
                }
                "sections" => {
                    if let Ok(v) = value.parse::<usize>() {
                        config.sections = v.clamp(1, 100);
                    }
                }
                _ => {}
            }
        }

        config
    }

    fn serialise(&self) -> String {
        [
            "# silkscroll configuration".to_string(),
            String::new(),
            "# Animation".to_string(),
            format!("easing = {}", self.easing),
            format!("frame_rate = {}", self.frame_rate),
            format!("wheel_step = {}", self.wheel_step),
            String::new(),
            "# Content".to_string(),
            format!("sections = {}", self.sections),
            String::new(),
        ]
        .join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/silkscroll/config.toml`).
pub(crate) fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("silkscroll").join("config.toml")
}
