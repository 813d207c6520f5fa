use std::fs;
use std::io;
use std::path::PathBuf;

use crate::models::Config;

fn config_file_path() -> PathBuf {
    directories::ProjectDirs::from("com", "marquee", "Marquee")
        .map(|dirs| dirs.data_dir().join("marquee_config.txt"))
        .unwrap_or_else(|| PathBuf::from("marquee_config.txt"))
}

pub fn default_config() -> Config {
    Config {
        theme: "dark".to_string(),
        font_scale: 1.0,
        active_profile_index: 0,
    }
}

/// Read the key=value config file, falling back to defaults per key.
pub fn read_config() -> Config {
    let mut cfg = default_config();
    let Ok(content) = fs::read_to_string(config_file_path()) else {
        return cfg;
    };
    for line in content.lines() {
        if let Some((k, v)) = line.split_once('=') {
            match k.trim() {
                "theme" => cfg.theme = v.trim().to_string(),
                "font_scale" => cfg.font_scale = v.trim().parse::<f32>().unwrap_or(1.0),
                "active_profile_index" => {
                    cfg.active_profile_index = v.trim().parse::<usize>().unwrap_or(0)
                }
                _ => {}
            }
        }
    }
    if cfg.theme != "light" {
        cfg.theme = "dark".to_string();
    }
    cfg
}

pub fn save_config(cfg: &Config) -> io::Result<()> {
    let path = config_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = format!(
        "theme={}\nfont_scale={}\nactive_profile_index={}\n",
        cfg.theme, cfg.font_scale, cfg.active_profile_index
    );
    fs::write(path, content)
}
