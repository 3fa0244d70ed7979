// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! The configuration file is managed by `confy` and holds everything the
//! card displays: the title, the hidden message, the slides and the music.
//! Missing fields take their default values, so a partial file is fine.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use walkdir::WalkDir;

pub(crate) const CONFIG_NAME: &str = "keepsake";

const DEFAULT_SLIDE_INTERVAL_MS: u64 = 4000;
const DEFAULT_HEARTS: usize = 15;
const DEFAULT_SLIDE_COUNT: usize = 8;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Debug, Error, PartialEq)]
pub(crate) enum ConfigError {
    #[error("no slides configured")]
    NoSlides,

    #[error("no images found in slide directory {0}")]
    EmptySlideDir(PathBuf),

    #[error("slide interval must be greater than zero")]
    ZeroInterval,

    #[error("audio locator is empty")]
    NoAudio,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) slides: Vec<String>,
    pub(crate) slide_dir: Option<PathBuf>,
    pub(crate) slide_interval_ms: u64,
    pub(crate) audio: String,
    pub(crate) hearts: usize,
    pub(crate) log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            title: "Happy Anniversary Baby Boo".to_string(),
            message: "Every moment with you is my favorite memory. You make my world \
                      brighter, my days happier, and my heart fuller. Here's to us, \
                      forever and always."
                .to_string(),
            slides: (1..=DEFAULT_SLIDE_COUNT)
                .map(|n| format!("Assets/{}.jpg", n))
                .collect(),
            slide_dir: None,
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            audio: "Assets/music.mp3".to_string(),
            hearts: DEFAULT_HEARTS,
            log_file: PathBuf::from("keepsake.log"),
        }
    }
}

impl AppConfig {
    pub(crate) fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_interval_ms)
    }

    /// Checks the settings that would otherwise leave the card unusable.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.slide_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.audio.trim().is_empty() {
            return Err(ConfigError::NoAudio);
        }
        if self.slide_dir.is_none() && self.slides.is_empty() {
            return Err(ConfigError::NoSlides);
        }
        Ok(())
    }

    /// Returns the ordered slide set.
    ///
    /// When `slide_dir` is set the images found beneath it, sorted by path,
    /// replace the explicit `slides` list.
    pub(crate) fn resolve_slides(&self) -> Result<Vec<String>, ConfigError> {
        let slides = match &self.slide_dir {
            Some(dir) => {
                let found = scan_slide_dir(dir);
                if found.is_empty() {
                    return Err(ConfigError::EmptySlideDir(dir.clone()));
                }
                found
            }
            None => self.slides.clone(),
        };

        if slides.is_empty() {
            return Err(ConfigError::NoSlides);
        }

        Ok(slides)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn scan_slide_dir(dir: &Path) -> Vec<String> {
    let mut images: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable slide directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_image(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    images.sort();

    images
        .into_iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect()
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_match_the_card() {
        let config = AppConfig::default();
        assert_eq!(config.slides.len(), 8);
        assert_eq!(config.slides[0], "Assets/1.jpg");
        assert_eq!(config.slide_interval(), Duration::from_millis(4000));
        assert_eq!(config.hearts, 15);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_unusable_settings() {
        let config = AppConfig {
            slide_interval_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));

        let config = AppConfig {
            slides: vec![],
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoSlides));
        assert_eq!(config.resolve_slides(), Err(ConfigError::NoSlides));

        let config = AppConfig {
            audio: "  ".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoAudio));
    }

    #[test]
    fn slide_dir_replaces_explicit_slides() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.JPG"), b"").unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();
        fs::write(dir.path().join("nested/c.webp"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let config = AppConfig {
            slide_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };

        let slides = config.resolve_slides().unwrap();
        let names: Vec<String> = slides
            .iter()
            .map(|s| {
                Path::new(s)
                    .strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "nested/c.webp"]);
    }

    #[test]
    fn empty_slide_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            slide_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolve_slides(),
            Err(ConfigError::EmptySlideDir(dir.path().to_path_buf()))
        );
    }

    #[test]
    fn partial_file_uses_defaults() {
        let config: AppConfig =
            load_partial(&[("title", "Hi"), ("slide_interval_ms", "2500")]);
        assert_eq!(config.title, "Hi");
        assert_eq!(config.slide_interval_ms, 2500);
        assert_eq!(config.audio, AppConfig::default().audio);
    }

    // Stores a partial file through confy and reads it back.
    fn load_partial(fields: &[(&str, &str)]) -> AppConfig {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        let body: String = fields
            .iter()
            .map(|(k, v)| match v.parse::<u64>() {
                Ok(n) => format!("{} = {}\n", k, n),
                Err(_) => format!("{} = \"{}\"\n", k, v),
            })
            .collect();
        fs::write(&path, body).unwrap();
        confy::load_path(&path).unwrap()
    }
}
