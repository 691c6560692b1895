use serde::Deserialize;

use crate::error::BackgroundError;
use crate::palette::IMAGE_BACKDROP;

pub const DEFAULT_CANVAS_ID: &str = "bgCanvas";

/// Built-in decorative images, relative to the page.
pub const DEFAULT_IMAGES: [&str; 16] = [
    "assets/heads/inv1.png",
    "assets/heads/inv2-eve.png",
    "assets/heads/inv3-man.png",
    "assets/heads/inv4.png",
    "assets/heads/inv5.png",
    "assets/heads/inv6.png",
    "assets/heads/inv7.png",
    "assets/heads/inv8.png",
    "assets/heads/inv9.png",
    "assets/heads/inv10.png",
    "assets/heads/inv11.png",
    "assets/heads/inv12.png",
    "assets/heads/inv13.png",
    "assets/heads/inv14.png",
    "assets/heads/inv15.png",
    "assets/heads/inv16.png",
];

/// How images reach the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Load the whole set once, then paint images or the polygon fallback.
    #[default]
    Preload,
    /// Paint each image as soon as its own load finishes. No fallback.
    Eager,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Most verbose level to emit, `None` when logging is off.
    pub fn as_level(self) -> Option<log::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(log::Level::Error),
            LogLevel::Warn => Some(log::Level::Warn),
            LogLevel::Info => Some(log::Level::Info),
            LogLevel::Debug => Some(log::Level::Debug),
            LogLevel::Trace => Some(log::Level::Trace),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Id of the `<canvas>` element to paint.
    pub canvas_id: String,
    /// Image URLs, in the order loads are started.
    pub images: Vec<String>,
    pub mode: RenderMode,
    /// Fill painted under the images.
    pub background: String,
    pub log_level: LogLevel,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
            mode: RenderMode::default(),
            background: IMAGE_BACKDROP.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl BackgroundConfig {
    /// Parse a JSON object; missing fields keep their defaults. Blank input means all defaults.
    pub fn from_json(json: &str) -> Result<Self, BackgroundError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_builtin_assets() {
        let cfg = BackgroundConfig::default();
        assert_eq!(cfg.canvas_id, "bgCanvas");
        assert_eq!(cfg.images.len(), 16);
        assert_eq!(cfg.images[1], "assets/heads/inv2-eve.png");
        assert_eq!(cfg.mode, RenderMode::Preload);
        assert_eq!(cfg.background, "#021225");
    }

    #[test]
    fn blank_json_is_default() {
        assert_eq!(BackgroundConfig::from_json("  ").unwrap(), BackgroundConfig::default());
        assert_eq!(BackgroundConfig::from_json("{}").unwrap(), BackgroundConfig::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let cfg = BackgroundConfig::from_json(
            r#"{"canvas_id":"hero","mode":"eager","images":["a.png"],"log_level":"debug"}"#,
        )
        .unwrap();
        assert_eq!(cfg.canvas_id, "hero");
        assert_eq!(cfg.mode, RenderMode::Eager);
        assert_eq!(cfg.images, vec!["a.png".to_string()]);
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.background, "#021225");
    }

    #[test]
    fn log_levels_map_to_console_levels() {
        assert_eq!(LogLevel::Off.as_level(), None);
        assert_eq!(LogLevel::Warn.as_level(), Some(log::Level::Warn));
        assert_eq!(LogLevel::default().as_level(), Some(log::Level::Info));
    }

    #[test]
    fn bad_mode_is_config_error() {
        let err = BackgroundConfig::from_json(r#"{"mode":"animated"}"#).unwrap_err();
        assert!(matches!(err, BackgroundError::Config(_)));
    }
}
