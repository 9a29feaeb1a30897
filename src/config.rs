//! Widget configuration. Defaults match the stock page layout; the host
//! element's inline size wins when it is a plain pixel length.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: f64 = 668.0;
pub const DEFAULT_HEIGHT: f64 = 522.0;
/// Dot radius; dots are 8 units across.
pub const DEFAULT_BRUSH_RADIUS: f64 = 4.0;
pub const DEFAULT_BORDER_WIDTH: f64 = 5.0;
pub const DEFAULT_SELECTOR: &str = ".paint";
/// Smallest accepted brush radius; below this a stroke would need an
/// unbounded number of dots.
pub const MIN_BRUSH_RADIUS: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurfaceConfig {
    /// CSS selector of the host region.
    pub selector: String,
    pub width: f64,
    pub height: f64,
    pub brush_radius: f64,
    pub border_width: f64,
    pub border_color: String,
    pub background: String,
    pub palette_label: String,
    pub clear_label: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: "black".to_string(),
            background: "white".to_string(),
            palette_label: "Цвета: ".to_string(),
            clear_label: "Очистить рисунок".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    InvalidSize { width: f64, height: f64 },
    InvalidBrushRadius(f64),
    EmptySelector,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize { width, height } => {
                write!(f, "invalid surface size {}x{}", width, height)
            }
            ConfigError::InvalidBrushRadius(r) => write!(f, "invalid brush radius {}", r),
            ConfigError::EmptySelector => write!(f, "empty host selector"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SurfaceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        let max_radius = self.width.min(self.height) / 2.0;
        if !ok(self.brush_radius)
            || self.brush_radius < MIN_BRUSH_RADIUS
            || self.brush_radius > max_radius
        {
            return Err(ConfigError::InvalidBrushRadius(self.brush_radius));
        }
        if self.selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        Ok(())
    }

    /// Apply the host element's inline `style.width` / `style.height`.
    /// Values that are not pixel lengths leave the configured size alone.
    pub fn with_host_size(mut self, style_width: &str, style_height: &str) -> Self {
        if let Some(w) = parse_px(style_width) {
            self.width = w;
        }
        if let Some(h) = parse_px(style_height) {
            self.height = h;
        }
        self
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let cfg: SurfaceConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        cfg.validate().map_err(|e| e.to_string())?;
        Ok(cfg)
    }
}

/// Parse `"668px"` / `"668"` into a positive length.
pub fn parse_px(s: &str) -> Option<f64> {
    let s = s.trim();
    let num = s.strip_suffix("px").unwrap_or(s).trim();
    num.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = SurfaceConfig::default();
        assert_eq!(cfg.width, 668.0);
        assert_eq!(cfg.height, 522.0);
        assert_eq!(cfg.border_width, 5.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("668px"), Some(668.0));
        assert_eq!(parse_px(" 700 "), Some(700.0));
        assert_eq!(parse_px("12.5px"), Some(12.5));
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("50%"), None);
        assert_eq!(parse_px("-3px"), None);
    }

    #[test]
    fn test_host_size_override() {
        let cfg = SurfaceConfig::default().with_host_size("800px", "auto");
        assert_eq!(cfg.width, 800.0);
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = SurfaceConfig {
            width: 0.0,
            ..SurfaceConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidSize { .. })));
        let cfg = SurfaceConfig {
            brush_radius: f64::NAN,
            ..SurfaceConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidBrushRadius(_))));
        let cfg = SurfaceConfig {
            selector: "  ".into(),
            ..SurfaceConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptySelector));
    }

    #[test]
    fn test_validate_bounds_brush_radius() {
        for r in [1e-300, 0.0, 0.49, 261.5, 1e9] {
            let cfg = SurfaceConfig {
                brush_radius: r,
                ..SurfaceConfig::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::InvalidBrushRadius(r)), "radius {r}");
        }
        for r in [MIN_BRUSH_RADIUS, 4.0, 261.0] {
            let cfg = SurfaceConfig {
                brush_radius: r,
                ..SurfaceConfig::default()
            };
            assert!(cfg.validate().is_ok(), "radius {r}");
        }
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_from_json_fills_defaults() {
        let cfg = SurfaceConfig::from_json(r##"{"width": 300, "selector": "#pad"}"##).unwrap();
        assert_eq!(cfg.width, 300.0);
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
        assert_eq!(cfg.selector, "#pad");
        assert!(SurfaceConfig::from_json(r#"{"brush_radius": -1}"#).is_err());
    }
}
