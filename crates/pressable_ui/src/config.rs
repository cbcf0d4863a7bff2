//! # Style configuration
//!
//! All tunables the registry reads, loadable from TOML:
//!
//! ```toml
//! disabled_opacity = 0.6
//! loading_fill_opacity = 0.6
//!
//! [palette]
//! primary = "#007AFF"
//!
//! [press]
//! easing = "ease-in-out"
//!
//! [press.scale]
//! standard = 0.98
//! light = 0.97
//! glass = 0.96
//! heavy = 0.95
//! springy = 0.92
//! ```
//!
//! Every key is optional; missing keys keep [`StyleConfig::DEFAULT`]. The
//! per-weight tables under `[press]` are the exception: a table that is
//! present must list all five weights.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::{Easing, TweenSpec};
use crate::error::{StyleError, StyleResult};
use crate::style::Palette;
use crate::variant::PressWeight;

/// One value per [`PressWeight`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    /// Solid and outlined.
    pub standard: f32,
    /// Text-only.
    pub light: f32,
    /// Glass.
    pub glass: f32,
    /// Gradients and animated.
    pub heavy: f32,
    /// Bounce.
    pub springy: f32,
}

impl WeightTable {
    /// Looks up the value for `weight`.
    #[inline]
    #[must_use]
    pub const fn get(&self, weight: PressWeight) -> f32 {
        match weight {
            PressWeight::Standard => self.standard,
            PressWeight::Light => self.light,
            PressWeight::Glass => self.glass,
            PressWeight::Heavy => self.heavy,
            PressWeight::Springy => self.springy,
        }
    }

    const fn values(&self) -> [f32; 5] {
        [self.standard, self.light, self.glass, self.heavy, self.springy]
    }
}

/// Press feedback tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressConfig {
    /// Scale while pressed.
    pub scale: WeightTable,
    /// Opacity while pressed. Gradients apply it to every color stop instead
    /// of the whole control.
    pub opacity: WeightTable,
    /// Length of the press tween, in seconds.
    pub tween_seconds: f32,
    /// Press tween curve. `instant` turns press motion off.
    pub easing: Easing,
}

impl PressConfig {
    /// Built-in press tuning.
    pub const DEFAULT: Self = Self {
        scale: WeightTable {
            standard: 0.98,
            light: 0.97,
            glass: 0.96,
            heavy: 0.95,
            springy: 0.92,
        },
        opacity: WeightTable {
            standard: 0.9,
            light: 0.7,
            glass: 0.85,
            heavy: 0.85,
            springy: 0.9,
        },
        tween_seconds: 0.1,
        easing: Easing::EaseInOut,
    };
}

impl Default for PressConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything the style registry reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Colors.
    pub palette: Palette,
    /// Whole-control opacity while disabled.
    pub disabled_opacity: f32,
    /// Whole-control opacity while disabled, text-only variant.
    pub text_disabled_opacity: f32,
    /// Alpha multiplier applied to fill and border colors while loading.
    pub loading_fill_opacity: f32,
    /// Press feedback.
    pub press: PressConfig,
    /// Backdrop blur radius for glass.
    pub glass_blur: f32,
    /// Shimmer band width as a fraction of control width.
    pub shimmer_width: f32,
}

impl StyleConfig {
    /// Built-in configuration.
    pub const DEFAULT: Self = Self {
        palette: Palette::DEFAULT,
        disabled_opacity: 0.6,
        text_disabled_opacity: 0.5,
        loading_fill_opacity: 0.6,
        press: PressConfig::DEFAULT,
        glass_blur: 20.0,
        shimmer_width: 0.3,
    };

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`] for malformed TOML and
    /// [`StyleError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> StyleResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Io`] when the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> StyleResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded style config from {}", path.display());
        Ok(config)
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidConfig`] naming the first bad value.
    pub fn validate(&self) -> StyleResult<()> {
        let opacities = [
            ("disabled_opacity", self.disabled_opacity),
            ("text_disabled_opacity", self.text_disabled_opacity),
            ("loading_fill_opacity", self.loading_fill_opacity),
        ];
        for (name, value) in opacities {
            check_range(name, value, 0.0, 1.0)?;
        }
        for value in self.press.opacity.values() {
            check_range("press.opacity", value, 0.0, 1.0)?;
        }
        for value in self.press.scale.values() {
            check_range("press.scale", value, 0.9, 1.0)?;
        }
        check_range("press.tween_seconds", self.press.tween_seconds, 0.0, 1.0)?;
        check_range("shimmer_width", self.shimmer_width, 0.0, 1.0)?;
        check_range("glass_blur", self.glass_blur, 0.0, f32::MAX)?;
        Ok(())
    }

    /// Scale while pressed for `weight`.
    #[inline]
    #[must_use]
    pub const fn press_scale(&self, weight: PressWeight) -> f32 {
        self.press.scale.get(weight)
    }

    /// Opacity while pressed for `weight`.
    #[inline]
    #[must_use]
    pub const fn press_opacity(&self, weight: PressWeight) -> f32 {
        self.press.opacity.get(weight)
    }

    /// Press tween.
    #[must_use]
    pub const fn press_tween(&self) -> TweenSpec {
        TweenSpec {
            duration: self.press.tween_seconds,
            easing: self.press.easing,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> StyleResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(StyleError::InvalidConfig(format!(
            "{name} must be within {min}..={max}, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::style::Color;

    #[test]
    fn test_default_is_valid() {
        StyleConfig::DEFAULT.validate().unwrap();
        assert_eq!(StyleConfig::default(), StyleConfig::DEFAULT);
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(StyleConfig::from_toml_str("").unwrap(), StyleConfig::DEFAULT);
    }

    #[test]
    fn test_partial_override() {
        let config = StyleConfig::from_toml_str(
            r##"
            disabled_opacity = 0.4

            [palette]
            primary = "#FF2D55"

            [press.scale]
            standard = 0.98
            light = 0.97
            glass = 0.96
            heavy = 0.93
            springy = 0.92
            "##,
        )
        .unwrap();

        assert!((config.disabled_opacity - 0.4).abs() < 1e-6);
        assert_eq!(config.palette.primary, Color::PINK);
        assert_eq!(config.palette.on_primary, Color::WHITE);
        assert!((config.press_scale(PressWeight::Heavy) - 0.93).abs() < 1e-6);
        assert!((config.press_scale(PressWeight::Standard) - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = StyleConfig::from_toml_str("loading_fill_opacity = 1.5").unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidConfig(msg) if msg.contains("loading_fill_opacity")
        ));

        let err = StyleConfig::from_toml_str(
            r"
            [press.scale]
            standard = 0.5
            light = 0.97
            glass = 0.96
            heavy = 0.95
            springy = 0.92
            ",
        )
        .unwrap_err();
        assert!(matches!(err, StyleError::InvalidConfig(_)));
    }

    #[test]
    fn test_partial_weight_table_rejected() {
        let err = StyleConfig::from_toml_str("[press.opacity]\nlight = 0.6").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn test_press_easing_override() {
        let text = "[press]\ntween_seconds = 0.2\neasing = \"exponential-out\"";
        let config = StyleConfig::from_toml_str(text).unwrap();
        let tween = config.press_tween();
        assert_eq!(tween.easing, Easing::ExponentialOut);
        assert!((tween.duration - 0.2).abs() < 1e-6);
        assert_eq!(StyleConfig::DEFAULT.press_tween(), TweenSpec::PRESS);

        let err = StyleConfig::from_toml_str("[press]\neasing = \"bouncy\"").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let err = StyleConfig::from_toml_str("[palette]\nprimary = \"blue\"").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = StyleConfig::from_toml_file("/nonexistent/pressable/style.toml").unwrap_err();
        assert!(matches!(err, StyleError::Io(_)));
    }

    #[test]
    fn test_sample_file_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/style.toml");
        let config = StyleConfig::from_toml_file(path).unwrap();
        assert!((config.press_scale(PressWeight::Standard) - 0.98).abs() < 1e-6);
        assert_eq!(config.press_tween(), TweenSpec::PRESS);
    }
}
