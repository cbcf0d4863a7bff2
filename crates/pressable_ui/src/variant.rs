//! Style variants.
//!
//! One tagged enum covers every visual treatment. Adding a variant means
//! adding a case here and a branch in [`crate::registry`], nothing else.

use std::time::Duration;

use crate::haptics::HapticIntensity;
use crate::style::Color;

/// Continuously animated treatments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedKind {
    /// Control drifts up and down.
    Floating,
    /// A light band sweeps across a solid fill.
    Shimmer,
    /// A ring grows out of the control and fades.
    Pulse,
    /// Small idle hop, plus a spring bounce on press.
    Bounce,
    /// Breathing glow around the control.
    Glow,
    /// Light band sweeping across a gradient fill.
    GradientShimmer,
    /// Angular gradient stroke that rotates forever.
    RotatingStroke,
    /// Rotating multi-color stroke with a matching glow.
    GlowingMultiColorBorder,
}

impl AnimatedKind {
    /// Every animated kind.
    pub const ALL: [Self; 8] = [
        Self::Floating,
        Self::Shimmer,
        Self::Pulse,
        Self::Bounce,
        Self::Glow,
        Self::GradientShimmer,
        Self::RotatingStroke,
        Self::GlowingMultiColorBorder,
    ];

    /// Tunables used when the caller does not override them.
    #[must_use]
    pub fn default_params(self) -> AnimationParams {
        let (colors, stroke_width, glow_radius, amplitude, period_ms) = match self {
            Self::Floating => (vec![Color::BLUE], 0.0, 0.0, 6.0, 2000),
            Self::Shimmer => (
                vec![Color::BLUE, Color::WHITE.with_alpha(0.45)],
                0.0,
                0.0,
                0.0,
                2000,
            ),
            Self::Pulse => (vec![Color::BLUE], 2.0, 0.0, 0.0, 1500),
            Self::Bounce => (vec![Color::ORANGE], 0.0, 0.0, 3.0, 800),
            Self::Glow => (vec![Color::PURPLE], 0.0, 12.0, 0.0, 1500),
            Self::GradientShimmer => (
                vec![Color::PURPLE, Color::PINK, Color::ORANGE],
                0.0,
                0.0,
                0.0,
                2500,
            ),
            Self::RotatingStroke => (
                vec![Color::BLUE, Color::PURPLE, Color::PINK, Color::BLUE],
                2.0,
                0.0,
                0.0,
                3000,
            ),
            Self::GlowingMultiColorBorder => (
                vec![
                    Color::PINK,
                    Color::ORANGE,
                    Color::TEAL,
                    Color::PURPLE,
                    Color::PINK,
                ],
                3.0,
                10.0,
                0.0,
                4000,
            ),
        };

        AnimationParams {
            colors,
            stroke_width,
            glow_radius,
            amplitude,
            period: Duration::from_millis(period_ms),
        }
    }
}

/// Per-kind tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationParams {
    /// Colors the effect draws with. The first color is the base fill.
    pub colors: Vec<Color>,
    /// Stroke width for border effects.
    pub stroke_width: f32,
    /// Maximum glow radius.
    pub glow_radius: f32,
    /// Travel distance for floating and bounce, in points.
    pub amplitude: f32,
    /// Length of one cycle.
    pub period: Duration,
}

impl AnimationParams {
    /// Replaces the colors.
    #[must_use]
    pub fn with_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.colors = colors.into();
        self
    }

    /// Replaces the period.
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Replaces the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Replaces the glow radius.
    #[must_use]
    pub fn with_glow_radius(mut self, glow_radius: f32) -> Self {
        self.glow_radius = glow_radius;
        self
    }

    /// Replaces the amplitude.
    #[must_use]
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Returns the period, or `kind`'s default period when this one is zero.
    #[must_use]
    pub fn effective_period(&self, kind: AnimatedKind) -> Duration {
        if self.period.is_zero() {
            kind.default_params().period
        } else {
            self.period
        }
    }
}

/// How hard a press visually compresses the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressWeight {
    /// Solid and outlined controls.
    Standard,
    /// Text-only controls.
    Light,
    /// Frosted glass.
    Glass,
    /// Gradients and most animated controls.
    Heavy,
    /// Bounce.
    Springy,
}

/// Visual treatment applied to a control.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleVariant {
    /// Filled with the primary color.
    #[default]
    Solid,
    /// Primary stroke, transparent fill.
    Outlined,
    /// Label only.
    TextOnly,
    /// Linear gradient fill, leading to trailing.
    Gradient(Vec<Color>),
    /// Frosted glass.
    Glass,
    /// Continuously animated treatment.
    Animated(AnimatedKind, AnimationParams),
}

impl StyleVariant {
    /// Gradient variant. An empty list falls back to the primary color when
    /// resolved.
    #[must_use]
    pub fn gradient(colors: impl Into<Vec<Color>>) -> Self {
        let colors = colors.into();
        if colors.is_empty() {
            tracing::warn!("Gradient variant created with no colors, falling back to default");
        }
        Self::Gradient(colors)
    }

    /// Animated variant with the kind's default tunables.
    #[must_use]
    pub fn animated(kind: AnimatedKind) -> Self {
        Self::Animated(kind, kind.default_params())
    }

    /// Animated variant with custom tunables.
    #[must_use]
    pub fn animated_with(kind: AnimatedKind, params: AnimationParams) -> Self {
        if params.colors.is_empty() {
            tracing::warn!("{:?} variant created with no colors, falling back to default", kind);
        }
        if params.period.is_zero() {
            tracing::warn!("{:?} variant created with zero period, using default", kind);
        }
        Self::Animated(kind, params)
    }

    /// Returns the animated kind, if any.
    #[inline]
    #[must_use]
    pub fn animated_kind(&self) -> Option<AnimatedKind> {
        match self {
            Self::Animated(kind, _) => Some(*kind),
            _ => None,
        }
    }

    /// Returns true for the label-only variant.
    #[inline]
    #[must_use]
    pub fn is_text_only(&self) -> bool {
        matches!(self, Self::TextOnly)
    }

    /// Visual weight used to pick press compression.
    #[must_use]
    pub fn press_weight(&self) -> PressWeight {
        match self {
            Self::Solid | Self::Outlined => PressWeight::Standard,
            Self::TextOnly => PressWeight::Light,
            Self::Glass => PressWeight::Glass,
            Self::Gradient(_) => PressWeight::Heavy,
            Self::Animated(AnimatedKind::Bounce, _) => PressWeight::Springy,
            Self::Animated(..) => PressWeight::Heavy,
        }
    }

    /// Tactile feedback strength for a press on this variant.
    #[must_use]
    pub fn haptic_intensity(&self) -> HapticIntensity {
        match self.press_weight() {
            PressWeight::Light => HapticIntensity::Soft,
            PressWeight::Standard | PressWeight::Glass => HapticIntensity::Light,
            PressWeight::Heavy => HapticIntensity::Medium,
            PressWeight::Springy => HapticIntensity::Rigid,
        }
    }
}

/// Returns `colors`, or a single `fallback` when the list is empty.
pub(crate) fn colors_or(colors: &[Color], fallback: Color) -> Vec<Color> {
    if colors.is_empty() {
        vec![fallback]
    } else {
        colors.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_usable_defaults() {
        for kind in AnimatedKind::ALL {
            let params = kind.default_params();
            assert!(!params.colors.is_empty(), "{kind:?}");
            assert!(!params.period.is_zero(), "{kind:?}");
        }
    }

    #[test]
    fn test_zero_period_falls_back() {
        let params = AnimatedKind::Glow
            .default_params()
            .with_period(Duration::ZERO);
        assert_eq!(
            params.effective_period(AnimatedKind::Glow),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_empty_colors_fall_back() {
        assert_eq!(colors_or(&[], Color::BLUE), vec![Color::BLUE]);
        assert_eq!(
            colors_or(&[Color::PINK, Color::ORANGE], Color::BLUE),
            vec![Color::PINK, Color::ORANGE]
        );
    }

    #[test]
    fn test_press_weights() {
        assert_eq!(StyleVariant::Solid.press_weight(), PressWeight::Standard);
        assert_eq!(StyleVariant::TextOnly.press_weight(), PressWeight::Light);
        assert_eq!(
            StyleVariant::gradient([Color::PINK]).press_weight(),
            PressWeight::Heavy
        );
        assert_eq!(
            StyleVariant::animated(AnimatedKind::Bounce).press_weight(),
            PressWeight::Springy
        );
    }

    #[test]
    fn test_haptic_intensity_follows_weight() {
        assert_eq!(StyleVariant::TextOnly.haptic_intensity(), HapticIntensity::Soft);
        assert_eq!(StyleVariant::Glass.haptic_intensity(), HapticIntensity::Light);
        assert_eq!(
            StyleVariant::animated(AnimatedKind::Bounce).haptic_intensity(),
            HapticIntensity::Rigid
        );
    }
}
