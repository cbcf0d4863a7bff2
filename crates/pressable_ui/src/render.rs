//! Render descriptors.
//!
//! A [`RenderDescriptor`] is everything the host renderer needs to draw one
//! control for one frame. It is a plain value: built fresh by every
//! resolution, never patched afterwards, never shared between controls.

use crate::animation::TweenSpec;
use crate::size::SizeSpec;
use crate::style::Color;

/// Control background.
#[derive(Debug, Clone, PartialEq)]
pub enum FillSpec {
    /// Nothing behind the label.
    None,
    /// Flat color.
    Solid(Color),
    /// Linear gradient from leading to trailing edge.
    Gradient(Vec<Color>),
    /// Blurred backdrop with a translucent tint.
    Glass {
        /// Tint over the blurred backdrop.
        tint: Color,
        /// Backdrop blur radius.
        blur: f32,
    },
}

impl FillSpec {
    /// Colors of this fill, in draw order.
    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        match self {
            Self::None => Vec::new(),
            Self::Solid(color) | Self::Glass { tint: color, .. } => vec![*color],
            Self::Gradient(colors) => colors.clone(),
        }
    }

    /// Fill colors packed as consecutive `[f32; 4]` RGBA stops, ready for a
    /// GPU buffer.
    #[must_use]
    pub fn stop_bytes(&self) -> Vec<u8> {
        let stops: Vec<[f32; 4]> = self.colors().into_iter().map(Color::to_array).collect();
        bytemuck::cast_slice::<[f32; 4], u8>(stops.as_slice()).to_vec()
    }
}

/// Control outline.
#[derive(Debug, Clone, PartialEq)]
pub enum BorderSpec {
    /// No outline.
    None,
    /// Single-color stroke.
    Stroke {
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f32,
    },
    /// Angular (conic) gradient stroke.
    AngularGradient {
        /// Stops around the circle, starting at `rotation`.
        colors: Vec<Color>,
        /// Stroke width.
        width: f32,
        /// Rotation of the first stop, in degrees.
        rotation: f32,
    },
}

/// Shadow or glow behind the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadowSpec {
    /// No shadow.
    None,
    /// Blurred, offset shadow.
    Drop {
        /// Shadow color (alpha carries the strength).
        color: Color,
        /// Blur radius.
        radius: f32,
        /// Vertical offset.
        y: f32,
    },
}

/// Content drawn on top of the label area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlaySpec {
    /// Label is shown.
    None,
    /// Indeterminate progress spinner replacing the label.
    Spinner {
        /// Spinner tint.
        color: Color,
        /// Spinner diameter.
        size: f32,
    },
}

impl OverlaySpec {
    /// Returns true for the loading spinner.
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Spinner { .. })
    }
}

/// Animated decoration drawn with the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecorationSpec {
    /// Nothing extra.
    None,
    /// Diagonal light band clipped to the control shape.
    ShimmerBand {
        /// Band color.
        color: Color,
        /// Band center, as a fraction of the control width in `[-1, 1)`.
        offset: f32,
        /// Band width, as a fraction of the control width.
        width: f32,
    },
    /// Ring expanding out of the control outline.
    PulseRing {
        /// Ring color.
        color: Color,
        /// Ring scale relative to the control.
        scale: f32,
        /// Ring stroke width.
        width: f32,
    },
}

/// Label styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentSpec {
    /// Label color.
    pub color: Color,
    /// Label font size.
    pub font_size: f32,
    /// False while the spinner replaces the label.
    pub visible: bool,
}

/// Whole-control transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Uniform scale around the center.
    pub scale: f32,
    /// Vertical offset in points (negative is up).
    pub offset_y: f32,
    /// Opacity applied to the whole control.
    pub opacity: f32,
}

impl Transform {
    /// No transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset_y: 0.0,
        opacity: 1.0,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What to draw for one control in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescriptor {
    /// Height, font size and corner radius.
    pub geometry: SizeSpec,
    /// Background.
    pub fill: FillSpec,
    /// Outline.
    pub border: BorderSpec,
    /// Shadow or glow.
    pub shadow: ShadowSpec,
    /// Loading spinner, if any.
    pub overlay: OverlaySpec,
    /// Animated decoration, if any.
    pub decoration: DecorationSpec,
    /// Label.
    pub content: ContentSpec,
    /// Scale, offset and opacity.
    pub transform: Transform,
    /// How the renderer should animate scale changes.
    pub scale_tween: TweenSpec,
}

impl RenderDescriptor {
    /// Returns true if the loading spinner is shown.
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.overlay.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_bytes_layout() {
        let fill = FillSpec::Gradient(vec![Color::BLACK, Color::WHITE]);
        let bytes = fill.stop_bytes();
        assert_eq!(bytes.len(), 2 * 4 * std::mem::size_of::<f32>());

        let expected: [f32; 8] = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        assert_eq!(bytes, bytemuck::cast_slice::<f32, u8>(&expected));
    }

    #[test]
    fn test_empty_fill_has_no_stops() {
        assert!(FillSpec::None.stop_bytes().is_empty());
        assert_eq!(FillSpec::Solid(Color::BLUE).colors(), vec![Color::BLUE]);
    }

    #[test]
    fn test_overlay_loading_flag() {
        assert!(!OverlaySpec::None.is_loading());
        assert!(OverlaySpec::Spinner {
            color: Color::WHITE,
            size: 17.0
        }
        .is_loading());
    }
}
