//! Style variant registry.
//!
//! Resolution runs in two steps:
//!
//! 1. The variant's own look: fill, border, shadow, decoration, label color.
//!    Animated variants fold in the current [`AnimationFrame`] here.
//! 2. Interaction state on top, strongest first:
//!    **loading > disabled > pressed > idle**.
//!
//! Both steps are pure. The same inputs always give the same descriptor.

use crate::animation::Effect;
use crate::clock::AnimationFrame;
use crate::config::StyleConfig;
use crate::render::{
    BorderSpec, ContentSpec, DecorationSpec, FillSpec, OverlaySpec, RenderDescriptor, ShadowSpec,
    Transform,
};
use crate::size::SizeTier;
use crate::state::ControlState;
use crate::style::Color;
use crate::variant::{colors_or, AnimatedKind, AnimationParams, StyleVariant};

/// Which state rule wins for a given [`ControlState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Loading,
    Disabled,
    Pressed,
    Idle,
}

impl Mode {
    const fn of(state: &ControlState) -> Self {
        if state.is_loading() {
            Self::Loading
        } else if !state.is_enabled() {
            Self::Disabled
        } else if state.is_pressed() {
            Self::Pressed
        } else {
            Self::Idle
        }
    }
}

/// A variant's look before interaction state is applied.
struct Look {
    fill: FillSpec,
    border: BorderSpec,
    shadow: ShadowSpec,
    decoration: DecorationSpec,
    label: Color,
    offset_y: f32,
}

impl Look {
    fn plain(fill: FillSpec, label: Color) -> Self {
        Self {
            fill,
            border: BorderSpec::None,
            shadow: ShadowSpec::None,
            decoration: DecorationSpec::None,
            label,
            offset_y: 0.0,
        }
    }

    fn with_border(mut self, border: BorderSpec) -> Self {
        self.border = border;
        self
    }

    fn with_shadow(mut self, color: Color, radius: f32, y: f32) -> Self {
        self.shadow = ShadowSpec::Drop { color, radius, y };
        self
    }
}

/// Resolves variants against one [`StyleConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleRegistry {
    config: StyleConfig,
}

impl StyleRegistry {
    /// Registry over the built-in configuration.
    pub const DEFAULT: Self = Self {
        config: StyleConfig::DEFAULT,
    };

    /// Creates a registry over `config`.
    #[must_use]
    pub const fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Resolves the resting look of `variant` in `state`.
    #[must_use]
    pub fn resolve(
        &self,
        variant: &StyleVariant,
        size: SizeTier,
        state: &ControlState,
    ) -> RenderDescriptor {
        self.resolve_at(variant, size, state, None)
    }

    /// Resolves `variant` in `state`, folding in `frame` for animated variants
    /// that are enabled and not loading. Other variants ignore the frame.
    #[must_use]
    pub fn resolve_at(
        &self,
        variant: &StyleVariant,
        size: SizeTier,
        state: &ControlState,
        frame: Option<AnimationFrame>,
    ) -> RenderDescriptor {
        let mode = Mode::of(state);
        let frame = match mode {
            Mode::Pressed | Mode::Idle => frame,
            Mode::Loading | Mode::Disabled => None,
        };

        let geometry = size.spec();
        let look = self.look(variant, frame);
        let config = &self.config;

        let mut descriptor = RenderDescriptor {
            geometry,
            fill: look.fill,
            border: look.border,
            shadow: look.shadow,
            overlay: OverlaySpec::None,
            decoration: look.decoration,
            content: ContentSpec {
                color: look.label,
                font_size: geometry.font_size,
                visible: true,
            },
            transform: Transform {
                offset_y: look.offset_y,
                ..Transform::IDENTITY
            },
            scale_tween: config.press_tween(),
        };

        match mode {
            Mode::Loading => {
                let fade = config.loading_fill_opacity;
                descriptor.fill = fade_fill(&descriptor.fill, fade);
                descriptor.border = fade_border(&descriptor.border, fade);
                descriptor.shadow = ShadowSpec::None;
                descriptor.overlay = OverlaySpec::Spinner {
                    color: look.label,
                    size: geometry.font_size,
                };
                descriptor.content.visible = false;
            }
            Mode::Disabled => {
                let neutral = config.palette.neutral;
                descriptor.fill = neutral_fill(&descriptor.fill, neutral);
                descriptor.border = neutral_border(&descriptor.border, neutral);
                descriptor.shadow = ShadowSpec::None;
                descriptor.content.color = if variant.is_text_only() {
                    neutral
                } else {
                    config.palette.neutral_label
                };
                descriptor.transform.opacity = self.disabled_opacity(variant);
            }
            Mode::Pressed => {
                let weight = variant.press_weight();
                let opacity = config.press_opacity(weight);
                descriptor.transform.scale = config.press_scale(weight);
                if let FillSpec::Gradient(_) = descriptor.fill {
                    descriptor.fill = fade_fill(&descriptor.fill, opacity);
                } else {
                    descriptor.transform.opacity = opacity;
                }
            }
            Mode::Idle => {}
        }

        descriptor
    }

    /// Whole-control opacity of `variant` while disabled.
    #[must_use]
    pub fn disabled_opacity(&self, variant: &StyleVariant) -> f32 {
        if variant.is_text_only() {
            self.config.text_disabled_opacity
        } else {
            self.config.disabled_opacity
        }
    }

    fn look(&self, variant: &StyleVariant, frame: Option<AnimationFrame>) -> Look {
        let palette = &self.config.palette;

        match variant {
            StyleVariant::Solid => {
                Look::plain(FillSpec::Solid(palette.primary), palette.on_primary)
                    .with_shadow(palette.shadow, 4.0, 2.0)
            }
            StyleVariant::Outlined => Look::plain(FillSpec::None, palette.primary).with_border(
                BorderSpec::Stroke {
                    color: palette.primary,
                    width: 1.5,
                },
            ),
            StyleVariant::TextOnly => Look::plain(FillSpec::None, palette.primary),
            StyleVariant::Gradient(colors) => {
                let colors = colors_or(colors, palette.primary);
                let glow = colors[0].with_alpha(0.3);
                Look::plain(FillSpec::Gradient(colors), palette.on_primary)
                    .with_shadow(glow, 8.0, 4.0)
            }
            StyleVariant::Glass => Look::plain(
                FillSpec::Glass {
                    tint: palette.glass_tint,
                    blur: self.config.glass_blur,
                },
                palette.on_primary,
            )
            .with_border(BorderSpec::Stroke {
                color: palette.glass_border,
                width: 1.0,
            })
            .with_shadow(palette.shadow.with_alpha(0.1), 10.0, 5.0),
            StyleVariant::Animated(kind, params) => self.animated_look(*kind, params, frame),
        }
    }

    fn animated_look(
        &self,
        kind: AnimatedKind,
        params: &AnimationParams,
        frame: Option<AnimationFrame>,
    ) -> Look {
        let palette = &self.config.palette;
        let colors = colors_or(&params.colors, palette.primary);
        let base = colors[0];
        // Without a live frame, effects sit at phase 0 and decorations are hidden.
        let phase = frame.map_or(0.0, |f| f.phase);
        let effect = kind.effect(params, phase);

        match kind {
            AnimatedKind::Floating | AnimatedKind::Bounce => {
                let mut look = Look::plain(FillSpec::Solid(base), palette.on_primary);
                look = if kind == AnimatedKind::Floating {
                    look.with_shadow(palette.shadow, 8.0, 4.0)
                } else {
                    look.with_shadow(palette.shadow, 4.0, 2.0)
                };
                if let Effect::Offset(offset) = effect {
                    look.offset_y = offset;
                }
                if kind == AnimatedKind::Bounce {
                    look.offset_y -= frame.map_or(0.0, |f| f.spring_offset);
                }
                look
            }
            AnimatedKind::Shimmer | AnimatedKind::GradientShimmer => {
                let (fill, band) = if kind == AnimatedKind::Shimmer {
                    let band = colors
                        .get(1)
                        .copied()
                        .unwrap_or(Color::WHITE.with_alpha(0.45));
                    (FillSpec::Solid(base), band)
                } else {
                    (FillSpec::Gradient(colors), Color::WHITE.with_alpha(0.45))
                };
                let mut look = Look::plain(fill, palette.on_primary);
                if let (Some(_), Effect::Sweep(offset)) = (frame, effect) {
                    look.decoration = DecorationSpec::ShimmerBand {
                        color: band,
                        offset,
                        width: self.config.shimmer_width,
                    };
                }
                look
            }
            AnimatedKind::Pulse => {
                let mut look = Look::plain(FillSpec::Solid(base), palette.on_primary);
                if let (Some(_), Effect::Ring { scale, opacity }) = (frame, effect) {
                    look.decoration = DecorationSpec::PulseRing {
                        color: base.with_alpha(opacity),
                        scale,
                        width: params.stroke_width,
                    };
                }
                look
            }
            AnimatedKind::Glow => {
                let look = Look::plain(FillSpec::Solid(base), palette.on_primary);
                match effect {
                    Effect::Glow { radius, opacity } => {
                        look.with_shadow(base.with_alpha(opacity), radius, 0.0)
                    }
                    _ => look,
                }
            }
            AnimatedKind::RotatingStroke | AnimatedKind::GlowingMultiColorBorder => {
                let rotation = match effect {
                    Effect::Rotation(degrees) => degrees,
                    _ => 0.0,
                };
                let look = Look::plain(FillSpec::None, palette.primary).with_border(
                    BorderSpec::AngularGradient {
                        colors,
                        width: params.stroke_width,
                        rotation,
                    },
                );
                if kind == AnimatedKind::GlowingMultiColorBorder {
                    look.with_shadow(base.with_alpha(0.6), params.glow_radius, 0.0)
                } else {
                    look
                }
            }
        }
    }
}

impl From<StyleConfig> for StyleRegistry {
    fn from(config: StyleConfig) -> Self {
        Self::new(config)
    }
}

/// Resolves `variant` against the built-in configuration.
#[must_use]
pub fn resolve(variant: &StyleVariant, size: SizeTier, state: &ControlState) -> RenderDescriptor {
    StyleRegistry::DEFAULT.resolve(variant, size, state)
}

fn fade_fill(fill: &FillSpec, factor: f32) -> FillSpec {
    match fill {
        FillSpec::None => FillSpec::None,
        FillSpec::Solid(color) => FillSpec::Solid(color.fade(factor)),
        FillSpec::Gradient(colors) => {
            FillSpec::Gradient(colors.iter().map(|c| c.fade(factor)).collect())
        }
        FillSpec::Glass { tint, blur } => FillSpec::Glass {
            tint: tint.fade(factor),
            blur: *blur,
        },
    }
}

fn fade_border(border: &BorderSpec, factor: f32) -> BorderSpec {
    match border {
        BorderSpec::None => BorderSpec::None,
        BorderSpec::Stroke { color, width } => BorderSpec::Stroke {
            color: color.fade(factor),
            width: *width,
        },
        BorderSpec::AngularGradient {
            colors,
            width,
            rotation,
        } => BorderSpec::AngularGradient {
            colors: colors.iter().map(|c| c.fade(factor)).collect(),
            width: *width,
            rotation: *rotation,
        },
    }
}

fn neutral_fill(fill: &FillSpec, neutral: Color) -> FillSpec {
    match fill {
        FillSpec::None => FillSpec::None,
        FillSpec::Solid(_) | FillSpec::Gradient(_) | FillSpec::Glass { .. } => {
            FillSpec::Solid(neutral)
        }
    }
}

fn neutral_border(border: &BorderSpec, neutral: Color) -> BorderSpec {
    match border {
        BorderSpec::None => BorderSpec::None,
        BorderSpec::Stroke { width, .. } | BorderSpec::AngularGradient { width, .. } => {
            BorderSpec::Stroke {
                color: neutral,
                width: *width,
            }
        }
    }
}
