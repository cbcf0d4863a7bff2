//! Composition engine.
//!
//! Top-level entry point for renderers. Composition never dispatches haptics
//! or touches the clock; it may be called on every state change and every
//! animation tick.

use crate::clock::AnimationFrame;
use crate::config::StyleConfig;
use crate::registry::StyleRegistry;
use crate::render::RenderDescriptor;
use crate::size::SizeTier;
use crate::state::ControlState;
use crate::variant::StyleVariant;

/// Combines variant, size, control state and animation frame into a
/// descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompositionEngine {
    registry: StyleRegistry,
}

impl CompositionEngine {
    /// Engine over the built-in configuration.
    pub const DEFAULT: Self = Self {
        registry: StyleRegistry::DEFAULT,
    };

    /// Creates an engine over `config`.
    #[must_use]
    pub const fn new(config: StyleConfig) -> Self {
        Self {
            registry: StyleRegistry::new(config),
        }
    }

    /// Returns the underlying registry.
    #[must_use]
    pub const fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Composes one frame.
    ///
    /// `frame` only affects animated variants, and only while the control is
    /// enabled and not loading.
    #[must_use]
    pub fn compose(
        &self,
        variant: &StyleVariant,
        size: SizeTier,
        state: &ControlState,
        frame: Option<AnimationFrame>,
    ) -> RenderDescriptor {
        let frame = frame.filter(|_| variant.animated_kind().is_some());
        self.registry.resolve_at(variant, size, state, frame)
    }
}

/// Composes one frame against the built-in configuration.
#[must_use]
pub fn compose(
    variant: &StyleVariant,
    size: SizeTier,
    state: &ControlState,
    frame: Option<AnimationFrame>,
) -> RenderDescriptor {
    CompositionEngine::DEFAULT.compose(variant, size, state, frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::render::DecorationSpec;
    use crate::variant::AnimatedKind;

    #[test]
    fn test_compose_is_idempotent() {
        let variant = StyleVariant::animated(AnimatedKind::Pulse);
        let frame = Some(AnimationFrame::at(0.42));
        let a = compose(&variant, SizeTier::Large, &ControlState::IDLE, frame);
        let b = compose(&variant, SizeTier::Large, &ControlState::IDLE, frame);
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_without_frame_matches_resolve() {
        let engine = CompositionEngine::DEFAULT;
        let variant = StyleVariant::Outlined;
        assert_eq!(
            engine.compose(&variant, SizeTier::Small, &ControlState::IDLE, None),
            engine
                .registry()
                .resolve(&variant, SizeTier::Small, &ControlState::IDLE)
        );
    }

    #[test]
    fn test_pulse_ring_tracks_phase() {
        let variant = StyleVariant::animated(AnimatedKind::Pulse);
        let at = |phase| {
            compose(
                &variant,
                SizeTier::Medium,
                &ControlState::IDLE,
                Some(AnimationFrame::at(phase)),
            )
        };
        let (early, late) = (at(0.1), at(0.8));

        match (early.decoration, late.decoration) {
            (
                DecorationSpec::PulseRing {
                    scale: s0,
                    color: c0,
                    ..
                },
                DecorationSpec::PulseRing {
                    scale: s1,
                    color: c1,
                    ..
                },
            ) => {
                assert!(s1 > s0);
                assert!(c1.a < c0.a);
            }
            other => panic!("expected pulse rings, got {other:?}"),
        }
    }
}
