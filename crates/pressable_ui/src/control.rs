//! A mounted pressable control.
//!
//! Owns everything one control instance needs: its variant and size, a
//! [`PressTracker`] with the control state, and for animated variants the
//! [`Subscription`] on the host clock. Input is applied before rendering, so
//! a frame never sees a stale pressed flag. Unmounting drops the
//! subscription, which unregisters the effect on the spot.

use crate::animation::{AnimationDriver, Spring};
use crate::clock::{AnimationClock, AnimationState, Subscription};
use crate::compose::CompositionEngine;
use crate::haptics::{HapticDispatcher, HapticSink};
use crate::press::{PointerEvent, PressTracker, PressTransition};
use crate::render::RenderDescriptor;
use crate::size::SizeTier;
use crate::state::ControlState;
use crate::variant::{AnimatedKind, StyleVariant};

/// Spring amplitude of a press on a bounce control, relative to its idle hop.
const BOUNCE_KICK_FACTOR: f32 = 2.5;

/// One mounted control.
#[derive(Debug)]
pub struct PressableControl {
    variant: StyleVariant,
    size: SizeTier,
    tracker: PressTracker,
    animation: Option<Subscription>,
}

impl PressableControl {
    /// Mounts a control. Animated variants subscribe to `clock` immediately.
    #[must_use]
    pub fn mount(
        variant: StyleVariant,
        size: SizeTier,
        state: ControlState,
        engine: &CompositionEngine,
        clock: &AnimationClock,
    ) -> Self {
        let config = engine.registry().config();
        let tracker = PressTracker::with_tween(
            state,
            &variant,
            config.press_scale(variant.press_weight()),
            config.press_tween(),
        );
        let animation = match &variant {
            StyleVariant::Animated(kind, params) => {
                Some(clock.subscribe(AnimationDriver::for_kind(*kind, params)))
            }
            _ => None,
        };

        Self {
            variant,
            size,
            tracker,
            animation,
        }
    }

    /// Unmounts the control, stopping its animation before returning.
    pub fn unmount(self) {
        drop(self);
    }

    /// Returns the variant.
    #[must_use]
    pub fn variant(&self) -> &StyleVariant {
        &self.variant
    }

    /// Returns the size tier.
    #[must_use]
    pub fn size(&self) -> SizeTier {
        self.size
    }

    /// Returns the control state.
    #[must_use]
    pub fn state(&self) -> &ControlState {
        self.tracker.state()
    }

    /// Returns the press tracker.
    #[must_use]
    pub fn tracker(&self) -> &PressTracker {
        &self.tracker
    }

    /// Current animation state, `None` for static variants.
    #[must_use]
    pub fn animation_state(&self) -> Option<AnimationState> {
        self.animation.as_ref().and_then(Subscription::state)
    }

    /// Pointer went down on the control.
    pub fn pointer_down<S: HapticSink>(
        &mut self,
        haptics: &HapticDispatcher<S>,
    ) -> Option<PressTransition> {
        let transition = self.tracker.handle_with(PointerEvent::Down, haptics)?;
        if let (StyleVariant::Animated(AnimatedKind::Bounce, params), Some(animation)) =
            (&self.variant, &self.animation)
        {
            animation.kick(Spring::bounce(params.amplitude * BOUNCE_KICK_FACTOR));
        }
        Some(transition)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) -> Option<PressTransition> {
        self.tracker.handle(PointerEvent::Up)
    }

    /// Gesture cancelled.
    pub fn pointer_cancel(&mut self) -> Option<PressTransition> {
        self.tracker.handle(PointerEvent::Cancel)
    }

    /// Enables or disables the control.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<PressTransition> {
        self.tracker.set_enabled(enabled)
    }

    /// Starts or stops loading.
    pub fn set_loading(&mut self, loading: bool) -> Option<PressTransition> {
        self.tracker.set_loading(loading)
    }

    /// Advances the displayed press-scale tween by `dt` seconds. Returns true
    /// while the host should keep scheduling frames for the press.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.tracker.advance(dt)
    }

    /// Describes the control for the current frame.
    #[must_use]
    pub fn render(&self, engine: &CompositionEngine) -> RenderDescriptor {
        let frame = self.animation.as_ref().and_then(Subscription::frame);
        engine.compose(&self.variant, self.size, self.tracker.state(), frame)
    }
}
