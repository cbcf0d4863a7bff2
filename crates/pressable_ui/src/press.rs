//! Press state machine.
//!
//! ```text
//!            pointer-down (enabled ∧ ¬loading)
//!   ┌──────┐ ────────────────────────────────▶ ┌─────────┐
//!   │ Idle │                                   │ Pressed │
//!   └──────┘ ◀──────────────────────────────── └─────────┘
//!            pointer-up / pointer-cancel / disable / start loading
//! ```
//!
//! A pointer-down on a disabled or loading control is dropped: no transition,
//! no tween, no haptic.

use crate::animation::{Tween, TweenSpec};
use crate::haptics::{HapticDispatcher, HapticRequest, HapticSink};
use crate::state::ControlState;
use crate::variant::StyleVariant;

/// Idle / Pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressPhase {
    /// No pointer held.
    Idle,
    /// Pointer held down on an interactive control.
    Pressed,
}

/// Pointer input delivered to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Pointer went down inside the control.
    Down,
    /// Pointer released.
    Up,
    /// Gesture taken over or aborted by the system.
    Cancel,
}

/// Result of one state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressTransition {
    /// Phase before the event.
    pub from: PressPhase,
    /// Phase after the event.
    pub to: PressPhase,
    /// Scale the control should animate to.
    pub target_scale: f32,
    /// How to animate there.
    pub tween: TweenSpec,
    /// Haptic pulse to dispatch. Only set on Idle→Pressed.
    pub haptic: Option<HapticRequest>,
}

/// Per-control press tracker.
#[derive(Debug, Clone)]
pub struct PressTracker {
    state: ControlState,
    pressed_scale: f32,
    tween: TweenSpec,
    haptic: HapticRequest,
    scale: Tween,
}

impl PressTracker {
    /// Creates a tracker for a control drawn with `variant`.
    ///
    /// `pressed_scale` usually comes from
    /// [`crate::config::StyleConfig::press_scale`].
    #[must_use]
    pub fn new(state: ControlState, variant: &StyleVariant, pressed_scale: f32) -> Self {
        Self::with_tween(state, variant, pressed_scale, TweenSpec::PRESS)
    }

    /// Creates a tracker with a custom press tween.
    #[must_use]
    pub fn with_tween(
        state: ControlState,
        variant: &StyleVariant,
        pressed_scale: f32,
        tween: TweenSpec,
    ) -> Self {
        Self {
            state,
            pressed_scale,
            tween,
            haptic: HapticRequest {
                intensity: variant.haptic_intensity(),
            },
            scale: Tween::new(1.0, tween),
        }
    }

    /// Returns the control state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Returns the current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> PressPhase {
        if self.state.is_pressed() {
            PressPhase::Pressed
        } else {
            PressPhase::Idle
        }
    }

    /// Applies a pointer event. Returns `None` when the event changes nothing.
    pub fn handle(&mut self, event: PointerEvent) -> Option<PressTransition> {
        match event {
            PointerEvent::Down => self.press(),
            PointerEvent::Up | PointerEvent::Cancel => self.release(event),
        }
    }

    /// Applies a pointer event and routes any haptic through `haptics`.
    ///
    /// The dispatcher sees the state as it is after the transition.
    pub fn handle_with<S: HapticSink>(
        &mut self,
        event: PointerEvent,
        haptics: &HapticDispatcher<S>,
    ) -> Option<PressTransition> {
        let transition = self.handle(event)?;
        if let Some(request) = transition.haptic {
            haptics.dispatch(request, &self.state);
        }
        Some(transition)
    }

    /// Enables or disables the control. Disabling cancels an active press.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<PressTransition> {
        let was = self.phase();
        self.state.set_enabled(enabled);
        self.settle(was, "disabled")
    }

    /// Starts or stops loading. Loading cancels an active press.
    pub fn set_loading(&mut self, loading: bool) -> Option<PressTransition> {
        let was = self.phase();
        self.state.set_loading(loading);
        self.settle(was, "loading")
    }

    /// Advances the displayed-scale tween by `dt` seconds. Returns true while
    /// the tween still needs frames.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.scale.advance(dt);
        !self.scale.is_complete()
    }

    /// Scale as currently displayed, for hosts without their own interpolator.
    #[must_use]
    pub fn displayed_scale(&self) -> f32 {
        self.scale.value()
    }

    fn press(&mut self) -> Option<PressTransition> {
        if self.state.is_pressed() {
            return None;
        }
        if !self.state.set_pressed(true) {
            tracing::trace!(
                "Pointer-down dropped: enabled={} loading={}",
                self.state.is_enabled(),
                self.state.is_loading()
            );
            return None;
        }

        tracing::debug!("Press transition: Idle -> Pressed (scale {:.2})", self.pressed_scale);
        Some(self.transition(PressPhase::Idle, PressPhase::Pressed, Some(self.haptic)))
    }

    fn release(&mut self, event: PointerEvent) -> Option<PressTransition> {
        if !self.state.is_pressed() {
            return None;
        }
        self.state.set_pressed(false);

        tracing::debug!("Press transition: Pressed -> Idle ({:?})", event);
        Some(self.transition(PressPhase::Pressed, PressPhase::Idle, None))
    }

    fn settle(&mut self, was: PressPhase, reason: &str) -> Option<PressTransition> {
        if was == PressPhase::Pressed && self.phase() == PressPhase::Idle {
            tracing::debug!("Press transition: Pressed -> Idle ({})", reason);
            return Some(self.transition(PressPhase::Pressed, PressPhase::Idle, None));
        }
        None
    }

    fn transition(
        &mut self,
        from: PressPhase,
        to: PressPhase,
        haptic: Option<HapticRequest>,
    ) -> PressTransition {
        let target_scale = match to {
            PressPhase::Pressed => self.pressed_scale,
            PressPhase::Idle => 1.0,
        };
        self.scale.retarget(target_scale);

        PressTransition {
            from,
            to,
            target_scale,
            tween: self.tween,
            haptic,
        }
    }
}
