//! Haptic feedback dispatch.
//!
//! Press transitions only produce [`HapticRequest`]s. The
//! [`HapticDispatcher`] is the single place where a request leaves the core,
//! and it re-checks the control's state at that moment: a control that became
//! disabled or started loading between pointer-down and dispatch stays silent.

use crossbeam_channel::{Sender, TrySendError};
use thiserror::Error;

use crate::state::ControlState;

/// Strength of a tactile pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticIntensity {
    /// Subtle tap.
    Light,
    /// Standard tap.
    Medium,
    /// Strong tap.
    Heavy,
    /// Muted, cushioned tap.
    Soft,
    /// Sharp, firm tap.
    Rigid,
}

/// One pending feedback pulse, produced by an Idle→Pressed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticRequest {
    /// Pulse strength.
    pub intensity: HapticIntensity,
}

/// Failure reported by a platform sink. Never surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HapticError {
    /// The platform has no haptic engine or it is switched off.
    #[error("haptics unavailable")]
    Unavailable,
    /// The receiving side of the haptic queue is gone.
    #[error("haptic queue disconnected")]
    Disconnected,
}

/// Platform side of haptic feedback.
pub trait HapticSink {
    /// Fires one pulse. Must not block.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform cannot play the pulse. The
    /// dispatcher ignores it.
    fn emit(&self, intensity: HapticIntensity) -> Result<(), HapticError>;
}

/// Sink for platforms without haptics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHaptics;

impl HapticSink for NullHaptics {
    fn emit(&self, _intensity: HapticIntensity) -> Result<(), HapticError> {
        Err(HapticError::Unavailable)
    }
}

/// Queues pulses for a platform thread.
#[derive(Debug, Clone)]
pub struct ChannelHaptics {
    sender: Sender<HapticIntensity>,
}

impl ChannelHaptics {
    /// Wraps the sending half of a channel.
    #[must_use]
    pub fn new(sender: Sender<HapticIntensity>) -> Self {
        Self { sender }
    }
}

impl HapticSink for ChannelHaptics {
    fn emit(&self, intensity: HapticIntensity) -> Result<(), HapticError> {
        match self.sender.try_send(intensity) {
            Ok(()) => Ok(()),
            // A full queue means the platform is behind; dropping the pulse is fine.
            Err(TrySendError::Full(_)) => Err(HapticError::Unavailable),
            Err(TrySendError::Disconnected(_)) => Err(HapticError::Disconnected),
        }
    }
}

/// Gatekeeper between press transitions and the platform sink.
#[derive(Debug, Clone, Default)]
pub struct HapticDispatcher<S> {
    sink: S,
}

impl<S: HapticSink> HapticDispatcher<S> {
    /// Creates a dispatcher over `sink`.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns the sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Plays `request` unless `state` is disabled or loading right now.
    pub fn dispatch(&self, request: HapticRequest, state: &ControlState) {
        if !state.is_interactive() {
            tracing::trace!(
                "Haptic {:?} suppressed: enabled={} loading={}",
                request.intensity,
                state.is_enabled(),
                state.is_loading()
            );
            return;
        }

        if let Err(err) = self.sink.emit(request.intensity) {
            tracing::trace!("Haptic {:?} dropped: {}", request.intensity, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossbeam_channel::{bounded, unbounded};

    const TAP: HapticRequest = HapticRequest {
        intensity: HapticIntensity::Light,
    };

    #[test]
    fn test_dispatch_reaches_sink() {
        let (tx, rx) = unbounded();
        let dispatcher = HapticDispatcher::new(ChannelHaptics::new(tx));

        dispatcher.dispatch(TAP, &ControlState::IDLE);
        assert_eq!(rx.try_recv(), Ok(HapticIntensity::Light));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dispatch_gated_by_state() {
        let (tx, rx) = unbounded();
        let dispatcher = HapticDispatcher::new(ChannelHaptics::new(tx));

        dispatcher.dispatch(TAP, &ControlState::disabled());
        dispatcher.dispatch(TAP, &ControlState::loading());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_sink_failures_are_ignored() {
        let (tx, rx) = bounded(1);
        let dispatcher = HapticDispatcher::new(ChannelHaptics::new(tx));
        dispatcher.dispatch(TAP, &ControlState::IDLE);
        // Queue full: second pulse is dropped silently.
        dispatcher.dispatch(TAP, &ControlState::IDLE);
        assert_eq!(rx.len(), 1);

        drop(rx);
        dispatcher.dispatch(TAP, &ControlState::IDLE);

        HapticDispatcher::new(NullHaptics).dispatch(TAP, &ControlState::IDLE);
    }

    #[test]
    fn test_channel_sink_reports_disconnect() {
        let (tx, rx) = unbounded();
        drop(rx);
        assert_eq!(
            ChannelHaptics::new(tx).emit(HapticIntensity::Heavy),
            Err(HapticError::Disconnected)
        );
    }
}
