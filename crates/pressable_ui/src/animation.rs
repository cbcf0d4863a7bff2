//! Animation primitives.
//!
//! - [`Easing`] / [`Tween`]: short one-shot transitions (press scale).
//! - [`AnimationDriver`]: periodic phase functions behind every continuous
//!   effect. Phase is a pure function of elapsed time.
//! - [`Spring`]: damped one-shot impulse layered on top of bounce.
//! - [`AnimatedKind::effect`]: maps a phase into the domain each effect moves.

use std::f32::consts::TAU;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::variant::{AnimatedKind, AnimationParams};

/// Press tween curve, selectable from the style config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic ease in and out.
    #[default]
    EaseInOut,
    /// Fast start, long settle.
    ExponentialOut,
    /// Jump straight to the target. Used for reduced motion.
    Instant,
}

impl Easing {
    /// Maps linear progress `t` in `0..=1` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// How the renderer should animate toward a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Tween length in seconds.
    pub duration: f32,
    /// Easing curve.
    pub easing: Easing,
}

impl TweenSpec {
    /// Press feedback tween: 100ms ease-in-out.
    pub const PRESS: Self = Self {
        duration: 0.1,
        easing: Easing::EaseInOut,
    };

    /// Returns true if a retarget should land immediately.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.easing == Easing::Instant || self.duration <= 0.0
    }
}

/// One value easing toward a target that may move mid-flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    spec: TweenSpec,
    from: f32,
    to: f32,
    value: f32,
    progress: f32,
}

impl Tween {
    /// Tween resting at `value`.
    #[must_use]
    pub fn new(value: f32, spec: TweenSpec) -> Self {
        Self {
            spec,
            from: value,
            to: value,
            value,
            progress: 1.0,
        }
    }

    /// Returns the displayed value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns true once the target is reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Restarts from the displayed value toward `to`.
    pub fn retarget(&mut self, to: f32) {
        if (to - self.to).abs() <= f32::EPSILON {
            return;
        }
        self.from = self.value;
        self.to = to;
        if self.spec.is_instant() {
            self.value = to;
            self.progress = 1.0;
        } else {
            self.progress = 0.0;
        }
    }

    /// Advances by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.is_complete() {
            return;
        }

        self.progress = (self.progress + dt / self.spec.duration).min(1.0);
        if self.is_complete() {
            self.value = self.to;
        } else {
            let eased = self.spec.easing.apply(self.progress);
            self.value = self.from + (self.to - self.from) * eased;
        }
    }
}

/// How a driver's phase moves through one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Sawtooth in `[0, 1)`: wraps to 0 at each period boundary.
    Forward,
    /// Triangle wave in `[0, 1]`: up for one period, back down for the next.
    Alternating,
}

/// Shortest period a driver accepts.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Periodic phase function for one continuous effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDriver {
    period: Duration,
    direction: Direction,
    start_phase: f32,
}

impl AnimationDriver {
    /// Creates a driver starting at phase 0. Periods shorter than 1ms are
    /// clamped.
    #[must_use]
    pub fn new(period: Duration, direction: Direction) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            direction,
            start_phase: 0.0,
        }
    }

    /// Driver for an animated kind, honoring its params.
    #[must_use]
    pub fn for_kind(kind: AnimatedKind, params: &AnimationParams) -> Self {
        Self::new(params.effective_period(kind), kind.direction())
    }

    /// Starts the cycle at `phase` instead of 0. Values are wrapped into the
    /// driver's domain.
    #[must_use]
    pub fn with_start_phase(mut self, phase: f32) -> Self {
        self.start_phase = phase;
        self
    }

    /// Returns the period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns the direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Phase at `elapsed` time since mount.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&self, elapsed: Duration) -> f32 {
        let cycles =
            elapsed.as_secs_f64() / self.period.as_secs_f64() + f64::from(self.start_phase);

        match self.direction {
            Direction::Forward => {
                // Rounding to f32 can land exactly on 1.0, which is the next cycle's 0.
                let phase = cycles.rem_euclid(1.0) as f32;
                if phase >= 1.0 {
                    0.0
                } else {
                    phase
                }
            }
            Direction::Alternating => {
                let x = cycles.rem_euclid(2.0);
                (if x <= 1.0 { x } else { 2.0 - x }) as f32
            }
        }
    }
}

/// Damped one-shot spring, sampled as an offset that rings down to 0.
///
/// Mass is 1; `response` is the undamped period and `damping_fraction` the
/// damping ratio, clamped to the underdamped range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    amplitude: f32,
    omega: f32,
    zeta: f32,
}

impl Spring {
    /// Offset below which the spring is considered settled.
    pub const SETTLE_EPSILON: f32 = 0.01;

    /// Creates a spring with peak displacement `amplitude`.
    #[must_use]
    pub fn new(amplitude: f32, response: f32, damping_fraction: f32) -> Self {
        Self {
            amplitude,
            omega: TAU / response.max(0.01),
            zeta: damping_fraction.clamp(0.05, 0.95),
        }
    }

    /// Bounce impulse used when a bounce control is pressed.
    #[must_use]
    pub fn bounce(amplitude: f32) -> Self {
        Self::new(amplitude, 0.35, 0.45)
    }

    /// Displacement `t` seconds after the impulse.
    #[must_use]
    pub fn sample(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return self.amplitude;
        }
        let damped = self.omega * (1.0 - self.zeta * self.zeta).sqrt();
        self.envelope(t) * (damped * t).cos()
    }

    /// Returns true once the oscillation envelope falls below
    /// [`Self::SETTLE_EPSILON`].
    #[must_use]
    pub fn is_settled(&self, t: f32) -> bool {
        self.envelope(t) < Self::SETTLE_EPSILON
    }

    fn envelope(&self, t: f32) -> f32 {
        self.amplitude.abs() * (-self.zeta * self.omega * t.max(0.0)).exp()
    }
}

/// What an animated kind moves, evaluated at one phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Vertical offset in points (negative is up).
    Offset(f32),
    /// Shimmer band center, as a fraction of width in `[-1, 1)`.
    Sweep(f32),
    /// Pulse ring, scale relative to the control and opacity.
    Ring {
        /// Ring scale.
        scale: f32,
        /// Ring opacity.
        opacity: f32,
    },
    /// Glow shadow.
    Glow {
        /// Blur radius.
        radius: f32,
        /// Shadow opacity.
        opacity: f32,
    },
    /// Border rotation in degrees.
    Rotation(f32),
}

impl AnimatedKind {
    /// Pulse ring growth at the end of a cycle.
    pub const PULSE_MAX_GROWTH: f32 = 0.35;
    /// Pulse ring opacity at the start of a cycle.
    pub const PULSE_MAX_OPACITY: f32 = 0.6;

    /// Direction of this kind's driver.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Floating | Self::Bounce | Self::Glow => Direction::Alternating,
            Self::Shimmer
            | Self::GradientShimmer
            | Self::Pulse
            | Self::RotatingStroke
            | Self::GlowingMultiColorBorder => Direction::Forward,
        }
    }

    /// Maps a driver phase into this kind's effect domain.
    #[must_use]
    pub fn effect(self, params: &AnimationParams, phase: f32) -> Effect {
        match self {
            Self::Floating | Self::Bounce => Effect::Offset(-params.amplitude * phase),
            Self::Shimmer | Self::GradientShimmer => Effect::Sweep(-1.0 + 2.0 * phase),
            Self::Pulse => Effect::Ring {
                scale: 1.0 + Self::PULSE_MAX_GROWTH * phase,
                opacity: Self::PULSE_MAX_OPACITY * (1.0 - phase),
            },
            Self::Glow => Effect::Glow {
                radius: params.glow_radius * (0.5 + 0.5 * phase),
                opacity: 0.3 + 0.5 * phase,
            },
            Self::RotatingStroke | Self::GlowingMultiColorBorder => Effect::Rotation(360.0 * phase),
        }
    }
}
