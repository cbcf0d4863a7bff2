//! Host animation clock.
//!
//! The host feeds frame deltas into [`AnimationClock::tick`]. Every mounted
//! animated control holds a [`Subscription`]; dropping it removes the control's
//! [`AnimationState`] from the clock before the drop returns, so no effect
//! keeps running for a control that is gone.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;

use crate::animation::{AnimationDriver, Direction, Spring};

/// Identifier of one live subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverId(pub u64);

/// Snapshot of one running effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Current phase.
    pub phase: f32,
    /// Cycle length.
    pub period: Duration,
    /// Cycle shape.
    pub direction: Direction,
}

/// Everything composition needs from the clock for one control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Driver phase.
    pub phase: f32,
    /// Extra vertical offset from a press impulse, 0 when idle.
    pub spring_offset: f32,
}

impl AnimationFrame {
    /// Frame at `phase` with no impulse.
    #[must_use]
    pub const fn at(phase: f32) -> Self {
        Self {
            phase,
            spring_offset: 0.0,
        }
    }
}

#[derive(Debug)]
struct Impulse {
    spring: Spring,
    elapsed: f32,
}

#[derive(Debug)]
struct Entry {
    driver: AnimationDriver,
    elapsed: Duration,
    phase: f32,
    impulse: Option<Impulse>,
}

impl Entry {
    fn frame(&self) -> AnimationFrame {
        AnimationFrame {
            phase: self.phase,
            spring_offset: self
                .impulse
                .as_ref()
                .map_or(0.0, |impulse| impulse.spring.sample(impulse.elapsed)),
        }
    }
}

#[derive(Debug, Default)]
struct ClockInner {
    next_id: u64,
    entries: HashMap<DriverId, Entry>,
}

/// Clock that advances every subscribed driver.
#[derive(Debug, Default)]
pub struct AnimationClock {
    inner: Arc<Mutex<ClockInner>>,
}

impl AnimationClock {
    /// Creates a clock with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a driver. It starts at its start phase and advances with
    /// every [`Self::tick`] until the returned subscription is dropped.
    #[must_use = "dropping the subscription stops the animation immediately"]
    pub fn subscribe(&self, driver: AnimationDriver) -> Subscription {
        let mut inner = self.inner.lock();
        let id = DriverId(inner.next_id);
        inner.next_id += 1;
        inner.entries.insert(
            id,
            Entry {
                driver,
                elapsed: Duration::ZERO,
                phase: driver.tick(Duration::ZERO),
                impulse: None,
            },
        );

        tracing::debug!(
            "Animation subscribed: id={} period={:?} direction={:?}",
            id.0,
            driver.period(),
            driver.direction()
        );

        Subscription {
            id,
            clock: Arc::downgrade(&self.inner),
        }
    }

    /// Advances every live driver by `dt`.
    pub fn tick(&self, dt: Duration) {
        let mut inner = self.inner.lock();
        let dt_secs = dt.as_secs_f32();

        for entry in inner.entries.values_mut() {
            entry.elapsed += dt;
            entry.phase = entry.driver.tick(entry.elapsed);

            if let Some(impulse) = entry.impulse.as_mut() {
                impulse.elapsed += dt_secs;
                if impulse.spring.is_settled(impulse.elapsed) {
                    entry.impulse = None;
                }
            }
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Returns true if `id` is still subscribed.
    #[must_use]
    pub fn is_active(&self, id: DriverId) -> bool {
        self.inner.lock().entries.contains_key(&id)
    }
}

/// RAII handle to one driver on an [`AnimationClock`].
///
/// Dropping the handle unsubscribes synchronously. If the clock itself is
/// gone every accessor returns `None`.
#[derive(Debug)]
pub struct Subscription {
    id: DriverId,
    clock: Weak<Mutex<ClockInner>>,
}

impl Subscription {
    /// Returns the subscription id.
    #[must_use]
    pub fn id(&self) -> DriverId {
        self.id
    }

    /// Current animation state.
    #[must_use]
    pub fn state(&self) -> Option<AnimationState> {
        self.with_entry(|entry| AnimationState {
            phase: entry.phase,
            period: entry.driver.period(),
            direction: entry.driver.direction(),
        })
    }

    /// Current frame for composition.
    #[must_use]
    pub fn frame(&self) -> Option<AnimationFrame> {
        self.with_entry(Entry::frame)
    }

    /// Starts a one-shot spring impulse, replacing any running one.
    pub fn kick(&self, spring: Spring) {
        if let Some(clock) = self.clock.upgrade() {
            if let Some(entry) = clock.lock().entries.get_mut(&self.id) {
                entry.impulse = Some(Impulse {
                    spring,
                    elapsed: 0.0,
                });
            }
        }
    }

    /// Unsubscribes now. Same as dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }

    fn with_entry<T>(&self, f: impl FnOnce(&Entry) -> T) -> Option<T> {
        let clock = self.clock.upgrade()?;
        let inner = clock.lock();
        inner.entries.get(&self.id).map(f)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.lock().entries.remove(&self.id);
            tracing::debug!("Animation unsubscribed: id={}", self.id.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(ms: u64, direction: Direction) -> AnimationDriver {
        AnimationDriver::new(Duration::from_millis(ms), direction)
    }

    #[test]
    fn test_subscribe_and_drop() {
        let clock = AnimationClock::new();
        let sub = clock.subscribe(driver(1000, Direction::Forward));
        let id = sub.id();
        assert_eq!(clock.active_count(), 1);
        assert!(clock.is_active(id));

        drop(sub);
        assert_eq!(clock.active_count(), 0);
        assert!(!clock.is_active(id));
    }

    #[test]
    fn test_tick_advances_phase() {
        let clock = AnimationClock::new();
        let sub = clock.subscribe(driver(1000, Direction::Forward));
        assert_eq!(sub.state().map(|s| s.phase), Some(0.0));

        clock.tick(Duration::from_millis(250));
        let phase = sub.state().map(|s| s.phase).unwrap();
        assert!((phase - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_subscriptions_are_independent() {
        let clock = AnimationClock::new();
        let a = clock.subscribe(driver(1000, Direction::Forward));
        clock.tick(Duration::from_millis(500));
        let b = clock.subscribe(driver(1000, Direction::Forward));

        let pa = a.frame().unwrap().phase;
        let pb = b.frame().unwrap().phase;
        assert!((pa - 0.5).abs() < 1e-4);
        assert!(pb.abs() < 1e-4);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let clock = AnimationClock::new();
        let keep = clock.subscribe(driver(1000, Direction::Alternating));
        let gone = clock.subscribe(driver(1000, Direction::Alternating));
        gone.cancel();

        clock.tick(Duration::from_millis(100));
        assert_eq!(clock.active_count(), 1);
        assert!(keep.state().is_some());
    }

    #[test]
    fn test_kick_settles_and_clears() {
        let clock = AnimationClock::new();
        let sub = clock.subscribe(driver(800, Direction::Alternating));
        sub.kick(Spring::bounce(8.0));
        assert!((sub.frame().unwrap().spring_offset - 8.0).abs() < 1e-4);

        for _ in 0..300 {
            clock.tick(Duration::from_millis(16));
        }
        assert_eq!(sub.frame().unwrap().spring_offset, 0.0);
    }

    #[test]
    fn test_subscription_outliving_clock() {
        let clock = AnimationClock::new();
        let sub = clock.subscribe(driver(1000, Direction::Forward));
        drop(clock);
        assert!(sub.state().is_none());
        sub.kick(Spring::bounce(1.0));
    }
}
