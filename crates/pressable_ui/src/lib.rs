//! # Pressable UI
//!
//! Style variants, press state and animation drivers for pressable controls.
//! The crate decides *what* a control looks like on a given frame; the host
//! renderer decides how to draw it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     COMPOSITION PIPELINE                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │ pointer events ─▶ PressTracker ──┐                             │
//! │                       │          │                             │
//! │                   haptics        ▼                             │
//! │ frame ticks ───▶ AnimationClock ─▶ CompositionEngine ─▶ Render │
//! │                                  ▲                  Descriptor │
//! │ StyleConfig ─▶ StyleRegistry ────┘                             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```
//! use pressable_ui::{compose, ControlState, SizeTier, StyleVariant};
//!
//! let descriptor = compose(&StyleVariant::Solid, SizeTier::Large, &ControlState::IDLE, None);
//! assert_eq!(descriptor.geometry.height, 56.0);
//! assert!(!descriptor.is_loading());
//! ```
//!
//! State precedence is fixed: **loading > disabled > pressed > idle**.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod clock;
pub mod compose;
pub mod config;
pub mod control;
pub mod error;
pub mod haptics;
pub mod press;
pub mod registry;
pub mod render;
pub mod size;
pub mod state;
pub mod style;
pub mod variant;

pub use animation::{AnimationDriver, Direction, Easing, Effect, Spring, Tween, TweenSpec};
pub use clock::{AnimationClock, AnimationFrame, AnimationState, Subscription};
pub use compose::{compose, CompositionEngine};
pub use config::StyleConfig;
pub use control::PressableControl;
pub use error::{StyleError, StyleResult};
pub use haptics::{ChannelHaptics, HapticDispatcher, HapticIntensity, HapticSink, NullHaptics};
pub use press::{PointerEvent, PressPhase, PressTracker, PressTransition};
pub use registry::{resolve, StyleRegistry};
pub use render::RenderDescriptor;
pub use size::{size_spec, SizeSpec, SizeTier};
pub use state::ControlState;
pub use style::{Color, Palette};
pub use variant::{AnimatedKind, AnimationParams, StyleVariant};
