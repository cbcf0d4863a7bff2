//! Interaction state owned by a single control.

/// Enabled / loading / pressed flags for one control.
///
/// `pressed` can only be raised through [`crate::press::PressTracker`], and
/// only while the control is enabled and not loading. Disabling a control or
/// putting it into loading clears the flag, so `pressed ⇒ enabled ∧ ¬loading`
/// holds for every observable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlState {
    enabled: bool,
    loading: bool,
    pressed: bool,
}

impl ControlState {
    /// An enabled, idle control.
    pub const IDLE: Self = Self {
        enabled: true,
        loading: false,
        pressed: false,
    };

    /// Creates an unpressed state.
    #[must_use]
    pub const fn new(enabled: bool, loading: bool) -> Self {
        Self {
            enabled,
            loading,
            pressed: false,
        }
    }

    /// Shorthand for a disabled, idle control.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(false, false)
    }

    /// Shorthand for an enabled control showing its loading overlay.
    #[must_use]
    pub const fn loading() -> Self {
        Self::new(true, true)
    }

    /// Returns true if the control accepts input.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if the control shows its loading overlay.
    #[inline]
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns true while a pointer is held down on the control.
    #[inline]
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns true if a pointer-down may press the control.
    #[inline]
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.enabled && !self.loading
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pressed = false;
        }
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading {
            self.pressed = false;
        }
    }

    /// Raises or clears `pressed`. Raising is refused on a non-interactive
    /// control; returns the flag actually stored.
    pub(crate) fn set_pressed(&mut self, pressed: bool) -> bool {
        self.pressed = pressed && self.is_interactive();
        self.pressed
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::IDLE
    }
}
