use std::time::Duration;

use gpui_transitions::Lerp as TransitionGoal;

/// Easing curves understood by the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOut,
    EaseOutQuint,
}

impl Easing {
    pub fn apply(&self, delta: f32) -> f32 {
        let delta = delta.clamp(0., 1.);

        match self {
            Easing::Linear => gpui::linear(delta),
            Easing::EaseInOut => gpui::ease_in_out(delta),
            Easing::EaseOutQuint => (gpui::ease_out_quint())(delta),
        }
    }
}

/// Duration and easing of a state change. The host framework owns the
/// interpolation loop; components only describe what it should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionSpec {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Color and border changes on hover, press and focus.
    pub const CONTROL_STATE: Self = Self::new(Duration::from_millis(365), Easing::EaseOutQuint);
    /// Fade to the disabled opacity.
    pub const DISABLED: Self = Self::new(Duration::from_millis(365), Easing::EaseOutQuint);
    pub const CHECKMARK: Self = Self::new(Duration::from_millis(285), Easing::EaseOutQuint);
    pub const TOGGLE_THUMB: Self = Self::new(Duration::from_millis(200), Easing::EaseOutQuint);
    pub const MENU: Self = Self::new(Duration::from_millis(275), Easing::EaseOutQuint);
    pub const SEGMENT_INDICATOR: Self =
        Self::new(Duration::from_millis(250), Easing::EaseOutQuint);
    pub const TOAST_ENTER: Self = Self::new(Duration::from_millis(350), Easing::EaseOutQuint);
    pub const TOAST_EXIT: Self = Self::new(Duration::from_millis(200), Easing::EaseInOut);
    pub const DIALOG: Self = Self::new(Duration::from_millis(250), Easing::EaseInOut);

    /// Eased progress in `0..=1` after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.;
        }

        self.easing
            .apply(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// The value between `from` and `to` after `elapsed`.
    pub fn sample<T: TransitionGoal>(&self, from: &T, to: &T, elapsed: Duration) -> T {
        from.lerp(to, self.progress(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
