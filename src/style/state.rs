use gpui::Rgba;

use crate::{theme::Theme, utils::RgbaExt};

/// Transient interaction flags owned by a single widget instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
    pub disabled: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether pointer and keyboard input should be handled at all.
    pub fn is_interactive(&self) -> bool {
        !self.disabled
    }
}

/// A visual property with optional per-state overrides.
///
/// The effective value is picked with a fixed precedence:
/// disabled, then pressed, then hovered, then normal. A state only wins when
/// it is active *and* has an override; otherwise the next state is tried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateValue<T> {
    pub normal: T,
    pub hovered: Option<T>,
    pub pressed: Option<T>,
    pub disabled: Option<T>,
}

impl<T: Copy> StateValue<T> {
    /// A value without any overrides.
    pub fn new(normal: T) -> Self {
        Self {
            normal,
            hovered: None,
            pressed: None,
            disabled: None,
        }
    }

    pub fn with_hovered(mut self, value: T) -> Self {
        self.hovered = Some(value);
        self
    }

    pub fn with_pressed(mut self, value: T) -> Self {
        self.pressed = Some(value);
        self
    }

    pub fn with_disabled(mut self, value: T) -> Self {
        self.disabled = Some(value);
        self
    }

    pub fn resolve(&self, state: InteractionState) -> T {
        [
            (state.disabled, self.disabled),
            (state.pressed, self.pressed),
            (state.hovered, self.hovered),
        ]
        .into_iter()
        .find_map(|(active, value)| value.filter(|_| active))
        .unwrap_or(self.normal)
    }

    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> StateValue<U> {
        StateValue {
            normal: f(self.normal),
            hovered: self.hovered.map(&f),
            pressed: self.pressed.map(&f),
            disabled: self.disabled.map(&f),
        }
    }
}

impl StateValue<Rgba> {
    /// An opaque fill that moves towards the page background when hovered
    /// and pressed.
    pub fn solid(fill: Rgba, theme: &Theme) -> Self {
        let opacity = &theme.layout.opacity;
        let page = theme.colors.background.primary;

        StateValue::new(fill)
            .with_hovered(fill.mix(page, opacity.hover))
            .with_pressed(fill.mix(page, opacity.pressed))
    }

    /// Sets the disabled override to the normal color faded by `opacity`.
    pub fn with_disabled_fade(self, opacity: f32) -> Self {
        self.with_disabled(self.normal.fade(opacity))
    }
}

impl<T: Copy> From<T> for StateValue<T> {
    fn from(normal: T) -> Self {
        StateValue::new(normal)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    const NORMAL: u8 = 0;
    const HOVERED: u8 = 1;
    const PRESSED: u8 = 2;
    const DISABLED: u8 = 3;

    fn full() -> StateValue<u8> {
        StateValue::new(NORMAL)
            .with_hovered(HOVERED)
            .with_pressed(PRESSED)
            .with_disabled(DISABLED)
    }

    #[test]
    fn test_normal_when_idle() {
        assert_eq!(full().resolve(InteractionState::new()), NORMAL);
    }

    #[test]
    fn test_pressed_only_override_beats_hover() {
        let value = StateValue::new(NORMAL).with_pressed(PRESSED);
        let state = InteractionState::new().hovered(true).pressed(true);

        assert_eq!(value.resolve(state), PRESSED);
    }

    #[test]
    fn test_missing_override_falls_through_to_next_state() {
        let value = StateValue::new(NORMAL).with_hovered(HOVERED);
        let state = InteractionState::new()
            .hovered(true)
            .pressed(true)
            .disabled(true);

        assert_eq!(value.resolve(state), HOVERED);
    }

    #[test]
    fn test_disabled_wins_over_everything() {
        let state = InteractionState::new()
            .hovered(true)
            .pressed(true)
            .focused(true)
            .disabled(true);

        assert_eq!(full().resolve(state), DISABLED);
    }

    #[test]
    fn test_focus_alone_does_not_override() {
        let state = InteractionState::new().focused(true);
        assert_eq!(full().resolve(state), NORMAL);
    }

    #[test]
    fn test_precedence_holds_for_random_states() {
        let mut rng = rand::rng();

        for _ in 0..256 {
            let state = InteractionState {
                hovered: rng.random(),
                pressed: rng.random(),
                focused: rng.random(),
                disabled: rng.random(),
            };

            let expected = if state.disabled {
                DISABLED
            } else if state.pressed {
                PRESSED
            } else if state.hovered {
                HOVERED
            } else {
                NORMAL
            };

            assert_eq!(full().resolve(state), expected, "{state:?}");
            assert_eq!(
                StateValue::new(NORMAL).resolve(state),
                NORMAL,
                "no overrides always yields normal"
            );
        }
    }

    #[test]
    fn test_map_keeps_overrides() {
        let doubled = StateValue::new(1u8).with_pressed(2).map(|v| v * 2);
        assert_eq!(doubled.normal, 2);
        assert_eq!(doubled.pressed, Some(4));
        assert_eq!(doubled.hovered, None);
    }
}
