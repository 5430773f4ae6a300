use gpui::Rgba;

use crate::{
    style::{InteractionState, ResolvedFont, ResolvedPadding, ResolvedStyle, StateValue},
    theme::{ControlSize, TextWeightKind, Theme},
    utils::{PixelsExt, RgbaExt},
};

/// Alpha of the text selection highlight.
const SELECTION_ALPHA: f32 = 0.3;

/// Style tokens of a single line text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputStyle {
    size: ControlSize,
    mono: bool,
}

impl Default for InputStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl InputStyle {
    pub fn new() -> Self {
        Self {
            size: ControlSize::Medium,
            mono: false,
        }
    }

    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Uses the theme's monospace font for the text.
    pub fn mono(mut self, mono: bool) -> Self {
        self.mono = mono;
        self
    }

    pub fn resolve(&self, theme: &Theme) -> ResolvedInput {
        let colors = &theme.colors;
        let opacity = &theme.layout.opacity;

        let font = if self.mono {
            ResolvedFont::mono(theme, self.size.text_size_kind(), TextWeightKind::Regular)
        } else {
            ResolvedFont::new(theme, self.size.text_size_kind(), TextWeightKind::Regular)
        };
        let height = self.size.height(theme);
        let vertical_padding = height.padding_needed_for_height(font.size, font.line_height);
        let border = colors.border.default;

        ResolvedInput {
            style: ResolvedStyle {
                foreground: StateValue::new(colors.text.primary)
                    .with_disabled_fade(opacity.disabled),
                background: StateValue::new(colors.background.secondary)
                    .with_disabled_fade(opacity.disabled),
                border: StateValue::new(border)
                    .with_hovered(border.mix(colors.text.primary, opacity.hover / 2.))
                    .with_disabled_fade(opacity.disabled),
                padding: ResolvedPadding::symmetric(self.size.padding_x(theme), vertical_padding),
                corner_radius: self.size.corner_radius(theme),
                stroke_width: theme.layout.border_width.thin,
                min_height: height,
                font,
            },
            placeholder: colors.text.tertiary,
            focus_border: colors.accent.primary,
            invalid_border: colors.accent.danger,
            focus_ring: colors.overlay.focus_ring,
            selection: colors.accent.primary.alpha(SELECTION_ALPHA),
            caret: colors.accent.primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub style: ResolvedStyle,
    pub placeholder: Rgba,
    pub focus_border: Rgba,
    pub invalid_border: Rgba,
    pub focus_ring: Rgba,
    pub selection: Rgba,
    pub caret: Rgba,
}

impl ResolvedInput {
    /// The border color. Disabled wins, then an invalid value, then focus,
    /// then the regular hover/press combinator.
    pub fn border_for(&self, state: InteractionState, invalid: bool) -> Rgba {
        if state.disabled {
            self.style.border_for(state)
        } else if invalid {
            self.invalid_border
        } else if state.focused {
            self.focus_border
        } else {
            self.style.border_for(state)
        }
    }

    /// The focus ring around the field, if one is shown.
    pub fn focus_ring_for(&self, state: InteractionState, invalid: bool) -> Option<Rgba> {
        if state.disabled || !state.focused {
            return None;
        }

        Some(if invalid {
            self.invalid_border.alpha(self.focus_ring.a)
        } else {
            self.focus_ring
        })
    }
}
