use gpui::{FontWeight, Pixels, Rgba, SharedString};

use crate::{
    style::{InteractionState, StateValue},
    theme::{LineHeight, TextSizeKind, TextWeightKind, Theme},
};

/// Concrete values for painting one widget, resolved from semantic tokens
/// and a theme. Built fresh each render and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub foreground: StateValue<Rgba>,
    pub background: StateValue<Rgba>,
    pub border: StateValue<Rgba>,
    pub padding: ResolvedPadding,
    pub corner_radius: Pixels,
    pub stroke_width: Pixels,
    pub min_height: Pixels,
    pub font: ResolvedFont,
}

impl ResolvedStyle {
    pub fn foreground_for(&self, state: InteractionState) -> Rgba {
        self.foreground.resolve(state)
    }

    pub fn background_for(&self, state: InteractionState) -> Rgba {
        self.background.resolve(state)
    }

    pub fn border_for(&self, state: InteractionState) -> Rgba {
        self.border.resolve(state)
    }

    /// Every color property resolved for `state` at once.
    pub fn colors_for(&self, state: InteractionState) -> StateColors {
        StateColors {
            foreground: self.foreground_for(state),
            background: self.background_for(state),
            border: self.border_for(state),
        }
    }
}

/// The effective colors of a widget for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateColors {
    pub foreground: Rgba,
    pub background: Rgba,
    pub border: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPadding {
    pub horizontal: Pixels,
    pub vertical: Pixels,
}

impl ResolvedPadding {
    pub fn symmetric(horizontal: Pixels, vertical: Pixels) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn uniform(padding: Pixels) -> Self {
        Self::symmetric(padding, padding)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    pub family: SharedString,
    pub size: Pixels,
    pub weight: FontWeight,
    pub line_height: LineHeight,
}

impl ResolvedFont {
    /// A face from the theme's default font.
    pub fn new(theme: &Theme, size: TextSizeKind, weight: TextWeightKind) -> Self {
        let font = &theme.typography.default_font;

        Self {
            family: font.primary_family(),
            size: size.resolve(theme),
            weight: FontWeight(weight.resolve(theme)),
            line_height: font.line_height,
        }
    }

    /// A face from the theme's monospace font.
    pub fn mono(theme: &Theme, size: TextSizeKind, weight: TextWeightKind) -> Self {
        let font = &theme.typography.mono_font;

        Self {
            family: font.primary_family(),
            size: size.resolve_mono(theme),
            weight: FontWeight(weight.resolve(theme)),
            line_height: font.line_height,
        }
    }

    pub fn line_height_px(&self) -> Pixels {
        self.line_height.to_pixels(self.size)
    }
}
