use gpui::Rgba;
use serde::{Deserialize, Serialize};

use crate::{
    style::{ResolvedFont, ResolvedPadding, ResolvedStyle, StateValue},
    theme::{ControlSize, TextWeightKind, Theme},
    utils::{PixelsExt, RgbaExt, TRANSPARENT},
};

/// Alpha of tinted ("soft") fills.
pub(crate) const SOFT_ALPHA: f32 = 0.12;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    /// Solid accent fill.
    #[default]
    Primary,
    /// Neutral raised surface with a border.
    Secondary,
    /// Tinted accent fill.
    Tertiary,
    /// No fill until hovered.
    Ghost,
    /// Solid destructive fill.
    Danger,
    /// Tinted destructive fill.
    DangerSoft,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Ghost,
        Self::Danger,
        Self::DangerSoft,
    ];

    pub fn colors(&self, theme: &Theme) -> ButtonColors {
        let colors = &theme.colors;

        match self {
            ButtonVariant::Primary => {
                ButtonColors::solid(colors.accent.primary, colors.text.on_accent, theme)
            }

            ButtonVariant::Secondary => {
                let opacity = &theme.layout.opacity;
                let surface = colors.background.secondary;

                ButtonColors {
                    background: StateValue::new(surface)
                        .with_hovered(surface.mix(colors.text.primary, opacity.hover / 2.))
                        .with_pressed(surface.mix(colors.text.primary, opacity.pressed / 2.)),
                    foreground: StateValue::new(colors.text.primary),
                    border: StateValue::new(colors.border.default)
                        .with_hovered(colors.border.strong)
                        .with_pressed(colors.border.strong),
                }
            }

            ButtonVariant::Tertiary => ButtonColors::soft(colors.accent.primary, theme),

            ButtonVariant::Ghost => {
                let opacity = &theme.layout.opacity;
                let text = colors.text.primary;

                ButtonColors {
                    background: StateValue::new(TRANSPARENT)
                        .with_hovered(text.alpha(opacity.hover / 2.))
                        .with_pressed(text.alpha(opacity.pressed / 2.)),
                    foreground: StateValue::new(text),
                    border: StateValue::new(TRANSPARENT),
                }
            }

            ButtonVariant::Danger => {
                ButtonColors::solid(colors.accent.danger, colors.text.on_accent, theme)
            }

            ButtonVariant::DangerSoft => ButtonColors::soft(colors.accent.danger, theme),
        }
    }
}

/// Per-state colors of a button. Use this directly for one-off buttons that
/// don't fit any [`ButtonVariant`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub background: StateValue<Rgba>,
    pub foreground: StateValue<Rgba>,
    pub border: StateValue<Rgba>,
}

impl ButtonColors {
    /// An opaque fill with `text` on top.
    pub fn solid(fill: Rgba, text: Rgba, theme: &Theme) -> Self {
        Self {
            background: StateValue::solid(fill, theme),
            foreground: StateValue::new(text),
            border: StateValue::new(TRANSPARENT),
        }
    }

    /// A translucent tint of `main` with `main` as the text color.
    pub fn soft(main: Rgba, theme: &Theme) -> Self {
        let opacity = &theme.layout.opacity;

        Self {
            background: StateValue::new(main.alpha(SOFT_ALPHA))
                .with_hovered(main.alpha(SOFT_ALPHA + opacity.hover / 2.))
                .with_pressed(main.alpha(SOFT_ALPHA + opacity.pressed / 2.)),
            foreground: StateValue::new(main),
            border: StateValue::new(TRANSPARENT),
        }
    }

    /// Fills in disabled overrides that fade every normal color.
    pub fn with_disabled_fade(mut self, opacity: f32) -> Self {
        self.background = self.background.with_disabled_fade(opacity);
        self.foreground = self.foreground.with_disabled_fade(opacity);
        self.border = self.border.with_disabled_fade(opacity);
        self
    }
}

enum ButtonColorsEither {
    Variant(ButtonVariant),
    Custom(ButtonColors),
}

/// Style tokens of a button.
pub struct ButtonStyle {
    size: ControlSize,
    colors: ButtonColorsEither,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonStyle {
    pub fn new() -> Self {
        Self {
            size: ControlSize::Medium,
            colors: ButtonColorsEither::Variant(ButtonVariant::Primary),
        }
    }

    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.colors = ButtonColorsEither::Variant(variant);
        self
    }

    pub fn custom_colors(mut self, colors: ButtonColors) -> Self {
        self.colors = ButtonColorsEither::Custom(colors);
        self
    }

    pub fn resolve(&self, theme: &Theme) -> ResolvedStyle {
        let colors = match &self.colors {
            ButtonColorsEither::Variant(variant) => variant.colors(theme),
            ButtonColorsEither::Custom(colors) => *colors,
        }
        .with_disabled_fade(theme.layout.opacity.disabled);

        let font = ResolvedFont::new(theme, self.size.text_size_kind(), TextWeightKind::Medium);
        let height = self.size.height(theme);
        let vertical_padding = height.padding_needed_for_height(font.size, font.line_height);

        ResolvedStyle {
            foreground: colors.foreground,
            background: colors.background,
            border: colors.border,
            padding: ResolvedPadding::symmetric(self.size.padding_x(theme), vertical_padding),
            corner_radius: self.size.corner_radius(theme),
            stroke_width: theme.layout.border_width.thin,
            min_height: height,
            font,
        }
    }
}
