use gpui::px;

use crate::{
    components::button::SOFT_ALPHA,
    style::{ResolvedFont, ResolvedPadding, ResolvedStyle, StateValue},
    theme::{ColorKind, ControlSize, TextWeightKind, Theme},
    utils::{PixelsExt, RgbaExt},
};

/// Chip height as a fraction of the control height.
const CHIP_HEIGHT_RATIO: f32 = 0.8;

/// Style tokens of a chip (filter pill or tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipStyle {
    size: ControlSize,
    color: ColorKind,
    selected: bool,
}

impl Default for ChipStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipStyle {
    pub fn new() -> Self {
        Self {
            size: ControlSize::Medium,
            color: ColorKind::Default,
            selected: false,
        }
    }

    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn resolve(&self, theme: &Theme) -> ResolvedStyle {
        let colors = &theme.colors;
        let opacity = &theme.layout.opacity;

        let (foreground, background, border) = if self.selected {
            let accent = self.color.accent(theme);

            (
                StateValue::new(accent),
                StateValue::new(accent.alpha(SOFT_ALPHA))
                    .with_hovered(accent.alpha(SOFT_ALPHA + opacity.hover / 2.))
                    .with_pressed(accent.alpha(SOFT_ALPHA + opacity.pressed / 2.)),
                StateValue::new(accent.alpha(SOFT_ALPHA * 3.)),
            )
        } else {
            let surface = colors.background.secondary;

            (
                StateValue::new(colors.text.secondary).with_hovered(colors.text.primary),
                StateValue::new(surface)
                    .with_pressed(surface.mix(colors.text.primary, opacity.pressed / 2.)),
                StateValue::new(colors.border.default).with_hovered(colors.border.strong),
            )
        };

        let font = ResolvedFont::new(theme, self.size.text_size_kind(), TextWeightKind::Medium);
        let height = px(self.size.height(theme).as_f32() * CHIP_HEIGHT_RATIO);
        let vertical_padding = height.padding_needed_for_height(font.size, font.line_height);

        ResolvedStyle {
            foreground: foreground.with_disabled_fade(opacity.disabled),
            background: background.with_disabled_fade(opacity.disabled),
            border: border.with_disabled_fade(opacity.disabled),
            padding: ResolvedPadding::symmetric(self.size.padding_x(theme), vertical_padding),
            corner_radius: theme.layout.radius.full,
            stroke_width: theme.layout.border_width.thin,
            min_height: height,
            font,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::InteractionState;

    #[test]
    fn test_selected_chip_uses_color_kind() {
        let theme = Theme::dark();
        let idle = InteractionState::new();

        for color in ColorKind::ALL {
            let chip = ChipStyle::new().color(color).selected(true).resolve(&theme);
            assert_eq!(chip.foreground_for(idle), color.accent(&theme));
            assert_eq!(chip.background_for(idle).a, SOFT_ALPHA);
        }
    }

    #[test]
    fn test_unselected_chip_is_neutral() {
        let theme = Theme::light();
        let chip = ChipStyle::new()
            .color(ColorKind::Danger)
            .resolve(&theme);

        assert_eq!(
            chip.background_for(InteractionState::new()),
            theme.colors.background.secondary
        );
        assert_eq!(
            chip.border_for(InteractionState::new().hovered(true)),
            theme.colors.border.strong
        );
    }

    #[test]
    fn test_chip_is_pill_shaped_and_shorter_than_controls() {
        let theme = Theme::dark();

        for size in ControlSize::ALL {
            let chip = ChipStyle::new().size(size).resolve(&theme);
            assert_eq!(chip.corner_radius, theme.layout.radius.full);
            assert!(chip.min_height < size.height(&theme));
        }
    }
}
