use gpui::{Pixels, Rgba, px};

use crate::{
    components::button::SOFT_ALPHA,
    style::{InteractionState, ResolvedFont, ResolvedPadding, ResolvedStyle, StateValue},
    theme::{ControlSize, TextWeightKind, Theme},
    utils::{PixelsExt, RgbaExt, TRANSPARENT},
};

mod item;
pub use item::*;

mod placement;
pub use placement::*;

mod state;
pub use state::*;

/// Style tokens of a select: its trigger, the menu and the menu's items.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectStyle {
    size: ControlSize,
}

impl SelectStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    pub fn resolve(&self, theme: &Theme) -> ResolvedSelect {
        let colors = &theme.colors;
        let opacity = &theme.layout.opacity;
        let spacing = &theme.layout.spacing;

        let font = ResolvedFont::new(theme, self.size.text_size_kind(), TextWeightKind::Regular);
        let height = self.size.height(theme);
        let vertical_padding = height.padding_needed_for_height(font.size, font.line_height);
        let border = colors.border.default;

        let trigger = ResolvedStyle {
            foreground: StateValue::new(colors.text.primary).with_disabled_fade(opacity.disabled),
            background: StateValue::new(colors.background.secondary)
                .with_disabled_fade(opacity.disabled),
            border: StateValue::new(border)
                .with_hovered(border.mix(colors.text.primary, opacity.hover / 2.))
                .with_pressed(border.mix(colors.text.primary, opacity.pressed / 2.))
                .with_disabled_fade(opacity.disabled),
            padding: ResolvedPadding::symmetric(self.size.padding_x(theme), vertical_padding),
            corner_radius: self.size.corner_radius(theme),
            stroke_width: theme.layout.border_width.thin,
            min_height: height,
            font: font.clone(),
        };

        let item = ResolvedStyle {
            foreground: StateValue::new(colors.text.primary).with_disabled_fade(opacity.disabled),
            background: StateValue::new(TRANSPARENT)
                .with_hovered(colors.text.primary.alpha(opacity.hover / 2.))
                .with_pressed(colors.text.primary.alpha(opacity.pressed / 2.)),
            border: StateValue::new(TRANSPARENT),
            padding: ResolvedPadding::symmetric(spacing.sm, vertical_padding),
            corner_radius: theme.layout.radius.sm,
            stroke_width: px(0.),
            min_height: height,
            font,
        };

        ResolvedSelect {
            trigger,
            placeholder: colors.text.tertiary,
            chevron: colors.text.secondary,
            focus_border: colors.accent.primary,
            menu: ResolvedMenu {
                background: colors.background.secondary,
                border: colors.border.default,
                corner_radius: theme.layout.radius.md,
                padding: ResolvedPadding::uniform(spacing.xs),
                offset: spacing.xs,
            },
            item,
            selected_item_background: colors.accent.primary.alpha(SOFT_ALPHA),
            selected_item_foreground: colors.accent.primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelect {
    pub trigger: ResolvedStyle,
    pub placeholder: Rgba,
    pub chevron: Rgba,
    pub focus_border: Rgba,
    pub menu: ResolvedMenu,
    pub item: ResolvedStyle,
    pub selected_item_background: Rgba,
    pub selected_item_foreground: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMenu {
    pub background: Rgba,
    pub border: Rgba,
    pub corner_radius: Pixels,
    pub padding: ResolvedPadding,
    /// Distance between the trigger and the menu.
    pub offset: Pixels,
}

impl ResolvedSelect {
    pub fn trigger_border_for(&self, state: InteractionState, open: bool) -> Rgba {
        if !state.disabled && (open || state.focused) {
            self.focus_border
        } else {
            self.trigger.border_for(state)
        }
    }

    /// Background and text of a menu item. A highlighted item looks hovered.
    pub fn item_colors_for(&self, highlighted: bool, selected: bool) -> (Rgba, Rgba) {
        if selected {
            return (self.selected_item_background, self.selected_item_foreground);
        }

        let state = InteractionState::new().hovered(highlighted);
        (self.item.background_for(state), self.item.foreground_for(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_border() {
        let theme = Theme::dark();
        let select = SelectStyle::new().resolve(&theme);
        let idle = InteractionState::new();

        assert_eq!(select.trigger_border_for(idle, false), theme.colors.border.default);
        assert_eq!(select.trigger_border_for(idle, true), theme.colors.accent.primary);
        assert_eq!(
            select.trigger_border_for(idle.disabled(true), true),
            theme.colors.border.default.fade(theme.layout.opacity.disabled)
        );
    }

    #[test]
    fn test_item_colors() {
        let theme = Theme::light();
        let select = SelectStyle::new().resolve(&theme);

        let (idle, _) = select.item_colors_for(false, false);
        let (highlighted, _) = select.item_colors_for(true, false);
        let (selected, text) = select.item_colors_for(true, true);

        assert_eq!(idle.a, 0.);
        assert!(highlighted.a > 0.);
        assert_eq!(selected.a, SOFT_ALPHA);
        assert_eq!(text, theme.colors.accent.primary);
    }

    #[test]
    fn test_sizes_follow_control_size() {
        let theme = Theme::dark();

        for size in ControlSize::ALL {
            let select = SelectStyle::new().size(size).resolve(&theme);
            assert_eq!(select.trigger.min_height, size.height(&theme));
            assert_eq!(select.trigger.corner_radius, size.corner_radius(&theme));
        }
    }
}
