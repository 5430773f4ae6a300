use gpui::{Pixels, Rgba, Size, px, size};

use crate::{
    style::{InteractionState, ResolvedFont, StateValue},
    theme::{ColorKind, ControlSize, TextWeightKind, Theme},
    utils::{PixelsExt, RgbaExt},
};

/// Track height as a fraction of the control height.
const TRACK_HEIGHT_RATIO: f32 = 0.5;
/// Track width as a multiple of the track height.
const TRACK_ASPECT: f32 = 1.8;

/// Style tokens of an on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleStyle {
    size: ControlSize,
    color: ColorKind,
}

impl Default for ToggleStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleStyle {
    pub fn new() -> Self {
        Self {
            size: ControlSize::Medium,
            color: ColorKind::Primary,
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

    pub fn resolve(&self, theme: &Theme) -> ResolvedToggle {
        let colors = &theme.colors;
        let opacity = &theme.layout.opacity;

        let track_height = px(self.size.height(theme).as_f32() * TRACK_HEIGHT_RATIO);
        let thumb_inset = theme.layout.border_width.thick;
        let off = colors.background.tertiary;

        ResolvedToggle {
            track_off: StateValue::new(off)
                .with_hovered(off.mix(colors.text.primary, opacity.hover / 2.))
                .with_pressed(off.mix(colors.text.primary, opacity.pressed / 2.))
                .with_disabled_fade(opacity.disabled),
            track_on: StateValue::solid(self.color.accent(theme), theme)
                .with_disabled_fade(opacity.disabled),
            thumb_off: StateValue::new(colors.text.secondary).with_disabled_fade(opacity.disabled),
            thumb_on: StateValue::new(self.color.on_accent(theme))
                .with_disabled_fade(opacity.disabled),
            track_size: size(px(track_height.as_f32() * TRACK_ASPECT), track_height),
            thumb_diameter: px((track_height - thumb_inset * 2.).as_f32().max(0.)),
            thumb_inset,
            corner_radius: theme.layout.radius.full,
            gap: self.size.gap(theme),
            label_font: ResolvedFont::new(
                theme,
                self.size.text_size_kind(),
                TextWeightKind::Regular,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedToggle {
    pub track_off: StateValue<Rgba>,
    pub track_on: StateValue<Rgba>,
    pub thumb_off: StateValue<Rgba>,
    pub thumb_on: StateValue<Rgba>,
    pub track_size: Size<Pixels>,
    pub thumb_diameter: Pixels,
    pub thumb_inset: Pixels,
    pub corner_radius: Pixels,
    /// Space between the track and its label.
    pub gap: Pixels,
    pub label_font: ResolvedFont,
}

impl ResolvedToggle {
    pub fn track_for(&self, on: bool, state: InteractionState) -> Rgba {
        if on {
            self.track_on.resolve(state)
        } else {
            self.track_off.resolve(state)
        }
    }

    pub fn thumb_for(&self, on: bool, state: InteractionState) -> Rgba {
        if on {
            self.thumb_on.resolve(state)
        } else {
            self.thumb_off.resolve(state)
        }
    }

    /// Horizontal thumb offset inside the track, where `progress` runs from
    /// 0 (off) to 1 (on).
    pub fn thumb_offset(&self, progress: f32) -> Pixels {
        let travel = self.track_size.width - self.thumb_diameter - self.thumb_inset * 2.;
        self.thumb_inset + travel * progress.clamp(0., 1.)
    }
}
