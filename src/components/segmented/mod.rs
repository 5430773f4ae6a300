use gpui::{Pixels, Rgba, px};

use crate::{
    style::{InteractionState, ResolvedFont, ResolvedPadding, StateValue},
    theme::{ColorKind, ControlSize, TextWeightKind, Theme},
    utils::{PixelsExt, RgbaExt, TRANSPARENT},
};

mod slider;
pub use slider::*;

/// Style tokens of a segmented control.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SegmentedStyle {
    size: ControlSize,
    color: ColorKind,
}

impl SegmentedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// `ColorKind::Default` paints a raised neutral indicator, every other
    /// kind a solid accent one.
    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn resolve(&self, theme: &Theme) -> ResolvedSegmented {
        let colors = &theme.colors;
        let opacity = &theme.layout.opacity;

        let (indicator, active_foreground) = match self.color {
            ColorKind::Default => (colors.background.primary, colors.text.primary),
            ColorKind::Primary
            | ColorKind::Secondary
            | ColorKind::Success
            | ColorKind::Warning
            | ColorKind::Danger => (self.color.accent(theme), self.color.on_accent(theme)),
        };

        let track_inset = theme.layout.border_width.thick;
        let corner_radius = self.size.corner_radius(theme);
        let font = ResolvedFont::new(theme, self.size.text_size_kind(), TextWeightKind::Medium);
        let height = self.size.height(theme);
        let segment_height = height - track_inset * 2.;

        ResolvedSegmented {
            track: colors.background.tertiary,
            track_border: colors.border.default,
            track_inset,
            track_radius: corner_radius,
            indicator,
            indicator_radius: px((corner_radius - track_inset).as_f32().max(0.)),
            segment_background: StateValue::new(TRANSPARENT)
                .with_hovered(colors.text.primary.alpha(opacity.hover / 2.)),
            segment_foreground: StateValue::new(colors.text.secondary)
                .with_hovered(colors.text.primary)
                .with_disabled_fade(opacity.disabled),
            active_foreground,
            segment_padding: ResolvedPadding::symmetric(
                self.size.padding_x(theme),
                segment_height.padding_needed_for_height(font.size, font.line_height),
            ),
            min_height: height,
            font,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSegmented {
    pub track: Rgba,
    pub track_border: Rgba,
    /// Gap between the track edge and the segments.
    pub track_inset: Pixels,
    pub track_radius: Pixels,
    pub indicator: Rgba,
    pub indicator_radius: Pixels,
    pub segment_background: StateValue<Rgba>,
    pub segment_foreground: StateValue<Rgba>,
    pub active_foreground: Rgba,
    pub segment_padding: ResolvedPadding,
    pub min_height: Pixels,
    pub font: ResolvedFont,
}

impl ResolvedSegmented {
    /// Text color of a segment. The indicator covers the active segment, so
    /// its background stays transparent.
    pub fn segment_colors_for(&self, state: InteractionState, active: bool) -> (Rgba, Rgba) {
        if active && !state.disabled {
            return (TRANSPARENT, self.active_foreground);
        }

        (
            self.segment_background.resolve(state),
            self.segment_foreground.resolve(state),
        )
    }
}
