use gpui::{Pixels, Rgba, px};
use serde::{Deserialize, Serialize};

use crate::{
    style::{InteractionState, ResolvedFont, StateValue},
    theme::{ColorKind, ControlSize, TextWeightKind, Theme},
    utils::{PixelsExt, RgbaExt},
};

/// Box size as a fraction of the control height.
const BOX_RATIO: f32 = 0.5;

/// The value of a checkbox.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Some, but not all, of the children are checked.
    Indeterminate,
}

/// The glyph painted inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckMark {
    Check,
    Dash,
}

impl CheckState {
    /// The state after a click. An indeterminate box always becomes checked.
    pub fn toggled(self) -> Self {
        match self {
            CheckState::Unchecked => CheckState::Checked,
            CheckState::Checked => CheckState::Unchecked,
            CheckState::Indeterminate => CheckState::Checked,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }

    pub fn mark(&self) -> Option<CheckMark> {
        match self {
            CheckState::Unchecked => None,
            CheckState::Checked => Some(CheckMark::Check),
            CheckState::Indeterminate => Some(CheckMark::Dash),
        }
    }

    /// Target of the fill transition: 1 when a mark is shown.
    pub fn fill(&self) -> f32 {
        if self.mark().is_some() { 1. } else { 0. }
    }

    /// Summarizes a group of children into the state of their parent box.
    pub fn from_children(children: impl IntoIterator<Item = bool>) -> Self {
        let (mut any_checked, mut any_unchecked) = (false, false);

        for checked in children {
            any_checked |= checked;
            any_unchecked |= !checked;
        }

        match (any_checked, any_unchecked) {
            (true, true) => CheckState::Indeterminate,
            (true, false) => CheckState::Checked,
            (false, _) => CheckState::Unchecked,
        }
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// Style tokens of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxStyle {
    size: ControlSize,
    color: ColorKind,
}

impl Default for CheckboxStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckboxStyle {
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

    pub fn resolve(&self, theme: &Theme) -> ResolvedCheckbox {
        let colors = &theme.colors;
        let opacity = &theme.layout.opacity;
        let border = colors.border.strong;

        ResolvedCheckbox {
            border: StateValue::new(border)
                .with_hovered(border.mix(colors.text.primary, opacity.hover / 2.))
                .with_pressed(border.mix(colors.text.primary, opacity.pressed))
                .with_disabled_fade(opacity.disabled),
            focus_border: colors.accent.primary,
            background: StateValue::new(colors.background.secondary)
                .with_disabled_fade(opacity.disabled),
            fill: StateValue::solid(self.color.accent(theme), theme)
                .with_disabled_fade(opacity.disabled),
            mark: StateValue::new(self.color.on_accent(theme)).with_disabled_fade(opacity.disabled),
            box_size: px(self.size.height(theme).as_f32() * BOX_RATIO),
            corner_radius: theme.layout.radius.sm,
            stroke_width: theme.layout.border_width.thin,
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
pub struct ResolvedCheckbox {
    pub border: StateValue<Rgba>,
    /// Border while focused and enabled.
    pub focus_border: Rgba,
    pub background: StateValue<Rgba>,
    pub fill: StateValue<Rgba>,
    pub mark: StateValue<Rgba>,
    pub box_size: Pixels,
    pub corner_radius: Pixels,
    pub stroke_width: Pixels,
    pub gap: Pixels,
    pub label_font: ResolvedFont,
}

/// Colors of a checkbox at one point of its fill transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckboxColors {
    pub background: Rgba,
    pub border: Rgba,
    pub fill: Rgba,
    pub mark: Rgba,
}

impl ResolvedCheckbox {
    /// `fill_progress` is the current value of the transition towards
    /// [`CheckState::fill`].
    pub fn colors_for(&self, state: InteractionState, fill_progress: f32) -> CheckboxColors {
        let fill_progress = fill_progress.clamp(0., 1.);

        let border = if state.focused && !state.disabled {
            self.focus_border
        } else {
            self.border.resolve(state)
        };

        let fill = self.fill.resolve(state);
        let mark = self.mark.resolve(state);

        CheckboxColors {
            background: self.background.resolve(state),
            border,
            fill: fill.alpha(fill.a * fill_progress),
            mark: mark.alpha(mark.a * fill_progress),
        }
    }
}
