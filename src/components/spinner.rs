use std::{f32::consts::TAU, time::Duration};

use gpui::{Pixels, Radians, Rgba, px, radians};

use crate::{
    theme::{ColorKind, ControlSize, Theme},
    utils::{PixelsExt, RgbaExt},
};

/// One full turn of the spinner.
pub const SPINNER_PERIOD: Duration = Duration::from_millis(800);
/// Share of the circle covered by the moving arc.
pub const SPINNER_ARC: f32 = 0.25;
const TRACK_ALPHA: f32 = 0.2;
/// Spinner diameter as a fraction of the control height.
const DIAMETER_RATIO: f32 = 0.5;

/// Rotation of the arc after `elapsed`, in `0..2π`.
pub fn spinner_rotation(elapsed: Duration) -> Radians {
    let period = SPINNER_PERIOD.as_nanos();
    let turns = (elapsed.as_nanos() % period) as f64 / period as f64;
    radians(turns as f32 * TAU)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerStyle {
    size: ControlSize,
    color: ColorKind,
}

impl SpinnerStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn resolve(&self, theme: &Theme) -> ResolvedSpinner {
        let arc = self.color.accent(theme);

        ResolvedSpinner {
            arc,
            track: arc.fade(TRACK_ALPHA),
            diameter: px(self.size.height(theme).as_f32() * DIAMETER_RATIO),
            stroke_width: theme.layout.border_width.thick,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSpinner {
    pub arc: Rgba,
    /// The faint full circle behind the arc.
    pub track: Rgba,
    pub diameter: Pixels,
    pub stroke_width: Pixels,
}
