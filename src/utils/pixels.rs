use gpui::{Pixels, px};
use gpui_mosaic_theme::LineHeight;

pub trait PixelsExt {
    /// Calculates the top and bottom padding needed in order for
    /// the height of an element to reach this px value.
    fn padding_needed_for_height(&self, text_size: Pixels, line_height: LineHeight) -> Pixels;

    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn padding_needed_for_height(&self, text_size: Pixels, line_height: LineHeight) -> Pixels {
        let line_height = line_height.to_pixels(text_size).as_f32();

        px(((self.as_f32() - line_height) / 2.).max(0.))
    }

    fn as_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}
