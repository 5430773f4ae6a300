use gpui::Rgba;
use gpui_transitions::Lerp as TransitionGoal;

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

pub const TRANSPARENT: Rgba = Rgba {
    r: 0.,
    g: 0.,
    b: 0.,
    a: 0.,
};

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Scales the existing alpha value.
    fn fade(self, factor: f32) -> Self;

    /// Moves this color towards `other` by `amount` (0 keeps `self`, 1 yields `other`).
    fn mix(self, other: Rgba, amount: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn fade(mut self, factor: f32) -> Self {
        self.a *= factor;
        self
    }

    fn mix(self, other: Rgba, amount: f32) -> Self {
        self.lerp(&other, amount.clamp(0., 1.))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_a() {
        let color = rgb_a(0xFF0000, 0.5);
        assert_eq!(color, Rgba { r: 1., g: 0., b: 0., a: 0.5 });
    }

    #[test]
    fn test_mix_endpoints() {
        let black = rgb_a(0x000000, 1.);
        let white = rgb_a(0xFFFFFF, 1.);

        assert_eq!(black.mix(white, 0.), black);
        assert_eq!(black.mix(white, 1.), white);
        assert_eq!(black.mix(white, 2.), white, "amount is clamped");

        let half = black.mix(white, 0.5);
        assert!((half.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_fade_scales_alpha() {
        assert_eq!(rgb_a(0x336699, 0.8).fade(0.5).a, 0.4);
    }
}
