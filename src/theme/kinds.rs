#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{Pixels, Rgba};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Control size tokens shared by every sized component.
///
/// Each size has a matching height, horizontal padding, corner radius and
/// text size in the theme.
#[derive(Assoc, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[func(pub fn height(&self, theme: &Theme) -> Pixels)]
#[func(pub fn padding_x(&self, theme: &Theme) -> Pixels)]
#[func(pub fn gap(&self, theme: &Theme) -> Pixels)]
#[func(pub fn corner_radius(&self, theme: &Theme) -> Pixels)]
#[func(pub fn text_size(&self, theme: &Theme) -> Pixels)]
#[func(pub fn text_size_kind(&self) -> TextSizeKind)]
pub enum ControlSize {
    #[assoc(height = theme.layout.control_height.sm)]
    #[assoc(padding_x = theme.layout.spacing.sm)]
    #[assoc(gap = theme.layout.spacing.xs)]
    #[assoc(corner_radius = theme.layout.radius.sm)]
    #[assoc(text_size = theme.typography.default_font.sizes.body_sm)]
    #[assoc(text_size_kind = TextSizeKind::BodySm)]
    Small,
    #[default]
    #[assoc(height = theme.layout.control_height.md)]
    #[assoc(padding_x = theme.layout.spacing.md)]
    #[assoc(gap = theme.layout.spacing.sm)]
    #[assoc(corner_radius = theme.layout.radius.md)]
    #[assoc(text_size = theme.typography.default_font.sizes.body)]
    #[assoc(text_size_kind = TextSizeKind::Body)]
    Medium,
    #[assoc(height = theme.layout.control_height.lg)]
    #[assoc(padding_x = theme.layout.spacing.lg)]
    #[assoc(gap = theme.layout.spacing.sm)]
    #[assoc(corner_radius = theme.layout.radius.lg)]
    #[assoc(text_size = theme.typography.default_font.sizes.body_lg)]
    #[assoc(text_size_kind = TextSizeKind::BodyLg)]
    Large,
}

impl ControlSize {
    pub const ALL: [ControlSize; 3] = [Self::Small, Self::Medium, Self::Large];
}

/// Semantic color roles used by toggles, chips, toasts and indicators.
#[derive(Assoc, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[func(pub fn accent(&self, theme: &Theme) -> Rgba)]
#[func(pub fn on_accent(&self, theme: &Theme) -> Rgba)]
pub enum ColorKind {
    /// Neutral, follows the text color.
    #[default]
    #[assoc(accent = theme.colors.text.primary)]
    #[assoc(on_accent = theme.colors.background.primary)]
    Default,
    #[assoc(accent = theme.colors.accent.primary)]
    #[assoc(on_accent = theme.colors.text.on_accent)]
    Primary,
    #[assoc(accent = theme.colors.accent.secondary)]
    #[assoc(on_accent = theme.colors.text.on_accent)]
    Secondary,
    #[assoc(accent = theme.colors.accent.success)]
    #[assoc(on_accent = theme.colors.text.on_accent)]
    Success,
    #[assoc(accent = theme.colors.accent.warning)]
    #[assoc(on_accent = theme.colors.text.on_accent)]
    Warning,
    #[assoc(accent = theme.colors.accent.danger)]
    #[assoc(on_accent = theme.colors.text.on_accent)]
    Danger,
}

impl ColorKind {
    pub const ALL: [ColorKind; 6] = [
        Self::Default,
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Danger,
    ];
}

/// Spacing variants that resolve to theme-defined values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum SpacingKind {
    #[assoc(resolve = theme.layout.spacing.xs)]
    Xs,
    #[assoc(resolve = theme.layout.spacing.sm)]
    Sm,
    #[assoc(resolve = theme.layout.spacing.md)]
    Md,
    #[assoc(resolve = theme.layout.spacing.lg)]
    Lg,
    #[assoc(resolve = theme.layout.spacing.xl)]
    Xl,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum RadiusKind {
    #[assoc(resolve = theme.layout.radius.sm)]
    Sm,
    #[assoc(resolve = theme.layout.radius.md)]
    Md,
    #[assoc(resolve = theme.layout.radius.lg)]
    Lg,
    /// Pill or circle.
    #[assoc(resolve = theme.layout.radius.full)]
    Full,
}

/// Text size variants that resolve to theme-defined values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
#[func(pub fn resolve_mono(&self, theme: &Theme) -> Pixels)]
pub enum TextSizeKind {
    #[assoc(resolve = theme.typography.default_font.sizes.caption)]
    #[assoc(resolve_mono = theme.typography.mono_font.sizes.caption)]
    Caption,
    #[assoc(resolve = theme.typography.default_font.sizes.body_sm)]
    #[assoc(resolve_mono = theme.typography.mono_font.sizes.body_sm)]
    BodySm,
    #[assoc(resolve = theme.typography.default_font.sizes.body)]
    #[assoc(resolve_mono = theme.typography.mono_font.sizes.body)]
    Body,
    #[assoc(resolve = theme.typography.default_font.sizes.body_lg)]
    #[assoc(resolve_mono = theme.typography.mono_font.sizes.body_lg)]
    BodyLg,
    #[assoc(resolve = theme.typography.default_font.sizes.heading)]
    #[assoc(resolve_mono = theme.typography.mono_font.sizes.heading)]
    Heading,
}

/// Font weight variants that resolve to theme-defined values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[func(pub fn resolve(&self, theme: &Theme) -> f32)]
pub enum TextWeightKind {
    #[assoc(resolve = theme.typography.default_font.weights.regular)]
    Regular,
    #[assoc(resolve = theme.typography.default_font.weights.medium)]
    Medium,
    #[assoc(resolve = theme.typography.default_font.weights.semibold)]
    Semibold,
    #[assoc(resolve = theme.typography.default_font.weights.bold)]
    Bold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_size_ordering() {
        let theme = Theme::dark();

        for pair in ControlSize::ALL.windows(2) {
            let (smaller, larger) = (pair[0], pair[1]);
            assert!(smaller.height(&theme) <= larger.height(&theme));
            assert!(smaller.padding_x(&theme) <= larger.padding_x(&theme));
            assert!(smaller.corner_radius(&theme) <= larger.corner_radius(&theme));
            assert!(smaller.text_size(&theme) <= larger.text_size(&theme));
        }
    }

    #[test]
    fn test_control_size_text_kind_matches_text_size() {
        let theme = Theme::light();

        for size in ControlSize::ALL {
            assert_eq!(size.text_size_kind().resolve(&theme), size.text_size(&theme));
        }
    }

    #[test]
    fn test_color_kind_resolves_against_theme() {
        let theme = Theme::dark();

        assert_eq!(ColorKind::Primary.accent(&theme), theme.colors.accent.primary);
        assert_eq!(ColorKind::Danger.accent(&theme), theme.colors.accent.danger);
        assert_eq!(ColorKind::Default.accent(&theme), theme.colors.text.primary);
        assert_eq!(
            ColorKind::Default.on_accent(&theme),
            theme.colors.background.primary
        );
    }

    #[test]
    fn test_spacing_and_radius_ordering() {
        let theme = Theme::dark();

        let spacing = [
            SpacingKind::Xs,
            SpacingKind::Sm,
            SpacingKind::Md,
            SpacingKind::Lg,
            SpacingKind::Xl,
        ]
        .map(|kind| kind.resolve(&theme));
        assert!(spacing.windows(2).all(|pair| pair[0] <= pair[1]));

        let radius = [RadiusKind::Sm, RadiusKind::Md, RadiusKind::Lg, RadiusKind::Full]
            .map(|kind| kind.resolve(&theme));
        assert!(radius.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_tokens_deserialize_from_snake_case() {
        let size: ControlSize = serde_json::from_str(r#""large""#).unwrap();
        assert_eq!(size, ControlSize::Large);

        let color: ColorKind = serde_json::from_str(r#""warning""#).unwrap();
        assert_eq!(color, ColorKind::Warning);

        assert!(serde_json::from_str::<ControlSize>(r#""huge""#).is_err());
    }
}
