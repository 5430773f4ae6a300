use std::{
    fs,
    path::Path,
    sync::{Arc, LazyLock},
};

use gpui::{Pixels, Rgba, SharedString, px};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    ThemeError,
    deserializers::{de_line_height, de_pixels, de_string_or_non_empty_list},
};

/// The full set of design constants shared read-only by every component.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Theme {
    pub name: SharedString,
    pub kind: ThemeKind,
    pub colors: ThemeColors,
    pub layout: ThemeLayout,
    pub typography: ThemeTypography,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $fn_name:ident, $static_name:ident] ),+ ) => {
        $(
            static $static_name: LazyLock<Arc<Theme>> = LazyLock::new(|| {
                Arc::new(
                    Theme::from_json(include_str!($path))
                        .expect(concat!($path, " is a valid theme")),
                )
            });
        )+

        impl Theme {
            $(
                pub fn $fn_name() -> Arc<Theme> {
                    $static_name.clone()
                }
            )+
        }
    };
}

generate_builtin_themes!(
    ["../themes/dark.json", dark, DARK],
    ["../themes/light.json", light, LIGHT]
);

impl Theme {
    /// Parses and validates a theme. A theme that parses is always complete:
    /// a missing field is a parse error, never a resolution-time gap.
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_str(str.as_ref())?;
        theme.validate()?;
        log::debug!("loaded theme `{}`", theme.name);
        Ok(theme)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(contents)
    }

    pub fn is_dark(&self) -> bool {
        matches!(self.kind, ThemeKind::Dark)
    }
}

impl Default for Theme {
    fn default() -> Self {
        (*Theme::dark()).clone()
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub text: ThemeTextColors,
    pub border: ThemeBorderColors,
    pub accent: ThemeAccentColors,
    pub overlay: ThemeOverlayColors,
    pub skeleton: ThemeSkeletonColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    /// Text drawn on top of a solid accent fill.
    pub on_accent: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeBorderColors {
    pub default: Rgba,
    pub strong: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub success: Rgba,
    pub warning: Rgba,
    pub danger: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeOverlayColors {
    /// Dimming layer behind dialogs. Its alpha is replaced by `layout.opacity.scrim`.
    pub scrim: Rgba,
    pub focus_ring: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeSkeletonColors {
    pub base: Rgba,
    pub highlight: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeLayout {
    pub spacing: ThemeSpacing,
    pub radius: ThemeRadius,
    pub border_width: ThemeBorderWidth,
    pub opacity: ThemeOpacity,
    pub control_height: ThemeControlHeight,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeSpacing {
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeRadius {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    /// Pill shape. Renderers clamp it to half the element height.
    #[serde(deserialize_with = "de_pixels")]
    pub full: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeBorderWidth {
    #[serde(deserialize_with = "de_pixels")]
    pub thin: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub thick: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeOpacity {
    pub disabled: f32,
    /// How far hovered fills move towards the background.
    pub hover: f32,
    /// How far pressed fills move towards the background.
    pub pressed: f32,
    pub scrim: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeControlHeight {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTypography {
    pub default_font: ThemeFont,
    pub mono_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_line_height")]
    pub line_height: LineHeight,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

impl ThemeFont {
    /// The preferred face. The family list is never empty.
    pub fn primary_family(&self) -> SharedString {
        self.family[0].clone()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_pixels")]
    pub caption: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub body_sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub body: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub body_lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub heading: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTextWeights {
    pub regular: f32,
    pub medium: f32,
    pub semibold: f32,
    pub bold: f32,
}

/// How tall a line of text is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineHeight {
    /// A fixed height regardless of font size.
    Exact(Pixels),
    /// A multiple of the font size.
    Multiple(f32),
}

impl LineHeight {
    pub fn to_pixels(&self, font_size: Pixels) -> Pixels {
        match self {
            LineHeight::Exact(height) => *height,
            LineHeight::Multiple(multiple) => px(font_size.to_f64() as f32 * multiple),
        }
    }
}

// Mirrors `de_line_height` so serialized themes parse back.
impl Serialize for LineHeight {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LineHeight::Exact(height) => {
                serializer.serialize_str(&format!("{}px", height.to_f64() as f32))
            }
            LineHeight::Multiple(multiple) => serializer.serialize_f32(*multiple),
        }
    }
}
