use gpui::{Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};

use crate::{Theme, ThemeError, deserializers::de_opt_pixels};

/// A partial theme applied on top of a complete one.
///
/// Every field is optional; absent fields keep the base theme's value.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverride {
    pub name: Option<SharedString>,
    pub accent: AccentOverride,
    pub radius: RadiusOverride,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccentOverride {
    pub primary: Option<Rgba>,
    pub secondary: Option<Rgba>,
    pub success: Option<Rgba>,
    pub warning: Option<Rgba>,
    pub danger: Option<Rgba>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusOverride {
    #[serde(deserialize_with = "de_opt_pixels")]
    pub sm: Option<Pixels>,
    #[serde(deserialize_with = "de_opt_pixels")]
    pub md: Option<Pixels>,
    #[serde(deserialize_with = "de_opt_pixels")]
    pub lg: Option<Pixels>,
}

impl ThemeOverride {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<ThemeOverride, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn is_empty(&self) -> bool {
        self == &ThemeOverride::default()
    }
}

impl AccentOverride {
    fn apply(&self, theme: &mut Theme) {
        let accent = &mut theme.colors.accent;

        if let Some(value) = self.primary {
            accent.primary = value;
        }
        if let Some(value) = self.secondary {
            accent.secondary = value;
        }
        if let Some(value) = self.success {
            accent.success = value;
        }
        if let Some(value) = self.warning {
            accent.warning = value;
        }
        if let Some(value) = self.danger {
            accent.danger = value;
        }
    }
}

impl RadiusOverride {
    fn apply(&self, theme: &mut Theme) {
        let radius = &mut theme.layout.radius;

        if let Some(value) = self.sm {
            radius.sm = value;
        }
        if let Some(value) = self.md {
            radius.md = value;
        }
        if let Some(value) = self.lg {
            radius.lg = value;
        }
    }
}

impl Theme {
    /// Returns a new theme with `patch` applied. The result is validated like
    /// any other constructed theme.
    pub fn refine(&self, patch: &ThemeOverride) -> Result<Theme, ThemeError> {
        let mut theme = self.clone();

        if let Some(name) = &patch.name {
            theme.name = name.clone();
        }
        patch.accent.apply(&mut theme);
        patch.radius.apply(&mut theme);

        theme.validate()?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use gpui::px;

    use super::*;

    #[test]
    fn test_empty_override_is_identity() {
        let base = Theme::dark();
        let refined = base.refine(&ThemeOverride::default()).unwrap();
        assert_eq!(&refined, base.as_ref());
        assert!(ThemeOverride::default().is_empty());
    }

    #[test]
    fn test_override_replaces_only_given_fields() {
        let base = Theme::dark();
        let patch = ThemeOverride::from_json(
            r##"{ "name": "Brand", "accent": { "primary": "#ff0080" }, "radius": { "md": "4px" } }"##,
        )
        .unwrap();

        let refined = base.refine(&patch).unwrap();

        assert_eq!(refined.name, SharedString::from("Brand"));
        let primary = refined.colors.accent.primary;
        assert!((primary.r - 1.).abs() < 1e-6);
        assert!(primary.g.abs() < 1e-6);
        assert!((primary.b - 128. / 255.).abs() < 1e-6);
        assert_eq!(refined.colors.accent.danger, base.colors.accent.danger);
        assert_eq!(refined.layout.radius.md, px(4.));
        assert_eq!(refined.layout.radius.lg, base.layout.radius.lg);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let patch = ThemeOverride {
            radius: RadiusOverride {
                sm: Some(px(-1.)),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(Theme::light().refine(&patch).is_err());
    }
}
