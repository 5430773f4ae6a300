use gpui::Pixels;

use crate::{LineHeight, Theme, ThemeError, ThemeFont};

impl Theme {
    /// Checks the invariants serde can't express.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.name.trim().is_empty() {
            return Err(ThemeError::invalid("name", "must not be empty"));
        }

        let layout = &self.layout;

        for (field, value) in [
            ("layout.spacing.xs", layout.spacing.xs),
            ("layout.spacing.sm", layout.spacing.sm),
            ("layout.spacing.md", layout.spacing.md),
            ("layout.spacing.lg", layout.spacing.lg),
            ("layout.spacing.xl", layout.spacing.xl),
            ("layout.radius.sm", layout.radius.sm),
            ("layout.radius.md", layout.radius.md),
            ("layout.radius.lg", layout.radius.lg),
            ("layout.radius.full", layout.radius.full),
            ("layout.border_width.thin", layout.border_width.thin),
            ("layout.border_width.thick", layout.border_width.thick),
        ] {
            non_negative(field, value)?;
        }

        for (field, value) in [
            ("layout.opacity.disabled", layout.opacity.disabled),
            ("layout.opacity.hover", layout.opacity.hover),
            ("layout.opacity.pressed", layout.opacity.pressed),
            ("layout.opacity.scrim", layout.opacity.scrim),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ThemeError::invalid(
                    field,
                    format!("{value} is outside of 0..=1"),
                ));
            }
        }

        let heights = &layout.control_height;
        positive("layout.control_height.sm", heights.sm)?;
        if heights.sm > heights.md || heights.md > heights.lg {
            return Err(ThemeError::invalid(
                "layout.control_height",
                "heights must ascend from sm to lg",
            ));
        }

        validate_font("typography.default_font", &self.typography.default_font)?;
        validate_font("typography.mono_font", &self.typography.mono_font)?;

        Ok(())
    }
}

fn validate_font(field: &'static str, font: &ThemeFont) -> Result<(), ThemeError> {
    if font.family.iter().any(|family| family.trim().is_empty()) {
        return Err(ThemeError::invalid(field, "font family names must not be empty"));
    }

    match font.line_height {
        LineHeight::Exact(height) => positive(field, height)?,
        LineHeight::Multiple(multiple) => {
            if !(multiple > 0.) {
                return Err(ThemeError::invalid(field, "line height multiple must be positive"));
            }
        }
    }

    let sizes = &font.sizes;
    for size in [
        sizes.caption,
        sizes.body_sm,
        sizes.body,
        sizes.body_lg,
        sizes.heading,
    ] {
        positive(field, size)?;
    }

    let weights = &font.weights;
    for weight in [
        weights.regular,
        weights.medium,
        weights.semibold,
        weights.bold,
    ] {
        if !(1.0..=1000.0).contains(&weight) {
            return Err(ThemeError::invalid(
                field,
                format!("font weight {weight} is outside of 1..=1000"),
            ));
        }
    }

    Ok(())
}

fn non_negative(field: &'static str, value: Pixels) -> Result<(), ThemeError> {
    let value = value.to_f64();
    // Also rejects NaN.
    if !(value >= 0.) {
        return Err(ThemeError::invalid(field, format!("{value}px is negative")));
    }
    Ok(())
}

fn positive(field: &'static str, value: Pixels) -> Result<(), ThemeError> {
    let value = value.to_f64();
    if !(value > 0.) {
        return Err(ThemeError::invalid(field, format!("{value}px must be positive")));
    }
    Ok(())
}
