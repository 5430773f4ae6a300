use std::{fmt, rc::Rc, time::Duration};

use gpui::{App, Pixels, Rgba, SharedString, px};

use crate::{
    style::{ResolvedFont, ResolvedPadding},
    theme::{ColorKind, TextSizeKind, TextWeightKind, Theme},
    utils::{ContentSlot, TransitionSpec},
};

mod manager;
pub use manager::*;

mod stack;
pub use stack::*;

mod swipe;
pub use swipe::*;

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

const TOAST_WIDTH: f32 = 356.;

/// Why a toast left the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Its duration ran out.
    Timeout,
    /// The user swiped it away.
    Swipe,
    /// Closed by the user or the app.
    Closed,
}

pub type OnDismissFn = Rc<dyn Fn(DismissReason, &mut App)>;

/// A transient notification.
#[derive(Clone)]
pub struct Toast {
    pub title: SharedString,
    pub description: Option<SharedString>,
    pub color: ColorKind,
    /// `None` keeps the toast up until it is dismissed.
    pub duration: Option<Duration>,
    pub content: Option<ContentSlot>,
    pub(crate) on_dismiss: Option<OnDismissFn>,
}

impl Toast {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: None,
            color: ColorKind::Default,
            duration: Some(DEFAULT_TOAST_DURATION),
            content: None,
            on_dismiss: None,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: ColorKind) -> Self {
        self.color = color;
        self
    }

    pub fn duration(mut self, duration: impl Into<Option<Duration>>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Keeps the toast up until it is dismissed.
    pub fn persistent(self) -> Self {
        self.duration(None)
    }

    pub fn content(mut self, content: ContentSlot) -> Self {
        self.content = Some(content);
        self
    }

    pub fn on_dismiss(mut self, on_dismiss: impl Fn(DismissReason, &mut App) + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(on_dismiss));
        self
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("color", &self.color)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle;

impl ToastStyle {
    pub fn resolve(color: ColorKind, theme: &Theme) -> ResolvedToast {
        let colors = &theme.colors;
        let spacing = &theme.layout.spacing;

        ResolvedToast {
            surface: colors.background.secondary,
            border: colors.border.default,
            accent: color.accent(theme),
            title: colors.text.primary,
            description: colors.text.secondary,
            corner_radius: theme.layout.radius.md,
            stroke_width: theme.layout.border_width.thin,
            padding: ResolvedPadding::uniform(spacing.md),
            gap: spacing.xs,
            width: px(TOAST_WIDTH),
            title_font: ResolvedFont::new(theme, TextSizeKind::Body, TextWeightKind::Semibold),
            description_font: ResolvedFont::new(
                theme,
                TextSizeKind::BodySm,
                TextWeightKind::Regular,
            ),
            enter: TransitionSpec::TOAST_ENTER,
            exit: TransitionSpec::TOAST_EXIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedToast {
    pub surface: Rgba,
    pub border: Rgba,
    /// Icon and leading stripe color.
    pub accent: Rgba,
    pub title: Rgba,
    pub description: Rgba,
    pub corner_radius: Pixels,
    pub stroke_width: Pixels,
    pub padding: ResolvedPadding,
    pub gap: Pixels,
    pub width: Pixels,
    pub title_font: ResolvedFont,
    pub description_font: ResolvedFont,
    pub enter: TransitionSpec,
    pub exit: TransitionSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let toast = Toast::new("Saved");

        assert_eq!(toast.duration, Some(DEFAULT_TOAST_DURATION));
        assert_eq!(toast.color, ColorKind::Default);
        assert_eq!(toast.persistent().duration, None);
        assert_eq!(
            Toast::new("Saved").duration(Duration::from_secs(1)).duration,
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn test_accent_follows_color_kind() {
        let theme = Theme::dark();

        for color in ColorKind::ALL {
            let toast = ToastStyle::resolve(color, &theme);
            assert_eq!(toast.accent, color.accent(&theme));
            assert_eq!(toast.surface, theme.colors.background.secondary);
        }
    }
}
