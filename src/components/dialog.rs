use gpui::{Pixels, Rgba, SharedString, px};

use crate::{
    components::{ButtonStyle, ButtonVariant},
    style::{ResolvedFont, ResolvedPadding},
    theme::{ControlSize, TextSizeKind, TextWeightKind, Theme},
    utils::{ContentSlot, RgbaExt, TransitionSpec},
};

const DIALOG_MAX_WIDTH: f32 = 480.;

/// What a dialog button does, which decides how it looks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogActionRole {
    /// The action the dialog exists for.
    #[default]
    Confirm,
    /// Dismisses the dialog without doing anything.
    Cancel,
    /// A confirm action that destroys data.
    Destructive,
}

impl DialogActionRole {
    pub fn variant(&self) -> ButtonVariant {
        match self {
            DialogActionRole::Confirm => ButtonVariant::Primary,
            DialogActionRole::Cancel => ButtonVariant::Secondary,
            DialogActionRole::Destructive => ButtonVariant::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogAction {
    pub label: SharedString,
    pub role: DialogActionRole,
}

impl DialogAction {
    pub fn new(label: impl Into<SharedString>, role: DialogActionRole) -> Self {
        Self {
            label: label.into(),
            role,
        }
    }

    pub fn button_style(&self) -> ButtonStyle {
        ButtonStyle::new()
            .size(ControlSize::Medium)
            .variant(self.role.variant())
    }
}

/// A modal dialog's content.
#[derive(Debug, Clone)]
pub struct Dialog {
    pub title: SharedString,
    pub description: Option<SharedString>,
    pub content: Option<ContentSlot>,
    pub actions: Vec<DialogAction>,
    /// Whether clicking the scrim closes the dialog.
    pub dismissible: bool,
}

impl Dialog {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: None,
            content: None,
            actions: Vec::new(),
            dismissible: true,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: ContentSlot) -> Self {
        self.content = Some(content);
        self
    }

    pub fn action(mut self, label: impl Into<SharedString>, role: DialogActionRole) -> Self {
        self.actions.push(DialogAction::new(label, role));
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Actions ordered for display. Cancel actions go first so the
    /// confirming action ends up at the trailing edge.
    pub fn ordered_actions(&self) -> impl Iterator<Item = &DialogAction> {
        let cancel = self
            .actions
            .iter()
            .filter(|action| action.role == DialogActionRole::Cancel);
        let rest = self
            .actions
            .iter()
            .filter(|action| action.role != DialogActionRole::Cancel);

        cancel.chain(rest)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DialogStyle;

impl DialogStyle {
    pub fn resolve(theme: &Theme) -> ResolvedDialog {
        let colors = &theme.colors;
        let spacing = &theme.layout.spacing;

        ResolvedDialog {
            scrim: colors.overlay.scrim.alpha(theme.layout.opacity.scrim),
            surface: colors.background.secondary,
            border: colors.border.default,
            title: colors.text.primary,
            description: colors.text.secondary,
            corner_radius: theme.layout.radius.lg,
            padding: ResolvedPadding::uniform(spacing.xl),
            gap: spacing.md,
            action_gap: spacing.sm,
            max_width: px(DIALOG_MAX_WIDTH),
            title_font: ResolvedFont::new(theme, TextSizeKind::Heading, TextWeightKind::Semibold),
            description_font: ResolvedFont::new(theme, TextSizeKind::Body, TextWeightKind::Regular),
            transition: TransitionSpec::DIALOG,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDialog {
    pub scrim: Rgba,
    pub surface: Rgba,
    pub border: Rgba,
    pub title: Rgba,
    pub description: Rgba,
    pub corner_radius: Pixels,
    pub padding: ResolvedPadding,
    /// Space between title, description, content and actions.
    pub gap: Pixels,
    pub action_gap: Pixels,
    pub max_width: Pixels,
    pub title_font: ResolvedFont,
    pub description_font: ResolvedFont,
    pub transition: TransitionSpec,
}
