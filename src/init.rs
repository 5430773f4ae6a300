use std::{path::Path, sync::Arc};

use anyhow::Context as _;
use gpui::{App, Window};

use crate::theme::{TextSizeKind, Theme, ThemeExt, ThemeScopes};

/// Installs the theme globals. A theme set before `init` is kept.
pub fn init(cx: &mut App) {
    if !cx.has_global::<ThemeScopes>() {
        log::debug!("installing default theme");
        cx.set_global(ThemeScopes::default());
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(TextSizeKind::Body.resolve(&cx.get_theme()));
}

/// Reads, parses and validates a theme file.
pub fn load_theme(path: impl AsRef<Path>) -> anyhow::Result<Arc<Theme>> {
    let path = path.as_ref();
    let theme = Theme::from_path(path)
        .with_context(|| format!("could not load theme \"{}\"", path.display()))?;

    Ok(Arc::new(theme))
}
