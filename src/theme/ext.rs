use std::sync::Arc;

use gpui::App;

use crate::theme::{Theme, ThemeOverride, ThemeScopes};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Replaces the app-wide theme. Active scopes keep shadowing it.
    fn set_theme<T: Into<Arc<Theme>>>(&mut self, theme: T);

    /// The theme in effect: the innermost scope, else the app-wide theme,
    /// else the built-in dark theme.
    fn get_theme(&self) -> Arc<Theme>;

    /// Runs `f` with `theme` shadowing every outer theme.
    fn with_theme_scope<T: Into<Arc<Theme>>, R>(
        &mut self,
        theme: T,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R;

    /// Runs `f` with the current theme refined by `patch`. An invalid patch
    /// is ignored and `f` sees the current theme.
    fn with_theme_override<R>(&mut self, patch: &ThemeOverride, f: impl FnOnce(&mut Self) -> R)
    -> R;
}

impl ThemeExt for App {
    fn set_theme<T: Into<Arc<Theme>>>(&mut self, theme: T) {
        let theme = theme.into();
        log::debug!("setting app theme to `{}`", theme.name);
        self.default_global::<ThemeScopes>().set_base(theme);
    }

    fn get_theme(&self) -> Arc<Theme> {
        self.try_global::<ThemeScopes>()
            .map(|scopes| scopes.current().clone())
            .unwrap_or_else(Theme::dark)
    }

    fn with_theme_scope<T: Into<Arc<Theme>>, R>(
        &mut self,
        theme: T,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let theme = theme.into();
        let depth = self.default_global::<ThemeScopes>().push(theme.clone());
        log::trace!("entered theme scope `{}` at depth {depth}", theme.name);

        let result = f(self);

        self.default_global::<ThemeScopes>().pop();
        result
    }

    fn with_theme_override<R>(
        &mut self,
        patch: &ThemeOverride,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        match self.get_theme().refine(patch) {
            Ok(theme) => self.with_theme_scope(theme, f),
            Err(error) => {
                log::warn!("ignoring theme override: {error}");
                f(self)
            }
        }
    }
}
