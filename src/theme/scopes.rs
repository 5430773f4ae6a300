use std::sync::Arc;

use gpui::Global;

use crate::theme::Theme;

/// The app-wide theme plus the stack of subtree overrides.
///
/// Later scopes shadow earlier ones; the innermost scope is the theme in effect.
#[derive(Debug, Clone)]
pub struct ThemeScopes {
    base: Arc<Theme>,
    overrides: Vec<Arc<Theme>>,
}

impl ThemeScopes {
    pub fn new(base: impl Into<Arc<Theme>>) -> Self {
        Self {
            base: base.into(),
            overrides: Vec::new(),
        }
    }

    /// The theme in effect at the current depth.
    pub fn current(&self) -> &Arc<Theme> {
        self.overrides.last().unwrap_or(&self.base)
    }

    pub fn base(&self) -> &Arc<Theme> {
        &self.base
    }

    pub fn set_base(&mut self, theme: impl Into<Arc<Theme>>) {
        self.base = theme.into();
    }

    /// Enters a scope and returns its depth (1 for the outermost override).
    pub fn push(&mut self, theme: impl Into<Arc<Theme>>) -> usize {
        self.overrides.push(theme.into());
        self.overrides.len()
    }

    /// Leaves the innermost scope. The base theme is never popped.
    pub fn pop(&mut self) -> Option<Arc<Theme>> {
        self.overrides.pop()
    }

    pub fn depth(&self) -> usize {
        self.overrides.len()
    }
}

impl Default for ThemeScopes {
    fn default() -> Self {
        Self::new(Theme::dark())
    }
}

impl Global for ThemeScopes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_is_current_without_overrides() {
        let scopes = ThemeScopes::new(Theme::light());
        assert!(Arc::ptr_eq(scopes.current(), &Theme::light()));
        assert_eq!(scopes.depth(), 0);
    }

    #[test]
    fn test_innermost_scope_wins() {
        let mut scopes = ThemeScopes::new(Theme::dark());

        assert_eq!(scopes.push(Theme::light()), 1);
        assert!(Arc::ptr_eq(scopes.current(), &Theme::light()));

        assert_eq!(scopes.push(Theme::dark()), 2);
        assert!(Arc::ptr_eq(scopes.current(), &Theme::dark()));

        scopes.pop();
        assert!(Arc::ptr_eq(scopes.current(), &Theme::light()));
    }

    #[test]
    fn test_pop_never_removes_base() {
        let mut scopes = ThemeScopes::new(Theme::light());

        assert!(scopes.pop().is_none());
        assert!(Arc::ptr_eq(scopes.current(), &Theme::light()));
    }

    #[test]
    fn test_set_base_keeps_overrides() {
        let mut scopes = ThemeScopes::new(Theme::dark());
        scopes.push(Theme::dark());
        scopes.set_base(Theme::light());

        assert!(Arc::ptr_eq(scopes.current(), &Theme::dark()));
        scopes.pop();
        assert!(Arc::ptr_eq(scopes.current(), &Theme::light()));
    }
}
