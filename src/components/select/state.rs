use gpui::{Bounds, Pixels, SharedString};
use indexmap::IndexMap;
use thiserror::Error;

use crate::components::select::{DropdownSession, SelectItem};

/// Options, selection and the open menu of one select.
pub struct SelectState<I: SelectItem> {
    items: IndexMap<SharedString, I>,
    selected: Option<SharedString>,
    session: Option<DropdownSession>,
}

impl<I: SelectItem> Default for SelectState<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: SelectItem> SelectState<I> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            selected: None,
            session: None,
        }
    }

    pub fn with_items(items: impl IntoIterator<Item = I>) -> Self {
        let mut state = Self::new();
        for item in items {
            state.push_item(item);
        }
        state
    }

    /// Adds an option. An option with the same name is replaced in place.
    /// An open menu picks up the new option.
    pub fn push_item(&mut self, item: impl Into<I>) {
        let item = item.into();
        self.items.insert(item.name(), item);

        let item_count = self.items.len();
        if let Some(session) = self.session.as_mut() {
            session.set_item_count(item_count);
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &I> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<&I> {
        self.selected
            .as_ref()
            .and_then(|name| self.items.get(name))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
            .as_ref()
            .and_then(|name| self.items.get_index_of(name))
    }

    pub fn select_item(
        &mut self,
        item_name: impl Into<SharedString>,
    ) -> Result<(), SelectItemError> {
        let item_name = item_name.into();

        if !self.items.contains_key(&item_name) {
            return Err(SelectItemError::InvalidName(item_name));
        }

        self.selected = Some(item_name);
        Ok(())
    }

    /// Selects the option at `index`. Out of range indices are ignored.
    pub fn select_index(&mut self, index: usize) {
        match self.items.get_index(index) {
            Some((name, _)) => self.selected = Some(name.clone()),
            None => log::trace!("ignoring selection of option {index} of {}", self.len()),
        }
    }

    pub fn remove_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DropdownSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut DropdownSession> {
        self.session.as_mut()
    }

    /// Opens the menu. Does nothing when it is already open so the side it
    /// opened on is kept.
    pub fn open(&mut self, trigger: Bounds<Pixels>, viewport: Bounds<Pixels>, gap: Pixels) {
        if self.session.is_some() {
            return;
        }

        self.session = Some(DropdownSession::open(
            trigger,
            viewport,
            gap,
            self.len(),
            self.selected_index(),
        ));
    }

    pub fn close(&mut self) {
        self.session = None;
    }

    /// Selects the highlighted option and closes the menu. Returns whether
    /// the selection changed.
    pub fn confirm(&mut self) -> bool {
        let Some(index) = self.session.take().and_then(|session| session.confirm()) else {
            return false;
        };

        let previous = self.selected_index();
        self.select_index(index);
        previous != Some(index)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectItemError {
    #[error("no option is named `{0}`")]
    InvalidName(SharedString),
}
