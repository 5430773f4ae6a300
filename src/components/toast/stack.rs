use gpui::{Pixels, px};
use indexmap::IndexMap;

use crate::components::toast::{DismissReason, Toast};

/// How many toasts are drawn at once. Older ones stay in the stack but are
/// hidden until the ones above them go away.
pub const MAX_VISIBLE_TOASTS: usize = 4;

const SCALE_STEP: f32 = 0.05;
const OPACITY_STEP: f32 = 0.2;
const OFFSET_STEP: f32 = 12.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// Where a toast is drawn relative to the front of the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastLayout {
    pub scale: f32,
    pub opacity: f32,
    /// Distance the toast is pushed behind the one in front of it.
    pub offset_y: Pixels,
    pub visible: bool,
}

impl ToastLayout {
    /// Layout of the toast `index` places behind the newest one.
    pub fn for_index(index: usize) -> Self {
        if index >= MAX_VISIBLE_TOASTS {
            let last = Self::for_index(MAX_VISIBLE_TOASTS - 1);
            return Self {
                opacity: 0.,
                visible: false,
                ..last
            };
        }

        let index = index as f32;

        Self {
            scale: 1. - SCALE_STEP * index,
            opacity: 1. - OPACITY_STEP * index,
            offset_y: px(OFFSET_STEP * index),
            visible: true,
        }
    }
}

/// Toasts in the order they were pushed; the last one is the newest.
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: IndexMap<ToastId, Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        log::debug!("showing toast {id:?} `{}`", toast.title);
        self.toasts.insert(id, toast);
        id
    }

    /// Removes a toast, keeping the order of the others. Unknown ids are
    /// ignored.
    pub fn dismiss(&mut self, id: ToastId, reason: DismissReason) -> Option<Toast> {
        let toast = self.toasts.shift_remove(&id);

        match &toast {
            Some(toast) => log::debug!("dismissed toast {id:?} `{}` ({reason:?})", toast.title),
            None => log::trace!("toast {id:?} was already dismissed"),
        }

        toast
    }

    /// Removes every toast, oldest first.
    pub fn clear(&mut self) -> Vec<(ToastId, Toast)> {
        self.toasts.drain(..).collect()
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.get(&id)
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Position from the front of the stack, 0 being the newest toast.
    pub fn index_from_top(&self, id: ToastId) -> Option<usize> {
        self.toasts
            .get_index_of(&id)
            .map(|position| self.toasts.len() - 1 - position)
    }

    pub fn layout_for(&self, id: ToastId) -> Option<ToastLayout> {
        self.index_from_top(id).map(ToastLayout::for_index)
    }

    /// Toasts from the newest to the oldest, with their layout.
    pub fn iter(&self) -> impl Iterator<Item = (ToastId, &Toast, ToastLayout)> {
        self.toasts
            .iter()
            .rev()
            .enumerate()
            .map(|(index, (id, toast))| (*id, toast, ToastLayout::for_index(index)))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn titles(stack: &ToastStack) -> Vec<String> {
        stack
            .iter()
            .map(|(_, toast, _)| toast.title.to_string())
            .collect()
    }

    #[test]
    fn test_newest_is_on_top() {
        let mut stack = ToastStack::new();
        let first = stack.push(Toast::new("first"));
        let second = stack.push(Toast::new("second"));

        assert_eq!(stack.index_from_top(second), Some(0));
        assert_eq!(stack.index_from_top(first), Some(1));
        assert_eq!(titles(&stack), ["second", "first"]);
    }

    #[test]
    fn test_dismissing_keeps_order() {
        let mut stack = ToastStack::new();
        let ids: Vec<_> = (0..5)
            .map(|index| stack.push(Toast::new(format!("toast {index}"))))
            .collect();

        let removed = stack.dismiss(ids[0], DismissReason::Closed);
        assert_eq!(removed.map(|toast| toast.title.to_string()), Some("toast 0".into()));
        assert_eq!(stack.len(), 4);
        assert_eq!(titles(&stack), ["toast 4", "toast 3", "toast 2", "toast 1"]);

        stack.dismiss(ids[2], DismissReason::Swipe);
        assert_eq!(titles(&stack), ["toast 4", "toast 3", "toast 1"]);
        assert_eq!(stack.index_from_top(ids[1]), Some(2));
    }

    #[test]
    fn test_unknown_dismiss_is_a_no_op() {
        let mut stack = ToastStack::new();
        let id = stack.push(Toast::new("only"));

        assert!(stack.dismiss(id, DismissReason::Closed).is_some());
        assert!(stack.dismiss(id, DismissReason::Closed).is_none());
        assert!(stack.is_empty());
        assert_eq!(stack.index_from_top(id), None);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut stack = ToastStack::new();
        let first = stack.push(Toast::new("a"));
        stack.dismiss(first, DismissReason::Closed);

        assert_ne!(stack.push(Toast::new("b")), first);
    }

    #[test]
    fn test_layout_formula() {
        let front = ToastLayout::for_index(0);
        assert_eq!(front.scale, 1.);
        assert_eq!(front.opacity, 1.);
        assert_eq!(front.offset_y, px(0.));
        assert!(front.visible);

        let third = ToastLayout::for_index(2);
        assert!((third.scale - 0.9).abs() < 1e-6);
        assert!((third.opacity - 0.6).abs() < 1e-6);
        assert_eq!(third.offset_y, px(24.));
    }

    #[test]
    fn test_layout_hides_beyond_limit() {
        for index in MAX_VISIBLE_TOASTS..MAX_VISIBLE_TOASTS + 3 {
            let layout = ToastLayout::for_index(index);
            assert!(!layout.visible);
            assert_eq!(layout.opacity, 0.);
        }
    }

    #[test]
    fn test_layout_is_monotonic() {
        let layouts: Vec<_> = (0..8).map(ToastLayout::for_index).collect();

        for pair in layouts.windows(2) {
            assert!(pair[1].scale <= pair[0].scale);
            assert!(pair[1].opacity <= pair[0].opacity);
            assert!(pair[1].offset_y >= pair[0].offset_y);
            assert!(pair[1].opacity >= 0.);
        }
    }

    #[test]
    fn test_random_dismissals_preserve_relative_order() {
        let mut rng = rand::rng();

        for _ in 0..32 {
            let mut stack = ToastStack::new();
            let mut expected: Vec<ToastId> = (0..rng.random_range(1..12))
                .map(|index| stack.push(Toast::new(format!("{index}"))))
                .collect();

            while !expected.is_empty() {
                let victim = expected.remove(rng.random_range(0..expected.len()));
                stack.dismiss(victim, DismissReason::Closed);

                let mut remaining: Vec<_> = stack.iter().map(|(id, _, _)| id).collect();
                remaining.reverse();
                assert_eq!(remaining, expected);
            }
        }
    }
}
