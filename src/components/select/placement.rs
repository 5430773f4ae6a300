use gpui::{Bounds, Pixels, Point, point, px};

/// Which side of its trigger a dropdown menu opens on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropdownPlacement {
    Top,
    #[default]
    Bottom,
}

impl DropdownPlacement {
    /// Opens towards the side with more room. Ties open downwards.
    pub fn resolve(trigger: Bounds<Pixels>, viewport: Bounds<Pixels>) -> Self {
        let space_above = trigger.top() - viewport.top();
        let space_below = viewport.bottom() - trigger.bottom();

        if space_below < space_above {
            DropdownPlacement::Top
        } else {
            DropdownPlacement::Bottom
        }
    }
}

/// An open dropdown menu.
///
/// The placement is decided once when the menu opens and kept until it
/// closes, so the menu doesn't jump sides while the page scrolls.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownSession {
    placement: DropdownPlacement,
    trigger: Bounds<Pixels>,
    viewport: Bounds<Pixels>,
    gap: Pixels,
    item_count: usize,
    highlighted: Option<usize>,
}

impl DropdownSession {
    /// Opens a menu of `item_count` items under (or above) `trigger`, with
    /// the highlight starting on the current selection.
    pub fn open(
        trigger: Bounds<Pixels>,
        viewport: Bounds<Pixels>,
        gap: Pixels,
        item_count: usize,
        selected: Option<usize>,
    ) -> Self {
        let placement = DropdownPlacement::resolve(trigger, viewport);
        log::trace!("opening dropdown with {item_count} items on {placement:?}");

        Self {
            placement,
            trigger,
            viewport,
            gap,
            item_count,
            highlighted: selected.filter(|index| *index < item_count),
        }
    }

    pub fn placement(&self) -> DropdownPlacement {
        self.placement
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Follows the trigger to a new position without changing sides.
    pub fn anchor_to(&mut self, trigger: Bounds<Pixels>) {
        self.trigger = trigger;
    }

    /// Tallest the menu may grow on its side of the trigger.
    pub fn max_height(&self) -> Pixels {
        let space = match self.placement {
            DropdownPlacement::Top => self.trigger.top() - self.viewport.top(),
            DropdownPlacement::Bottom => self.viewport.bottom() - self.trigger.bottom(),
        };

        px(((space - self.gap).to_f64() as f32).max(0.))
    }

    /// Top-left corner of a menu of `menu_height`, clamped to
    /// [`Self::max_height`].
    pub fn menu_origin(&self, menu_height: Pixels) -> Point<Pixels> {
        let max_height = self.max_height();
        let menu_height = if menu_height > max_height {
            max_height
        } else {
            menu_height
        };

        let y = match self.placement {
            DropdownPlacement::Top => self.trigger.top() - self.gap - menu_height,
            DropdownPlacement::Bottom => self.trigger.bottom() + self.gap,
        };

        point(self.trigger.left(), y)
    }

    pub fn move_highlight_up(&mut self) {
        if self.item_count == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            None | Some(0) => self.item_count - 1,
            Some(index) => index - 1,
        });
    }

    pub fn move_highlight_down(&mut self) {
        if self.item_count == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            Some(index) if index + 1 < self.item_count => index + 1,
            _ => 0,
        });
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Follows a change to the menu's items. A highlight past the new end
    /// is cleared.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.highlighted = self.highlighted.filter(|index| *index < item_count);
    }

    /// Highlights the item under the pointer. Out of range indices clear
    /// the highlight.
    pub fn highlight(&mut self, index: usize) {
        self.highlighted = (index < self.item_count).then_some(index);
    }

    /// The item to select when the user confirms, if any is highlighted.
    pub fn confirm(&self) -> Option<usize> {
        self.highlighted
    }
}
