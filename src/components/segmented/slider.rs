use gpui::{Bounds, Pixels, Point};

/// Selection and drag state of a segmented control.
///
/// The control reports each option's frame after layout. Dragging the
/// indicator tracks the option under the pointer and releasing commits it.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedSlider {
    frames: Vec<Option<Bounds<Pixels>>>,
    selected: usize,
    drag_target: Option<usize>,
}

impl SegmentedSlider {
    pub fn new(option_count: usize, selected: usize) -> Self {
        Self {
            frames: vec![None; option_count],
            selected: selected.min(option_count.saturating_sub(1)),
            drag_target: None,
        }
    }

    pub fn option_count(&self) -> usize {
        self.frames.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn drag_target(&self) -> Option<usize> {
        self.drag_target
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_target.is_some()
    }

    /// Selects an option directly, e.g. on click or from the keyboard.
    /// Out of range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.option_count() {
            self.selected = index;
        } else {
            log::trace!("ignoring segment {index} of {}", self.option_count());
        }
    }

    /// Records where option `index` was laid out.
    pub fn set_frame(&mut self, index: usize, bounds: Bounds<Pixels>) {
        if let Some(frame) = self.frames.get_mut(index) {
            *frame = Some(bounds);
        }
    }

    pub fn frame(&self, index: usize) -> Option<Bounds<Pixels>> {
        self.frames.get(index).copied().flatten()
    }

    /// The option under `point`, or `None` before any frame is known.
    ///
    /// Points left of every frame map to the first option and points right
    /// of every frame to the last one. Anything else maps to the option
    /// containing it, else the horizontally nearest one.
    pub fn option_at(&self, point: Point<Pixels>) -> Option<usize> {
        let measured = || {
            self.frames
                .iter()
                .enumerate()
                .filter_map(|(index, frame)| frame.map(|frame| (index, frame)))
        };

        let left_edge = measured().map(|(_, frame)| frame.left()).reduce(min_px)?;
        let right_edge = measured().map(|(_, frame)| frame.right()).reduce(max_px)?;

        if point.x < left_edge {
            return Some(0);
        }
        if point.x > right_edge {
            return Some(self.option_count() - 1);
        }

        if let Some((index, _)) = measured().find(|(_, frame)| frame.contains(&point)) {
            return Some(index);
        }

        measured()
            .map(|(index, frame)| (index, horizontal_distance(frame, point.x)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(index, _)| index)
    }

    pub fn drag_to(&mut self, point: Point<Pixels>) {
        if let Some(index) = self.option_at(point) {
            self.drag_target = Some(index);
        }
    }

    /// Ends a drag and commits the option under `point`. Returns the new
    /// selection if it changed. Without any measured frames the selection
    /// is kept.
    pub fn release(&mut self, point: Point<Pixels>) -> Option<usize> {
        self.drag_target = None;

        let Some(index) = self.option_at(point) else {
            log::trace!("released segmented slider before layout");
            return None;
        };

        if index == self.selected {
            return None;
        }

        self.selected = index;
        Some(index)
    }

    pub fn cancel_drag(&mut self) {
        self.drag_target = None;
    }

    /// Where the indicator should be drawn: over the drag target while
    /// dragging, else over the selection.
    pub fn indicator_bounds(&self) -> Option<Bounds<Pixels>> {
        self.frame(self.drag_target.unwrap_or(self.selected))
    }
}

fn min_px(a: Pixels, b: Pixels) -> Pixels {
    if b < a { b } else { a }
}

fn max_px(a: Pixels, b: Pixels) -> Pixels {
    if b > a { b } else { a }
}

fn horizontal_distance(frame: Bounds<Pixels>, x: Pixels) -> f64 {
    if x < frame.left() {
        (frame.left() - x).to_f64()
    } else if x > frame.right() {
        (x - frame.right()).to_f64()
    } else {
        0.
    }
}
