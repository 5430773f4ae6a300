use std::sync::atomic::{AtomicU64, Ordering};

use gpui::{Bounds, Pixels, Point};

static NEXT_OVERLAY_ID: AtomicU64 = AtomicU64::new(0);

fn next_overlay_id() -> OverlayId {
    OverlayId(NEXT_OVERLAY_ID.fetch_add(1, Ordering::SeqCst))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

/// An opaque region drawn above the window content, such as an open menu
/// or a dialog panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRegion {
    pub id: OverlayId,
    pub bounds: Bounds<Pixels>,
}

/// The overlay regions of a window, bottom to top.
///
/// Pointer events are routed through [`OverlayLayer::hit_test`]: the topmost
/// region under the pointer takes the event, anything else falls through to
/// the content beneath.
#[derive(Debug, Default)]
pub struct OverlayLayer {
    regions: Vec<OverlayRegion>,
}

impl OverlayLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a region on top of the existing ones. Returns its id.
    pub fn add(&mut self, bounds: Bounds<Pixels>) -> OverlayId {
        let id = next_overlay_id();
        self.regions.push(OverlayRegion { id, bounds });
        id
    }

    /// Removes a region by its id. Returns true if found and removed.
    pub fn remove(&mut self, id: OverlayId) -> bool {
        if let Some(pos) = self.regions.iter().position(|region| region.id == id) {
            self.regions.remove(pos);
            true
        } else {
            log::trace!("overlay {id:?} was already removed");
            false
        }
    }

    /// Moves the bounds of a region, e.g. after its anchor was laid out again.
    pub fn set_bounds(&mut self, id: OverlayId, bounds: Bounds<Pixels>) -> bool {
        match self.regions.iter_mut().find(|region| region.id == id) {
            Some(region) => {
                region.bounds = bounds;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions from the bottom to the top.
    pub fn regions(&self) -> &[OverlayRegion] {
        &self.regions
    }

    /// The topmost region containing `point`, or `None` when the point is
    /// over plain content.
    pub fn hit_test(&self, point: Point<Pixels>) -> Option<OverlayId> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.bounds.contains(&point))
            .map(|region| region.id)
    }
}
