use std::time::{Duration, Instant};

use gpui::{Pixels, px};

/// Distance a toast must travel to be dismissed on release.
pub const SWIPE_DISMISS_DISTANCE: f32 = 80.;
/// Fling speed, in pixels per second, that dismisses regardless of distance.
pub const SWIPE_DISMISS_VELOCITY: f32 = 600.;
/// A pointer resting longer than this before release has no fling velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Dismiss(SwipeDirection),
    /// Animate back to the resting position.
    SnapBack,
}

/// A horizontal drag on a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    origin_x: Pixels,
    offset: Pixels,
    /// Pixels per second, positive towards the right.
    velocity: f32,
    last_sample: (Pixels, Instant),
}

impl SwipeGesture {
    pub fn begin(x: Pixels, at: Instant) -> Self {
        Self {
            origin_x: x,
            offset: px(0.),
            velocity: 0.,
            last_sample: (x, at),
        }
    }

    /// Feeds a pointer move. Samples at the same instant as the previous one
    /// only move the toast.
    pub fn update(&mut self, x: Pixels, at: Instant) {
        let (last_x, last_at) = self.last_sample;
        let elapsed = at.saturating_duration_since(last_at).as_secs_f32();

        if elapsed > 0. {
            self.velocity = (x - last_x).to_f64() as f32 / elapsed;
            self.last_sample = (x, at);
        }

        self.offset = x - self.origin_x;
    }

    pub fn offset(&self) -> Pixels {
        self.offset
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Opacity while dragging, fading out towards the dismiss distance.
    pub fn opacity(&self) -> f32 {
        let progress = (self.offset.to_f64() as f32).abs() / SWIPE_DISMISS_DISTANCE;
        1. - progress.clamp(0., 1.) * 0.5
    }

    /// Velocity at `at`. Pointers that stay still send no moves, so a sample
    /// older than the velocity window means the pointer has stopped.
    pub fn velocity_at(&self, at: Instant) -> f32 {
        let (_, last_at) = self.last_sample;
        if at.saturating_duration_since(last_at) > VELOCITY_WINDOW {
            0.
        } else {
            self.velocity
        }
    }

    /// Ends the drag with the pointer lifted at `at`.
    pub fn release(self, at: Instant) -> SwipeOutcome {
        let offset = self.offset.to_f64() as f32;
        let velocity = self.velocity_at(at);

        let far_enough = offset.abs() >= SWIPE_DISMISS_DISTANCE;
        let fast_enough = velocity.abs() >= SWIPE_DISMISS_VELOCITY;

        if !far_enough && !fast_enough {
            return SwipeOutcome::SnapBack;
        }

        let towards = if far_enough { offset } else { velocity };
        if towards < 0. {
            SwipeOutcome::Dismiss(SwipeDirection::Left)
        } else {
            SwipeOutcome::Dismiss(SwipeDirection::Right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays `(x, millis)` pointer samples and returns the gesture with the
    /// instant the last sample was taken.
    fn drag(points: &[(f32, u64)]) -> (SwipeGesture, Instant) {
        let start = Instant::now();
        let at = |millis| start + Duration::from_millis(millis);

        let (x, millis) = points[0];
        let mut gesture = SwipeGesture::begin(px(x), at(millis));
        for (x, millis) in &points[1..] {
            gesture.update(px(*x), at(*millis));
        }

        let (_, last) = points[points.len() - 1];
        (gesture, at(last))
    }

    /// Releases right after the last sample.
    fn release(points: &[(f32, u64)]) -> SwipeOutcome {
        let (gesture, last) = drag(points);
        gesture.release(last)
    }

    #[test]
    fn test_short_slow_drag_snaps_back() {
        let (gesture, last) = drag(&[(100., 0), (130., 500), (140., 1000)]);
        assert_eq!(gesture.offset(), px(40.));
        assert_eq!(gesture.release(last), SwipeOutcome::SnapBack);
    }

    #[test]
    fn test_distance_threshold() {
        assert_eq!(
            release(&[(100., 0), (150., 1000), (180., 2000)]),
            SwipeOutcome::Dismiss(SwipeDirection::Right)
        );
        assert_eq!(
            release(&[(100., 0), (60., 1000), (20., 2000)]),
            SwipeOutcome::Dismiss(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_fling_dismisses_before_distance() {
        // 30px in 25ms is 1200px/s.
        let (gesture, last) = drag(&[(100., 0), (70., 25)]);
        assert!(gesture.offset().to_f64().abs() < SWIPE_DISMISS_DISTANCE as f64);
        assert_eq!(gesture.release(last), SwipeOutcome::Dismiss(SwipeDirection::Left));
    }

    #[test]
    fn test_fling_then_pause_snaps_back() {
        let (gesture, last) = drag(&[(100., 0), (70., 25)]);
        assert!((gesture.velocity() + 1200.).abs() < 1e-2);

        let paused = last + Duration::from_millis(400);
        assert_eq!(gesture.velocity_at(paused), 0.);
        assert_eq!(gesture.release(paused), SwipeOutcome::SnapBack);
    }

    #[test]
    fn test_release_within_window_keeps_fling() {
        let (gesture, last) = drag(&[(100., 0), (70., 25)]);
        assert_eq!(
            gesture.release(last + Duration::from_millis(50)),
            SwipeOutcome::Dismiss(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_pause_does_not_cancel_distance() {
        let (gesture, last) = drag(&[(100., 0), (0., 50)]);
        assert_eq!(
            gesture.release(last + Duration::from_secs(2)),
            SwipeOutcome::Dismiss(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_samples_without_elapsed_time_keep_velocity() {
        let (gesture, _) = drag(&[(0., 0), (10., 100), (60., 100)]);

        assert_eq!(gesture.offset(), px(60.));
        assert!((gesture.velocity() - 100.).abs() < 1e-3);
    }

    #[test]
    fn test_opacity_fades_with_distance() {
        assert_eq!(drag(&[(0., 0)]).0.opacity(), 1.);
        assert_eq!(drag(&[(0., 0), (-200., 2000)]).0.opacity(), 0.5);
    }
}
