use std::time::Duration;

use gpui::{Context, Pixels, Rgba};

use crate::{
    theme::{RadiusKind, Theme},
    utils::RgbaExt,
};

/// One full sweep of the shimmer band.
pub const SHIMMER_PERIOD: Duration = Duration::from_millis(1500);
const SHIMMER_TICK: Duration = Duration::from_millis(16);
/// Width of the shimmer band as a fraction of the placeholder width.
const SHIMMER_BAND: f32 = 0.3;

/// Where the shimmer sweep is after `elapsed`, in `0..1`.
pub fn shimmer_phase(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 0.;
    }

    let period = period.as_nanos();
    ((elapsed.as_nanos() % period) as f64 / period as f64) as f32
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonStyle;

impl SkeletonStyle {
    pub fn resolve(radius: RadiusKind, theme: &Theme) -> ResolvedSkeleton {
        ResolvedSkeleton {
            base: theme.colors.skeleton.base,
            highlight: theme.colors.skeleton.highlight,
            corner_radius: radius.resolve(theme),
            period: SHIMMER_PERIOD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSkeleton {
    pub base: Rgba,
    pub highlight: Rgba,
    pub corner_radius: Pixels,
    pub period: Duration,
}

impl ResolvedSkeleton {
    /// Color at `position` (0 at the leading edge, 1 at the trailing edge)
    /// for a shimmer at `phase`. The band enters and leaves fully outside
    /// the placeholder.
    pub fn color_at(&self, position: f32, phase: f32) -> Rgba {
        let center = phase * (1. + SHIMMER_BAND * 2.) - SHIMMER_BAND;
        let intensity = 1. - ((position - center).abs() / SHIMMER_BAND).min(1.);

        self.base.mix(self.highlight, intensity)
    }
}

/// Drives the shimmer of every skeleton in a view.
///
/// Ticks are tagged with an epoch; stopping or restarting bumps it so ticks
/// scheduled before then are dropped.
pub struct Shimmer {
    elapsed: Duration,
    period: Duration,
    running: bool,
    epoch: usize,
}

impl Default for Shimmer {
    fn default() -> Self {
        Self::new(SHIMMER_PERIOD)
    }
}

impl Shimmer {
    pub fn new(period: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            period,
            running: false,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> f32 {
        shimmer_phase(self.elapsed, self.period)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts the sweep from the leading edge.
    pub fn start(&mut self, cx: &mut Context<Self>) {
        self.elapsed = Duration::ZERO;
        self.running = true;
        self.epoch = self.epoch.wrapping_add(1);
        self.schedule_tick(self.epoch, cx);
    }

    /// Stops the sweep, e.g. once the content has loaded.
    pub fn stop(&mut self) {
        self.running = false;
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn schedule_tick(&mut self, epoch: usize, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(SHIMMER_TICK).await;
            if let Some(this) = this.upgrade() {
                let _ = this.update(cx, |shimmer, cx| {
                    shimmer.tick(epoch, cx);
                });
            }
        })
        .detach();
    }

    fn tick(&mut self, epoch: usize, cx: &mut Context<Self>) {
        if epoch != self.epoch {
            return;
        }

        self.elapsed += SHIMMER_TICK;
        cx.notify();
        self.schedule_tick(epoch, cx);
    }
}
