use std::{collections::HashMap, time::Duration};

use gpui::{Context, EventEmitter};

use crate::components::toast::{DismissReason, SwipeOutcome, Toast, ToastId, ToastStack};

/// Emitted after a toast leaves the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDismissed {
    pub id: ToastId,
    pub reason: DismissReason,
}

/// Owns the toast stack and the auto-dismiss timers.
///
/// Every scheduled timer carries a generation. Dismissing, holding or
/// rescheduling a toast replaces its generation, so timers started before
/// that fire into nothing.
#[derive(Default)]
pub struct ToastManager {
    stack: ToastStack,
    timers: HashMap<ToastId, usize>,
    generation: usize,
}

impl EventEmitter<ToastDismissed> for ToastManager {}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stack(&self) -> &ToastStack {
        &self.stack
    }

    pub fn push(&mut self, toast: Toast, cx: &mut Context<Self>) -> ToastId {
        let duration = toast.duration;
        let id = self.stack.push(toast);

        if let Some(duration) = duration {
            self.schedule_dismiss(id, duration, cx);
        }

        cx.notify();
        id
    }

    /// Removes a toast and runs its dismiss callback. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId, reason: DismissReason, cx: &mut Context<Self>) {
        self.timers.remove(&id);

        let Some(toast) = self.stack.dismiss(id, reason) else {
            return;
        };

        if let Some(on_dismiss) = toast.on_dismiss {
            on_dismiss(reason, cx);
        }

        cx.emit(ToastDismissed { id, reason });
        cx.notify();
    }

    pub fn dismiss_all(&mut self, cx: &mut Context<Self>) {
        self.timers.clear();

        for (id, toast) in self.stack.clear() {
            if let Some(on_dismiss) = toast.on_dismiss {
                on_dismiss(DismissReason::Closed, cx);
            }
            cx.emit(ToastDismissed {
                id,
                reason: DismissReason::Closed,
            });
        }

        cx.notify();
    }

    /// Pauses the auto-dismiss timer, e.g. while the pointer is over the toast.
    pub fn hold(&mut self, id: ToastId) {
        if self.timers.remove(&id).is_some() {
            log::trace!("holding toast {id:?}");
        }
    }

    /// Restarts the full auto-dismiss duration of a held toast. Toasts that
    /// aren't held keep their running timer.
    pub fn release(&mut self, id: ToastId, cx: &mut Context<Self>) {
        if !self.is_held(id) {
            return;
        }
        let Some(duration) = self.stack.get(id).and_then(|toast| toast.duration) else {
            return;
        };

        self.schedule_dismiss(id, duration, cx);
    }

    pub fn is_held(&self, id: ToastId) -> bool {
        self.stack.get(id).is_some_and(|toast| toast.duration.is_some())
            && !self.timers.contains_key(&id)
    }

    /// Finishes a swipe on a toast. Snapping back restarts the timer if the
    /// swipe held the toast.
    pub fn end_swipe(&mut self, id: ToastId, outcome: SwipeOutcome, cx: &mut Context<Self>) {
        match outcome {
            SwipeOutcome::Dismiss(_) => self.dismiss(id, DismissReason::Swipe, cx),
            SwipeOutcome::SnapBack => self.release(id, cx),
        }
    }

    fn schedule_dismiss(&mut self, id: ToastId, duration: Duration, cx: &mut Context<Self>) {
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        self.timers.insert(id, generation);

        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(duration).await;
            if let Some(this) = this.upgrade() {
                let _ = this.update(cx, |manager, cx| {
                    manager.timer_fired(id, generation, cx);
                });
            }
        })
        .detach();
    }

    fn timer_fired(&mut self, id: ToastId, generation: usize, cx: &mut Context<Self>) {
        if self.timers.get(&id) != Some(&generation) {
            log::trace!("ignoring stale timer for toast {id:?}");
            return;
        }

        self.dismiss(id, DismissReason::Timeout, cx);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use gpui::{AppContext, Entity, TestAppContext};

    use super::*;
    use crate::components::toast::{DEFAULT_TOAST_DURATION, SwipeDirection};

    fn manager(cx: &mut TestAppContext) -> Entity<ToastManager> {
        cx.new(|_cx| ToastManager::new())
    }

    fn advance(cx: &mut TestAppContext, duration: Duration) {
        cx.executor().advance_clock(duration);
        cx.run_until_parked();
    }

    fn contains(manager: &Entity<ToastManager>, id: ToastId, cx: &mut TestAppContext) -> bool {
        manager.read_with(cx, |manager, _| manager.stack().contains(id))
    }

    #[gpui::test]
    fn test_toast_dismisses_after_duration(cx: &mut TestAppContext) {
        let manager = manager(cx);
        let reasons = Rc::new(RefCell::new(Vec::new()));

        let id = manager.update(cx, |manager, cx| {
            let reasons = reasons.clone();
            manager.push(
                Toast::new("Saved")
                    .on_dismiss(move |reason, _cx| reasons.borrow_mut().push(reason)),
                cx,
            )
        });

        advance(cx, DEFAULT_TOAST_DURATION - Duration::from_millis(1));
        assert!(contains(&manager, id, cx));

        advance(cx, Duration::from_millis(1));
        assert!(!contains(&manager, id, cx));
        assert_eq!(*reasons.borrow(), [DismissReason::Timeout]);
    }

    #[gpui::test]
    fn test_persistent_toast_stays(cx: &mut TestAppContext) {
        let manager = manager(cx);
        let id = manager.update(cx, |manager, cx| {
            manager.push(Toast::new("Offline").persistent(), cx)
        });

        advance(cx, Duration::from_secs(60));
        assert!(contains(&manager, id, cx));
    }

    #[gpui::test]
    fn test_manual_dismiss_cancels_timer(cx: &mut TestAppContext) {
        let manager = manager(cx);
        let reasons = Rc::new(RefCell::new(Vec::new()));

        let id = manager.update(cx, |manager, cx| {
            let reasons = reasons.clone();
            let id = manager.push(
                Toast::new("Copied")
                    .on_dismiss(move |reason, _cx| reasons.borrow_mut().push(reason)),
                cx,
            );
            manager.dismiss(id, DismissReason::Closed, cx);
            manager.dismiss(id, DismissReason::Closed, cx);
            id
        });

        advance(cx, DEFAULT_TOAST_DURATION * 2);
        assert!(!contains(&manager, id, cx));
        assert_eq!(*reasons.borrow(), [DismissReason::Closed]);
    }

    #[gpui::test]
    fn test_hold_and_release_restart_duration(cx: &mut TestAppContext) {
        let manager = manager(cx);
        let duration = Duration::from_secs(2);

        let id = manager.update(cx, |manager, cx| {
            manager.push(Toast::new("Uploading").duration(duration), cx)
        });

        advance(cx, Duration::from_millis(1500));
        manager.update(cx, |manager, _cx| manager.hold(id));
        assert!(manager.read_with(cx, |manager, _| manager.is_held(id)));

        advance(cx, Duration::from_secs(10));
        assert!(contains(&manager, id, cx));

        manager.update(cx, |manager, cx| manager.release(id, cx));
        advance(cx, Duration::from_millis(1500));
        assert!(contains(&manager, id, cx), "release restarts the full duration");

        advance(cx, Duration::from_millis(500));
        assert!(!contains(&manager, id, cx));
    }

    #[gpui::test]
    fn test_swipe_outcomes(cx: &mut TestAppContext) {
        let manager = manager(cx);

        let (kept, swiped) = manager.update(cx, |manager, cx| {
            let kept = manager.push(Toast::new("Kept"), cx);
            let swiped = manager.push(Toast::new("Swiped"), cx);

            manager.hold(kept);
            manager.end_swipe(kept, SwipeOutcome::SnapBack, cx);
            manager.end_swipe(swiped, SwipeOutcome::Dismiss(SwipeDirection::Right), cx);
            (kept, swiped)
        });

        assert!(contains(&manager, kept, cx));
        assert!(!contains(&manager, swiped, cx));
        assert!(!manager.read_with(cx, |manager, _| manager.is_held(kept)));
    }

    #[gpui::test]
    fn test_snap_back_without_hold_keeps_timer(cx: &mut TestAppContext) {
        let manager = manager(cx);
        let duration = Duration::from_secs(2);

        let id = manager.update(cx, |manager, cx| {
            manager.push(Toast::new("Moved").duration(duration), cx)
        });

        advance(cx, Duration::from_millis(1500));
        manager.update(cx, |manager, cx| {
            manager.end_swipe(id, SwipeOutcome::SnapBack, cx);
            manager.release(id, cx);
        });

        advance(cx, Duration::from_millis(500));
        assert!(!contains(&manager, id, cx));
    }

    #[gpui::test]
    fn test_dismissals_report_reasons(cx: &mut TestAppContext) {
        let manager = manager(cx);
        let events = Rc::new(RefCell::new(Vec::new()));
        let callbacks = Rc::new(RefCell::new(Vec::new()));

        let _subscription = cx.update(|cx| {
            let events = events.clone();
            cx.subscribe(&manager, move |_, event: &ToastDismissed, _cx| {
                events.borrow_mut().push((event.id, event.reason));
            })
        });

        let toast = |title: &'static str, duration: Option<Duration>| {
            let callbacks = callbacks.clone();
            Toast::new(title)
                .duration(duration)
                .on_dismiss(move |reason, _cx| callbacks.borrow_mut().push((title, reason)))
        };

        let [timed, closed, swiped, rest_a, rest_b] = manager.update(cx, |manager, cx| {
            [
                manager.push(toast("timed", Some(Duration::from_secs(1))), cx),
                manager.push(toast("closed", None), cx),
                manager.push(toast("swiped", None), cx),
                manager.push(toast("rest a", None), cx),
                manager.push(toast("rest b", None), cx),
            ]
        });

        advance(cx, Duration::from_secs(1));
        manager.update(cx, |manager, cx| {
            manager.dismiss(closed, DismissReason::Closed, cx);
            manager.end_swipe(swiped, SwipeOutcome::Dismiss(SwipeDirection::Left), cx);
            manager.dismiss_all(cx);
        });

        assert_eq!(
            *events.borrow(),
            [
                (timed, DismissReason::Timeout),
                (closed, DismissReason::Closed),
                (swiped, DismissReason::Swipe),
                (rest_a, DismissReason::Closed),
                (rest_b, DismissReason::Closed),
            ]
        );
        assert_eq!(
            *callbacks.borrow(),
            [
                ("timed", DismissReason::Timeout),
                ("closed", DismissReason::Closed),
                ("swiped", DismissReason::Swipe),
                ("rest a", DismissReason::Closed),
                ("rest b", DismissReason::Closed),
            ]
        );
    }

    #[gpui::test]
    fn test_dismiss_all(cx: &mut TestAppContext) {
        let manager = manager(cx);

        manager.update(cx, |manager, cx| {
            for index in 0..3 {
                manager.push(Toast::new(format!("toast {index}")), cx);
            }
            manager.dismiss_all(cx);
        });

        assert!(manager.read_with(cx, |manager, _| manager.stack().is_empty()));
        advance(cx, DEFAULT_TOAST_DURATION);
    }
}
