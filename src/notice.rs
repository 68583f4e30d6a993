use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

// Holds the generation currently on screen, 0 when hidden.
#[derive(Debug, Default)]
pub struct CheckInNotice {
    shown: Arc<AtomicU64>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl CheckInNotice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.shown.load(Ordering::SeqCst) != 0
    }

    pub fn show(&mut self, hold: Duration) {
        self.abort_pending();
        self.generation += 1;
        let generation = self.generation;
        self.shown.store(generation, Ordering::SeqCst);

        let shown = Arc::clone(&self.shown);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(hold).await;
            if clear_if_current(&shown, generation) {
                debug!(generation, "check-in notice cleared");
            }
        }));
    }

    pub fn cancel(&mut self) {
        self.abort_pending();
        self.shown.store(0, Ordering::SeqCst);
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for CheckInNotice {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

// A clear task that outlived its abort must not hide a newer notice.
fn clear_if_current(shown: &AtomicU64, generation: u64) -> bool {
    shown
        .compare_exchange(generation, 0, Ordering::SeqCst, Ordering::SeqCst)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_secs(3);

    // With paused time, sleeping auto-advances the clock and lets due timers fire first.
    async fn advance(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    #[tokio::test(start_paused = true)]
    async fn notice_clears_after_hold() {
        let mut notice = CheckInNotice::new();
        assert!(!notice.is_visible());

        notice.show(HOLD);
        assert!(notice.is_visible());

        advance(Duration::from_millis(2_900)).await;
        assert!(notice.is_visible());

        advance(Duration::from_millis(200)).await;
        assert!(!notice.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn second_show_restarts_timer() {
        let mut notice = CheckInNotice::new();
        notice.show(HOLD);
        advance(Duration::from_secs(2)).await;

        notice.show(HOLD);
        advance(Duration::from_secs(2)).await;
        assert!(notice.is_visible());

        advance(Duration::from_millis(1_100)).await;
        assert!(!notice.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_hides_immediately() {
        let mut notice = CheckInNotice::new();
        notice.show(HOLD);
        notice.cancel();
        assert!(!notice.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_pending_clear() {
        let mut notice = CheckInNotice::new();
        notice.show(HOLD);
        let shown = Arc::clone(&notice.shown);
        drop(notice);

        advance(Duration::from_secs(5)).await;
        assert_eq!(shown.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_clear_keeps_newer_notice() {
        let mut notice = CheckInNotice::new();
        notice.show(HOLD);
        notice.show(HOLD);

        assert!(!clear_if_current(&notice.shown, 1));
        assert!(notice.is_visible());

        assert!(clear_if_current(&notice.shown, 2));
        assert!(!notice.is_visible());
    }
}
