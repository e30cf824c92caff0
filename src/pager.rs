//! Page index state and swipe-to-page resolution.

use crate::config::{
    DEFAULT_PAGE_WIDTH_PX, EDGE_RESISTANCE, FLING_VELOCITY_PX_PER_MS, MIN_FLING_DISTANCE_PX,
    SWIPE_THRESHOLD_RATIO,
};
use log::warn;

/// Current page of a pager holding pages `0..=max_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    current_page: usize,
    max_page: usize,
}

impl PagerState {
    pub fn new(max_page: usize) -> Self {
        Self {
            current_page: 0,
            max_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn max_page(&self) -> usize {
        self.max_page
    }

    /// Move by `delta` pages, clamped to `[0, max_page]`. Returns the new page.
    pub fn offset_by(&mut self, delta: isize) -> usize {
        let max = isize::try_from(self.max_page).unwrap_or(isize::MAX);
        let current = isize::try_from(self.current_page).unwrap_or(isize::MAX);
        let target = current.saturating_add(delta).clamp(0, max);
        self.current_page = usize::try_from(target).unwrap_or(0);
        self.current_page
    }

    pub fn go_to(&mut self, page: usize) -> usize {
        self.current_page = page.min(self.max_page);
        self.current_page
    }

    /// Numeral rendered for the current page.
    pub fn label(&self) -> String {
        self.current_page.to_string()
    }

    /// Visual drag offset, damped when pulling past either end.
    pub fn resist(&self, dx: f64) -> f64 {
        let past_start = self.current_page == 0 && dx > 0.0;
        let past_end = self.current_page == self.max_page && dx < 0.0;
        if past_start || past_end {
            dx * EDGE_RESISTANCE
        } else {
            dx
        }
    }
}

/// Resolve a finished horizontal drag into a page delta.
///
/// `dx` is the horizontal travel in pixels (negative is leftwards),
/// `elapsed_ms` the gesture duration. Swiping left advances.
pub fn resolve_swipe(dx: f64, elapsed_ms: f64, page_width: f64) -> isize {
    if !dx.is_finite() {
        return 0;
    }
    let width = if page_width.is_finite() && page_width > 0.0 {
        page_width
    } else {
        warn!(
            "unusable page width {}, falling back to {}px",
            page_width, DEFAULT_PAGE_WIDTH_PX
        );
        DEFAULT_PAGE_WIDTH_PX
    };

    let whole_pages = (dx / width).round();
    if whole_pages != 0.0 {
        return -(whole_pages as isize);
    }

    let distance = dx.abs();
    let velocity = if elapsed_ms > 0.0 {
        distance / elapsed_ms
    } else {
        0.0
    };
    let dragged_far = distance >= SWIPE_THRESHOLD_RATIO * width;
    let flung = distance >= MIN_FLING_DISTANCE_PX && velocity >= FLING_VELOCITY_PX_PER_MS;

    match (dragged_far || flung, dx < 0.0) {
        (false, _) => 0,
        (true, true) => 1,
        (true, false) => -1,
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    pointer_id: i32,
    x: f64,
    time_ms: f64,
}

/// Tracks a single pointer drag from press to release.
///
/// The gesture belongs to the pointer that started it; events from any other
/// pointer are ignored until it is released or cancelled.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    press: Option<Press>,
}

impl SwipeTracker {
    pub fn is_active(&self) -> bool {
        self.press.is_some()
    }

    fn owned_by(&self, pointer_id: i32) -> Option<Press> {
        self.press.filter(|press| press.pointer_id == pointer_id)
    }

    /// Start a drag unless another pointer already holds one.
    pub fn begin(&mut self, pointer_id: i32, x: f64, time_ms: f64) -> bool {
        if self.is_active() {
            return false;
        }
        self.press = Some(Press {
            pointer_id,
            x,
            time_ms,
        });
        true
    }

    /// Offset since `begin` for the owning pointer, `None` otherwise.
    pub fn update(&self, pointer_id: i32, x: f64) -> Option<f64> {
        self.owned_by(pointer_id).map(|press| x - press.x)
    }

    /// Finish the drag and return the page delta it amounts to.
    pub fn end(&mut self, pointer_id: i32, x: f64, time_ms: f64, page_width: f64) -> isize {
        match self.owned_by(pointer_id) {
            Some(press) => {
                self.press = None;
                resolve_swipe(x - press.x, time_ms - press.time_ms, page_width)
            }
            None => 0,
        }
    }

    /// Drop the drag if `pointer_id` owns it. Returns whether it did.
    pub fn cancel(&mut self, pointer_id: i32) -> bool {
        if self.owned_by(pointer_id).is_none() {
            return false;
        }
        self.press = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_PAGE;

    const WIDTH: f64 = 400.0;

    #[test]
    fn page_stays_in_bounds_for_any_delta() {
        let deltas = [
            isize::MIN,
            -1_000,
            -51,
            -50,
            -7,
            -1,
            0,
            1,
            7,
            50,
            51,
            1_000,
            isize::MAX,
        ];
        for start in [0, 1, 25, 49, MAX_PAGE] {
            for &delta in &deltas {
                let mut pager = PagerState::new(MAX_PAGE);
                pager.go_to(start);
                let page = pager.offset_by(delta);
                assert!(page <= MAX_PAGE, "start {start} delta {delta} gave {page}");
                assert_eq!(page, pager.current_page());
            }
        }
    }

    #[test]
    fn offset_moves_and_clamps() {
        let mut pager = PagerState::new(MAX_PAGE);
        assert_eq!(pager.offset_by(-1), 0);
        assert_eq!(pager.offset_by(3), 3);
        assert_eq!(pager.offset_by(-2), 1);
        assert_eq!(pager.offset_by(100), MAX_PAGE);
        assert_eq!(pager.offset_by(1), MAX_PAGE);
    }

    #[test]
    fn go_to_clamps_and_label_shows_numeral() {
        let mut pager = PagerState::new(MAX_PAGE);
        assert_eq!(pager.label(), "0");
        pager.go_to(12);
        assert_eq!(pager.label(), "12");
        pager.go_to(999);
        assert_eq!(pager.label(), "50");
        assert_eq!(pager.max_page(), 50);
    }

    #[test]
    fn short_slow_drag_keeps_page() {
        assert_eq!(resolve_swipe(-40.0, 800.0, WIDTH), 0);
        assert_eq!(resolve_swipe(30.0, 800.0, WIDTH), 0);
        assert_eq!(resolve_swipe(0.0, 0.0, WIDTH), 0);
    }

    #[test]
    fn drag_past_threshold_flips_one_page() {
        assert_eq!(resolve_swipe(-120.0, 900.0, WIDTH), 1);
        assert_eq!(resolve_swipe(120.0, 900.0, WIDTH), -1);
    }

    #[test]
    fn fast_fling_flips_one_page() {
        assert_eq!(resolve_swipe(-60.0, 50.0, WIDTH), 1);
        assert_eq!(resolve_swipe(60.0, 50.0, WIDTH), -1);
        // a quick tap-sized jitter is not a fling
        assert_eq!(resolve_swipe(-8.0, 4.0, WIDTH), 0);
    }

    #[test]
    fn long_drag_flips_rounded_page_count() {
        assert_eq!(resolve_swipe(-WIDTH * 2.4, 600.0, WIDTH), 2);
        assert_eq!(resolve_swipe(WIDTH * 2.6, 600.0, WIDTH), -3);
    }

    #[test]
    fn unusable_width_falls_back_to_default() {
        let dx = -DEFAULT_PAGE_WIDTH_PX;
        assert_eq!(resolve_swipe(dx, 500.0, 0.0), 1);
        assert_eq!(resolve_swipe(dx, 500.0, f64::NAN), 1);
        assert_eq!(resolve_swipe(f64::INFINITY, 500.0, WIDTH), 0);
    }

    #[test]
    fn tracker_resolves_swipe_into_clamped_page() {
        let mut pager = PagerState::new(MAX_PAGE);
        let mut tracker = SwipeTracker::default();

        assert!(tracker.begin(1, 300.0, 1_000.0));
        assert!(tracker.is_active());
        assert_eq!(tracker.update(1, 250.0), Some(-50.0));
        assert_eq!(tracker.update(1, 150.0), Some(-150.0));
        let delta = tracker.end(1, 150.0, 1_400.0, WIDTH);
        assert!(!tracker.is_active());
        assert_eq!(pager.offset_by(delta), 1);

        tracker.begin(1, 100.0, 2_000.0);
        let delta = tracker.end(1, 350.0, 2_300.0, WIDTH);
        assert_eq!(pager.offset_by(delta), 0);

        tracker.begin(1, 100.0, 3_000.0);
        let delta = tracker.end(1, 1_000.0, 3_300.0, WIDTH);
        assert_eq!(pager.offset_by(delta), 0);
    }

    #[test]
    fn idle_or_cancelled_tracker_does_nothing() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.update(1, 80.0), None);
        assert_eq!(tracker.end(1, 80.0, 10.0, WIDTH), 0);
        assert!(!tracker.cancel(1));

        tracker.begin(1, 0.0, 0.0);
        assert!(tracker.cancel(1));
        assert_eq!(tracker.end(1, -300.0, 100.0, WIDTH), 0);
    }

    #[test]
    fn second_pointer_cannot_steer_or_finish_the_swipe() {
        let mut pager = PagerState::new(MAX_PAGE);
        let mut tracker = SwipeTracker::default();
        tracker.begin(1, 300.0, 0.0);

        assert!(!tracker.begin(2, 100.0, 50.0));
        assert_eq!(tracker.update(2, -200.0), None);
        assert_eq!(tracker.end(2, -500.0, 400.0, WIDTH), 0);
        assert!(!tracker.cancel(2));
        assert!(tracker.is_active());
        assert_eq!(pager.current_page(), 0);

        // the owning pointer still resolves from its own press
        let delta = tracker.end(1, 260.0, 800.0, WIDTH);
        assert_eq!(pager.offset_by(delta), 0);
        assert!(!tracker.is_active());
    }

    #[test]
    fn drag_is_damped_past_the_edges() {
        let mut pager = PagerState::new(MAX_PAGE);
        assert_eq!(pager.resist(-90.0), -90.0);
        assert_eq!(pager.resist(90.0), 90.0 * EDGE_RESISTANCE);

        pager.go_to(MAX_PAGE);
        assert_eq!(pager.resist(90.0), 90.0);
        assert_eq!(pager.resist(-90.0), -90.0 * EDGE_RESISTANCE);
    }
}
