//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! The damper is the only piece of state the frame loop writes; input
//! handling only ever touches the real offset.

use crate::config::AppConfig;
use crate::core::damper::ScrollDamper;
use crate::core::page::Page;

/// Top-level application state.
pub struct AppState {
    /// The page content and its last measured layout.
    pub page: Page,
    /// Real scroll offset + its damped follower.
    pub scroll: ScrollDamper,
    /// Rows of the page area visible on screen (status bar excluded).
    /// Updated on resize; bounds the real offset from above.
    pub viewport_height: u16,
    /// User configuration (easing, frame rate, wheel step).
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Forces one redraw even when the damper is settled (startup, resize).
    /// Scroll input needs no flag — it unsettles the damper by itself.
    needs_redraw: bool,
}

impl AppState {
    pub fn new(page: Page, config: AppConfig) -> Self {
        let scroll = ScrollDamper::new(config.easing);
        Self {
            page,
            scroll,
            viewport_height: 0,
            config,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// One frame tick: advance the damper, report whether anything visible
    /// changed.  While the page is at rest the clock keeps ticking but the
    /// draw is skipped.
    pub fn advance_frame(&mut self) -> bool {
        let was_settled = self.scroll.is_settled();
        self.scroll.update();
        if self.needs_redraw || !was_settled {
            self.needs_redraw = false;
            return true;
        }
        false
    }

    /// Largest valid real scroll offset for the current layout.
    pub fn max_scroll(&self) -> f64 {
        f64::from(self.page.max_scroll(self.viewport_height))
    }

    /// Move the real offset by `delta` rows, clamped to the page extent.
    /// The smoothed offset is untouched; it catches up over the next frames.
    pub fn scroll_by(&mut self, delta: f64) {
        let target = (self.scroll.current() + delta).clamp(0.0, self.max_scroll());
        self.scroll.set_current(target);
    }

    /// Jump the real offset to an absolute row, clamped.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll.set_current(offset.clamp(0.0, self.max_scroll()));
    }

    /// Re-measure the page after a terminal size change and pull the real
    /// offset back inside the new scroll range.  Only the real offset is
    /// clamped — the smoothed one converges there on its own.
    pub fn handle_resize(&mut self, width: u16, page_height: u16) {
        self.viewport_height = page_height;
        self.page.measure(width);
        self.scroll_to(self.scroll.current());
        self.needs_redraw = true;
    }
}
