//! Frame clock — the per-frame scheduling primitive.
//!
//! Continuous animations are often driven by a callback that reschedules
//! itself every frame and is never cancelled.  Here the schedule is an
//! explicit interval task instead: it ticks at a fixed rate, sends a frame
//! message per tick, and hands back a handle the owner aborts on teardown.
//! Once cancelled the channel closes, so no frame message (and therefore no
//! damper update or draw) can land after the terminal is restored.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A frame tick.  Carries no data; receiving one means "advance the
/// animation and redraw".
#[derive(Debug)]
pub struct Frame;

/// Cancellable handle to the running clock task.
pub struct FrameClock {
    handle: JoinHandle<()>,
}

impl FrameClock {
    /// Start a clock ticking `fps` times per second.  Returns the handle
    /// and the receiving end of the frame channel.
    pub fn spawn(fps: u32) -> (Self, mpsc::UnboundedReceiver<Frame>) {
        let fps = fps.clamp(1, 240);
        let period = Duration::from_secs_f64(1.0 / f64::from(fps));
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // A stalled receiver should not be repaid with a tick burst.
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(Frame).is_err() {
                    break; // receiver dropped
                }
            }
        });

        (Self { handle }, rx)
    }

    /// Stop the clock.  Pending and future ticks are discarded; the frame
    /// channel closes.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for FrameClock {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
