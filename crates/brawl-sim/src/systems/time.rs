//! Frame clock system.

use tracing::debug;

use brawl_core::types::FrameTime;

/// Advance the time block to host time `now_ms`.
///
/// The delta is measured from the previous frame (or world creation on the
/// first frame). A clock that runs backwards yields a zero delta; a delta
/// above `max_delta_ms` is clamped so a long pause doesn't land as one frame.
pub fn run(time: &mut FrameTime, now_ms: f64, max_delta_ms: Option<f64>) {
    let raw = time.since_then(now_ms).max(0.0);
    let delta = match max_delta_ms {
        Some(max) if raw > max => {
            debug!(raw_ms = raw, clamped_ms = max, "clamped frame delta");
            max
        }
        _ => raw,
    };
    time.advance(now_ms, delta);
}
