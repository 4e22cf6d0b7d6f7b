//! Frame clock: absolute elapsed time, never a delta.

use std::time::Instant;

#[derive(Debug, Clone)]
enum TimeSource {
    /// Wall-clock time since start
    Realtime { start: Instant, last_s: f32 },

    /// Frame `n` is at `n / fps` seconds regardless of how long it takes
    FixedStep { fps: u32 },
}

/// Frame counter plus the elapsed time of the frame being drawn
///
/// The counter only moves on [`advance`](FrameClock::advance), so a frame
/// that fails to present is redrawn at the same index and time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: TimeSource,
    frame: u64,
}

impl FrameClock {
    pub fn realtime() -> Self {
        Self {
            source: TimeSource::Realtime {
                start: Instant::now(),
                last_s: 0.0,
            },
            frame: 0,
        }
    }

    pub fn fixed_step(fps: u32) -> Self {
        Self {
            source: TimeSource::FixedStep { fps: fps.max(1) },
            frame: 0,
        }
    }

    /// Index of the frame being drawn (frames presented so far)
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Elapsed time for the frame being drawn
    ///
    /// Never smaller than the previous call.
    pub fn time_s(&mut self) -> f32 {
        match &mut self.source {
            TimeSource::Realtime { start, last_s } => {
                *last_s = start.elapsed().as_secs_f32().max(*last_s);
                *last_s
            }
            TimeSource::FixedStep { fps } => (self.frame as f64 / *fps as f64) as f32,
        }
    }

    /// Mark the current frame as presented
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}
