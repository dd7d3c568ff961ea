// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Frame-rate sampling

use async_trait::async_trait;
use tokio::sync::oneshot;

/// Default sampling window in milliseconds
pub const DEFAULT_SAMPLE_WINDOW_MS: u64 = 500;

/// Default upper bound for a sampled frame rate
pub const DEFAULT_FPS_CAP: f64 = 60.0;

/// A per-frame clock, in the manner of a display's animation-frame callback
#[async_trait]
pub trait FrameClock: Send {
    /// Wait for the next frame and return its timestamp in milliseconds
    async fn next_frame(&mut self) -> f64;
}

/// Clock ticking at a fixed rate without touching wall-clock time
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    interval_ms: f64,
    frame: u64,
}

impl FixedRateClock {
    /// Clock with the given frame interval; `None` unless it is positive and finite
    pub fn new(interval_ms: f64) -> Option<Self> {
        if interval_ms.is_finite() && interval_ms > 0.0 {
            Some(Self {
                interval_ms,
                frame: 0,
            })
        } else {
            None
        }
    }

    pub fn from_refresh_rate(hz: f64) -> Option<Self> {
        if hz.is_finite() && hz > 0.0 {
            Self::new(1000.0 / hz)
        } else {
            None
        }
    }
}

#[async_trait]
impl FrameClock for FixedRateClock {
    async fn next_frame(&mut self) -> f64 {
        tokio::task::yield_now().await;
        self.frame += 1;
        self.frame as f64 * self.interval_ms
    }
}

/// Sample the frame rate of `clock` over `window_ms`, capped at `cap`.
///
/// Without a clock the cap is returned immediately. The first callback opens
/// the window and counts as a frame; every callback before `start + window_ms`
/// counts; the first one at or past it closes the window.
///
/// Counting runs on a detached task. Dropping the returned future does not
/// stop it; its result is simply discarded.
pub async fn sample_frame_rate(
    clock: Option<Box<dyn FrameClock>>,
    window_ms: u64,
    cap: f64,
) -> f64 {
    let Some(clock) = clock else {
        tracing::debug!(cap, "no frame clock, assuming capped frame rate");
        return cap;
    };
    if window_ms == 0 {
        return cap;
    }

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let fps = count_frames(clock, window_ms).await.min(cap);
        // The receiver is gone when the caller abandoned the sample
        let _ = tx.send(fps);
    });

    let fps = rx.await.unwrap_or(cap);
    tracing::debug!(fps, window_ms, cap, "frame rate sampled");
    fps
}

async fn count_frames(mut clock: Box<dyn FrameClock>, window_ms: u64) -> f64 {
    let start = clock.next_frame().await;
    let end = start + window_ms as f64;
    let mut frames: u64 = 1;

    loop {
        let now = clock.next_frame().await;
        if now >= end {
            break;
        }
        frames += 1;
    }

    frames as f64 * 1000.0 / window_ms as f64
}
