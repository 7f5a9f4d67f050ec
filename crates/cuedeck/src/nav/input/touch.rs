use anyhow::{Result, bail};
use log::debug;

use super::super::intent::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    /// Origin X of the gesture being tracked.
    Tracking(f32),
    /// Threshold crossed and intent delivered; further movement in this
    /// gesture is ignored.
    Fired,
}

/// Horizontal swipe tracker. One gesture at a time, one intent per
/// gesture: the first move whose delta magnitude exceeds the threshold
/// fires, then tracking stops until the next gesture start.
#[derive(Debug)]
pub struct SwipeTracker {
    threshold: f32,
    gesture: Gesture,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            bail!("swipe threshold must be a positive number, got {threshold}");
        }
        Ok(Self {
            threshold,
            gesture: Gesture::Idle,
        })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn start(&mut self, x: f32) {
        self.gesture = Gesture::Tracking(x);
    }

    /// Feed a horizontal position from an in-flight gesture. A leftward
    /// drag past the threshold means next, rightward means prev.
    pub fn movement(&mut self, x: f32) -> Option<Intent> {
        let Gesture::Tracking(origin) = self.gesture else {
            return None;
        };
        let delta = x - origin;
        if delta.abs() < self.threshold {
            return None;
        }
        self.gesture = Gesture::Fired;
        let intent = if delta < 0.0 {
            Intent::Next
        } else {
            Intent::Prev
        };
        debug!("touch: swipe delta {delta:.1} -> {intent:?}");
        Some(intent)
    }

    pub fn end(&mut self) {
        self.gesture = Gesture::Idle;
    }
}
