// Touch swipe gesture state, kept free of browser calls so it can be tested natively.
use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 50.0;
pub const DEFAULT_EDGE_WIDTH: f64 = 30.0;

/// Detector tuning, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Minimum horizontal displacement for a touch to count as a swipe.
    pub threshold: f64,
    /// Width of the band at each viewport edge that counts as "edge".
    pub edge_width: f64,
    /// Only touches that started inside an edge band may trigger.
    pub edge_only: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            edge_width: DEFAULT_EDGE_WIDTH,
            edge_only: false,
        }
    }
}

impl SwipeConfig {
    /// Replaces negative or non-finite distances with their defaults.
    pub fn sanitized(self) -> Self {
        let fix = |v: f64, d: f64| if v.is_finite() && v >= 0.0 { v } else { d };
        Self {
            threshold: fix(self.threshold, DEFAULT_THRESHOLD),
            edge_width: fix(self.edge_width, DEFAULT_EDGE_WIDTH),
            edge_only: self.edge_only,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// The one touch currently being followed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveTouch {
    pub start: TouchPoint,
    pub started_at_edge: bool,
}

/// Idle when `active` is `None`, tracking otherwise.
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    pub config: SwipeConfig,
    active: Option<ActiveTouch>,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<&ActiveTouch> {
        self.active.as_ref()
    }

    #[cfg(test)]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Starts following `point`, discarding any unfinished touch.
    /// Without a known viewport width only the left band counts as edge.
    pub fn touch_start(&mut self, point: TouchPoint, viewport_width: Option<f64>) {
        let edge = self.config.edge_width;
        let at_left = point.client_x <= edge;
        let at_right = viewport_width.is_some_and(|w| point.client_x >= w - edge);
        self.active = Some(ActiveTouch {
            start: point,
            started_at_edge: at_left || at_right,
        });
    }

    /// Finishes the active touch and reports which side should fire, if any.
    /// The tracker is idle again before this returns, whatever the outcome.
    pub fn touch_end(&mut self, point: TouchPoint) -> Option<SwipeDirection> {
        let touch = self.active.take()?;
        let dx = point.client_x - touch.start.client_x;
        let dy = point.client_y - touch.start.client_y;

        if dx.abs() <= dy.abs() || dx.abs() <= self.config.threshold {
            return None;
        }
        if self.config.edge_only && !touch.started_at_edge {
            return None;
        }

        if dx > 0.0 {
            // Rightward swipes must begin in the left band, edge_only or not.
            (touch.start.client_x <= self.config.edge_width).then_some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    }

    pub fn touch_cancel(&mut self) {
        self.active = None;
    }
}
