pub mod touch;

pub use touch::{SwipeConfig, SwipeDirection, SwipeTracker, TouchPoint};
