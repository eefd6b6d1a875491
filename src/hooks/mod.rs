pub mod swipe;

pub use swipe::{SwipeOptions, use_swipe};
