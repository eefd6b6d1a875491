pub mod app;
pub mod edge_guide;
pub mod gesture_log;
pub mod intro_overlay;
pub mod settings_modal;
pub mod sidebar;
