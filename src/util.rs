// Utility helpers shared by the hook and the components
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    // Release builds and native test runs stay quiet
    if cfg!(all(debug_assertions, target_arch = "wasm32")) {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

/// Current `window.innerWidth`, if the window can be reached.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn format_px(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}px", v as i64)
    } else {
        format!("{:.1}px", v)
    }
}
