// localStorage persistence for the detector settings
use web_sys::Storage;

use crate::state::SwipeConfig;
use crate::util::clog;

const SETTINGS_KEY: &str = "swipe_settings";
const INTRO_KEY: &str = "swipe_intro_seen";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Parses a stored settings blob; anything unreadable means defaults.
pub fn decode_config(raw: &str) -> SwipeConfig {
    match serde_json::from_str::<SwipeConfig>(raw) {
        Ok(cfg) => cfg.sanitized(),
        Err(e) => {
            clog(&format!("ignoring stored swipe settings: {}", e));
            SwipeConfig::default()
        }
    }
}

pub fn load_config() -> SwipeConfig {
    local_storage()
        .and_then(|store| store.get_item(SETTINGS_KEY).ok().flatten())
        .map(|raw| decode_config(&raw))
        .unwrap_or_default()
}

pub fn save_config(cfg: &SwipeConfig) {
    if let Some(store) = local_storage() {
        if let Ok(s) = serde_json::to_string(cfg) {
            let _ = store.set_item(SETTINGS_KEY, &s);
        }
    }
}

pub fn load_intro_seen() -> bool {
    local_storage()
        .and_then(|store| store.get_item(INTRO_KEY).ok().flatten())
        .is_some_and(|v| v == "1")
}

pub fn save_intro_seen() {
    if let Some(store) = local_storage() {
        let _ = store.set_item(INTRO_KEY, "1");
    }
}
