//! App-level state for the swipe sidebar demo.
//! The gesture logic itself lives in `state::touch`; this is what the UI does with it.

use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

use crate::state::{SwipeConfig, SwipeDirection};

pub const LOG_CAPACITY: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureRecord {
    /// Running count of recognised swipes since load.
    pub seq: u32,
    pub direction: SwipeDirection,
    /// Whether the swipe changed the sidebar (opening an open sidebar does not).
    pub changed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub sidebar_open: bool,
    pub config: SwipeConfig,
    /// Most recent first, at most `LOG_CAPACITY` entries.
    pub log: VecDeque<GestureRecord>,
    pub swipe_count: u32,
    pub show_settings: bool,
    pub show_intro: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sidebar_open: false,
            config: SwipeConfig::default(),
            log: VecDeque::with_capacity(LOG_CAPACITY),
            swipe_count: 0,
            show_settings: false,
            show_intro: true,
        }
    }
}

impl AppState {
    pub fn new(config: SwipeConfig, intro_seen: bool) -> Self {
        Self {
            config: config.sanitized(),
            show_intro: !intro_seen,
            ..Default::default()
        }
    }

    fn record(&mut self, direction: SwipeDirection, changed: bool) {
        self.swipe_count = self.swipe_count.saturating_add(1);
        self.log.push_front(GestureRecord {
            seq: self.swipe_count,
            direction,
            changed,
        });
        self.log.truncate(LOG_CAPACITY);
    }
}

#[derive(Clone, Debug)]
pub enum AppAction {
    Swiped(SwipeDirection),
    SetSidebar(bool),
    SetConfig(SwipeConfig),
    ResetConfig,
    SetSettingsOpen(bool),
    DismissIntro,
    ClearLog,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use AppAction::*;
        let mut new = (*self).clone();
        match action {
            Swiped(dir) => {
                let open = matches!(dir, SwipeDirection::Right);
                let changed = new.sidebar_open != open;
                new.sidebar_open = open;
                new.record(dir, changed);
            }
            SetSidebar(open) => { new.sidebar_open = open; }
            SetConfig(cfg) => {
                let cfg = cfg.sanitized();
                if cfg == new.config { return self; }
                new.config = cfg;
            }
            ResetConfig => { new.config = SwipeConfig::default(); }
            SetSettingsOpen(show) => { new.show_settings = show; }
            DismissIntro => { new.show_intro = false; }
            ClearLog => {
                new.log.clear();
                new.swipe_count = 0;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AppState, action: AppAction) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn right_swipe_opens_and_left_swipe_closes() {
        let s = reduce(AppState::default(), AppAction::Swiped(SwipeDirection::Right));
        assert!(s.sidebar_open);
        assert!(s.log[0].changed);

        let s = reduce(s, AppAction::Swiped(SwipeDirection::Right));
        assert!(s.sidebar_open);
        assert!(!s.log[0].changed);

        let s = reduce(s, AppAction::Swiped(SwipeDirection::Left));
        assert!(!s.sidebar_open);
        assert_eq!(s.log[0].direction, SwipeDirection::Left);
        assert_eq!(s.log[0].seq, 3);
    }

    #[test]
    fn log_keeps_most_recent_entries() {
        let mut s = AppState::default();
        for _ in 0..(LOG_CAPACITY + 3) {
            s = reduce(s, AppAction::Swiped(SwipeDirection::Left));
        }
        assert_eq!(s.log.len(), LOG_CAPACITY);
        assert_eq!(s.log.front().unwrap().seq, LOG_CAPACITY as u32 + 3);
        assert_eq!(s.log.back().unwrap().seq, 4);

        let s = reduce(s, AppAction::ClearLog);
        assert!(s.log.is_empty());
        assert_eq!(s.swipe_count, 0);
    }

    #[test]
    fn set_config_is_sanitized() {
        let s = reduce(
            AppState::default(),
            AppAction::SetConfig(SwipeConfig {
                threshold: -1.0,
                edge_width: 64.0,
                edge_only: true,
            }),
        );
        assert_eq!(s.config.threshold, 50.0);
        assert_eq!(s.config.edge_width, 64.0);
        assert!(s.config.edge_only);

        let s = reduce(s, AppAction::ResetConfig);
        assert_eq!(s.config, SwipeConfig::default());
    }

    #[test]
    fn new_state_hides_intro_once_seen() {
        assert!(AppState::new(SwipeConfig::default(), false).show_intro);
        assert!(!AppState::new(SwipeConfig::default(), true).show_intro);
    }
}
