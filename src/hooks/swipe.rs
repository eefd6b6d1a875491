//! `use_swipe`: horizontal swipe detection on document-level touch events.
//!
//! The hook subscribes passive `touchstart`, `touchend` and `touchcancel`
//! listeners on the document while the calling component is mounted. When the
//! options change the old listeners are removed before new ones are added, so
//! a handler never fires against callbacks from an earlier render.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, EventTarget, TouchEvent, TouchList};
use yew::prelude::*;

use crate::state::{SwipeConfig, SwipeDirection, SwipeTracker, TouchPoint};
use crate::util::{clog, viewport_width};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeOptions {
    pub on_swipe_left: Option<Callback<()>>,
    pub on_swipe_right: Option<Callback<()>>,
    pub config: SwipeConfig,
}

impl SwipeOptions {
    /// Drops both callbacks unless `live`; the detector keeps tracking but fires nothing.
    pub fn gated(self, live: bool) -> Self {
        if live {
            self
        } else {
            Self {
                on_swipe_left: None,
                on_swipe_right: None,
                ..self
            }
        }
    }
}

/// A document listener that unsubscribes itself when dropped.
struct DocumentListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(TouchEvent)>,
}

impl DocumentListener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(TouchEvent)>,
    ) -> Option<Self> {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &opts,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                callback,
            }),
            Err(e) => {
                clog(&format!("could not listen for {}: {:?}", kind, e));
                None
            }
        }
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

fn first_point(list: TouchList) -> Option<TouchPoint> {
    list.item(0)
        .map(|t| TouchPoint::new(t.client_x() as f64, t.client_y() as f64))
}

/// Ends the tracked touch. A touch end without a point counts as a cancel.
fn finish(tracker: &mut SwipeTracker, point: Option<TouchPoint>) -> Option<SwipeDirection> {
    match point {
        Some(p) => tracker.touch_end(p),
        None => {
            tracker.touch_cancel();
            None
        }
    }
}

fn dispatch(dir: SwipeDirection, opts: &SwipeOptions) {
    let cb = match dir {
        SwipeDirection::Left => &opts.on_swipe_left,
        SwipeDirection::Right => &opts.on_swipe_right,
    };
    if let Some(cb) = cb {
        clog(&format!("swipe {:?}", dir));
        cb.emit(());
    }
}

#[hook]
pub fn use_swipe(options: SwipeOptions) {
    // Survives re-subscription, like the touch in progress it holds.
    let tracker: Rc<RefCell<SwipeTracker>> =
        use_mut_ref(|| SwipeTracker::new(SwipeConfig::default()));

    use_effect_with(options, move |opts| {
        tracker.borrow_mut().config = opts.config;

        let target: Option<EventTarget> = web_sys::window()
            .and_then(|w| w.document())
            .map(Into::into);
        let mut listeners: Vec<DocumentListener> = Vec::new();

        if let Some(target) = target {
            let touch_start_cb = {
                let tracker = tracker.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(p) = first_point(e.touches()) {
                        tracker.borrow_mut().touch_start(p, viewport_width());
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let touch_end_cb = {
                let tracker = tracker.clone();
                let opts = opts.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    // Tracker borrow ends before any callback runs.
                    let outcome = finish(&mut tracker.borrow_mut(), first_point(e.changed_touches()));
                    if let Some(dir) = outcome {
                        dispatch(dir, &opts);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let touch_cancel_cb = {
                let tracker = tracker.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    tracker.borrow_mut().touch_cancel();
                }) as Box<dyn FnMut(_)>)
            };

            listeners.extend(
                [
                    ("touchstart", touch_start_cb),
                    ("touchend", touch_end_cb),
                    ("touchcancel", touch_cancel_cb),
                ]
                .into_iter()
                .filter_map(|(kind, cb)| DocumentListener::attach(&target, kind, cb)),
            );
        } else {
            clog("no document; swipe detection disabled");
        }

        // Cleanup
        move || drop(listeners)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let hits = Rc::new(Cell::new(0));
        let cb = {
            let hits = hits.clone();
            Callback::from(move |()| hits.set(hits.get() + 1))
        };
        (hits, cb)
    }

    fn tracking(from: (f64, f64)) -> SwipeTracker {
        let mut tracker = SwipeTracker::new(SwipeConfig::default());
        tracker.touch_start(TouchPoint::new(from.0, from.1), Some(1000.0));
        tracker
    }

    #[test]
    fn finish_without_point_clears_and_fires_nothing() {
        let mut tracker = tracking((900.0, 100.0));
        assert_eq!(finish(&mut tracker, None), None);
        assert!(!tracker.is_tracking());
        // A later end has nothing to finish.
        assert_eq!(finish(&mut tracker, Some(TouchPoint::new(700.0, 100.0))), None);
    }

    #[test]
    fn finish_with_point_reports_swipe() {
        let mut tracker = tracking((900.0, 100.0));
        assert_eq!(
            finish(&mut tracker, Some(TouchPoint::new(840.0, 100.0))),
            Some(SwipeDirection::Left)
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn dispatch_fires_only_the_matching_side() {
        let (left_hits, left) = counter();
        let (right_hits, right) = counter();
        let opts = SwipeOptions {
            on_swipe_left: Some(left),
            on_swipe_right: Some(right),
            config: SwipeConfig::default(),
        };

        dispatch(SwipeDirection::Left, &opts);
        assert_eq!(left_hits.get(), 1);
        assert_eq!(right_hits.get(), 0);

        dispatch(SwipeDirection::Right, &opts);
        assert_eq!(left_hits.get(), 1);
        assert_eq!(right_hits.get(), 1);
    }

    #[test]
    fn dispatch_skips_missing_callbacks() {
        let (left_hits, left) = counter();
        let left_only = SwipeOptions {
            on_swipe_left: Some(left),
            ..SwipeOptions::default()
        };
        dispatch(SwipeDirection::Right, &left_only);
        assert_eq!(left_hits.get(), 0);

        let (right_hits, right) = counter();
        let right_only = SwipeOptions {
            on_swipe_right: Some(right),
            ..SwipeOptions::default()
        };
        dispatch(SwipeDirection::Left, &right_only);
        assert_eq!(right_hits.get(), 0);

        dispatch(SwipeDirection::Left, &SwipeOptions::default());
    }

    #[test]
    fn left_swipe_end_to_end_fires_left_once() {
        let (left_hits, left) = counter();
        let (right_hits, right) = counter();
        let opts = SwipeOptions {
            on_swipe_left: Some(left),
            on_swipe_right: Some(right),
            config: SwipeConfig::default(),
        };
        let mut tracker = tracking((900.0, 100.0));
        if let Some(dir) = finish(&mut tracker, Some(TouchPoint::new(840.0, 100.0))) {
            dispatch(dir, &opts);
        }
        assert_eq!(left_hits.get(), 1);
        assert_eq!(right_hits.get(), 0);
    }

    #[test]
    fn gated_withholds_callbacks_when_not_live() {
        let (left_hits, left) = counter();
        let (right_hits, right) = counter();
        let config = SwipeConfig {
            edge_only: true,
            ..SwipeConfig::default()
        };
        let opts = SwipeOptions {
            on_swipe_left: Some(left),
            on_swipe_right: Some(right),
            config,
        };

        let paused = opts.clone().gated(false);
        assert!(paused.on_swipe_left.is_none());
        assert!(paused.on_swipe_right.is_none());
        assert_eq!(paused.config, config);
        dispatch(SwipeDirection::Left, &paused);
        dispatch(SwipeDirection::Right, &paused);
        assert_eq!(left_hits.get() + right_hits.get(), 0);

        assert_eq!(opts.clone().gated(true), opts);
    }
}
