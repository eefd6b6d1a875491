use super::{
    edge_guide::EdgeGuide, gesture_log::GestureLog, intro_overlay::IntroOverlay,
    settings_modal::SettingsModal, sidebar::Sidebar,
};
use crate::hooks::{SwipeOptions, use_swipe};
use crate::model::{AppAction, AppState};
use crate::state::{SwipeConfig, SwipeDirection};
use crate::storage;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let app_state =
        use_reducer(|| AppState::new(storage::load_config(), storage::load_intro_seen()));

    // Persist detector settings
    use_effect_with(app_state.config, move |cfg| {
        storage::save_config(cfg);
        || ()
    });

    // Stable across renders so the touch listeners are only swapped when options really change
    let on_swipe_left = use_callback(app_state.dispatcher(), |(), d| {
        d.dispatch(AppAction::Swiped(SwipeDirection::Left))
    });
    let on_swipe_right = use_callback(app_state.dispatcher(), |(), d| {
        d.dispatch(AppAction::Swiped(SwipeDirection::Right))
    });

    // The settings modal owns the screen while open
    let swipes_live = !app_state.show_settings;
    use_swipe(
        SwipeOptions {
            on_swipe_left: Some(on_swipe_left),
            on_swipe_right: Some(on_swipe_right),
            config: app_state.config,
        }
        .gated(swipes_live),
    );

    let toggle_sidebar = {
        let app_state = app_state.clone();
        Callback::from(move |_| app_state.dispatch(AppAction::SetSidebar(!app_state.sidebar_open)))
    };
    let close_sidebar = {
        let app_state = app_state.clone();
        Callback::from(move |()| app_state.dispatch(AppAction::SetSidebar(false)))
    };
    let open_settings = {
        let app_state = app_state.clone();
        Callback::from(move |()| app_state.dispatch(AppAction::SetSettingsOpen(true)))
    };
    let close_settings = {
        let app_state = app_state.clone();
        Callback::from(move |()| app_state.dispatch(AppAction::SetSettingsOpen(false)))
    };
    let change_config = {
        let app_state = app_state.clone();
        Callback::from(move |cfg: SwipeConfig| app_state.dispatch(AppAction::SetConfig(cfg)))
    };
    let reset_config = {
        let app_state = app_state.clone();
        Callback::from(move |()| app_state.dispatch(AppAction::ResetConfig))
    };
    let clear_log = {
        let app_state = app_state.clone();
        Callback::from(move |()| app_state.dispatch(AppAction::ClearLog))
    };
    let hide_intro = {
        let app_state = app_state.clone();
        Callback::from(move |()| {
            storage::save_intro_seen();
            app_state.dispatch(AppAction::DismissIntro);
        })
    };

    let menu_label = if app_state.sidebar_open { "Close menu" } else { "Open menu" };
    let log: Vec<_> = app_state.log.iter().copied().collect();

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <EdgeGuide edge_width={app_state.config.edge_width} edge_only={app_state.config.edge_only} />
            <div id="top-bar" style="display:flex; align-items:center; gap:10px; padding:10px 14px; border-bottom:1px solid #30363d;">
                <button onclick={toggle_sidebar}>{ menu_label }</button>
                <span style="font-weight:600;">{"Swipe Sidebar"}</span>
            </div>
            <div style="padding:16px 20px; max-width:560px; line-height:1.5;">
                <p>{"Swipe right starting at the left edge to open the menu. Swipe left anywhere to close it."}</p>
                <GestureLog log={log} on_clear={clear_log.clone()} />
            </div>
            <Sidebar
                open={app_state.sidebar_open}
                config={app_state.config}
                on_close={close_sidebar}
                on_open_settings={open_settings}
                on_clear_log={clear_log}
            />
            <SettingsModal
                show={app_state.show_settings}
                config={app_state.config}
                on_change={change_config}
                on_reset={reset_config}
                on_close={close_settings}
            />
            <IntroOverlay show={app_state.show_intro} hide_intro={hide_intro} />
        </div>
    }
}
