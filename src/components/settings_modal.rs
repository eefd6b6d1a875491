use crate::state::SwipeConfig;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: SwipeConfig,
    pub on_change: Callback<SwipeConfig>,
    pub on_reset: Callback<()>,
    pub on_close: Callback<()>,
}

/// Emits `config` with one numeric field replaced, if the input parses.
fn number_input(
    config: SwipeConfig,
    cb: Callback<SwipeConfig>,
    apply: fn(&mut SwipeConfig, f64),
) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Ok(v) = input.value().trim().parse::<f64>() {
            let mut next = config;
            apply(&mut next, v);
            cb.emit(next);
        }
    })
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let cfg = props.config;
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let threshold_cb = number_input(cfg, props.on_change.clone(), |c, v| c.threshold = v);
    let edge_width_cb = number_input(cfg, props.on_change.clone(), |c, v| c.edge_width = v);
    let toggle_edge_only_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            cb.emit(SwipeConfig {
                edge_only: !cfg.edge_only,
                ..cfg
            })
        })
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Swipe Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Threshold (px)"}</span>
                    <input type="number" min="0" step="1" value={cfg.threshold.to_string()} onchange={threshold_cb} style="width:80px;" />
                </label>
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Edge width (px)"}</span>
                    <input type="number" min="0" step="1" value={cfg.edge_width.to_string()} onchange={edge_width_cb} style="width:80px;" />
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={cfg.edge_only} onclick={toggle_edge_only_cb} />
                    <span>{"Only swipes starting at an edge"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="flex:1;">{"Reset defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Opening the menu always needs a swipe that starts at the left edge."}</div>
        </div>
    </div>}
}
