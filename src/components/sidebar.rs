use crate::state::SwipeConfig;
use crate::util::format_px;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    pub open: bool,
    pub config: SwipeConfig,
    pub on_close: Callback<()>,
    pub on_open_settings: Callback<()>,
    pub on_clear_log: Callback<()>,
}

#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let cb = props.on_clear_log.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let offset = if props.open { "0" } else { "-100%" };
    let cfg = props.config;
    let mode = if cfg.edge_only { "edges only" } else { "anywhere" };
    html! {<div style={format!("position:absolute; top:0; left:0; bottom:0; width:260px; transform:translateX({}); transition:transform 0.2s ease-out; background:rgba(22,27,34,0.97); border-right:1px solid #30363d; padding:14px; display:flex; flex-direction:column; gap:8px; z-index:20;", offset)}>
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <h3 style="margin:0; font-size:16px;">{"Menu"}</h3>
            <button onclick={close_cb} style="padding:2px 8px;">{"×"}</button>
        </div>
        <button onclick={settings_cb}>{"Swipe settings"}</button>
        <button onclick={clear_cb}>{"Clear gesture log"}</button>
        <div style="font-size:11px; line-height:1.4; background:#1c2128; border:1px solid #30363d; padding:6px 8px; border-radius:6px;">
            <div>{ format!("Threshold: {}", format_px(cfg.threshold)) }</div>
            <div>{ format!("Edge width: {}", format_px(cfg.edge_width)) }</div>
            <div>{ format!("Swipes start: {}", mode) }</div>
        </div>
        <div style="font-size:11px; opacity:0.7; margin-top:auto;">{"Swipe left to close"}</div>
    </div>}
}
