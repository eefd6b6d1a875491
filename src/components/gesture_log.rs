use crate::model::GestureRecord;
use crate::state::SwipeDirection;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GestureLogProps {
    pub log: Vec<GestureRecord>,
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn GestureLog(props: &GestureLogProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // seq | arrow | label
    let seq_style = "min-width:28px; text-align:right; font-variant-numeric:tabular-nums; opacity:0.6;";
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:6px; font-size:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <span style="font-weight:600;">{"Recent swipes"}</span>
                <button onclick={clear_cb} style="padding:2px 8px; font-size:11px;">{"Clear"}</button>
            </div>
            if props.log.is_empty() {
                <div style="opacity:0.6; font-size:12px;">{"Nothing yet"}</div>
            }
            { for props.log.iter().map(|r| {
                let (arrow, color, label) = match r.direction {
                    SwipeDirection::Right => ("→", "#3fb950", "Right: open menu"),
                    SwipeDirection::Left => ("←", "#58a6ff", "Left: close menu"),
                };
                html! {
                    <div style={row_style} key={r.seq}>
                        <span style={seq_style}>{ format!("#{}", r.seq) }</span>
                        <span style={format!("width:20px; text-align:center; color:{};", color)}>{ arrow }</span>
                        <span style={format!("flex:1; color:{};", color)}>{ label }</span>
                        if !r.changed {
                            <span style="font-size:11px; opacity:0.6;">{"no change"}</span>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
