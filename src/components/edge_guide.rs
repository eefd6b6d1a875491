use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EdgeGuideProps {
    pub edge_width: f64,
    pub edge_only: bool,
}

/// Shades the left and right edge bands so the touch zones are visible.
#[function_component(EdgeGuide)]
pub fn edge_guide(props: &EdgeGuideProps) -> Html {
    let alpha = if props.edge_only { 0.18 } else { 0.08 };
    let band = |side: &str| {
        format!(
            "position:absolute; top:0; bottom:0; {}:0; width:{}px; background:rgba(88,166,255,{}); pointer-events:none;",
            side, props.edge_width, alpha
        )
    };
    html! { <>
        <div style={band("left")}></div>
        <div style={band("right")}></div>
    </> }
}
