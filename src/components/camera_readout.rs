use crate::state::CameraUpdate;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraReadoutProps {
    pub camera: CameraUpdate,
}

#[function_component]
pub fn CameraReadout(props: &CameraReadoutProps) -> Html {
    let value_style = "min-width:70px; text-align:right; font-variant-numeric:tabular-nums;";
    html! {
        <div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:6px 10px; display:flex; gap:10px; font-size:12px; pointer-events:none;">
            <span>{"x"}</span><span style={value_style}>{ format!("{:.1}", props.camera.x) }</span>
            <span>{"y"}</span><span style={value_style}>{ format!("{:.1}", props.camera.y) }</span>
            <span>{"scale"}</span><span style={value_style}>{ format!("{:.3}", props.camera.scale) }</span>
        </div>
    }
}
