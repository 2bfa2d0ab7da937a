use crate::state::EditorSettings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub settings: EditorSettings,
    pub on_change: Callback<EditorSettings>,
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let toggle_input = {
        let cb = props.on_change.clone();
        let s = props.settings;
        Callback::from(move |_| {
            cb.emit(EditorSettings {
                input_enabled: !s.input_enabled,
                ..s
            })
        })
    };
    let toggle_readout = {
        let cb = props.on_change.clone();
        let s = props.settings;
        Callback::from(move |_| {
            cb.emit(EditorSettings {
                show_camera_readout: !s.show_camera_readout,
                ..s
            })
        })
    };
    html! {
        <div style="display:flex; flex-direction:column; gap:6px; font-size:12px;">
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={props.settings.input_enabled} onclick={toggle_input} />
                <span>{"Camera input"}</span>
            </label>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={props.settings.show_camera_readout} onclick={toggle_readout} />
                <span>{"Show camera"}</span>
            </label>
        </div>
    }
}
