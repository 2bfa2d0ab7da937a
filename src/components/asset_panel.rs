use crate::model::{Asset, AssetKey};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AssetPanelProps {
    pub assets: Vec<Asset>,
    pub on_spawn: Callback<AssetKey>,
    /// `(asset, secondary_id)`
    pub on_secondary_id: Callback<(AssetKey, u32)>,
}

#[function_component]
pub fn AssetPanel(props: &AssetPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:6px; padding:4px 0; border-top:1px solid #30363d;";
    html! {
        <div style="display:flex; flex-direction:column; gap:4px;">
            <h3 style="margin:0; font-size:14px;">{"Assets"}</h3>
            if props.assets.is_empty() {
                <span style="opacity:0.6; font-size:12px;">{"Drop a .svg, .json or .particles file"}</span>
            }
            <div>
                { for props.assets.iter().map(|asset| {
                    let id = asset.id;
                    let key = asset.key();
                    let spawn = {
                        let cb = props.on_spawn.clone();
                        Callback::from(move |_| cb.emit(key))
                    };
                    let secondary = {
                        let cb = props.on_secondary_id.clone();
                        Callback::from(move |e: Event| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            if let Ok(v) = input.value().trim().parse::<u32>() {
                                cb.emit((key, v));
                            }
                        })
                    };
                    html! {
                        <div key={key.to_string()} style={row_style}>
                            <span style="flex:1; overflow:hidden; text-overflow:ellipsis;">
                                { format!("asset_{}__:{}", asset.name, id) }
                            </span>
                            <span style="opacity:0.6; font-size:11px;">{ asset.kind.label() }</span>
                            <input type="number" min="0" style="width:48px;"
                                value={asset.secondary_id.to_string()} onchange={secondary} />
                            <button onclick={spawn}>{"Spawn"}</button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
