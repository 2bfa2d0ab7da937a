use super::transform_editor::TransformEditor;
use crate::model::{Entity, Transform2D};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EntityPanelProps {
    pub entities: Vec<Entity>,
    pub selected: Option<Entity>,
    pub on_select: Callback<u32>,
    pub on_deselect: Callback<()>,
    pub on_transform: Callback<(u32, Transform2D)>,
    pub on_remove: Callback<u32>,
}

#[function_component]
pub fn EntityPanel(props: &EntityPanelProps) -> Html {
    let selected_id = props.selected.as_ref().map(|e| e.id);
    let details = match props.selected.clone() {
        Some(entity) => {
            let id = entity.id;
            let on_change = {
                let cb = props.on_transform.clone();
                Callback::from(move |t: Transform2D| cb.emit((id, t)))
            };
            let close = {
                let cb = props.on_deselect.clone();
                Callback::from(move |_| cb.emit(()))
            };
            let remove = {
                let cb = props.on_remove.clone();
                Callback::from(move |_| cb.emit(id))
            };
            html! {
                <div style="display:flex; flex-direction:column; gap:6px; padding-top:6px; border-top:1px solid #30363d;">
                    <div style="display:flex; justify-content:space-between; align-items:center;">
                        <strong style="font-size:13px;">{ format!("entity_{}", entity.name) }</strong>
                        <button onclick={close} style="padding:2px 6px;">{"×"}</button>
                    </div>
                    <TransformEditor transform={entity.transform} {on_change} />
                    <button onclick={remove} style="background:#f85149; border:1px solid #b62324; color:#fff;">
                        {"Remove"}
                    </button>
                </div>
            }
        }
        None => html! {},
    };
    html! {
        <div style="display:flex; flex-direction:column; gap:4px;">
            <h3 style="margin:0; font-size:14px;">{"Entities"}</h3>
            <div>
                { for props.entities.iter().map(|entity| {
                    let id = entity.id;
                    let select = {
                        let cb = props.on_select.clone();
                        Callback::from(move |_| cb.emit(id))
                    };
                    let weight = if selected_id == Some(id) { "font-weight:600;" } else { "" };
                    html! {
                        <div key={id} onclick={select}
                            style={format!("cursor:pointer; font-size:12px; {}", weight)}>
                            { format!("{} (#{})", entity.name, id) }
                        </div>
                    }
                }) }
            </div>
            { details }
        </div>
    }
}
