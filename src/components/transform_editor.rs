use crate::model::{Transform2D, TransformField};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TransformEditorProps {
    pub transform: Transform2D,
    pub on_change: Callback<Transform2D>,
}

#[function_component]
pub fn TransformEditor(props: &TransformEditorProps) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; gap:4px;">
            { for TransformField::ALL.iter().map(|&field| {
                let (lo, hi) = field.range();
                let value = field.get(&props.transform);
                let oninput = {
                    let cb = props.on_change.clone();
                    let current = props.transform;
                    Callback::from(move |e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        if let Ok(v) = input.value().parse::<f64>() {
                            let mut next = current;
                            field.set(&mut next, v);
                            cb.emit(next);
                        }
                    })
                };
                html! {
                    <label style="display:flex; align-items:center; gap:6px; font-size:12px;">
                        <span style="width:40px;">{ field.label() }</span>
                        <input type="range" style="flex:1;"
                            min={lo.to_string()} max={hi.to_string()} step="0.01"
                            value={value.to_string()} {oninput} />
                        <span style="min-width:48px; text-align:right; font-variant-numeric:tabular-nums;">
                            { format!("{:.2}", value) }
                        </span>
                    </label>
                }
            }) }
        </div>
    }
}
