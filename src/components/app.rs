use super::{
    asset_panel::AssetPanel, camera_readout::CameraReadout, entity_panel::EntityPanel,
    settings_panel::SettingsPanel,
};
use crate::controller::{CameraController, ReadoutSink};
use crate::engine::EngineBridge;
use crate::error::EditorError;
use crate::loader::{DropZone, load_file};
use crate::model::{AssetKey, EditorAction, EditorState, Transform2D};
use crate::state::{CameraUpdate, EditorSettings};
use crate::util::alert;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

fn attach_input(
    overlay: &NodeRef,
    editor: UseReducerHandle<EditorState>,
    camera_view: UseStateHandle<CameraUpdate>,
    readout_visible: Rc<RefCell<bool>>,
    engine: EngineBridge,
) -> Result<(CameraController, DropZone), EditorError> {
    let surface = overlay
        .cast::<HtmlElement>()
        .ok_or(EditorError::NoElement("overlay"))?;
    let sink = Rc::new(ReadoutSink {
        inner: Rc::new(engine),
        observer: Callback::from(move |u: CameraUpdate| camera_view.set(u)),
        visible: readout_visible,
    });
    let on_pick = {
        let editor = editor.clone();
        Callback::from(move |hit: Option<u32>| {
            if let Some(id) = hit {
                editor.dispatch(EditorAction::Select(id));
            }
        })
    };
    let controller = CameraController::attach(&surface, sink, Rc::new(engine), on_pick)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(EditorError::NoElement("document"))?;
    let drop_zone = DropZone::attach(document.as_ref(), move |file| {
        let editor = editor.clone();
        spawn_local(async move {
            match load_file(engine, file).await {
                Ok(asset) => editor.dispatch(EditorAction::AddAsset(asset)),
                Err(err) => {
                    log::warn!("{}", err);
                    alert(&err.to_string());
                }
            }
        });
    })?;
    Ok((controller, drop_zone))
}

#[function_component(App)]
pub fn app() -> Html {
    let engine = EngineBridge;
    let editor = use_reducer(EditorState::default);
    let settings = use_state(EditorSettings::load);
    let camera_view = use_state(|| CameraUpdate {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    });
    let overlay_ref = use_node_ref();
    let controller = use_mut_ref(|| None::<CameraController>);
    let readout_visible = use_mut_ref(|| settings.show_camera_readout);

    // Attach overlay + document listeners once; detach on unmount
    {
        let overlay_ref = overlay_ref.clone();
        let controller = controller.clone();
        let editor = editor.clone();
        let camera_view = camera_view.clone();
        let readout_visible = readout_visible.clone();
        let input_enabled = settings.input_enabled;
        use_effect_with((), move |_| {
            let mut drop_zone = None;
            let attached = attach_input(
                &overlay_ref,
                editor,
                camera_view.clone(),
                readout_visible,
                engine,
            );
            match attached {
                Ok((ctl, dz)) => {
                    ctl.set_input_enabled(input_enabled);
                    let s = ctl.state();
                    camera_view.set(CameraUpdate {
                        x: s.position.x,
                        y: s.position.y,
                        scale: s.scale,
                    });
                    *controller.borrow_mut() = Some(ctl);
                    drop_zone = Some(dz);
                    log::info!("Application Created");
                }
                Err(err) => log::error!("input setup failed: {}", err),
            }
            move || {
                if let Some(mut ctl) = controller.borrow_mut().take() {
                    ctl.detach();
                }
                drop(drop_zone);
            }
        });
    }

    // Persist settings and push them into the controller and read-out sink
    {
        let controller = controller.clone();
        let readout_visible = readout_visible.clone();
        let camera_view = camera_view.clone();
        let current = *settings;
        use_effect_with(current, move |s| {
            *readout_visible.borrow_mut() = s.show_camera_readout;
            if let Some(ctl) = &*controller.borrow() {
                ctl.set_input_enabled(s.input_enabled);
                if s.show_camera_readout {
                    // catch up on moves made while hidden
                    let cam = ctl.state();
                    camera_view.set(CameraUpdate {
                        x: cam.position.x,
                        y: cam.position.y,
                        scale: cam.scale,
                    });
                }
            }
            if let Err(err) = s.save() {
                log::warn!("{}", err);
            }
            || ()
        });
    }

    let on_settings = {
        let settings = settings.clone();
        Callback::from(move |s: EditorSettings| settings.set(s))
    };
    let on_spawn = {
        let editor = editor.clone();
        Callback::from(move |key: AssetKey| {
            let Some(asset) = editor.asset(key).cloned() else {
                return;
            };
            let editor = editor.clone();
            spawn_local(async move {
                match engine.spawn_entity(&asset, Transform2D::default()).await {
                    Ok(entity_id) => editor.dispatch(EditorAction::AddEntity {
                        id: entity_id,
                        name: format!("{}{}", asset.name, entity_id),
                    }),
                    Err(err) => log::warn!("{}", err),
                }
            });
        })
    };
    let on_secondary_id = {
        let editor = editor.clone();
        Callback::from(move |(key, secondary_id): (AssetKey, u32)| {
            editor.dispatch(EditorAction::SetSecondaryId { key, secondary_id })
        })
    };
    let on_select = {
        let editor = editor.clone();
        Callback::from(move |id: u32| editor.dispatch(EditorAction::Select(id)))
    };
    let on_deselect = {
        let editor = editor.clone();
        Callback::from(move |_| editor.dispatch(EditorAction::Deselect))
    };
    let on_transform = {
        let editor = editor.clone();
        Callback::from(move |(id, transform): (u32, Transform2D)| {
            engine.modify_entity(id, transform);
            editor.dispatch(EditorAction::SetTransform { id, transform });
        })
    };
    let on_remove = {
        let editor = editor.clone();
        Callback::from(move |id: u32| {
            engine.remove_entity(id);
            editor.dispatch(EditorAction::RemoveEntity(id));
        })
    };

    let entities: Vec<_> = editor.entities.values().cloned().collect();
    let selected = editor.selected_entity().cloned();

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh;">
            <div id="overlay" ref={overlay_ref} style="position:absolute; inset:0;"></div>
            <div style="position:absolute; top:12px; right:12px; width:280px; max-height:calc(100vh - 24px); overflow-y:auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 12px; display:flex; flex-direction:column; gap:12px; color:#c9d1d9;">
                <SettingsPanel settings={*settings} on_change={on_settings} />
                <AssetPanel assets={editor.assets.clone()} {on_spawn} {on_secondary_id} />
                <EntityPanel {entities} {selected} {on_select} {on_deselect} {on_transform} {on_remove} />
            </div>
            if settings.show_camera_readout {
                <CameraReadout camera={*camera_view} />
            }
        </div>
    }
}
