//! DOM side of the camera: listeners on the input overlay that feed
//! [`CameraState`] and publish through a [`CameraSink`].

use crate::engine::{CameraSink, EngineFuture, EntityPicker};
use crate::error::EditorError;
use crate::model::Vec2;
use crate::state::camera::PRIMARY_BUTTON;
use crate::state::{CameraState, CameraUpdate, PointerInput};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent, WheelEvent};
use yew::Callback;

/// Listeners registered on one target. Dropping the set removes them.
pub struct ListenerSet {
    target: EventTarget,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl ListenerSet {
    pub fn new(target: &EventTarget) -> Self {
        Self {
            target: target.clone(),
            listeners: Vec::new(),
        }
    }

    /// Events that don't cast to `E` are skipped.
    pub fn listen<E, F>(&mut self, name: &'static str, mut handler: F) -> Result<(), EditorError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |e: Event| {
            if let Ok(e) = e.dyn_into::<E>() {
                handler(e);
            }
        }) as Box<dyn FnMut(Event)>);
        self.target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        self.listeners.push((name, closure));
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn detach(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            let _ = self
                .target
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.detach();
    }
}

fn client_pos(e: &MouseEvent) -> Vec2 {
    Vec2::new(e.client_x() as f64, e.client_y() as f64)
}

/// Applies `input` and publishes the result. The state borrow ends before the
/// sink runs.
pub(crate) fn drive(state: &RefCell<CameraState>, sink: &dyn CameraSink, input: PointerInput) {
    let update = state.borrow_mut().apply(input);
    if let Some(update) = update {
        sink.set_camera(update);
    }
}

/// Starts a pick for a primary-button double-click at screen point `at`.
pub(crate) fn pick_at(
    state: &RefCell<CameraState>,
    picker: &dyn EntityPicker,
    button: i16,
    at: Vec2,
) -> Option<EngineFuture<Option<u32>>> {
    if button != PRIMARY_BUTTON {
        return None;
    }
    let world = state.borrow().camera_to_world(at);
    log::warn!("pick at {},{}", world.x, world.y);
    Some(picker.pick(world))
}

/// Publishes to `inner` and mirrors each update to `observer` while
/// `visible` is set.
pub struct ReadoutSink {
    pub inner: Rc<dyn CameraSink>,
    pub observer: Callback<CameraUpdate>,
    pub visible: Rc<RefCell<bool>>,
}

impl CameraSink for ReadoutSink {
    fn set_camera(&self, update: CameraUpdate) {
        self.inner.set_camera(update);
        if *self.visible.borrow() {
            self.observer.emit(update);
        }
    }
}

pub struct CameraController {
    state: Rc<RefCell<CameraState>>,
    listeners: ListenerSet,
}

impl CameraController {
    /// Captures the surface size and registers the five input listeners.
    /// Double-click picks go through `picker`; their outcome reaches `on_pick`
    /// in resolution order, which need not match click order.
    pub fn attach(
        surface: &HtmlElement,
        sink: Rc<dyn CameraSink>,
        picker: Rc<dyn EntityPicker>,
        on_pick: Callback<Option<u32>>,
    ) -> Result<Self, EditorError> {
        let rect = surface.get_bounding_client_rect();
        let state = Rc::new(RefCell::new(CameraState::new(Vec2::new(
            rect.width(),
            rect.height(),
        ))));
        let mut listeners = ListenerSet::new(surface.as_ref());

        {
            let state = state.clone();
            listeners.listen("dblclick", move |e: MouseEvent| {
                if let Some(pending) =
                    pick_at(&state, picker.as_ref(), e.button(), client_pos(&e))
                {
                    let on_pick = on_pick.clone();
                    spawn_local(async move {
                        match pending.await {
                            Ok(hit) => {
                                log::warn!("picked {:?}", hit);
                                on_pick.emit(hit);
                            }
                            Err(err) => log::warn!("pick failed: {}", err),
                        }
                    });
                }
                e.prevent_default();
            })?;
        }
        {
            let state = state.clone();
            let sink = sink.clone();
            listeners.listen("mousedown", move |e: MouseEvent| {
                log::info!("mouse down");
                let input = PointerInput::Press {
                    button: e.button(),
                    at: client_pos(&e),
                };
                drive(&state, sink.as_ref(), input);
                e.prevent_default();
            })?;
        }
        {
            let state = state.clone();
            let sink = sink.clone();
            listeners.listen("mousemove", move |e: MouseEvent| {
                let input = PointerInput::Move { at: client_pos(&e) };
                drive(&state, sink.as_ref(), input);
                e.prevent_default();
            })?;
        }
        {
            let state = state.clone();
            let sink = sink.clone();
            listeners.listen("mouseup", move |e: MouseEvent| {
                log::info!("mouse up");
                let input = PointerInput::Release { button: e.button() };
                drive(&state, sink.as_ref(), input);
                e.prevent_default();
            })?;
        }
        {
            let state = state.clone();
            listeners.listen("wheel", move |e: WheelEvent| {
                let input = PointerInput::Wheel {
                    delta_y: e.delta_y(),
                };
                drive(&state, sink.as_ref(), input);
                // keep the page from scrolling
                e.prevent_default();
            })?;
        }

        log::info!("camera controller attached ({} listeners)", listeners.len());
        Ok(Self { state, listeners })
    }

    pub fn set_input_enabled(&self, enabled: bool) {
        self.state.borrow_mut().set_input_enabled(enabled);
    }

    pub fn state(&self) -> CameraState {
        *self.state.borrow()
    }

    pub fn detach(&mut self) {
        self.listeners.detach();
    }
}
