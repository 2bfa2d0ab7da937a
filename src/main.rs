mod components;
mod controller;
mod engine;
mod error;
mod loader;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    util::init_logging();
    yew::Renderer::<App>::new().render();
    engine::EngineBridge.start();
    log::info!("editor front end started");
}
