// Browser helpers shared by the components.

pub fn init_logging() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    // errors only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

pub fn alert(msg: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(msg);
    }
}
