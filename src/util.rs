// Logging helpers

/// Debug-level console logging.
#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::debug_1(&wasm_bindgen::JsValue::from_str(msg));
}

// Native builds (unit tests) have no console to write to.
#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    let _ = msg;
}
