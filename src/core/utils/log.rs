//! Console logging that reaches the browser console on wasm32 and
//! stderr in native test runs.

/// Log a warning about a tolerated protocol violation
#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("[tabletop-engine] {}", msg);
}
