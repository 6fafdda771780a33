#[cfg(any(target_arch = "wasm32", test))]
mod components;
#[cfg(any(target_arch = "wasm32", test))]
mod config;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(any(target_arch = "wasm32", test))]
mod error;
#[cfg(any(target_arch = "wasm32", test))]
mod numeric;
#[cfg(any(target_arch = "wasm32", test))]
mod trip;

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = dom::start() {
        dom::error(&format!("startup failed: {e}"));
    }
}

// The site only runs in the browser; native builds exist for `cargo test`.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("walk-trip-site runs in the browser; build it for wasm32-unknown-unknown");
}
