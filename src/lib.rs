#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod debounce;
pub mod motion;
pub mod particles;

#[cfg(target_arch = "wasm32")]
mod utils;
#[cfg(target_arch = "wasm32")]
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod assets;
#[cfg(target_arch = "wasm32")]
mod pipeline;
#[cfg(target_arch = "wasm32")]
mod scene;
#[cfg(target_arch = "wasm32")]
mod renderer;


#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn dummy_main() {
}


/// Entry point, invoked exactly once from the page's load handler.
/// All startup failures funnel here and end up in the console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn run() {
    utils::set_panic_hook();
    if let Err(e) = renderer::main().await {
        crate::log!("run(): ERROR: {}", e);
    }
}
