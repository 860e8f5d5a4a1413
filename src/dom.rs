use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::error::AppError;


/// Page element the demo renders into.
pub const VIEWPORT_ID: &str = "viewport";


/// Creates the canvas the windowing layer adopts and inserts it into
/// the `#viewport` element. Must run before the window is created.
pub fn mount_canvas() -> Result<HtmlCanvasElement, AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Dom("no document".into()))?;
    let mount = document
        .get_element_by_id(VIEWPORT_ID)
        .ok_or_else(|| AppError::Dom(format!("no #{} element in the page", VIEWPORT_ID)))?;

    let canvas = document
        .create_element("canvas")
        .map_err(|e| AppError::Dom(format!("{:?}", e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|e| AppError::Dom(format!("{:?}", e)))?;
    mount
        .append_child(&canvas)
        .map_err(|e| AppError::Dom(format!("{:?}", e)))?;

    Ok(canvas)
}
