#[macro_export]
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into());
    }
}


/// Enable better error messages if our code ever panics
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}


/// Uniformly distributed value in [min, max)
#[inline(always)]
pub fn random(min: f32, max: f32) -> f32 {
    min + (js_sys::Math::random() as f32) * (max - min)
}
