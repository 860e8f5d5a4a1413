use three_d::*;

use crate::assets;
use crate::debounce::Debouncer;
use crate::dom;
use crate::error::AppError;
use crate::log; // macro import
use crate::motion::Motion;
use crate::scene;


/// Bursts of viewport changes collapse into one resize this long after
/// the first change.
pub const RESIZE_DELAY_MS: f64 = 66.0;

const DRAG_SPEED: f32 = 0.005;


/// Drag control attached to the object ring rather than the camera:
/// horizontal left-button drag spins the ring about the vertical axis,
/// vertical drag and scrolling are ignored.
pub struct RingControl {
    speed: f32,
}

impl RingControl {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Handles the events. Must be called each frame.
    pub fn handle_events(&mut self, motion: &mut Motion, events: &[Event]) -> bool {
        let mut change = false;
        for event in events.iter() {
            match event {
                Event::MouseMotion { delta, button, .. } => {
                    if let Some(MouseButton::Left) = button {
                        motion.spin(delta.0 * self.speed);
                        change = true;
                    }
                }
                _ => {}
            }
        }
        change
    }
}


/// Startup pipeline: load the models, assemble the scene once, then run
/// the frame loop until page teardown. Failure at any stage
/// short-circuits to the caller.
pub async fn main() -> Result<(), AppError> {
    dom::mount_canvas()?;

    let window = Window::new(WindowSettings {
        title: "Carousel: OBJ ring + particle cloud in WASM + WebGL".to_string(),
        ..Default::default()
    })?;
    let context = window.gl();
    log!("main(): OpenGL version: {:?}", context.version());

    let models = assets::load_models().await?;
    let mut scene = scene::initialize(&context, window.viewport(), models)?;

    let mut control = RingControl::new(DRAG_SPEED);
    let mut debouncer = Debouncer::new(RESIZE_DELAY_MS);
    let mut applied = (window.viewport().width, window.viewport().height);

    window.render_loop(move |frame_input| {
        let dt = (frame_input.elapsed_time / 1000.0) as f32;

        control.handle_events(&mut scene.motion, &frame_input.events);
        scene.motion.advance(dt);

        // viewport changes are debounced; the applied size lags a burst
        let vp = frame_input.viewport;
        if (vp.width, vp.height) != applied {
            debouncer.event(frame_input.accumulated_time);
        }
        if debouncer.fire(frame_input.accumulated_time) {
            scene.camera.set_viewport(vp);
            scene.composer.resize(&context, vp.width, vp.height);
            applied = (vp.width, vp.height);
            log!("main(): resized to {}x{}", vp.width, vp.height);
        }

        scene.sync_transforms();
        scene.render(&frame_input);

        FrameOutput::default()
    });

    Ok(())
}
