use three_d::*;

use crate::error::AppError;


/// Scene clear color; the fog in the film pass converges to the same
/// value so distant geometry fades into the background.
pub const FOG_COLOR: [f32; 3] = [0.051, 0.059, 0.102];
pub const FOG_DENSITY: f32 = 0.005;

const NOISE_INTENSITY: f32 = 0.35;
const SCANLINE_INTENSITY: f32 = 0.0; // grain only, no scanlines
const SCANLINE_COUNT: f32 = 648.0;
const VIGNETTE_OFFSET: f32 = 1.0;
const VIGNETTE_DARKNESS: f32 = 1.3;


/// Two-pass frame composition: the scene is rendered into offscreen
/// color+depth targets, then a single full-screen pass applies distance
/// fog and the film effect and presents to the screen.
pub struct Composer {
    color: Texture2D,
    depth: DepthTexture2D,
    film: Program,
    quad: VertexBuffer,
}

impl Composer {
    pub fn new(context: &Context, width: u32, height: u32) -> Result<Self, AppError> {
        let (color, depth) = Self::targets(context, width, height);
        let film = Program::from_source(
            context,
            include_str!("film.vert"),
            include_str!("film.frag"),
        )?;
        // one oversized triangle covering the screen
        let quad = VertexBuffer::new_with_data(
            context,
            &[vec2(-1.0, -1.0), vec2(3.0, -1.0), vec2(-1.0, 3.0)],
        );
        Ok(Self { color, depth, film, quad })
    }

    fn targets(context: &Context, width: u32, height: u32) -> (Texture2D, DepthTexture2D) {
        let color = Texture2D::new_empty::<[u8; 4]>(
            context,
            width,
            height,
            Interpolation::Linear,
            Interpolation::Linear,
            None,
            Wrapping::ClampToEdge,
            Wrapping::ClampToEdge,
        );
        let depth = DepthTexture2D::new::<f32>(
            context,
            width,
            height,
            Wrapping::ClampToEdge,
            Wrapping::ClampToEdge,
        );
        (color, depth)
    }

    /// Recreates the offscreen targets at the new output size.
    pub fn resize(&mut self, context: &Context, width: u32, height: u32) {
        let (color, depth) = Self::targets(context, width, height);
        self.color = color;
        self.depth = depth;
    }

    /// Composes one frame: scene pass, then the final film pass to the
    /// screen.
    pub fn render(
        &mut self,
        frame_input: &FrameInput,
        camera: &Camera,
        objects: &[&dyn Object],
        lights: &[&dyn Light],
    ) {
        RenderTarget::new(self.color.as_color_target(None), self.depth.as_depth_target())
            .clear(ClearState::color_and_depth(
                FOG_COLOR[0],
                FOG_COLOR[1],
                FOG_COLOR[2],
                1.0,
                1.0,
            ))
            .render(camera, objects.iter().copied(), lights);

        self.film.use_texture("u_color", &self.color);
        self.film.use_depth_texture("u_depth", &self.depth);
        self.film.use_uniform("u_fog_color", vec3(FOG_COLOR[0], FOG_COLOR[1], FOG_COLOR[2]));
        self.film.use_uniform("u_fog_density", FOG_DENSITY);
        self.film.use_uniform("u_near", camera.z_near());
        self.film.use_uniform("u_far", camera.z_far());
        self.film.use_uniform("u_time", (frame_input.accumulated_time / 1000.0) as f32);
        self.film.use_uniform("u_noise_intensity", NOISE_INTENSITY);
        self.film.use_uniform("u_scanline_intensity", SCANLINE_INTENSITY);
        self.film.use_uniform("u_scanline_count", SCANLINE_COUNT);
        self.film.use_uniform("u_vignette_offset", VIGNETTE_OFFSET);
        self.film.use_uniform("u_vignette_darkness", VIGNETTE_DARKNESS);
        self.film.use_vertex_attribute("position", &self.quad);

        frame_input
            .screen()
            .clear(ClearState::color_and_depth(0.0, 0.0, 0.0, 1.0, 1.0))
            .write(|| {
                self.film.draw_arrays(
                    RenderStates {
                        depth_test: DepthTest::Always,
                        write_mask: WriteMask::COLOR,
                        ..Default::default()
                    },
                    frame_input.viewport,
                    3,
                );
            });
    }
}
