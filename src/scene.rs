use three_d::*;

use crate::assets::MODEL_COUNT;
use crate::error::AppError;
use crate::log; // macro import
use crate::motion::{self, Motion};
use crate::particles;
use crate::pipeline::Composer;
use crate::utils;


const CAMERA_HEIGHT: f32 = 10.0;
const CAMERA_FOV_DEG: f32 = 45.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;

const AMBIENT_INTENSITY: f32 = 0.4;
const SPOT_INTENSITY: f32 = 0.8;
const SPOT_HEIGHT: f32 = 200.0;


/// Everything the render loop needs, owned as one explicit value rather
/// than module-level state.
pub struct SceneContext {
    pub camera: Camera,
    pub ring: Vec<Model<PhysicalMaterial>>,
    pub cloud: Gm<InstancedMesh, PhysicalMaterial>,
    pub ambient: AmbientLight,
    pub spot: SpotLight,
    pub composer: Composer,
    pub motion: Motion,
}


/// One-shot scene assembly. The array type guarantees exactly the four
/// ring models are present; assembly is never attempted with fewer.
pub fn initialize(
    context: &Context,
    viewport: Viewport,
    models: [CpuModel; MODEL_COUNT],
) -> Result<SceneContext, AppError> {
    // camera sits on the ring axis at horizon level, looking at slot 0
    let camera = Camera::new_perspective(
        viewport,
        vec3(0.0, CAMERA_HEIGHT, 0.0),
        vec3(motion::RING_RADIUS, CAMERA_HEIGHT, 0.0),
        vec3(0.0, 1.0, 0.0),
        degrees(CAMERA_FOV_DEG),
        CAMERA_NEAR,
        CAMERA_FAR,
    );

    let mut ring = Vec::with_capacity(MODEL_COUNT);
    for cpu_model in models.iter() {
        ring.push(Model::<PhysicalMaterial>::new(context, cpu_model)?);
    }

    let cloud = build_cloud(context, particles::CLOUD_COUNT);

    let ambient = AmbientLight::new(context, AMBIENT_INTENSITY, Srgba::WHITE);
    let spot = SpotLight::new(
        context,
        SPOT_INTENSITY,
        Srgba::WHITE,
        &vec3(0.0, SPOT_HEIGHT, 0.0),
        &vec3(0.0, -1.0, 0.0),
        degrees(45.0),
        Attenuation::default(),
    );

    let composer = Composer::new(context, viewport.width, viewport.height)?;

    let mut scene = SceneContext {
        camera,
        ring,
        cloud,
        ambient,
        spot,
        composer,
        motion: Motion::new(),
    };
    scene.sync_transforms();
    log!(
        "initialize(): scene ready with {} ring models and {} particles",
        MODEL_COUNT,
        particles::CLOUD_COUNT
    );
    Ok(scene)
}


/// Builds the particle cloud as a single instanced mesh; all cubes share
/// one material and rotate together through the group transform.
fn build_cloud(context: &Context, count: usize) -> Gm<InstancedMesh, PhysicalMaterial> {
    let mut rng = |min: f32, max: f32| utils::random(min, max);
    let transformations = particles::scatter(count, &mut rng)
        .iter()
        .map(particles::transform)
        .collect();
    let instances = Instances {
        transformations,
        ..Default::default()
    };
    let material = PhysicalMaterial::new_opaque(
        context,
        &CpuMaterial {
            albedo: Srgba::new_opaque(180, 186, 201),
            roughness: 0.8,
            metallic: 0.1,
            ..Default::default()
        },
    );
    Gm::new(InstancedMesh::new(context, &instances, &CpuMesh::cube()), material)
}


impl SceneContext {
    /// Applies the animation state to the renderable objects: each ring
    /// member spins in place at its fixed slot, the whole ring turns by
    /// the user-controlled spin, the cloud rotates as one unit.
    pub fn sync_transforms(&mut self) {
        let spin = Mat4::from_angle_y(radians(self.motion.ring_spin));
        for (i, model) in self.ring.iter_mut().enumerate() {
            let t = spin
                * Mat4::from_translation(motion::ring_position(i))
                * Mat4::from_angle_y(radians(self.motion.object_angles[i]));
            for part in model.iter_mut() {
                part.set_transformation(t);
            }
        }
        self.cloud
            .set_transformation(Mat4::from_angle_y(radians(self.motion.cloud_angle)));
    }

    /// Hands the frame to the composition pipeline.
    pub fn render(&mut self, frame_input: &FrameInput) {
        let mut objects: Vec<&dyn Object> = Vec::new();
        for model in &self.ring {
            for part in model.iter() {
                objects.push(part);
            }
        }
        objects.push(&self.cloud);
        let lights: [&dyn Light; 2] = [&self.ambient, &self.spot];
        self.composer.render(frame_input, &self.camera, &objects, &lights);
    }
}
