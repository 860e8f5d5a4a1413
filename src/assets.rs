use three_d::CpuModel;

use crate::error::AppError;
use crate::log; // macro import


pub const MODEL_COUNT: usize = 4;

/// Resources are fetched relative to the page's base path.
pub const MODEL_PATHS: [&str; MODEL_COUNT] = [
    "models/object0.obj",
    "models/object1.obj",
    "models/object2.obj",
    "models/object3.obj",
];


/// Fetches the four ring models concurrently.
///
/// Resolves only once every request has completed; the first request
/// that fails aborts the whole load. There is no partial result and no
/// retry.
pub async fn load_models() -> Result<[CpuModel; MODEL_COUNT], AppError> {
    let mut raw = three_d_asset::io::load_async(&MODEL_PATHS).await?;

    let mut models = Vec::with_capacity(MODEL_COUNT);
    for path in MODEL_PATHS {
        let model: CpuModel = raw.deserialize(path)?;
        log!("load_models(): loaded {} ({} meshes)", path, model.geometries.len());
        models.push(model);
    }

    match models.try_into() {
        Ok(models) => Ok(models),
        // length is MODEL_COUNT by construction
        Err(_) => unreachable!(),
    }
}
