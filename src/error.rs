use thiserror::Error;


/// Everything that can go wrong during startup. The render loop itself
/// has no failure path; these all funnel to the top-level catch in
/// [crate::run].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load assets: {0}")]
    Load(#[from] three_d_asset::Error),
    #[error("window error: {0}")]
    Window(#[from] three_d::WindowError),
    #[error("renderer error: {0}")]
    Renderer(#[from] three_d::RendererError),
    #[error("graphics error: {0}")]
    Core(#[from] three_d::CoreError),
    #[error("dom error: {0}")]
    Dom(String),
}
