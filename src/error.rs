/// Failure taxonomy. Window/renderer/audio-device startup failures are
/// handled (and abort) inside macroquad before any of this code runs; what
/// remains at runtime is asset loading, which is always recoverable: the
/// failure is logged, the affected handle becomes a placeholder, and drawing
/// or playing it is a no-op — never a null dereference.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("failed to load asset {path}: {message}")]
    AssetLoad { path: String, message: String },
}
