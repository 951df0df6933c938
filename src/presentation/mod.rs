pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings};
pub use router::{LEGACY_PROCESS_AUDIO_PATH, PROCESS_AUDIO_PATH, create_router};
pub use state::AppState;
