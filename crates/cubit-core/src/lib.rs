pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod math;
pub mod types;

pub use config::WorldConfig;
pub use direction::{Face, ALL_FACES};
pub use error::ConfigError;
pub use types::{ChunkCoord, MaterialId, VoxelSource, WorldCoord};
