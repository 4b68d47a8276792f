use thiserror::Error;

/// Errors raised while building or validating a [`crate::WorldConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell_size must be in 1..={max}, got {value}")]
    InvalidCellSize { value: u32, max: u32 },

    #[error("tile_size must be positive")]
    InvalidTileSize,

    #[error("atlas {axis} {size}px is not a positive multiple of tile_size {tile_size}px")]
    AtlasNotTileMultiple {
        axis: &'static str,
        size: u32,
        tile_size: u32,
    },

    #[error("atlas holds {rows} tile rows, face table needs at least {required}")]
    TooFewAtlasRows { rows: u32, required: u32 },

    #[error("Failed to parse world config RON: {0}")]
    Parse(String),
}
