use serde::{Deserialize, Serialize};

use crate::constants::{
    ATLAS_FACE_ROWS, DEFAULT_ATLAS_HEIGHT, DEFAULT_ATLAS_WIDTH, DEFAULT_CELL_SIZE,
    DEFAULT_TILE_SIZE, MAX_CELL_SIZE,
};
use crate::error::ConfigError;

/// Construction-time parameters shared by storage, mesher and atlas UV math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Chunk edge length in voxels.
    pub cell_size: u32,
    /// Atlas tile edge length in pixels.
    pub tile_size: u32,
    /// Atlas width in pixels. One column per material id.
    pub atlas_width: u32,
    /// Atlas height in pixels. Row 0 = sides, 1 = bottom, 2 = top.
    pub atlas_height: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            atlas_width: DEFAULT_ATLAS_WIDTH,
            atlas_height: DEFAULT_ATLAS_HEIGHT,
        }
    }
}

impl WorldConfig {
    /// Default atlas layout with a custom chunk size.
    pub fn with_cell_size(cell_size: u32) -> Self {
        Self {
            cell_size,
            ..Self::default()
        }
    }

    /// Reject configurations that would otherwise surface later as
    /// corrupted geometry or out-of-range atlas lookups.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 || self.cell_size > MAX_CELL_SIZE {
            return Err(ConfigError::InvalidCellSize {
                value: self.cell_size,
                max: MAX_CELL_SIZE,
            });
        }
        if self.tile_size == 0 {
            return Err(ConfigError::InvalidTileSize);
        }
        for (axis, size) in [("width", self.atlas_width), ("height", self.atlas_height)] {
            if size == 0 || size % self.tile_size != 0 {
                return Err(ConfigError::AtlasNotTileMultiple {
                    axis,
                    size,
                    tile_size: self.tile_size,
                });
            }
        }
        let rows = self.atlas_height / self.tile_size;
        if rows < ATLAS_FACE_ROWS {
            return Err(ConfigError::TooFewAtlasRows {
                rows,
                required: ATLAS_FACE_ROWS,
            });
        }
        Ok(())
    }

    /// Number of material columns the atlas holds.
    pub fn atlas_columns(&self) -> u32 {
        self.atlas_width / self.tile_size
    }

    /// Voxels per materialized chunk (`cell_size^3`).
    pub fn voxels_per_chunk(&self) -> usize {
        let cs = self.cell_size as usize;
        cs * cs * cs
    }
}

/// Parse a world config from a RON string and validate it.
pub fn load_config_from_str(ron_str: &str) -> Result<WorldConfig, ConfigError> {
    let options = ron::Options::default();
    let config: WorldConfig = options
        .from_str(ron_str)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
