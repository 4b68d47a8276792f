use cubit_core::{MaterialId, WorldConfig};

/// Logical layout of the texture atlas: one column per material id,
/// one row per face orientation. Row 0 is the top edge of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasLayout {
    tile_size: f32,
    width: f32,
    height: f32,
}

impl AtlasLayout {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            tile_size: config.tile_size as f32,
            width: config.atlas_width as f32,
            height: config.atlas_height as f32,
        }
    }

    /// Texture coordinate for a tile corner.
    ///
    /// V is flipped because texture space has v = 1 at the image's top row.
    pub fn uv(&self, material: MaterialId, uv_row: u32, corner_uv: [f32; 2]) -> [f32; 2] {
        let column = material.0 as f32;
        let row = uv_row as f32;
        [
            (column + corner_uv[0]) * self.tile_size / self.width,
            1.0 - (row + 1.0 - corner_uv[1]) * self.tile_size / self.height,
        ]
    }
}
