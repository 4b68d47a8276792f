use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Newtype for material identifiers. 0 = air/empty.
///
/// Non-zero ids double as the atlas column the mesher samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MaterialId(pub u16);

impl MaterialId {
    pub const AIR: MaterialId = MaterialId(0);

    pub fn is_air(self) -> bool {
        self.0 == 0
    }

    pub fn is_solid(self) -> bool {
        self.0 != 0
    }
}

impl From<u16> for MaterialId {
    fn from(id: u16) -> Self {
        MaterialId(id)
    }
}

/// Chunk coordinate in chunk-space (each unit = `cell_size` voxels).
pub type ChunkCoord = IVec3;

/// World coordinate in voxel-space.
pub type WorldCoord = IVec3;

/// Read access to a voxel grid addressed in world space.
///
/// The mesher and the raycaster only ever read through this trait, so they
/// see neighbouring chunks exactly as the storage does.
pub trait VoxelSource {
    /// Chunk side length in voxels.
    fn cell_size(&self) -> u32;

    /// Material at a world coordinate. Must return air for regions that
    /// were never written.
    fn voxel(&self, pos: WorldCoord) -> MaterialId;

    /// Whether the chunk may hold any solid voxel. Returning `true`
    /// is always correct; `false` lets callers skip the chunk entirely.
    fn chunk_has_content(&self, _coord: ChunkCoord) -> bool {
        true
    }
}
