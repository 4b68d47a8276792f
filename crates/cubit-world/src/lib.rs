pub mod chunk;
pub mod chunk_map;
pub mod dirty;
pub mod raycast;
pub mod terrain;

use chunk_map::ChunkMap;
use cubit_core::{ChunkCoord, ConfigError, MaterialId, WorldConfig};
use cubit_mesh::{ChunkMesher, MeshBuffers};
use dirty::DirtyChunks;
use glam::{IVec3, Vec3};

pub use cubit_core::types::WorldCoord;
pub use raycast::RayHit;

/// Primary public struct for the cubit-world crate.
///
/// Owns the chunk map and exposes the edit, mesh and pick surface used by
/// renderers and input handlers. Single-threaded: callers must not share
/// a `World` across threads without their own synchronization.
pub struct World {
    config: WorldConfig,
    chunk_map: ChunkMap,
    mesher: ChunkMesher,
    dirty: DirtyChunks,
}

impl Default for World {
    fn default() -> Self {
        let config = WorldConfig::default();
        Self::build(config)
    }
}

impl World {
    /// Create an empty world. Rejects malformed configuration eagerly.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: WorldConfig) -> Self {
        log::info!(
            "World created: cell_size={}, atlas {}x{} tiles of {}px",
            config.cell_size,
            config.atlas_width / config.tile_size,
            config.atlas_height / config.tile_size,
            config.tile_size
        );
        Self {
            chunk_map: ChunkMap::new(config.cell_size),
            mesher: ChunkMesher::new(&config),
            dirty: DirtyChunks::new(),
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Get the chunk map for reading.
    pub fn storage(&self) -> &ChunkMap {
        &self.chunk_map
    }

    /// Chunk containing a world coordinate.
    pub fn compute_chunk_coord(&self, x: i32, y: i32, z: i32) -> ChunkCoord {
        self.chunk_map.compute_chunk_coord(x, y, z)
    }

    /// Material at a world coordinate (air if never written).
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> MaterialId {
        self.chunk_map.get_voxel(x, y, z)
    }

    /// Write a material. When the value changes, the owning chunk and every
    /// neighbour chunk sharing the voxel's boundary face are marked dirty.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, material: impl Into<MaterialId>) {
        let material = material.into();
        let previous = self.chunk_map.set_voxel(x, y, z, material);
        if previous != material {
            self.dirty.mark_edit(IVec3::new(x, y, z), self.config.cell_size);
        }
    }

    /// Build the mesh for one chunk. Empty buffers mean "no geometry".
    pub fn generate_mesh_for_chunk(&self, cx: i32, cy: i32, cz: i32) -> MeshBuffers {
        self.mesher.generate_mesh(&self.chunk_map, IVec3::new(cx, cy, cz))
    }

    /// First solid voxel along a ray, with the normal of the face it entered through.
    pub fn intersect_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<RayHit> {
        raycast::intersect_ray(&self.chunk_map, origin, direction, max_distance)
    }

    /// Chunks whose mesh an edit at `(x, y, z)` can change, owning chunk first.
    pub fn chunks_affected_by(&self, x: i32, y: i32, z: i32) -> Vec<ChunkCoord> {
        dirty::chunks_affected_by(IVec3::new(x, y, z), self.config.cell_size)
    }

    /// Whether a chunk has pending edits.
    pub fn is_dirty(&self, coord: &ChunkCoord) -> bool {
        self.dirty.contains(coord)
    }

    /// Drain the chunks edited since the last call, in (x, y, z) order.
    pub fn take_dirty_chunks(&mut self) -> Vec<ChunkCoord> {
        self.dirty.take()
    }

    /// Re-mesh every dirty chunk. Chunks that became empty are included with
    /// empty buffers so callers can drop their drawables.
    pub fn remesh_dirty(&mut self) -> Vec<(ChunkCoord, MeshBuffers)> {
        let coords = self.dirty.take();
        if !coords.is_empty() {
            log::debug!("Re-meshing {} dirty chunks", coords.len());
        }
        coords
            .into_iter()
            .map(|coord| (coord, self.mesher.generate_mesh(&self.chunk_map, coord)))
            .collect()
    }
}
