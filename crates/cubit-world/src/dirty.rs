use cubit_core::math::{checked_offset, world_to_chunk, world_to_local};
use cubit_core::{ChunkCoord, WorldCoord};
use glam::IVec3;
use std::collections::HashSet;

/// Chunks whose mesh depends on the voxel at `pos`: the owning chunk, plus
/// each face-adjacent chunk when `pos` lies on the shared boundary.
///
/// The owning chunk is always first. At most 4 entries (a corner voxel
/// touches 3 neighbours), or 7 when `cell_size == 1`. Neighbours whose
/// coordinate would leave the `i32` range are skipped: no voxel can live there.
pub fn chunks_affected_by(pos: WorldCoord, cell_size: u32) -> Vec<ChunkCoord> {
    let owner = world_to_chunk(pos, cell_size);
    let local = world_to_local(pos, cell_size);
    let last = cell_size as i32 - 1;

    let mut affected = vec![owner];
    for axis in 0..3 {
        let mut offset = IVec3::ZERO;
        if local[axis] == 0 {
            offset[axis] = -1;
            affected.extend(checked_offset(owner, offset));
        }
        // Both ends coincide when cell_size == 1.
        if local[axis] == last {
            offset[axis] = 1;
            affected.extend(checked_offset(owner, offset));
        }
    }
    affected
}

/// Set of chunks that need re-meshing after edits.
#[derive(Debug, Clone, Default)]
pub struct DirtyChunks {
    chunks: HashSet<ChunkCoord>,
}

impl DirtyChunks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every chunk a voxel edit at `pos` can change.
    pub fn mark_edit(&mut self, pos: WorldCoord, cell_size: u32) {
        self.chunks.extend(chunks_affected_by(pos, cell_size));
    }

    pub fn contains(&self, coord: &ChunkCoord) -> bool {
        self.chunks.contains(coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Drain all dirty chunks, sorted by (x, y, z) so callers see a stable order.
    pub fn take(&mut self) -> Vec<ChunkCoord> {
        let mut out: Vec<ChunkCoord> = self.chunks.drain().collect();
        out.sort_by_key(|c| (c.x, c.y, c.z));
        out
    }
}
