use crate::chunk::Chunk;
use cubit_core::math::{world_to_chunk, world_to_offset};
use cubit_core::{ChunkCoord, MaterialId, VoxelSource, WorldCoord};
use glam::IVec3;
use std::collections::HashMap;

/// Sparse voxel storage: chunk coordinate -> dense chunk.
///
/// Absent chunks read as air and are only materialized by a write.
#[derive(Debug, Clone)]
pub struct ChunkMap {
    chunks: HashMap<ChunkCoord, Chunk>,
    cell_size: u32,
}

impl ChunkMap {
    pub fn new(cell_size: u32) -> Self {
        Self {
            chunks: HashMap::new(),
            cell_size,
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Chunk containing a world coordinate (floor division per axis).
    pub fn compute_chunk_coord(&self, x: i32, y: i32, z: i32) -> ChunkCoord {
        world_to_chunk(IVec3::new(x, y, z), self.cell_size)
    }

    /// Index of a world coordinate within its owning chunk.
    pub fn local_offset(&self, x: i32, y: i32, z: i32) -> usize {
        world_to_offset(IVec3::new(x, y, z), self.cell_size)
    }

    /// Material at a world coordinate; air if the chunk was never written.
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> MaterialId {
        self.get(IVec3::new(x, y, z))
    }

    /// Write a material, materializing the owning chunk if needed.
    /// Returns the previous value.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, value: MaterialId) -> MaterialId {
        self.set(IVec3::new(x, y, z), value)
    }

    pub fn get(&self, pos: WorldCoord) -> MaterialId {
        match self.chunks.get(&world_to_chunk(pos, self.cell_size)) {
            Some(chunk) => chunk.get(world_to_offset(pos, self.cell_size)),
            None => MaterialId::AIR,
        }
    }

    pub fn set(&mut self, pos: WorldCoord, value: MaterialId) -> MaterialId {
        let cs = self.cell_size;
        let chunk = self
            .chunks
            .entry(world_to_chunk(pos, cs))
            .or_insert_with(|| Chunk::new(cs));
        chunk.set(world_to_offset(pos, cs), value)
    }

    /// Get a chunk by coordinate.
    pub fn chunk(&self, coord: &ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(coord)
    }

    /// Iterator over all materialized chunks.
    pub fn iter(&self) -> impl Iterator<Item = (&ChunkCoord, &Chunk)> {
        self.chunks.iter()
    }

    /// Number of materialized chunks.
    pub fn loaded_count(&self) -> u32 {
        self.chunks.len() as u32
    }

    /// Total non-air voxels across all chunks.
    pub fn solid_voxel_count(&self) -> u64 {
        self.iter().map(|(_, c)| c.solid_count() as u64).sum()
    }
}

impl VoxelSource for ChunkMap {
    fn cell_size(&self) -> u32 {
        self.cell_size
    }

    fn voxel(&self, pos: WorldCoord) -> MaterialId {
        self.get(pos)
    }

    fn chunk_has_content(&self, coord: ChunkCoord) -> bool {
        self.chunk(&coord).is_some_and(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_voxels_read_air() {
        let map = ChunkMap::new(32);
        for (x, y, z) in [(0, 0, 0), (-1, -1, -1), (1000, -5000, 77), (i32::MIN, 0, i32::MAX)] {
            assert_eq!(map.get_voxel(x, y, z), MaterialId::AIR);
        }
        assert_eq!(map.loaded_count(), 0);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut map = ChunkMap::new(32);
        let coords = [
            (0, 0, 0),
            (31, 31, 31),
            (32, 0, -32),
            (-1, -1, -1),
            (-33, 64, 5),
            (i32::MIN, i32::MAX, -7),
        ];
        for (i, (x, y, z)) in coords.iter().enumerate() {
            map.set_voxel(*x, *y, *z, MaterialId(i as u16 + 1));
        }
        for (i, (x, y, z)) in coords.iter().enumerate() {
            assert_eq!(map.get_voxel(*x, *y, *z), MaterialId(i as u16 + 1));
        }
    }

    #[test]
    fn test_negative_coordinate_addressing() {
        let map = ChunkMap::new(32);
        assert_eq!(map.compute_chunk_coord(-1, -1, -1), IVec3::new(-1, -1, -1));
        assert_eq!(map.local_offset(-1, -1, -1), 31 * 32 * 32 + 31 * 32 + 31);
        assert_eq!(map.local_offset(-32, -32, -32), 0);
    }

    #[test]
    fn test_compute_chunk_coord_deterministic() {
        let map = ChunkMap::new(16);
        for (x, y, z) in [(5, -17, 300), (-1, 0, 15), (16, 16, -16)] {
            assert_eq!(map.compute_chunk_coord(x, y, z), map.compute_chunk_coord(x, y, z));
        }
        assert_eq!(map.compute_chunk_coord(15, 16, -16), IVec3::new(0, 1, -1));
    }

    #[test]
    fn test_write_materializes_single_chunk() {
        let mut map = ChunkMap::new(8);
        map.set_voxel(-1, 0, 0, MaterialId(2));
        assert_eq!(map.loaded_count(), 1);
        assert!(map.chunk(&IVec3::new(-1, 0, 0)).is_some());
        assert!(map.chunk(&IVec3::ZERO).is_none());

        let chunk = map.chunk(&IVec3::new(-1, 0, 0)).expect("materialized");
        assert_eq!(chunk.len(), 512);
        assert_eq!(chunk.get(7), MaterialId(2));
    }

    #[test]
    fn test_neighbouring_chunks_stay_separate() {
        let mut map = ChunkMap::new(8);
        map.set_voxel(7, 0, 0, MaterialId(1));
        map.set_voxel(8, 0, 0, MaterialId(2));
        assert_eq!(map.loaded_count(), 2);
        assert_eq!(map.get_voxel(7, 0, 0), MaterialId(1));
        assert_eq!(map.get_voxel(8, 0, 0), MaterialId(2));
        assert_eq!(map.solid_voxel_count(), 2);
    }

    #[test]
    fn test_chunk_has_content() {
        let mut map = ChunkMap::new(8);
        assert!(!map.chunk_has_content(IVec3::ZERO));
        map.set_voxel(1, 1, 1, MaterialId(1));
        assert!(map.chunk_has_content(IVec3::ZERO));
        map.set_voxel(1, 1, 1, MaterialId::AIR);
        assert!(!map.chunk_has_content(IVec3::ZERO));
        assert!(map.chunk(&IVec3::ZERO).is_some());
    }
}
