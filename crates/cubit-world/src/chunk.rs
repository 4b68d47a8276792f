use cubit_core::MaterialId;

/// Dense cube of `cell_size^3` voxels, indexed by
/// [`cubit_core::math::local_to_offset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    voxels: Vec<MaterialId>,
    /// Number of non-air voxels, kept in step with every write.
    solid_count: u32,
}

impl Chunk {
    /// Create an all-air chunk.
    pub fn new(cell_size: u32) -> Self {
        let cs = cell_size as usize;
        Self {
            voxels: vec![MaterialId::AIR; cs * cs * cs],
            solid_count: 0,
        }
    }

    pub fn get(&self, offset: usize) -> MaterialId {
        self.voxels[offset]
    }

    /// Write a voxel and return the value it replaced.
    pub fn set(&mut self, offset: usize, value: MaterialId) -> MaterialId {
        let previous = std::mem::replace(&mut self.voxels[offset], value);
        match (previous.is_solid(), value.is_solid()) {
            (false, true) => self.solid_count += 1,
            (true, false) => self.solid_count -= 1,
            _ => {}
        }
        previous
    }

    /// Whether this chunk contains no non-air voxels.
    pub fn is_empty(&self) -> bool {
        self.solid_count == 0
    }

    pub fn solid_count(&self) -> u32 {
        self.solid_count
    }

    /// Total voxel count (always `cell_size^3`).
    pub fn len(&self) -> usize {
        self.voxels.len()
    }
}
