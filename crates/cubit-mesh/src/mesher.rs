use cubit_core::constants::{FACE_INDEX_FAN, INDICES_PER_FACE};
use cubit_core::math::{chunk_local_to_world, offset_to_local};
use cubit_core::{ChunkCoord, MaterialId, VoxelSource, WorldConfig};

use crate::atlas::AtlasLayout;
use crate::face::{FaceDef, FACE_TABLE};

/// Triangle mesh for one chunk, in chunk-local space.
///
/// Attribute buffers are flat: 3 floats per position/normal, 2 per UV.
/// Ownership passes to the caller; the mesher keeps nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// No geometry: the caller should not create a drawable for this chunk.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / INDICES_PER_FACE as usize
    }

    /// Raw bytes for GPU upload.
    pub fn positions_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normals_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn uvs_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    pub fn indices_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    fn push_face(
        &mut self,
        def: &FaceDef,
        local: [f32; 3],
        material: MaterialId,
        atlas: &AtlasLayout,
    ) {
        let base = self.vertex_count() as u32;
        for corner in &def.corners {
            self.positions.extend_from_slice(&[
                local[0] + corner.pos[0],
                local[1] + corner.pos[1],
                local[2] + corner.pos[2],
            ]);
            self.normals.extend_from_slice(&def.normal);
            self.uvs
                .extend_from_slice(&atlas.uv(material, def.uv_row, corner.uv));
        }
        self.indices.extend(FACE_INDEX_FAN.iter().map(|i| base + i));
    }
}

/// Face-culled chunk mesher.
///
/// A face is emitted iff the neighbouring voxel in world space is air, so
/// faces on a chunk boundary are culled against the adjacent chunk.
#[derive(Debug, Clone)]
pub struct ChunkMesher {
    cell_size: u32,
    atlas: AtlasLayout,
}

impl ChunkMesher {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            atlas: AtlasLayout::new(config),
        }
    }

    /// Build the mesh for chunk `coord`. Unmaterialized or fully occluded
    /// chunks yield empty buffers.
    pub fn generate_mesh<S: VoxelSource + ?Sized>(
        &self,
        source: &S,
        coord: ChunkCoord,
    ) -> MeshBuffers {
        debug_assert_eq!(source.cell_size(), self.cell_size);
        if !source.chunk_has_content(coord) {
            return MeshBuffers::default();
        }

        let cs = self.cell_size;
        let mut mesh = MeshBuffers::default();

        // Offsets walk y, then z, then x: the storage layout.
        for offset in 0..(cs as usize).pow(3) {
            let local = offset_to_local(offset, cs);
            // Cells past the i32 edge do not exist.
            let Some(world) = chunk_local_to_world(coord, local, cs) else {
                continue;
            };
            let material = source.voxel(world);
            if material.is_air() {
                continue;
            }
            let local_f = local.as_vec3().to_array();
            for def in &FACE_TABLE {
                // Nothing lies beyond the edge of the grid, so that face is exposed.
                let exposed = match def.face.neighbor(world) {
                    Some(neighbor) => source.voxel(neighbor).is_air(),
                    None => true,
                };
                if exposed {
                    mesh.push_face(def, local_f, material, &self.atlas);
                }
            }
        }

        log::debug!(
            "Meshed chunk {coord}: {} faces, {} vertices",
            mesh.face_count(),
            mesh.vertex_count()
        );
        mesh
    }
}
