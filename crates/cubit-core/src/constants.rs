//! Single source of truth for shared constants.
//! The atlas defaults must match the pixel layout of the texture atlas
//! the renderer draws, or UVs sample the wrong tile.

/// Default side length of a chunk in voxels.
pub const DEFAULT_CELL_SIZE: u32 = 32;

/// Largest accepted chunk side length. 256^3 voxels per chunk.
pub const MAX_CELL_SIZE: u32 = 256;

/// Default side length of one atlas tile in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 16;

/// Default atlas width in pixels (16 material columns).
pub const DEFAULT_ATLAS_WIDTH: u32 = 256;

/// Default atlas height in pixels (4 tile rows).
pub const DEFAULT_ATLAS_HEIGHT: u32 = 64;

/// Number of atlas rows addressed by the face table: side, bottom, top.
pub const ATLAS_FACE_ROWS: u32 = 3;

/// Vertices emitted per visible face.
pub const VERTICES_PER_FACE: u32 = 4;

/// Indices emitted per visible face (two triangles).
pub const INDICES_PER_FACE: u32 = 6;

/// Triangle fan over the 4 corners of a face.
pub const FACE_INDEX_FAN: [u32; 6] = [0, 1, 2, 2, 1, 3];
