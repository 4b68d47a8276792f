pub mod atlas;
pub mod face;
pub mod mesher;

pub use atlas::AtlasLayout;
pub use face::{FaceDef, FACE_TABLE};
pub use mesher::{ChunkMesher, MeshBuffers};
