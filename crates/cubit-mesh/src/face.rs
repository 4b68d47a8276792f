use cubit_core::direction::Face;

/// Atlas row sampled by side faces (±X, ±Z).
pub const UV_ROW_SIDE: u32 = 0;
/// Atlas row sampled by the bottom face.
pub const UV_ROW_BOTTOM: u32 = 1;
/// Atlas row sampled by the top face.
pub const UV_ROW_TOP: u32 = 2;

/// One corner of a unit-cube face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Offset from the voxel's minimum corner, each component 0 or 1.
    pub pos: [f32; 3],
    /// Position inside the atlas tile, each component 0 or 1.
    pub uv: [f32; 2],
}

/// Static description of one face direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDef {
    pub face: Face,
    pub normal: [f32; 3],
    /// Ordered so the fan `0,1,2,2,1,3` winds counter-clockwise seen from outside.
    pub corners: [Corner; 4],
    pub uv_row: u32,
}

const fn corner(pos: [f32; 3], uv: [f32; 2]) -> Corner {
    Corner { pos, uv }
}

/// Face table indexed in [`cubit_core::ALL_FACES`] order.
pub static FACE_TABLE: [FaceDef; 6] = [
    FaceDef {
        face: Face::West,
        normal: [-1.0, 0.0, 0.0],
        corners: [
            corner([0.0, 1.0, 0.0], [0.0, 1.0]),
            corner([0.0, 0.0, 0.0], [0.0, 0.0]),
            corner([0.0, 1.0, 1.0], [1.0, 1.0]),
            corner([0.0, 0.0, 1.0], [1.0, 0.0]),
        ],
        uv_row: UV_ROW_SIDE,
    },
    FaceDef {
        face: Face::East,
        normal: [1.0, 0.0, 0.0],
        corners: [
            corner([1.0, 1.0, 1.0], [0.0, 1.0]),
            corner([1.0, 0.0, 1.0], [0.0, 0.0]),
            corner([1.0, 1.0, 0.0], [1.0, 1.0]),
            corner([1.0, 0.0, 0.0], [1.0, 0.0]),
        ],
        uv_row: UV_ROW_SIDE,
    },
    FaceDef {
        face: Face::Down,
        normal: [0.0, -1.0, 0.0],
        corners: [
            corner([1.0, 0.0, 1.0], [1.0, 0.0]),
            corner([0.0, 0.0, 1.0], [0.0, 0.0]),
            corner([1.0, 0.0, 0.0], [1.0, 1.0]),
            corner([0.0, 0.0, 0.0], [0.0, 1.0]),
        ],
        uv_row: UV_ROW_BOTTOM,
    },
    FaceDef {
        face: Face::Up,
        normal: [0.0, 1.0, 0.0],
        corners: [
            corner([0.0, 1.0, 1.0], [1.0, 1.0]),
            corner([1.0, 1.0, 1.0], [0.0, 1.0]),
            corner([0.0, 1.0, 0.0], [1.0, 0.0]),
            corner([1.0, 1.0, 0.0], [0.0, 0.0]),
        ],
        uv_row: UV_ROW_TOP,
    },
    FaceDef {
        face: Face::North,
        normal: [0.0, 0.0, -1.0],
        corners: [
            corner([1.0, 0.0, 0.0], [0.0, 0.0]),
            corner([0.0, 0.0, 0.0], [1.0, 0.0]),
            corner([1.0, 1.0, 0.0], [0.0, 1.0]),
            corner([0.0, 1.0, 0.0], [1.0, 1.0]),
        ],
        uv_row: UV_ROW_SIDE,
    },
    FaceDef {
        face: Face::South,
        normal: [0.0, 0.0, 1.0],
        corners: [
            corner([0.0, 0.0, 1.0], [0.0, 0.0]),
            corner([1.0, 0.0, 1.0], [1.0, 0.0]),
            corner([0.0, 1.0, 1.0], [0.0, 1.0]),
            corner([1.0, 1.0, 1.0], [1.0, 1.0]),
        ],
        uv_row: UV_ROW_SIDE,
    },
];
