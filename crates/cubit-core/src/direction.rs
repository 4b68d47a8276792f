use glam::IVec3;

use crate::math::checked_offset;
use crate::types::WorldCoord;

/// One of the six axis-aligned faces of a voxel.
/// Y-up convention: North = -Z, South = +Z, East = +X, West = -X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    West = 0,
    East = 1,
    Down = 2,
    Up = 3,
    North = 4,
    South = 5,
}

/// All six faces in the fixed order the mesher emits them.
pub const ALL_FACES: [Face; 6] = [
    Face::West,
    Face::East,
    Face::Down,
    Face::Up,
    Face::North,
    Face::South,
];

impl Face {
    /// Outward unit offset for this face.
    pub fn offset(self) -> IVec3 {
        match self {
            Face::West => IVec3::new(-1, 0, 0),
            Face::East => IVec3::new(1, 0, 0),
            Face::Down => IVec3::new(0, -1, 0),
            Face::Up => IVec3::new(0, 1, 0),
            Face::North => IVec3::new(0, 0, -1),
            Face::South => IVec3::new(0, 0, 1),
        }
    }

    /// Cell across this face from `pos`. `None` at the edge of the `i32` grid.
    pub fn neighbor(self, pos: WorldCoord) -> Option<WorldCoord> {
        checked_offset(pos, self.offset())
    }
}
