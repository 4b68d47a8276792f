use crate::types::{ChunkCoord, WorldCoord};
use glam::IVec3;

/// Convert a world-space voxel coordinate to its containing chunk coordinate.
/// Floor division, so `-1` lands in chunk `-1`, not `0`.
pub fn world_to_chunk(world: WorldCoord, cell_size: u32) -> ChunkCoord {
    let cs = cell_size as i32;
    IVec3::new(
        world.x.div_euclid(cs),
        world.y.div_euclid(cs),
        world.z.div_euclid(cs),
    )
}

/// Convert a world-space voxel coordinate to its local cell within a chunk.
/// Every component is in `[0, cell_size)`.
pub fn world_to_local(world: WorldCoord, cell_size: u32) -> IVec3 {
    let cs = cell_size as i32;
    IVec3::new(
        world.x.rem_euclid(cs),
        world.y.rem_euclid(cs),
        world.z.rem_euclid(cs),
    )
}

/// Linear index of a local cell: `y * cs^2 + z * cs + x`.
pub fn local_to_offset(local: IVec3, cell_size: u32) -> usize {
    let cs = cell_size as usize;
    local.y as usize * cs * cs + local.z as usize * cs + local.x as usize
}

/// Inverse of [`local_to_offset`].
pub fn offset_to_local(offset: usize, cell_size: u32) -> IVec3 {
    let cs = cell_size as usize;
    IVec3::new(
        (offset % cs) as i32,
        (offset / (cs * cs)) as i32,
        ((offset / cs) % cs) as i32,
    )
}

/// Linear index of a world coordinate inside its owning chunk.
pub fn world_to_offset(world: WorldCoord, cell_size: u32) -> usize {
    local_to_offset(world_to_local(world, cell_size), cell_size)
}

/// World-space position of a chunk's (0, 0, 0) cell.
pub fn chunk_origin(chunk: ChunkCoord, cell_size: u32) -> WorldCoord {
    chunk * cell_size as i32
}

/// Convert a chunk coordinate and local offset back to world-space.
/// `None` when the cell lies past the edge of the `i32` grid, which happens
/// for the last chunk on an axis when `cell_size` does not divide `2^31`.
pub fn chunk_local_to_world(
    chunk: ChunkCoord,
    local: IVec3,
    cell_size: u32,
) -> Option<WorldCoord> {
    let cs = i64::from(cell_size);
    let axis = |c: i32, l: i32| i32::try_from(i64::from(c) * cs + i64::from(l)).ok();
    Some(IVec3::new(
        axis(chunk.x, local.x)?,
        axis(chunk.y, local.y)?,
        axis(chunk.z, local.z)?,
    ))
}

/// `pos + delta`, or `None` if any component leaves the `i32` range.
pub fn checked_offset(pos: WorldCoord, delta: IVec3) -> Option<WorldCoord> {
    Some(IVec3::new(
        pos.x.checked_add(delta.x)?,
        pos.y.checked_add(delta.y)?,
        pos.z.checked_add(delta.z)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CS: u32 = 32;

    #[test]
    fn test_negative_world_to_chunk() {
        assert_eq!(world_to_chunk(IVec3::new(-1, -1, -1), CS), IVec3::new(-1, -1, -1));
        assert_eq!(world_to_chunk(IVec3::new(-32, -33, 31), CS), IVec3::new(-1, -2, 0));
        assert_eq!(world_to_chunk(IVec3::new(32, 64, 0), CS), IVec3::new(1, 2, 0));
    }

    #[test]
    fn test_negative_world_to_local() {
        assert_eq!(world_to_local(IVec3::new(-1, -1, -1), CS), IVec3::new(31, 31, 31));
        assert_eq!(world_to_local(IVec3::new(-32, -33, 33), CS), IVec3::new(0, 31, 1));
    }

    #[test]
    fn test_offset_layout_is_y_major() {
        assert_eq!(local_to_offset(IVec3::new(1, 0, 0), CS), 1);
        assert_eq!(local_to_offset(IVec3::new(0, 0, 1), CS), 32);
        assert_eq!(local_to_offset(IVec3::new(0, 1, 0), CS), 1024);
        assert_eq!(
            world_to_offset(IVec3::new(-1, -1, -1), CS),
            31 * 1024 + 31 * 32 + 31
        );
    }

    #[test]
    fn test_offset_roundtrip() {
        for offset in [0usize, 1, 31, 32, 1023, 1024, 32767] {
            let local = offset_to_local(offset, CS);
            assert_eq!(local_to_offset(local, CS), offset);
        }
    }

    #[test]
    fn test_chunk_local_roundtrip() {
        for cs in [1u32, 7, 16, 32] {
            for x in [-65, -33, -32, -1, 0, 1, 31, 32, 100] {
                for y in [-17, -1, 0, 5, 64] {
                    let world = IVec3::new(x, y, -x);
                    let back = chunk_local_to_world(
                        world_to_chunk(world, cs),
                        world_to_local(world, cs),
                        cs,
                    );
                    assert_eq!(back, Some(world), "roundtrip failed for {world} at cs={cs}");
                }
            }
        }
    }

    #[test]
    fn test_chunk_local_roundtrip_at_grid_edges() {
        for cs in [1u32, 3, 32, 256] {
            for world in [
                IVec3::splat(i32::MAX),
                IVec3::splat(i32::MIN),
                IVec3::new(i32::MAX, 0, i32::MIN),
            ] {
                let back = chunk_local_to_world(
                    world_to_chunk(world, cs),
                    world_to_local(world, cs),
                    cs,
                );
                assert_eq!(back, Some(world), "roundtrip failed for {world} at cs={cs}");
            }
        }
    }

    #[test]
    fn test_cell_past_grid_edge_is_none() {
        // i32::MAX = 3 * 715827882 + 1, so the top chunk's last cell is 2^31.
        let chunk = world_to_chunk(IVec3::new(i32::MAX, 0, 0), 3);
        assert_eq!(
            chunk_local_to_world(chunk, IVec3::new(1, 0, 0), 3),
            Some(IVec3::new(i32::MAX, 0, 0))
        );
        assert_eq!(chunk_local_to_world(chunk, IVec3::new(2, 0, 0), 3), None);
    }

    #[test]
    fn test_checked_offset() {
        assert_eq!(checked_offset(IVec3::ZERO, IVec3::NEG_X), Some(IVec3::new(-1, 0, 0)));
        assert_eq!(checked_offset(IVec3::new(i32::MAX, 0, 0), IVec3::X), None);
        assert_eq!(checked_offset(IVec3::new(0, i32::MIN, 0), IVec3::NEG_Y), None);
        assert_eq!(
            checked_offset(IVec3::new(i32::MAX, 0, 0), IVec3::NEG_X),
            Some(IVec3::new(i32::MAX - 1, 0, 0))
        );
    }

    #[test]
    fn test_chunk_origin() {
        assert_eq!(chunk_origin(IVec3::new(-1, 2, 0), CS), IVec3::new(-32, 64, 0));
    }
}
