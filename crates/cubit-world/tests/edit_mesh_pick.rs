use cubit_core::{MaterialId, WorldConfig};
use cubit_world::terrain::{TerrainGenerator, MAT_GRASS};
use cubit_world::World;
use glam::{IVec3, Vec3};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Flat 32x32 stone floor at y = 9.
fn floor_world() -> World {
    let mut world = World::default();
    for x in 0..32 {
        for z in 0..32 {
            world.set_voxel(x, 9, z, 1u16);
        }
    }
    world.take_dirty_chunks();
    world
}

#[test]
fn test_mine_and_place_through_pick() {
    init_logging();
    let mut world = floor_world();
    let origin = Vec3::new(16.0, 20.0, 16.0);

    let hit = world
        .intersect_ray(origin, Vec3::NEG_Y, 64.0)
        .expect("floor under the column");
    assert_eq!(hit.voxel, IVec3::new(16, 9, 16));
    assert_eq!(hit.normal, IVec3::new(0, 1, 0));

    // Place on top of the hit face.
    let place = hit.adjacent();
    world.set_voxel(place.x, place.y, place.z, 2u16);
    let hit = world.intersect_ray(origin, Vec3::NEG_Y, 64.0).expect("placed block");
    assert_eq!(hit.voxel, IVec3::new(16, 10, 16));
    assert_eq!(hit.material, MaterialId(2));

    // Mine it again; the floor is visible once more.
    world.set_voxel(16, 10, 16, MaterialId::AIR);
    let hit = world.intersect_ray(origin, Vec3::NEG_Y, 64.0).expect("floor again");
    assert_eq!(hit.voxel, IVec3::new(16, 9, 16));

    assert!(world.intersect_ray(origin, Vec3::NEG_Y, 2.0).is_none());
}

#[test]
fn test_floor_mesh_faces() {
    init_logging();
    let world = floor_world();
    let mesh = world.generate_mesh_for_chunk(0, 0, 0);
    // 1024 tops, 1024 bottoms, 4 * 32 outer side faces.
    assert_eq!(mesh.face_count(), 1024 * 2 + 4 * 32);
    assert_eq!(mesh.vertex_count(), mesh.face_count() * 4);
    assert_eq!(mesh.triangle_count(), mesh.face_count() * 2);

    // Neighbouring chunks hold nothing.
    assert!(world.generate_mesh_for_chunk(1, 0, 0).is_empty());
    assert!(world.generate_mesh_for_chunk(-1, -1, -1).is_empty());
}

#[test]
fn test_boundary_edit_remeshes_both_chunks() {
    init_logging();
    let mut world = World::new(WorldConfig::with_cell_size(8)).expect("valid config");
    world.set_voxel(7, 0, 0, 1u16);
    world.take_dirty_chunks();

    let before = world.generate_mesh_for_chunk(0, 0, 0);
    assert_eq!(before.face_count(), 6);

    // Place a block across the chunk boundary: the +X face of (7,0,0) must go away.
    world.set_voxel(8, 0, 0, 1u16);
    let remeshed = world.remesh_dirty();
    let coords: Vec<IVec3> = remeshed.iter().map(|(c, _)| *c).collect();
    assert!(coords.contains(&IVec3::new(0, 0, 0)));
    assert!(coords.contains(&IVec3::new(1, 0, 0)));

    for (coord, mesh) in &remeshed {
        if *coord == IVec3::new(0, 0, 0) || *coord == IVec3::new(1, 0, 0) {
            assert_eq!(mesh.face_count(), 5, "chunk {coord} should cull the shared face");
        }
    }
}

#[test]
fn test_negative_quadrant_voxel() {
    init_logging();
    let mut world = World::default();
    world.set_voxel(-1, -1, -1, 7u16);
    assert_eq!(world.compute_chunk_coord(-1, -1, -1), IVec3::new(-1, -1, -1));
    assert_eq!(world.storage().local_offset(-1, -1, -1), 31 * 1024 + 31 * 32 + 31);

    let mesh = world.generate_mesh_for_chunk(-1, -1, -1);
    assert_eq!(mesh.face_count(), 6);
    assert!(world.generate_mesh_for_chunk(0, 0, 0).is_empty());

    let hit = world
        .intersect_ray(Vec3::new(-0.5, 5.0, -0.5), Vec3::NEG_Y, 10.0)
        .expect("hit");
    assert_eq!(hit.voxel, IVec3::new(-1, -1, -1));
    assert_eq!(hit.normal, IVec3::new(0, 1, 0));
}

#[test]
fn test_enclosed_voxel_contributes_nothing() {
    init_logging();
    let mut world = World::default();
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                world.set_voxel(x, y, z, 1u16);
            }
        }
    }
    let full = world.generate_mesh_for_chunk(0, 0, 0);
    // A 3x3x3 block exposes 9 faces per side.
    assert_eq!(full.face_count(), 54);

    // Hollowing the centre keeps the outer shell and adds 6 faces facing the cavity.
    world.set_voxel(1, 1, 1, MaterialId::AIR);
    let hollow = world.generate_mesh_for_chunk(0, 0, 0);
    assert_eq!(hollow.face_count(), 54 + 6);
}

#[test]
fn test_terrain_meshing_is_idempotent() {
    init_logging();
    let mut world = World::new(WorldConfig::with_cell_size(16)).expect("valid config");
    let gen = TerrainGenerator::new(3);
    gen.fill_region(&mut world, IVec3::new(-1, -1, -1), IVec3::new(1, 1, 1));

    let first = world.generate_mesh_for_chunk(0, 0, 0);
    let second = world.generate_mesh_for_chunk(0, 0, 0);
    assert_eq!(first, second);
    assert_eq!(first.vertex_count(), second.vertex_count());

    // Every column's grass top is pickable from above.
    let h = gen.terrain_height(4, 4);
    let hit = world
        .intersect_ray(Vec3::new(4.5, 40.0, 4.5), Vec3::NEG_Y, 100.0)
        .expect("terrain below");
    assert_eq!(hit.voxel, IVec3::new(4, h, 4));
    assert_eq!(hit.material, MAT_GRASS);
}

#[test]
fn test_edits_at_grid_extremes() {
    init_logging();
    for cell_size in [1, 3, 32] {
        let mut world = World::new(WorldConfig::with_cell_size(cell_size)).expect("valid config");
        for v in [i32::MAX, i32::MIN] {
            world.set_voxel(v, v, v, 1u16);
            assert_eq!(world.get_voxel(v, v, v), MaterialId(1));

            let coord = world.compute_chunk_coord(v, v, v);
            let mesh = world.generate_mesh_for_chunk(coord.x, coord.y, coord.z);
            assert_eq!(mesh.face_count(), 6, "corner voxel {v} at cell_size {cell_size}");
        }
        let remeshed = world.remesh_dirty();
        assert_eq!(remeshed.iter().filter(|(_, m)| !m.is_empty()).count(), 2);
    }

    let mut world = World::new(WorldConfig::with_cell_size(1)).expect("valid config");
    world.set_voxel(i32::MAX, 0, 0, 1u16);
    let hit = world
        .intersect_ray(Vec3::new(2_147_483_520.0, 0.5, 0.5), Vec3::X, 500.0)
        .expect("edge voxel");
    assert_eq!(hit.voxel, IVec3::new(i32::MAX, 0, 0));
    assert!(world.intersect_ray(Vec3::new(3.0e9, 0.5, 0.5), Vec3::X, 10.0).is_none());
}
