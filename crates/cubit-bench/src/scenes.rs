use cubit_world::terrain::TerrainGenerator;
use cubit_world::World;
use glam::IVec3;

/// How a benchmark scene fills its chunk box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFill {
    /// One solid layer per chunk row at local y = cell_size / 2.
    FlatPlane,
    /// Alternating solid/air voxels: worst case for face culling.
    Checkerboard,
    /// Simplex heightmap terrain.
    Terrain { seed: u64 },
}

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub fill: SceneFill,
    /// Inclusive chunk box the scene occupies.
    pub min_chunk: IVec3,
    pub max_chunk: IVec3,
    /// Eye position for the pick rays.
    pub camera_position: [f32; 3],
}

/// Return the standard suite of benchmark scenes.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "flat-4x4",
            fill: SceneFill::FlatPlane,
            min_chunk: IVec3::new(-2, 0, -2),
            max_chunk: IVec3::new(1, 0, 1),
            camera_position: [0.5, 40.0, 0.5],
        },
        SceneConfig {
            name: "checker-2x2",
            fill: SceneFill::Checkerboard,
            min_chunk: IVec3::new(0, 0, 0),
            max_chunk: IVec3::new(1, 0, 1),
            camera_position: [32.5, 48.0, 32.5],
        },
        SceneConfig {
            name: "terrain-6x6",
            fill: SceneFill::Terrain { seed: 42 },
            min_chunk: IVec3::new(-3, -1, -3),
            max_chunk: IVec3::new(2, 0, 2),
            camera_position: [0.5, 60.0, 0.5],
        },
    ]
}

/// Write a scene into `world`. Returns the number of voxels written.
pub fn populate(world: &mut World, config: &SceneConfig) -> u64 {
    match config.fill {
        SceneFill::Terrain { seed } => {
            TerrainGenerator::new(seed).fill_region(world, config.min_chunk, config.max_chunk)
        }
        SceneFill::FlatPlane | SceneFill::Checkerboard => fill_pattern(world, config),
    }
}

fn fill_pattern(world: &mut World, config: &SceneConfig) -> u64 {
    let cs = world.config().cell_size as i32;
    let lo = config.min_chunk * cs;
    let hi = (config.max_chunk + IVec3::ONE) * cs;
    let mut written = 0u64;

    for y in lo.y..hi.y {
        for z in lo.z..hi.z {
            for x in lo.x..hi.x {
                let solid = match config.fill {
                    SceneFill::FlatPlane => y.rem_euclid(cs) == cs / 2,
                    SceneFill::Checkerboard => (x + y + z).rem_euclid(2) == 0,
                    SceneFill::Terrain { .. } => false,
                };
                if solid {
                    // Material cycles through the first 4 atlas columns.
                    let material = 1 + (x + z).rem_euclid(4) as u16;
                    world.set_voxel(x, y, z, material);
                    written += 1;
                }
            }
        }
    }

    written
}

/// Chunk coordinates in the scene box, x fastest.
pub fn scene_chunks(config: &SceneConfig) -> Vec<IVec3> {
    let mut coords = Vec::new();
    for cy in config.min_chunk.y..=config.max_chunk.y {
        for cz in config.min_chunk.z..=config.max_chunk.z {
            for cx in config.min_chunk.x..=config.max_chunk.x {
                coords.push(IVec3::new(cx, cy, cz));
            }
        }
    }
    coords
}
