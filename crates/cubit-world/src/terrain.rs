use crate::World;
use cubit_core::math::chunk_origin;
use cubit_core::{ChunkCoord, MaterialId};

// Material ids matching the default atlas columns.
pub const MAT_STONE: MaterialId = MaterialId(1);
pub const MAT_DIRT: MaterialId = MaterialId(2);
pub const MAT_GRASS: MaterialId = MaterialId(3);

/// Mean surface height in world-space voxel Y.
const BASE_HEIGHT: i32 = 8;

/// Depth of the dirt layer under the grass.
const DIRT_DEPTH: i32 = 3;

/// Heightmap terrain from 3-octave 2D simplex noise.
pub struct TerrainGenerator {
    /// Permutation table for simplex noise (doubled for wrapping).
    perm: [u8; 512],
}

impl TerrainGenerator {
    pub fn new(seed: u64) -> Self {
        let perm = Self::build_permutation(seed);
        Self { perm }
    }

    /// Material for a world-space voxel given its column height.
    ///
    /// Layers: stone below `height - DIRT_DEPTH`, dirt up to `height - 1`,
    /// grass at `height`, air above.
    pub fn material_at(height: i32, wy: i32) -> MaterialId {
        if wy > height {
            MaterialId::AIR
        } else if wy == height {
            MAT_GRASS
        } else if wy >= height - DIRT_DEPTH {
            MAT_DIRT
        } else {
            MAT_STONE
        }
    }

    /// Write terrain for every chunk in the inclusive box `min..=max`.
    /// Only solid voxels are written, so all-air chunks stay unmaterialized.
    /// Returns the number of voxels written.
    pub fn fill_region(&self, world: &mut World, min: ChunkCoord, max: ChunkCoord) -> u64 {
        let cell_size = world.config().cell_size;
        let cs = cell_size as i32;
        let lo = min.y * cs;
        let hi = (max.y + 1) * cs - 1;
        let mut written = 0u64;

        for cx in min.x..=max.x {
            for cz in min.z..=max.z {
                let base = chunk_origin(ChunkCoord::new(cx, 0, cz), cell_size);
                for lz in 0..cs {
                    for lx in 0..cs {
                        let wx = base.x + lx;
                        let wz = base.z + lz;
                        let height = self.terrain_height(wx, wz);
                        for wy in lo..=hi.min(height) {
                            world.set_voxel(wx, wy, wz, Self::material_at(height, wy));
                            written += 1;
                        }
                    }
                }
            }
        }

        log::info!(
            "Terrain filled chunks {min}..={max}: {written} voxels, {} chunks materialized",
            world.storage().loaded_count()
        );
        written
    }

    /// Compute terrain height at a world-space (x, z) position using 3-octave simplex noise.
    pub fn terrain_height(&self, wx: i32, wz: i32) -> i32 {
        let x = wx as f64;
        let z = wz as f64;

        let scale = 0.02;
        let mut h = 0.0f64;
        h += self.simplex2d(x * scale, z * scale) * 8.0;
        h += self.simplex2d(x * scale * 2.0 + 100.0, z * scale * 2.0 + 100.0) * 4.0;
        h += self.simplex2d(x * scale * 4.0 + 200.0, z * scale * 4.0 + 200.0) * 2.0;

        (BASE_HEIGHT as f64 + h).round() as i32
    }

    /// 2D simplex noise. Returns value in [-1, 1].
    fn simplex2d(&self, x: f64, z: f64) -> f64 {
        const F2: f64 = 0.5 * (1.7320508075688772 - 1.0); // (sqrt(3)-1)/2
        const G2: f64 = (3.0 - 1.7320508075688772) / 6.0; // (3-sqrt(3))/6

        let s = (x + z) * F2;
        let i = (x + s).floor();
        let j = (z + s).floor();

        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = z - (j - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i32 & 255) as usize;
        let jj = (j as i32 & 255) as usize;

        let gi0 = self.perm[ii + self.perm[jj] as usize] as usize % 12;
        let gi1 = self.perm[ii + i1 + self.perm[jj + j1] as usize] as usize % 12;
        let gi2 = self.perm[ii + 1 + self.perm[jj + 1] as usize] as usize % 12;

        let n0 = Self::corner_contribution(gi0, x0, y0);
        let n1 = Self::corner_contribution(gi1, x1, y1);
        let n2 = Self::corner_contribution(gi2, x2, y2);

        70.0 * (n0 + n1 + n2)
    }

    fn corner_contribution(gi: usize, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let t = t * t;
            t * t * Self::grad2d(gi, x, y)
        }
    }

    fn grad2d(hash: usize, x: f64, y: f64) -> f64 {
        const GRAD: [[f64; 2]; 12] = [
            [1.0, 1.0],
            [-1.0, 1.0],
            [1.0, -1.0],
            [-1.0, -1.0],
            [1.0, 0.0],
            [-1.0, 0.0],
            [0.0, 1.0],
            [0.0, -1.0],
            [1.0, 1.0],
            [-1.0, 1.0],
            [1.0, -1.0],
            [-1.0, -1.0],
        ];
        let g = &GRAD[hash % 12];
        g[0] * x + g[1] * y
    }

    fn build_permutation(seed: u64) -> [u8; 512] {
        let mut p: [u8; 256] = [0; 256];
        for (i, val) in p.iter_mut().enumerate() {
            *val = i as u8;
        }

        // Fisher-Yates shuffle driven by an LCG.
        let mut rng = seed;
        for i in (1..256).rev() {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let j = (rng >> 33) as usize % (i + 1);
            p.swap(i, j);
        }

        let mut perm = [0u8; 512];
        for (i, val) in perm.iter_mut().enumerate() {
            *val = p[i & 255];
        }
        perm
    }
}
