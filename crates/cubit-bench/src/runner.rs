use std::time::Instant;

use cubit_core::{ConfigError, WorldConfig};
use cubit_world::World;
use glam::Vec3;

use crate::scenes::{self, SceneConfig};

/// Side length of the square grid of pick rays cast per iteration.
const RAY_GRID: i32 = 16;

/// Pick distance for the ray fan.
const PICK_DISTANCE: f32 = 256.0;

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub solid_voxels: u64,
    pub chunk_count: u32,
    pub iterations: u32,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub ray_hits: u32,
    /// Time to mesh every chunk in the scene once.
    pub mesh_timings: TimingSeries,
    /// Time to cast the whole ray fan once.
    pub raycast_timings: TimingSeries,
}

/// Runs the meshing and picking benchmarks on the CPU.
pub struct BenchmarkRunner {
    config: WorldConfig,
    iterations: u32,
}

impl BenchmarkRunner {
    pub fn new(iterations: u32) -> Self {
        Self {
            config: WorldConfig::default(),
            iterations,
        }
    }

    /// Use a non-default world configuration for every scene.
    pub fn with_config(config: WorldConfig, iterations: u32) -> Self {
        Self { config, iterations }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, scene: &SceneConfig) -> Result<BenchmarkResult, ConfigError> {
        log::info!("Running scene '{}'...", scene.name);

        let mut world = World::new(self.config)?;
        let written = scenes::populate(&mut world, scene);
        world.take_dirty_chunks();

        let chunks = scenes::scene_chunks(scene);
        log::info!(
            "  Populated {} voxels across {} chunks ({} materialized)",
            written,
            chunks.len(),
            world.storage().loaded_count()
        );

        let mut vertex_count = 0;
        let mut triangle_count = 0;
        let mut mesh_times = Vec::with_capacity(self.iterations as usize);
        for _ in 0..self.iterations {
            let start = Instant::now();
            let mut vertices = 0;
            let mut triangles = 0;
            for coord in &chunks {
                let mesh = world.generate_mesh_for_chunk(coord.x, coord.y, coord.z);
                vertices += mesh.vertex_count();
                triangles += mesh.triangle_count();
            }
            mesh_times.push(start.elapsed().as_secs_f64() * 1000.0);
            vertex_count = vertices;
            triangle_count = triangles;
        }

        let origin = Vec3::from_array(scene.camera_position);
        let directions = ray_fan();
        let mut ray_hits = 0;
        let mut ray_times = Vec::with_capacity(self.iterations as usize);
        for _ in 0..self.iterations {
            let start = Instant::now();
            let mut hits = 0;
            for dir in &directions {
                if world.intersect_ray(origin, *dir, PICK_DISTANCE).is_some() {
                    hits += 1;
                }
            }
            ray_times.push(start.elapsed().as_secs_f64() * 1000.0);
            ray_hits = hits;
        }

        let mesh_timings = compute_timings(&mesh_times);
        let raycast_timings = compute_timings(&ray_times);
        log::info!(
            "  Mesh: mean={:.2}ms, p95={:.2}ms, {} triangles",
            mesh_timings.mean_ms,
            mesh_timings.p95_ms,
            triangle_count
        );
        log::info!(
            "  Rays: mean={:.3}ms, p95={:.3}ms, {}/{} hit",
            raycast_timings.mean_ms,
            raycast_timings.p95_ms,
            ray_hits,
            directions.len()
        );

        Ok(BenchmarkResult {
            scene_name: scene.name.to_string(),
            solid_voxels: world.storage().solid_voxel_count(),
            chunk_count: chunks.len() as u32,
            iterations: self.iterations,
            vertex_count,
            triangle_count,
            ray_hits,
            mesh_timings,
            raycast_timings,
        })
    }
}

/// Downward-facing fan of pick directions, spread over a 90 degree cone.
fn ray_fan() -> Vec<Vec3> {
    let half = (RAY_GRID - 1) as f32 / 2.0;
    let mut dirs = Vec::with_capacity((RAY_GRID * RAY_GRID) as usize);
    for j in 0..RAY_GRID {
        for i in 0..RAY_GRID {
            let dx = (i as f32 - half) / half;
            let dz = (j as f32 - half) / half;
            dirs.push(Vec3::new(dx, -1.0, dz));
        }
    }
    dirs
}

/// Compute timing statistics from a list of samples in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
