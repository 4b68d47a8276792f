use std::path::Path;

use crate::runner::BenchmarkResult;

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub label: String,
    pub results: Vec<BenchmarkResult>,
}

/// A scene whose timing grew past the regression threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Regression {
    pub scene_name: String,
    /// Which series regressed: "mesh" or "raycast".
    pub series: &'static str,
    pub pct_change: f64,
}

/// Load a baseline from a JSON file. Returns None if the file is missing or malformed.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(baseline) => Some(baseline),
        Err(e) => {
            log::warn!("Ignoring malformed baseline {}: {e}", path.display());
            None
        }
    }
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

fn pct_change(current: f64, base: f64) -> Option<f64> {
    (base > 0.0).then(|| (current - base) / base * 100.0)
}

/// Compare mean mesh and raycast times against a baseline. Scenes missing
/// from the baseline are skipped.
pub fn compare(
    current: &[BenchmarkResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<Regression> {
    let mut regressions = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name)
        else {
            continue;
        };

        let series = [
            ("mesh", result.mesh_timings.mean_ms, base.mesh_timings.mean_ms),
            (
                "raycast",
                result.raycast_timings.mean_ms,
                base.raycast_timings.mean_ms,
            ),
        ];
        for (name, now, before) in series {
            if let Some(pct) = pct_change(now, before) {
                if pct > threshold_pct {
                    regressions.push(Regression {
                        scene_name: result.scene_name.clone(),
                        series: name,
                        pct_change: pct,
                    });
                }
            }
        }
    }

    regressions
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Voxels | Chunks | Triangles | Mesh mean (ms) | Mesh P95 (ms) | Mesh max (ms) | Rays mean (ms) | Rays P95 (ms) | Hits |\n");
    out.push_str("|-------|--------|--------|-----------|----------------|---------------|---------------|----------------|---------------|------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {:.2} | {:.2} | {:.2} | {:.3} | {:.3} | {} |\n",
            r.scene_name,
            r.solid_voxels,
            r.chunk_count,
            r.triangle_count,
            r.mesh_timings.mean_ms,
            r.mesh_timings.p95_ms,
            r.mesh_timings.max_ms,
            r.raycast_timings.mean_ms,
            r.raycast_timings.p95_ms,
            r.ray_hits,
        ));
    }

    out
}

/// Format a comparison report showing regressions.
pub fn format_comparison(regressions: &[Regression], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "All scenes within {:.0}% threshold. No regressions detected.\n",
            threshold_pct
        );
    }

    let mut out = String::new();
    out.push_str(&format!(
        "REGRESSIONS DETECTED (>{:.0}% threshold):\n",
        threshold_pct
    ));
    for r in regressions {
        out.push_str(&format!(
            "  - {} ({}): +{:.1}%\n",
            r.scene_name, r.series, r.pct_change
        ));
    }
    out
}
