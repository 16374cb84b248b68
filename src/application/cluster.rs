//! Behavioral clustering over the retained observation window.
//!
//! A stateless batch pass: every qualifying tick it standardizes the full
//! window and re-runs k-means from scratch. Nothing is carried between
//! invocations, so assignments always reflect the current window only.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::domain::{Metric, TrendStore};

/// Parameters for the clustering pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterParams {
    /// Number of clusters to partition into
    pub k: usize,
    /// Minimum retained ticks before clustering activates
    pub min_history: usize,
    /// Iteration cap for the assignment loop
    pub max_iterations: usize,
    /// Seed for centroid initialization; fixed seed ⇒ identical assignments
    pub seed: u64,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            k: 3,
            min_history: 15,
            max_iterations: 100,
            seed: 42,
        }
    }
}

/// Assign every retained observation to a behavioral cluster.
///
/// Returns one label in `[0, k)` per retained tick, oldest first, or an
/// empty vector while the window is too short to cluster — insufficient
/// data is a display state, not an error.
#[must_use]
pub fn cluster_assignments(store: &TrendStore, params: &ClusterParams) -> Vec<usize> {
    let rows = store.vital_rows();
    if params.k == 0 || rows.len() < params.min_history || rows.len() < params.k {
        return Vec::new();
    }

    let points = standardize(&rows);
    kmeans(&points, params)
}

/// How many observations landed in each cluster.
#[must_use]
pub fn cluster_sizes(assignments: &[usize], k: usize) -> Vec<usize> {
    let mut sizes = vec![0; k];
    for &label in assignments {
        sizes[label] += 1;
    }
    sizes
}

/// Z-score each metric channel across the window. Zero-variance channels
/// map to 0 so they cannot dominate the distance metric.
fn standardize(rows: &[[f64; Metric::COUNT]]) -> Vec<[f64; Metric::COUNT]> {
    let n = rows.len() as f64;
    let mut out = rows.to_vec();

    for c in 0..Metric::COUNT {
        let mean = rows.iter().map(|row| row[c]).sum::<f64>() / n;
        let variance = rows.iter().map(|row| (row[c] - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        for row in &mut out {
            row[c] = if std > 1e-9 { (row[c] - mean) / std } else { 0.0 };
        }
    }

    out
}

fn kmeans(points: &[[f64; Metric::COUNT]], params: &ClusterParams) -> Vec<usize> {
    let mut rng = ChaCha20Rng::seed_from_u64(params.seed);

    // Initialize centroids from k distinct observations.
    let mut centroids: Vec<[f64; Metric::COUNT]> =
        rand::seq::index::sample(&mut rng, points.len(), params.k)
            .iter()
            .map(|i| points[i])
            .collect();

    let mut labels = vec![0usize; points.len()];

    for _ in 0..params.max_iterations {
        let mut changed = false;
        for (i, point) in points.iter().enumerate() {
            let nearest = nearest_centroid(point, &centroids);
            if labels[i] != nearest {
                labels[i] = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        // Recompute centroids as the mean of their assigned points; an
        // empty cluster keeps its previous centroid.
        let mut sums = vec![[0.0; Metric::COUNT]; params.k];
        let mut counts = vec![0usize; params.k];
        for (point, &label) in points.iter().zip(&labels) {
            counts[label] += 1;
            for c in 0..Metric::COUNT {
                sums[label][c] += point[c];
            }
        }
        for (cluster, count) in counts.iter().enumerate() {
            if *count > 0 {
                for c in 0..Metric::COUNT {
                    centroids[cluster][c] = sums[cluster][c] / *count as f64;
                }
            }
        }
    }

    labels
}

fn nearest_centroid(point: &[f64; Metric::COUNT], centroids: &[[f64; Metric::COUNT]]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance: f64 = point
            .iter()
            .zip(centroid)
            .map(|(a, b)| (a - b).powi(2))
            .sum();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{assess, VitalSample};
    use chrono::Utc;

    /// A store whose ticks alternate between two clearly separated regimes.
    fn bimodal_store(ticks: usize) -> TrendStore {
        let mut store = TrendStore::new(200);
        for tick in 0..ticks {
            let base = if tick % 2 == 0 { 10.0 } else { 200.0 };
            let readings: Vec<f64> = (0..Metric::COUNT)
                .map(|c| base + c as f64)
                .collect();
            let sample = VitalSample::from_slice(Utc::now(), &readings)
                .expect("Should build sample");
            let assessment = assess(&sample);
            store.append(&sample, &assessment).expect("Should append");
        }
        store
    }

    #[test]
    fn test_short_history_yields_empty_result() {
        let store = bimodal_store(14);
        let assignments = cluster_assignments(&store, &ClusterParams::default());
        assert!(assignments.is_empty());
    }

    #[test]
    fn test_one_label_per_observation_within_k() {
        let store = bimodal_store(30);
        let params = ClusterParams::default();
        let assignments = cluster_assignments(&store, &params);

        assert_eq!(assignments.len(), 30);
        assert!(assignments.iter().all(|&label| label < params.k));
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let store = bimodal_store(40);
        let params = ClusterParams::default();

        let first = cluster_assignments(&store, &params);
        let second = cluster_assignments(&store, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn test_identical_observations_share_a_label() {
        let store = bimodal_store(30);
        let params = ClusterParams {
            k: 2,
            ..ClusterParams::default()
        };
        let assignments = cluster_assignments(&store, &params);

        // Ticks within one regime are identical points, so each regime must
        // be assigned homogeneously.
        let even = assignments[0];
        let odd = assignments[1];
        for (tick, &label) in assignments.iter().enumerate() {
            assert_eq!(label, if tick % 2 == 0 { even } else { odd });
        }
    }

    #[test]
    fn test_k_larger_than_window_yields_empty_result() {
        let store = bimodal_store(16);
        let params = ClusterParams {
            k: 20,
            ..ClusterParams::default()
        };
        assert!(cluster_assignments(&store, &params).is_empty());
    }

    #[test]
    fn test_cluster_sizes_sum_to_window() {
        let store = bimodal_store(30);
        let params = ClusterParams::default();
        let assignments = cluster_assignments(&store, &params);

        let sizes = cluster_sizes(&assignments, params.k);
        assert_eq!(sizes.len(), params.k);
        assert_eq!(sizes.iter().sum::<usize>(), 30);
    }
}
