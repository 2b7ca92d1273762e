//! K-means clustering helper consumed by the clustering population
//! initialiser (C4).
//!
//! No module in the teacher crate clusters points (it is a flat TSP
//! solver); this is grounded on the broader corpus's clustering crate
//! (`coupe::KMeans`, a `Default`-constructible settings struct driving
//! repeated centroid assignment/update until convergence or an iteration
//! cap) and on `examples/original_source/backend_server/routing/routing4.py`'s
//! commented-out `sklearn.cluster.KMeans`-based initialiser, which this
//! module's `stride_redistribute` mirrors.

use crate::coordinate::Coordinate;
use ordered_float::OrderedFloat;
use rand::Rng;

/// Tie-break and convergence settings for [`kmeans`].
#[derive(Debug, Clone, Copy)]
pub struct KMeansSettings {
    pub max_iterations: usize,
    /// Centroid drift below which the algorithm is considered converged.
    pub tolerance: f64,
}

impl Default for KMeansSettings {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Runs K-means over `points`, returning a cluster label `0..k` per point.
///
/// Centroids are seeded by sampling `k` distinct points uniformly via
/// `rng` (fixed-seed reproducibility is the caller's responsibility — pass
/// a seeded RNG). If the algorithm does not converge within
/// `settings.max_iterations`, the last assignment is returned rather than
/// erroring: K-means is a seeding heuristic here, not a correctness
/// requirement.
pub fn kmeans<R: Rng + ?Sized>(
    points: &[Coordinate],
    k: usize,
    settings: KMeansSettings,
    rng: &mut R,
) -> Vec<usize> {
    assert!(k >= 1, "k-means requires at least one cluster");
    assert!(!points.is_empty(), "k-means requires at least one point");

    let k = k.min(points.len());
    let mut centroids = seed_centroids(points, k, rng);
    let mut labels = vec![0usize; points.len()];

    for _ in 0..settings.max_iterations {
        for (i, point) in points.iter().enumerate() {
            labels[i] = nearest_centroid(point, &centroids);
        }

        let new_centroids = update_centroids(points, &labels, k, &centroids);
        let drift: f64 = centroids
            .iter()
            .zip(new_centroids.iter())
            .map(|(old, new)| old.distance_to(new))
            .sum();
        centroids = new_centroids;
        if drift < settings.tolerance {
            break;
        }
    }

    labels
}

fn seed_centroids<R: Rng + ?Sized>(points: &[Coordinate], k: usize, rng: &mut R) -> Vec<Coordinate> {
    let mut indices: Vec<usize> = (0..points.len()).collect();
    for i in (1..indices.len()).rev() {
        let j = rng.gen_range(0..=i);
        indices.swap(i, j);
    }
    indices.into_iter().take(k).map(|i| points[i]).collect()
}

fn nearest_centroid(point: &Coordinate, centroids: &[Coordinate]) -> usize {
    centroids
        .iter()
        .enumerate()
        .min_by_key(|(_, centroid)| OrderedFloat(point.distance_to(centroid)))
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

fn update_centroids(
    points: &[Coordinate],
    labels: &[usize],
    k: usize,
    fallback: &[Coordinate],
) -> Vec<Coordinate> {
    let mut sums = vec![(0.0, 0.0, 0usize); k];
    for (point, &label) in points.iter().zip(labels.iter()) {
        let entry = &mut sums[label];
        entry.0 += point.latitude;
        entry.1 += point.longitude;
        entry.2 += 1;
    }
    sums.into_iter()
        .enumerate()
        .map(|(idx, (lat_sum, lon_sum, count))| {
            if count == 0 {
                fallback[idx]
            } else {
                Coordinate::new(lat_sum / count as f64, lon_sum / count as f64)
            }
        })
        .collect()
}

/// Redistributes a single cluster's (already-shuffled) member list round-robin
/// across `k` parts: `cluster[j::k]` goes to part `j`. Mirrors the prototype's
/// stride-style redistribution (spec.md §4.4), which breaks the otherwise
/// rigid "cluster j = part j" mapping and keeps seeded individuals varied
/// across the initial population.
pub fn stride_redistribute(cluster: &[usize], k: usize) -> Vec<Vec<usize>> {
    let mut parts = vec![Vec::new(); k];
    for (i, &member) in cluster.iter().enumerate() {
        parts[i % k].push(member);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn separates_obvious_clusters() {
        let points = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.1, 0.0),
            Coordinate::new(10.0, 0.0),
            Coordinate::new(10.1, 0.0),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let labels = kmeans(&points, 2, KMeansSettings::default(), &mut rng);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn k_larger_than_points_is_clamped() {
        let points = vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)];
        let mut rng = StdRng::seed_from_u64(2);
        let labels = kmeans(&points, 5, KMeansSettings::default(), &mut rng);
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn stride_redistribute_deals_round_robin() {
        let cluster = vec![10, 11, 12, 13, 14];
        let parts = stride_redistribute(&cluster, 2);
        assert_eq!(parts, vec![vec![10, 12, 14], vec![11, 13]]);
    }

    #[test]
    fn stride_redistribute_preserves_all_members() {
        let cluster = vec![1, 2, 3, 4, 5, 6, 7];
        let parts = stride_redistribute(&cluster, 3);
        let mut flattened: Vec<usize> = parts.into_iter().flatten().collect();
        flattened.sort_unstable();
        assert_eq!(flattened, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
