use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::clusterer::{
    centroid::compute_centroid,
    distance::squared_euclidean,
    types::{ClusterFit, KMeansModel},
    ClusterError,
};

/// Fit K-Means with k-means++ seeding and multiple restarts.
///
/// Each restart seeds its own RNG from `seed + restart`, so identical inputs
/// always yield identical centroids and labels. The restart with the lowest
/// inertia wins; ties keep the earlier restart.
pub fn kmeans(
    points: &[Vec<f64>],
    k: usize,
    max_iter: usize,
    n_init: usize,
    seed: u64,
) -> Result<ClusterFit, ClusterError> {
    if k == 0 {
        return Err(ClusterError::ZeroClusters);
    }
    if points.is_empty() || points[0].is_empty() {
        return Err(ClusterError::EmptyMatrix);
    }
    if points.len() < k {
        return Err(ClusterError::TooFewSamples {
            n_samples: points.len(),
            n_clusters: k,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut best = lloyd(points, k, max_iter, &mut rng);

    for run in 1..n_init.max(1) as u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(run));
        let fit = lloyd(points, k, max_iter, &mut rng);
        if fit.model.inertia < best.model.inertia {
            best = fit;
        }
    }

    Ok(best)
}

/// One Lloyd run from a k-means++ initialization.
fn lloyd(points: &[Vec<f64>], k: usize, max_iter: usize, rng: &mut ChaCha8Rng) -> ClusterFit {
    let n = points.len();
    let mut centroids = init_kmeans_pp(points, k, rng);

    // usize::MAX marks "not yet assigned" so the first pass always counts
    // as a change and the centroids get at least one update
    let mut assignments = vec![usize::MAX; n];
    let mut iterations = 0;

    for _ in 0..max_iter {
        iterations += 1;

        // 1. Assign each point to its nearest centroid
        let mut changed = false;
        for i in 0..n {
            let best = nearest(&points[i], &centroids);
            if assignments[i] != best {
                changed = true;
                assignments[i] = best;
            }
        }

        if !changed {
            break; // converged
        }

        // 2. Recompute centroids; an emptied cluster keeps its old centroid
        for c in 0..k {
            let members: Vec<&[f64]> = points
                .iter()
                .zip(assignments.iter())
                .filter(|&(_, a)| *a == c)
                .map(|(p, _)| &p[..])
                .collect();

            if !members.is_empty() {
                centroids[c] = compute_centroid(&members);
            }
        }
    }

    let inertia = points
        .iter()
        .zip(assignments.iter())
        .map(|(point, &label)| squared_euclidean(point, &centroids[label]))
        .sum();

    ClusterFit {
        model: KMeansModel {
            k,
            centroids,
            inertia,
        },
        labels: assignments,
        iterations,
    }
}

/// k-means++ seeding: the first center is uniform, later centers are drawn
/// with probability proportional to the squared distance to the nearest
/// already-chosen center.
fn init_kmeans_pp(points: &[Vec<f64>], k: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..n)].clone());

    let mut dist_sq = vec![0.0f64; n];
    while centroids.len() < k {
        let mut total = 0.0;
        for (i, point) in points.iter().enumerate() {
            let closest = centroids
                .iter()
                .map(|centroid| squared_euclidean(point, centroid))
                .fold(f64::INFINITY, f64::min);
            dist_sq[i] = closest;
            total += closest;
        }

        let next = if total > 0.0 {
            let target = rng.gen::<f64>() * total;
            let mut cumulative = 0.0;
            let mut chosen = n - 1;
            for (i, &d) in dist_sq.iter().enumerate() {
                cumulative += d;
                if cumulative >= target {
                    chosen = i;
                    break;
                }
            }
            chosen
        } else {
            // every remaining point coincides with a chosen center
            rng.gen_range(0..n)
        };
        centroids.push(points[next].clone());
    }

    centroids
}

fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, centroid) in centroids.iter().enumerate() {
        let dist = squared_euclidean(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = idx;
        }
    }
    best
}
