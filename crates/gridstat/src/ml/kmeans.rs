//! K-means clustering, exposed as a predictor that returns cluster
//! assignments instead of a regression target.

use crate::error::{GridstatError, Result};

/// Fixed RNG seed so repeated training runs pick identical initial centroids.
const INIT_SEED: u64 = 0x6b6d_6561;

/// Maximum Lloyd iterations before giving up on convergence.
const MAX_ITERATIONS: usize = 100;

/// A fitted k-means model.
#[derive(Debug, Clone)]
pub struct KMeansModel {
    pub centroids: Vec<Vec<f64>>,
}

impl KMeansModel {
    /// Fit `n_clusters` centroids with Lloyd's algorithm. Initial centroids
    /// are sampled (seeded, without replacement) from the rows.
    pub fn fit(x: &[Vec<f64>], n_clusters: usize) -> Result<Self> {
        if x.is_empty() {
            return Err(GridstatError::Validation(
                "K-means requires a non-empty feature matrix".to_string(),
            ));
        }
        if n_clusters == 0 || n_clusters > x.len() {
            return Err(GridstatError::Validation(format!(
                "n_clusters must be in 1..={}, got {}",
                x.len(),
                n_clusters
            )));
        }

        let mut rng = fastrand::Rng::with_seed(INIT_SEED);
        let mut picked: Vec<usize> = Vec::with_capacity(n_clusters);
        while picked.len() < n_clusters {
            let candidate = rng.usize(0..x.len());
            if !picked.contains(&candidate) {
                picked.push(candidate);
            }
        }
        let mut centroids: Vec<Vec<f64>> = picked.iter().map(|&i| x[i].clone()).collect();

        let mut assignments = vec![0usize; x.len()];

        for _ in 0..MAX_ITERATIONS {
            let mut changed = false;
            for (row_idx, row) in x.iter().enumerate() {
                let nearest = nearest_centroid(row, &centroids);
                if assignments[row_idx] != nearest {
                    assignments[row_idx] = nearest;
                    changed = true;
                }
            }

            for (cluster, centroid) in centroids.iter_mut().enumerate() {
                let members: Vec<&Vec<f64>> = x
                    .iter()
                    .zip(&assignments)
                    .filter(|(_, &a)| a == cluster)
                    .map(|(row, _)| row)
                    .collect();
                // An emptied cluster keeps its previous centroid.
                if members.is_empty() {
                    continue;
                }
                for (dim, value) in centroid.iter_mut().enumerate() {
                    *value = members.iter().map(|m| m[dim]).sum::<f64>() / members.len() as f64;
                }
            }

            if !changed {
                break;
            }
        }

        Ok(Self { centroids })
    }

    /// Index of the nearest centroid, as a float to match the common
    /// predictor signature.
    pub fn predict(&self, row: &[f64]) -> f64 {
        nearest_centroid(row, &self.centroids) as f64
    }

    pub fn cluster_count(&self) -> usize {
        self.centroids.len()
    }
}

fn nearest_centroid(row: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance: f64 = centroid
            .iter()
            .enumerate()
            .map(|(dim, c)| {
                let v = row.get(dim).copied().unwrap_or(0.0);
                (v - c) * (v - c)
            })
            .sum();
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}
