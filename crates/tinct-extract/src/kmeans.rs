//! K-means color clustering
//!
//! Reduces a sampled pixel set to a handful of representative colors
//! using plain Lloyd iteration over RGB space:
//! 1. **Seed**: pick k random sampled pixels as starting centroids
//! 2. **Assign**: move every pixel to its nearest centroid by squared
//!    Euclidean RGB distance
//! 3. **Update**: recompute each centroid as the mean of its members
//!
//! Assignment and update repeat until no centroid moves by more than
//! the convergence distance, or the iteration cap is hit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tinct_core::Rgb;

use crate::error::{ExtractError, ExtractResult};

// =============================================================================
// Constants
// =============================================================================

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Centroid movement (Euclidean RGB distance) at or below which the
/// loop stops early.
pub const CONVERGENCE_DISTANCE: f64 = 1.0;

// =============================================================================
// Options and results
// =============================================================================

/// Parameters for a clustering run.
#[derive(Debug, Clone, Copy)]
pub struct KmeansOptions {
    /// Number of clusters to produce. Capped to the pixel count.
    pub k: usize,

    /// Iteration cap. Most runs converge well before it.
    pub max_iterations: usize,

    /// RNG seed for centroid initialization. `None` draws system
    /// entropy, `Some` makes the run reproducible.
    pub seed: Option<u64>,
}

impl Default for KmeansOptions {
    fn default() -> Self {
        Self {
            k: 5,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl KmeansOptions {
    /// Set the cluster count.
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Pin the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One cluster of the result: a representative color and how much of
/// the sample it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    /// Channel-wise mean of the member pixels.
    pub centroid: Rgb,
    /// Number of member pixels.
    pub count: usize,
    /// Percentage of the sample in this cluster, `0.0..=100.0`.
    pub share: f64,
}

// =============================================================================
// Main API
// =============================================================================

/// Cluster `pixels` into at most `options.k` colors.
///
/// Returns one [`Cluster`] per centroid, in centroid order. Shares sum
/// to 100 across the result. A cluster that attracted no pixels keeps
/// the centroid it was seeded with and reports a zero count.
///
/// An empty pixel slice produces an empty Vec.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidParameters`] if `k` is zero.
pub fn kmeans(pixels: &[Rgb], options: &KmeansOptions) -> ExtractResult<Vec<Cluster>> {
    if options.k == 0 {
        return Err(ExtractError::InvalidParameters(
            "k must be at least 1".into(),
        ));
    }
    if pixels.is_empty() {
        return Ok(Vec::new());
    }

    let k = options.k.min(pixels.len());
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut centroids: Vec<[f64; 3]> = (0..k)
        .map(|_| to_point(pixels[rng.random_range(0..pixels.len())]))
        .collect();

    let mut assignment = vec![0usize; pixels.len()];
    for _ in 0..options.max_iterations {
        assign_pixels(pixels, &centroids, &mut assignment);

        let (sums, counts) = accumulate(pixels, &assignment, k);

        // An empty cluster keeps its previous centroid
        let mut moved: f64 = 0.0;
        for i in 0..k {
            if counts[i] == 0 {
                continue;
            }
            let n = counts[i] as f64;
            let next = [sums[i][0] / n, sums[i][1] / n, sums[i][2] / n];
            moved = moved.max(distance(centroids[i], next));
            centroids[i] = next;
        }
        if moved <= CONVERGENCE_DISTANCE {
            break;
        }
    }

    // Counts are reported against the final centroid positions
    assign_pixels(pixels, &centroids, &mut assignment);
    let mut counts = vec![0usize; k];
    for &slot in &assignment {
        counts[slot] += 1;
    }

    let total = pixels.len() as f64;
    Ok(centroids
        .iter()
        .zip(&counts)
        .map(|(&point, &count)| Cluster {
            centroid: from_point(point),
            count,
            share: count as f64 * 100.0 / total,
        })
        .collect())
}

// =============================================================================
// Internal helpers
// =============================================================================

fn to_point(color: Rgb) -> [f64; 3] {
    [f64::from(color.r), f64::from(color.g), f64::from(color.b)]
}

fn from_point(point: [f64; 3]) -> Rgb {
    Rgb::from_f64(point[0], point[1], point[2])
}

fn squared_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Index of the nearest centroid; ties go to the lowest index.
fn nearest_centroid(centroids: &[[f64; 3]], point: [f64; 3]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &centroid) in centroids.iter().enumerate() {
        let dist = squared_distance(centroid, point);
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}

fn assign_pixels(pixels: &[Rgb], centroids: &[[f64; 3]], assignment: &mut [usize]) {
    for (slot, &pixel) in assignment.iter_mut().zip(pixels) {
        *slot = nearest_centroid(centroids, to_point(pixel));
    }
}

fn accumulate(pixels: &[Rgb], assignment: &[usize], k: usize) -> (Vec<[f64; 3]>, Vec<usize>) {
    let mut sums = vec![[0.0f64; 3]; k];
    let mut counts = vec![0usize; k];
    for (&slot, &pixel) in assignment.iter().zip(pixels) {
        let point = to_point(pixel);
        sums[slot][0] += point[0];
        sums[slot][1] += point[1];
        sums[slot][2] += point[2];
        counts[slot] += 1;
    }
    (sums, counts)
}
