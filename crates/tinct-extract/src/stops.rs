//! Gradient stops from images
//!
//! Clusters an image down to a few colors and rebuilds them as a CSS
//! gradient, most dominant color first.

use image::RgbaImage;
use tinct_gradient::{ColorStop, Gradient, GradientKind, MAX_STOPS, MIN_STOPS};

use crate::error::{ExtractError, ExtractResult};
use crate::kmeans::{KmeansOptions, kmeans};
use crate::sample::{SampleOptions, sample_pixels};

/// Iteration cap for stop extraction, well below the palette cap.
pub const STOP_ITERATIONS: usize = 10;

/// Parameters for gradient extraction.
#[derive(Debug, Clone, Copy)]
pub struct StopExtractOptions {
    /// Number of stops to extract, `MIN_STOPS..=MAX_STOPS`.
    pub stops: usize,

    /// Shape of the produced gradient.
    pub kind: GradientKind,

    /// Pixel sampling controls.
    pub sample: SampleOptions,

    /// Clustering seed, forwarded to [`KmeansOptions`].
    pub seed: Option<u64>,
}

impl Default for StopExtractOptions {
    fn default() -> Self {
        Self {
            stops: 4,
            kind: GradientKind::Linear { angle: 90.0 },
            sample: SampleOptions::default(),
            seed: None,
        }
    }
}

impl StopExtractOptions {
    /// Set the stop count.
    #[must_use]
    pub fn with_stops(mut self, stops: usize) -> Self {
        self.stops = stops;
        self
    }

    /// Set the gradient shape.
    #[must_use]
    pub fn with_kind(mut self, kind: GradientKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replace the sampling controls.
    #[must_use]
    pub fn with_sample(mut self, sample: SampleOptions) -> Self {
        self.sample = sample;
        self
    }

    /// Pin the clustering seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Extract a gradient whose stops are the image's dominant colors.
///
/// Clustering runs with a short iteration cap, then every cluster
/// becomes a stop. There is no noise floor here: a requested stop
/// count of n always yields n stops. Stops are ordered by dominance
/// and pinned to evenly spread positions from 0% to 100%.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidParameters`] if `stops` is outside
/// `MIN_STOPS..=MAX_STOPS`, or if the image has fewer usable pixels
/// than requested stops.
pub fn extract_gradient(
    image: &RgbaImage,
    options: &StopExtractOptions,
) -> ExtractResult<Gradient> {
    if !(MIN_STOPS..=MAX_STOPS).contains(&options.stops) {
        return Err(ExtractError::InvalidParameters(format!(
            "stop count must be between {MIN_STOPS} and {MAX_STOPS}, got {}",
            options.stops
        )));
    }

    let pixels = sample_pixels(image, &options.sample);
    if pixels.len() < options.stops {
        return Err(ExtractError::InvalidParameters(format!(
            "image yields {} usable pixels, need at least {}",
            pixels.len(),
            options.stops
        )));
    }

    let mut clusters = kmeans(
        &pixels,
        &KmeansOptions {
            k: options.stops,
            max_iterations: STOP_ITERATIONS,
            seed: options.seed,
        },
    )?;
    clusters.sort_by(|a, b| b.share.total_cmp(&a.share));

    let span = (clusters.len() - 1) as f64;
    let stops = clusters
        .iter()
        .enumerate()
        .map(|(i, cluster)| ColorStop::new(cluster.centroid, i as f64 * 100.0 / span))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Gradient::new(options.kind, stops)?)
}
