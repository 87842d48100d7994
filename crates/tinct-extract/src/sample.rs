//! Pixel sampling
//!
//! Clustering never looks at every pixel of a large image. The sampler
//! drops transparent pixels first, then strides over the rest so the
//! working set stays within a fixed budget.

use image::RgbaImage;
use tinct_core::Rgb;

/// Default cap on the number of sampled pixels.
pub const DEFAULT_MAX_SAMPLES: usize = 10_000;

/// Default alpha cutoff. Pixels at or below it are treated as
/// transparent and skipped.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Controls which pixels take part in clustering.
#[derive(Debug, Clone, Copy)]
pub struct SampleOptions {
    /// Upper bound on the number of sampled pixels.
    pub max_samples: usize,
    /// Pixels with alpha at or below this value are skipped.
    pub alpha_threshold: u8,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

impl SampleOptions {
    /// Set the sample budget.
    #[must_use]
    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Set the alpha cutoff.
    #[must_use]
    pub fn with_alpha_threshold(mut self, alpha_threshold: u8) -> Self {
        self.alpha_threshold = alpha_threshold;
        self
    }
}

/// Collect the clustering working set from an image.
///
/// Pixels with alpha at or below `alpha_threshold` are dropped before
/// any budgeting, so transparent regions never influence the sample.
/// If more opaque pixels remain than `max_samples`, the sampler walks
/// them at a fixed stride, which keeps the sample spread over the whole
/// image rather than clipped to its top rows.
pub fn sample_pixels(image: &RgbaImage, options: &SampleOptions) -> Vec<Rgb> {
    let opaque: Vec<Rgb> = image
        .pixels()
        .filter(|pixel| pixel.0[3] > options.alpha_threshold)
        .map(|pixel| Rgb::new(pixel.0[0], pixel.0[1], pixel.0[2]))
        .collect();

    if options.max_samples == 0 {
        return Vec::new();
    }
    if opaque.len() <= options.max_samples {
        return opaque;
    }

    let stride = opaque.len().div_ceil(options.max_samples);
    opaque.into_iter().step_by(stride).collect()
}
