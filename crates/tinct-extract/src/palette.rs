//! Dominant-color palettes
//!
//! Ties the pipeline together for the common case: decode somewhere
//! upstream, sample here, cluster, drop the noise, sort.

use image::RgbaImage;

use crate::error::{ExtractError, ExtractResult};
use crate::kmeans::{Cluster, DEFAULT_MAX_ITERATIONS, KmeansOptions, kmeans};
use crate::sample::{SampleOptions, sample_pixels};

/// Largest palette a caller can request.
pub const MAX_PALETTE_COLORS: usize = 16;

/// Clusters covering less than this share of the sample are dropped
/// as noise.
pub const NOISE_FLOOR_SHARE: f64 = 0.5;

/// Palette ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most dominant first (share descending).
    Dominance,
    /// Around the wheel (HSL hue ascending).
    Hue,
    /// Lightest first (luma descending).
    Brightness,
}

/// Parameters for palette extraction.
#[derive(Debug, Clone, Copy)]
pub struct PaletteOptions {
    /// Number of colors to extract, `1..=MAX_PALETTE_COLORS`.
    pub colors: usize,

    /// Ordering of the returned palette.
    pub sort: SortKey,

    /// Pixel sampling controls.
    pub sample: SampleOptions,

    /// Clustering seed, forwarded to [`KmeansOptions`].
    pub seed: Option<u64>,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            colors: 5,
            sort: SortKey::Dominance,
            sample: SampleOptions::default(),
            seed: None,
        }
    }
}

impl PaletteOptions {
    /// Set the palette size.
    #[must_use]
    pub fn with_colors(mut self, colors: usize) -> Self {
        self.colors = colors;
        self
    }

    /// Set the palette ordering.
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
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

/// Extract a dominant-color palette from an image.
///
/// Sampling excludes transparent pixels, clustering runs to the
/// default iteration cap, and clusters under [`NOISE_FLOOR_SHARE`] are
/// dropped afterwards. The result can therefore hold fewer colors than
/// requested. It is empty when the image has no opaque pixels.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidParameters`] if `colors` is zero or
/// above [`MAX_PALETTE_COLORS`].
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use tinct_extract::{PaletteOptions, extract_palette};
///
/// let img = RgbaImage::from_pixel(8, 8, Rgba([255, 87, 51, 255]));
/// let palette = extract_palette(&img, &PaletteOptions::default().with_seed(7))?;
/// assert_eq!(palette[0].centroid.to_hex(), "#FF5733");
/// # Ok::<(), tinct_extract::ExtractError>(())
/// ```
pub fn extract_palette(
    image: &RgbaImage,
    options: &PaletteOptions,
) -> ExtractResult<Vec<Cluster>> {
    if options.colors == 0 || options.colors > MAX_PALETTE_COLORS {
        return Err(ExtractError::InvalidParameters(format!(
            "palette size must be between 1 and {MAX_PALETTE_COLORS}, got {}",
            options.colors
        )));
    }

    let pixels = sample_pixels(image, &options.sample);
    let clusters = kmeans(
        &pixels,
        &KmeansOptions {
            k: options.colors,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: options.seed,
        },
    )?;

    let mut palette: Vec<Cluster> = clusters
        .into_iter()
        .filter(|cluster| cluster.share >= NOISE_FLOOR_SHARE)
        .collect();
    sort_clusters(&mut palette, options.sort);
    Ok(palette)
}

fn sort_clusters(clusters: &mut [Cluster], key: SortKey) {
    match key {
        SortKey::Dominance => clusters.sort_by(|a, b| b.share.total_cmp(&a.share)),
        SortKey::Hue => clusters.sort_by(|a, b| {
            a.centroid
                .to_hsl()
                .h
                .total_cmp(&b.centroid.to_hsl().h)
        }),
        SortKey::Brightness => {
            clusters.sort_by(|a, b| b.centroid.luma().total_cmp(&a.centroid.luma()));
        }
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tinct_core::Rgb;

    use super::*;

    /// 10x10 image, left 3 columns gold, the rest navy.
    fn two_tone_image() -> RgbaImage {
        RgbaImage::from_fn(10, 10, |x, _| {
            if x < 3 {
                Rgba([255, 215, 0, 255])
            } else {
                Rgba([0, 0, 128, 255])
            }
        })
    }

    #[test]
    fn test_two_tone_palette_by_dominance() {
        let options = PaletteOptions::default().with_colors(2).with_seed(5);
        let palette = extract_palette(&two_tone_image(), &options).unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette[0].centroid, Rgb::new(0, 0, 128));
        assert_eq!(palette[0].share, 70.0);
        assert_eq!(palette[1].centroid, Rgb::new(255, 215, 0));
        assert_eq!(palette[1].share, 30.0);
    }

    #[test]
    fn test_sort_keys_reorder_the_same_colors() {
        let base = PaletteOptions::default().with_colors(2).with_seed(5);

        // Gold: hue 50.6, luma 202.4. Navy: hue 240, luma 14.6.
        let by_hue = extract_palette(&two_tone_image(), &base.with_sort(SortKey::Hue)).unwrap();
        assert_eq!(by_hue[0].centroid, Rgb::new(255, 215, 0));
        assert_eq!(by_hue[1].centroid, Rgb::new(0, 0, 128));

        let by_brightness =
            extract_palette(&two_tone_image(), &base.with_sort(SortKey::Brightness)).unwrap();
        assert_eq!(by_brightness[0].centroid, Rgb::new(255, 215, 0));
        assert_eq!(by_brightness[1].centroid, Rgb::new(0, 0, 128));
    }

    #[test]
    fn test_noise_floor_drops_empty_clusters() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([30, 60, 90, 255]));
        let options = PaletteOptions::default().with_colors(5).with_seed(2);
        let palette = extract_palette(&img, &options).unwrap();

        // One real cluster; the rest are duplicates of it with no members
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].centroid, Rgb::new(30, 60, 90));
        assert_eq!(palette[0].share, 100.0);
    }

    #[test]
    fn test_transparent_image_yields_empty_palette() {
        let img = RgbaImage::from_pixel(6, 6, Rgba([255, 0, 0, 0]));
        let palette = extract_palette(&img, &PaletteOptions::default()).unwrap();
        assert!(palette.is_empty());
    }

    #[test]
    fn test_color_count_is_validated() {
        let img = two_tone_image();
        for colors in [0, MAX_PALETTE_COLORS + 1] {
            let result = extract_palette(&img, &PaletteOptions::default().with_colors(colors));
            assert!(matches!(result, Err(ExtractError::InvalidParameters(_))));
        }
    }

    #[test]
    fn test_same_seed_same_palette() {
        let options = PaletteOptions::default().with_colors(3).with_seed(77);
        let a = extract_palette(&two_tone_image(), &options).unwrap();
        let b = extract_palette(&two_tone_image(), &options).unwrap();
        assert_eq!(a, b);
    }
}
