//! Random colors and gradients
//!
//! Every function takes `seed: Option<u64>`. `None` seeds from system
//! entropy, which is what interactive callers want; `Some` pins the
//! whole stream so tests and replays get identical output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tinct_core::Rgb;

use crate::error::GradientResult;
use crate::gradient::{Gradient, GradientKind, RadialShape};
use crate::stop::ColorStop;

/// Deterministic RNG for `Some`, entropy-seeded otherwise.
fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// A uniformly random color.
pub fn random_color(seed: Option<u64>) -> Rgb {
    let mut rng = rng_from_seed(seed);
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// A random gradient.
///
/// Picks one of the three kinds with random geometry, then 2 to 4
/// random colors at evenly spread positions, so the result always
/// spans the full 0..100 axis.
pub fn random_gradient(seed: Option<u64>) -> GradientResult<Gradient> {
    let mut rng = rng_from_seed(seed);

    let kind = match rng.random_range(0..3) {
        0 => GradientKind::Linear {
            angle: rng.random_range(0..360) as f64,
        },
        1 => GradientKind::Radial {
            shape: if rng.random_bool(0.5) {
                RadialShape::Circle
            } else {
                RadialShape::Ellipse
            },
            at: (
                rng.random_range(0..=100) as f64,
                rng.random_range(0..=100) as f64,
            ),
        },
        _ => GradientKind::Conic {
            from: rng.random_range(0..360) as f64,
            at: (
                rng.random_range(0..=100) as f64,
                rng.random_range(0..=100) as f64,
            ),
        },
    };

    let count: usize = rng.random_range(2..=4);
    let span = (count - 1) as f64;
    let mut stops = Vec::with_capacity(count);
    for i in 0..count {
        let color = Rgb::new(rng.random(), rng.random(), rng.random());
        stops.push(ColorStop::new(color, i as f64 * 100.0 / span)?);
    }

    Gradient::new(kind, stops)
}
