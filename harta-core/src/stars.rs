use serde::Serialize;

use crate::constants::{STAR_DELAY_MAX_S, STAR_SIZE_MIN_PX, STAR_SIZE_SPAN_PX};

/// One twinkling background dot. `x`/`y` are percentages of the page box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub delay: f64,
}

/// Fresh star field from a uniform `[0, 1)` source. Called once per mount;
/// the result is never cached or seeded.
pub fn generate_stars<R>(count: usize, mut random: R) -> Vec<Star>
where
    R: FnMut() -> f64,
{
    (0..count)
        .map(|_| Star {
            x: random() * 100.0,
            y: random() * 100.0,
            size: STAR_SIZE_MIN_PX + random() * STAR_SIZE_SPAN_PX,
            delay: random() * STAR_DELAY_MAX_S,
        })
        .collect()
}
