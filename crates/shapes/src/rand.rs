//! Seeded shape samplers (replay tokens).
//!
//! Purpose
//! - Deterministic random circles and triangles for benches, property checks,
//!   and the `sample` CLI command. Every draw is valid by construction.
//!
//! Model
//! - Lengths are uniform in `[min_len, max_len]` after clamping into the
//!   accepted range.
//! - Triangles: two sides uniform, the third strictly inside `(|a−b|, a+b)`
//!   intersected with the length bounds.
//! - Right triangles: two legs uniform, hypotenuse `hypot(leg1, leg2)`, placed
//!   at a random position among A/B/C. Legs are capped at `max_len/√2` so the
//!   hypotenuse never exceeds `max_len`; when `max_len < √2·min_len` the legs
//!   drop below `min_len`. Right-angle detection is absolute, so draws only
//!   reliably report `is_right()` up to `RIGHT_DRAW_MAX_LEN`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::{MAX_RADIUS, MAX_SIDE_LENGTH};
use crate::error::Result;
use crate::{Circle, Triangle};

/// Largest `max_len` for which sampled right triangles keep `is_right()`
/// under the absolute `RIGHT_ANGLE_EPS`.
pub const RIGHT_DRAW_MAX_LEN: f64 = 100.0;

/// Length bounds for sampled measurements.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub min_len: f64,
    pub max_len: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            min_len: 0.1,
            max_len: 10.0,
        }
    }
}

impl SampleCfg {
    /// Whether right-triangle draws under these bounds still pass the
    /// right-angle test.
    #[inline]
    pub fn right_flag_reliable(&self) -> bool {
        self.bounds(MAX_SIDE_LENGTH).1 <= RIGHT_DRAW_MAX_LEN
    }

    /// Bounds clamped into `(0, max]`, with `lo <= hi`.
    fn bounds(&self, max: f64) -> (f64, f64) {
        let lo = if self.min_len.is_finite() {
            self.min_len.clamp(1e-9, max)
        } else {
            1e-9
        };
        let hi = if self.max_len.is_finite() {
            self.max_len.clamp(lo, max)
        } else {
            max
        };
        (lo, hi.max(lo))
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

/// Draw a circle with radius in the configured bounds.
pub fn draw_circle(cfg: SampleCfg, tok: ReplayToken) -> Result<Circle> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = cfg.bounds(MAX_RADIUS);
    Circle::new(uniform(&mut rng, lo, hi))
}

/// Draw a (generally scalene) triangle with sides in the configured bounds.
pub fn draw_triangle(cfg: SampleCfg, tok: ReplayToken) -> Result<Triangle> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = cfg.bounds(MAX_SIDE_LENGTH);
    let a = uniform(&mut rng, lo, hi);
    let b = uniform(&mut rng, lo, hi);
    // Open interval (|a-b|, a+b), shrunk by a relative margin to stay strict
    // after rounding.
    let margin = 1e-9 * (a + b);
    let c_lo = ((a - b).abs() + margin).max(lo);
    let c_hi = (a + b - margin).min(hi);
    let c = if c_hi > c_lo {
        uniform(&mut rng, c_lo, c_hi)
    } else {
        // Bounds too tight for a free third side; an isosceles pick always closes.
        a.max(b)
    };
    Triangle::new(a, b, c)
}

/// Draw a right triangle; the hypotenuse lands at a random position.
pub fn draw_right_triangle(cfg: SampleCfg, tok: ReplayToken) -> Result<Triangle> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = cfg.bounds(MAX_SIDE_LENGTH);
    // hypot(leg_hi, leg_hi) <= hi, with slack for rounding in `hypot`.
    let leg_hi = hi * (1.0 - 1e-12) / std::f64::consts::SQRT_2;
    let leg_lo = lo.min(leg_hi);
    let l1 = uniform(&mut rng, leg_lo, leg_hi);
    let l2 = uniform(&mut rng, leg_lo, leg_hi);
    let h = l1.hypot(l2);
    match rng.gen_range(0..3u8) {
        0 => Triangle::new(h, l1, l2),
        1 => Triangle::new(l1, h, l2),
        _ => Triangle::new(l1, l2, h),
    }
}
