use serde::{Deserialize, Serialize};
use std::fmt;

/// A real value packaged as a single-precision pair: `high + low`.
///
/// Shader pipelines restricted to `f32` registers can emulate roughly
/// double the usable mantissa by carrying the rounding residual of a value
/// in a second component ("double-single" arithmetic). The host never
/// computes with the pair: it splits an `f64` once per precision-sensitive
/// value per frame and hands both halves to the shader-side compensated
/// evaluator.
///
/// The intended compensation invariant is `|low| ≤ ulp(high)`. It is not enforced:
/// [`split`](Self::split) always produces a conforming pair, and values
/// constructed through [`new`](Self::new) are trusted to arrive pre-split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Compensated {
    /// Coarse magnitude: the input rounded to single precision.
    pub high: f32,

    /// Residual correction: what rounding to `high` discarded.
    pub low: f32,
}

impl Compensated {
    pub const ZERO: Self = Self {
        high: 0.0,
        low: 0.0,
    };

    #[inline]
    pub fn new(high: f32, low: f32) -> Self {
        Self { high, low }
    }

    /// Decompose a double-precision value into its single-precision pair.
    ///
    /// `high` is `value` rounded to `f32`; `low` is the residual
    /// `value - high`, itself rounded to `f32`. Deterministic, and exact in
    /// the sense that [`to_f64`](Self::to_f64) recovers `value` to within
    /// the combined ~48-bit mantissa of the pair.
    ///
    /// Zero splits to `(0, 0)`. A residual too small for `f32` underflows
    /// to zero and the pair simply carries no correction. Non-finite inputs
    /// propagate per IEEE semantics (note `∞ - ∞` leaves a NaN in `low`).
    #[inline]
    pub fn split(value: f64) -> Self {
        let high = value as f32;
        let low = (value - high as f64) as f32;
        Self { high, low }
    }

    /// Recompose the pair to double precision.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.high as f64 + self.low as f64
    }
}

impl From<f64> for Compensated {
    #[inline]
    fn from(value: f64) -> Self {
        Self::split(value)
    }
}

impl fmt::Display for Compensated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+.9e} + {:+.9e})", self.high, self.low)
    }
}
