use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::CoreError;

/// Scale threshold below which single-precision shader registers run out
/// of mantissa and values must be handed over as compensated pairs.
pub const EXTENDED_PRECISION_THRESHOLD: f64 = 1e-4;

/// Which representation the shader receives for precision-sensitive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecisionMode {
    /// One plain `f32` per value.
    Single,
    /// A compensated `(high, low)` pair per value.
    Extended,
}

/// The visible region of the fractal plane.
///
/// Centred on `center`, with `scale` giving plane units per viewport
/// half-extent: the viewport spans `center ± scale` along each axis.
/// Both components stay in full double precision here; the precision mode
/// decides how they cross into the shader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalView {
    /// Center of the view in the fractal plane.
    pub center: Coordinate,

    /// Plane units per viewport half-extent.
    pub scale: f64,
}

impl FractalView {
    /// Default view: the full Mandelbrot set comfortably in frame.
    pub fn default_mandelbrot() -> Self {
        Self {
            center: Coordinate::new(-0.75, 0.0),
            scale: 1.25,
        }
    }

    /// Create a view with explicit parameters.
    pub fn new(center: Coordinate, scale: f64) -> crate::Result<Self> {
        if scale <= 0.0 || !scale.is_finite() {
            return Err(CoreError::InvalidScale(scale));
        }
        Ok(Self { center, scale })
    }

    /// The view shifted by a drag expressed in viewport units.
    ///
    /// Dragging the viewport content rightward moves the visible region
    /// leftward, so the shift is subtracted after mapping through the
    /// current scale.
    #[inline]
    pub fn panned(&self, drag: Coordinate) -> Self {
        Self {
            center: self.center - drag * self.scale,
            scale: self.scale,
        }
    }

    /// Zoom in one step: divide the scale by `speed`.
    pub fn zoomed_in(&self, speed: f64) -> crate::Result<Self> {
        Self::validate_zoom_speed(speed)?;
        Ok(Self {
            center: self.center,
            scale: self.scale / speed,
        })
    }

    /// Zoom out one step: multiply the scale by `speed`.
    pub fn zoomed_out(&self, speed: f64) -> crate::Result<Self> {
        Self::validate_zoom_speed(speed)?;
        Ok(Self {
            center: self.center,
            scale: self.scale * speed,
        })
    }

    fn validate_zoom_speed(speed: f64) -> crate::Result<()> {
        if !speed.is_finite() || speed <= 1.0 {
            return Err(CoreError::InvalidZoomSpeed(speed));
        }
        Ok(())
    }

    /// The representation precision-sensitive values need at this zoom.
    ///
    /// Past the threshold a plain `f32` no longer resolves adjacent
    /// viewport positions and the shader must receive compensated pairs.
    #[inline]
    pub fn precision_mode(&self) -> PrecisionMode {
        if self.scale < EXTENDED_PRECISION_THRESHOLD {
            PrecisionMode::Extended
        } else {
            PrecisionMode::Single
        }
    }
}

impl Default for FractalView {
    fn default() -> Self {
        Self::default_mandelbrot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn default_view() {
        let v = FractalView::default_mandelbrot();
        assert!((v.center.x - (-0.75)).abs() < EPSILON);
        assert!((v.center.y).abs() < EPSILON);
        assert!((v.scale - 1.25).abs() < EPSILON);
    }

    #[test]
    fn invalid_scale() {
        assert!(FractalView::new(Coordinate::ZERO, 0.0).is_err());
        assert!(FractalView::new(Coordinate::ZERO, -1.0).is_err());
        assert!(FractalView::new(Coordinate::ZERO, f64::NAN).is_err());
        assert!(FractalView::new(Coordinate::ZERO, f64::INFINITY).is_err());
    }

    #[test]
    fn pan_maps_drag_through_scale() {
        let v = FractalView::new(Coordinate::ZERO, 0.5).unwrap();
        let panned = v.panned(Coordinate::new(1.0, -2.0));
        assert!((panned.center.x - (-0.5)).abs() < EPSILON);
        assert!((panned.center.y - 1.0).abs() < EPSILON);
        assert!((panned.scale - v.scale).abs() < EPSILON);
    }

    #[test]
    fn zoom_in_out_are_inverse() {
        let v = FractalView::default_mandelbrot();
        let back = v.zoomed_in(2.0).unwrap().zoomed_out(2.0).unwrap();
        assert!((back.scale - v.scale).abs() < EPSILON);
        assert_eq!(back.center, v.center);
    }

    #[test]
    fn zoom_keeps_center() {
        let v = FractalView::new(Coordinate::new(0.25, -0.1), 1.0).unwrap();
        let zoomed = v.zoomed_in(4.0).unwrap();
        assert_eq!(zoomed.center, v.center);
        assert!((zoomed.scale - 0.25).abs() < EPSILON);
    }

    #[test]
    fn invalid_zoom_speed() {
        let v = FractalView::default_mandelbrot();
        assert!(v.zoomed_in(1.0).is_err());
        assert!(v.zoomed_in(0.5).is_err());
        assert!(v.zoomed_in(f64::NAN).is_err());
        assert!(v.zoomed_out(f64::INFINITY).is_err());
    }

    #[test]
    fn precision_mode_flips_at_threshold() {
        let wide = FractalView::new(Coordinate::ZERO, 1.25).unwrap();
        assert_eq!(wide.precision_mode(), PrecisionMode::Single);

        let at = FractalView::new(Coordinate::ZERO, EXTENDED_PRECISION_THRESHOLD).unwrap();
        assert_eq!(at.precision_mode(), PrecisionMode::Single);

        let deep = FractalView::new(Coordinate::ZERO, EXTENDED_PRECISION_THRESHOLD / 2.0).unwrap();
        assert_eq!(deep.precision_mode(), PrecisionMode::Extended);
    }

    #[test]
    fn repeated_zoom_reaches_extended_mode() {
        let mut v = FractalView::default_mandelbrot();
        for _ in 0..20 {
            v = v.zoomed_in(2.0).unwrap();
        }
        // 1.25 / 2^20 ≈ 1.2e-6, well past the threshold.
        assert_eq!(v.precision_mode(), PrecisionMode::Extended);
    }

    #[test]
    fn serde_roundtrip() {
        let v = FractalView::new(Coordinate::new(-0.743, 0.131), 1e-6).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: FractalView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
