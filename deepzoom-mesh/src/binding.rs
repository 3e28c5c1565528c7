use deepzoom_core::{Compensated, Coordinate, FractalView, PrecisionMode};

/// A scalar as the shader receives it.
///
/// One plain float while single precision still resolves the view, or a
/// compensated pair once the zoom has passed the precision threshold. The
/// renderer binds `Single` to a float uniform and `Extended` to a
/// two-component vector consumed by the shader-side compensated evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarUniform {
    Single(f32),
    Extended(Compensated),
}

impl ScalarUniform {
    /// Pack a value for the shader under the given precision mode.
    #[inline]
    pub fn pack(value: f64, mode: PrecisionMode) -> Self {
        match mode {
            PrecisionMode::Single => Self::Single(value as f32),
            PrecisionMode::Extended => Self::Extended(Compensated::split(value)),
        }
    }
}

/// The per-frame uniform bundle for the fractal shader.
///
/// Center point and scale, all packed under the same mode. The shader
/// variant is selected per frame, so mixing representations within one
/// frame would bind values the active variant cannot read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub center_x: ScalarUniform,
    pub center_y: ScalarUniform,
    pub scale: ScalarUniform,
}

impl FrameUniforms {
    /// Pack a view's precision-sensitive values under its own mode.
    pub fn for_view(view: &FractalView) -> Self {
        let mode = view.precision_mode();
        Self {
            center_x: ScalarUniform::pack(view.center.x, mode),
            center_y: ScalarUniform::pack(view.center.y, mode),
            scale: ScalarUniform::pack(view.scale, mode),
        }
    }
}

/// Pack a Julia seed point as the `(ka, kb)` uniform pair.
pub fn seed_uniforms(seed: Coordinate, mode: PrecisionMode) -> (ScalarUniform, ScalarUniform) {
    (
        ScalarUniform::pack(seed.x, mode),
        ScalarUniform::pack(seed.y, mode),
    )
}
