use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Kind of a single resize operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeKind {
    /// Cheap, non-smoothing reduction. Used as a pre-pass so the
    /// smoothing resize never runs over a huge source pixel count.
    Downsample,
    /// Smoothing-capable resize producing the final visual output.
    Resize,
}

/// One step of a resize plan: replace the current image with one of
/// `width` x `height` pixels using the given operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeStep {
    pub kind: ResizeKind,
    pub width: u32,
    pub height: u32,
}

/// Deterministic sequence of at most two resize steps bringing an image
/// under a target bound.
///
/// Policy for a bound `max`:
/// - long axis `<= max`: no steps
/// - long axis `<= 2 * max`: one smoothing resize to bound `max / 2`
/// - long axis `> 2 * max`: downsample to bound `max`, then a smoothing
///   resize to bound `max / 2` computed from the post-downsample size
///
/// Aspect ratio is preserved at every step with the short axis rounded
/// toward zero; a square image treats width as the long axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizePlan {
    steps: Vec<ResizeStep>,
}

impl ResizePlan {
    pub fn compute(width: u32, height: u32, max_dimension: u32) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidDimensions { width, height });
        }
        if max_dimension < 2 {
            return Err(DomainError::InvalidBound(max_dimension));
        }

        let mut steps = Vec::new();
        let (mut w, mut h) = (width, height);

        if w.max(h) > max_dimension {
            if w.max(h) > max_dimension.saturating_mul(2) {
                let (dw, dh) = scale_to_bound(w, h, max_dimension);
                steps.push(ResizeStep {
                    kind: ResizeKind::Downsample,
                    width: dw,
                    height: dh,
                });
                (w, h) = (dw, dh);
            }

            let (rw, rh) = scale_to_bound(w, h, max_dimension / 2);
            steps.push(ResizeStep {
                kind: ResizeKind::Resize,
                width: rw,
                height: rh,
            });
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[ResizeStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Scale `(width, height)` so the long axis lands on `bound`, with the
/// short axis truncated toward zero. Width wins ties, so square images
/// resolve deterministically. Degenerate aspect ratios clamp the short
/// axis to 1px.
fn scale_to_bound(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width >= height {
        let scaled = (height as u64 * bound as u64 / width as u64) as u32;
        (bound, scaled.max(1))
    } else {
        let scaled = (width as u64 * bound as u64 / height as u64) as u32;
        (scaled.max(1), bound)
    }
}
