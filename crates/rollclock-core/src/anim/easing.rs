/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS-style cubic bézier with fixed endpoints (0, 0) and (1, 1).
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Fast start, long slow finish. Used for the regular one-step slide.
    pub const LINEAR_OUT_SLOW_IN: Easing = Easing::CubicBezier { x1: 0.0, y1: 0.0, x2: 0.2, y2: 1.0 };

    /// Eased progress for `t`. Input is clamped to `[0, 1]`; endpoints are exact.
    pub fn transform(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                if t <= 0.0 {
                    return 0.0;
                }
                if t >= 1.0 {
                    return 1.0;
                }
                let s = solve_param(x1, x2, t);
                bezier(y1, y2, s)
            }
        }
    }
}

const EPSILON: f32 = 1e-6;

/// One axis of a cubic bézier with p0 = 0 and p3 = 1.
#[inline]
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds the curve parameter whose x equals `x`.
///
/// Newton first; falls back to bisection when the slope flattens or the
/// iterate leaves `[0, 1]`.
fn solve_param(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
        if !(0.0..=1.0).contains(&s) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..48 {
        let v = bezier(x1, x2, s);
        if (v - x).abs() < EPSILON {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}
