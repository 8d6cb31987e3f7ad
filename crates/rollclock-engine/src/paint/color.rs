/// Linear premultiplied RGBA color.
///
/// Invariant: `r`, `g`, `b` are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_premul(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplies straight-alpha *linear* components.
    #[inline]
    pub fn from_linear(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Converts straight-alpha sRGB components in `[0, 1]` (what a `#RRGGBB`
    /// literal means) to linear premultiplied.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_linear(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a)
    }

    /// [`from_srgb`](Self::from_srgb) over a `[r, g, b, a]` array.
    #[inline]
    pub fn from_srgb_array([r, g, b, a]: [f32; 4]) -> Self {
        Self::from_srgb(r, g, b, a)
    }

    /// Straight-alpha linear components; RGB is zero when `a == 0`.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
            a: f64::from(self.a),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

/// IEC 61966-2-1 transfer function.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn srgb_endpoints_are_exact() {
        assert_eq!(Color::from_srgb(0.0, 0.0, 0.0, 1.0), Color::BLACK);
        assert_eq!(Color::from_srgb(1.0, 1.0, 1.0, 1.0), Color::WHITE);
    }

    #[test]
    fn srgb_midgray_is_darker_in_linear() {
        let c = Color::from_srgb(0.5, 0.5, 0.5, 1.0);
        assert!(close(c.r, 0.2140));
    }

    #[test]
    fn alpha_is_premultiplied() {
        let c = Color::from_linear(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.to_array(), [0.5, 0.25, 0.0, 0.5]);
        let (r, g, b, a) = c.to_straight();
        assert!(close(r, 1.0) && close(g, 0.5) && close(b, 0.0) && close(a, 0.5));
    }

    #[test]
    fn transparent_has_no_color() {
        assert_eq!(Color::from_linear(1.0, 1.0, 1.0, 0.0), Color::TRANSPARENT);
        assert_eq!(Color::TRANSPARENT.to_straight(), (0.0, 0.0, 0.0, 0.0));
    }
}
