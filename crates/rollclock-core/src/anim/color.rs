use super::value::{AnimatedValue, MotionSpec};

/// Straight-alpha RGBA, each channel in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Opaque color from a `0xRRGGBB` literal.
pub fn rgb(hex: u32) -> Rgba {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    [channel(16), channel(8), channel(0), 1.0]
}

/// Per-channel animated color.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedColor {
    channels: [AnimatedValue; 4],
}

impl AnimatedColor {
    /// One 8-bit step; finer than anything visible.
    const THRESHOLD: f32 = 1.0 / 255.0;

    pub fn new(color: Rgba) -> Self {
        Self {
            channels: color.map(|c| AnimatedValue::with_threshold(c, Self::THRESHOLD)),
        }
    }

    pub fn value(&self) -> Rgba {
        [0, 1, 2, 3].map(|i| self.channels[i].value().clamp(0.0, 1.0))
    }

    pub fn target(&self) -> Rgba {
        [0, 1, 2, 3].map(|i| self.channels[i].target())
    }

    pub fn is_settled(&self) -> bool {
        self.channels.iter().all(AnimatedValue::is_settled)
    }

    pub fn animate_to(&mut self, color: Rgba, spec: MotionSpec) {
        for (ch, c) in self.channels.iter_mut().zip(color) {
            ch.animate_to(c, spec);
        }
    }

    pub fn snap_to(&mut self, color: Rgba) {
        for (ch, c) in self.channels.iter_mut().zip(color) {
            ch.snap_to(c);
        }
    }

    pub fn advance(&mut self, dt: f32) -> Rgba {
        for ch in &mut self.channels {
            ch.advance(dt);
        }
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::spring::{DAMPING_RATIO_NO_BOUNCY, STIFFNESS_MEDIUM};

    #[test]
    fn rgb_parses_hex() {
        assert_eq!(rgb(0xFF0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb(0x000000), [0.0, 0.0, 0.0, 1.0]);
        let c = rgb(0x6200EE);
        assert!((c[0] - 98.0 / 255.0).abs() < 1e-6);
        assert!((c[2] - 238.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn fades_between_colors() {
        let from = rgb(0x3700B3);
        let to = rgb(0x6200EE);
        let mut c = AnimatedColor::new(from);
        c.animate_to(to, MotionSpec::spring(DAMPING_RATIO_NO_BOUNCY, STIFFNESS_MEDIUM));

        let mid = c.advance(1.0 / 60.0);
        assert!(mid[0] > from[0] && mid[0] < to[0]);
        assert!(!c.is_settled());

        for _ in 0..60 {
            c.advance(1.0 / 60.0);
        }
        assert!(c.is_settled());
        assert_eq!(c.value(), to);
    }

    #[test]
    fn snap_replaces_color() {
        let mut c = AnimatedColor::new(rgb(0xFFFFFF));
        c.snap_to(rgb(0x000000));
        assert!(c.is_settled());
        assert_eq!(c.target(), rgb(0x000000));
    }
}
