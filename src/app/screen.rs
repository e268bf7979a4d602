use glam::{vec2, Vec2};

pub const VIRTUAL_SIZE: Vec2 = Vec2::new(1280., 720.);

/// Maps the fixed-size virtual screen into the window, keeping the aspect
/// ratio and centering it.
#[derive(Debug, Clone, Copy)]
pub struct VirtualScreen {
    pub size: Vec2,
    pub window: Vec2,
}

impl Default for VirtualScreen {
    fn default() -> Self {
        Self::new(VIRTUAL_SIZE)
    }
}

impl VirtualScreen {
    pub fn new(size: Vec2) -> Self {
        VirtualScreen { size, window: size }
    }
    pub fn resize(&mut self, window: Vec2) {
        self.window = window;
    }
    pub fn scale(&self) -> f32 {
        (self.window.x / self.size.x).min(self.window.y / self.size.y)
    }
    /// Top-left corner of the virtual screen in window pixels.
    pub fn offset(&self) -> Vec2 {
        (self.window - self.size * self.scale()) * 0.5
    }
    /// Virtual pixel (top-left origin, y down) to normalized device
    /// coordinates (center origin, y up).
    pub fn to_ndc(&self, pos: Vec2) -> Vec2 {
        if self.window.x <= 0. || self.window.y <= 0. {
            return Vec2::ZERO;
        }
        let px = self.offset() + pos * self.scale();
        vec2(px.x / self.window.x, -px.y / self.window.y) * 2. - vec2(1., -1.)
    }
    pub fn extent_to_ndc(&self, size: Vec2) -> Vec2 {
        if self.window.x <= 0. || self.window.y <= 0. {
            return Vec2::ZERO;
        }
        size * self.scale() / self.window * 2.
    }
    /// The virtual screen itself as `(center, size)` in NDC.
    pub fn area(&self) -> (Vec2, Vec2) {
        (self.to_ndc(self.size * 0.5), self.extent_to_ndc(self.size))
    }
    /// Letterbox bars as `(center, size)` in NDC. Empty when the window has
    /// the virtual aspect ratio.
    pub fn bars(&self) -> Vec<(Vec2, Vec2)> {
        let offset = self.offset();
        if self.window.x <= 0. || self.window.y <= 0. {
            return vec![];
        }
        let margin = offset / self.window * 2.;

        let mut bars = vec![];
        if margin.x > 0. {
            let size = vec2(margin.x, 2.);
            bars.push((vec2(-1. + margin.x * 0.5, 0.), size));
            bars.push((vec2(1. - margin.x * 0.5, 0.), size));
        }
        if margin.y > 0. {
            let size = vec2(2., margin.y);
            bars.push((vec2(0., 1. - margin.y * 0.5), size));
            bars.push((vec2(0., -1. + margin.y * 0.5), size));
        }
        bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn matching_window_maps_corners() {
        let screen = VirtualScreen::default();
        assert_eq!(screen.scale(), 1.);
        assert!(close(screen.to_ndc(Vec2::ZERO), vec2(-1., 1.)));
        assert!(close(screen.to_ndc(VIRTUAL_SIZE), vec2(1., -1.)));
        assert!(close(screen.to_ndc(VIRTUAL_SIZE * 0.5), Vec2::ZERO));
        assert!(screen.bars().is_empty());
        assert!(close(screen.area().1, vec2(2., 2.)));
    }

    #[test]
    fn wide_window_gets_pillarbox() {
        let mut screen = VirtualScreen::default();
        // 4:1 window, height limits the scale
        screen.resize(vec2(2880., 720.));

        assert_eq!(screen.scale(), 1.);
        assert_eq!(screen.offset(), vec2(800., 0.));
        assert!(close(screen.to_ndc(Vec2::ZERO), vec2(-1. + 1600. / 2880., 1.)));

        let bars = screen.bars();
        assert_eq!(bars.len(), 2);
        let width = 1600. / 2880.;
        assert!(close(bars[0].1, vec2(width, 2.)));
        assert!(close(bars[0].0, vec2(-1. + width * 0.5, 0.)));
        assert!(close(bars[1].0, vec2(1. - width * 0.5, 0.)));
    }

    #[test]
    fn tall_window_gets_letterbox() {
        let mut screen = VirtualScreen::default();
        screen.resize(vec2(640., 720.));

        assert_eq!(screen.scale(), 0.5);
        assert_eq!(screen.offset(), vec2(0., 180.));
        assert!(close(screen.extent_to_ndc(vec2(1280., 720.)), vec2(2., 1.)));
        let (center, size) = screen.area();
        assert!(close(center, Vec2::ZERO));
        assert!(close(size, vec2(2., 1.)));

        let bars = screen.bars();
        assert_eq!(bars.len(), 2);
        assert!(close(bars[0].0, vec2(0., 0.75)));
        assert!(close(bars[1].0, vec2(0., -0.75)));
    }

    #[test]
    fn minimised_window_does_not_blow_up() {
        let mut screen = VirtualScreen::default();
        screen.resize(Vec2::ZERO);

        assert_eq!(screen.to_ndc(vec2(10., 10.)), Vec2::ZERO);
        assert_eq!(screen.extent_to_ndc(vec2(30., 30.)), Vec2::ZERO);
        assert!(screen.bars().is_empty());
    }
}
