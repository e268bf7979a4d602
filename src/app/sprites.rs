use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub texture: Txts,
    /// Top-left corner in virtual pixels.
    pub top_left: Vec2,
    pub z: f32,
}

/// Collects sprite draws for one frame and turns them into shapes.
pub struct SpriteBatch {
    draws: Vec<SpriteDraw>,
    z: f32,
}

impl SpriteSink<Txts> for SpriteBatch {
    fn draw_sprite(&mut self, sprite: &Txts, position: Vec2) {
        self.draws.push(SpriteDraw {
            texture: *sprite,
            top_left: position,
            z: self.z,
        });
    }
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self {
            draws: vec![],
            z: 0.5,
        }
    }
    /// Depth for the sprites drawn from now on.
    pub fn set_depth(&mut self, z: f32) {
        self.z = z;
    }
    pub fn draws(&self) -> &[SpriteDraw] {
        &self.draws
    }
    /// Drains the batch into textured quads.
    pub fn shapes(&mut self, screen: &VirtualScreen) -> Vec<Shape<Txts>> {
        self.draws
            .drain(..)
            .map(|draw| {
                let size = draw.texture.pixel_size();
                let center = screen.to_ndc(draw.top_left + size * 0.5);
                let extent = screen.extent_to_ndc(size);
                Shape::from_square_centered()
                    .apply(GTransform::from_translation(to_gfx(center)).stretch(to_gfx(extent)))
                    .set_texture(draw.texture)
                    .set_z(draw.z)
            })
            .collect()
    }
}

pub fn to_gfx(v: Vec2) -> ellipsoid::prelude::Vec2 {
    ellipsoid::prelude::vec2(v.x, v.y)
}
