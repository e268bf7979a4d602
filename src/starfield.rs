//! Fixed-size 2D starfield.
//!
//! A [`Starfield`] keeps `N` stars drifting through a rectangular viewport.
//! Stars that leave the viewport are recycled at the opposite edge, and every
//! star wobbles on a pair of sine phases when it is drawn. Several starfields
//! with different speeds stacked on top of each other give the parallax look.

use glam::{vec2, Vec2};
use rand::{rngs::StdRng, Rng};
use thiserror::Error;

pub const DEFAULT_STAR_COUNT: usize = 8;

/// Phase advance per step, in radians.
pub const PHASE_STEP: f32 = 0.1;

/// Upper bound of the initial phases. Used as radians, not degrees.
const PHASE_RANGE: f32 = 360.;

/// Horizontal wobble amplitude relative to the vertical one.
const WOBBLE_X: f32 = 8.;

#[derive(Debug, Error, PartialEq)]
pub enum StarfieldError {
    #[error("viewport extent must be finite and not negative, got {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },
    #[error("viewport must lie in finite space, origin is ({x}, {y})")]
    InvalidOrigin { x: f32, y: f32 },
}

/// Uniform sampling over a closed interval.
pub trait RandomUniform {
    /// Returns a value in `[min, max]`. `min == max` returns `min`.
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

impl RandomUniform for StdRng {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }
}

/// Something sprites can be drawn onto with the default tint.
pub trait SpriteSink<S> {
    fn draw_sprite(&mut self, sprite: &S, position: Vec2);
}

impl<S: Clone> SpriteSink<S> for Vec<(S, Vec2)> {
    fn draw_sprite(&mut self, sprite: &S, position: Vec2) {
        self.push((sprite.clone(), position));
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub speed: Vec2,
    /// `x` drives the horizontal wobble, `y` the vertical one.
    pub phase: Vec2,
}

impl Star {
    fn draw_position(&self, velocity: Vec2) -> Vec2 {
        vec2(
            self.pos.x + self.phase.x.sin() * velocity.y * WOBBLE_X,
            self.pos.y + self.phase.y.sin() * velocity.y,
        )
    }
}

#[derive(Debug, Clone)]
pub struct Starfield<S, const N: usize = DEFAULT_STAR_COUNT> {
    sprite: S,
    origin: Vec2,
    size: Vec2,
    stars: [Star; N],
    configured: bool,
}

impl<S, const N: usize> Starfield<S, N> {
    /// Scatters `N` stars uniformly over the viewport. Speeds and phases
    /// stay zero until [`Starfield::set_speed`] is called.
    pub fn new<R: RandomUniform + ?Sized>(
        sprite: S,
        origin: Vec2,
        size: Vec2,
        rng: &mut R,
    ) -> Result<Self, StarfieldError> {
        // NaN fails the comparison and is rejected too
        if !(size.is_finite() && size.x >= 0. && size.y >= 0.) {
            return Err(StarfieldError::InvalidExtent {
                width: size.x,
                height: size.y,
            });
        }
        if !origin.is_finite() || !(origin + size).is_finite() {
            return Err(StarfieldError::InvalidOrigin {
                x: origin.x,
                y: origin.y,
            });
        }

        let stars = std::array::from_fn(|_| Star {
            pos: vec2(
                rng.uniform(origin.x, origin.x + size.x),
                rng.uniform(origin.y, origin.y + size.y),
            ),
            ..Default::default()
        });

        Ok(Self {
            sprite,
            origin,
            size,
            stars,
            configured: false,
        })
    }

    /// Gives every star the same speed and reshuffles the wobble phases.
    pub fn set_speed<R: RandomUniform + ?Sized>(&mut self, speed: Vec2, rng: &mut R) {
        for star in &mut self.stars {
            star.speed = speed;
            star.phase = vec2(rng.uniform(0., PHASE_RANGE), rng.uniform(0., PHASE_RANGE));
        }
        self.configured = true;
    }

    /// Moves every star by `speed * velocity`, recycles the ones that left the
    /// viewport and advances the phases. Returns where each star should be
    /// drawn this frame, in star order.
    pub fn step<R: RandomUniform + ?Sized>(&mut self, velocity: Vec2, rng: &mut R) -> [Vec2; N] {
        let min = self.origin;
        let max = self.origin + self.size;

        let mut frame = [Vec2::ZERO; N];
        for (star, slot) in self.stars.iter_mut().zip(frame.iter_mut()) {
            star.pos += star.speed * velocity;

            if star.pos.x > max.x {
                star.pos.x = min.x;
                star.pos.y = rng.uniform(min.y, max.y);
            }
            if star.pos.y > max.y {
                star.pos.y = min.y;
                star.pos.x = rng.uniform(min.x, max.x);
            }
            if star.pos.x < min.x {
                star.pos.x = max.x;
            }
            // never true after the recycle above, the check order is kept as is
            if star.pos.y > max.y {
                star.pos.y = min.y;
            }
            if star.pos.y < min.y {
                star.pos.y = max.y;
            }

            *slot = star.draw_position(velocity);
            star.phase += Vec2::splat(PHASE_STEP);
        }
        frame
    }

    /// Emits one sprite per star at the positions produced by [`Starfield::step`].
    pub fn emit<K: SpriteSink<S> + ?Sized>(&self, frame: &[Vec2; N], sink: &mut K) {
        for position in frame {
            sink.draw_sprite(&self.sprite, *position);
        }
    }

    pub fn advance<R, K>(&mut self, velocity: Vec2, rng: &mut R, sink: &mut K)
    where
        R: RandomUniform + ?Sized,
        K: SpriteSink<S> + ?Sized,
    {
        let frame = self.step(velocity, rng);
        self.emit(&frame, sink);
    }

    pub fn stars(&self) -> &[Star; N] {
        &self.stars
    }
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
    pub fn size(&self) -> Vec2 {
        self.size
    }
    pub fn sprite(&self) -> &S {
        &self.sprite
    }
    pub fn is_configured(&self) -> bool {
        self.configured
    }
}
