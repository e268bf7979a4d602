use super::*;

pub const LAYER_COUNT: usize = 8;

/// Every layer scrolls up by its own speed each frame.
pub const FRAME_VELOCITY: Vec2 = Vec2::new(0., -1.);

const FASTEST_SPEED: f32 = 4.;
const SPEED_STEP: f32 = 0.5;

/// Stars spawn a sprite-width outside the top-left corner so they slide in
/// instead of popping up.
const MARGIN: f32 = 32.;

/// Depth of the nearest layer; farther layers sit slightly behind it.
const FRONT_Z: f32 = 0.4;
const LAYER_Z_STEP: f32 = 0.01;

pub struct ParallaxLayers {
    /// Index 0 is the fastest, frontmost layer.
    fields: Vec<Starfield<Txts>>,
    /// Draw positions from the last `step`, empty until the first one.
    frames: Vec<[Vec2; DEFAULT_STAR_COUNT]>,
}

pub fn layer_speed(layer: usize) -> f32 {
    FASTEST_SPEED - SPEED_STEP * layer as f32
}

pub fn layer_sprite(layer: usize) -> Txts {
    match layer {
        0..=2 => Txts::BallLarge,
        3..=4 => Txts::BallMedium,
        _ => Txts::BallSmall,
    }
}

pub fn layer_z(layer: usize) -> f32 {
    FRONT_Z + LAYER_Z_STEP * layer as f32
}

impl ParallaxLayers {
    pub fn generate<R: RandomUniform + ?Sized>(
        screen: Vec2,
        rng: &mut R,
    ) -> Result<Self, StarfieldError> {
        let origin = Vec2::splat(-MARGIN);
        let size = screen + Vec2::splat(MARGIN);

        let fields = (0..LAYER_COUNT)
            .map(|layer| {
                let mut field = Starfield::new(layer_sprite(layer), origin, size, &mut *rng)?;
                field.set_speed(Vec2::splat(layer_speed(layer)), &mut *rng);
                Ok::<_, StarfieldError>(field)
            })
            .collect::<Result<Vec<_>, StarfieldError>>()?;

        debug!("generated {} starfield layers over {:?}", fields.len(), size);

        Ok(Self {
            fields,
            frames: vec![],
        })
    }

    pub fn step<R: RandomUniform + ?Sized>(&mut self, rng: &mut R) {
        self.frames = self
            .fields
            .iter_mut()
            .map(|field| field.step(FRAME_VELOCITY, &mut *rng))
            .collect();
    }

    /// Emits the last stepped frame of each layer, back to front.
    /// `begin_layer` runs with the layer index before that layer's sprites.
    /// Nothing is emitted before the first `step`.
    pub fn emit<K, F>(&self, sink: &mut K, mut begin_layer: F)
    where
        K: SpriteSink<Txts>,
        F: FnMut(&mut K, usize),
    {
        for (layer, frame) in self.frames.iter().enumerate().rev() {
            begin_layer(&mut *sink, layer);
            self.fields[layer].emit(frame, &mut *sink);
        }
    }

    pub fn fields(&self) -> &[Starfield<Txts>] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers() -> ParallaxLayers {
        let mut rng = StdRng::seed_from_u64(2021);
        ParallaxLayers::generate(VIRTUAL_SIZE, &mut rng).unwrap()
    }

    #[test]
    fn speeds_drop_by_half_a_pixel_per_layer() {
        let speeds: Vec<f32> = (0..LAYER_COUNT).map(layer_speed).collect();
        assert_eq!(speeds, vec![4.0, 3.5, 3.0, 2.5, 2.0, 1.5, 1.0, 0.5]);
    }

    #[test]
    fn generated_layers_are_configured() {
        let layers = layers();
        assert_eq!(layers.fields().len(), LAYER_COUNT);

        for (i, field) in layers.fields().iter().enumerate() {
            assert!(field.is_configured());
            assert_eq!(*field.sprite(), layer_sprite(i));
            assert_eq!(field.origin(), vec2(-32., -32.));
            assert_eq!(field.size(), vec2(1312., 752.));
            assert!(field
                .stars()
                .iter()
                .all(|star| star.speed == Vec2::splat(layer_speed(i))));
        }
    }

    #[test]
    fn sprites_shrink_with_depth() {
        let sizes: Vec<f32> = (0..LAYER_COUNT)
            .map(|layer| layer_sprite(layer).pixel_size().x)
            .collect();
        assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(layer_sprite(0), Txts::BallLarge);
        assert_eq!(layer_sprite(7), Txts::BallSmall);
    }

    #[test]
    fn nearer_layers_are_in_front() {
        assert!((1..LAYER_COUNT).all(|layer| layer_z(layer) > layer_z(layer - 1)));
    }

    #[test]
    fn emits_back_to_front() {
        let mut layers = layers();
        let mut rng = StdRng::seed_from_u64(1);
        layers.step(&mut rng);

        let mut order = vec![];
        let mut sink: Vec<(Txts, Vec2)> = vec![];
        layers.emit(&mut sink, |sink, layer| order.push((layer, sink.len())));

        let layer_order: Vec<usize> = order.iter().map(|(layer, _)| *layer).collect();
        assert_eq!(layer_order, vec![7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(sink.len(), LAYER_COUNT * DEFAULT_STAR_COUNT);
        assert_eq!(sink[0].0, Txts::BallSmall);
        assert_eq!(sink.last().unwrap().0, Txts::BallLarge);
        assert!(order
            .iter()
            .enumerate()
            .all(|(i, (_, start))| *start == i * DEFAULT_STAR_COUNT));
    }

    #[test]
    fn nothing_is_drawn_before_the_first_step() {
        let mut layers = layers();
        let mut sink: Vec<(Txts, Vec2)> = vec![];
        let mut begun = 0;
        layers.emit(&mut sink, |_, _| begun += 1);
        assert!(sink.is_empty());
        assert_eq!(begun, 0);

        let mut rng = StdRng::seed_from_u64(3);
        layers.step(&mut rng);
        layers.emit(&mut sink, |_, _| {});
        assert_eq!(sink.len(), LAYER_COUNT * DEFAULT_STAR_COUNT);
        assert!(!sink.iter().all(|(_, pos)| *pos == Vec2::ZERO));
    }

    #[test]
    fn stepping_keeps_stars_in_viewport() {
        let mut layers = layers();
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..1000 {
            layers.step(&mut rng);
        }

        for field in layers.fields() {
            let max = field.origin() + field.size();
            assert!(field.stars().iter().all(|star| {
                star.pos.x >= field.origin().x
                    && star.pos.x <= max.x
                    && star.pos.y >= field.origin().y
                    && star.pos.y <= max.y
            }));
        }
    }
}
