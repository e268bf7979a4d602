use self::layers::{layer_z, ParallaxLayers};
use self::quit::{ComboKey, QuitCombo};
use self::screen::{VirtualScreen, VIRTUAL_SIZE};
use self::sprites::{to_gfx, SpriteBatch};

use super::*;

mod layers;
mod music;
mod quit;
mod screen;
mod sprites;

use ellipsoid::prelude::Textures;
use music::MusicPlayer;

const BACKGROUND_Z: f32 = 0.9;
const LETTERBOX_Z: f32 = 0.05;

#[derive(Default, Clone, Copy, PartialEq, Eq, strum::EnumIter, Debug, Textures)]
#[strum(serialize_all = "snake_case")]
pub enum Txts {
    #[default]
    White,
    BallLarge,
    BallMedium,
    BallSmall,
}

impl Txts {
    /// Size of the texture in virtual pixels.
    pub fn pixel_size(&self) -> Vec2 {
        match self {
            Txts::White => vec2(1., 1.),
            Txts::BallLarge => vec2(30., 30.),
            Txts::BallMedium => vec2(22., 22.),
            Txts::BallSmall => vec2(18., 18.),
        }
    }
}

pub struct DemoApp {
    pub graphics: Graphics<Txts>,
    screen: VirtualScreen,
    layers: ParallaxLayers,
    sprites: SpriteBatch,
    rng: StdRng,
    quit_combo: QuitCombo,
    frame: u64,
    _music: Option<MusicPlayer>,
}

#[cfg(not(target_arch = "wasm32"))]
fn start_music(options: &DemoOptions) -> Option<MusicPlayer> {
    let path = options.music.as_deref()?;
    match MusicPlayer::start(path, options.volume) {
        Ok(player) => {
            info!("playing {}", path.display());
            Some(player)
        }
        Err(err) => {
            warn!("running without music: {}", err);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn start_music(options: &DemoOptions) -> Option<MusicPlayer> {
    if options.music.is_some() {
        info!("music playback is not available in the browser build");
    }
    None
}

impl App<Txts> for DemoApp {
    async fn new(window: winit::window::Window) -> Self {
        let options = crate::demo_options();

        if options.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
            window.set_cursor_visible(false);
        }
        let graphics = Graphics::new(window).await;

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let layers = ParallaxLayers::generate(VIRTUAL_SIZE, &mut rng)
            .expect("virtual screen size is positive");

        Self {
            graphics,
            screen: VirtualScreen::default(),
            layers,
            sprites: SpriteBatch::new(),
            rng,
            quit_combo: QuitCombo::default(),
            frame: 0,
            _music: start_music(&options),
        }
    }

    fn graphics(&self) -> &Graphics<Txts> {
        &self.graphics
    }

    fn graphics_mut(&mut self) -> &mut Graphics<Txts> {
        &mut self.graphics
    }

    /// Stars move a fixed amount per frame, `dt` is not used.
    fn update(&mut self, _dt: f32) {
        self.update_screen();
        self.layers.step(&mut self.rng);
        self.frame += 1;
    }

    fn draw(&mut self) {
        self.draw_layers();
        self.draw_frame();
    }

    /// Holding 4, 0 and 1 together quits, every other key is ignored.
    fn input(&mut self, event: &WindowEvent) -> bool {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            let key = match event.physical_key {
                winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Digit4) => ComboKey::Four,
                winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Digit0) => ComboKey::Zero,
                winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Digit1) => ComboKey::One,
                _ => return false,
            };
            let pressed = event.state == winit::event::ElementState::Pressed;

            if self.quit_combo.key(key, pressed) {
                info!("quit combo held at frame {}, exiting", self.frame);
                std::process::exit(0);
            }
            return true;
        }
        false
    }
}

impl DemoApp {
    fn update_screen(&mut self) {
        let win_size = self.graphics.window().inner_size();
        let window = vec2(win_size.width as f32, win_size.height as f32);
        if window != self.screen.window {
            debug!(
                "window resized to {}x{} at frame {}",
                win_size.width, win_size.height, self.frame
            );
            self.screen.resize(window);
        }
    }

    fn draw_layers(&mut self) {
        self.layers.emit(&mut self.sprites, |batch, layer| {
            batch.set_depth(layer_z(layer))
        });

        for shape in self.sprites.shapes(&self.screen) {
            self.graphics.add_geometry(shape.into());
        }
    }

    /// Black backdrop behind the virtual screen and masks in front of the
    /// letterbox bars, stars spawn just past the screen edges.
    fn draw_frame(&mut self) {
        let (center, size) = self.screen.area();
        self.add_black_quad(center, size, BACKGROUND_Z);

        for (center, size) in self.screen.bars() {
            self.add_black_quad(center, size, LETTERBOX_Z);
        }
    }

    fn add_black_quad(&mut self, center: Vec2, size: Vec2, z: f32) {
        let quad = Shape::from_square_centered()
            .apply(GTransform::from_translation(to_gfx(center)).stretch(to_gfx(size)))
            .set_color(Color::BLACK)
            .set_z(z);

        self.graphics.add_geometry(quad.into());
    }
}
