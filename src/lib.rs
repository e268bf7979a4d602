#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use std::sync::OnceLock;

use ellipsoid::prelude::*;
use glam::{vec2, Vec2};
use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

pub mod options;
use options::DemoOptions;

pub mod starfield;
use starfield::{RandomUniform, SpriteSink, Starfield, StarfieldError, DEFAULT_STAR_COUNT};

mod app;
pub use app::{DemoApp, Txts};

static OPTIONS: OnceLock<DemoOptions> = OnceLock::new();

fn demo_options() -> DemoOptions {
    OPTIONS.get().cloned().unwrap_or_default()
}

/// Runs the demo with options parsed by the caller.
pub async fn run_with(options: DemoOptions) {
    if OPTIONS.set(options).is_err() {
        warn!("demo options were already set, keeping the first ones");
    }
    run().await;
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn run() {
    ellipsoid::run::<Txts, DemoApp>().await;
}
