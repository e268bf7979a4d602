use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub const DEFAULT_MUSIC_PATH: &str = "assets/music/ntmmeg.ogg";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoOptions {
    pub fullscreen: bool,
    /// `None` when music is switched off.
    pub music: Option<PathBuf>,
    pub volume: f32,
    pub seed: Option<u64>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            fullscreen: true,
            music: Some(PathBuf::from(DEFAULT_MUSIC_PATH)),
            volume: 1.,
            seed: None,
        }
    }
}

fn volume_parser(raw: &str) -> Result<f32, String> {
    let volume: f32 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if (0. ..=1.).contains(&volume) {
        Ok(volume)
    } else {
        Err(format!("volume must be between 0 and 1, got {volume}"))
    }
}

pub fn command() -> Command {
    Command::new("ballfield")
        .about("Layered ball starfield demo")
        .arg(
            Arg::new("windowed")
                .long("windowed")
                .action(ArgAction::SetTrue)
                .help("Stay in a window instead of going fullscreen"),
        )
        .arg(
            Arg::new("music")
                .long("music")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_MUSIC_PATH)
                .help("Music file played in a loop"),
        )
        .arg(
            Arg::new("no-music")
                .long("no-music")
                .action(ArgAction::SetTrue)
                .conflicts_with("music")
                .help("Run without music"),
        )
        .arg(
            Arg::new("volume")
                .long("volume")
                .value_parser(volume_parser)
                .default_value("1.0"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Seed for star placement"),
        )
}

impl DemoOptions {
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        let music = if matches.get_flag("no-music") {
            None
        } else {
            matches.get_one::<PathBuf>("music").cloned()
        };

        Ok(Self {
            fullscreen: !matches.get_flag("windowed"),
            music,
            volume: matches.get_one::<f32>("volume").copied().unwrap_or(1.),
            seed: matches.get_one::<u64>("seed").copied(),
        })
    }
}
