use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MusicError {
    #[error("cannot open music file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot decode music file: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("cannot create audio sink: {0}")]
    Play(#[from] rodio::PlayError),
}

/// Background track looping for as long as the player lives.
pub struct MusicPlayer {
    // dropping any of these stops playback
    _stream: OutputStream,
    _stream_handle: OutputStreamHandle,
    _sink: Sink,
}

impl MusicPlayer {
    pub fn start(path: &Path, volume: f32) -> Result<Self, MusicError> {
        let file = BufReader::new(File::open(path)?);
        let source = Decoder::new(file)?;

        let (stream, stream_handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&stream_handle)?;
        sink.set_volume(volume);
        sink.append(source.repeat_infinite());

        Ok(Self {
            _stream: stream,
            _stream_handle: stream_handle,
            _sink: sink,
        })
    }
}
