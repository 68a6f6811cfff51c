//! Ping playback pipeline
//!
//! Owns the output engine handle, the decoded sample buffer, and the
//! single-slot in-flight load. The engine is created lazily on the first
//! user interaction; the decode runs once on a background thread and the
//! result is cached for the rest of the session. Playback skips a fixed
//! offset into the ping's leading silence so it feels instantaneous.
//!
//! Failure policy: device, read, and decode errors are logged and absorbed.
//! Subsequent flips simply run without sound.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use thiserror::Error;

use crate::config::FlipTuning;

/// Errors the audio subsystem can hit. None of them propagate past the
/// pipeline; they exist for logging and tests.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to read sound asset {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode sound asset")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Fully decoded ping, shared read-only after the load completes.
#[derive(Debug, Clone)]
struct DecodedPing {
    channels: u16,
    sample_rate: u32,
    samples: Vec<f32>,
}

impl DecodedPing {
    fn duration(&self) -> Duration {
        let frames = self.samples.len() as u64 / u64::from(self.channels.max(1));
        Duration::from_secs_f64(frames as f64 / f64::from(self.sample_rate.max(1)))
    }
}

fn decode_ping(path: PathBuf) -> Result<DecodedPing, AudioError> {
    let bytes = fs::read(&path).map_err(|source| AudioError::Read { path, source })?;
    let decoder = Decoder::new(Cursor::new(bytes))?;
    let channels = decoder.channels();
    let sample_rate = decoder.sample_rate();
    let samples: Vec<f32> = decoder.convert_samples().collect();
    Ok(DecodedPing { channels, sample_rate, samples })
}

/// Clamps the trim offset so a very short buffer still plays something.
fn clamped_offset(offset: Duration, buffer_duration: Duration) -> Duration {
    let max = buffer_duration.saturating_sub(Duration::from_millis(10));
    offset.min(max)
}

/// Single-slot in-flight load: the slot itself is the deduplication token.
/// At most one decode thread is ever spawned per session; `Failed` is
/// terminal, leaving sound unavailable for the rest of the session.
enum LoadSlot {
    Idle,
    Loading(JoinHandle<Result<DecodedPing, AudioError>>),
    Ready(DecodedPing),
    Failed,
}

/// Output device handle. The stream must stay alive for playback to work.
struct Engine {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// The session-lifetime audio pipeline. Survives resets.
pub struct AudioPipeline {
    engine: Option<Engine>,
    /// Set after a failed device open so we do not probe every frame.
    engine_failed: bool,
    load: LoadSlot,
    /// A flip asked for sound before the pipeline was ready; play as soon
    /// as it catches up.
    pending_play: bool,
    ping_offset: Duration,
    ping_path: PathBuf,
    loads_started: u32,
}

impl AudioPipeline {
    pub fn new(tuning: &FlipTuning) -> Self {
        Self {
            engine: None,
            engine_failed: false,
            load: LoadSlot::Idle,
            pending_play: false,
            ping_offset: tuning.ping_offset,
            ping_path: tuning.ping_path.clone(),
            loads_started: 0,
        }
    }

    /// One-shot priming on the first user interaction: claim the output
    /// device and kick off the decode so the first flip's sound is instant.
    pub fn prime(&mut self) {
        self.ensure_engine();
        self.ensure_loaded();
    }

    /// Idempotent load-ensure. The first call spawns the decode thread;
    /// while it is in flight further calls are no-ops, and once the slot is
    /// `Ready` or `Failed` the call returns immediately.
    pub fn ensure_loaded(&mut self) {
        if !matches!(self.load, LoadSlot::Idle) {
            return;
        }

        let path = self.ping_path.clone();
        self.loads_started += 1;
        self.load = LoadSlot::Loading(thread::spawn(move || decode_ping(path)));
    }

    /// Audio-first kick for a flip trigger. Plays immediately when the
    /// buffer and engine are ready; otherwise starts whatever is missing
    /// and flags the playback to happen as soon as the pipeline catches up.
    pub fn kick(&mut self) {
        if self.engine.is_some() && matches!(self.load, LoadSlot::Ready(_)) {
            self.play_now();
            return;
        }

        self.ensure_engine();
        self.ensure_loaded();
        self.pending_play = true;
    }

    /// Per-frame poll: harvests a finished decode and satisfies a pending
    /// playback once possible.
    pub fn poll(&mut self) {
        if let LoadSlot::Loading(handle) = &self.load {
            if handle.is_finished() {
                let slot = std::mem::replace(&mut self.load, LoadSlot::Idle);
                let LoadSlot::Loading(handle) = slot else { unreachable!() };
                self.load = match handle.join() {
                    Ok(Ok(ping)) => {
                        tracing::debug!(
                            duration_ms = ping.duration().as_millis() as u64,
                            "ping decoded"
                        );
                        LoadSlot::Ready(ping)
                    }
                    Ok(Err(err)) => {
                        tracing::warn!(%err, "ping load failed, flips will be silent");
                        LoadSlot::Failed
                    }
                    Err(_) => {
                        tracing::warn!("ping decode thread panicked, flips will be silent");
                        LoadSlot::Failed
                    }
                };
            }
        }

        if self.pending_play {
            match &self.load {
                LoadSlot::Ready(_) if self.engine.is_some() => {
                    self.play_now();
                    self.pending_play = false;
                }
                // Terminal states: the sound for that flip is lost.
                LoadSlot::Failed => self.pending_play = false,
                _ if self.engine_failed => self.pending_play = false,
                _ => {}
            }
        }
    }

    /// True once the decoded buffer is cached.
    pub fn is_ready(&self) -> bool {
        matches!(self.load, LoadSlot::Ready(_))
    }

    fn ensure_engine(&mut self) {
        if self.engine.is_some() || self.engine_failed {
            return;
        }
        match OutputStream::try_default() {
            Ok((stream, handle)) => {
                self.engine = Some(Engine { _stream: stream, handle });
            }
            Err(err) => {
                tracing::warn!(%err, "no audio output device, flips will be silent");
                self.engine_failed = true;
            }
        }
    }

    /// Fire-and-forget playback of the cached ping through a detached sink.
    fn play_now(&self) {
        let Some(engine) = &self.engine else { return };
        let LoadSlot::Ready(ping) = &self.load else { return };

        let Ok(sink) = Sink::try_new(&engine.handle) else {
            tracing::warn!("could not open playback sink");
            return;
        };

        let offset = clamped_offset(self.ping_offset, ping.duration());
        let source = SamplesBuffer::new(ping.channels, ping.sample_rate, ping.samples.clone())
            .skip_duration(offset);
        sink.append(source);
        sink.detach();
    }

    #[cfg(test)]
    fn loads_started(&self) -> u32 {
        self.loads_started
    }
}
