//! Frame playback state machine.
//!
//! One [`Player`] drives one symbol of the active pack: it advances the
//! current frame by elapsed wall time against the pack's declared rate,
//! honoring per-frame tick durations, and loops unconditionally. A symbol
//! with no frames makes every step a no-op.

use crate::config::Config;
use crate::data::{Frame, Pack};

/// Shared clamp applied at construction and at every symbol switch: a
/// declared rate of <= 1 counts as unset and the fallback is used instead.
pub fn effective_fps(pack_fps: f32, fallback: f32) -> f32 {
    if pack_fps > 1.0 {
        pack_fps
    } else {
        fallback
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    symbol: usize,
    frame: usize,
    duration_left: i32,
    fps: f32,
    speed: f32,
    playing: bool,
    /// Fractional ticks carried between steps.
    acc: f32,
    fallback_fps: f32,
}

impl Player {
    /// Player positioned on symbol 0, frame 0 of `pack`, playing.
    pub fn new(cfg: &Config, pack: &Pack) -> Self {
        let mut player = Self {
            symbol: 0,
            frame: 0,
            duration_left: 1,
            fps: cfg.fallback_fps,
            speed: 1.0,
            playing: true,
            acc: 0.0,
            fallback_fps: cfg.fallback_fps,
        };
        player.switch_symbol(pack, 0);
        player
    }

    /// Select a symbol: rewind to frame 0, reload its duration, re-derive
    /// the effective rate from the pack, and start on a whole-tick
    /// boundary.
    pub fn switch_symbol(&mut self, pack: &Pack, index: usize) {
        self.symbol = index;
        self.fps = effective_fps(pack.fps, self.fallback_fps);
        self.acc = 0.0;
        self.rewind(pack);
    }

    /// Back to frame 0 without touching play/pause.
    pub fn restart(&mut self, pack: &Pack) {
        self.rewind(pack);
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Advance playback by `dt` seconds. Whole ticks are consumed one at
    /// a time, so one large step crosses frame boundaries exactly as many
    /// smaller steps would.
    pub fn tick(&mut self, pack: &Pack, dt: f32) {
        if !self.playing {
            return;
        }
        let Some(symbol) = pack.symbol(self.symbol) else {
            return;
        };
        if symbol.frames.is_empty() {
            return;
        }
        self.acc += dt * self.fps * self.speed;
        while self.acc >= 1.0 {
            self.acc -= 1.0;
            self.duration_left -= 1;
            if self.duration_left <= 0 {
                self.frame = (self.frame + 1) % symbol.frames.len();
                self.duration_left = symbol.frames[self.frame].duration;
            }
        }
    }

    pub fn symbol_index(&self) -> usize {
        self.symbol
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    /// Ticks left on the current frame. Transiently non-positive only
    /// inside the tick loop, never after a step returns.
    pub fn duration_left(&self) -> i32 {
        self.duration_left
    }

    /// Effective playback rate after the fallback clamp.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Frame currently showing; None when the pack has nothing to show.
    pub fn current_frame<'p>(&self, pack: &'p Pack) -> Option<&'p Frame> {
        pack.symbol(self.symbol)
            .and_then(|symbol| symbol.frames.get(self.frame))
    }

    fn rewind(&mut self, pack: &Pack) {
        self.frame = 0;
        self.duration_left = pack
            .symbol(self.symbol)
            .and_then(|symbol| symbol.frames.first())
            .map(|frame| frame.duration)
            .unwrap_or(1);
    }
}
