use std::fmt;

use super::math::Vec2;
use super::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale alpha by `factor` in [0, 1].
    pub fn faded(self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Rgba8,
}

impl Vertex {
    pub fn new(position: Vec2, color: Rgba8) -> Self {
        Self { position, color }
    }
}

/// Anything that can draw world-space triangle lists (three vertices per triangle).
pub trait VertexSink {
    fn draw_vertex_array(&mut self, verts: &[Vertex]);
}

impl VertexSink for Vec<Vertex> {
    fn draw_vertex_array(&mut self, verts: &[Vertex]) {
        self.extend_from_slice(verts);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    EntityHit,
    PlayerDeath,
    BulletFired,
    WaveStart,
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SoundId::EntityHit => "entity-hit",
            SoundId::PlayerDeath => "player-death",
            SoundId::BulletFired => "bullet-fired",
            SoundId::WaveStart => "wave-start",
        };
        f.write_str(name)
    }
}

/// Sound cues raised during a frame. The front end drains and plays them.
#[derive(Debug, Default)]
pub struct AudioQueue {
    pending: Vec<SoundId>,
}

impl AudioQueue {
    pub fn play(&mut self, sound: SoundId) {
        self.pending.push(sound);
    }

    pub fn drain(&mut self) -> Vec<SoundId> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[SoundId] {
        &self.pending
    }
}

/// Engine services handed to the simulation each frame.
pub struct EngineHandles {
    pub rng: GameRng,
    pub audio: AudioQueue,
}

impl EngineHandles {
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            audio: AudioQueue::default(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::seeded(seed))
    }
}
