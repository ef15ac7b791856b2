//! Entity simulation: kinds, pools, collisions and the frame driver.
//!
//! Nothing in here touches the terminal or the filesystem.

pub mod asteroid;
pub mod bullet;
pub mod cargo_box;
pub mod collision;
pub mod constants;
pub mod debris;
pub mod enemy;
pub mod engine;
pub mod entity;
pub mod game;
pub mod geometry;
pub mod math;
pub mod pool;
pub mod rng;
pub mod ship;
pub mod waves;
pub mod world;

pub use engine::{EngineHandles, Rgba8, SoundId, Vertex, VertexSink};
pub use game::{FinishedRun, Game};
pub use rng::GameRng;
