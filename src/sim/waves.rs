//! Wave table and the play-mode state machine.

use std::fmt;

use log::info;

use super::constants::RESET_GRACE_SECONDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSpec {
    pub asteroids: usize,
    pub beetles: usize,
    pub wasps: usize,
}

impl WaveSpec {
    pub const fn new(asteroids: usize, beetles: usize, wasps: usize) -> Self {
        Self {
            asteroids,
            beetles,
            wasps,
        }
    }
}

pub const WAVES: [WaveSpec; 5] = [
    WaveSpec::new(6, 0, 0),
    WaveSpec::new(4, 2, 0),
    WaveSpec::new(4, 3, 1),
    WaveSpec::new(5, 4, 2),
    WaveSpec::new(6, 5, 3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Attract,
    Playing,
    PlayerDeadPendingReset,
    /// Entered once the final wave is cleared; waits out the grace delay.
    WaveClearedPendingAdvance,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Mode::Attract => "attract",
            Mode::Playing => "playing",
            Mode::PlayerDeadPendingReset => "player dead",
            Mode::WaveClearedPendingAdvance => "waves cleared",
        };
        f.write_str(name)
    }
}

/// What the controller wants the world to do after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Continue,
    SpawnWave(WaveSpec),
    /// The grace delay ran out: reset and go back to attract.
    Reset,
}

pub struct ModeController {
    mode: Mode,
    /// Index into [`WAVES`] of the wave in play, `None` before the first.
    wave: Option<usize>,
    grace_timer: f32,
    name_input: bool,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            mode: Mode::Attract,
            wave: None,
            grace_timer: 0.0,
            name_input: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_attract_mode(&self) -> bool {
        self.mode == Mode::Attract
    }

    pub fn is_name_input_mode(&self) -> bool {
        self.name_input
    }

    pub fn set_name_input_mode(&mut self, on: bool) {
        self.name_input = on && self.is_attract_mode();
    }

    /// Zero-based index of the wave in play.
    pub fn current_wave(&self) -> Option<usize> {
        self.wave
    }

    pub fn begin_play(&mut self) {
        self.mode = Mode::Playing;
        self.wave = None;
        self.grace_timer = 0.0;
        self.name_input = false;
        info!("mode -> {}", self.mode);
    }

    pub fn reset(&mut self) {
        self.mode = Mode::Attract;
        self.wave = None;
        self.grace_timer = 0.0;
        self.name_input = false;
        info!("mode -> {}", self.mode);
    }

    /// Advance the state machine at the end of a frame.
    ///
    /// `game_over` means the ship is dead with no lives left. Death wins over
    /// a simultaneous wave clear.
    pub fn step(&mut self, game_over: bool, all_enemies_dead: bool, dt: f32) -> Progress {
        match self.mode {
            Mode::Attract => Progress::Continue,
            Mode::Playing => {
                if game_over {
                    self.enter(Mode::PlayerDeadPendingReset);
                    return Progress::Continue;
                }
                if !all_enemies_dead {
                    return Progress::Continue;
                }
                let next = self.wave.map_or(0, |w| w + 1);
                match WAVES.get(next) {
                    Some(spec) => {
                        self.wave = Some(next);
                        info!("wave {} begins", next + 1);
                        Progress::SpawnWave(*spec)
                    }
                    None => {
                        self.enter(Mode::WaveClearedPendingAdvance);
                        Progress::Continue
                    }
                }
            }
            Mode::PlayerDeadPendingReset | Mode::WaveClearedPendingAdvance => {
                self.grace_timer += dt;
                if self.grace_timer >= RESET_GRACE_SECONDS {
                    Progress::Reset
                } else {
                    Progress::Continue
                }
            }
        }
    }

    fn enter(&mut self, mode: Mode) {
        self.mode = mode;
        self.grace_timer = 0.0;
        info!("mode -> {}", self.mode);
    }
}
