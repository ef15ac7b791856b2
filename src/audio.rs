use std::io::{self, Write};

use log::debug;

use crate::sim::SoundId;

/// Only the ship's death and the start of a wave are worth a bell.
fn rings_bell(cues: &[SoundId]) -> bool {
    cues.iter()
        .any(|c| matches!(c, SoundId::PlayerDeath | SoundId::WaveStart))
}

/// Plays sound cues as best a terminal can: the bell, if enabled.
pub struct TerminalAudio {
    bell: bool,
}

impl TerminalAudio {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }

    pub fn play_all(&mut self, cues: &[SoundId]) {
        for cue in cues {
            debug!("sound: {cue}");
        }
        if self.bell && rings_bell(cues) {
            let mut out = io::stdout();
            let _ = out.write_all(b"\x07").and_then(|_| out.flush());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_only_for_death_and_wave_start() {
        assert!(!rings_bell(&[SoundId::EntityHit, SoundId::BulletFired]));
        assert!(rings_bell(&[SoundId::EntityHit, SoundId::PlayerDeath]));
        assert!(rings_bell(&[SoundId::WaveStart]));
        assert!(!rings_bell(&[]));
    }
}
