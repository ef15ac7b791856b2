//! Frame driver: input, movement, cleanup, collisions and game flow.

use log::{debug, info};

use super::collision;
use super::constants::*;
use super::engine::{EngineHandles, SoundId, VertexSink};
use super::entity::Entity;
use super::waves::{Mode, ModeController, Progress};
use super::world::World;
use crate::config::{BoxConfig, GameConfig, PlayerConfig};
use crate::input::{ControllerButton, InputState, Key};

/// A run that ended with points on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedRun {
    pub name: String,
    pub score: u32,
}

pub struct Game {
    player: PlayerConfig,
    boxes: BoxConfig,
    world: World,
    mode: ModeController,
    lives: u32,
    player_name: String,
    high_score: u32,
    box_timer: f32,
    debug_draw: bool,
    finished: Option<FinishedRun>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: config.player.clone(),
            boxes: config.boxes.clone(),
            world: World::new(),
            mode: ModeController::new(),
            lives: config.player.lives,
            player_name: String::new(),
            high_score: 0,
            box_timer: 0.0,
            debug_draw: false,
            finished: None,
        }
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn is_attract_mode(&self) -> bool {
        self.mode.is_attract_mode()
    }

    pub fn is_player_name_input_mode(&self) -> bool {
        self.mode.is_name_input_mode()
    }

    pub fn set_player_name_input_mode(&mut self, on: bool) {
        self.mode.set_name_input_mode(on);
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Zero when there is no ship.
    pub fn player_health(&self) -> i32 {
        self.world.ship.as_ref().map_or(0, |s| s.core().health())
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.world.ship.as_ref().map_or(0, |s| s.score())
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.max(self.score())
    }

    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score;
    }

    /// One-based wave number for display; zero before the first wave.
    pub fn current_wave(&self) -> usize {
        self.mode.current_wave().map_or(0, |w| w + 1)
    }

    pub fn are_all_enemies_dead(&self) -> bool {
        self.world.are_all_enemies_dead()
    }

    pub fn is_debug_draw(&self) -> bool {
        self.debug_draw
    }

    /// Hand over the most recent finished run, if any, for recording.
    pub fn take_finished_run(&mut self) -> Option<FinishedRun> {
        self.finished.take()
    }

    // ── Flow ───────────────────────────────────────────────────────────

    /// Leave attract mode and start a fresh run as `name`.
    pub fn start_playing(&mut self, name: &str, handles: &mut EngineHandles) {
        self.world.clear();
        self.player_name = name.to_string();
        self.lives = self.player.lives;
        self.box_timer = 0.0;
        self.mode.begin_play();
        self.world.spawn_player_ship(self.player.initial_health, 0);
        self.world.spawn_box_cluster(self.boxes.drift_speed, &mut handles.rng);
        info!("{} starts a run with {} lives", self.player_name, self.lives);
    }

    /// Drop everything and return to attract, recording the run if it scored.
    pub fn hard_reset(&mut self) {
        info!("hard reset");
        self.finish_run();
    }

    fn finish_run(&mut self) {
        let score = self.score();
        if score > 0 && !self.is_attract_mode() {
            info!("run over: {} scored {}", self.player_name, score);
            self.high_score = self.high_score.max(score);
            self.finished = Some(FinishedRun {
                name: self.player_name.clone(),
                score,
            });
        }
        self.world.clear();
        self.lives = self.player.lives;
        self.box_timer = 0.0;
        self.mode.reset();
    }

    /// Bring back a dead ship if lives remain, keeping the score.
    pub fn respawn_player(&mut self) -> bool {
        let Some(ship) = &self.world.ship else {
            return false;
        };
        if ship.core().is_alive() || self.lives == 0 || self.mode() != Mode::Playing {
            return false;
        }
        let score = ship.score();
        self.world.spawn_player_ship(self.player.initial_health, score);
        info!("ship respawned, {} lives left", self.lives);
        true
    }

    // ── Frame ──────────────────────────────────────────────────────────

    pub fn update(&mut self, input: &InputState, handles: &mut EngineHandles, dt: f32) {
        if self.is_attract_mode() {
            return;
        }
        self.handle_dev_keys(input, handles);

        // Intent
        let fire = match self.world.ship.as_mut() {
            Some(ship) => ship.apply_intent(&input.ship_intent()),
            None => false,
        };

        // Integrate
        self.world.update_entities(&mut handles.rng, dt);
        if fire {
            if let Some(ship) = &self.world.ship {
                let (muzzle, heading) = (ship.muzzle(), ship.core().orientation_degrees);
                if self.world.spawn_bullet(muzzle, heading).is_ok() {
                    handles.audio.play(SoundId::BulletFired);
                }
            }
        }
        self.box_timer += dt;
        if self.box_timer >= BOX_CLUSTER_INTERVAL_SECONDS {
            self.box_timer -= BOX_CLUSTER_INTERVAL_SECONDS;
            self.world.spawn_box_cluster(self.boxes.drift_speed, &mut handles.rng);
        }

        self.world.mark_off_screen_as_garbage();

        // Collide
        let was_alive = self.world.player_is_alive();
        let effects = collision::resolve(&mut self.world);
        self.world.apply_effects(effects, handles);
        if was_alive && !self.world.player_is_alive() {
            self.lives = self.lives.saturating_sub(1);
            handles.audio.play(SoundId::PlayerDeath);
            info!("ship destroyed, {} lives left", self.lives);
        }

        let freed = self.world.collect_garbage();
        if freed > 0 {
            debug!("freed {freed} slots");
        }

        // Flow
        let game_over = !self.world.player_is_alive() && self.lives == 0;
        match self.mode.step(game_over, self.world.are_all_enemies_dead(), dt) {
            Progress::Continue => {}
            Progress::SpawnWave(spec) => {
                self.world.spawn_wave(&spec, &mut handles.rng);
                handles.audio.play(SoundId::WaveStart);
            }
            Progress::Reset => self.finish_run(),
        }
    }

    fn handle_dev_keys(&mut self, input: &InputState, handles: &mut EngineHandles) {
        if input.was_key_just_pressed(Key::F(1)) {
            self.debug_draw = !self.debug_draw;
        }
        if input.was_key_just_pressed(Key::F(4)) {
            info!("killing all enemies");
            self.world.kill_all_enemies(&mut handles.rng);
        }
        if input.was_key_just_pressed(Key::Char('I')) {
            let at = World::off_screen_position(ASTEROID_COSMETIC_RADIUS, &mut handles.rng);
            let _ = self.world.spawn_asteroid(at, &mut handles.rng);
        }
        if input.was_key_just_pressed(Key::Char('N'))
            || input.controller.was_button_just_pressed(ControllerButton::Start)
        {
            self.respawn_player();
        }
    }

    pub fn render(&self, sink: &mut dyn VertexSink) {
        if self.is_attract_mode() {
            return;
        }
        self.world.render(sink);
        if self.debug_draw {
            self.world.debug_render(sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::math::vec2;
    use crate::sim::waves::WAVES;

    fn playing_game(seed: u64) -> (Game, EngineHandles) {
        let mut handles = EngineHandles::seeded(seed);
        let mut game = Game::new(&GameConfig::default());
        game.start_playing("ACE", &mut handles);
        (game, handles)
    }

    #[test]
    fn attract_update_is_inert() {
        let mut handles = EngineHandles::seeded(1);
        let mut game = Game::new(&GameConfig::default());
        game.update(&InputState::default(), &mut handles, 0.016);
        assert!(game.is_attract_mode());
        assert!(game.world().ship.is_none());
        assert_eq!(game.current_wave(), 0);
    }

    #[test]
    fn first_frame_starts_wave_one() {
        let (mut game, mut handles) = playing_game(1);
        game.update(&InputState::default(), &mut handles, 0.016);
        assert_eq!(game.current_wave(), 1);
        assert_eq!(game.world().asteroids.len(), 6);
        assert!(handles.audio.pending().contains(&SoundId::WaveStart));
    }

    #[test]
    fn losing_last_life_returns_to_attract_after_grace() {
        let (mut game, mut handles) = playing_game(1);
        let input = InputState::default();
        game.update(&input, &mut handles, 0.016);
        let ship = game.world_mut().ship.as_mut().unwrap();
        ship.add_score(50);
        ship.core_mut().kill();
        game.lives = 0;
        game.update(&input, &mut handles, 0.016);
        assert_eq!(game.mode(), Mode::PlayerDeadPendingReset);

        for _ in 0..200 {
            game.update(&input, &mut handles, 0.016);
        }
        assert!(game.is_attract_mode());
        assert_eq!(
            game.take_finished_run(),
            Some(FinishedRun {
                name: "ACE".into(),
                score: 50
            })
        );
        assert!(game.world().ship.is_none());
        assert_eq!(game.lives(), 3);
    }

    #[test]
    fn clearing_final_wave_returns_to_attract_after_grace() {
        let (mut game, mut handles) = playing_game(4);
        let input = InputState::default();
        game.update(&input, &mut handles, 0.016);
        for wave in 1..=WAVES.len() {
            assert_eq!(game.current_wave(), wave);
            game.world_mut().kill_all_enemies(&mut handles.rng);
            game.update(&input, &mut handles, 0.016);
        }
        assert_eq!(game.mode(), Mode::WaveClearedPendingAdvance);
        game.world_mut().ship.as_mut().unwrap().add_score(7);

        let frames = (RESET_GRACE_SECONDS / 0.016) as usize - 2;
        for _ in 0..frames {
            game.update(&input, &mut handles, 0.016);
        }
        assert_eq!(game.mode(), Mode::WaveClearedPendingAdvance);
        for _ in 0..4 {
            game.update(&input, &mut handles, 0.016);
        }
        assert!(game.is_attract_mode());
        assert_eq!(
            game.take_finished_run(),
            Some(FinishedRun {
                name: "ACE".into(),
                score: 7
            })
        );
        assert_eq!(game.current_wave(), 0);
    }

    #[test]
    fn respawn_keeps_score_and_needs_lives() {
        let (mut game, mut handles) = playing_game(1);
        game.update(&InputState::default(), &mut handles, 0.016);
        let ship = game.world_mut().ship.as_mut().unwrap();
        ship.add_score(120);
        ship.core_mut().kill();
        assert!(game.respawn_player());
        assert_eq!(game.score(), 120);
        assert_eq!(game.player_health(), 1);
        assert!(!game.respawn_player());
    }

    #[test]
    fn fire_spawns_bullet_at_muzzle() {
        let (mut game, mut handles) = playing_game(1);
        let mut input = InputState::default();
        game.update(&input, &mut handles, 0.016);
        game.world_mut().boxes.clear();
        input.press(Key::Space);
        game.update(&input, &mut handles, 0.0);
        assert_eq!(game.world().bullets.len(), 1);
        let bullet = game.world().bullets.values().next().unwrap();
        assert_eq!(bullet.core().position, vec2(PLAYER_SHIP_START_X + 1.0, PLAYER_SHIP_START_Y));
        assert!(handles.audio.pending().contains(&SoundId::BulletFired));
    }

    #[test]
    fn hard_reset_without_score_records_nothing() {
        let (mut game, mut handles) = playing_game(1);
        game.update(&InputState::default(), &mut handles, 0.016);
        game.hard_reset();
        assert!(game.is_attract_mode());
        assert!(game.take_finished_run().is_none());
        assert!(game.world().boxes.is_empty());
    }
}
