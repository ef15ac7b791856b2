use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};

use crate::audio::TerminalAudio;
use crate::config::GameConfig;
use crate::input::{InputState, Key};
use crate::menu::{AttractMenu, MenuAction};
use crate::scoreboard::Scoreboard;
use crate::sim::constants::SLOW_MO_SCALE;
use crate::sim::{EngineHandles, Game, GameRng};

const MAX_FRAME_SECONDS: f32 = 0.1;
const NOMINAL_FRAME_SECONDS: f32 = 1.0 / 60.0;

pub struct App {
    pub should_quit: bool,
    pub game: Game,
    pub menu: AttractMenu,
    pub scoreboard: Scoreboard,
    pub paused: bool,
    pub slow_mo: bool,
    input: InputState,
    handles: EngineHandles,
    audio: TerminalAudio,
    last_tick: Option<Instant>,
}

impl App {
    /// `reports_releases` is whether the terminal sends key-release events.
    pub fn new(config: &GameConfig, reports_releases: bool) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                info!("using fixed seed {seed}");
                GameRng::seeded(seed)
            }
            None => GameRng::from_entropy(),
        };
        let hold_timeout = (!reports_releases).then(|| config.hold_timeout_secs());
        let scoreboard = Scoreboard::load(config.scoreboard_path.clone());
        let mut game = Game::new(config);
        game.set_high_score(scoreboard.high_score());

        Self {
            should_quit: false,
            game,
            menu: AttractMenu::default(),
            scoreboard,
            paused: false,
            slow_mo: false,
            input: InputState::new(hold_timeout),
            handles: EngineHandles::new(rng),
            audio: TerminalAudio::new(config.audio.bell),
            last_tick: None,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        self.input.handle_key_event(key);
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();
        let dt = self
            .last_tick
            .map_or(NOMINAL_FRAME_SECONDS, |t| now.duration_since(t).as_secs_f32())
            .min(MAX_FRAME_SECONDS);
        self.last_tick = Some(now);
        self.frame(dt);
    }

    /// Run one frame of `dt` real seconds.
    pub fn frame(&mut self, dt: f32) {
        if self.game.is_attract_mode() {
            let name_input = self.game.is_player_name_input_mode();
            if let Some(action) = self.menu.update(&self.input, name_input) {
                self.apply_menu_action(action);
            }
        } else {
            self.play_frame(dt);
        }

        if let Some(run) = self.game.take_finished_run() {
            self.record_run(&run.name, run.score);
        }
        let cues = self.handles.audio.drain();
        self.audio.play_all(&cues);
        self.input.end_frame(dt);
    }

    fn play_frame(&mut self, dt: f32) {
        if self.input.was_key_just_pressed(Key::Esc) || self.input.was_key_just_pressed(Key::F(8)) {
            self.game.hard_reset();
            self.input.clear();
            self.paused = false;
            return;
        }
        if self.input.was_key_just_pressed(Key::Char('P')) {
            self.paused = !self.paused;
        }
        self.slow_mo = self.input.is_key_down(Key::Char('T'));

        let step = self.input.was_key_just_pressed(Key::Char('O'));
        if self.paused && !step {
            return;
        }
        let mut sim_dt = if step { NOMINAL_FRAME_SECONDS } else { dt };
        if self.slow_mo {
            sim_dt *= SLOW_MO_SCALE;
        }
        self.game.update(&self.input, &mut self.handles, sim_dt);
    }

    fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::BeginNameEntry => self.game.set_player_name_input_mode(true),
            MenuAction::CancelNameEntry => self.game.set_player_name_input_mode(false),
            MenuAction::StartGame(name) => {
                let name = if name.is_empty() { "???".to_string() } else { name };
                self.game.start_playing(&name, &mut self.handles);
                self.input.clear();
            }
            MenuAction::ToggleScoreboard => {}
            MenuAction::Quit => self.should_quit = true,
        }
    }

    fn record_run(&mut self, name: &str, score: u32) {
        if let Some(rank) = self.scoreboard.add_score(name, score) {
            info!("{name} placed #{rank} with {score}");
        }
        if let Err(err) = self.scoreboard.save() {
            warn!("{err}");
        }
        self.game.set_high_score(self.scoreboard.high_score());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Entity;
    use crossterm::event::KeyEventKind;

    fn test_config(tag: &str) -> GameConfig {
        let path = std::env::temp_dir()
            .join(format!("starship-app-{tag}-{}", std::process::id()))
            .join("Scoreboard.txt");
        let _ = std::fs::remove_file(&path);
        GameConfig {
            seed: Some(99),
            scoreboard_path: path,
            ..GameConfig::default()
        }
    }

    fn key(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.frame(NOMINAL_FRAME_SECONDS);
        app.on_key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release));
    }

    fn start(app: &mut App, name: &str) {
        key(app, KeyCode::Enter);
        assert!(app.game.is_player_name_input_mode());
        for c in name.chars() {
            key(app, KeyCode::Char(c));
        }
        key(app, KeyCode::Enter);
    }

    #[test]
    fn menu_to_play_uses_typed_name() {
        let mut app = App::new(&test_config("start"), true);
        start(&mut app, "ace1");
        assert!(!app.game.is_attract_mode());
        assert_eq!(app.game.player_name(), "ACE1");
    }

    #[test]
    fn hard_reset_records_scored_run() {
        let config = test_config("reset");
        let mut app = App::new(&config, true);
        start(&mut app, "zed");
        app.game.world_mut().ship.as_mut().unwrap().add_score(42);
        key(&mut app, KeyCode::F(8));

        assert!(app.game.is_attract_mode());
        assert_eq!(app.scoreboard.high_score(), 42);
        let reloaded = Scoreboard::load(config.scoreboard_path.clone());
        assert_eq!(reloaded.entries()[0].name, "ZED");
        let _ = std::fs::remove_file(&config.scoreboard_path);
    }

    #[test]
    fn pause_freezes_and_step_advances() {
        let mut app = App::new(&test_config("pause"), true);
        start(&mut app, "P");
        app.game.world_mut().ship.as_mut().unwrap().core_mut().velocity.x = 6.0;
        key(&mut app, KeyCode::Char('p'));
        let before = app.game.world().ship.as_ref().unwrap().core().position;
        app.frame(NOMINAL_FRAME_SECONDS);
        assert_eq!(app.game.world().ship.as_ref().unwrap().core().position, before);
        key(&mut app, KeyCode::Char('o'));
        assert!(app.game.world().ship.as_ref().unwrap().core().position.x > before.x);
    }

    #[test]
    fn hard_reset_drops_held_keys() {
        let mut app = App::new(&test_config("held"), true);
        start(&mut app, "H");
        app.on_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        app.frame(NOMINAL_FRAME_SECONDS);
        assert!(app.input.is_key_down(Key::Up));
        key(&mut app, KeyCode::F(8));
        assert!(app.game.is_attract_mode());
        assert!(!app.input.is_key_down(Key::Up));
    }

    #[test]
    fn escape_in_menu_quits() {
        let mut app = App::new(&test_config("quit"), true);
        key(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
