//! Per-frame keyboard and controller state.
//!
//! Terminals without the keyboard enhancement protocol never report key
//! releases, so held keys also expire after `hold_timeout` without a fresh
//! press or repeat.

use std::collections::{HashMap, HashSet};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::sim::math::{orientation_degrees, Vec2};
use crate::sim::ship::ShipIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    Backspace,
    F(u8),
    /// Letters are stored uppercase.
    Char(char),
}

impl Key {
    pub fn from_code(code: KeyCode) -> Option<Key> {
        let key = match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::F(n) => Key::F(n),
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c.to_ascii_uppercase()),
            _ => return None,
        };
        Some(key)
    }

    /// The glyph this key contributes to a player name, if any.
    pub fn name_glyph(&self) -> Option<char> {
        match self {
            Key::Char(c) if c.is_ascii_uppercase() || c.is_ascii_digit() => Some(*c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    A,
    Start,
    Back,
    DpadUp,
    DpadDown,
}

/// Edge-tracked set of "buttons" of any kind.
#[derive(Debug, Clone)]
struct Buttons<K> {
    held: HashMap<K, f32>,
    pressed: HashSet<K>,
    released: HashSet<K>,
}

impl<K> Default for Buttons<K> {
    fn default() -> Self {
        Self {
            held: HashMap::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
        }
    }
}

impl<K: Copy + Eq + std::hash::Hash> Buttons<K> {
    fn press(&mut self, k: K) {
        // A repeat refreshes the hold age without a new edge.
        if self.held.insert(k, 0.0).is_none() {
            self.pressed.insert(k);
        }
    }

    fn release(&mut self, k: K) {
        if self.held.remove(&k).is_some() {
            self.released.insert(k);
        }
    }

    fn end_frame(&mut self, dt: f32, hold_timeout: Option<f32>) {
        self.pressed.clear();
        self.released.clear();
        let Some(timeout) = hold_timeout else {
            return;
        };
        let mut expired = Vec::new();
        for (k, age) in self.held.iter_mut() {
            *age += dt;
            if *age >= timeout {
                expired.push(*k);
            }
        }
        for k in expired {
            self.held.remove(&k);
            self.released.insert(k);
        }
    }

    fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
        self.released.clear();
    }
}

/// Gamepad state. The terminal front end has no gamepad, so only callers
/// that own one (or tests) feed it; the game reads it alongside the keys.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    buttons: Buttons<ControllerButton>,
    pub left_stick: Vec2,
}

impl ControllerState {
    pub fn press(&mut self, b: ControllerButton) {
        self.buttons.press(b);
    }

    pub fn release(&mut self, b: ControllerButton) {
        self.buttons.release(b);
    }

    pub fn is_button_down(&self, b: ControllerButton) -> bool {
        self.buttons.held.contains_key(&b)
    }

    pub fn was_button_just_pressed(&self, b: ControllerButton) -> bool {
        self.buttons.pressed.contains(&b)
    }

    pub fn was_button_just_released(&self, b: ControllerButton) -> bool {
        self.buttons.released.contains(&b)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: Buttons<Key>,
    pub controller: ControllerState,
    hold_timeout: Option<f32>,
}

impl InputState {
    /// `hold_timeout` in seconds; `None` when the terminal reports releases.
    pub fn new(hold_timeout: Option<f32>) -> Self {
        Self {
            hold_timeout,
            ..Self::default()
        }
    }

    pub fn press(&mut self, key: Key) {
        self.keys.press(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.release(key);
    }

    pub fn handle_key_event(&mut self, event: KeyEvent) {
        let Some(key) = Key::from_code(event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Release => self.release(key),
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key),
        }
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys.held.contains_key(&key)
    }

    pub fn was_key_just_pressed(&self, key: Key) -> bool {
        self.keys.pressed.contains(&key)
    }

    pub fn was_key_just_released(&self, key: Key) -> bool {
        self.keys.released.contains(&key)
    }

    pub fn just_pressed(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.pressed.iter().copied()
    }

    /// Close out a frame: edges are consumed, stale holds expire into releases.
    pub fn end_frame(&mut self, dt: f32) {
        self.keys.end_frame(dt, self.hold_timeout);
        self.controller.buttons.end_frame(dt, self.hold_timeout);
    }

    /// Forget every key and button, e.g. when the game switches modes.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.controller.buttons.clear();
        self.controller.left_stick = Vec2::zeros();
    }

    pub fn ship_intent(&self) -> ShipIntent {
        let mut intent = ShipIntent {
            turn_left: self.is_key_down(Key::Char('A')) || self.is_key_down(Key::Left),
            turn_right: self.is_key_down(Key::Char('D')) || self.is_key_down(Key::Right),
            thrust: 0.0,
            stick_heading: None,
            fire_pressed: self.was_key_just_pressed(Key::Space)
                || self.controller.was_button_just_pressed(ControllerButton::A),
            fire_held: self.is_key_down(Key::Space) || self.controller.is_button_down(ControllerButton::A),
        };

        let stick = self.controller.left_stick;
        let magnitude = stick.norm().min(1.0);
        if self.is_key_down(Key::Char('W')) || self.is_key_down(Key::Up) {
            intent.thrust = 1.0;
        } else if magnitude > 0.0 {
            intent.thrust = magnitude;
            intent.stick_heading = Some(orientation_degrees(&stick));
        }
        intent
    }
}
