//! Attract-mode menu and player name entry.

use crate::input::{ControllerButton, InputState, Key};
use crate::scoreboard::MAX_NAME_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Scores,
}

impl MenuButton {
    pub const ALL: [MenuButton; 2] = [MenuButton::Start, MenuButton::Scores];

    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::Start => "START",
            MenuButton::Scores => "SCORES",
        }
    }

    fn other(self) -> Self {
        match self {
            MenuButton::Start => MenuButton::Scores,
            MenuButton::Scores => MenuButton::Start,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    BeginNameEntry,
    CancelNameEntry,
    StartGame(String),
    ToggleScoreboard,
    Quit,
}

#[derive(Debug, Clone)]
pub struct AttractMenu {
    pub selected: MenuButton,
    pub name: String,
    pub show_scoreboard: bool,
}

impl Default for AttractMenu {
    fn default() -> Self {
        Self {
            selected: MenuButton::Start,
            name: String::new(),
            show_scoreboard: false,
        }
    }
}

impl AttractMenu {
    /// React to this frame's input. `name_input` is whether the name prompt
    /// is open.
    pub fn update(&mut self, input: &InputState, name_input: bool) -> Option<MenuAction> {
        if name_input {
            return self.update_name_entry(input);
        }

        if input.was_key_just_pressed(Key::Esc) {
            return Some(MenuAction::Quit);
        }
        if input.was_key_just_pressed(Key::Up)
            || input.was_key_just_pressed(Key::Down)
            || input.controller.was_button_just_pressed(ControllerButton::DpadUp)
            || input.controller.was_button_just_pressed(ControllerButton::DpadDown)
        {
            self.selected = self.selected.other();
        }

        let confirm = input.was_key_just_released(Key::Space)
            || input.was_key_just_pressed(Key::Enter)
            || input.controller.was_button_just_pressed(ControllerButton::A)
            || input.controller.was_button_just_pressed(ControllerButton::Start);
        if !confirm {
            return None;
        }
        match self.selected {
            MenuButton::Start => {
                self.name.clear();
                self.show_scoreboard = false;
                Some(MenuAction::BeginNameEntry)
            }
            MenuButton::Scores => {
                self.show_scoreboard = !self.show_scoreboard;
                Some(MenuAction::ToggleScoreboard)
            }
        }
    }

    fn update_name_entry(&mut self, input: &InputState) -> Option<MenuAction> {
        if input.was_key_just_pressed(Key::Esc)
            || input.controller.was_button_just_pressed(ControllerButton::Back)
        {
            self.name.clear();
            return Some(MenuAction::CancelNameEntry);
        }
        if input.was_key_just_pressed(Key::Enter)
            || input.controller.was_button_just_pressed(ControllerButton::Start)
        {
            return Some(MenuAction::StartGame(self.name.clone()));
        }
        if input.was_key_just_pressed(Key::Backspace) {
            self.name.pop();
        }

        let mut typed: Vec<char> = input.just_pressed().filter_map(|k| k.name_glyph()).collect();
        // Several keys in one frame have no order; keep the result stable.
        typed.sort_unstable();
        for c in typed {
            if self.name.chars().count() < MAX_NAME_LEN {
                self.name.push(c);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(key: Key) -> InputState {
        let mut input = InputState::new(None);
        input.press(key);
        input
    }

    #[test]
    fn arrows_toggle_selection() {
        let mut menu = AttractMenu::default();
        menu.update(&tap(Key::Down), false);
        assert_eq!(menu.selected, MenuButton::Scores);
        menu.update(&tap(Key::Up), false);
        assert_eq!(menu.selected, MenuButton::Start);
    }

    #[test]
    fn enter_on_start_opens_name_entry() {
        let mut menu = AttractMenu::default();
        assert_eq!(menu.update(&tap(Key::Enter), false), Some(MenuAction::BeginNameEntry));
    }

    #[test]
    fn space_release_on_scores_toggles_board() {
        let mut menu = AttractMenu {
            selected: MenuButton::Scores,
            ..Default::default()
        };
        let mut input = tap(Key::Space);
        input.end_frame(0.016);
        input.release(Key::Space);
        assert_eq!(menu.update(&input, false), Some(MenuAction::ToggleScoreboard));
        assert!(menu.show_scoreboard);
    }

    #[test]
    fn name_entry_accepts_letters_and_digits_only() {
        let mut menu = AttractMenu::default();
        for key in [Key::Char('A'), Key::Char('7'), Key::Char('-'), Key::Space] {
            menu.update(&tap(key), true);
        }
        assert_eq!(menu.name, "A7");
        menu.update(&tap(Key::Backspace), true);
        assert_eq!(menu.name, "A");
        assert_eq!(
            menu.update(&tap(Key::Enter), true),
            Some(MenuAction::StartGame("A".into()))
        );
    }

    #[test]
    fn name_is_capped() {
        let mut menu = AttractMenu::default();
        for _ in 0..(MAX_NAME_LEN + 5) {
            menu.update(&tap(Key::Char('Z')), true);
        }
        assert_eq!(menu.name.len(), MAX_NAME_LEN);
    }

    #[test]
    fn escape_quits_from_menu_but_cancels_name_entry() {
        let mut menu = AttractMenu::default();
        assert_eq!(menu.update(&tap(Key::Esc), false), Some(MenuAction::Quit));
        assert_eq!(menu.update(&tap(Key::Esc), true), Some(MenuAction::CancelNameEntry));
    }
}
