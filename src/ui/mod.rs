pub mod attract;
pub mod canvas;
pub mod playfield;

use ratatui::prelude::*;

use crate::app::App;
use playfield::HudFlags;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if app.game.is_attract_mode() {
        attract::render_attract(
            frame,
            area,
            &app.menu,
            &app.scoreboard,
            app.game.high_score(),
            app.game.is_player_name_input_mode(),
        );
    } else {
        let flags = HudFlags {
            paused: app.paused,
            slow_mo: app.slow_mo,
        };
        playfield::render_playfield(frame, area, &app.game, &flags);
    }
}
