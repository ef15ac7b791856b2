use ratatui::prelude::*;
use ratatui::widgets::*;

use super::canvas::BrailleCanvas;
use crate::sim::waves::Mode;
use crate::sim::Game;

pub struct HudFlags {
    pub paused: bool,
    pub slow_mo: bool,
}

fn separator() -> Span<'static> {
    Span::styled(" | ", Style::default().fg(Color::DarkGray))
}

fn status_line(game: &Game) -> Line<'static> {
    let lives_str = "\u{2666} ".repeat(game.lives() as usize);
    Line::from(vec![
        Span::styled(" \u{2604} ", Style::default()),
        Span::styled(
            format!("{} ", game.player_name()),
            Style::default().fg(Color::Rgb(102, 153, 204)).add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::styled(
            format!("Score: {} ", game.score()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::styled(
            format!("Lives: {lives_str}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::styled(format!("High: {} ", game.high_score()), Style::default().fg(Color::Cyan)),
        separator(),
        Span::styled(format!("Wave: {} ", game.current_wave()), Style::default().fg(Color::Green)),
        separator(),
        Span::styled(
            format!("Enemies: {} ", game.world().enemies_alive()),
            Style::default().fg(Color::Rgb(160, 140, 120)),
        ),
    ])
}

fn help_line(game: &Game, flags: &HudFlags) -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::DarkGray));
    let bar = || Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60)));

    match game.mode() {
        Mode::PlayerDeadPendingReset => Line::from(vec![Span::styled(
            " GAME OVER ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )]),
        Mode::WaveClearedPendingAdvance => Line::from(vec![Span::styled(
            " ALL WAVES CLEARED ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )]),
        _ if flags.paused => Line::from(vec![Span::styled(
            " PAUSED - P to resume, O to step ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        _ if !game.world().player_is_alive() && game.lives() > 0 => Line::from(vec![Span::styled(
            " SHIP DOWN - press N to launch another ",
            Style::default().fg(Color::Rgb(255, 160, 60)).add_modifier(Modifier::BOLD),
        )]),
        _ => {
            let mut spans = vec![
                key(" \u{2190}\u{2192} Turn "),
                bar(),
                key("\u{2191} Thrust "),
                bar(),
                Span::styled("Space Fire ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                bar(),
                key("P Pause "),
                bar(),
                key("Esc Menu"),
            ];
            if flags.slow_mo {
                spans.push(Span::styled("  SLOW-MO", Style::default().fg(Color::Magenta)));
            }
            if game.is_debug_draw() {
                spans.push(Span::styled("  DEBUG", Style::default().fg(Color::Magenta)));
            }
            Line::from(spans)
        }
    }
}

pub fn render_playfield(frame: &mut Frame, area: Rect, game: &Game, flags: &HudFlags) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(100, 200, 255)))
        .title(" Starship ")
        .title_style(Style::default().fg(Color::Rgb(130, 220, 255)).add_modifier(Modifier::BOLD));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(status_line(game)), chunks[0]);

    let fw = chunks[1].width as usize;
    let fh = chunks[1].height as usize;
    if fw > 0 && fh > 0 {
        let mut canvas = BrailleCanvas::new(fw, fh);
        game.render(&mut canvas);
        frame.render_widget(Paragraph::new(canvas.into_lines()), chunks[1]);
    }

    frame.render_widget(Paragraph::new(help_line(game, flags)), chunks[2]);
}
