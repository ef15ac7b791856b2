use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::menu::{AttractMenu, MenuButton};
use crate::scoreboard::{Scoreboard, MAX_NAME_LEN};

const BANNER: &str = r#"
 ╔══════════════════════════════════════════════════════════════════════╗
 ║  ███████╗████████╗ █████╗ ██████╗ ███████╗██╗  ██╗██╗██████╗        ║
 ║  ██╔════╝╚══██╔══╝██╔══██╗██╔══██╗██╔════╝██║  ██║██║██╔══██╗       ║
 ║  ███████╗   ██║   ███████║██████╔╝███████╗███████║██║██████╔╝       ║
 ║  ╚════██║   ██║   ██╔══██║██╔══██╗╚════██║██╔══██║██║██╔═══╝        ║
 ║  ███████║   ██║   ██║  ██║██║  ██║███████║██║  ██║██║██║            ║
 ║  ╚══════╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝╚═╝╚═╝            ║
 ╚══════════════════════════════════════════════════════════════════════╝"#;

const PANEL_BG: Color = Color::Rgb(15, 15, 25);
const KEY_COLOR: Color = Color::Rgb(80, 200, 255);
const TEXT_COLOR: Color = Color::Rgb(140, 140, 140);
const GOLD: Color = Color::Rgb(255, 220, 80);

fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(4));
    let h = h.min(area.height.saturating_sub(4));
    Rect::new(
        area.x + area.width.saturating_sub(w) / 2,
        area.y + area.height.saturating_sub(h) / 2,
        w,
        h,
    )
}

fn control_line(keys: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("    {keys:<17}"), Style::default().fg(KEY_COLOR)),
        Span::styled(what, Style::default().fg(TEXT_COLOR)),
    ])
}

fn render_button(frame: &mut Frame, area: Rect, button: MenuButton, selected: bool) {
    let (border, text) = if selected {
        (GOLD, Color::Rgb(255, 255, 255))
    } else {
        (Color::Rgb(60, 60, 80), Color::Rgb(100, 100, 100))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected { BorderType::Double } else { BorderType::Rounded })
        .border_style(Style::default().fg(border));
    let label = if selected {
        format!("▶ {} ◀", button.label())
    } else {
        button.label().to_string()
    };
    let p = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(text).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(p, area);
}

pub fn render_attract(
    frame: &mut Frame,
    area: Rect,
    menu: &AttractMenu,
    scoreboard: &Scoreboard,
    high_score: u32,
    name_input: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Banner
            Constraint::Length(2),  // Subtitle
            Constraint::Length(6),  // Buttons
            Constraint::Min(8),     // Controls
            Constraint::Length(2),  // Footer
        ])
        .split(area);

    let banner = Paragraph::new(BANNER)
        .style(Style::default().fg(Color::Rgb(102, 153, 204)))
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let subtitle = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("  High score: {high_score}  "),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    let button_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(chunks[2]);
    let button_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(button_cols[1].union(button_cols[2]));
    for (button, row) in MenuButton::ALL.iter().zip(button_rows.iter()) {
        render_button(frame, *row, *button, menu.selected == *button);
    }

    let controls = Paragraph::new(vec![
        Line::from(""),
        control_line("W / ↑", "Thrust"),
        control_line("A D / ← →", "Turn"),
        control_line("Space", "Fire"),
        control_line("N", "Respawn (lives permitting)"),
        control_line("P / O / hold T", "Pause / step / slow motion"),
        control_line("Esc", "Abandon run"),
        control_line("F1 F4 F8 I", "Debug draw, clear wave, reset, asteroid"),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
            .title(" ⌨ Controls ")
            .title_style(Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(controls, chunks[3]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        Span::styled(" Select  ", Style::default().fg(Color::Rgb(100, 100, 130))),
        Span::styled("Enter / Space", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        Span::styled(" Choose  ", Style::default().fg(Color::Rgb(100, 100, 130))),
        Span::styled("Esc", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        Span::styled(" Quit", Style::default().fg(Color::Rgb(100, 100, 130))),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[4]);

    if menu.show_scoreboard {
        render_scoreboard_overlay(frame, area, scoreboard);
    }
    if name_input {
        render_name_entry(frame, area, &menu.name);
    }
}

fn render_scoreboard_overlay(frame: &mut Frame, area: Rect, scoreboard: &Scoreboard) {
    let overlay_area = centered(area, 44, 30);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 200, 80)))
        .title(" 🏆 Scoreboard ")
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(PANEL_BG));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let medal_colors = [
        Color::Rgb(255, 215, 0),   // Gold
        Color::Rgb(192, 192, 192), // Silver
        Color::Rgb(205, 127, 50),  // Bronze
    ];

    let mut lines: Vec<Line> = vec![Line::from("")];
    let rows = (inner.height as usize).saturating_sub(3);
    if scoreboard.entries().is_empty() {
        lines.push(Line::from(Span::styled(
            "    No scores yet",
            Style::default().fg(Color::Rgb(60, 60, 80)),
        )));
    }
    for entry in scoreboard.entries().iter().take(rows) {
        let score_color = medal_colors
            .get(entry.rank - 1)
            .copied()
            .unwrap_or(Color::Rgb(200, 200, 220));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>3}. ", entry.rank), Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled(
                format!("{:<width$} ", entry.name, width = MAX_NAME_LEN),
                Style::default().fg(Color::Rgb(200, 200, 220)),
            ),
            Span::styled(
                entry.score.to_string(),
                Style::default().fg(score_color).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Choose ", Style::default().fg(Color::Rgb(80, 80, 100))),
        Span::styled("SCORES", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        Span::styled(" again to close", Style::default().fg(Color::Rgb(80, 80, 100))),
    ]));

    let p = Paragraph::new(lines).style(Style::default().bg(PANEL_BG));
    frame.render_widget(p, inner);
}

fn render_name_entry(frame: &mut Frame, area: Rect, name: &str) {
    let overlay_area = centered(area, 44, 11);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(GOLD))
        .title(" 🚀 NEW PILOT ")
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(PANEL_BG));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    // Typed chars, then underscores for the remaining room
    let typed_len = name.chars().count();
    let display_name = format!("{}{}", name, "_".repeat(MAX_NAME_LEN.saturating_sub(typed_len)));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter your name:", Style::default().fg(Color::Rgb(180, 180, 200))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    [ ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled(display_name, Style::default().fg(Color::Rgb(255, 255, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" ]", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  A-Z 0-9", Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD)),
            Span::styled(" type  ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled("Enter", Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD)),
            Span::styled(" launch  ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled("Esc", Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD)),
            Span::styled(" back", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
    ];

    let p = Paragraph::new(lines).style(Style::default().bg(PANEL_BG));
    frame.render_widget(p, inner);
}
