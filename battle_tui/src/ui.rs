//! UI rendering

mod battle_view;
mod report_view;
mod roster_view;

use crate::app::{App, Screen};
use battle_core::Unit;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    match app.screen {
        Screen::Roster => roster_view::draw(f, app, chunks[0]),
        Screen::Battle => battle_view::draw(f, app, chunks[0]),
        Screen::Report => report_view::draw(f, app, chunks[0]),
    }

    draw_keybindings(f, app, chunks[1]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let keys: Vec<(&str, &str)> = match app.screen {
        Screen::Roster => vec![("a", "Battle"), ("q", "Quit")],
        Screen::Battle => vec![("↑/↓", "Scroll log"), ("q", "Quit")],
        Screen::Report => vec![("s", "Save report"), ("r", "Rosters"), ("q", "Quit")],
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }
    if let Some(status) = &app.status {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(Color::Magenta),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Team display color
pub fn team_color(color: (u8, u8, u8)) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Text life bar in the style of a handheld tactics game
pub fn life_bar(current: u32, max: u32, width: u16) -> Paragraph<'static> {
    let filled = if max > 0 {
        (current as usize * width as usize) / max as usize
    } else {
        0
    };
    let empty = width as usize - filled;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));
    let color = match current * 100 / max.max(1) {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };
    Paragraph::new(bar).style(Style::default().fg(color))
}

/// The stat lines shown in a unit panel
pub fn unit_stat_lines(unit: &Unit) -> Vec<Line<'static>> {
    let stat = |name: &str, value: u32| {
        Line::from(vec![
            Span::styled(format!("{:8}", name), Style::default().fg(Color::Gray)),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
        ])
    };
    let mut lines = vec![
        stat("Lv", unit.level),
        stat("Exp", unit.experience),
        stat("Str", unit.strength),
        stat("Skill", unit.skill),
        stat("Spd", unit.speed),
        stat("Luck", unit.luck),
        stat("Def", unit.defence),
        stat("Res", unit.resistance),
    ];
    match unit.active_weapon() {
        Some(weapon) => lines.push(Line::from(vec![
            Span::styled("Weapon  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} ({} uses)", weapon.name, weapon.uses),
                Style::default().fg(Color::Cyan),
            ),
        ])),
        None => lines.push(Line::from(Span::styled(
            "Weapon  none",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    lines
}
