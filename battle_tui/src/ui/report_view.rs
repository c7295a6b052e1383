//! The report screen shown after an encounter resolves

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.report else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(
            "Battle over after {} rounds ({} attacks)",
            report.rounds, report.attacks_resolved
        ),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    match &report.winner {
        Some(team) => lines.push(Line::from(Span::styled(
            format!("Winner: {team}"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))),
        None => lines.push(Line::from(Span::styled(
            "No winner yet",
            Style::default().fg(Color::Gray),
        ))),
    }
    lines.push(Line::default());

    for fallen in &report.fallen {
        lines.push(Line::from(Span::styled(
            format!("✝ {} fell in battle", fallen.name),
            Style::default().fg(Color::Red),
        )));
    }
    for gain in &report.experience {
        let text = if gain.levelled_up {
            format!(
                "{} gains {} exp and reaches level {}",
                gain.unit, gain.points, gain.new_level
            )
        } else {
            format!("{} gains {} exp", gain.unit, gain.points)
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Green),
        )));
    }
    for broken in &report.broken_weapons {
        lines.push(Line::from(Span::styled(
            format!("{}'s {} is broken", broken.unit, broken.weapon),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Results "))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
