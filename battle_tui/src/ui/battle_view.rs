//! The battle screen: two unit panels, the lunge animation, and the log

use crate::app::App;
use crate::ui::{life_bar, team_color, unit_stat_lines};
use battle_core::{Phase, Side, Unit};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(encounter) = &app.encounter else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Round / phase banner
            Constraint::Min(12),    // Unit panels
            Constraint::Length(10), // Battle log
        ])
        .split(area);

    draw_banner(f, app, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_unit_panel(f, app, panels[0], encounter.attacker(), Side::Attacker);
    draw_unit_panel(f, app, panels[1], encounter.defender(), Side::Defender);

    draw_log(f, app, chunks[2]);
}

fn draw_banner(f: &mut Frame, app: &App, area: Rect) {
    let Some(encounter) = &app.encounter else {
        return;
    };
    let phase = match encounter.phase() {
        Phase::Advance => "advance",
        Phase::Retreat => "retreat",
        Phase::BrokenNotice { .. } => "weapon broken!",
        Phase::Cooldown { .. } => "settling",
        Phase::Done => "done",
    };
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Round {} ", encounter.round()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {phase} "), Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Battle "))
    .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

fn draw_unit_panel(f: &mut Frame, app: &App, area: Rect, unit: &Unit, side: Side) {
    let color = unit
        .team
        .as_deref()
        .and_then(|team| app.teams.iter().find(|t| t.name == team))
        .map(|team| team_color(team.color))
        .unwrap_or(Color::White);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", unit.name),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // lunge marker
            Constraint::Length(1), // HP numbers
            Constraint::Length(1), // life bar
            Constraint::Min(0),    // stats
        ])
        .split(inner);

    draw_lunge(f, app, rows[0], side);

    let hp = Paragraph::new(format!("HP {}/{}", unit.health, unit.health_max))
        .style(Style::default().fg(Color::White));
    f.render_widget(hp, rows[1]);
    f.render_widget(life_bar(unit.health, unit.health_max, inner.width.saturating_sub(2)), rows[2]);

    let stats = Paragraph::new(unit_stat_lines(unit));
    f.render_widget(stats, rows[3]);
}

/// A small marker that slides across the panel while this side swings.
fn draw_lunge(f: &mut Frame, app: &App, area: Rect, side: Side) {
    if app.animating != side {
        return;
    }
    let travel = area.width.saturating_sub(3) as f32;
    let offset = (app.tween.fraction(app.constants.animation_cycle_ms) * travel) as usize;
    // the attacker lunges right, the defender left
    let marker = match side {
        Side::Attacker => format!("{}⚔", " ".repeat(offset)),
        Side::Defender => {
            let pad = travel as usize - offset.min(travel as usize);
            format!("{}⚔", " ".repeat(pad))
        }
    };
    f.render_widget(
        Paragraph::new(marker).style(Style::default().fg(Color::Yellow)),
        area,
    );
}

fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    // follow the tail, with log_scroll lines of look-back
    let visible = area.height.saturating_sub(2) as usize;
    let end = app.log.len().saturating_sub(app.log_scroll);
    let start = end.saturating_sub(visible);
    let items: Vec<ListItem> = app.log[start..end]
        .iter()
        .map(|line| ListItem::new(line.clone()))
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Log "));
    f.render_widget(list, area);
}
