//! The roster screen: both teams side by side

use crate::app::App;
use crate::ui::team_color;
use battle_core::Team;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, app.teams.len().max(1) as u32);
            app.teams.len().max(1)
        ])
        .split(area);

    for (team, column) in app.teams.iter().zip(columns.iter()) {
        draw_team(f, team, *column);
    }
}

fn draw_team(f: &mut Frame, team: &Team, area: Rect) {
    let color = team_color(team.color);
    let items: Vec<ListItem> = team
        .units()
        .iter()
        .map(|unit| {
            let weapon = unit
                .active_weapon()
                .map(|weapon| format!("{} ({})", weapon.name, weapon.uses))
                .unwrap_or_else(|| "unarmed".to_string());
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:12}", unit.name),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("HP {:>2}/{:<2}  Lv {:<2}  ", unit.health, unit.health_max, unit.level),
                    Style::default().fg(Color::White),
                ),
                Span::styled(weapon, Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let title = if team.is_defeated() {
        format!(" {} (defeated) ", team.name)
    } else {
        format!(" {} ", team.name)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().fg(color))),
    );
    f.render_widget(list, area);
}
