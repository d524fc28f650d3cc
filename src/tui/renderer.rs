use crate::engine::world::{GameState, World};
use crate::map::{HUD_PX, SCREEN_PX};
use crate::tui::surface::PixelSurface;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, world: &World) {
    let size = f.size();
    f.render_widget(Clear, size);

    if size.width < 20 || size.height < 10 {
        let msg = Paragraph::new("Terminal too small — resize to play.")
            .block(Block::default().borders(Borders::ALL).title("Riverlands"))
            .wrap(Wrap { trim: true });
        f.render_widget(msg, size);
        return;
    }

    match world.state {
        GameState::Title => draw_title(f, size),
        GameState::Playing => draw_playing(f, size, world),
    }
}

fn draw_title(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RIVERLANDS",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("A small stretch of wilderness, seen from above."),
        Line::from(""),
        Line::from("[F] Familiar ground    [P] Uncharted wilds"),
        Line::from(""),
        Line::from("Ctrl+C to quit"),
    ];

    let title = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(title, area);
}

fn draw_playing(f: &mut Frame, size: Rect, world: &World) {
    let log_h = (size.height / 4).clamp(5, 10);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(log_h)])
        .split(size);

    let top = vertical[0];
    let bottom = vertical[1];

    let sidebar_w = (top.width / 3).clamp(20, 34);

    if top.width < sidebar_w + 25 {
        let stacked = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(9)])
            .split(top);

        draw_map(f, stacked[0], world);
        draw_sidebar(f, stacked[1], world);
    } else {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(sidebar_w)])
            .split(top);

        draw_map(f, horizontal[0], world);
        draw_sidebar(f, horizontal[1], world);
    }

    draw_logs(f, bottom, world);
}

/// Render the map by letting it paint the pixel surface, then sampling the
/// framebuffer back out at terminal-cell resolution (nearest neighbor).
fn draw_map(f: &mut Frame, area: Rect, world: &World) {
    f.render_widget(Clear, area);

    let inner_w = (area.width as i32).saturating_sub(2).max(1);
    let inner_h = (area.height as i32).saturating_sub(2).max(1);

    let mut surface = PixelSurface::new(SCREEN_PX, SCREEN_PX + HUD_PX);
    world.map.draw(&mut surface);

    // Player cell under the same cell -> pixel mapping used for sampling.
    let ts = world.map.tile_px;
    let player_px = world.player.x * ts + ts / 2;
    let player_py = world.player.y * ts + ts / 2;
    let player_cell = (
        player_px * inner_w / SCREEN_PX,
        player_py * inner_h / SCREEN_PX,
    );

    let mut lines: Vec<Line> = Vec::with_capacity(inner_h as usize);

    for cy in 0..inner_h {
        let mut spans: Vec<Span> = Vec::with_capacity(inner_w as usize);

        for cx in 0..inner_w {
            let sx = cx * SCREEN_PX / inner_w;
            let sy = HUD_PX + cy * SCREEN_PX / inner_h;
            let bg = palette_color(surface.get(sx, sy));

            if (cx, cy) == player_cell {
                let fg = if world.player.is_confused() {
                    Color::Magenta
                } else {
                    Color::Yellow
                };
                spans.push(Span::styled(
                    "@",
                    Style::default()
                        .fg(fg)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(" ", Style::default().bg(bg)));
            }
        }

        lines.push(Line::from(spans));
    }

    let map_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Map"))
        .wrap(Wrap { trim: false });

    f.render_widget(map_widget, area);
}

fn draw_sidebar(f: &mut Frame, area: Rect, world: &World) {
    f.render_widget(Clear, area);

    let p = &world.player;
    let mode = if world.procedural {
        "Uncharted wilds"
    } else {
        "Familiar ground"
    };

    let head = if p.is_confused() {
        Span::styled(
            format!("Confused ({})", p.confusion),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Clear", Style::default().fg(Color::Green))
    };

    let text: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("HP: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}/{}", p.hp, p.max_hp),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(format!("Pos: ({}, {})", p.x, p.y)),
        Line::from(vec![Span::raw("Head: "), head]),
        Line::from(""),
        Line::from(format!("Land: {}", mode)),
        Line::from(format!("Seed: {}", world.seed)),
        Line::from(""),
        Line::from("WASD/arrows to move"),
        Line::from("R to reshape (wilds only)"),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Traveler"))
        .wrap(Wrap { trim: true });

    f.render_widget(widget, area);
}

fn draw_logs(f: &mut Frame, area: Rect, world: &World) {
    let lines: Vec<Line> = world.logs.iter().map(|l| Line::from(l.clone())).collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Log"))
        .wrap(Wrap { trim: true });

    f.render_widget(widget, area);
}

/// Retro palette. Only a handful of indices are in use; unknown indices
/// fall back to black.
fn palette_color(idx: u8) -> Color {
    match idx {
        3 => Color::Rgb(80, 160, 64),    // grass green
        4 => Color::Rgb(139, 90, 43),    // dirt brown
        5 => Color::Rgb(95, 87, 79),     // stone dark gray
        6 => Color::Rgb(168, 168, 176),  // rock light gray
        7 => Color::Rgb(255, 241, 232),  // white
        10 => Color::Rgb(222, 194, 123), // sand
        11 => Color::Rgb(106, 190, 48),  // tree light green
        12 => Color::Rgb(68, 132, 212),  // water blue
        13 => Color::Rgb(117, 113, 97),  // overlay gray
        _ => Color::Rgb(0, 0, 0),
    }
}
