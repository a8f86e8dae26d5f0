use macroquad::prelude::*;

use crate::application::{Session, ZoomLevel};
use crate::domain::{Grid, Pattern};
use crate::ui::{Action, Button, Dropdown, PANEL_WIDTH, Slider, canvas_height, canvas_width, panel_x};

const LIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const GHOST_COLOR: Color = Color::new(0.0, 1.0, 0.59, 0.45);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
/// Where the status lines start, below the buttons
pub const STATUS_TOP: f32 = 340.0;

const CANVAS_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);

/// Snapshot of panel state the renderer shows but does not own
pub struct PanelStatus {
    pub audio: Option<bool>,
    pub frame_ms: f32,
}

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Draw the live cells of the grid.
///
/// Only positions inside `0..height` x `0..width` are visited.
pub fn draw_grid(grid: &Grid, zoom: ZoomLevel) {
    let len = zoom.cell_length() as f32;
    let (width, height) = grid.dimensions();
    let (px_w, px_h) = (width as f32 * len, height as f32 * len);

    draw_rectangle(0.0, 0.0, px_w, px_h, CANVAS_COLOR);

    // Lines are noise below 8px cells
    if len >= 8.0 {
        for col in 0..=width {
            let x = col as f32 * len;
            draw_line(x, 0.0, x, px_h, 1.0, GRID_LINE_COLOR);
        }
        for row in 0..=height {
            let y = row as f32 * len;
            draw_line(0.0, y, px_w, y, 1.0, GRID_LINE_COLOR);
        }
    }

    let inset = if len >= 4.0 { 1.0 } else { 0.0 };
    for (row, col) in grid.live_cells() {
        let (x, y) = zoom.cell_to_screen(row, col);
        draw_rectangle(x + inset, y + inset, len - inset, len - inset, LIVE_COLOR);
    }
}

/// Semi-transparent preview of where a click would stamp `pattern`
pub fn draw_pattern_preview(pattern: &Pattern, grid: &Grid, zoom: ZoomLevel, cell: (usize, usize)) {
    let len = zoom.cell_length() as f32;
    let (origin_row, origin_col) = pattern.centered_origin(cell.0, cell.1);

    for &(dcol, drow) in &pattern.offsets {
        let (Ok(row), Ok(col)) = (usize::try_from(origin_row + drow), usize::try_from(origin_col + dcol)) else {
            continue;
        };
        if grid.is_valid(row, col) {
            let (x, y) = zoom.cell_to_screen(row, col);
            draw_rectangle(x, y, len, len, GHOST_COLOR);
        }
    }

    let x = origin_col as f32 * len;
    let y = origin_row as f32 * len;
    draw_rectangle_lines(
        x,
        y,
        pattern.width as f32 * len,
        pattern.height as f32 * len,
        2.0,
        Color::from_rgba(255, 255, 0, 180),
    );
}

/// Draw the side panel: widgets, status and help
pub fn draw_controls(
    session: &Session,
    buttons: &[Button],
    slider: &Slider,
    dropdown: &Dropdown,
    status: &PanelStatus,
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px - 10.0, 0.0, PANEL_WIDTH + 10.0, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let muted = status.audio == Some(false);
    for button in buttons {
        let active = match button.action() {
            Action::ToggleRunning => session.is_running(),
            Action::ToggleMute => muted,
            _ => false,
        };
        button.draw(mouse_pos, active);
    }
    slider.draw();

    let (gw, gh) = session.grid.dimensions();
    let audio = match status.audio {
        None => "off",
        Some(true) => "on",
        Some(false) => "muted",
    };
    let lines = [
        ("Generation:".to_owned(), 16.0, WHITE),
        (session.generation().to_string(), 20.0, LIVE_COLOR),
        (format!("Population: {}", format_number(session.grid.population())), 14.0, LIGHTGRAY),
        (format!("Grid: {gw}x{gh}"), 14.0, LIGHTGRAY),
        (format!("Cell: {}px", session.zoom().cell_length()), 14.0, LIGHTGRAY),
        (format!("Rate: {} gen/s", session.clock.rate().get()), 14.0, LIGHTGRAY),
        (format!("Audio: {audio}"), 14.0, LIGHTGRAY),
        (format!("Frame: {:.1}ms", status.frame_ms), 14.0, GRAY),
        (
            (if session.is_running() { "Running" } else { "Paused" }).to_owned(),
            16.0,
            if session.is_running() { GREEN } else { ORANGE },
        ),
    ];
    let mut y = STATUS_TOP;
    for (text, size, color) in &lines {
        draw_text(text, px, y, *size, *color);
        y += *size + 6.0;
    }

    // Progress toward the next generation
    draw_rectangle(px, y, PANEL_WIDTH, 4.0, GRID_LINE_COLOR);
    draw_rectangle(px, y, PANEL_WIDTH * session.clock.phase(), 4.0, LIVE_COLOR);

    let help = [
        "LMB: stamp pattern",
        "Space: run/pause  N: step",
        "C: clear  R: random",
        "Backspace: reset  M: mute",
        "=/-: zoom  Up/Down: rate",
    ];
    let mut y = screen_height() - 80.0;
    for text in help {
        draw_text(text, px, y, 12.0, GRAY);
        y += 14.0;
    }

    // Drawn last so the open menu covers everything else
    dropdown.draw(mouse_pos);
}

/// True when the pointer is over the simulation canvas
pub fn in_canvas(mouse_pos: (f32, f32)) -> bool {
    mouse_pos.0 >= 0.0 && mouse_pos.1 >= 0.0 && mouse_pos.0 < canvas_width() && mouse_pos.1 < canvas_height()
}
