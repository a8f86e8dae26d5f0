use std::time::Duration;

use anyhow::Context;
use log::{error, info, warn};
use macroquad::prelude::*;
use sonic_life::{
    Session, TickRate,
    application::loader,
    NewbornReport,
    audio::Sonifier,
    config::CONFIG,
    input,
    rendering::{self, PanelStatus},
    ui::{self, Dropdown, Slider},
};

const DROPDOWN_TOP: f32 = 40.0;
const SLIDER_TOP: f32 = 100.0;
const BUTTONS_TOP: f32 = 140.0;

fn window_conf() -> Conf {
    // Logger first, so the config load below is reported
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    Conf {
        window_title: CONFIG.window.title.clone(),
        window_width: CONFIG.window.width,
        window_height: CONFIG.window.height,
        window_resizable: CONFIG.window.resizable,
        ..Default::default()
    }
}

/// Remembers the canvas size whose rebuild last failed, so a window that
/// stays too small is reported once instead of every frame
#[derive(Default)]
struct ResizeWatch {
    failed: Option<(f32, f32)>,
}

impl ResizeWatch {
    /// True when this failure is new and should be logged
    fn failed_at(&mut self, canvas: (f32, f32)) -> bool {
        if self.failed == Some(canvas) {
            return false;
        }
        self.failed = Some(canvas);
        true
    }

    /// True when a rebuild succeeds after a failure
    fn recovered(&mut self) -> bool {
        self.failed.take().is_some()
    }
}

/// Hand one generation's births to the audio layer, timed against the tick period
fn sonify(sonifier: Option<&mut Sonifier>, session: &Session, report: &NewbornReport) {
    if let Some(sonifier) = sonifier {
        let period = session.clock.rate().period().as_secs_f64();
        sonifier.on_generation(report, get_time(), period);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = run().await {
        error!("{e:#}");
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting Sonic Life...");

    let mut session = Session::new(&CONFIG.simulation, ui::canvas_width(), ui::canvas_height())
        .context("window too small for a grid")?;
    session.add_patterns(loader::load_patterns(&CONFIG.patterns.files).await);

    let mut sonifier = if CONFIG.audio.enabled {
        match Sonifier::load(CONFIG.audio.volume).await {
            Ok(sonifier) => Some(sonifier),
            Err(e) => {
                warn!("Audio disabled: {e}");
                None
            }
        }
    } else {
        info!("Audio disabled by configuration");
        None
    };

    let px = ui::panel_x();
    let names = session.patterns().iter().map(|p| p.name.clone()).collect();
    let mut dropdown = Dropdown::new(px, DROPDOWN_TOP, ui::PANEL_WIDTH, "Pattern", names);
    dropdown.set_selected(session.selected_index());
    let mut slider = Slider::new(
        px,
        SLIDER_TOP,
        ui::PANEL_WIDTH,
        "Gen/s",
        TickRate::MIN,
        TickRate::MAX,
        TickRate::STEP,
        session.clock.rate().get(),
    );
    let mut buttons = ui::create_buttons(BUTTONS_TOP);
    let mut last_panel_x = px;
    let mut resize_watch = ResizeWatch::default();

    loop {
        let frame_start = get_time();

        // Keep the panel docked to the right edge
        let px = ui::panel_x();
        if px != last_panel_x {
            dropdown.set_position(px, DROPDOWN_TOP);
            slider.set_position(px, SLIDER_TOP);
            buttons = ui::create_buttons(BUTTONS_TOP);
            last_panel_x = px;
        }
        let canvas = (ui::canvas_width(), ui::canvas_height());
        match session.resize_canvas(canvas.0, canvas.1) {
            Ok(_) => {
                if resize_watch.recovered() {
                    info!("Canvas usable again at {:.0}x{:.0}", canvas.0, canvas.1);
                }
            }
            Err(e) => {
                if resize_watch.failed_at(canvas) {
                    warn!("Canvas resize ignored: {e}");
                }
            }
        }

        let mouse_pos = mouse_position();

        // The dropdown sees the click first so an open menu swallows it
        let captured = dropdown.captures(mouse_pos);
        if let Some(index) = dropdown.update(mouse_pos) {
            session.select_pattern(index);
            info!("Selected pattern: {}", session.selected_pattern().name);
        }

        if !captured {
            if let Some(rate) = slider.update(mouse_pos) {
                session.clock.set_rate(TickRate::new(rate));
            }

            let mut actions: Vec<_> = buttons.iter().filter_map(|b| b.clicked(mouse_pos)).collect();
            actions.extend(input::keyboard_actions());
            for action in actions {
                if let Some(report) = input::apply(action, &mut session, sonifier.as_mut()) {
                    sonify(sonifier.as_mut(), &session, &report);
                }
            }

            if !slider.is_dragging() {
                input::handle_canvas_click(&mut session, mouse_pos);
            }
        }
        slider.set_value(session.clock.rate().get());

        if let Some(report) = session.advance(Duration::from_secs_f32(get_frame_time())) {
            sonify(sonifier.as_mut(), &session, &report);
        }
        if let Some(sonifier) = sonifier.as_mut() {
            sonifier.pump(get_time());
        }

        clear_background(BLACK);
        rendering::draw_grid(&session.grid, session.zoom());
        if !captured {
            if let Some(cell) = input::hovered_cell(&session, mouse_pos) {
                rendering::draw_pattern_preview(session.selected_pattern(), &session.grid, session.zoom(), cell);
            }
        }

        let status = PanelStatus {
            audio: sonifier.as_ref().map(|s| !s.is_muted()),
            frame_ms: ((get_time() - frame_start) * 1000.0) as f32,
        };
        rendering::draw_controls(&session, &buttons, &slider, &dropdown, &status, mouse_pos);

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_failure_warns_once_per_size() {
        let mut watch = ResizeWatch::default();
        assert!(!watch.recovered());

        assert!(watch.failed_at((10.0, 10.0)));
        for _ in 0..60 {
            assert!(!watch.failed_at((10.0, 10.0)));
        }
        assert!(watch.failed_at((12.0, 10.0)));

        assert!(watch.recovered());
        assert!(!watch.recovered());
        assert!(watch.failed_at((12.0, 10.0)));
    }
}
