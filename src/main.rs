use log::{error, info};

use rasterlab::colors;
use rasterlab::config::{DemoConfig, ENV_CLIP_TRACE};
use rasterlab::exercise::KeyAction;
use rasterlab::logging::{init_logging, LoggingConfig};
use rasterlab::render::Canvas;
use rasterlab::window::{FrameLimiter, Window, WindowEvent};
use rasterlab::{Exercise, Result};

const SNAPSHOT_PATH: &str = "rasterlab.png";

fn title(config: &DemoConfig, exercise: &Exercise) -> String {
    format!(
        "{} - {} (r/t/c/x: mode, 0-9: color, p: snapshot)",
        config.title,
        exercise.mode()
    )
}

fn redraw(canvas: &mut Canvas, exercise: &Exercise, config: &DemoConfig) {
    canvas.clear(colors::BACKGROUND);
    canvas.draw_grid(config.grid_spacing, colors::GRID);
    exercise.render_into(canvas, config.point_size);
}

fn run(config: DemoConfig) -> Result<()> {
    let mut window = Window::new(&config.title, config.width, config.height)?;
    let mut canvas = Canvas::new(config.width, config.height)?;
    let mut exercise = Exercise::new(config.initial_mode, config.clip_window);
    let mut limiter = FrameLimiter::new(&window, config.frame_target_ms());

    window.set_title(&title(&config, &exercise))?;
    info!(
        "{}x{} window, clip window {:?}",
        config.width, config.height, config.clip_window
    );

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h)?;
                    canvas.resize(w, h)?;
                }
                WindowEvent::Click(x, y) => {
                    if let Some(drawing) = exercise.handle_click(f64::from(x), f64::from(y)) {
                        info!("{}: {} pixels", drawing.mode, drawing.pixels.len());
                        if let Some((a, b)) = drawing.clipped {
                            info!("clipped to {a} - {b}");
                        } else if drawing.input_segment.is_some() {
                            info!("segment rejected");
                        }
                    }
                }
                WindowEvent::Key('p') => {
                    if let Err(e) = canvas.save_png(SNAPSHOT_PATH) {
                        error!("snapshot failed: {e}");
                    }
                }
                WindowEvent::Key(key) => {
                    if let KeyAction::ModeChanged(_) = exercise.handle_key(key) {
                        window.set_title(&title(&config, &exercise))?;
                    }
                }
            }
        }

        redraw(&mut canvas, &exercise, &config);
        window.present(canvas.as_bytes())?;
        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}

fn main() {
    init_logging(&LoggingConfig {
        clip_trace: std::env::var_os(ENV_CLIP_TRACE).is_some(),
        ..Default::default()
    });

    let config = DemoConfig::from_env();
    if let Err(e) = run(config) {
        error!("{e}");
        std::process::exit(1);
    }
}
