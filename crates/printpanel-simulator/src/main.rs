//! SDL2 front end for the print panel menu.
//!
//! Renders printpanel-core pages in a window via `embedded-graphics-simulator`
//! at the panel resolution. Runs on a desktop or directly on the instrument's
//! Raspberry Pi.
//!
//! # Configuration
//!
//! `.env` is loaded first. `PRINTPANEL_CONFIG` may point to a JSON file with
//! a [`PanelConfig`]; missing fields take their defaults. `RUST_LOG` sets the
//! log level.
//!
//! # Key bindings
//!
//! | Key           | Action                       |
//! |---------------|------------------------------|
//! | L             | Lock toggle (home only)      |
//! | 1-8           | Open parameter screen        |
//! | B / Backspace | Back                         |
//! | R             | Reset to start state         |
//! | Q / Escape    | Quit                         |
//!
//! Mouse clicks are forwarded as touch events.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info, warn};

use printpanel_core::pages::PageManager;
use printpanel_core::ui::{TouchEvent, TouchPoint};
use printpanel_core::ui::styling::COLOR_BACKGROUND;
use printpanel_core::{InputEvent, PanelConfig, PanelController, ParameterId, ScreenId};

/// Environment variable naming the JSON config file
const CONFIG_ENV: &str = "PRINTPANEL_CONFIG";

/// Read the config named by [`CONFIG_ENV`], falling back to defaults when it
/// is unset or unusable.
fn load_config() -> PanelConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        info!("{CONFIG_ENV} not set, using default configuration");
        return PanelConfig::default();
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Cannot read {path}: {e}; using default configuration");
            return PanelConfig::default();
        }
    };

    let config: PanelConfig = match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid config {path}: {e}; using default configuration");
            return PanelConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        warn!("{path}: {e}; using default configuration");
        return PanelConfig::default();
    }

    info!("Loaded configuration from {path}");
    config
}

/// Map an SDL keycode to a panel input event.
fn keycode_to_event(keycode: Keycode) -> Option<InputEvent<'static>> {
    let parameter = |index: usize| InputEvent::nav(ScreenId::Parameter(ParameterId::ALL[index]));

    match keycode {
        Keycode::L => Some(InputEvent::LockTogglePressed),
        Keycode::B | Keycode::Backspace => Some(InputEvent::BackPressed),
        Keycode::Num1 | Keycode::Kp1 => Some(parameter(0)),
        Keycode::Num2 | Keycode::Kp2 => Some(parameter(1)),
        Keycode::Num3 | Keycode::Kp3 => Some(parameter(2)),
        Keycode::Num4 | Keycode::Kp4 => Some(parameter(3)),
        Keycode::Num5 | Keycode::Kp5 => Some(parameter(4)),
        Keycode::Num6 | Keycode::Kp6 => Some(parameter(5)),
        Keycode::Num7 | Keycode::Kp7 => Some(parameter(6)),
        Keycode::Num8 | Keycode::Kp8 => Some(parameter(7)),
        _ => None,
    }
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = load_config();
    let controller = match PanelController::with_builtin_registry() {
        Ok(controller) => controller,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut manager = match PageManager::new(controller, config.display_bounds()) {
        Ok(manager) => manager,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Starting print panel");
    info!(
        "Display: {}×{} (scale {}×)",
        config.display.width, config.display.height, config.simulator.window_scale
    );
    info!("Keys: L=Lock  1-8=Parameter  B=Back  R=Reset  Q=Quit");

    let frame_duration = Duration::from_millis(config.simulator.frame_ms);

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(config.display.width, config.display.height));
    let output_settings = OutputSettingsBuilder::new()
        .scale(config.simulator.window_scale)
        .build();
    let mut window = Window::new("Print Panel", &output_settings);

    // The SDL window is created on the first `update()`; `events()` panics
    // before that.
    if let Err(e) = display.clear(COLOR_BACKGROUND) {
        error!("Clear error: {:?}", e);
    }
    if let Err(e) = manager.draw(&mut display) {
        error!("Draw error: {:?}", e);
    }
    window.update(&display);

    let mut touching = false;

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    if keycode == Keycode::R {
                        manager.reset();
                    } else if let Some(event) = keycode_to_event(keycode) {
                        manager.handle_event(event);
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    touching = true;
                    manager.handle_touch(TouchEvent::Press(touch_point(point)));
                }

                SimulatorEvent::MouseMove { point, .. } if touching => {
                    manager.handle_touch(TouchEvent::Drag(touch_point(point)));
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    touching = false;
                    manager.handle_touch(TouchEvent::Release(touch_point(point)));
                }

                _ => {}
            }
        }

        match manager.draw_dirty(&mut display) {
            Ok(_) => {}
            Err(e) => error!("Draw error: {:?}", e),
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    info!("Print panel exiting");
    ExitCode::SUCCESS
}
