//! Flat Arena headless driver
//!
//! Loads tuning, runs a scripted input sequence through the frame loop and
//! logs where the player ends up. Pass a JSON config path as the first
//! argument and `-v` for debug output.

use flat_arena::sim::{Button, InputSnapshot, World, frame};
use flat_arena::{RecordingRenderer, SimConfig, logging};

/// Simulated frame interval (ms)
const FRAME_MS: u64 = 16;

/// (first frame, held buttons) pairs; each entry lasts until the next one
const SCRIPT: &[(u64, &[Button])] = &[
    (0, &[Button::Right]),
    (120, &[Button::Right, Button::Up]),
    (240, &[Button::Left]),
    (420, &[Button::Down]),
    (540, &[]),
];

/// The frame on which the script presses Start
const EXIT_FRAME: u64 = 600;

fn main() {
    let mut verbose = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ => config_path = Some(arg),
        }
    }

    logging::init(verbose);
    log::info!("Flat Arena (headless) starting...");

    let config = match config_path {
        Some(path) => SimConfig::load(&path).unwrap_or_else(|err| {
            log::error!("{err}; using default tuning");
            SimConfig::default()
        }),
        None => SimConfig::default(),
    };

    let mut world = World::new(config);
    let mut renderer = RecordingRenderer::default();

    for n in 1.. {
        let mut input = scripted_input(n);
        if n == EXIT_FRAME {
            input.set_pressed(Button::Start, true);
        }

        let exit = frame(&mut world, n * FRAME_MS, &input);
        world.present(&mut renderer);

        if n % 60 == 0 {
            if let Some(player) = world.player() {
                log::info!("frame {n}: {player}");
            }
        }
        if exit {
            break;
        }
    }

    log::info!(
        "Stopped after {} frames ({:.2} s simulated), {} entities drawn",
        world.frame_count,
        world.elapsed,
        renderer.views.len()
    );
}

fn scripted_input(frame: u64) -> InputSnapshot {
    let held = SCRIPT
        .iter()
        .rev()
        .find(|(start, _)| *start <= frame)
        .map(|(_, buttons)| *buttons)
        .unwrap_or(&[]);

    let mut input = InputSnapshot::new();
    for &button in held {
        input.set_down(button, true);
    }
    input
}
