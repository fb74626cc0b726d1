//! Lane Runner entry point
//!
//! Headless native shell: drives the game loop for a fixed number of frames
//! and reports progress through logs or a JSON snapshot stream.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use lane_runner::consts::FRAME_DT;
use lane_runner::renderer::{JsonRenderer, LogRenderer};
use lane_runner::{GameLoop, HeadlessScheduler, InputEvent, Renderer, Tuning};

#[derive(Debug, Parser)]
#[command(name = "lane-runner", version, about = "Headless three-lane endless runner")]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// JSON file overriding game balance
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Let the game play itself
    #[arg(long)]
    autopilot: bool,

    /// Stream one JSON snapshot per frame to stdout
    #[arg(long)]
    json: bool,

    /// Frames between status lines when logging
    #[arg(long, default_value_t = 600)]
    log_every: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::info!("Lane Runner (native) starting...");

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    let renderer: Box<dyn Renderer> = if args.json {
        Box::new(JsonRenderer::new(std::io::stdout().lock()))
    } else {
        Box::new(LogRenderer::new(args.log_every))
    };

    let mut game = GameLoop::new(seed, tuning).with_renderer(renderer);
    if args.autopilot {
        game.set_autopilot(true);
    } else {
        // No input device here: start one session and let it run
        game.handle_input(InputEvent::StartSession);
    }
    let game = Rc::new(RefCell::new(game));

    let mut scheduler = HeadlessScheduler::new(args.frames, Duration::from_secs_f32(FRAME_DT));
    GameLoop::attach(&game, &mut scheduler);
    let frames = scheduler.run();

    let game = game.borrow();
    let state = game.state();
    log::info!(
        "Ran {} frames: {} sessions, best score {}, last score {}, current score {}",
        frames,
        state.sessions_played,
        state.best_score.max(state.score.displayed()),
        state.last_score,
        state.score.displayed()
    );
    Ok(())
}
