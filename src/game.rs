//! Host-facing game loop
//!
//! Owns the session, buffers input between frames and hands a snapshot to the
//! renderer after every tick.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::platform::{FrameClock, FrameScheduler, InputEvent, InputQueue};
use crate::renderer::{Renderer, Snapshot};
use crate::sim::{self, GameEvent, GameState, autopilot_input};
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct GameLoop {
    tuning: Tuning,
    state: GameState,
    input: InputQueue,
    clock: FrameClock,
    autopilot: bool,
    renderer: Option<Box<dyn Renderer>>,
}

impl GameLoop {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!(
            "Game initialized with seed {} ({} obstacles)",
            seed,
            tuning.obstacle_count
        );
        Self {
            state: GameState::new(seed, &tuning),
            tuning,
            input: InputQueue::default(),
            clock: FrameClock::default(),
            autopilot: false,
            renderer: None,
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Idle/demo mode - the game plays itself
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    /// Queue an input event for the next tick
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: simulate, then render
    pub fn tick(&mut self, elapsed: Duration) {
        self.clock.record(elapsed);

        if self.autopilot {
            self.input.merge(autopilot_input(&self.state, &self.tuning));
        }

        sim::tick(&mut self.state, self.input.pending(), &self.tuning);
        // Clear one-shot inputs after processing
        self.input.clear();

        for event in &self.state.events {
            match event {
                GameEvent::ObstacleRecycled { .. } => {}
                other => log::debug!("{:?}", other),
            }
        }

        if self.renderer.is_some() {
            let snapshot = self.snapshot();
            if let Some(renderer) = self.renderer.as_mut() {
                renderer.present(&snapshot);
            }
        }
    }

    /// Positions, score and phase for the renderer/UI
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::capture(&self.state);
        snapshot.frame_ms = self.clock.last_frame().as_secs_f32() * 1000.0;
        snapshot.fps = self.clock.fps();
        snapshot
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    /// Hand the loop to a scheduler. The host calls it once per refresh.
    pub fn attach(game: &Rc<RefCell<GameLoop>>, scheduler: &mut dyn FrameScheduler) {
        let game = Rc::clone(game);
        scheduler.register_tick(Box::new(move |elapsed| {
            game.borrow_mut().tick(elapsed);
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessScheduler;
    use crate::sim::GamePhase;

    const FRAME: Duration = Duration::from_micros(16_667);

    /// Renderer that records every snapshot it sees
    struct Recorder(Rc<RefCell<Vec<Snapshot>>>);

    impl Renderer for Recorder {
        fn present(&mut self, snapshot: &Snapshot) {
            self.0.borrow_mut().push(snapshot.clone());
        }
    }

    #[test]
    fn test_start_event_begins_session() {
        let mut game = GameLoop::new(1, Tuning::default());
        game.tick(FRAME);
        assert_eq!(game.state().phase, GamePhase::Menu);

        game.handle_input(InputEvent::StartSession);
        game.tick(FRAME);
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert!(game.snapshot().playing);
    }

    #[test]
    fn test_inputs_are_one_shot() {
        let mut game = GameLoop::new(1, Tuning::default());
        game.handle_input(InputEvent::StartSession);
        game.tick(FRAME);

        game.handle_input(InputEvent::MoveLeft);
        game.tick(FRAME);
        assert_eq!(game.state().player.pos.z, -3.0);

        game.handle_input(InputEvent::MoveRight);
        game.tick(FRAME);
        game.tick(FRAME);
        assert_eq!(game.state().player.pos.z, 0.0);
    }

    #[test]
    fn test_renders_every_frame_in_any_phase() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let game = GameLoop::new(5, Tuning::default())
            .with_renderer(Box::new(Recorder(Rc::clone(&frames))));
        let game = Rc::new(RefCell::new(game));

        let mut scheduler = HeadlessScheduler::new(10, FRAME);
        GameLoop::attach(&game, &mut scheduler);
        assert_eq!(scheduler.run(), 10);

        let frames = frames.borrow();
        assert_eq!(frames.len(), 10);
        assert!(frames.iter().all(|s| !s.playing));
        // Menu frames still scroll the ground
        assert!(frames[9].scroll_x < frames[0].scroll_x);
        assert_eq!(frames[9].tick, 10);
        assert_eq!(game.borrow().frames(), 10);
    }

    #[test]
    fn test_autopilot_starts_and_plays() {
        let mut game = GameLoop::new(3, Tuning::default());
        game.set_autopilot(true);

        for _ in 0..300 {
            game.tick(FRAME);
        }

        assert!(game.state().sessions_played >= 1);
        assert!(game.snapshot().fps > 0);
    }
}
