//! Application context and the poll-process-render loop.

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{Board, BoardSnapshot};
use crate::platform::Platform;
use crate::term::{Assets, Canvas, MarkBrush};
use crate::types::{GameEvent, LoopState, CLEAR_COLOR};

/// Everything the loop mutates or draws with. Owned here rather than living
/// in globals; the platform is borrowed per call.
pub struct Game {
    board: Board,
    assets: Assets,
    canvas: Canvas,
    state: LoopState,
    frames: u64,
}

/// What a finished run looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub frames: u64,
    pub board: BoardSnapshot,
}

impl Game {
    pub fn new(assets: Assets) -> Self {
        Self {
            board: Board::new(),
            assets,
            canvas: Canvas::default(),
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            frames: self.frames,
            board: self.board.snapshot(),
        }
    }

    pub fn handle_event(&mut self, event: GameEvent) {
        if event == GameEvent::Quit {
            info!("quit requested");
            self.state = LoopState::Quit;
            return;
        }

        let turn = self.board.turn();
        if let Some(tile) = self.board.handle_event(&event) {
            debug!(
                tile,
                player = turn.as_str(),
                next = self.board.turn().as_str(),
                board = %self.board.snapshot(),
                "tile claimed"
            );
        }
    }

    /// Redraw the whole frame: clear, grid, marks.
    pub fn draw(&mut self) {
        self.canvas.clear(CLEAR_COLOR);
        self.canvas.blit(&self.assets.grid, 0, 0);
        self.board
            .render(&mut MarkBrush::new(&mut self.canvas, &self.assets));
    }

    /// One loop iteration: drain input, draw, present.
    ///
    /// A quit request does not stop the drain; events already queued behind it
    /// still reach the board and the frame is still presented.
    pub fn step<P: Platform + ?Sized>(&mut self, platform: &mut P) -> Result<()> {
        while let Some(event) = platform.poll_event()? {
            self.handle_event(event);
        }
        self.draw();
        platform.present(&self.canvas)?;
        self.frames += 1;
        Ok(())
    }

    /// Run until a quit request has been processed.
    pub fn run<P: Platform + ?Sized>(&mut self, platform: &mut P) -> Result<Outcome> {
        info!("entering game loop");
        while self.state == LoopState::Running {
            self.step(platform)?;
        }
        let outcome = self.outcome();
        info!(
            frames = outcome.frames,
            moves = outcome.board.turns_taken(),
            board = %outcome.board,
            "game loop finished"
        );
        Ok(outcome)
    }
}
