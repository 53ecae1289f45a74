use anyhow::Result;

use crate::term::Canvas;
use crate::types::GameEvent;

/// Input source and presentation target for the game loop.
///
/// Construction is the platform's own business (it may fail with
/// [`crate::term::InitError`]); release belongs in `Drop` so that every exit
/// path, including failed startup, tears the platform down.
pub trait Platform {
    /// Next pending event, or `None` once the queue is empty. Never blocks.
    fn poll_event(&mut self) -> Result<Option<GameEvent>>;

    /// Show `frame`. Blocks until it has been submitted.
    fn present(&mut self, frame: &Canvas) -> Result<()>;
}
