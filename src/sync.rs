//! Shared game handle.
//!
//! `Game` itself is not synchronised. Hosts that drive one game from
//! several threads, e.g. a UI thread and an engine callback, share it
//! through a `SharedGame`.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::Board;
use crate::game::Game;

/// A cloneable, thread-safe handle to one game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Lock the game for the lifetime of the guard.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.0.lock()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut *self.0.lock())
    }

    /// Copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.lock().board().clone()
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
