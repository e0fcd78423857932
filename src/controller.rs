use log::{debug, info};

use crate::{
    config::WIDTH,
    game::{GameState, MoveResult},
    renderer::Renderer,
};

/// Orchestrator combining one `GameState` with a `Renderer`.
///
/// Translates input events into state operations and notifies the renderer
/// of what changed. Illegal input is swallowed here: it is logged and has no
/// visible effect.
pub struct GameController<R: Renderer> {
    state: GameState,
    renderer: R,
}

impl<R: Renderer> GameController<R> {
    /// Controller for a fresh game. No notification is sent.
    pub fn new(renderer: R) -> Self {
        Self::with_state(GameState::new(), renderer)
    }

    /// Controller resuming an existing game.
    pub fn with_state(state: GameState, renderer: R) -> Self {
        Self { state, renderer }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Handle a click on `column`. Returns the move on success, `None` when
    /// the selection was ignored.
    pub fn column_selected(&mut self, column: usize) -> Option<MoveResult> {
        let result = match self.state.apply_move(column) {
            Ok(result) => result,
            Err(err) => {
                debug!("ignoring selection: {}", err);
                return None;
            }
        };

        self.renderer
            .on_piece_dropped(result.row, result.column, result.player);
        if result.status.is_over() {
            info!(
                "game over after {} moves: {:?}",
                self.state.move_count(),
                result.status
            );
            self.renderer.on_game_over(result.status);
        }
        Some(result)
    }

    /// Pointer entered `column`. Ignored once the game is over or for an
    /// out-of-range column.
    pub fn hover_column(&mut self, column: usize) {
        if self.state.is_over() || column >= WIDTH {
            return;
        }
        let target = self.state.find_drop_row(column);
        self.renderer
            .on_hover_column(column, target, self.state.current_player());
    }

    /// Pointer left `column`. Ignored in the same cases as `hover_column`.
    pub fn hover_end(&mut self, column: usize) {
        if self.state.is_over() || column >= WIDTH {
            return;
        }
        self.renderer.on_hover_end(column);
    }

    /// Start a new game, discarding the current one entirely.
    pub fn reset(&mut self) {
        debug!("resetting after {} moves", self.state.move_count());
        self.state.reset_in_place();
        self.renderer.on_reset();
    }
}
