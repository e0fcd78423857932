//! Presentation contract: the notifications a front-end receives from the
//! controller. Front-ends own all display concerns; nothing here feeds back
//! into game logic.

use crate::{game::Status, player::PlayerId};

/// Receiver of game notifications.
///
/// Each notification method defaults to wrapping its arguments in an
/// [`Event`] and passing it to [`Renderer::on_event`], which itself defaults
/// to a no-op. A front-end overrides the methods it draws, or only `on_event`
/// to handle every notification as a value.
pub trait Renderer {
    /// A piece for `player` landed at (row, column).
    fn on_piece_dropped(&mut self, row: usize, column: usize, player: PlayerId) {
        self.on_event(Event::PieceDropped {
            row,
            column,
            player,
        });
    }

    /// The pointer entered `column`. `target_row` is where `player`'s piece
    /// would land, or `None` if the column is full.
    fn on_hover_column(&mut self, column: usize, target_row: Option<usize>, player: PlayerId) {
        self.on_event(Event::HoverColumn {
            column,
            target_row,
            player,
        });
    }

    /// The pointer left `column`.
    fn on_hover_end(&mut self, column: usize) {
        self.on_event(Event::HoverEnd { column });
    }

    /// The game ended. Fired once per game.
    fn on_game_over(&mut self, status: Status) {
        self.on_event(Event::GameOver { status });
    }

    /// A new game began.
    fn on_reset(&mut self) {
        self.on_event(Event::Reset);
    }

    /// Any notification not handled by its own method.
    fn on_event(&mut self, _event: Event) {}
}

/// Renderer that ignores everything.
impl Renderer for () {}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn on_piece_dropped(&mut self, row: usize, column: usize, player: PlayerId) {
        (**self).on_piece_dropped(row, column, player)
    }

    fn on_hover_column(&mut self, column: usize, target_row: Option<usize>, player: PlayerId) {
        (**self).on_hover_column(column, target_row, player)
    }

    fn on_hover_end(&mut self, column: usize) {
        (**self).on_hover_end(column)
    }

    fn on_game_over(&mut self, status: Status) {
        (**self).on_game_over(status)
    }

    fn on_reset(&mut self) {
        (**self).on_reset()
    }

    fn on_event(&mut self, event: Event) {
        (**self).on_event(event)
    }
}

/// A notification as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "event", rename_all = "snake_case"))]
pub enum Event {
    PieceDropped {
        row: usize,
        column: usize,
        player: PlayerId,
    },
    HoverColumn {
        column: usize,
        target_row: Option<usize>,
        player: PlayerId,
    },
    HoverEnd {
        column: usize,
    },
    GameOver {
        status: Status,
    },
    Reset,
}

impl Event {
    /// Deliver this event to `renderer` through its specific method.
    pub fn dispatch<R: Renderer + ?Sized>(self, renderer: &mut R) {
        match self {
            Event::PieceDropped {
                row,
                column,
                player,
            } => renderer.on_piece_dropped(row, column, player),
            Event::HoverColumn {
                column,
                target_row,
                player,
            } => renderer.on_hover_column(column, target_row, player),
            Event::HoverEnd { column } => renderer.on_hover_end(column),
            Event::GameOver { status } => renderer.on_game_over(status),
            Event::Reset => renderer.on_reset(),
        }
    }
}

/// Renderer that records every notification in order.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

#[cfg(feature = "std")]
impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(feature = "std")]
impl Renderer for EventLog {
    fn on_event(&mut self, event: Event) {
        self.events.push(event);
    }
}
