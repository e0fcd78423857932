use connect_four::{
    Event, EventLog, GameController, GameState, PlayerId, Renderer, Status, HEIGHT, WIDTH,
};

use PlayerId::{Player1, Player2};

fn controller() -> GameController<EventLog> {
    GameController::new(EventLog::new())
}

#[test]
fn test_drop_notifies_renderer() {
    let mut ctl = controller();
    let result = ctl.column_selected(2).unwrap();
    assert_eq!(result.player, Player1);

    assert_eq!(
        ctl.renderer().events(),
        &[Event::PieceDropped {
            row: HEIGHT - 1,
            column: 2,
            player: Player1,
        }]
    );
    assert_eq!(ctl.state().current_player(), Player2);
}

#[test]
fn test_illegal_selection_is_silent() {
    let mut ctl = controller();
    for _ in 0..HEIGHT {
        ctl.column_selected(0).unwrap();
    }
    ctl.renderer_mut().drain();
    let before = *ctl.state();

    assert_eq!(ctl.column_selected(0), None);
    assert_eq!(ctl.column_selected(WIDTH), None);
    assert!(ctl.renderer().events().is_empty());
    assert_eq!(*ctl.state(), before);
}

#[test]
fn test_game_over_fires_once() {
    let mut ctl = controller();
    for col in [0, 6, 1, 6, 2, 6, 3] {
        ctl.column_selected(col).unwrap();
    }
    // Further clicks are refused without any notification.
    for col in 0..WIDTH {
        assert_eq!(ctl.column_selected(col), None);
    }
    ctl.hover_column(4);

    let events = ctl.renderer().events();
    let game_overs: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, Event::GameOver { .. }))
        .collect();
    assert_eq!(
        game_overs,
        vec![&Event::GameOver {
            status: Status::Won(Player1)
        }]
    );
    assert_eq!(
        events.last(),
        Some(&Event::GameOver {
            status: Status::Won(Player1)
        })
    );
    assert_eq!(
        events[events.len() - 2],
        Event::PieceDropped {
            row: HEIGHT - 1,
            column: 3,
            player: Player1,
        }
    );
}

#[test]
fn test_hover_reports_drop_target() {
    let mut ctl = controller();
    ctl.column_selected(3).unwrap();
    ctl.hover_column(3);
    ctl.hover_end(3);

    assert_eq!(
        &ctl.renderer().events()[1..],
        &[
            Event::HoverColumn {
                column: 3,
                target_row: Some(HEIGHT - 2),
                player: Player2,
            },
            Event::HoverEnd { column: 3 },
        ]
    );
    // Hovering never changes the game.
    assert_eq!(ctl.state().move_count(), 1);
}

#[test]
fn test_hover_full_column_has_no_target() {
    let mut ctl = controller();
    for _ in 0..HEIGHT {
        ctl.column_selected(5).unwrap();
    }
    ctl.renderer_mut().drain();
    ctl.hover_column(5);
    assert_eq!(
        ctl.renderer().events(),
        &[Event::HoverColumn {
            column: 5,
            target_row: None,
            player: Player1,
        }]
    );
}

#[test]
fn test_hover_after_game_over_is_ignored() {
    let mut ctl = controller();
    for col in [0, 1, 0, 1, 0, 1, 0] {
        ctl.column_selected(col);
    }
    ctl.renderer_mut().drain();
    ctl.hover_column(2);
    ctl.hover_end(2);
    assert!(ctl.renderer().events().is_empty());
}

#[test]
fn test_hover_out_of_range_is_ignored() {
    let mut ctl = controller();
    ctl.hover_column(WIDTH);
    ctl.hover_end(WIDTH);
    assert!(ctl.renderer().events().is_empty());
}

#[test]
fn test_reset_replaces_state_and_notifies() {
    let mut ctl = controller();
    for col in [0, 1, 0, 1, 0, 1, 0] {
        ctl.column_selected(col);
    }
    assert_eq!(ctl.state().status(), Status::Won(Player1));

    ctl.reset();
    assert_eq!(*ctl.state(), GameState::new());
    assert_eq!(ctl.renderer().events().last(), Some(&Event::Reset));

    // A new game accepts input again and starts with Player1.
    let result = ctl.column_selected(0).unwrap();
    assert_eq!(result.row, HEIGHT - 1);
    assert_eq!(result.player, Player1);
}

#[test]
fn test_borrowed_renderer() {
    let mut log = EventLog::new();
    {
        let mut ctl = GameController::new(&mut log);
        ctl.column_selected(1);
        ctl.reset();
    }
    assert_eq!(log.events().len(), 2);
}

#[test]
fn test_events_replay_into_another_renderer() {
    let mut ctl = controller();
    for col in [0, 1, 0, 1, 0, 1, 0] {
        ctl.column_selected(col);
    }
    let events = ctl.into_renderer().drain();

    let mut copy = EventLog::new();
    for event in events.iter().copied() {
        event.dispatch(&mut copy);
    }
    assert_eq!(copy.events(), events.as_slice());
}

#[derive(Default)]
struct CountingRenderer {
    drops: usize,
    resets: usize,
}

impl Renderer for CountingRenderer {
    fn on_piece_dropped(&mut self, _row: usize, _column: usize, _player: PlayerId) {
        self.drops += 1;
    }

    fn on_reset(&mut self) {
        self.resets += 1;
    }
}

#[test]
fn test_default_methods_are_no_ops() {
    let mut ctl = GameController::new(CountingRenderer::default());
    ctl.hover_column(0);
    ctl.column_selected(0);
    ctl.hover_end(0);
    ctl.reset();
    assert_eq!(ctl.renderer().drops, 1);
    assert_eq!(ctl.renderer().resets, 1);
}

#[test]
fn test_with_state_resumes_game() {
    let mut state = GameState::new();
    state.apply_move(4).unwrap();
    let mut ctl = GameController::with_state(state, ());
    let result = ctl.column_selected(4).unwrap();
    assert_eq!(result.player, Player2);
    assert_eq!(result.row, HEIGHT - 2);
}

/// Draws drops itself and takes everything else as values.
#[derive(Default)]
struct DropsAndRest {
    drops: Vec<(usize, usize)>,
    rest: Vec<Event>,
}

impl Renderer for DropsAndRest {
    fn on_piece_dropped(&mut self, row: usize, column: usize, _player: PlayerId) {
        self.drops.push((row, column));
    }

    fn on_event(&mut self, event: Event) {
        self.rest.push(event);
    }
}

#[test]
fn test_unhandled_notifications_reach_on_event() {
    let mut ctl = GameController::new(DropsAndRest::default());
    ctl.hover_column(1);
    ctl.column_selected(1);
    ctl.reset();

    let renderer = ctl.renderer();
    assert_eq!(renderer.drops, vec![(HEIGHT - 1, 1)]);
    assert_eq!(
        renderer.rest,
        vec![
            Event::HoverColumn {
                column: 1,
                target_row: Some(HEIGHT - 1),
                player: Player1,
            },
            Event::Reset,
        ]
    );
}
