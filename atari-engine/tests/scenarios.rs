//! Whole-game scenarios played through the arbiter from an empty board.

use atari_engine::{Arbiter, Cell, GoError, Rules, Status, Stone, Turn};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atari_engine=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Play each cell in order, asserting every move is legal and the game is
/// still running before it.
fn play_all(arbiter: &mut Arbiter, cells: &[Cell]) -> Status {
    let mut status = arbiter.status();
    for &cell in cells {
        assert_eq!(status, Status::Playing, "game ended before {cell:?}");
        assert!(arbiter.is_legal_move(cell), "{cell:?} should be legal");
        status = arbiter.play(cell).unwrap();
    }
    status
}

/// Black's lone stone at the center is surrounded by four White stones
/// while Black plays away in the corners.
const SURROUND_CENTER: [Cell; 8] = [
    (2, 2),
    (1, 2),
    (0, 0),
    (2, 1),
    (0, 4),
    (2, 3),
    (4, 0),
    (3, 2),
];

#[test]
fn surrounded_stone_is_captured() {
    init_tracing();
    let mut arbiter = Arbiter::basic(5, 5).unwrap();
    arbiter.register_player("Ana");
    arbiter.register_player("Luis");

    let status = play_all(&mut arbiter, &SURROUND_CENTER);

    assert_eq!(arbiter.stone_at((2, 2)), Ok(None));
    assert_eq!(arbiter.captured_count(Stone::Black), 1);
    assert_eq!(arbiter.board().captures().taken_by(Stone::White), 1);
    assert_eq!(arbiter.moves().last().unwrap().captured, 1);
    assert_eq!(status, Status::Won(Stone::White));
    assert_eq!(arbiter.winner().unwrap().name, "Luis");
}

#[test]
fn advanced_game_runs_to_threshold() {
    init_tracing();
    let mut arbiter = Arbiter::advanced(5, 5, 3).unwrap();

    assert_eq!(play_all(&mut arbiter, &SURROUND_CENTER), Status::Playing);
    assert_eq!(arbiter.captured_count(Stone::Black), 1);

    // White takes the corner stone at (0, 0).
    let status = play_all(&mut arbiter, &[(4, 4), (0, 1), (2, 4), (1, 0)]);
    assert_eq!(status, Status::Playing);
    assert_eq!(arbiter.captured_count(Stone::Black), 2);
    assert!(!arbiter.is_finished());

    // And the one at (0, 4).
    let status = play_all(&mut arbiter, &[(4, 2), (0, 3), (4, 3), (1, 4)]);
    assert_eq!(arbiter.stone_at((0, 4)), Ok(None));
    assert_eq!(arbiter.captured_count(Stone::Black), 3);
    assert_eq!(status, Status::Won(Stone::White));
    assert!(arbiter.is_finished());
}

#[test]
fn single_cell_board_fills_in_one_move() {
    let mut arbiter = Arbiter::basic(1, 1).unwrap();
    assert_eq!(arbiter.play((0, 0)), Ok(Status::Drawn));

    assert!(arbiter.board().is_full());
    assert!(arbiter.is_finished());
    assert!(arbiter.winner().is_none());
    assert!(arbiter.legal_moves().is_empty());
    assert!(!arbiter.is_legal_move((0, 0)));
}

#[test]
fn ko_blocks_recapture_until_position_changes() {
    init_tracing();
    let mut arbiter = Arbiter::advanced(4, 4, 3).unwrap();

    // Build the ko shape; White's last stone at (1, 1) is in atari.
    play_all(
        &mut arbiter,
        &[
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 3),
            (2, 1),
            (2, 2),
            (3, 3),
            (1, 1),
        ],
    );
    let before_capture = arbiter.board().clone();

    // Black captures at (1, 2).
    arbiter.play((1, 2)).unwrap();
    assert_eq!(arbiter.captured_count(Stone::White), 1);

    // White's recapture would recreate the position before Black's capture.
    let retake = arbiter.board().play((1, 1), Stone::White).unwrap();
    assert!(retake.equals_position(&before_capture));
    assert!(!arbiter.is_legal_move((1, 1)));
    assert_eq!(arbiter.play((1, 1)), Err(GoError::KoViolation((1, 1))));

    // After an exchange elsewhere the recapture is fine.
    play_all(&mut arbiter, &[(3, 0), (0, 0), (1, 1)]);
    assert_eq!(arbiter.stone_at((1, 2)), Ok(None));
    assert_eq!(arbiter.captured_count(Stone::Black), 1);
}

#[test]
fn basic_game_has_no_ko_but_ends_on_capture() {
    let mut arbiter = Arbiter::basic(4, 4).unwrap();
    let status = play_all(
        &mut arbiter,
        &[
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 3),
            (2, 1),
            (2, 2),
            (3, 3),
            (1, 1),
            (1, 2),
        ],
    );
    assert_eq!(status, Status::Won(Stone::Black));
    assert_eq!(arbiter.play((1, 1)), Err(GoError::GameOver));
}

#[test]
fn capturing_move_may_fill_its_own_last_liberty() {
    let mut arbiter = Arbiter::advanced(3, 3, 2).unwrap();
    // Black: (0, 2), (1, 1), (2, 0); White: (0, 1), (1, 0), with White's
    // throw-away stone at (2, 2).
    play_all(&mut arbiter, &[(1, 1), (0, 1), (0, 2), (1, 0), (2, 0), (2, 2)]);

    assert!(arbiter.is_legal_move((0, 0)));
    let status = arbiter.play((0, 0)).unwrap();
    assert_eq!(arbiter.stone_at((0, 0)), Ok(Some(Stone::Black)));
    assert_eq!(arbiter.captured_count(Stone::White), 2);
    assert_eq!(status, Status::Won(Stone::Black));
}

#[test]
fn suicide_is_rejected_without_side_effects() {
    let mut arbiter = Arbiter::basic(3, 3).unwrap();
    play_all(&mut arbiter, &[(0, 1), (2, 2), (1, 0)]);

    let before = arbiter.game_state();
    assert!(!arbiter.is_legal_move((0, 0)));
    assert_eq!(arbiter.play((0, 0)), Err(GoError::Suicide((0, 0))));
    assert_eq!(arbiter.game_state(), before);
    assert_eq!(arbiter.turn(), Stone::White);
}

#[test]
fn out_of_range_play_is_an_error() {
    let mut arbiter = Arbiter::basic(9, 9).unwrap();
    assert_eq!(
        arbiter.play((9, 0)),
        Err(GoError::NotOnBoard {
            cell: (9, 0),
            rows: 9,
            cols: 9
        })
    );
    assert!(arbiter.moves().is_empty());
    assert_eq!(arbiter.turn(), Stone::Black);
}

#[test]
fn replayed_log_matches_live_game() {
    let mut live = Arbiter::advanced(5, 5, 3).unwrap();
    play_all(&mut live, &SURROUND_CENTER);

    let log: Vec<Turn> = live.moves().to_vec();
    let replayed = Arbiter::with_moves(5, 5, *live.rules(), &log).unwrap();

    assert!(replayed.board().equals_position(live.board()));
    assert_eq!(replayed.game_state(), live.game_state());
}

#[test]
fn rules_load_from_json() {
    let json = r#"{"capture_threshold": 2, "ko_history": 1}"#;
    let rules: Rules = serde_json::from_str(json).unwrap();
    let arbiter = Arbiter::new(9, 9, rules).unwrap();
    assert_eq!(arbiter.rules(), &Rules::advanced(2).unwrap());
}
