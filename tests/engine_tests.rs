//! GameEngine integration tests: full games, outcomes, and lifecycle.

use ttt_engine::core::{Board, Cell, Difficulty, EngineConfig, InvalidMove, Player};
use ttt_engine::rules::{GameEngine, GameStatus};

fn engine(difficulty: Difficulty) -> GameEngine {
    let mut engine = GameEngine::new(EngineConfig::default().with_seed(42));
    engine.start_game(difficulty);
    engine
}

/// Apply moves alternating X, O, X, ... from the start of a game.
fn play(engine: &mut GameEngine, moves: &[usize]) -> GameStatus {
    let mut status = engine.status();
    for &index in moves {
        let player = engine.turn();
        status = engine
            .apply_move(index, player)
            .unwrap_or_else(|e| panic!("move {index} by {player} rejected: {e}"));
    }
    status
}

// =============================================================================
// Outcome Scenarios
// =============================================================================

#[test]
fn test_lookahead_on_shared_threats() {
    let mut engine = engine(Difficulty::Medium);
    // X X _
    // O O _
    // _ _ _
    play(&mut engine, &[0, 3, 1, 4]);

    assert_eq!(engine.find_winning_move(Player::O), Some(5));
    assert_eq!(engine.find_winning_move(Player::X), Some(2));

    // Winning beats blocking
    assert_eq!(engine.select_computer_move(Difficulty::Medium), Some(5));
    assert_eq!(engine.select_computer_move(Difficulty::Hard), Some(5));
}

#[test]
fn test_medium_blocks_row() {
    let mut engine = engine(Difficulty::Medium);
    // X X _
    // O _ _
    // _ _ O
    play(&mut engine, &[0, 3, 1, 8]);

    assert_eq!(engine.find_winning_move(Player::O), None);
    assert_eq!(engine.find_winning_move(Player::X), Some(2));
    assert_eq!(engine.select_computer_move(Difficulty::Medium), Some(2));
}

#[test]
fn test_resolved_threats_stay_in_progress() {
    let mut engine = engine(Difficulty::Easy);
    // X O X
    // O X O
    // _ _ _
    let status = play(&mut engine, &[0, 1, 2, 3, 4, 5]);

    assert!(!engine.check_win(Player::X));
    assert!(!engine.check_win(Player::O));
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(engine.turn(), Player::X);
}

#[test]
fn test_x_wins_top_row_then_moves_rejected() {
    let mut engine = engine(Difficulty::Easy);
    let status = play(&mut engine, &[0, 3, 1, 4, 2]);

    assert_eq!(status, GameStatus::XWins);
    assert!(engine.check_win(Player::X));
    assert!(!engine.is_active());
    assert_eq!(engine.status_message(), "X wins!");

    let board = *engine.board();
    assert_eq!(
        engine.apply_move(5, Player::O),
        Err(InvalidMove::GameOver {
            status: GameStatus::XWins
        })
    );
    assert!(engine.apply_move(5, Player::X).is_err());
    assert_eq!(engine.play_computer_turn(), Ok(None));
    assert_eq!(engine.board(), &board);
}

#[test]
fn test_o_wins_column() {
    let mut engine = engine(Difficulty::Easy);
    let status = play(&mut engine, &[0, 1, 3, 4, 8, 7]);

    assert_eq!(status, GameStatus::OWins);
    assert_eq!(engine.status_message(), "O wins!");
    assert_eq!(engine.status().winner(), Some(Player::O));
}

#[test]
fn test_full_board_draw() {
    let mut engine = engine(Difficulty::Easy);
    // X O X
    // X O O
    // O X X
    let status = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(status, GameStatus::Draw);
    assert!(engine.board().is_full());
    assert!(!engine.check_win(Player::X));
    assert!(!engine.check_win(Player::O));
    assert_eq!(engine.status_message(), "It's a tie!");
}

#[test]
fn test_ninth_move_win_is_not_draw() {
    let mut engine = engine(Difficulty::Easy);
    // X O X
    // O X O
    // O X X  <- X completes the diagonal on the last cell
    let status = play(&mut engine, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert!(engine.board().is_full());
    assert_eq!(status, GameStatus::XWins);
}

// =============================================================================
// Computer Turns
// =============================================================================

#[test]
fn test_computer_turn_alternates_with_human() {
    let mut engine = engine(Difficulty::Easy);

    engine.apply_move(4, Player::X).unwrap();
    let index = engine.play_computer_turn().unwrap().expect("computer should move");

    assert_ne!(index, 4);
    assert_eq!(engine.board().get(index), Some(Cell::Occupied(Player::O)));
    assert_eq!(engine.turn(), Player::X);
}

#[test]
fn test_computer_takes_win() {
    let mut engine = engine(Difficulty::Hard);
    // X X _
    // O O _
    // X _ _
    play(&mut engine, &[0, 3, 1, 4, 6]);
    // X threatened 2, but O wins at 5 first
    assert_eq!(engine.play_computer_turn(), Ok(Some(5)));
    assert_eq!(engine.status(), GameStatus::OWins);
}

#[test]
fn test_full_games_terminate() {
    for difficulty in Difficulty::ALL {
        for seed in 0..20 {
            let mut engine = GameEngine::new(EngineConfig::default().with_seed(seed));
            engine.start_game(difficulty);

            let mut plies = 0;
            while engine.is_active() {
                // Human always plays the first empty cell
                let index = engine.board().empty_cells()[0];
                engine.apply_move(index, Player::X).unwrap();
                plies += 1;
                if engine.play_computer_turn().unwrap().is_some() {
                    plies += 1;
                }
            }

            assert!(plies <= 9);
            assert!(engine.status().is_terminal());
            assert_eq!(engine.board().occupied_count(), plies);
        }
    }
}

#[test]
fn test_medium_never_loses_to_first_empty_strategy() {
    // Every branch of this matchup ends in a draw or an O win.
    for seed in 0..20 {
        let mut engine = GameEngine::new(EngineConfig::default().with_seed(seed));
        engine.start_game(Difficulty::Medium);

        while engine.is_active() {
            let index = engine.board().empty_cells()[0];
            engine.apply_move(index, Player::X).unwrap();
            engine.play_computer_turn().unwrap();
        }

        assert_ne!(engine.status(), GameStatus::XWins, "seed {seed}");
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_restart_then_start() {
    let mut engine = engine(Difficulty::Easy);
    play(&mut engine, &[0, 3, 1, 4, 2]);

    engine.restart_game();
    assert_eq!(engine.difficulty(), None);
    assert_eq!(engine.apply_move(0, Player::X), Err(InvalidMove::NotStarted));

    engine.start_game(Difficulty::Hard);
    assert!(engine.is_active());
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.apply_move(0, Player::X), Ok(GameStatus::InProgress));
}

#[test]
fn test_start_game_mid_game_resets() {
    let mut engine = engine(Difficulty::Easy);
    play(&mut engine, &[0, 3]);

    engine.start_game(Difficulty::Medium);

    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.turn(), Player::X);
    assert_eq!(engine.difficulty(), Some(Difficulty::Medium));
}

#[test]
fn test_config_carries_computer_delay() {
    let engine = GameEngine::new(EngineConfig::default().with_computer_delay_ms(250));
    assert_eq!(engine.config().computer_delay_ms, 250);
}
