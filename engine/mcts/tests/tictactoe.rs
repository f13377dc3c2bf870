//! End-to-end search behaviour on real TicTacToe and Connect 4 positions.

use engine_core::{GameState, Player};
use games_connect4::{Action as Drop, State as Connect4};
use games_tictactoe::{Action, State};
use mcts::{FinalSelection, MctsConfig, MctsSearch, ScorePerspective, SearchError};

fn tictactoe(moves: &[u8]) -> State {
    moves
        .iter()
        .fold(State::initial(), |state, &pos| state.apply_move(&Action::Place(pos)))
}

fn config(iterations: u32) -> MctsConfig {
    MctsConfig::default()
        .with_iterations(iterations)
        .with_rollout_depth(9)
}

/// Visit counts settle far more decisively than the final UCB1 scores.
fn strength_config(iterations: u32) -> MctsConfig {
    config(iterations).with_final_selection(FinalSelection::MostVisited)
}

#[test]
fn finds_immediate_win() {
    // X . X / O O . / . . .  with X to move: 1 wins on the spot
    let state = tictactoe(&[0, 3, 2, 4]);
    let mut search = MctsSearch::from_state(state, strength_config(500));

    assert_eq!(search.search().unwrap(), Action::Place(1));
}

#[test]
fn winning_child_scores_full_rate_for_its_mover() {
    let state = tictactoe(&[0, 3, 2, 4]);
    let mut search = MctsSearch::from_state(state, config(500));
    search.search().unwrap();

    let root = search.tree().get(search.tree().root());
    let (_, win_id) = root
        .children()
        .iter()
        .find(|(mv, _)| *mv == Action::Place(1))
        .unwrap();
    let win = search.tree().get(*win_id);

    assert!(win.is_terminal());
    assert_eq!(win.player_to_move(), Player::Two);
    assert!(win.simulations() > 0);
    assert_eq!(win.win_rate(ScorePerspective::Mover), Some(1.0));

    let stats = search.root_child_stats();
    let place_1 = stats.iter().find(|c| c.mv == Action::Place(1)).unwrap();
    assert_eq!(place_1.mover_wins, place_1.simulations);
}

#[test]
fn blocks_opponent_win() {
    // X X . / O . . / . . .  with O to move: only 2 stops X
    let state = tictactoe(&[0, 3, 1]);
    let mut search = MctsSearch::from_state(state, strength_config(2000));

    assert_eq!(search.search().unwrap(), Action::Place(2));
}

#[test]
fn root_simulations_match_iterations() {
    let mut search = MctsSearch::<State>::new(config(300));
    search.search().unwrap();

    let stats = search.stats();
    assert_eq!(stats.root_simulations, 300);
    assert!(stats.total_nodes > 9);

    let children: u32 = search.root_child_stats().iter().map(|c| c.simulations).sum();
    assert_eq!(children, 300 - 1);
}

#[test]
fn self_play_with_reuse_reaches_the_end() {
    let mut search = MctsSearch::<State>::new(config(400));
    let mut plies = 0;

    while !search.is_finished() {
        let mv = search.search().unwrap();
        let expected = search.root_state().apply_move(&mv);
        search.commit_move(&mv).unwrap();

        assert_eq!(search.root_state(), &expected);
        assert!(search.tree().get(search.tree().root()).is_root());
        plies += 1;
        assert!(plies <= 9);
    }

    assert_ne!(search.root_state().win_value(), 0);
    assert_eq!(search.search(), Err(SearchError::TerminalRoot));
}

#[test]
fn committing_an_illegal_move_is_rejected() {
    let mut search = MctsSearch::from_state(tictactoe(&[4]), config(50));
    search.search().unwrap();
    let before = search.stats();

    let err = search.commit_move(&Action::Place(4)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidMove(_)));
    assert_eq!(search.stats(), before);
}

#[test]
fn connect4_takes_vertical_win() {
    // Red has three stacked in column 0 and is to move
    let state = [0u8, 1, 0, 1, 0, 1]
        .iter()
        .fold(Connect4::initial(), |s, &c| s.apply_move(&Drop::Drop(c)));
    assert_eq!(state.player_to_move(), Player::One);

    let mut search = MctsSearch::from_state(
        state,
        strength_config(1000).with_rollout_depth(42),
    );
    assert_eq!(search.search().unwrap(), Drop::Drop(0));
}
