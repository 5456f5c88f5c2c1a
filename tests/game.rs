//! Game integration tests.

use king_of_spades::game::round::{highest_card, leading_seat, round_winner};
use king_of_spades::{
    ACE, AutoPlay, Card, CardPile, Game, GameOptions, GameResult, GameState, Hand, KING,
    MAX_ROUNDS, PlayError, RoundResult, Seat, Spectator, StopAfter, Suit,
};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn hands_from(rows: [&[Card]; 4]) -> [Hand; 4] {
    rows.map(|row| Hand::from_cards(row.to_vec()))
}

/// Records everything the game reports.
#[derive(Default)]
struct Recorder {
    dealt: usize,
    rounds: Vec<RoundResult>,
    finished: Option<GameResult>,
    stop_after: Option<u8>,
}

impl Spectator for Recorder {
    fn on_deal(&mut self, hands: &[Hand; 4]) {
        self.dealt = hands.iter().map(CardPile::len).sum();
    }

    fn on_round(&mut self, result: &RoundResult) {
        self.rounds.push(*result);
    }

    fn should_continue(&mut self, result: &RoundResult) -> bool {
        self.stop_after.is_none_or(|last| result.round < last)
    }

    fn on_finish(&mut self, result: &GameResult) {
        self.finished = Some(*result);
    }
}

#[test]
fn new_game_deals_thirteen_cards_each() {
    let game = Game::new(GameOptions::default().with_seed(3));

    assert_eq!(game.state(), GameState::NotStarted);
    assert!(game.deck().is_empty());
    assert!(game.hands().iter().all(|hand| hand.len() == 13));
    assert!(game.hands().iter().all(|hand| hand.wins() == 0));

    let mut all: Vec<Card> = game
        .hands()
        .iter()
        .flat_map(|hand| hand.cards().iter().copied())
        .collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 52);
}

#[test]
fn separate_games_do_not_share_hands() {
    let mut first = Game::new(GameOptions::default().with_shuffle(false));
    first.play_round().unwrap();

    let second = Game::new(GameOptions::default().with_shuffle(false));
    assert_eq!(second.state(), GameState::NotStarted);
    assert!(second.hands().iter().all(|hand| hand.len() == 13));
    assert_eq!(second.wins(), [0; 4]);
    assert_eq!(first.hand(Seat::P1).len(), 12);
}

#[test]
fn highest_rank_wins_regardless_of_suit() {
    let mut game = Game::with_hands(hands_from([
        &[card(Suit::Clubs, 10)],
        &[card(Suit::Diamonds, ACE)],
        &[card(Suit::Hearts, KING)],
        &[card(Suit::Spades, 2)],
    ]));

    let result = game.play_round().unwrap();

    assert_eq!(result.round, 1);
    assert_eq!(result.winner, Seat::P2);
    assert_eq!(result.winning_card, card(Suit::Diamonds, ACE));
    assert_eq!(
        result.cards,
        [
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, ACE),
            card(Suit::Hearts, KING),
            card(Suit::Spades, 2),
        ]
    );
    assert_eq!(game.wins(), [0, 1, 0, 0]);
}

#[test]
fn equal_rank_goes_to_higher_suit() {
    let cards = [
        card(Suit::Clubs, KING),
        card(Suit::Spades, KING),
        card(Suit::Hearts, 4),
        card(Suit::Diamonds, 9),
    ];
    assert_eq!(round_winner(&cards), Seat::P2);
}

#[test]
fn duplicate_maximal_cards_go_to_first_seat() {
    let ace = card(Suit::Hearts, ACE);
    let cards = [card(Suit::Clubs, 3), ace, card(Suit::Spades, 5), ace];

    assert_eq!(highest_card(&cards), Some(1));
    assert_eq!(round_winner(&cards), Seat::P2);
    assert_eq!(highest_card(&[]), None);
}

#[test]
fn game_winner_ties_go_to_lowest_seat() {
    assert_eq!(leading_seat(&[2, 3, 3, 1]), Seat::P2);
    assert_eq!(leading_seat(&[1, 1, 1, 1]), Seat::P1);
    assert_eq!(leading_seat(&[0, 0, 0, 4]), Seat::P4);
    assert_eq!(leading_seat(&[0; 4]), Seat::P1);
}

#[test]
fn unshuffled_game_is_deterministic() {
    let mut game = Game::new(GameOptions::default().with_shuffle(false));
    let mut recorder = Recorder::default();

    let result = game.run(&mut recorder).unwrap();

    assert_eq!(recorder.dealt, 52);
    assert_eq!(recorder.rounds.len(), 13);
    assert_eq!(result.rounds_played, MAX_ROUNDS);
    assert!(!result.stopped_early);
    // Seats 2-4 only take the rounds where an ace reaches them.
    assert_eq!(result.wins, [10, 1, 1, 1]);
    assert_eq!(result.winner, Seat::P1);
    assert_eq!(recorder.finished, Some(result));

    assert_eq!(recorder.rounds[0].winning_card, card(Suit::Spades, ACE));
    assert_eq!(recorder.rounds[3].winner, Seat::P2);
    assert_eq!(recorder.rounds[3].winning_card, card(Suit::Hearts, ACE));
    assert_eq!(recorder.rounds[6].winner, Seat::P3);
    assert_eq!(recorder.rounds[9].winner, Seat::P4);
    assert_eq!(recorder.rounds[9].winning_card, card(Suit::Clubs, ACE));

    assert_eq!(game.state(), GameState::Finished);
    assert!(game.hands().iter().all(CardPile::is_empty));
}

#[test]
fn same_seed_replays_identically() {
    let options = GameOptions::default().with_seed(2024);

    let mut first = Recorder::default();
    let mut second = Recorder::default();
    let a = Game::new(options).run(&mut first).unwrap();
    let b = Game::new(options).run(&mut second).unwrap();

    assert_eq!(a, b);
    assert_eq!(first.rounds, second.rounds);
    assert_eq!(a.wins.iter().map(|&w| u32::from(w)).sum::<u32>(), 13);
}

#[test]
fn early_exit_after_first_round() {
    let mut game = Game::new(GameOptions::default().with_seed(11));

    let result = game.run(&mut StopAfter(1)).unwrap();

    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(result.rounds_played, 1);
    assert!(result.stopped_early);
    assert_eq!(result.wins.iter().map(|&w| u32::from(w)).sum::<u32>(), 1);
    assert!(game.hands().iter().all(|hand| hand.len() == 12));
}

#[test]
fn closure_can_stop_the_game() {
    let mut game = Game::new(GameOptions::default().with_shuffle(false));
    let mut asked = 0;
    let mut stop_on_third = |result: &RoundResult| {
        asked += 1;
        result.round < 3
    };

    let result = game.run(&mut stop_on_third).unwrap();

    assert_eq!(asked, 3);
    assert_eq!(result.rounds_played, 3);
    assert_eq!(result.wins, [3, 0, 0, 0]);
}

#[test]
fn continuation_is_asked_after_every_round() {
    let mut game = Game::new(GameOptions::default().with_shuffle(false));
    let mut asked_after = Vec::new();
    let mut record = |result: &RoundResult| {
        asked_after.push(result.round);
        true
    };

    let result = game.run(&mut record).unwrap();

    assert_eq!(asked_after, (1..=MAX_ROUNDS).collect::<Vec<_>>());
    assert_eq!(result.rounds_played, MAX_ROUNDS);
}

#[test]
fn stop_answer_after_last_round_is_not_an_early_exit() {
    let mut game = Game::new(GameOptions::default().with_seed(5));
    let mut stop_at_end = |result: &RoundResult| result.round < MAX_ROUNDS;

    let result = game.run(&mut stop_at_end).unwrap();

    assert_eq!(result.rounds_played, MAX_ROUNDS);
    assert!(!result.stopped_early);
    assert_eq!(game.state(), GameState::Finished);
}

#[test]
fn round_state_progresses_to_finished() {
    let mut game = Game::new(GameOptions::default().with_seed(8));

    game.play_round().unwrap();
    assert_eq!(game.state(), GameState::RoundInProgress { round: 1 });
    game.play_round().unwrap();
    assert_eq!(game.state(), GameState::RoundInProgress { round: 2 });

    for _ in 2..MAX_ROUNDS {
        game.play_round().unwrap();
    }
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.rounds_played(), MAX_ROUNDS);
    assert_eq!(game.play_round().unwrap_err(), PlayError::GameOver);
    assert_eq!(game.run(&mut AutoPlay).unwrap_err(), PlayError::GameOver);
}

#[test]
fn stop_ends_game_before_any_round() {
    let mut game = Game::new(GameOptions::default().with_seed(1));
    game.stop();

    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.play_round().unwrap_err(), PlayError::GameOver);

    let result = game.result();
    assert_eq!(result.rounds_played, 0);
    assert!(result.stopped_early);
    assert_eq!(result.winner, Seat::P1);
}

#[test]
fn exhausted_hand_is_reported_without_consuming_cards() {
    let mut game = Game::with_hands(hands_from([
        &[card(Suit::Clubs, 10), card(Suit::Clubs, 11)],
        &[card(Suit::Diamonds, 10), card(Suit::Diamonds, 11)],
        &[card(Suit::Hearts, 10)],
        &[card(Suit::Spades, 10), card(Suit::Spades, 11)],
    ]));

    assert_eq!(game.play_round().unwrap().winner, Seat::P4);
    assert_eq!(
        game.play_round().unwrap_err(),
        PlayError::HandExhausted { seat: Seat::P3 }
    );
    assert_eq!(game.hand(Seat::P1).len(), 1);
    assert_eq!(game.wins(), [0, 0, 0, 1]);
}

#[test]
fn wins_are_stable_between_reads() {
    let mut game = Game::new(GameOptions::default().with_seed(77));
    game.play_round().unwrap();

    let first = game.wins();
    assert_eq!(game.wins(), first);
    assert_eq!(game.winner(), game.winner());
    assert_eq!(game.hand(game.winner()).wins(), 1);
}
