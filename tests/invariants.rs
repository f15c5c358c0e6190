//! Property-based tests for card conservation, book extraction and
//! computer-turn termination.

use gofish::{
    BOOK_SIZE, Card, DECK_SIZE, Deck, Game, GameOptions, Player, SeededRandom, Suit, Value,
};
use proptest::prelude::*;

fn card_strategy() -> impl Strategy<Value = Card> {
    (0usize..13, 0usize..4)
        .prop_map(|(value, suit)| Card::new(Value::ALL[value], Suit::ALL[suit]))
}

fn assert_no_full_book_in_hand(player: &Player) {
    for value in Value::ALL {
        assert!(
            player.count_of(value) < BOOK_SIZE,
            "{} holds four {}",
            player.name(),
            value.plural()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn cards_are_conserved_through_a_whole_game(seed in any::<u64>(), opponents in 1usize..5) {
        let names: Vec<String> = (1..=opponents).map(|i| format!("Computer{i}")).collect();
        let mut game = Game::new(GameOptions::default(), "Human", names, seed);
        let mut rng = SeededRandom::new(seed ^ 0x5eed);
        prop_assert_eq!(game.cards_accounted(), DECK_SIZE);

        for _ in 0..2_000 {
            if game.is_game_over() {
                break;
            }
            let value = if game.human().hand().is_empty() {
                Value::Ace
            } else {
                game.human().random_value_from_hand(&mut rng)
            };
            let target = game.random_player(gofish::HUMAN);
            game.next_round(target, value).unwrap();

            prop_assert_eq!(game.cards_accounted(), DECK_SIZE);
            for player in game.players() {
                assert_no_full_book_in_hand(player);
            }
        }
        prop_assert!(game.is_game_over());
    }

    #[test]
    fn computer_passes_are_bounded(seed in any::<u64>(), opponents in 1usize..6) {
        let names: Vec<String> = (1..=opponents).map(|i| format!("Computer{i}")).collect();
        let mut game = Game::new(GameOptions::default(), "Human", names, seed);
        for _ in 0..30 {
            let passes = game.computer_players_play();
            prop_assert!(passes <= DECK_SIZE);
            prop_assert_eq!(game.cards_accounted(), DECK_SIZE);
        }
    }

    #[test]
    fn book_extraction_is_idempotent(cards in prop::collection::btree_set(0usize..52, 0..30)) {
        let deck = Deck::new();
        let mut player = Player::new("Ana");
        player.add_cards_and_pull_out_books(cards.iter().map(|&i| deck.cards()[i]));
        let before = player.clone();

        prop_assert!(player.pull_out_books().is_empty());
        prop_assert_eq!(&player, &before);
        assert_no_full_book_in_hand(&player);
        prop_assert_eq!(player.hand().len() + BOOK_SIZE * player.books().len(), cards.len());
    }

    #[test]
    fn asking_moves_every_matching_card(
        hand in prop::collection::vec(card_strategy(), 1..8),
        value in 0usize..13,
    ) {
        let value = Value::ALL[value];
        let mut player = Player::new("Bo");
        player.add_cards_and_pull_out_books(hand);
        let held = player.count_of(value);
        let mut stock = Deck::empty();

        let given = player.do_you_have_any(value, &mut stock);
        prop_assert_eq!(given.len(), held);
        prop_assert!(given.iter().all(|c| c.value == value));
        prop_assert_eq!(player.count_of(value), 0);
    }

    #[test]
    fn draw_never_overdraws(n in 0usize..80) {
        let mut deck = Deck::new();
        let drawn = deck.draw(n);
        prop_assert_eq!(drawn.len(), n.min(DECK_SIZE));
        prop_assert_eq!(deck.len(), DECK_SIZE - drawn.len());
    }
}
