//! CLI Go Fish example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use gofish::{Card, Game, GameOptions, Player, Suit, Value};

fn main() {
    env_logger::init();
    println!("Go Fish CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(
        GameOptions::default(),
        "You",
        ["Brittney", "Owen", "Ana"],
        seed,
    );
    println!("{}", game.status());

    loop {
        if game.is_game_over() {
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.new_game();
                    println!("{}", game.status());
                    continue;
                }
                _ => break,
            }
        }

        print_table(&game);

        let Some(target) = prompt_target(&game) else {
            break;
        };
        let Some(value) = prompt_value() else {
            break;
        };

        match game.next_round(target, value) {
            Ok(status) => println!("\n{status}"),
            Err(err) => println!("Round error: {err}"),
        }
    }
    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_target(game: &Game) -> Option<usize> {
    loop {
        let input = prompt_line("Ask which opponent (number): ");
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(index) if (1..=game.opponents().len()).contains(&index) => return Some(index),
            _ => println!(
                "Please enter a number between 1 and {}.",
                game.opponents().len()
            ),
        }
    }
}

fn prompt_value() -> Option<Value> {
    loop {
        let input = prompt_line("Ask for which value (e.g. ace, 7, king): ");
        if input == "q" || input == "quit" {
            return None;
        }
        match parse_value(&input) {
            Some(value) => return Some(value),
            None => println!("Unknown value."),
        }
    }
}

fn parse_value(input: &str) -> Option<Value> {
    if let Ok(number) = input.parse::<usize>() {
        return (1..=13).contains(&number).then(|| Value::ALL[number - 1]);
    }
    Value::ALL
        .into_iter()
        .find(|value| value.name().eq_ignore_ascii_case(input))
}

fn print_table(game: &Game) {
    println!("\nStock: {} cards remaining", game.stock().len());
    for (index, opponent) in game.opponents().iter().enumerate() {
        println!("  [{}] {}", index + 1, opponent.status());
    }
    println!("Your hand: {}", format_hand(game.human()));
    if !game.human().books().is_empty() {
        let books: Vec<String> = game
            .human()
            .books()
            .iter()
            .map(|value| value.plural().to_string())
            .collect();
        println!("Your books: {}", books.join(", "));
    }
}

fn format_hand(player: &Player) -> String {
    if player.hand().is_empty() {
        return "(empty)".to_string();
    }
    let mut cards = player.hand().to_vec();
    cards.sort_by(gofish::compare_by_value);
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.value {
        Value::Ace => "A".to_string(),
        Value::Jack => "J".to_string(),
        Value::Queen => "Q".to_string(),
        Value::King => "K".to_string(),
        value => (value as u8).to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
