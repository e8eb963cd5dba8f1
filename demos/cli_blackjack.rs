//! CLI blackjack example.
//!
//! Run with `RUST_LOG=debug` to watch the engine log each step.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::money::{format_amount, format_signed, parse_amount};
use bjtable::{Card, DealerHand, Decision, Event, GameOptions, Hand, Phase, Session};

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = Session::new(GameOptions::default(), seed);

    let Some(deposit) = prompt_amount("Deposit: ") else {
        return;
    };
    if let Err(err) = session.deposit(deposit) {
        println!("Deposit error: {err}");
        return;
    }

    loop {
        let bankroll = session.bankroll().unwrap_or(0);
        println!("\nBankroll: {}", format_amount(bankroll));
        if bankroll == 0 {
            match prompt_line("Out of money. Add funds? (y/n): ").as_str() {
                "y" | "yes" => {
                    if let Some(amount) = prompt_amount("Amount: ") {
                        if let Err(err) = session.add_funds(amount) {
                            println!("Funds error: {err}");
                        }
                    }
                    continue;
                }
                _ => break,
            }
        }

        let Some(bet) = prompt_amount("Bet (q to cash out): ") else {
            break;
        };
        let perfect_pairs = prompt_amount("Perfect Pairs (0 for none): ").unwrap_or(0);
        let twenty_one_plus_three = prompt_amount("21+3 (0 for none): ").unwrap_or(0);

        if let Err(err) = session.start_round(bet, perfect_pairs, twenty_one_plus_three) {
            println!("Bet error: {err}");
            continue;
        }

        let mut shown = 0;
        while session.in_progress() {
            shown = print_events(&session, shown);

            match session.phase() {
                Phase::Player => {
                    print_table(&session);
                    if !player_turn(&mut session) {
                        return;
                    }
                }
                Phase::Dealer | Phase::Settle => {
                    if let Err(err) = session.advance_phase() {
                        println!("Dealer error: {err}");
                        break;
                    }
                }
                Phase::Idle => {}
            }
        }

        print_events(&session, shown);
        print_table(&session);
    }

    match session.cash_out() {
        Ok(summary) => println!(
            "Cashed out {} on {} deposited ({})",
            format_amount(summary.bankroll),
            format_amount(summary.cash_in),
            format_signed(summary.profit)
        ),
        Err(err) => println!("Cash out error: {err}"),
    }
}

/// Prompts for one player decision. Returns `false` when the player quits.
fn player_turn(session: &mut Session) -> bool {
    let pending = session.round().and_then(|round| round.pending_decision());
    if let Some(decision) = pending {
        let question = match decision {
            Decision::Insurance => format!(
                "Insurance for {}? (y/n): ",
                format_amount(session.insurance_offer().unwrap_or(0))
            ),
            Decision::EvenMoney => "Take even money? (y/n): ".to_string(),
        };
        let take = matches!(prompt_line(&question).as_str(), "y" | "yes");
        let result = match (decision, take) {
            (Decision::Insurance, true) => session.take_insurance(),
            (Decision::Insurance, false) => session.decline_insurance(),
            (Decision::EvenMoney, true) => session.take_even_money(),
            (Decision::EvenMoney, false) => session.decline_even_money(),
        };
        if let Err(err) = result {
            println!("Decision error: {err}");
        }
        return true;
    }

    println!("{}", format_actions(session));
    let result = match prompt_line("Action: ").as_str() {
        "h" | "hit" => session.hit(),
        "s" | "stand" => session.stand(),
        "d" | "double" => session.double(),
        "p" | "split" => session.split(),
        "q" | "quit" => return false,
        _ => {
            println!("Unknown action.");
            return true;
        }
    };
    if let Err(err) = result {
        println!("Action error: {err}");
    }
    true
}

fn print_events(session: &Session, from: usize) -> usize {
    let Some(round) = session.round() else {
        return from;
    };
    for event in &round.events()[from..] {
        match event {
            Event::SideBetPaid { win, stake, paid } => println!(
                "Side bet {win} on {} pays {}",
                format_amount(*stake),
                format_amount(*paid)
            ),
            Event::InsuranceOffered { .. } | Event::EvenMoneyOffered => {
                println!("Dealer shows an Ace.");
            }
            Event::InsurancePaid { paid } => println!("Insurance pays {}", format_amount(*paid)),
            Event::InsuranceLost { .. } => println!("Insurance lost."),
            Event::DealerPeeked { blackjack: true } => println!("Dealer has blackjack."),
            Event::DealerDrew(card) => println!("Dealer draws {}", format_card(*card)),
            Event::HandSettled(result) => println!(
                "Hand {}: {:?} ({:?}), {}",
                result.hand_index,
                result.outcome,
                result.reason,
                format_signed(result.net())
            ),
            _ => {}
        }
    }
    round.events().len()
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

fn prompt_amount(prompt: &str) -> Option<u64> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match parse_amount(&input) {
            Ok(value) => return Some(value),
            Err(err) => println!("{err}"),
        }
    }
}

fn print_table(session: &Session) {
    let Some(round) = session.round() else {
        return;
    };
    println!("\nShoe: {} cards remaining", session.cards_remaining());
    println!("Dealer: {}", format_dealer(round.dealer()));

    let current = round.is_in_progress().then(|| round.current_index());
    for (index, hand) in round.hands().iter().enumerate() {
        let marker = if current == Some(index) { "*" } else { " " };
        println!(
            "{marker} Hand {index}: {} | {} | bet {}",
            format_hand(hand),
            hand.display(),
            format_amount(hand.bet())
        );
    }
}

fn format_actions(session: &Session) -> String {
    let actions = session.available_actions();
    let parts = [
        format_action("hit", "h", actions.hit),
        format_action("stand", "s", actions.stand),
        format_action("double", "d", actions.double),
        format_action("split", "p", actions.split),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_hole_revealed() {
        return format!("{} | {}", format_cards(dealer.cards()), dealer.display());
    }
    let Some(up_card) = dealer.up_card() else {
        return "(no cards)".to_string();
    };
    format!("{} ?? | {}", format_card(up_card), dealer.visible_value())
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    format_cards(hand.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}
