//! Multi-deck shoe with silent reshuffle on exhaustion.

use alloc::vec::Vec;

use log::trace;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, KING, Suit};

/// A shuffled multi-deck card source.
///
/// The shoe never runs dry: the deal that finds it empty first rebuilds and
/// reshuffles a full shoe of the same deck count.
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: u8,
    /// Remaining cards; the next deal comes off the end.
    cards: Vec<Card>,
    reshuffles: u32,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe of `decks` decks (at least one) with the given seed.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(decks, &mut rng);
        Self {
            decks,
            cards,
            reshuffles: 0,
            rng,
        }
    }

    /// Creates a shoe whose next deals are exactly `draws`, in order.
    ///
    /// Once the stacked cards run out the shoe reshuffles into a full shoe of
    /// `decks` decks like any other. Useful for replays and scripted tests.
    #[must_use]
    pub fn stacked(decks: u8, draws: &[Card], seed: u64) -> Self {
        let mut shoe = Self::new(decks, seed);
        shoe.cards = draws.iter().rev().copied().collect();
        shoe
    }

    /// Creates and shuffles the cards for `num_decks` decks.
    fn build(num_decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in 1..=KING {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Deals one card, reshuffling a fresh shoe first if this one is empty.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a freshly built shoe always holds at least one deck"
    )]
    pub fn deal(&mut self) -> Card {
        if self.cards.is_empty() {
            self.reshuffle();
        }
        let card = self
            .cards
            .pop()
            .expect("a freshly built shoe always holds at least one deck");
        trace!("dealt {card}, {} left in shoe", self.cards.len());
        card
    }

    /// Replaces the remaining cards with a full, freshly shuffled shoe.
    pub fn reshuffle(&mut self) {
        self.cards = Self::build(self.decks, &mut self.rng);
        self.reshuffles += 1;
        trace!("shoe reshuffled ({} decks)", self.decks);
    }

    /// Returns the number of decks in a full shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the number of cards remaining before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns how many times the shoe has been rebuilt since creation.
    #[must_use]
    pub const fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ACE;

    #[test]
    fn builds_every_card_per_deck() {
        let shoe = Shoe::new(6, 3);
        assert_eq!(shoe.remaining(), 6 * DECK_SIZE);
        let aces = shoe.cards.iter().filter(|c| c.rank == ACE).count();
        assert_eq!(aces, 24);
        let spade_kings = shoe
            .cards
            .iter()
            .filter(|c| c.rank == KING && c.suit == Suit::Spades)
            .count();
        assert_eq!(spade_kings, 6);
    }

    #[test]
    fn zero_decks_still_builds_one() {
        let shoe = Shoe::new(0, 3);
        assert_eq!(shoe.decks(), 1);
        assert_eq!(shoe.remaining(), DECK_SIZE);
    }

    #[test]
    fn stacked_cards_come_out_in_order() {
        let draws = [Card::new(Suit::Hearts, 2), Card::new(Suit::Clubs, 9)];
        let mut shoe = Shoe::stacked(1, &draws, 1);
        assert_eq!(shoe.deal(), draws[0]);
        assert_eq!(shoe.deal(), draws[1]);
        assert_eq!(shoe.reshuffles(), 0);

        shoe.deal();
        assert_eq!(shoe.reshuffles(), 1);
        assert_eq!(shoe.remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn exhausting_the_shoe_reshuffles_silently() {
        let mut shoe = Shoe::new(1, 9);
        for _ in 0..DECK_SIZE {
            shoe.deal();
        }
        assert_eq!(shoe.remaining(), 0);
        assert_eq!(shoe.reshuffles(), 0);

        shoe.deal();
        assert_eq!(shoe.reshuffles(), 1);
        assert_eq!(shoe.remaining(), DECK_SIZE - 1);
    }
}
