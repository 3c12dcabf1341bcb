//! Cards.
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// Value of a card of the given rank: face cards count as 10, an ace as 1.
///
/// Ranks are expected in `1..=13`; out-of-range ranks are clamped.
#[inline]
pub fn card_value(rank: u8) -> u8 {
    rank.clamp(1, 10)
}

/// Draws a card value from an infinite deck.
pub fn draw_card<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    card_value(rng.gen_range(1..=13))
}

/// Infinite deck with an optional stack of predetermined cards.
///
/// Stacked cards are dealt first, in order; afterwards cards are drawn at random.
/// Stacking is how scripted scenarios (and tests) fix the course of an episode.
#[derive(Debug, Clone)]
pub struct Deck {
    rng: SmallRng,
    stacked: VecDeque<u8>,
}

impl Deck {
    /// Creates a deck with a seeded random source.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            stacked: VecDeque::new(),
        }
    }

    /// Reseeds the random source. Stacked cards are kept.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Puts cards of the given ranks under the already stacked ones.
    pub fn stack(&mut self, ranks: &[u8]) {
        self.stacked.extend(ranks.iter().map(|&r| card_value(r)));
    }

    /// The number of stacked cards not yet dealt.
    pub fn n_stacked(&self) -> usize {
        self.stacked.len()
    }

    /// Deals one card value.
    pub fn draw(&mut self) -> u8 {
        match self.stacked.pop_front() {
            Some(v) => v,
            None => draw_card(&mut self.rng),
        }
    }
}
