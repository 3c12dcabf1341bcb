mod config;
use crate::{card::Deck, BlackjackAct, BlackjackObs};
use anyhow::Result;
pub use config::BlackjackEnvConfig;
use jackq_core::{
    error::JackqError,
    record::{Record, RecordValue},
    Env, Info, Step,
};
use log::info;
use std::fmt;

/// The dealer draws while its total is below this value.
pub const DEALER_STANDS_ON: u8 = 17;

const BLACKJACK: u8 = 21;

/// Result of a finished episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player went over 21.
    Bust,

    /// The dealer went over 21 after the player stood.
    DealerBust,

    /// The dealer finished with the higher total.
    DealerWins,

    /// The player finished with the higher total.
    PlayerWins,

    /// Equal totals.
    Tie,
}

impl Outcome {
    /// Terminal reward of the outcome.
    pub fn reward(&self) -> f32 {
        match self {
            Outcome::Bust | Outcome::DealerWins => -1.0,
            Outcome::DealerBust | Outcome::PlayerWins => 1.0,
            Outcome::Tie => 0.0,
        }
    }

    /// Tag of the outcome, e.g. `"dealer_bust"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Bust => "bust",
            Outcome::DealerBust => "dealer_bust",
            Outcome::DealerWins => "dealer_wins",
            Outcome::PlayerWins => "player_wins",
            Outcome::Tie => "tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Information attached to every step of [`BlackjackEnv`].
#[derive(Debug, Clone, PartialEq)]
pub struct BlackjackInfo {
    /// The player's total after the step (not clamped).
    pub player_hand: u8,

    /// The dealer's face-up card.
    pub dealer_showing: u8,

    /// The dealer's final total; only set when the player stood.
    pub dealer_total: Option<u8>,

    /// Set when the step ended the episode.
    pub result: Option<Outcome>,
}

impl Info for BlackjackInfo {}

impl From<&BlackjackInfo> for Record {
    fn from(info: &BlackjackInfo) -> Self {
        let mut record = Record::from_slice(&[
            ("player_hand", RecordValue::Scalar(info.player_hand as f32)),
            ("dealer_showing", RecordValue::Scalar(info.dealer_showing as f32)),
        ]);
        if let Some(total) = info.dealer_total {
            record.insert("dealer_total", RecordValue::Scalar(total as f32));
        }
        if let Some(result) = info.result {
            record.insert("result", RecordValue::String(result.as_str().to_string()));
        }
        record
    }
}

/// One round of blackjack against a dealer who stands on 17.
///
/// Hands are only kept as totals. They are dealt on [`Env::reset`], changed only by
/// [`Env::step`] and discarded at the next reset. Once an episode has terminated,
/// further steps fail with [`JackqError::EpisodeAlreadyTerminated`].
pub struct BlackjackEnv {
    deck: Deck,

    // Base seed; `reset_with_index(ix)` reseeds the deck with `seed + ix`.
    seed: i64,

    render: bool,

    player_hand: u8,

    dealer_showing: u8,

    dealer_hidden: u8,

    // Set once the dealer has played.
    dealer_total: Option<u8>,

    done: bool,
}

impl BlackjackEnv {
    fn deal(&mut self) -> BlackjackObs {
        self.player_hand = self.deck.draw() + self.deck.draw();
        self.dealer_showing = self.deck.draw();
        self.dealer_hidden = self.deck.draw();
        self.dealer_total = None;
        self.done = false;
        self.obs()
    }

    fn obs(&self) -> BlackjackObs {
        BlackjackObs::from_hand_total(self.player_hand)
    }

    // The dealer's fixed policy, then the comparison of totals.
    fn play_dealer(&mut self) -> Outcome {
        let mut total = self.dealer_showing + self.dealer_hidden;
        while total < DEALER_STANDS_ON {
            total += self.deck.draw();
        }
        self.dealer_total = Some(total);

        if total > BLACKJACK {
            Outcome::DealerBust
        } else if self.player_hand > total {
            Outcome::PlayerWins
        } else if self.player_hand < total {
            Outcome::DealerWins
        } else {
            Outcome::Tie
        }
    }

    /// Human-readable summary of the table.
    ///
    /// While the episode is running only the dealer's face-up card is shown.
    pub fn render(&self) -> String {
        if self.done {
            let dealer = self
                .dealer_total
                .unwrap_or(self.dealer_showing + self.dealer_hidden);
            format!("Player: {} | Dealer: {}", self.player_hand, dealer)
        } else {
            format!(
                "Player: {} | Dealer shows: {}",
                self.player_hand, self.dealer_showing
            )
        }
    }

    /// The player's current total (not clamped).
    pub fn player_hand(&self) -> u8 {
        self.player_hand
    }

    /// The dealer's face-up card.
    pub fn dealer_showing(&self) -> u8 {
        self.dealer_showing
    }

    /// Stacks cards to be dealt before random ones, in the order
    /// player, player, dealer face-up, dealer hidden, then draws.
    pub fn stack_cards(&mut self, ranks: &[u8]) {
        self.deck.stack(ranks);
    }

    /// The deck of the environment.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl Env for BlackjackEnv {
    type Config = BlackjackEnvConfig;
    type Obs = BlackjackObs;
    type Act = BlackjackAct;
    type Info = BlackjackInfo;

    /// Builds the environment. The first round is dealt lazily by [`Env::reset`].
    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self {
            deck: Deck::new(seed as u64),
            seed,
            render: config.render,
            player_hand: 0,
            dealer_showing: 0,
            dealer_hidden: 0,
            dealer_total: None,
            done: true,
        })
    }

    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)> {
        if self.done {
            return Err(JackqError::EpisodeAlreadyTerminated.into());
        }

        let result = match act {
            BlackjackAct::Hit => {
                self.player_hand += self.deck.draw();
                if self.player_hand > BLACKJACK {
                    Some(Outcome::Bust)
                } else {
                    None
                }
            }
            BlackjackAct::Stand => Some(self.play_dealer()),
        };
        self.done = result.is_some();
        let reward = result.map_or(0.0, |r| r.reward());

        let info = BlackjackInfo {
            player_hand: self.player_hand,
            dealer_showing: self.dealer_showing,
            dealer_total: self.dealer_total,
            result,
        };
        let record = Record::from(&info);

        if self.render {
            info!("{} -> {}", act, self.render());
        }

        let step = Step::new(self.obs(), *act, reward, self.done, info);
        Ok((step, record))
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        let obs = self.deal();
        if self.render {
            info!("{}", self.render());
        }
        Ok(obs)
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.deck.reseed((self.seed as u64).wrapping_add(ix as u64));
        self.reset()
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N_STATES;
    use test_log::test;

    fn env() -> BlackjackEnv {
        BlackjackEnv::build(&BlackjackEnvConfig::default(), 42).unwrap()
    }

    fn is_terminated(e: &anyhow::Error) -> bool {
        e.downcast_ref::<JackqError>() == Some(&JackqError::EpisodeAlreadyTerminated)
    }

    #[test]
    fn test_reset() -> Result<()> {
        let mut env = env();
        for _ in 0..200 {
            let obs = env.reset()?;
            assert!(!env.is_done());
            assert!(obs.state() < N_STATES);
            assert!((2..=20).contains(&env.player_hand()));
            assert!((1..=10).contains(&env.dealer_showing()));
        }
        Ok(())
    }

    #[test]
    fn test_step_before_first_reset_fails() {
        let mut env = env();
        let e = env.step(&BlackjackAct::Hit).err().unwrap();
        assert!(is_terminated(&e));
    }

    #[test]
    fn test_hit_bust() -> Result<()> {
        let mut env = env();
        env.stack_cards(&[10, 9, 5, 5, 13]);
        assert_eq!(env.reset()?.hand_total(), 19);

        let (step, record) = env.step(&BlackjackAct::Hit)?;
        assert_eq!(step.reward, -1.0);
        assert!(step.is_done());
        assert_eq!(step.info.result, Some(Outcome::Bust));
        assert_eq!(step.info.player_hand, 29);
        assert_eq!(step.info.dealer_total, None);
        assert_eq!(step.obs.hand_total(), 21);
        assert_eq!(record.get_string("result")?, "bust");

        // Terminated episodes stay terminated.
        let e = env.step(&BlackjackAct::Stand).err().unwrap();
        assert!(is_terminated(&e));
        assert!(env.is_done());
        assert_eq!(env.player_hand(), 29);
        Ok(())
    }

    #[test]
    fn test_hit_without_bust() -> Result<()> {
        let mut env = env();
        env.stack_cards(&[2, 3, 10, 7, 4]);
        assert_eq!(env.reset()?.state(), 1);

        let (step, _) = env.step(&BlackjackAct::Hit)?;
        assert_eq!(step.reward, 0.0);
        assert!(!step.is_done());
        assert_eq!(step.info.result, None);
        assert_eq!(step.obs.hand_total(), 9);
        Ok(())
    }

    #[test]
    fn test_stand_dealer_bust() -> Result<()> {
        let mut env = env();
        env.stack_cards(&[10, 2, 6, 10, 10]);
        env.reset()?;

        let (step, record) = env.step(&BlackjackAct::Stand)?;
        assert_eq!(step.reward, 1.0);
        assert!(step.is_done());
        assert_eq!(step.info.result, Some(Outcome::DealerBust));
        assert_eq!(step.info.dealer_total, Some(26));
        assert_eq!(record.get_string("result")?, "dealer_bust");
        assert_eq!(record.get_scalar("dealer_total")?, 26.0);
        Ok(())
    }

    #[test]
    fn test_dealer_stands_on_17() -> Result<()> {
        let mut env = env();
        env.stack_cards(&[10, 9, 10, 7, 5]);
        env.reset()?;

        let (step, _) = env.step(&BlackjackAct::Stand)?;
        assert_eq!(step.info.dealer_total, Some(17));
        assert_eq!(step.info.result, Some(Outcome::PlayerWins));
        assert_eq!(step.reward, 1.0);
        // The dealer did not draw the stacked 5.
        assert_eq!(env.deck().n_stacked(), 1);
        Ok(())
    }

    #[test]
    fn test_dealer_wins_and_tie() -> Result<()> {
        let mut env = env();
        env.stack_cards(&[10, 6, 10, 5, 4]);
        env.reset()?;
        let (step, _) = env.step(&BlackjackAct::Stand)?;
        assert_eq!(step.info.dealer_total, Some(19));
        assert_eq!(step.info.result, Some(Outcome::DealerWins));
        assert_eq!(step.reward, -1.0);

        env.stack_cards(&[10, 8, 9, 9]);
        env.reset()?;
        let (step, _) = env.step(&BlackjackAct::Stand)?;
        assert_eq!(step.info.result, Some(Outcome::Tie));
        assert_eq!(step.reward, 0.0);
        Ok(())
    }

    #[test]
    fn test_info_always_has_hands() -> Result<()> {
        let mut env = env();
        env.stack_cards(&[3, 4, 8, 2, 2]);
        env.reset()?;
        let (step, record) = env.step(&BlackjackAct::Hit)?;
        assert_eq!(step.info.player_hand, 9);
        assert_eq!(step.info.dealer_showing, 8);
        assert_eq!(record.get_scalar("player_hand")?, 9.0);
        assert_eq!(record.get_scalar("dealer_showing")?, 8.0);
        assert!(record.get("result").is_none());
        Ok(())
    }

    #[test]
    fn test_render_hides_hole_card() -> Result<()> {
        let mut env = env();
        env.stack_cards(&[10, 8, 7, 10]);
        env.reset()?;
        assert_eq!(env.render(), "Player: 18 | Dealer shows: 7");

        env.step(&BlackjackAct::Stand)?;
        assert_eq!(env.render(), "Player: 18 | Dealer: 17");
        Ok(())
    }

    #[test]
    fn test_render_after_bust_shows_both_dealer_cards() -> Result<()> {
        let mut env = env();
        env.stack_cards(&[10, 10, 4, 9, 5]);
        env.reset()?;
        env.step(&BlackjackAct::Hit)?;
        assert_eq!(env.render(), "Player: 25 | Dealer: 13");
        Ok(())
    }

    #[test]
    fn test_reset_with_index_is_reproducible() -> Result<()> {
        let mut a = env();
        let mut b = env();
        for ix in 0..20 {
            a.reset_with_index(ix)?;
            b.reset_with_index(ix)?;
            assert_eq!(a.player_hand(), b.player_hand());
            assert_eq!(a.dealer_showing(), b.dealer_showing());
        }
        Ok(())
    }
}
