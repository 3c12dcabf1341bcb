//! Simplified single-round blackjack as an MDP for [`jackq-core`](jackq_core).
//!
//! * Cards are drawn with replacement from 13 ranks; 11, 12 and 13 count as 10.
//!   There are no suits and an ace always counts as 1.
//! * The player starts with two cards and may [`Hit`](BlackjackAct::Hit) until
//!   busting or [`Stand`](BlackjackAct::Stand).
//! * On stand, the dealer draws while its total is below 17.
//! * The observation is the player's total clamped to `4..=21` and shifted to
//!   `0..18` ([`BlackjackObs`]).
//!
//! Here is an example of playing an episode with a fixed rule.
//!
//! ```
//! use anyhow::Result;
//! use jackq_blackjack_env::{BlackjackAct, BlackjackEnv, BlackjackEnvConfig};
//! use jackq_core::Env as _;
//!
//! fn main() -> Result<()> {
//!     let mut env = BlackjackEnv::build(&BlackjackEnvConfig::default(), 42)?;
//!     let mut obs = env.reset()?;
//!
//!     loop {
//!         let act = if obs.hand_total() < 17 { BlackjackAct::Hit } else { BlackjackAct::Stand };
//!         let (step, _) = env.step(&act)?;
//!         if step.is_done() {
//!             assert!(step.info.result.is_some());
//!             break;
//!         }
//!         obs = step.obs;
//!     }
//!     println!("{}", env.render());
//!
//!     Ok(())
//! }
//! ```
mod act;
mod card;
mod env;
mod obs;
pub use act::BlackjackAct;
pub use card::{card_value, draw_card, Deck};
pub use env::{BlackjackEnv, BlackjackEnvConfig, BlackjackInfo, Outcome, DEALER_STANDS_ON};
pub use obs::{hand_total_of, state_of, BlackjackObs, MAX_HAND_TOTAL, MIN_HAND_TOTAL, N_STATES};
