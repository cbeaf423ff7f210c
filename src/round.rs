//! Round evaluation: validate ships and guesses, then count what sank.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::RoundError;
use crate::config::RoundConfig;
use crate::guess::GuessSet;
use crate::ship::{parse_ships, ShipPlacement};

/// Ships fully covered by the guesses of one round, in ship input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RoundResult {
    sunk: Vec<ShipPlacement>,
}

impl RoundResult {
    pub fn sunk(&self) -> &[ShipPlacement] {
        &self.sunk
    }

    /// Number of sunk ships.
    pub fn count(&self) -> usize {
        self.sunk.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sunk.is_empty()
    }

    /// Summary printed after a round. Empty when nothing sank.
    pub fn report_lines(&self) -> Vec<String> {
        if self.sunk.is_empty() {
            return Vec::new();
        }
        let mut lines = Vec::with_capacity(self.sunk.len() + 2);
        lines.push(format!("You sunk {} ships.", self.sunk.len()));
        lines.push(String::from("Sunk ships are:"));
        lines.extend(self.sunk.iter().map(|ship| format!("{}", ship)));
        lines
    }
}

/// Ships whose every cell appears among the guesses.
pub fn sunk_ships(ships: &[ShipPlacement], guesses: &GuessSet) -> Vec<ShipPlacement> {
    ships
        .iter()
        .filter(|ship| ship.is_sunk_by(guesses.board()))
        .cloned()
        .collect()
}

/// Scores rounds under a fixed [`RoundConfig`]. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundEvaluator {
    config: RoundConfig,
}

impl RoundEvaluator {
    pub fn new(config: RoundConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Validate ships, then guesses, and return the sunk ships. Stops at the
    /// first violation.
    pub fn evaluate<S, G>(&self, ships: &[S], guesses: &[G]) -> Result<RoundResult, RoundError>
    where
        S: AsRef<str>,
        G: AsRef<str>,
    {
        let ships = parse_ships(ships, &self.config)?;
        let guesses = GuessSet::parse(guesses)?;
        let sunk = sunk_ships(&ships, &guesses);
        log::info!(
            "{} of {} ship(s) sunk by {} guess(es)",
            sunk.len(),
            ships.len(),
            guesses.len()
        );
        Ok(RoundResult { sunk })
    }

    /// [`evaluate`](Self::evaluate), printing the summary to stdout when
    /// anything sank. Returns the sunk count.
    #[cfg(feature = "std")]
    pub fn play<S, G>(&self, ships: &[S], guesses: &[G]) -> Result<usize, RoundError>
    where
        S: AsRef<str>,
        G: AsRef<str>,
    {
        let result = self.evaluate(ships, guesses)?;
        for line in result.report_lines() {
            std::println!("{}", line);
        }
        Ok(result.count())
    }
}

/// Score one round with the default configuration.
#[cfg(feature = "std")]
pub fn play<S, G>(ships: &[S], guesses: &[G]) -> Result<usize, RoundError>
where
    S: AsRef<str>,
    G: AsRef<str>,
{
    RoundEvaluator::default().play(ships, guesses)
}
