//! Computer player backed by the move selector.

use super::{Player, PlayerKind};
use anyhow::Result;
use noughts_core::{Board, Mark, MoveSelector, RngIndex, Tier};
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer opponent at a fixed strength.
pub struct ComputerPlayer {
    name: String,
    tier: Tier,
    delay: Duration,
    selector: MoveSelector<RngIndex<StdRng>>,
}

impl ComputerPlayer {
    /// Creates a computer player seeded from the OS.
    pub fn new(name: impl Into<String>, tier: Tier, delay: Duration) -> Self {
        Self::with_selector(name, tier, delay, MoveSelector::with_random(RngIndex::from_entropy()))
    }

    /// Creates a computer player with a reproducible random source.
    pub fn seeded(name: impl Into<String>, tier: Tier, delay: Duration, seed: u64) -> Self {
        Self::with_selector(name, tier, delay, MoveSelector::with_random(RngIndex::seeded(seed)))
    }

    fn with_selector(
        name: impl Into<String>,
        tier: Tier,
        delay: Duration,
        selector: MoveSelector<RngIndex<StdRng>>,
    ) -> Self {
        Self {
            name: name.into(),
            tier,
            delay,
            selector,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip(self, board), fields(player = %self.name, tier = %self.tier))]
    async fn get_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let Some(pos) = self.selector.select_move(board, mark, self.tier) else {
            anyhow::bail!("No valid moves available");
        };
        debug!(position = pos, "Computer chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}
