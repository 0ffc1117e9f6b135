//! Pack opening sequence as a tick-driven state machine.
//!
//! The host renders; this decides what happens next. Each `advance` call is
//! one logical step, and the host calls it whenever its own animation for
//! the current phase has finished:
//!
//! ```text
//! RevealPack -> FlipCards{1} -> FlipCards{2} -> ... -> Disperse
//!                                                          |
//!            +---- more packs queued and mode is All ------+
//!            v                                             |
//!        RevealPack (next pack)                   otherwise v
//!                                                         Close -> Finished
//! ```
//!
//! Cards flip from the last drawn to the first, and each card lands in the
//! scene slot matching its draw position.

use serde::{Deserialize, Serialize};

use crate::commands::BoosterPlugin;
use crate::config::{CardSlot, SceneLayout};
use crate::core::CardIndex;
use crate::host::BoosterHost;
use crate::packs::PackOpening;

/// Where an opening sequence is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequencePhase {
    /// The sealed pack is shown.
    RevealPack,
    /// `revealed` cards are face up.
    FlipCards {
        /// Cards flipped so far.
        revealed: usize,
    },
    /// Cards leave the screen.
    Disperse,
    /// The scene fades out.
    Close,
    /// Nothing left to do; the host can pop the scene.
    Finished,
}

/// One run of the opening scene, possibly spanning several packs.
#[derive(Clone, Debug)]
pub struct OpeningSequence {
    phase: SequencePhase,
    current: PackOpening,
    packs_opened: usize,
}

impl OpeningSequence {
    /// Open the first pack and start at `RevealPack`.
    ///
    /// Returns `None` when the pack could not be opened; the player has
    /// already been told why.
    pub fn begin(plugin: &mut BoosterPlugin, host: &mut impl BoosterHost) -> Option<Self> {
        let current = plugin.open_pack(host)?;
        Some(Self {
            phase: SequencePhase::RevealPack,
            current,
            packs_opened: 1,
        })
    }

    /// Move to the next phase and return it.
    ///
    /// Leaving `Disperse` may open the next pack. `Finished` is terminal.
    pub fn advance(&mut self, plugin: &mut BoosterPlugin, host: &mut impl BoosterHost) -> SequencePhase {
        let card_count = self.current.len();
        self.phase = match self.phase {
            SequencePhase::RevealPack if card_count == 0 => SequencePhase::Disperse,
            SequencePhase::RevealPack => SequencePhase::FlipCards { revealed: 1 },
            SequencePhase::FlipCards { revealed } if revealed < card_count => {
                SequencePhase::FlipCards { revealed: revealed + 1 }
            }
            SequencePhase::FlipCards { .. } => SequencePhase::Disperse,
            SequencePhase::Disperse => self.next_pack_or_close(plugin, host),
            SequencePhase::Close | SequencePhase::Finished => SequencePhase::Finished,
        };
        self.phase
    }

    /// Advance until `Finished`, returning every pack opened along the way.
    pub fn run_to_end(
        mut self,
        plugin: &mut BoosterPlugin,
        host: &mut impl BoosterHost,
    ) -> Vec<PackOpening> {
        let mut openings = vec![self.current.clone()];
        while !self.is_finished() {
            let before = self.packs_opened;
            self.advance(plugin, host);
            if self.packs_opened > before {
                openings.push(self.current.clone());
            }
        }
        openings
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    /// Check if the sequence has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SequencePhase::Finished
    }

    /// Pack currently on screen.
    #[must_use]
    pub fn current(&self) -> &PackOpening {
        &self.current
    }

    /// Packs opened by this sequence so far.
    #[must_use]
    pub fn packs_opened(&self) -> usize {
        self.packs_opened
    }

    /// Cards face up right now, in draw order.
    #[must_use]
    pub fn revealed_cards(&self) -> &[CardIndex] {
        let cards = self.current.cards.as_slice();
        match self.phase {
            SequencePhase::RevealPack => &[],
            SequencePhase::FlipCards { revealed } => &cards[cards.len() - revealed.min(cards.len())..],
            SequencePhase::Disperse | SequencePhase::Close | SequencePhase::Finished => cards,
        }
    }

    /// Each drawn card with the slot it lands in, in draw order.
    ///
    /// Cards beyond the configured slots get `None`.
    pub fn placements<'a>(
        &'a self,
        layout: &'a SceneLayout,
    ) -> impl Iterator<Item = (CardIndex, Option<CardSlot>)> + 'a {
        self.current
            .cards
            .iter()
            .enumerate()
            .map(|(position, &card)| (card, layout.slot(position)))
    }

    fn next_pack_or_close(
        &mut self,
        plugin: &mut BoosterPlugin,
        host: &mut impl BoosterHost,
    ) -> SequencePhase {
        let inventory = plugin.inventory();
        if !inventory.has_packs() || inventory.is_single_mode() {
            return SequencePhase::Close;
        }
        match plugin.open_pack(host) {
            Some(next) => {
                self.current = next;
                self.packs_opened += 1;
                SequencePhase::RevealPack
            }
            None => SequencePhase::Close,
        }
    }
}
