//! Error taxonomy for pack commands, inventory, and drawing.

use thiserror::Error;

use super::ids::{CardIndex, ItemId, PackTypeId};

/// Everything that can go wrong between a command and a finished draw.
///
/// None of these are fatal to the host. The command and open boundaries
/// log them and turn them into a player-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoosterError {
    /// A command argument was non-numeric or out of range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Argument name as the host passed it.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// An open was requested with nothing queued.
    #[error("no booster packs queued")]
    EmptyQueue,

    /// The dequeued entry cannot be opened.
    #[error("invalid pack data for {pack_type}: {card_count} card(s), expected {minimum} to {maximum}")]
    InvalidPackData {
        /// Pack type of the rejected entry.
        pack_type: PackTypeId,
        /// Card count of the rejected entry.
        card_count: u32,
        /// Smallest card count an open accepts.
        minimum: u32,
        /// Largest card count an open accepts.
        maximum: u32,
    },

    /// A pack type, card, or item could not be resolved from configuration.
    #[error("cannot resolve {0}")]
    ResolutionFailure(Unresolved),

    /// The host invoked a command name this plugin does not register.
    #[error("unknown plugin command `{0}`")]
    UnknownCommand(String),

    /// A required top-level configuration parameter was missing or unreadable.
    #[error("configuration error: {0}")]
    Config(String),
}

/// What a [`BoosterError::ResolutionFailure`] failed to resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unresolved {
    /// Pack type is not configured or has an empty pool.
    PackType(PackTypeId),
    /// Card index is outside the card list.
    Card(CardIndex),
    /// Card has no grantable item configured.
    ItemReference(CardIndex),
    /// Host has no item with this id.
    Item(ItemId),
}

impl std::fmt::Display for Unresolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unresolved::PackType(id) => write!(f, "pack type {id}"),
            Unresolved::Card(card) => write!(f, "card {card}"),
            Unresolved::ItemReference(card) => write!(f, "item reference of {card}"),
            Unresolved::Item(item) => write!(f, "{item}"),
        }
    }
}

impl BoosterError {
    /// Shorthand for an [`BoosterError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Player-facing message shown through the host's message window.
    #[must_use]
    pub fn player_message(&self) -> &'static str {
        match self {
            BoosterError::InvalidArgument { .. } => {
                "Error: Invalid pack number or number of cards."
            }
            BoosterError::EmptyQueue | BoosterError::InvalidPackData { .. } => {
                "Error: Invalid pack data."
            }
            BoosterError::ResolutionFailure(_)
            | BoosterError::UnknownCommand(_)
            | BoosterError::Config(_) => "Error: Unable to open booster pack.",
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = BoosterError> = std::result::Result<T, E>;
