//! Plugin commands the host can invoke.
//!
//! The host dispatches commands by name with string arguments. Parsing
//! turns them into a `PluginCommand`; `BoosterPlugin` executes them against
//! the player's inventory and never lets an error escape to the host.

mod args;
mod plugin;

pub use args::CommandArgs;
pub use plugin::{BoosterPlugin, CommandOutcome};

use crate::core::{BoosterError, Result};

/// Host command name for adding a pack.
pub const ADD_BOOSTER_PACK: &str = "Add Booster Pack";
/// Host command name for opening packs.
pub const OPEN_BOOSTER_PACK: &str = "Open Booster Pack";

/// A parsed plugin command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluginCommand {
    /// Queue one pack of `booster_num` yielding `cards_opened` cards.
    AddBoosterPack {
        /// Pack type index.
        booster_num: i64,
        /// Cards per pack.
        cards_opened: i64,
    },
    /// Set the open mode and start opening if anything is queued.
    OpenBoosterPack {
        /// Open one pack (`true`) or every queued pack (`false`).
        single: bool,
    },
}

impl PluginCommand {
    /// Parse a command from its host name and named arguments.
    ///
    /// Range checks are left to the inventory; this only checks that the
    /// arguments are numbers.
    pub fn parse(name: &str, args: &CommandArgs) -> Result<Self> {
        match name {
            ADD_BOOSTER_PACK => Ok(PluginCommand::AddBoosterPack {
                booster_num: args.int("boosterNum")?,
                cards_opened: args.int("cardsOpened")?,
            }),
            OPEN_BOOSTER_PACK => Ok(PluginCommand::OpenBoosterPack {
                single: args.flag("single"),
            }),
            other => Err(BoosterError::UnknownCommand(other.to_string())),
        }
    }
}
