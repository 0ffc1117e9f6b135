//! The plugin object the host holds on to.

use std::sync::Arc;

use super::{CommandArgs, PluginCommand};
use crate::config::{BoosterConfig, LoadReport, PluginParameters};
use crate::core::{BoosterError, DrawRng, DrawRngState};
use crate::host::BoosterHost;
use crate::packs::{BoosterInventory, OwnedPack, PackDrawEngine, PackOpening};

/// What a command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A pack was queued.
    PackAdded(OwnedPack),
    /// The command was rejected; the player has been told.
    Rejected(BoosterError),
    /// Packs are queued; the host should start the opening sequence.
    StartOpening,
    /// Open requested with nothing queued.
    NothingToOpen,
}

/// Draw engine, the player's pack inventory, and the draw RNG.
///
/// ## Example
///
/// ```
/// use std::num::NonZeroU32;
/// use std::sync::Arc;
/// use booster_packs::cards::{CardDefinition, CardRegistry};
/// use booster_packs::commands::{BoosterPlugin, CommandArgs, CommandOutcome, ADD_BOOSTER_PACK};
/// use booster_packs::config::{BoosterConfig, PackType};
/// use booster_packs::core::{CardIndex, DrawRng, ItemId, PackTypeId};
/// use booster_packs::host::RecordingHost;
///
/// let cards: CardRegistry = std::iter::once(
///     CardDefinition::new(CardIndex::new(0), NonZeroU32::new(1).unwrap()).with_item(ItemId::new(1)),
/// )
/// .collect();
/// let config = BoosterConfig::new(cards)
///     .with_pack_type(PackType::new(PackTypeId::new(0), "pack").with_card(CardIndex::new(0)));
///
/// let mut plugin = BoosterPlugin::new(Arc::new(config), DrawRng::new(1));
/// let mut host = RecordingHost::new();
///
/// let args = CommandArgs::new().with("boosterNum", "0").with("cardsOpened", "3");
/// let outcome = plugin.run(ADD_BOOSTER_PACK, &args, &mut host);
/// assert!(matches!(outcome, CommandOutcome::PackAdded(_)));
///
/// let opening = plugin.open_pack(&mut host).unwrap();
/// assert_eq!(opening.len(), 3);
/// assert_eq!(host.item_count(ItemId::new(1)), 3);
/// ```
#[derive(Clone, Debug)]
pub struct BoosterPlugin {
    engine: PackDrawEngine,
    inventory: BoosterInventory,
    rng: DrawRng,
}

impl BoosterPlugin {
    /// Create a plugin with an empty inventory.
    #[must_use]
    pub fn new(config: Arc<BoosterConfig>, rng: DrawRng) -> Self {
        Self::with_engine(PackDrawEngine::new(config), rng)
    }

    /// Create a plugin around a prepared engine.
    #[must_use]
    pub fn with_engine(engine: PackDrawEngine, rng: DrawRng) -> Self {
        let inventory = BoosterInventory::new().with_open_minimum(engine.min_open_cards());
        Self {
            engine,
            inventory,
            rng,
        }
    }

    /// Load configuration from plugin parameters and create the plugin.
    pub fn from_parameters(params: &PluginParameters, rng: DrawRng) -> (Self, LoadReport) {
        let (config, report) = BoosterConfig::load(params);
        if !report.is_clean() {
            tracing::warn!(issues = report.len(), "booster configuration loaded with issues");
        }
        (Self::new(Arc::new(config), rng), report)
    }

    /// Draw engine.
    #[must_use]
    pub fn engine(&self) -> &PackDrawEngine {
        &self.engine
    }

    /// Player's pack inventory.
    #[must_use]
    pub fn inventory(&self) -> &BoosterInventory {
        &self.inventory
    }

    /// Mutable access to the inventory, for grants outside the commands.
    pub fn inventory_mut(&mut self) -> &mut BoosterInventory {
        &mut self.inventory
    }

    /// RNG position, for the host's save.
    #[must_use]
    pub fn rng_state(&self) -> DrawRngState {
        self.rng.state()
    }

    /// Put back an inventory and RNG position taken from a save.
    pub fn restore(&mut self, inventory: BoosterInventory, rng: &DrawRngState) {
        self.inventory = inventory.with_open_minimum(self.engine.min_open_cards());
        self.rng = DrawRng::from_state(rng);
    }

    /// Parse and execute a host command. Never fails outward.
    pub fn run(
        &mut self,
        name: &str,
        args: &CommandArgs,
        host: &mut impl BoosterHost,
    ) -> CommandOutcome {
        match PluginCommand::parse(name, args) {
            Ok(command) => self.execute(command, host),
            Err(error) => self.reject(error, host),
        }
    }

    /// Execute a parsed command. Never fails outward.
    pub fn execute(&mut self, command: PluginCommand, host: &mut impl BoosterHost) -> CommandOutcome {
        match command {
            PluginCommand::AddBoosterPack {
                booster_num,
                cards_opened,
            } => match self.inventory.add_pack(booster_num, cards_opened) {
                Ok(pack) => CommandOutcome::PackAdded(pack),
                Err(error) => self.reject(error, host),
            },
            PluginCommand::OpenBoosterPack { single } => {
                self.inventory.set_open_mode(single);
                if self.inventory.has_packs() {
                    tracing::debug!(single, queued = self.inventory.len(), "starting pack opening");
                    CommandOutcome::StartOpening
                } else {
                    CommandOutcome::NothingToOpen
                }
            }
        }
    }

    /// Open the oldest owned pack. See [`PackDrawEngine::open_pack`].
    pub fn open_pack(&mut self, host: &mut impl BoosterHost) -> Option<PackOpening> {
        self.engine.open_pack(&mut self.inventory, &mut self.rng, host)
    }

    fn reject(&self, error: BoosterError, host: &mut impl BoosterHost) -> CommandOutcome {
        tracing::error!(%error, "booster command rejected");
        let message = match &error {
            BoosterError::InvalidArgument { .. } => error.player_message(),
            _ => "Error: Invalid booster command.",
        };
        host.show_message(message);
        CommandOutcome::Rejected(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardRegistry};
    use crate::commands::{ADD_BOOSTER_PACK, OPEN_BOOSTER_PACK};
    use crate::config::PackType;
    use crate::core::{CardIndex, ItemId, PackTypeId};
    use crate::host::RecordingHost;
    use std::num::NonZeroU32;

    fn plugin() -> BoosterPlugin {
        let cards: CardRegistry = (0..3)
            .map(|i| {
                CardDefinition::new(CardIndex::new(i), NonZeroU32::new(i + 1).unwrap())
                    .with_item(ItemId::new(100 + i))
            })
            .collect();
        let config = BoosterConfig::new(cards).with_pack_type(
            PackType::new(PackTypeId::new(1), "blue")
                .with_cards((0..3).map(CardIndex::new)),
        );
        BoosterPlugin::new(Arc::new(config), DrawRng::new(5))
    }

    fn add(booster: &str, cards: &str) -> CommandArgs {
        CommandArgs::new().with("boosterNum", booster).with("cardsOpened", cards)
    }

    #[test]
    fn test_add_command() {
        let mut plugin = plugin();
        let mut host = RecordingHost::new();

        let outcome = plugin.run(ADD_BOOSTER_PACK, &add("1", "3"), &mut host);

        assert_eq!(outcome, CommandOutcome::PackAdded(OwnedPack::new(PackTypeId::new(1), 3)));
        assert_eq!(plugin.inventory().len(), 1);
        assert!(host.messages.is_empty());
    }

    #[test]
    fn test_invalid_add_shows_message() {
        let mut plugin = plugin();
        let mut host = RecordingHost::new();

        for args in [add("-1", "3"), add("1", "0"), add("x", "3")] {
            let outcome = plugin.run(ADD_BOOSTER_PACK, &args, &mut host);
            assert!(matches!(
                outcome,
                CommandOutcome::Rejected(BoosterError::InvalidArgument { .. })
            ));
        }

        assert!(plugin.inventory().is_empty());
        assert_eq!(host.messages.len(), 3);
        assert!(host
            .messages
            .iter()
            .all(|m| m == "Error: Invalid pack number or number of cards."));
    }

    #[test]
    fn test_open_command_sets_mode() {
        let mut plugin = plugin();
        let mut host = RecordingHost::new();

        let outcome = plugin.run(OPEN_BOOSTER_PACK, &CommandArgs::new().with("single", "false"), &mut host);
        assert_eq!(outcome, CommandOutcome::NothingToOpen);
        assert!(!plugin.inventory().is_single_mode());

        plugin.run(ADD_BOOSTER_PACK, &add("1", "2"), &mut host);
        let outcome = plugin.run(OPEN_BOOSTER_PACK, &CommandArgs::new().with("single", "true"), &mut host);
        assert_eq!(outcome, CommandOutcome::StartOpening);
        assert!(plugin.inventory().is_single_mode());

        // Opening itself is left to the sequence.
        assert_eq!(plugin.inventory().len(), 1);
        assert!(host.world_untouched());
    }

    #[test]
    fn test_unknown_command_rejected() {
        let mut plugin = plugin();
        let mut host = RecordingHost::new();

        let outcome = plugin.run("Burn Pack", &CommandArgs::new(), &mut host);
        assert!(matches!(outcome, CommandOutcome::Rejected(BoosterError::UnknownCommand(_))));
        assert_eq!(host.messages, vec!["Error: Invalid booster command.".to_string()]);
    }

    #[test]
    fn test_restore_from_save() {
        let mut plugin = plugin();
        let mut host = RecordingHost::new();
        plugin.run(ADD_BOOSTER_PACK, &add("1", "4"), &mut host);
        plugin.run(ADD_BOOSTER_PACK, &add("1", "4"), &mut host);

        let saved_inventory = plugin.inventory().clone();
        let saved_rng = plugin.rng_state();
        let first = plugin.open_pack(&mut host).unwrap();

        plugin.restore(saved_inventory, &saved_rng);
        assert_eq!(plugin.inventory().len(), 2);
        let replay = plugin.open_pack(&mut host).unwrap();

        assert_eq!(first.cards, replay.cards);
    }

    #[test]
    fn test_from_parameters_reports_issues() {
        let (plugin, report) = BoosterPlugin::from_parameters(&PluginParameters::new(), DrawRng::new(1));
        assert!(!report.is_clean());
        assert!(plugin.engine().pool(PackTypeId::new(0)).is_none());
    }
}
