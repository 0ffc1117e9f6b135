//! Plugin configuration: decoding, validation, and the typed result.
//!
//! ## Key Types
//!
//! - `PluginParameters`: Raw structured-text parameters from the host
//! - `BoosterConfig`: Validated, immutable card and pack type tables
//! - `LoadReport`: Every entry the loader skipped, with its location
//! - `SceneLayout`: Artwork and card slots for the opening sequence

pub mod loader;
pub mod params;
pub mod report;
pub mod scene;

pub use loader::{BoosterConfig, PackMembers, PackType};
pub use params::PluginParameters;
pub use report::{IssueLocation, LoadIssue, LoadReport};
pub use scene::{CardSlot, SceneLayout};
