//! Named command arguments as the host passes them: strings keyed by name.

use rustc_hash::FxHashMap;

use crate::core::{BoosterError, Result};

/// Named string arguments of one command invocation.
///
/// ```
/// use booster_packs::commands::CommandArgs;
///
/// let args = CommandArgs::new().with("boosterNum", "2").with("single", "true");
/// assert_eq!(args.int("boosterNum").unwrap(), 2);
/// assert!(args.flag("single"));
/// assert!(!args.flag("missing"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandArgs {
    values: FxHashMap<String, String>,
}

impl CommandArgs {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Raw value of an argument.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Parse an integer argument.
    ///
    /// Missing or non-numeric values are `InvalidArgument`.
    pub fn int(&self, name: &'static str) -> Result<i64> {
        let raw = self
            .get(name)
            .ok_or_else(|| BoosterError::invalid_argument(name, "missing"))?;
        raw.trim()
            .parse()
            .map_err(|_| BoosterError::invalid_argument(name, format!("not a number: {raw:?}")))
    }

    /// Boolean argument: exactly `"true"` is true, anything else is false.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.get(name) == Some("true")
    }
}

impl From<FxHashMap<String, String>> for CommandArgs {
    fn from(values: FxHashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CommandArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
