//! Player names keyed by symbol.

use super::types::Symbol;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default display name for X.
pub const DEFAULT_X_NAME: &str = "Max";
/// Default display name for O.
pub const DEFAULT_O_NAME: &str = "Manuel";

/// Display names for both symbols.
///
/// Both entries always exist; only [`PlayerRegistry::rename`] changes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    x: String,
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with the given names.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Name registered for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Replaces the name for `symbol`, leaving the other entry untouched.
    ///
    /// Any string is accepted, including an empty one.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, symbol: Symbol, name: impl Into<String>) {
        let name = name.into();
        debug!(%symbol, new_name = %name, "Renaming player");
        match symbol {
            Symbol::X => self.x = name,
            Symbol::O => self.o = name,
        }
    }

    /// The identity (symbol plus name) behind `symbol`.
    pub fn identity(&self, symbol: Symbol) -> PlayerIdentity {
        PlayerIdentity {
            symbol,
            name: self.name(symbol).to_string(),
        }
    }

    /// Iterates both entries, X first.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        [(Symbol::X, self.x.as_str()), (Symbol::O, self.o.as_str())].into_iter()
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}

/// A player as known at the time of the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct PlayerIdentity {
    /// Symbol the player plays.
    symbol: Symbol,
    /// Display name.
    name: String,
}

impl std::fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
