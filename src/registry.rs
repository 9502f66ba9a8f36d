//! Named symbol table variants.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::codec::SymbolCodec;
use crate::error::{MorseError, Result};
use crate::table::{SymbolTable, INTERNATIONAL_NAME};

/// Name → table mapping. Tables are shared, never mutated.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: BTreeMap<String, Arc<SymbolTable>>,
}

impl TableRegistry {
    /// Registry without any tables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the built-in `international` table.
    pub fn with_builtins() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(
            INTERNATIONAL_NAME.to_string(),
            Arc::new(SymbolTable::international()),
        );
        Self { tables }
    }

    /// Add a table under a new name.
    ///
    /// Names are case-sensitive; registering an existing name fails.
    pub fn register(&mut self, name: impl Into<String>, table: SymbolTable) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MorseError::configuration("variant name cannot be empty"));
        }
        if self.tables.contains_key(&name) {
            return Err(MorseError::configuration(format!(
                "Morse code variant '{name}' is already registered"
            )));
        }
        tracing::info!(variant = %name, entries = table.len(), "registered symbol table");
        self.tables.insert(name, Arc::new(table));
        Ok(())
    }

    /// Look up a table by name.
    pub fn get(&self, name: &str) -> Result<Arc<SymbolTable>> {
        self.tables.get(name).cloned().ok_or_else(|| {
            let available = self.names().collect::<Vec<_>>().join(", ");
            tracing::error!(variant = %name, %available, "unknown symbol table");
            MorseError::configuration(format!(
                "Morse code variant '{name}' is not available. Available variants: {available}"
            ))
        })
    }

    /// Codec bound to the named table.
    pub fn codec(&self, name: &str) -> Result<SymbolCodec> {
        let table = self.get(name)?;
        tracing::debug!(variant = %name, "creating codec");
        Ok(SymbolCodec::new(name, table))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}
