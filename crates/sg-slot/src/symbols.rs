//! Symbol palette and random reel results

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Index of a symbol in the palette
pub type SymbolIndex = u8;

/// A symbol definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Position in the palette
    pub index: SymbolIndex,
    /// Asset key (e.g., "sym1"); the renderer resolves it to sprite and frame
    pub name: String,
}

impl Symbol {
    pub fn new(index: SymbolIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// Fixed set of symbols a reel can land on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPalette {
    pub symbols: Vec<Symbol>,
}

impl SymbolPalette {
    /// Build a palette from asset keys, indexed in order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Symbol::new(i as SymbolIndex, name))
            .collect();
        Self { symbols }
    }

    /// The four-symbol palette of the classic 3×3 machine
    pub fn classic() -> Self {
        Self::from_names(["sym1", "sym2", "sym3", "sym4"])
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether an index names a symbol in this palette
    pub fn contains(&self, index: SymbolIndex) -> bool {
        (index as usize) < self.symbols.len()
    }

    /// Get symbol by index
    pub fn get(&self, index: SymbolIndex) -> Option<&Symbol> {
        self.symbols.get(index as usize)
    }

    /// Uniformly random symbol index
    ///
    /// Palette must be non-empty (enforced by config validation).
    pub fn random_index<R: Rng>(&self, rng: &mut R) -> SymbolIndex {
        rng.random_range(0..self.symbols.len()) as SymbolIndex
    }

    /// Independent random result for one reel, top to bottom
    pub fn random_column<R: Rng>(&self, rng: &mut R, rows: usize) -> Vec<SymbolIndex> {
        (0..rows).map(|_| self.random_index(rng)).collect()
    }
}

impl Default for SymbolPalette {
    fn default() -> Self {
        Self::classic()
    }
}
