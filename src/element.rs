use crate::data::{ATOMIC_MASS, ELEMENT_SYMBOLS, SYMBOL_TO_Z};

/// Highest atomic number with reference data available.
pub const MAX_Z: u32 = 98;

/// Immutable identity of a chemical element.
///
/// An `Element` is just a validated atomic number. It serves as the key for
/// per-element cross section providers and as the input that selects the
/// reference data (symbol, atomic mass). Ordering follows the atomic number,
/// which gives material compositions a stable, platform-independent iteration
/// order for weighted sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element {
    atomic_number: u32,
}

impl Element {
    /// Create an element from its atomic number.
    pub fn new(atomic_number: u32) -> Result<Self, String> {
        if atomic_number == 0 || atomic_number > MAX_Z {
            return Err(format!(
                "Atomic number {} outside supported range 1..={}",
                atomic_number, MAX_Z
            ));
        }
        Ok(Element { atomic_number })
    }

    /// Create an element from its chemical symbol, e.g. "Cu".
    pub fn from_symbol(symbol: impl AsRef<str>) -> Result<Self, String> {
        let symbol = symbol.as_ref();
        SYMBOL_TO_Z
            .get(symbol)
            .map(|&z| Element { atomic_number: z })
            .ok_or_else(|| format!("Unknown element symbol: '{}'", symbol))
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Chemical symbol, e.g. "Fe" for Z = 26.
    pub fn symbol(&self) -> &'static str {
        ELEMENT_SYMBOLS[(self.atomic_number - 1) as usize]
    }

    /// Standard atomic weight in g/mol.
    pub fn atomic_mass(&self) -> f64 {
        ATOMIC_MASS[(self.atomic_number - 1) as usize]
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
