//! Base-substitution cipher between nucleotide alphabets.
//!
//! A cipher is defined by two parallel ordered alphabets of four symbols.
//! Each input symbol is first resolved to its ordinal slot in the source
//! alphabet (the placeholder), then the slot is resolved to the target symbol
//! at the same position. Going through the slot means a symbol produced by
//! the substitution can never be substituted a second time, whatever symbols
//! the two alphabets share.
//!
//! Upper and lower case are two independent substitution tables composed into
//! one cipher.
//!
//! Canonical pairings:
//! - DNA → mRNA: A→U, T→A, G→C, C→G
//! - mRNA → tRNA and tRNA → mRNA: A↔U, G↔C
//! - mRNA → DNA: U→A, A→T, C→G, G→C

use crate::error::{ConversionError, ConversionResult};

/// An ordered list of four nucleotide symbols of one letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet([u8; 4]);

impl Alphabet {
    pub const fn new(symbols: [u8; 4]) -> Self {
        Self(symbols)
    }

    /// Returns the same alphabet in lower case.
    pub const fn to_lowercase(self) -> Self {
        let mut symbols = self.0;
        let mut i = 0;
        while i < symbols.len() {
            symbols[i] = symbols[i].to_ascii_lowercase();
            i += 1;
        }
        Self(symbols)
    }

    /// Ordinal slot of a symbol, if it belongs to this alphabet.
    pub fn slot(&self, symbol: u8) -> Option<usize> {
        self.0.iter().position(|&s| s == symbol)
    }

    /// Symbol stored at an ordinal slot.
    pub fn symbol(&self, slot: usize) -> u8 {
        self.0[slot]
    }

    pub fn symbols(&self) -> &[u8; 4] {
        &self.0
    }
}

/// One-case mapping from a source alphabet to a target alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionTable {
    source: Alphabet,
    target: Alphabet,
}

impl SubstitutionTable {
    pub const fn new(source: Alphabet, target: Alphabet) -> Self {
        Self { source, target }
    }

    /// Maps a symbol through its source slot, or `None` if it is not a
    /// source symbol.
    pub fn map(&self, symbol: u8) -> Option<u8> {
        self.source
            .slot(symbol)
            .map(|slot| self.target.symbol(slot))
    }

    pub fn source(&self) -> Alphabet {
        self.source
    }

    pub fn target(&self) -> Alphabet {
        self.target
    }

    /// Returns the table mapping target symbols back to source symbols.
    pub const fn inverse(self) -> Self {
        Self::new(self.target, self.source)
    }
}

/// What to do with symbols outside the source alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolPolicy {
    /// Copy the symbol to the output unchanged
    #[default]
    PassThrough,
    /// Fail with `UnsupportedAlphabetSymbol`
    Reject,
}

/// Stateless transcoder between two nucleotide alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseCipher {
    tables: [SubstitutionTable; 2],
}

/// DNA to mRNA: A→U, T→A, G→C, C→G.
pub const DNA_TO_MRNA: BaseCipher = BaseCipher::new(*b"ATGC", *b"UACG");

/// mRNA to DNA, the inverse of [`DNA_TO_MRNA`].
pub const MRNA_TO_DNA: BaseCipher = DNA_TO_MRNA.inverse();

/// mRNA to tRNA: A↔U, G↔C.
pub const MRNA_TO_TRNA: BaseCipher = BaseCipher::new(*b"AUGC", *b"UACG");

/// tRNA to mRNA, the inverse of [`MRNA_TO_TRNA`].
pub const TRNA_TO_MRNA: BaseCipher = MRNA_TO_TRNA.inverse();

impl BaseCipher {
    /// Builds a cipher from two parallel upper-case alphabets. The lower-case
    /// table is derived from them and kept independent.
    pub const fn new(source: [u8; 4], target: [u8; 4]) -> Self {
        let source = Alphabet::new(source);
        let target = Alphabet::new(target);
        Self {
            tables: [
                SubstitutionTable::new(source, target),
                SubstitutionTable::new(source.to_lowercase(), target.to_lowercase()),
            ],
        }
    }

    /// Returns the cipher for the opposite direction.
    pub const fn inverse(self) -> Self {
        let [upper, lower] = self.tables;
        Self {
            tables: [upper.inverse(), lower.inverse()],
        }
    }

    pub fn tables(&self) -> &[SubstitutionTable; 2] {
        &self.tables
    }

    fn map(&self, symbol: u8) -> Option<u8> {
        self.tables.iter().find_map(|table| table.map(symbol))
    }

    /// Substitutes every source symbol of `input`, producing a string of the
    /// same length.
    pub fn substitute(&self, input: &str, policy: SymbolPolicy) -> ConversionResult<String> {
        let mut output = String::with_capacity(input.len());

        for (position, c) in input.chars().enumerate() {
            let mapped = if c.is_ascii() { self.map(c as u8) } else { None };

            match (mapped, policy) {
                (Some(b), _) => output.push(b as char),
                (None, SymbolPolicy::PassThrough) => output.push(c),
                (None, SymbolPolicy::Reject) => {
                    return Err(ConversionError::UnsupportedAlphabetSymbol {
                        symbol: c,
                        position,
                    });
                }
            }
        }

        Ok(output)
    }
}
