//! Codon table definitions and translation logic.
//!
//! This module provides:
//! - The standard RNA codon table as static data
//! - Codon to amino acid decoding (total over the 64 codons)
//! - Amino acid to codon encoding using a fixed representative codon
//!
//! Encoding is one-to-many in biology. The representative codon of a residue
//! is always the first codon of its list in [`STANDARD_CODONS`].

use std::sync::OnceLock;

use crate::error::{ConversionError, ConversionResult};

/// The stop symbol used in protein sequences.
pub const STOP: char = '*';

/// Residues and their synonymous codons, in canonical order.
pub const STANDARD_CODONS: [(char, &[&str]); 21] = [
    ('A', &["GCU", "GCC", "GCA", "GCG"]),               // Ala / Alanine
    ('C', &["UGU", "UGC"]),                             // Cys / Cysteine
    ('D', &["GAU", "GAC"]),                             // Asp / Aspartic acid
    ('E', &["GAA", "GAG"]),                             // Glu / Glutamic acid
    ('F', &["UUU", "UUC"]),                             // Phe / Phenylalanine
    ('G', &["GGU", "GGC", "GGA", "GGG"]),               // Gly / Glycine
    ('H', &["CAU", "CAC"]),                             // His / Histidine
    ('I', &["AUU", "AUC", "AUA"]),                      // Ile / Isoleucine
    ('K', &["AAA", "AAG"]),                             // Lys / Lysine
    ('L', &["UUA", "UUG", "CUU", "CUC", "CUA", "CUG"]), // Leu / Leucine
    ('M', &["AUG"]),                                    // Met / Methionine
    ('N', &["AAU", "AAC"]),                             // Asn / Asparagine
    ('P', &["CCU", "CCC", "CCA", "CCG"]),               // Pro / Proline
    ('Q', &["CAA", "CAG"]),                             // Gln / Glutamine
    ('R', &["CGU", "CGC", "CGA", "CGG", "AGA", "AGG"]), // Arg / Arginine
    ('S', &["UCU", "UCC", "UCA", "UCG", "AGU", "AGC"]), // Ser / Serine
    ('T', &["ACU", "ACC", "ACA", "ACG"]),               // Thr / Threonine
    ('V', &["GUU", "GUC", "GUA", "GUG"]),               // Val / Valine
    ('W', &["UGG"]),                                    // Trp / Tryptophan
    ('Y', &["UAU", "UAC"]),                             // Tyr / Tyrosine
    (STOP, &["UAA", "UAG", "UGA"]),                     // Stop
];

const CODON_COUNT: usize = 64;

/// Index of an RNA base in codon order (U, C, A, G).
fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Index of a codon in 0..64, or `None` if it is not made of three RNA bases.
fn codon_index(codon: &[u8]) -> Option<usize> {
    match codon {
        [b1, b2, b3] => Some(base_index(*b1)? * 16 + base_index(*b2)? * 4 + base_index(*b3)?),
        _ => None,
    }
}

/// A codon table for translating codons to amino acids and back.
#[derive(Debug, Clone)]
pub struct CodonTable {
    /// Residue for each codon index
    residues: [u8; CODON_COUNT],
    /// Index into `entries` for each ASCII residue symbol
    by_residue: [Option<usize>; 128],
    entries: &'static [(char, &'static [&'static str])],
}

impl CodonTable {
    /// Builds a table from a residue → codons list.
    fn new(entries: &'static [(char, &'static [&'static str])]) -> Self {
        let mut residues = [0u8; CODON_COUNT];
        let mut by_residue = [None; 128];

        for (i, &(residue, codons)) in entries.iter().enumerate() {
            by_residue[residue as usize] = Some(i);
            for codon in codons {
                if let Some(idx) = codon_index(codon.as_bytes()) {
                    residues[idx] = residue as u8;
                }
            }
        }

        Self {
            residues,
            by_residue,
            entries,
        }
    }

    /// Returns the standard table, built on first use.
    pub fn standard() -> &'static CodonTable {
        static STANDARD: OnceLock<CodonTable> = OnceLock::new();
        STANDARD.get_or_init(|| Self::new(&STANDARD_CODONS))
    }

    /// Decodes a single codon to its residue (or [`STOP`]).
    pub fn decode(&self, codon: &str) -> ConversionResult<char> {
        self.decode_bytes(codon.as_bytes())
            .ok_or_else(|| ConversionError::UnknownCodon(codon.to_string()))
    }

    fn decode_bytes(&self, codon: &[u8]) -> Option<char> {
        let residue = self.residues[codon_index(codon)?];
        (residue != 0).then_some(residue as char)
    }

    /// Encodes a residue to its representative codon.
    ///
    /// Residues are upper-case; `'m'` is an unknown residue, not `'M'`.
    pub fn encode(&self, residue: char) -> ConversionResult<&'static str> {
        self.codons_for(residue)
            .and_then(|codons| codons.first().copied())
            .ok_or(ConversionError::UnknownResidue(residue))
    }

    /// All synonymous codons of a residue, representative first.
    pub fn codons_for(&self, residue: char) -> Option<&'static [&'static str]> {
        if !residue.is_ascii() {
            return None;
        }
        let idx = self.by_residue[residue as usize]?;
        Some(self.entries[idx].1)
    }

    /// Iterates over residues and their codons in table order.
    pub fn residues(&self) -> impl Iterator<Item = (char, &'static [&'static str])> + '_ {
        self.entries.iter().copied()
    }

    /// Translates a codon string to residues, three symbols at a time.
    ///
    /// The length must be a multiple of 3; a trailing partial codon is an
    /// error, never dropped.
    pub fn translate(&self, rna: &str) -> ConversionResult<String> {
        let length = rna.chars().count();
        if length % 3 != 0 {
            return Err(ConversionError::MalformedInput { length });
        }

        let mut protein = String::with_capacity(length / 3);
        let mut symbols = rna.chars();
        while let (Some(b1), Some(b2), Some(b3)) = (symbols.next(), symbols.next(), symbols.next()) {
            let codon = [b1, b2, b3];
            let residue = if codon.iter().all(char::is_ascii) {
                self.decode_bytes(&[b1 as u8, b2 as u8, b3 as u8])
            } else {
                None
            };
            match residue {
                Some(residue) => protein.push(residue),
                None => return Err(ConversionError::UnknownCodon(codon.iter().collect())),
            }
        }

        Ok(protein)
    }

    /// Replaces every residue with its representative codon.
    pub fn back_translate(&self, protein: &str) -> ConversionResult<String> {
        let mut rna = String::with_capacity(protein.len() * 3);
        for residue in protein.chars() {
            rna.push_str(self.encode(residue)?);
        }
        Ok(rna)
    }
}
