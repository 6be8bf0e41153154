//! Conversion pipelines between sequence representations.
//!
//! Every conversion is a fixed chain of single steps, each of which is either
//! a base substitution ([`crate::cipher`]) or a codon table lookup
//! ([`crate::genetic_code`]):
//!
//! | Conversion    | Steps                                   |
//! |---------------|-----------------------------------------|
//! | DNA → mRNA    | substitute                              |
//! | mRNA → tRNA   | substitute                              |
//! | tRNA → Protein| translate                               |
//! | Protein → tRNA| back-translate                          |
//! | tRNA → mRNA   | substitute                              |
//! | mRNA → DNA    | substitute                              |
//! | DNA → Protein | DNA → mRNA → tRNA → Protein             |
//! | Protein → DNA | Protein → tRNA → mRNA → DNA             |
//!
//! Steps run strictly in order, each one consuming the previous output. The
//! first failing step aborts the whole conversion.

use std::fmt;
use std::str::FromStr;

use crate::cipher::{BaseCipher, SymbolPolicy, DNA_TO_MRNA, MRNA_TO_DNA, MRNA_TO_TRNA, TRNA_TO_MRNA};
use crate::error::{ConversionError, ConversionResult};
use crate::genetic_code::CodonTable;
use crate::model::{MoleculeType, Sequence};

/// A single conversion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    DnaToMrna,
    MrnaToTrna,
    TrnaToMrna,
    MrnaToDna,
    /// Codons to residues
    Translate,
    /// Residues to representative codons
    BackTranslate,
}

impl Step {
    /// Molecule type consumed by this step.
    pub fn source(self) -> MoleculeType {
        match self {
            Step::DnaToMrna => MoleculeType::Dna,
            Step::MrnaToTrna | Step::MrnaToDna => MoleculeType::Mrna,
            Step::TrnaToMrna | Step::Translate => MoleculeType::Trna,
            Step::BackTranslate => MoleculeType::Protein,
        }
    }

    /// Molecule type produced by this step.
    pub fn target(self) -> MoleculeType {
        match self {
            Step::DnaToMrna | Step::TrnaToMrna => MoleculeType::Mrna,
            Step::MrnaToTrna | Step::BackTranslate => MoleculeType::Trna,
            Step::MrnaToDna => MoleculeType::Dna,
            Step::Translate => MoleculeType::Protein,
        }
    }

    /// The substitution applied by this step, if it is one.
    pub fn cipher(self) -> Option<BaseCipher> {
        match self {
            Step::DnaToMrna => Some(DNA_TO_MRNA),
            Step::MrnaToTrna => Some(MRNA_TO_TRNA),
            Step::TrnaToMrna => Some(TRNA_TO_MRNA),
            Step::MrnaToDna => Some(MRNA_TO_DNA),
            Step::Translate | Step::BackTranslate => None,
        }
    }
}

/// The eight supported conversions, keyed by (source, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    DnaToMrna,
    MrnaToTrna,
    TrnaToProtein,
    ProteinToTrna,
    TrnaToMrna,
    MrnaToDna,
    DnaToProtein,
    ProteinToDna,
}

impl Conversion {
    pub const ALL: [Conversion; 8] = [
        Conversion::DnaToMrna,
        Conversion::MrnaToTrna,
        Conversion::TrnaToProtein,
        Conversion::ProteinToTrna,
        Conversion::TrnaToMrna,
        Conversion::MrnaToDna,
        Conversion::DnaToProtein,
        Conversion::ProteinToDna,
    ];

    /// Looks up the conversion for a (source, target) pair.
    pub fn from_pair(source: MoleculeType, target: MoleculeType) -> ConversionResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.source() == source && c.target() == target)
            .ok_or_else(|| {
                ConversionError::UnsupportedConversion(format!("{} > {}", source, target))
            })
    }

    /// The chain of steps realizing this conversion.
    pub fn steps(self) -> &'static [Step] {
        match self {
            Conversion::DnaToMrna => &[Step::DnaToMrna],
            Conversion::MrnaToTrna => &[Step::MrnaToTrna],
            Conversion::TrnaToProtein => &[Step::Translate],
            Conversion::ProteinToTrna => &[Step::BackTranslate],
            Conversion::TrnaToMrna => &[Step::TrnaToMrna],
            Conversion::MrnaToDna => &[Step::MrnaToDna],
            Conversion::DnaToProtein => &[Step::DnaToMrna, Step::MrnaToTrna, Step::Translate],
            Conversion::ProteinToDna => &[Step::BackTranslate, Step::TrnaToMrna, Step::MrnaToDna],
        }
    }

    pub fn source(self) -> MoleculeType {
        self.steps()[0].source()
    }

    pub fn target(self) -> MoleculeType {
        let steps = self.steps();
        steps[steps.len() - 1].target()
    }

    /// Long name, e.g. `dna-mrna`.
    pub fn name(self) -> &'static str {
        match self {
            Conversion::DnaToMrna => "dna-mrna",
            Conversion::MrnaToTrna => "mrna-trna",
            Conversion::TrnaToProtein => "trna-prot",
            Conversion::ProteinToTrna => "prot-trna",
            Conversion::TrnaToMrna => "trna-mrna",
            Conversion::MrnaToDna => "mrna-dna",
            Conversion::DnaToProtein => "dna-prot",
            Conversion::ProteinToDna => "prot-dna",
        }
    }

    /// Two-letter alias, e.g. `dm`.
    pub fn short_name(self) -> &'static str {
        match self {
            Conversion::DnaToMrna => "dm",
            Conversion::MrnaToTrna => "mt",
            Conversion::TrnaToProtein => "tp",
            Conversion::ProteinToTrna => "pt",
            Conversion::TrnaToMrna => "tm",
            Conversion::MrnaToDna => "md",
            Conversion::DnaToProtein => "dp",
            Conversion::ProteinToDna => "pd",
        }
    }

    /// Tag used in output file names, e.g. `DNA-mRNA`.
    pub fn suffix(self) -> String {
        format!("{}-{}", self.source(), self.target())
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.source(), self.target())
    }
}

impl FromStr for Conversion {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim_start_matches('-').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name || c.short_name() == name)
            .ok_or_else(|| ConversionError::UnsupportedConversion(s.to_string()))
    }
}

/// Runs conversion pipelines over raw symbol strings.
#[derive(Debug, Clone, Copy)]
pub struct SequenceConverter {
    table: &'static CodonTable,
    policy: SymbolPolicy,
}

impl Default for SequenceConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceConverter {
    /// Creates a converter over the standard codon table that passes
    /// unknown nucleotide symbols through.
    pub fn new() -> Self {
        Self {
            table: CodonTable::standard(),
            policy: SymbolPolicy::PassThrough,
        }
    }

    /// Sets how symbols outside a source alphabet are handled.
    pub fn with_policy(mut self, policy: SymbolPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Applies one step to a raw symbol string.
    pub fn apply_step(&self, step: Step, input: &str) -> ConversionResult<String> {
        match step.cipher() {
            Some(cipher) => cipher.substitute(input, self.policy),
            None if step == Step::Translate => self.table.translate(input),
            None => self.table.back_translate(input),
        }
    }

    /// Runs a full conversion over a raw symbol string.
    pub fn convert_str(&self, conversion: Conversion, input: &str) -> ConversionResult<String> {
        let mut current = input.to_string();
        for &step in conversion.steps() {
            current = self.apply_step(step, &current)?;
        }
        Ok(current)
    }

    /// Runs a full conversion over a tagged sequence.
    ///
    /// The sequence must be of the conversion's source type.
    pub fn convert(&self, conversion: Conversion, sequence: &Sequence) -> ConversionResult<Sequence> {
        if sequence.molecule() != conversion.source() {
            return Err(ConversionError::MoleculeMismatch {
                expected: conversion.source(),
                found: sequence.molecule(),
            });
        }
        let data = self.convert_str(conversion, sequence.as_str())?;
        Ok(Sequence::new(conversion.target(), data))
    }

    /// Converts a sequence to the requested molecule type.
    pub fn convert_to(&self, sequence: &Sequence, target: MoleculeType) -> ConversionResult<Sequence> {
        let conversion = Conversion::from_pair(sequence.molecule(), target)?;
        self.convert(conversion, sequence)
    }

    pub fn dna_to_mrna(&self, dna: &str) -> ConversionResult<String> {
        self.convert_str(Conversion::DnaToMrna, dna)
    }

    pub fn mrna_to_trna(&self, mrna: &str) -> ConversionResult<String> {
        self.convert_str(Conversion::MrnaToTrna, mrna)
    }

    pub fn trna_to_protein(&self, trna: &str) -> ConversionResult<String> {
        self.convert_str(Conversion::TrnaToProtein, trna)
    }

    pub fn protein_to_trna(&self, protein: &str) -> ConversionResult<String> {
        self.convert_str(Conversion::ProteinToTrna, protein)
    }

    pub fn trna_to_mrna(&self, trna: &str) -> ConversionResult<String> {
        self.convert_str(Conversion::TrnaToMrna, trna)
    }

    pub fn mrna_to_dna(&self, mrna: &str) -> ConversionResult<String> {
        self.convert_str(Conversion::MrnaToDna, mrna)
    }

    pub fn dna_to_protein(&self, dna: &str) -> ConversionResult<String> {
        self.convert_str(Conversion::DnaToProtein, dna)
    }

    pub fn protein_to_dna(&self, protein: &str) -> ConversionResult<String> {
        self.convert_str(Conversion::ProteinToDna, protein)
    }
}
