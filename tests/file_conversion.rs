use std::fs;
use std::path::Path;

use seqconvert::cipher::SymbolPolicy;
use seqconvert::controller::{convert_file, convert_files, ConvertOptions, OutputTarget};
use seqconvert::converter::Conversion;
use seqconvert::formats::{read_records, FormatError};
use seqconvert::model::MoleculeType;

const DNA_RECORD: &str = "\
>sample chromosome fragment
ATGGCTTTTAAA
CCCGGGTAA
";

fn write_input(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_dna_to_mrna_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "test_dna.fas", DNA_RECORD);

    let converted = convert_file(&input, &ConvertOptions::new(Conversion::DnaToMrna)).unwrap();
    let output = converted.output.unwrap();
    assert_eq!(output, dir.path().join("test_dna_(DNA-mRNA).fas"));

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        ">sample | DNA > mRNA Translation\nUACCGAAAAUUUGGGCCCAUU\n"
    );

    let back = convert_file(&output, &ConvertOptions::new(Conversion::MrnaToDna)).unwrap();
    assert_eq!(back.records[0].sequence.as_str(), "ATGGCTTTTAAACCCGGGTAA");
    assert!(dir.path().join("test_dna_(DNA-mRNA)_(mRNA-DNA).fas").exists());
}

#[test]
fn test_dna_to_protein_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "gene.fasta", DNA_RECORD);

    let converted = convert_file(&input, &ConvertOptions::new(Conversion::DnaToProtein)).unwrap();
    assert_eq!(converted.records[0].sequence.as_str(), "MAFKPG*");

    let records = read_records(converted.output.unwrap(), MoleculeType::Protein).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "sample");
    assert_eq!(records[0].sequence.as_str(), "MAFKPG*");
}

#[test]
fn test_long_output_is_wrapped() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "prot.fas", &format!(">p\n{}\n", "M".repeat(30)));

    let mut options = ConvertOptions::new(Conversion::ProteinToDna);
    options.output = OutputTarget::Path(dir.path().join("out.fa"));
    convert_file(&input, &options).unwrap();

    let content = fs::read_to_string(dir.path().join("out.fa")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], ">p | Protein > DNA Translation");
    assert_eq!(lines[1].len(), 60);
    assert_eq!(lines[2].len(), 30);
    assert_eq!(lines[1..].concat(), "ATG".repeat(30));
}

#[test]
fn test_multiple_records_and_stdout_target() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "multi.fas", ">a\nAUGGCU\n>b\nUUUUAA\n");

    let mut options = ConvertOptions::new(Conversion::TrnaToProtein);
    options.output = OutputTarget::Stdout;
    let converted = convert_file(&input, &options).unwrap();

    assert!(converted.output.is_none());
    let proteins: Vec<&str> = converted.records.iter().map(|r| r.sequence.as_str()).collect();
    assert_eq!(proteins, ["MA", "F*"]);
    assert!(!dir.path().join("multi_(tRNA-Protein).fas").exists());
}

#[test]
fn test_malformed_record_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "bad.fas", ">ok\nAUG\n>bad\nAUGG\n");

    let err = convert_file(&input, &ConvertOptions::new(Conversion::TrnaToProtein)).unwrap_err();
    assert!(matches!(err, FormatError::ConversionError { .. }));
    assert!(!dir.path().join("bad_(tRNA-Protein).fas").exists());
}

#[test]
fn test_strict_policy_rejects_unknown_symbols() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "n.fas", ">n\nATGNNN\n");

    let mut options = ConvertOptions::new(Conversion::DnaToMrna);
    assert!(convert_file(&input, &options).is_ok());

    options.policy = SymbolPolicy::Reject;
    assert!(convert_file(&input, &options).is_err());
}

#[test]
fn test_input_errors() {
    let dir = tempfile::tempdir().unwrap();
    let options = ConvertOptions::new(Conversion::DnaToMrna);

    let err = convert_file(dir.path(), &options).unwrap_err();
    assert!(matches!(err, FormatError::IsDirectory(_)));

    let err = convert_file(dir.path().join("missing.fas"), &options).unwrap_err();
    assert!(matches!(err, FormatError::IoError(_)));

    let not_fasta = write_input(dir.path(), "plain.txt", "ACGT\n");
    let err = convert_file(&not_fasta, &options).unwrap_err();
    assert!(matches!(err, FormatError::FastaError(_)));
}

#[test]
fn test_convert_files_keeps_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let inputs: Vec<_> = (0..8)
        .map(|i| write_input(dir.path(), &format!("f{}.fas", i), &format!(">s{}\nATG\n", i)))
        .collect();
    let mut with_missing = inputs.clone();
    with_missing.push(dir.path().join("missing.fas"));

    let results = convert_files(&with_missing, &ConvertOptions::new(Conversion::DnaToProtein));
    assert_eq!(results.len(), 9);
    for (i, result) in results[..8].iter().enumerate() {
        let converted = result.as_ref().unwrap();
        assert_eq!(converted.input, inputs[i]);
        assert_eq!(converted.records[0].id, format!("s{}", i));
        assert_eq!(converted.records[0].sequence.as_str(), "M");
    }
    assert!(results[8].is_err());
}
