//! Descriptor synonym table. Extraction emits free-form labels
//! ("followed", "overruled by", "abrogated"); this table folds the
//! common variants onto the canonical taxonomy.

use lex_core::citation::Treatment;

/// Synonym → canonical treatment. Checked after exact taxonomy names.
const SYNONYMS: &[(&str, Treatment)] = &[
    ("followed", Treatment::Follows),
    ("following", Treatment::Follows),
    ("applied", Treatment::Follows),
    ("adopted", Treatment::Follows),
    ("affirming", Treatment::Affirmed),
    ("affirms", Treatment::Affirmed),
    ("aff'd", Treatment::Affirmed),
    ("extended", Treatment::Expanded),
    ("expanding", Treatment::Expanded),
    ("explaining", Treatment::Explained),
    ("clarified", Treatment::Explained),
    ("reconciled", Treatment::Harmonized),
    ("citing", Treatment::Cited),
    ("see", Treatment::Cited),
    ("see also", Treatment::Cited),
    ("accord", Treatment::Follows),
    ("cf", Treatment::Compared),
    ("compare", Treatment::Compared),
    ("discussing", Treatment::Discussed),
    ("noted", Treatment::Mentioned),
    ("noting", Treatment::Mentioned),
    ("but see", Treatment::Distinguished),
    ("distinguishing", Treatment::Distinguished),
    ("distinguishes", Treatment::Distinguished),
    ("doubted", Treatment::Questioned),
    ("questioning", Treatment::Questioned),
    ("limiting", Treatment::Limited),
    ("narrowed", Treatment::Limited),
    ("criticizing", Treatment::Criticized),
    ("criticised", Treatment::Criticized),
    ("disapproved", Treatment::Criticized),
    ("superseded by statute", Treatment::Superseded),
    ("abrogated", Treatment::Superseded),
    ("overruling", Treatment::Overruled),
    ("overruled by", Treatment::Overruled),
    ("overrules", Treatment::Overruled),
    ("rev'd", Treatment::Overruled),
    ("reversed", Treatment::Overruled),
];

/// Look up a normalized descriptor: exact canonical name first, then the
/// synonym table.
pub fn lookup(normalized: &str) -> Option<Treatment> {
    Treatment::from_str_name(normalized)
        .or_else(|| SYNONYMS.iter().find(|(s, _)| *s == normalized).map(|(_, t)| *t))
}
