//! Shared result and input models exchanged between subsystems.

mod citation_record;
mod rank;
mod rescore;
mod snapshot;
mod treatment_summary;
mod validity_record;

pub use citation_record::CitationRecord;
pub use rank::{RankCriteria, RankedPrecedent, ScoreBreakdown};
pub use rescore::{RescoreHandle, RescoreStatus};
pub use snapshot::AuthoritySnapshot;
pub use treatment_summary::TreatmentSummary;
pub use validity_record::{ContributingCitation, ValidityRecord};
