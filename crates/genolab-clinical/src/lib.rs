//! genolab-clinical: Rule-based interpretation of a point mutation.
//!
//! Tier classification, pharmacogenomic and hereditary lookups, the family
//! screening list, and the pipeline that chains them after translation.

pub mod classifier;
pub mod policy;
pub mod pharmaco;
pub mod hereditary;
pub mod screening;
pub mod attention;
pub mod pipeline;

pub use classifier::{classify, classify_with, protein_impact};
pub use hereditary::get_inheritance;
pub use pharmaco::{analyze, analyze_with, MarkerTable, PharmacoProvider, StandardTable};
pub use pipeline::AnalysisPipeline;
pub use policy::TierPolicy;
pub use screening::screening_list;
