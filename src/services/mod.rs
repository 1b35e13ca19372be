pub mod diagnosis_engine;
pub mod log_store;
pub mod reference_extractor;
pub mod resolution;
pub mod sample_data;
pub mod snippet_store;

pub use diagnosis_engine::{DiagnosisEngine, DiagnosisRule};
pub use log_store::LogStore;
pub use resolution::ResolutionPipeline;
pub use sample_data::Dataset;
pub use snippet_store::{SnippetKey, SnippetStore};
