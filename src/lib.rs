//! ATS resume matcher library

pub mod config;
pub mod error;
pub mod input;
pub mod store;
pub mod llm;
pub mod processing;
pub mod pipeline;

pub use error::{AtsMatcherError, Result};
pub use config::Config;
pub use pipeline::{AnalysisPipeline, AnalysisReport, AnalysisRequest, ResumeUpload};
pub use processing::response_parser::{AnalysisResult, MatchVerdict, QualificationMatch};
