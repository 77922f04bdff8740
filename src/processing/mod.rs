//! Provider response processing module

pub mod response_parser;

pub use response_parser::{AnalysisResult, FitBand, MatchVerdict, QualificationMatch, ResponseParser};
