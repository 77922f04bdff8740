//! Best-effort extraction of structure from the provider's markdown reply
//!
//! The provider is free text and not guaranteed to follow the template, so
//! parsing never fails: callers get the raw reply back, with the score and
//! qualification rows filled in only when they can be recovered.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Parsed outcome of one analysis. The raw response is always present;
/// the structured fields are optional enrichment over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub raw_response: String,
    /// Overall ATS match score in [0, 100], unset when the reply carries
    /// no recognizable score label.
    pub ats_score: Option<u8>,
    pub qualifications: Vec<QualificationMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationMatch {
    pub qualification: String,
    /// Match percentage in [0, 100].
    pub match_percent: u8,
    pub verdict: MatchVerdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    Yes,
    No,
    Partial,
}

/// Fit label derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitBand {
    Excellent,
    Good,
    Fair,
    Weak,
}

impl FitBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => FitBand::Excellent,
            70..=84 => FitBand::Good,
            50..=69 => FitBand::Fair,
            _ => FitBand::Weak,
        }
    }
}

impl AnalysisResult {
    pub fn fit_band(&self) -> Option<FitBand> {
        self.ats_score.map(FitBand::from_score)
    }
}

pub struct ResponseParser {
    score_re: Regex,
    triplet_re: Regex,
    table_row_re: Regex,
}

impl ResponseParser {
    pub fn new() -> Self {
        // "ATS Score: 77%" / "ATS Match Score - 82%", tolerating markdown
        // emphasis around the label.
        let score_re = Regex::new(r"(?i)ATS\s+(?:Match\s+)?Score\**\s*[:\-]?\s*\**\s*(\d{1,3})\s*%").unwrap();

        // Qualification / Match % / Match line triplets, in that order.
        let triplet_re = Regex::new(
            r"(?mi)^[\s>*\-]*(?:job\s+)?qualification\**\s*[:\-]\s*(?P<qual>[^\r\n]+?)\s*$\s*^[\s>*\-]*match\s*%\**\s*[:\-]\s*\**\s*(?P<pct>\d{1,3})\s*%?\**\s*$\s*^[\s>*\-]*match\**\s*[:\-]\s*(?P<verdict>[^\r\n]+?)\s*$",
        )
        .unwrap();

        // Three-column markdown table row: qualification, percentage, verdict.
        let table_row_re = Regex::new(
            r"(?mi)^\s*\|\s*(?P<qual>[^|\r\n]+?)\s*\|\s*[*_]*\s*(?P<pct>\d{1,3})\s*%[^|\r\n]*\|\s*(?P<verdict>[^|\r\n]+?)\s*\|\s*$",
        )
        .unwrap();

        Self {
            score_re,
            triplet_re,
            table_row_re,
        }
    }

    /// Parse a provider reply. Never fails: unparseable content degrades to
    /// raw text with an unset score and no rows.
    pub fn parse(&self, response: &str) -> AnalysisResult {
        let ats_score = self.extract_score(response);

        let mut qualifications = self.extract_triplets(response);
        if qualifications.is_empty() {
            qualifications = self.extract_table_rows(response);
        }

        AnalysisResult {
            raw_response: response.to_string(),
            ats_score,
            qualifications,
        }
    }

    /// First labeled score in document order whose value is within range.
    fn extract_score(&self, response: &str) -> Option<u8> {
        self.score_re
            .captures_iter(response)
            .filter_map(|caps| caps.get(1)?.as_str().parse::<u16>().ok())
            .find(|&score| score <= 100)
            .map(|score| score as u8)
    }

    fn extract_triplets(&self, response: &str) -> Vec<QualificationMatch> {
        extract_rows(&self.triplet_re, response)
    }

    fn extract_table_rows(&self, response: &str) -> Vec<QualificationMatch> {
        extract_rows(&self.table_row_re, response)
    }
}

/// Collect qualification rows from every non-overlapping match of a pattern
/// with `qual`, `pct`, and `verdict` capture groups. Malformed rows are
/// skipped, not fatal.
fn extract_rows(re: &Regex, response: &str) -> Vec<QualificationMatch> {
    re.captures_iter(response)
        .filter_map(|caps| {
            let qualification = clean_cell(caps.name("qual")?.as_str());
            let percent: u16 = caps.name("pct")?.as_str().parse().ok()?;
            if percent > 100 || qualification.is_empty() {
                return None;
            }
            let verdict = parse_verdict(caps.name("verdict")?.as_str())?;
            Some(QualificationMatch {
                qualification,
                match_percent: percent as u8,
                verdict,
            })
        })
        .collect()
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip markdown emphasis and surrounding whitespace from a cell.
fn clean_cell(cell: &str) -> String {
    cell.trim().trim_matches(|c| c == '*' || c == '_').trim().to_string()
}

/// The verdict cell may carry the template's traffic-light emoji
/// ("🟢 Yes / 🟡 Partial / 🔴 No"); match on the word.
fn parse_verdict(cell: &str) -> Option<MatchVerdict> {
    let lower = cell.to_lowercase();
    if lower.contains("partial") {
        Some(MatchVerdict::Partial)
    } else if lower.contains("yes") {
        Some(MatchVerdict::Yes)
    } else if lower.contains("no") {
        Some(MatchVerdict::No)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ResponseParser {
        ResponseParser::new()
    }

    #[test]
    fn test_extracts_labeled_score() {
        let result = parser().parse("Overall alignment is solid.\n\nATS Score: 77%\n");
        assert_eq!(result.ats_score, Some(77));
    }

    #[test]
    fn test_extracts_match_score_variant_with_dash() {
        let result = parser().parse("**ATS Match Score** - 82%");
        assert_eq!(result.ats_score, Some(82));
    }

    #[test]
    fn test_takes_first_score_in_document_order() {
        let result = parser().parse("ATS Score: 60%\nlater revision: ATS Score: 90%");
        assert_eq!(result.ats_score, Some(60));
    }

    #[test]
    fn test_out_of_range_score_is_skipped() {
        let result = parser().parse("ATS Score: 250%\nATS Match Score: 85%");
        assert_eq!(result.ats_score, Some(85));
    }

    #[test]
    fn test_missing_score_stays_unset() {
        let result = parser().parse("No numbers to see here.");
        assert_eq!(result.ats_score, None);
        assert!(result.fit_band().is_none());
    }

    #[test]
    fn test_two_triplets_yield_two_rows() {
        let response = "\
Qualification: Salesforce admin
Match %: 90%
Match: Yes

Qualification: Data migration
Match %: 55%
Match: 🟡 Partial
";
        let result = parser().parse(response);
        assert_eq!(result.qualifications.len(), 2);
        assert_eq!(
            result.qualifications[0],
            QualificationMatch {
                qualification: "Salesforce admin".to_string(),
                match_percent: 90,
                verdict: MatchVerdict::Yes,
            }
        );
        assert_eq!(result.qualifications[1].verdict, MatchVerdict::Partial);
        assert_eq!(result.qualifications[1].match_percent, 55);
    }

    #[test]
    fn test_malformed_triplet_is_skipped_not_fatal() {
        let response = "\
Qualification: Salesforce admin
Match %: 90%
Match: Yes

Qualification: Broken row
Match %: 900%
Match: Yes
";
        let result = parser().parse(response);
        assert_eq!(result.qualifications.len(), 1);
        assert_eq!(result.qualifications[0].qualification, "Salesforce admin");
    }

    #[test]
    fn test_verdict_with_emoji_prefix() {
        let response = "Qualification: CRM tooling\nMatch %: 40%\nMatch: 🔴 No\n";
        let result = parser().parse(response);
        assert_eq!(result.qualifications[0].verdict, MatchVerdict::No);
    }

    #[test]
    fn test_table_rows_recovered_when_no_triplets_present() {
        let response = "\
| Job Qualification | Resume Match % Estimate | Match |
|---|---|---|
| Salesforce admin | 90% | 🟢 Yes |
| Data migration | 65% | 🟡 Partial |

ATS Match Score: 78%
";
        let result = parser().parse(response);
        assert_eq!(result.ats_score, Some(78));
        assert_eq!(result.qualifications.len(), 2);
        assert_eq!(result.qualifications[0].qualification, "Salesforce admin");
        assert_eq!(result.qualifications[0].match_percent, 90);
        assert_eq!(result.qualifications[1].verdict, MatchVerdict::Partial);
    }

    #[test]
    fn test_unparseable_input_preserves_raw_text() {
        let response = "The model went completely off script here.";
        let result = parser().parse(response);
        assert_eq!(result.raw_response, response);
        assert_eq!(result.ats_score, None);
        assert!(result.qualifications.is_empty());
    }

    #[test]
    fn test_fit_band_thresholds() {
        assert_eq!(FitBand::from_score(92), FitBand::Excellent);
        assert_eq!(FitBand::from_score(85), FitBand::Excellent);
        assert_eq!(FitBand::from_score(70), FitBand::Good);
        assert_eq!(FitBand::from_score(50), FitBand::Fair);
        assert_eq!(FitBand::from_score(49), FitBand::Weak);
    }
}
