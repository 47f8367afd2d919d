//! Data model for the candidate evaluation pipeline.
//!
//! Everything here is request-scoped: built while handling one upload,
//! discarded when the response goes out.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag stamped on every evaluation this service produces.
pub const EVALUATION_VERSION: &str = "v2.0_intelligent";

/// One spreadsheet row, normalized. Immutable after ingestion.
///
/// Serializes flat: `id` and `row_number` sit beside the spreadsheet fields
/// in one JSON object, which is also the shape embedded into the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: String,
    pub row_number: u32,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

/// Hiring recommendation tiers, in the exact strings the model is told to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Consider with Conditions")]
    ConsiderWithConditions,
    #[default]
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

/// Salary positioning relative to market. `Unknown` is the lenient catch-all
/// used by the failure record and for off-enum model output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryCompetitiveness {
    #[serde(rename = "Below Market")]
    BelowMarket,
    #[serde(rename = "Market Rate")]
    MarketRate,
    #[serde(rename = "Above Market")]
    AboveMarket,
    #[serde(rename = "Premium")]
    Premium,
    #[default]
    #[serde(rename = "Unknown", other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeToProductivity {
    #[serde(rename = "Immediate")]
    Immediate,
    #[serde(rename = "1-2 weeks")]
    OneToTwoWeeks,
    #[serde(rename = "1 month")]
    OneMonth,
    #[serde(rename = "2-3 months")]
    TwoToThreeMonths,
    #[serde(rename = "3+ months")]
    ThreePlusMonths,
    #[default]
    #[serde(rename = "Unknown", other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetentionRisk {
    Low,
    Medium,
    High,
}

/// The JSON shape the model must return for one candidate.
/// Parsed strictly — a reply missing any field degrades to the failure record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub match_percentage: u8,
    pub confidence_level: u8,
    pub reasoning: String,
    pub technical_score: u8,
    pub experience_score: u8,
    pub cultural_fit_score: u8,
    pub growth_potential_score: u8,
    /// Inverted: 100 = lowest risk.
    pub risk_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub key_skills_match: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendation: Recommendation,
    pub recommendation_rationale: String,
    pub interview_focus_areas: Vec<String>,
    pub onboarding_considerations: String,
    pub salary_competitiveness: SalaryCompetitiveness,
    pub time_to_productivity: TimeToProductivity,
    pub retention_risk: RetentionRisk,
    pub unique_value_proposition: String,
}

/// One candidate's assessment plus the metadata stamped by the evaluator.
/// Always well-formed, even when the upstream call failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub evaluated_at: DateTime<Utc>,
    pub candidate_id: String,
    pub evaluation_version: String,
    #[serde(default)]
    pub error: bool,
}

impl EvaluationResult {
    /// Wraps a successful assessment with its metadata.
    pub fn from_assessment(assessment: Assessment, candidate_id: &str) -> Self {
        Self {
            assessment,
            evaluated_at: Utc::now(),
            candidate_id: candidate_id.to_string(),
            evaluation_version: EVALUATION_VERSION.to_string(),
            error: false,
        }
    }

    /// The canonical failure record: every score zeroed, recommendation forced
    /// to Not Recommended, retention risk High, and the captured error message
    /// in `reasoning`.
    pub fn failure(candidate_id: &str, message: &str) -> Self {
        Self {
            assessment: Assessment {
                match_percentage: 0,
                confidence_level: 0,
                reasoning: format!("Error evaluating candidate: {message}"),
                technical_score: 0,
                experience_score: 0,
                cultural_fit_score: 0,
                growth_potential_score: 0,
                risk_score: 0,
                strengths: Vec::new(),
                weaknesses: vec!["Evaluation failed".to_string()],
                key_skills_match: Vec::new(),
                missing_skills: vec!["Assessment incomplete".to_string()],
                recommendation: Recommendation::NotRecommended,
                recommendation_rationale: "Technical evaluation error".to_string(),
                interview_focus_areas: Vec::new(),
                onboarding_considerations: "N/A".to_string(),
                salary_competitiveness: SalaryCompetitiveness::Unknown,
                time_to_productivity: TimeToProductivity::Unknown,
                retention_risk: RetentionRisk::High,
                unique_value_proposition: "Unable to assess".to_string(),
            },
            evaluated_at: Utc::now(),
            candidate_id: candidate_id.to_string(),
            evaluation_version: EVALUATION_VERSION.to_string(),
            error: true,
        }
    }
}

/// One candidate paired with its evaluation and a 1-based dense rank.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub candidate: CandidateRecord,
    pub evaluation: EvaluationResult,
    pub rank: u32,
}

/// Aggregate statistics over one evaluated batch. The four bucket counts
/// partition match_percentage: ≥80, [60,80), [40,60), <40.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total_candidates: usize,
    pub average_match: f64,
    pub highest_match: u8,
    pub lowest_match: u8,
    pub highly_recommended: usize,
    pub recommended: usize,
    pub consider: usize,
    pub not_recommended: usize,
}
