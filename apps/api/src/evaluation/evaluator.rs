//! Evaluator Client — exactly one upstream model call per candidate.
//!
//! Failure is contained here: a transport error, an API error, or a reply
//! that is not a valid assessment all degrade to the canonical failure record
//! for that one candidate. Nothing propagates past this boundary, so one bad
//! candidate never aborts the batch.

use tracing::{debug, warn};

use crate::evaluation::models::{Assessment, CandidateRecord, EvaluationResult};
use crate::evaluation::prompts::{build_evaluation_prompt, EVALUATION_SYSTEM};
use crate::llm_client::{strip_json_fences, CompletionClient};

pub struct CandidateEvaluator<'a> {
    client: &'a dyn CompletionClient,
}

impl<'a> CandidateEvaluator<'a> {
    pub fn new(client: &'a dyn CompletionClient) -> Self {
        Self { client }
    }

    /// Scores one candidate against the job description.
    pub async fn evaluate(
        &self,
        job_description: &str,
        candidate: &CandidateRecord,
    ) -> EvaluationResult {
        let prompt = build_evaluation_prompt(job_description, candidate);

        let raw = match self.client.complete(EVALUATION_SYSTEM, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(candidate_id = %candidate.id, "model call failed: {e}");
                return EvaluationResult::failure(&candidate.id, &e.to_string());
            }
        };

        match serde_json::from_str::<Assessment>(strip_json_fences(&raw)) {
            Ok(assessment) => {
                debug!(
                    candidate_id = %candidate.id,
                    match_percentage = assessment.match_percentage,
                    "candidate evaluated"
                );
                EvaluationResult::from_assessment(assessment, &candidate.id)
            }
            Err(e) => {
                warn!(candidate_id = %candidate.id, "model reply was not a valid assessment: {e}");
                EvaluationResult::failure(&candidate.id, &format!("invalid assessment JSON: {e}"))
            }
        }
    }

    /// Evaluates a whole batch strictly sequentially, preserving row order.
    /// Each candidate incurs exactly one upstream call; the next begins only
    /// after the previous completes or definitively fails.
    pub async fn evaluate_batch(
        &self,
        job_description: &str,
        candidates: &[CandidateRecord],
    ) -> Vec<(CandidateRecord, EvaluationResult)> {
        let mut results = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let evaluation = self.evaluate(job_description, candidate).await;
            results.push((candidate.clone(), evaluation));
        }
        results
    }
}
