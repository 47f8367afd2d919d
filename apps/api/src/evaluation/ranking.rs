//! Ranking & Summary Engine — pure functions over a completed batch.
//!
//! Runs only after every candidate has been evaluated or definitively failed,
//! so ranking is a function of the whole batch in original row order.

use crate::evaluation::models::{
    BatchSummary, CandidateRecord, EvaluationResult, RankedCandidate,
};

/// Orders a completed batch by match percentage, best first, and assigns
/// 1-based dense ranks. The sort is stable: equal scores keep their original
/// row order and still receive distinct consecutive ranks.
pub fn rank_candidates(
    batch: Vec<(CandidateRecord, EvaluationResult)>,
) -> Vec<RankedCandidate> {
    let mut pairs = batch;
    pairs.sort_by(|a, b| {
        b.1.assessment
            .match_percentage
            .cmp(&a.1.assessment.match_percentage)
    });
    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (candidate, evaluation))| RankedCandidate {
            candidate,
            evaluation,
            rank: (i + 1) as u32,
        })
        .collect()
}

/// Aggregate statistics over a ranked batch.
///
/// Callers guarantee a non-empty batch: empty uploads are rejected at
/// ingestion and never reach this stage.
pub fn summarize(ranked: &[RankedCandidate]) -> BatchSummary {
    debug_assert!(!ranked.is_empty(), "summaries require a non-empty batch");

    let scores: Vec<u8> = ranked
        .iter()
        .map(|r| r.evaluation.assessment.match_percentage)
        .collect();
    let total = scores.len();
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();

    BatchSummary {
        total_candidates: total,
        average_match: f64::from(sum) / total as f64,
        highest_match: scores.iter().copied().max().unwrap_or(0),
        lowest_match: scores.iter().copied().min().unwrap_or(0),
        highly_recommended: scores.iter().filter(|&&s| s >= 80).count(),
        recommended: scores.iter().filter(|&&s| s >= 60 && s < 80).count(),
        consider: scores.iter().filter(|&&s| s >= 40 && s < 60).count(),
        not_recommended: scores.iter().filter(|&&s| s < 40).count(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn pair(row: u32, score: u8) -> (CandidateRecord, EvaluationResult) {
        let candidate = CandidateRecord {
            id: format!("candidate_{row}"),
            row_number: row,
            fields: BTreeMap::new(),
        };
        let mut evaluation = EvaluationResult::failure(&candidate.id, "seed");
        evaluation.assessment.match_percentage = score;
        evaluation.error = false;
        (candidate, evaluation)
    }

    fn batch_of(scores: &[u8]) -> Vec<(CandidateRecord, EvaluationResult)> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| pair((i + 1) as u32, score))
            .collect()
    }

    #[test]
    fn test_ranked_output_matches_input_count_and_ranks_are_dense() {
        let ranked = rank_candidates(batch_of(&[10, 95, 42, 42, 7]));
        assert_eq!(ranked.len(), 5);
        let mut ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ties_preserve_original_row_order() {
        let ranked = rank_candidates(batch_of(&[55, 90, 90, 20]));
        // row 2 before row 3 — equal scores keep input order
        assert_eq!(ranked[0].candidate.row_number, 2);
        assert_eq!(ranked[1].candidate.row_number, 3);
        assert_eq!(ranked[2].candidate.row_number, 1);
        assert_eq!(ranked[3].candidate.row_number, 4);
        let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_worked_scenario_summary() {
        let ranked = rank_candidates(batch_of(&[55, 90, 90, 20]));
        let summary = summarize(&ranked);
        assert_eq!(summary.total_candidates, 4);
        assert!((summary.average_match - 63.75).abs() < f64::EPSILON);
        assert_eq!(summary.highest_match, 90);
        assert_eq!(summary.lowest_match, 20);
        assert_eq!(summary.highly_recommended, 2);
        assert_eq!(summary.recommended, 0);
        assert_eq!(summary.consider, 1);
        assert_eq!(summary.not_recommended, 1);
    }

    #[test]
    fn test_buckets_partition_the_batch() {
        let ranked = rank_candidates(batch_of(&[0, 39, 40, 59, 60, 79, 80, 100]));
        let summary = summarize(&ranked);
        assert_eq!(summary.not_recommended, 2);
        assert_eq!(summary.consider, 2);
        assert_eq!(summary.recommended, 2);
        assert_eq!(summary.highly_recommended, 2);
        assert_eq!(
            summary.not_recommended
                + summary.consider
                + summary.recommended
                + summary.highly_recommended,
            summary.total_candidates
        );
    }

    #[test]
    fn test_mean_lies_within_min_and_max() {
        let ranked = rank_candidates(batch_of(&[13, 87, 52]));
        let summary = summarize(&ranked);
        assert!(summary.average_match >= f64::from(summary.lowest_match));
        assert!(summary.average_match <= f64::from(summary.highest_match));
    }

    #[test]
    fn test_single_candidate_batch() {
        let ranked = rank_candidates(batch_of(&[70]));
        assert_eq!(ranked[0].rank, 1);
        let summary = summarize(&ranked);
        assert_eq!(summary.total_candidates, 1);
        assert!((summary.average_match - 70.0).abs() < f64::EPSILON);
        assert_eq!(summary.highest_match, 70);
        assert_eq!(summary.lowest_match, 70);
    }
}
