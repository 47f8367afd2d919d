// All LLM prompt constants for the evaluation pipeline.

use crate::evaluation::models::CandidateRecord;

/// System prompt for candidate evaluation — enforces JSON-only output.
pub const EVALUATION_SYSTEM: &str =
    "You are a world-class senior talent acquisition specialist with expertise in \
    predictive hiring analytics, candidate assessment psychology, and strategic \
    workforce planning. Your evaluations are known for their accuracy and \
    actionable insights. Always respond with valid, complete JSON. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Trivial prompt for the connectivity probe endpoint.
pub const PROBE_PROMPT: &str =
    "Hello, this is a test. Please respond with 'GPT integration working!'";

/// Evaluation prompt template.
/// Replace `{job_description}` and `{candidate_json}` before sending.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are a senior talent acquisition specialist with 15+ years of experience in technical and executive recruiting. Your expertise includes identifying top talent, assessing cultural fit, and predicting long-term success.

EVALUATION TASK:
Conduct a comprehensive candidate assessment using advanced recruitment methodologies and predictive analytics.

JOB REQUIREMENTS:
{job_description}

CANDIDATE PROFILE:
{candidate_json}

EVALUATION FRAMEWORK:
Analyze the candidate across these weighted dimensions:

1. TECHNICAL COMPETENCY (30% weight):
   - Hard skills alignment with job requirements
   - Technology stack proficiency and depth
   - Relevant certifications and qualifications
   - Problem-solving capabilities demonstrated

2. EXPERIENCE RELEVANCE (25% weight):
   - Years of relevant experience vs. job requirements
   - Industry background alignment
   - Project complexity and scale handled
   - Leadership and team management experience
   - Career progression trajectory

3. CULTURAL & SOFT SKILLS FIT (20% weight):
   - Communication skills and articulation
   - Adaptability and learning agility
   - Teamwork and collaboration indicators
   - Leadership potential and initiative
   - Work style compatibility

4. GROWTH POTENTIAL (15% weight):
   - Learning curve and skill development capacity
   - Career ambition and goal alignment
   - Innovation and creative thinking indicators
   - Ability to handle increasing responsibilities

5. RISK ASSESSMENT (10% weight):
   - Job stability and commitment indicators
   - Overqualification or underqualification risks
   - Salary expectations vs. market rates
   - Location and availability considerations

INTELLIGENT RANKING CRITERIA:
- Prioritize candidates who exceed minimum requirements in critical areas
- Consider transferable skills and potential for rapid upskilling
- Factor in unique value propositions and differentiators
- Assess long-term retention probability
- Evaluate immediate productivity potential vs. ramp-up time

OUTPUT REQUIREMENTS:
Provide a detailed assessment in JSON format with these exact keys:

{
    "match_percentage": integer (0-100, calculated using weighted framework above),
    "confidence_level": integer (0-100, your confidence in this assessment),
    "reasoning": "Comprehensive 3-4 sentence analysis of overall fit",
    "technical_score": integer (0-100),
    "experience_score": integer (0-100),
    "cultural_fit_score": integer (0-100),
    "growth_potential_score": integer (0-100),
    "risk_score": integer (0-100, where 100 = lowest risk),
    "strengths": ["specific strength 1", "specific strength 2", "specific strength 3"],
    "weaknesses": ["specific concern 1", "specific concern 2"],
    "key_skills_match": ["matched skill 1", "matched skill 2", "matched skill 3"],
    "missing_skills": ["missing skill 1", "missing skill 2"],
    "recommendation": "Highly Recommended|Recommended|Consider with Conditions|Not Recommended",
    "recommendation_rationale": "1-2 sentence explanation of recommendation",
    "interview_focus_areas": ["area to probe 1", "area to probe 2"],
    "onboarding_considerations": "Brief note on integration approach",
    "salary_competitiveness": "Below Market|Market Rate|Above Market|Premium",
    "time_to_productivity": "Immediate|1-2 weeks|1 month|2-3 months|3+ months",
    "retention_risk": "Low|Medium|High",
    "unique_value_proposition": "What makes this candidate stand out"
}

CRITICAL INSTRUCTIONS:
- Be objective and data-driven in your assessment
- Consider both explicit qualifications and implicit indicators
- Factor in market conditions and talent scarcity
- Provide actionable insights for hiring decision-makers
- Ensure match_percentage reflects true hiring probability, not just qualification overlap
- Consider the candidate's trajectory and potential, not just current state"#;

/// Renders the user-side evaluation prompt for one candidate.
/// Pure text construction: the job description is embedded verbatim and the
/// candidate record as indented JSON.
pub fn build_evaluation_prompt(job_description: &str, candidate: &CandidateRecord) -> String {
    let candidate_json =
        serde_json::to_string_pretty(candidate).expect("candidate record serializes");
    EVALUATION_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{candidate_json}", &candidate_json)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn sample_candidate() -> CandidateRecord {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), "Ada Lovelace".to_string());
        fields.insert("skills".to_string(), "Rust, SQL".to_string());
        CandidateRecord {
            id: "candidate_1".to_string(),
            row_number: 1,
            fields,
        }
    }

    #[test]
    fn test_prompt_embeds_job_description_verbatim() {
        let jd = "Senior Rust Engineer — distributed systems, 5+ years";
        let prompt = build_evaluation_prompt(jd, &sample_candidate());
        assert!(prompt.contains(jd));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_prompt_embeds_candidate_as_parseable_json() {
        let prompt = build_evaluation_prompt("any role", &sample_candidate());
        let start = prompt.find("CANDIDATE PROFILE:").unwrap();
        let json_start = prompt[start..].find('{').unwrap() + start;
        // Pretty JSON object ends at the first blank-line-delimited close brace
        let json_end = prompt[json_start..].find("\n}").unwrap() + json_start + 2;
        let parsed: serde_json::Value =
            serde_json::from_str(&prompt[json_start..json_end]).unwrap();
        assert_eq!(parsed["id"], "candidate_1");
        assert_eq!(parsed["name"], "Ada Lovelace");
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let candidate = sample_candidate();
        let a = build_evaluation_prompt("role", &candidate);
        let b = build_evaluation_prompt("role", &candidate);
        assert_eq!(a, b);
    }

    #[test]
    fn test_template_names_every_required_output_field() {
        for field in [
            "match_percentage",
            "confidence_level",
            "reasoning",
            "technical_score",
            "experience_score",
            "cultural_fit_score",
            "growth_potential_score",
            "risk_score",
            "strengths",
            "weaknesses",
            "key_skills_match",
            "missing_skills",
            "recommendation",
            "recommendation_rationale",
            "interview_focus_areas",
            "onboarding_considerations",
            "salary_competitiveness",
            "time_to_productivity",
            "retention_risk",
            "unique_value_proposition",
        ] {
            assert!(
                EVALUATION_PROMPT_TEMPLATE.contains(field),
                "template is missing {field}"
            );
        }
    }
}
