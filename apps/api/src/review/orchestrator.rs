//! Feedback Orchestrator: three independent review calls over the same resume.
//!
//! Flow: build prompts → summary / improvement / job-match completions
//! (concurrently) → markdown cleanup → `FeedbackResult`.
//!
//! Any single failure aborts the request. No partial results, no retries.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::llm_client::prompts::REVIEWER_SYSTEM;
use crate::llm_client::{CompletionService, LlmError};
use crate::review::markdown::clean;
use crate::review::prompts::{improvement_prompt, job_match_prompt, summary_prompt};

/// The three feedback texts returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub summary: String,
    pub improvement: String,
    #[serde(rename = "jobmatch")]
    pub job_match: String,
}

#[derive(Clone)]
pub struct FeedbackOrchestrator {
    service: Arc<dyn CompletionService>,
}

impl FeedbackOrchestrator {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    pub async fn produce_feedback(
        &self,
        resume_text: &str,
        preferred_role: &str,
    ) -> Result<FeedbackResult, LlmError> {
        let summary_prompt = summary_prompt(resume_text);
        let improvement_prompt = improvement_prompt(resume_text);
        let job_match_prompt = job_match_prompt(resume_text, preferred_role);

        let (summary, improvement, job_match) = tokio::try_join!(
            self.review(&summary_prompt),
            self.review(&improvement_prompt),
            self.review(&job_match_prompt),
        )?;

        info!("Feedback produced for role '{preferred_role}'");

        Ok(FeedbackResult {
            summary,
            improvement,
            job_match,
        })
    }

    async fn review(&self, prompt: &str) -> Result<String, LlmError> {
        let raw = self.service.complete(REVIEWER_SYSTEM, prompt).await?;
        Ok(clean(raw.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::MockCompletion;

    const RESUME: &str = "Jane Doe\nSkills: Python, SQL, PyTorch";

    #[tokio::test]
    async fn test_three_distinct_prompts_each_with_resume_text() {
        let mock = Arc::new(MockCompletion::replying("Fine."));
        let orchestrator = FeedbackOrchestrator::new(mock.clone());

        orchestrator
            .produce_feedback(RESUME, "Data Scientist")
            .await
            .unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|(system, _)| system == REVIEWER_SYSTEM));
        assert!(calls.iter().all(|(_, prompt)| prompt.contains(RESUME)));

        let mut prompts: Vec<_> = calls.iter().map(|(_, p)| p.as_str()).collect();
        prompts.sort_unstable();
        prompts.dedup();
        assert_eq!(prompts.len(), 3);

        let with_role: Vec<_> = calls
            .iter()
            .filter(|(_, p)| p.contains("Data Scientist"))
            .collect();
        assert_eq!(with_role.len(), 1);
        assert!(with_role[0].1.contains("Determine if this resume fits"));
    }

    #[tokio::test]
    async fn test_replies_are_cleaned_and_slotted() {
        let mock = Arc::new(MockCompletion::new(|prompt| {
            let reply = if prompt.starts_with("Summarize") {
                "**Summary:** A data analyst."
            } else if prompt.starts_with("Review") {
                "1. You should add metrics.\n\n\n\n2. Consider a shorter intro."
            } else {
                "- *Good fit* for the role."
            };
            Ok(reply.to_string())
        }));
        let orchestrator = FeedbackOrchestrator::new(mock);

        let result = orchestrator
            .produce_feedback(RESUME, "Data Scientist")
            .await
            .unwrap();

        assert_eq!(
            result,
            FeedbackResult {
                summary: "Summary: A data analyst.".to_string(),
                improvement: "You should add metrics.\n\nConsider a shorter intro.".to_string(),
                job_match: "Good fit for the role.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_single_failure_aborts_everything() {
        let mock = Arc::new(MockCompletion::failing_when("identify only the sections"));
        let orchestrator = FeedbackOrchestrator::new(mock);

        let err = orchestrator
            .produce_feedback(RESUME, "Data Scientist")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 429, .. }));
    }

    #[test]
    fn test_result_serializes_with_jobmatch_key() {
        let value = serde_json::to_value(FeedbackResult {
            summary: "s".to_string(),
            improvement: "i".to_string(),
            job_match: "j".to_string(),
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"summary": "s", "improvement": "i", "jobmatch": "j"})
        );
    }
}
