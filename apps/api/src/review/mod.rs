// Resume review: extraction result → three LLM feedback passes → cleaned JSON.
// All LLM calls go through llm_client. No direct HTTP calls here.

pub mod handlers;
pub mod markdown;
pub mod orchestrator;
pub mod prompts;
