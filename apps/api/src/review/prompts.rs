// Review prompt templates. `{resume_text}` and `{preferred_role}` are substituted at call time.

pub const SUMMARY_PROMPT: &str = "\
Summarize the following resume clearly and briefly in 3–4 lines:

{resume_text}";

pub const IMPROVEMENT_PROMPT: &str = "\
Review this resume and identify only the sections that need improvement. \
Write in paragraph format, addressing the candidate directly (e.g., 'You should...', 'Consider revising...'). \
Do not praise or mention sections that are already strong. \
Focus only on what needs better structure, clarity, grammar, or relevance:

{resume_text}";

pub const JOB_MATCH_PROMPT: &str = "\
The user wants to apply for the role: '{preferred_role}'. Determine if this resume fits that role. \
If yes, explain briefly why. If not, explain the gaps clearly and suggest 2–3 better-suited roles with justification. \
Write everything in paragraph form:

{resume_text}";

pub fn summary_prompt(resume_text: &str) -> String {
    SUMMARY_PROMPT.replace("{resume_text}", resume_text)
}

pub fn improvement_prompt(resume_text: &str) -> String {
    IMPROVEMENT_PROMPT.replace("{resume_text}", resume_text)
}

pub fn job_match_prompt(resume_text: &str, preferred_role: &str) -> String {
    // Role first: a resume containing the literal placeholder must not be rewritten.
    JOB_MATCH_PROMPT
        .replace("{preferred_role}", preferred_role)
        .replacen("{resume_text}", resume_text, 1)
}
