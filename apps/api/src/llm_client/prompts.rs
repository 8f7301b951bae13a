// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction placed directly above the output schema in every copy prompt.
pub const SCHEMA_INSTRUCTION: &str = "\
    Return a JSON object with this EXACT schema (no extra fields). \
    Fields marked required must be present and non-empty.";
