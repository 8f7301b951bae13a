// Copywriting flows: product description, SEO optimization, A/B variants.
// Each flow is one prompt-templated LLM round trip driven by `adapter::run_flow`.
// All LLM calls go through llm_client, never the Anthropic API directly.

pub mod adapter;
pub mod description;
pub mod handlers;
pub mod prompts;
pub mod seo;
pub mod variants;

#[cfg(test)]
pub mod testing;
