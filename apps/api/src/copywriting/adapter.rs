//! Generation adapter: the one round trip every copy flow makes.
//!
//! Flow: validate request → render prompt → one LLM call → parse JSON →
//!       validate output shape → return.
//!
//! There is no retry and no partial result. A transport failure, an unparseable
//! reply and a reply that fails shape validation all surface as `AppError::Llm`.

use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::llm_client::{call_json, LlmError, TextGenerator};

/// One prompt-templated generation flow: its request/result shapes, its
/// system prompt and its pure prompt renderer.
pub trait CopyFlow {
    type Request: Validate + Sync;
    type Output: DeserializeOwned + Validate;

    /// Short name used in log lines and error messages.
    const NAME: &'static str;
    const SYSTEM: &'static str;

    /// Renders the user prompt. Must not perform I/O.
    fn render(request: &Self::Request) -> String;

    /// Checks that depend on the request (e.g. the number of variants asked for).
    /// Field-level rules live on the `Validate` derive of `Output`.
    fn check_output(_request: &Self::Request, _output: &Self::Output) -> Result<(), String> {
        Ok(())
    }
}

/// Runs one flow end to end against the given generator.
///
/// An invalid request is rejected here, before anything is sent.
pub async fn run_flow<F: CopyFlow>(
    llm: &dyn TextGenerator,
    request: &F::Request,
) -> Result<F::Output, AppError> {
    request.validate()?;

    let trace_id = Uuid::new_v4();
    let prompt = F::render(request);
    info!(flow = F::NAME, %trace_id, prompt_chars = prompt.len(), "Dispatching generation");

    let output = call_json::<F::Output>(llm, &prompt, F::SYSTEM)
        .await
        .and_then(|output| {
            output
                .validate()
                .map_err(|e| LlmError::Shape(e.to_string()))?;
            F::check_output(request, &output).map_err(LlmError::Shape)?;
            Ok(output)
        })
        .map_err(|e| {
            warn!(flow = F::NAME, %trace_id, "Generation failed: {e}");
            AppError::Llm(format!("{} failed: {e}", F::NAME))
        })?;

    info!(flow = F::NAME, %trace_id, "Generation succeeded");
    Ok(output)
}

/// Substitutes `{key}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so user text containing braces is
/// copied verbatim. Braces that do not name a known key are left untouched,
/// which keeps the JSON schema blocks in the templates intact.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let hit = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (end, *value))
        });

        match hit {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the trimmed value of an optional form field, treating blank input as absent.
pub fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Fails when a required piece of generated copy is empty or only whitespace.
pub fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is blank"));
    }
    Ok(())
}

/// Builds a `Label: value` detail block. Optional entries are skipped when absent.
pub fn detail_lines(lines: &[(&str, Option<&str>)]) -> String {
    lines
        .iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label}: {v}")))
        .collect::<Vec<_>>()
        .join("\n")
}
