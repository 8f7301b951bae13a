//! Product description generation from basic product details.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::copywriting::adapter::{
    detail_lines, fill_template, present, require_text, run_flow, CopyFlow,
};
use crate::copywriting::prompts::{DESCRIPTION_PROMPT_TEMPLATE, DESCRIPTION_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::SCHEMA_INSTRUCTION;
use crate::llm_client::TextGenerator;

/// Tone applied when the submitted form does not name one.
pub const DEFAULT_TONE: &str = "professional";

fn default_tone() -> Option<String> {
    Some(DEFAULT_TONE.to_string())
}

/// Product details for a new description. List-like fields are comma-separated free text.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRequest {
    #[validate(length(min = 2, message = "Product name must be at least 2 characters."))]
    pub product_name: String,
    #[validate(length(min = 10, message = "Please list at least one feature."))]
    pub product_features: String,
    pub product_benefits: Option<String>,
    pub target_audience: Option<String>,
    pub keywords: Option<String>,
    #[serde(default = "default_tone")]
    pub tone: Option<String>,
}

/// Generated copy. Only `product_description` is guaranteed; the model may omit the rest.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionResult {
    #[validate(length(min = 1))]
    pub product_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_suggestion: Option<String>,
}

pub struct DescriptionFlow;

impl CopyFlow for DescriptionFlow {
    type Request = DescriptionRequest;
    type Output = DescriptionResult;

    const NAME: &'static str = "product description";
    const SYSTEM: &'static str = DESCRIPTION_SYSTEM;

    fn render(request: &DescriptionRequest) -> String {
        let details = detail_lines(&[
            ("Product Name", Some(request.product_name.trim())),
            ("Key Features", Some(request.product_features.trim())),
            ("Key Benefits", present(&request.product_benefits)),
            ("Target Audience", present(&request.target_audience)),
            ("SEO Keywords", present(&request.keywords)),
            ("Tone", present(&request.tone)),
        ]);

        fill_template(
            DESCRIPTION_PROMPT_TEMPLATE,
            &[("details", details.as_str()), ("schema_instruction", SCHEMA_INSTRUCTION)],
        )
    }

    fn check_output(
        _request: &DescriptionRequest,
        output: &DescriptionResult,
    ) -> Result<(), String> {
        require_text("productDescription", &output.product_description)
    }
}

/// Generates a product description, meta description and title suggestion.
pub async fn generate_description(
    llm: &dyn TextGenerator,
    request: &DescriptionRequest,
) -> Result<DescriptionResult, AppError> {
    run_flow::<DescriptionFlow>(llm, request).await
}
