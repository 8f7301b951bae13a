//! A/B testing variants: several distinct descriptions of one product.
//!
//! Variants are returned in the model's generation order. No ranking is implied.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::copywriting::adapter::{detail_lines, fill_template, run_flow, CopyFlow};
use crate::copywriting::prompts::{VARIANTS_PROMPT_TEMPLATE, VARIANTS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::SCHEMA_INSTRUCTION;
use crate::llm_client::TextGenerator;

pub const DEFAULT_VARIANT_COUNT: u32 = 3;

fn default_variant_count() -> u32 {
    DEFAULT_VARIANT_COUNT
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VariantsRequest {
    #[validate(length(min = 2, message = "Product name must be at least 2 characters."))]
    pub product_name: String,
    #[validate(length(min = 20, message = "Base description must be at least 20 characters."))]
    pub product_description: String,
    #[validate(length(min = 10, message = "Please list at least one feature."))]
    pub key_features: String,
    #[validate(length(min = 3, message = "Target audience is required."))]
    pub target_audience: String,
    #[serde(default = "default_variant_count")]
    #[validate(range(min = 2, max = 5))]
    pub number_of_variants: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VariantsResult {
    #[validate(length(min = 1))]
    pub description_variants: Vec<String>,
}

pub struct VariantsFlow;

impl CopyFlow for VariantsFlow {
    type Request = VariantsRequest;
    type Output = VariantsResult;

    const NAME: &'static str = "A/B variants";
    const SYSTEM: &'static str = VARIANTS_SYSTEM;

    fn render(request: &VariantsRequest) -> String {
        let details = detail_lines(&[
            ("Product Name", Some(request.product_name.trim())),
            ("Product Description", Some(request.product_description.trim())),
            ("Key Features", Some(request.key_features.trim())),
            ("Target Audience", Some(request.target_audience.trim())),
        ]);
        let count = request.number_of_variants.to_string();

        fill_template(
            VARIANTS_PROMPT_TEMPLATE,
            &[
                ("details", details.as_str()),
                ("count", count.as_str()),
                ("schema_instruction", SCHEMA_INSTRUCTION),
            ],
        )
    }

    /// Exactly the requested number of variants, none blank, no two alike.
    fn check_output(request: &VariantsRequest, output: &VariantsResult) -> Result<(), String> {
        let variants = &output.description_variants;

        if variants.len() != request.number_of_variants as usize {
            return Err(format!(
                "expected {} variants, got {}",
                request.number_of_variants,
                variants.len()
            ));
        }

        if let Some(index) = variants.iter().position(|v| v.trim().is_empty()) {
            return Err(format!("variant {index} is empty"));
        }

        let mut seen = HashSet::new();
        if let Some(index) = variants.iter().position(|v| !seen.insert(v.trim())) {
            return Err(format!("variant {index} duplicates an earlier variant"));
        }

        Ok(())
    }
}

/// Generates `number_of_variants` distinct descriptions for A/B testing.
pub async fn generate_variants(
    llm: &dyn TextGenerator,
    request: &VariantsRequest,
) -> Result<VariantsResult, AppError> {
    run_flow::<VariantsFlow>(llm, request).await
}
