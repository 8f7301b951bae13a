//! SEO optimization of an existing product description.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::copywriting::adapter::{
    detail_lines, fill_template, present, require_text, run_flow, CopyFlow,
};
use crate::copywriting::prompts::{SEO_PROMPT_TEMPLATE, SEO_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::SCHEMA_INSTRUCTION;
use crate::llm_client::TextGenerator;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeoRequest {
    #[validate(length(min = 1, message = "Product description is required."))]
    pub product_description: String,
    #[validate(length(min = 2, message = "Product name must be at least 2 characters."))]
    pub product_name: String,
    /// Comma-separated keywords to work into the copy.
    #[validate(length(min = 3, message = "Please provide at least one keyword."))]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeoResult {
    #[validate(length(min = 1))]
    pub optimized_description: String,
    #[validate(length(min = 1))]
    pub meta_description: String,
    #[validate(length(min = 1))]
    pub title_suggestion: String,
}

pub struct SeoFlow;

impl CopyFlow for SeoFlow {
    type Request = SeoRequest;
    type Output = SeoResult;

    const NAME: &'static str = "SEO optimization";
    const SYSTEM: &'static str = SEO_SYSTEM;

    fn render(request: &SeoRequest) -> String {
        let details = detail_lines(&[
            ("Product Name", Some(request.product_name.trim())),
            ("Product Description", Some(request.product_description.trim())),
            ("Keywords", present(&request.keywords)),
        ]);

        fill_template(
            SEO_PROMPT_TEMPLATE,
            &[("details", details.as_str()), ("schema_instruction", SCHEMA_INSTRUCTION)],
        )
    }

    fn check_output(_request: &SeoRequest, output: &SeoResult) -> Result<(), String> {
        require_text("optimizedDescription", &output.optimized_description)?;
        require_text("metaDescription", &output.meta_description)?;
        require_text("titleSuggestion", &output.title_suggestion)
    }
}

/// Rewrites a description for search engines and proposes meta description and title.
pub async fn optimize_for_seo(
    llm: &dyn TextGenerator,
    request: &SeoRequest,
) -> Result<SeoResult, AppError> {
    run_flow::<SeoFlow>(llm, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copywriting::testing::FakeGenerator;
    use serde_json::json;

    fn chair_request() -> SeoRequest {
        SeoRequest {
            product_description: "A chair.".to_string(),
            product_name: "Chair".to_string(),
            keywords: Some("ergonomic,office".to_string()),
        }
    }

    #[test]
    fn test_render_lists_product_and_keywords() {
        let prompt = SeoFlow::render(&chair_request());
        assert!(prompt.contains("Product Name: Chair"));
        assert!(prompt.contains("Product Description: A chair."));
        assert!(prompt.contains("Keywords: ergonomic,office"));
        assert!(prompt.contains("\"optimizedDescription\""));
    }

    #[test]
    fn test_render_without_keywords_omits_line() {
        let mut request = chair_request();
        request.keywords = None;
        let prompt = SeoFlow::render(&request);
        assert!(!prompt.contains("\nKeywords:"));
    }

    #[tokio::test]
    async fn test_chair_yields_all_three_fields() {
        let llm = FakeGenerator::replying(json!({
            "optimizedDescription": "An ergonomic office chair built for long workdays.",
            "metaDescription": "Shop the ergonomic office chair.",
            "titleSuggestion": "Ergonomic Office Chair"
        }));

        let result = optimize_for_seo(&llm, &chair_request()).await.unwrap();
        assert!(!result.optimized_description.is_empty());
        assert!(!result.meta_description.is_empty());
        assert!(!result.title_suggestion.is_empty());
    }

    #[tokio::test]
    async fn test_keywords_are_optional() {
        let llm = FakeGenerator::replying(json!({
            "optimizedDescription": "A chair.",
            "metaDescription": "A chair.",
            "titleSuggestion": "Chair"
        }));
        let mut request = chair_request();
        request.keywords = None;

        assert!(optimize_for_seo(&llm, &request).await.is_ok());
    }

    #[tokio::test]
    async fn test_too_short_keywords_rejected_before_dispatch() {
        let llm = FakeGenerator::failing();
        let mut request = chair_request();
        request.keywords = Some("ab".to_string());

        let err = optimize_for_seo(&llm, &request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_description_rejected_before_dispatch() {
        let llm = FakeGenerator::failing();
        let mut request = chair_request();
        request.product_description = String::new();

        let err = optimize_for_seo(&llm, &request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_meta_description_is_llm_error() {
        let llm = FakeGenerator::replying(json!({
            "optimizedDescription": "An ergonomic chair.",
            "titleSuggestion": "Chair"
        }));

        let err = optimize_for_seo(&llm, &chair_request()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_whitespace_only_fields_are_llm_error() {
        let llm = FakeGenerator::replying(json!({
            "optimizedDescription": "   ",
            "metaDescription": " ",
            "titleSuggestion": "\n"
        }));

        let err = optimize_for_seo(&llm, &chair_request()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_title_alone_is_llm_error() {
        let llm = FakeGenerator::replying(json!({
            "optimizedDescription": "An ergonomic chair.",
            "metaDescription": "Shop the chair.",
            "titleSuggestion": "  \t"
        }));

        let err = optimize_for_seo(&llm, &chair_request()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_repeated_calls_each_conform() {
        let llm = FakeGenerator::replying_each(vec![
            json!({
                "optimizedDescription": "An ergonomic office chair built for long workdays.",
                "metaDescription": "Shop the ergonomic office chair.",
                "titleSuggestion": "Ergonomic Office Chair"
            }),
            json!({
                "optimizedDescription": "Sit better all day in this adjustable office chair.",
                "metaDescription": "Adjustable comfort for every desk.",
                "titleSuggestion": "Adjustable Office Chair"
            }),
        ]);
        let request = chair_request();

        for _ in 0..2 {
            let result = optimize_for_seo(&llm, &request).await.unwrap();
            assert!(!result.optimized_description.trim().is_empty());
            assert!(!result.meta_description.trim().is_empty());
            assert!(!result.title_suggestion.trim().is_empty());
        }
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_is_llm_error() {
        let llm = FakeGenerator::failing();
        let err = optimize_for_seo(&llm, &chair_request()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(llm.calls(), 1);
    }
}
