// All LLM prompt constants for the copywriting flows.
// Templates are filled with `adapter::fill_template`; each placeholder is `{name}`.

/// System prompt for product description generation.
pub const DESCRIPTION_SYSTEM: &str = "You are an expert copywriter specializing in \
    e-commerce product descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Description prompt template.
/// Replace: {details}, {schema_instruction}
pub const DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Based on the following information, generate a compelling and SEO-optimized product description:

{details}

Your goal is to create a description that highlights the product's features and benefits,
appeals to the target audience, and incorporates relevant keywords for SEO.

In addition to the product description, also provide a suggested meta description and a title suggestion.
Make sure the product description is optimized for sales and adheres to e-commerce best practices.

{schema_instruction}
{
  "productDescription": "string, required: the generated product description",
  "metaDescription": "string, optional: the generated meta description",
  "titleSuggestion": "string, optional: suggested title for the product"
}"#;

/// System prompt for SEO optimization.
pub const SEO_SYSTEM: &str = "You are an SEO expert specializing in optimizing \
    product descriptions for e-commerce. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// SEO prompt template.
/// Replace: {details}, {schema_instruction}
pub const SEO_PROMPT_TEMPLATE: &str = r#"Optimize the provided product description for search engines, incorporating relevant keywords and creating a compelling meta description and a catchy title suggestion.

{details}

Keyword types that often improve the search engine optimization of product descriptions:
- Benefit keywords
- Long tail keywords
- Geo keywords
- Intent keywords
- Seasonal keywords

{schema_instruction}
{
  "optimizedDescription": "string, required: the SEO optimized product description",
  "metaDescription": "string, required: the meta description for the product",
  "titleSuggestion": "string, required: a suggested title for the product listing"
}"#;

/// System prompt for A/B variant generation.
pub const VARIANTS_SYSTEM: &str = "You are an expert copywriter specializing in creating \
    high-converting product descriptions for e-commerce. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// A/B variants prompt template.
/// Replace: {details}, {count}, {schema_instruction}
pub const VARIANTS_PROMPT_TEMPLATE: &str = r#"Your goal is to generate multiple distinct and compelling product descriptions for A/B testing. Each description should highlight different aspects of the product and appeal to the target audience.

{details}

Generate {count} different product description variants, each with a unique angle and focus. Make sure the descriptions are different from each other, highlighting different benefits and features. Write each description in a professional, engaging tone that is likely to increase sales.

{schema_instruction}
{
  "descriptionVariants": ["string", "... exactly {count} distinct, non-empty strings"]
}"#;
