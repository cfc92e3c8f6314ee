use serde_json::json;

const TASK_INSTRUCTIONS: &str = "Analyze this product image and provide detailed safety information with special attention to user allergies and family context.";

const RESPONSE_RULES: &str = r#"IMPORTANT:
- Always include every key exactly as shown.
- If there's nothing to report for a field, return:
  - an empty string ("") for string values,
  - an empty array ([]) for array values,
  - and an object with empty strings for nested objects (e.g. "ageSpecificWarnings": { "babies": "", "children": "", "adults": "", "elderly": "" }).
- Do NOT omit any field under any circumstances.
- Do not include any extra fields, only that exact JSON.

Focus on ingredients visible in the image. Be as thorough as possible."#;

/// Example document shown to the provider: every report key with a short
/// description of its content.
pub fn get_analysis_report_schema() -> serde_json::Value {
    json!({
        "productName": "Product name from the image",
        "safetyRating": "1-5 (1 = very unsafe, 5 = very safe)",
        "overallSafety": "Short overall assessment",
        "generalSafety": "General safety description",
        "harmfulIngredients": ["List harmful ingredients with brief explanations"],
        "allergyWarnings": ["CRITICAL: List any ingredients matching user's allergies"],
        "familyWarnings": ["List any issues for specific family members or age groups"],
        "ageSpecificWarnings": {
            "babies": "Safety info for babies/infants",
            "children": "Safety info for children",
            "adults": "Safety info for adults",
            "elderly": "Safety info for elderly"
        },
        "compoundInteractions": ["List dangerous compound interactions"],
        "recommendations": ["List safety recommendations"],
        "personalizedWarnings": ["Specific warnings based on user profile, especially allergies"]
    })
}

/// Full text prompt: task, profile context block, response structure and
/// rules.
pub fn build_analysis_prompt(profile_context: &str) -> String {
    let schema = serde_json::to_string_pretty(&get_analysis_report_schema())
        .unwrap_or_else(|_| get_analysis_report_schema().to_string());

    format!(
        "{TASK_INSTRUCTIONS}\n\n{profile_context}\n\nPlease respond in strict JSON format, using exactly this structure:\n\n```\n{schema}\n```\n\n{RESPONSE_RULES}"
    )
}
