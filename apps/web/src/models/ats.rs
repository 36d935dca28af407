use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsRequest {
    pub resume_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsIssues {
    pub missing_sections: Vec<String>,
    pub keyword_gaps: Vec<String>,
    pub format_warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResponse {
    pub ats_score: u8,   // 0 – 100
    pub readability: u8, // 0 – 100
    pub issues: AtsIssues,
    pub missing_keywords: Vec<String>,
}
