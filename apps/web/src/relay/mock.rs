//! Fixed payloads served when the upstream is unconfigured or unavailable.

use serde_json::Value;

use crate::models::ats::{AtsIssues, AtsResponse};
use crate::models::tailor::{
    Bullet, EducationItem, ExperienceItem, ProjectItem, TailorResponse, TailoredCv,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn tailor_mock() -> TailorResponse {
    TailorResponse {
        generation_id: "mock-123".to_string(),
        match_score: 72,
        keywords: strings(&["typescript", "fastapi", "resume", "tailoring"]),
        missing_keywords: Some(strings(&["OKRs"])),
        suggested_keywords: Some(strings(&["impact", "ownership"])),
        tailored_cv: TailoredCv {
            summary: "Tailored summary aligning strengths to job requirements.".to_string(),
            skills: strings(&["Python", "TypeScript", "Next.js"]),
            experience: vec![ExperienceItem {
                company: Some("Example Co".to_string()),
                title: Some("Engineer".to_string()),
                start: None,
                end: None,
                bullets: vec![Bullet {
                    text: "Delivered features end-to-end improving UX".to_string(),
                    source_id: Some("exp1_b1".to_string()),
                }],
            }],
            education: vec![EducationItem {
                school: "Uni".to_string(),
                degree: Some("BSc".to_string()),
                year: Some("2020".to_string()),
            }],
            projects: vec![ProjectItem {
                name: "Resumind".to_string(),
                description: "Resume tailoring MVP".to_string(),
            }],
        },
        cover_letter: "Dear Hiring Manager, ...".to_string(),
    }
}

pub fn ats_mock() -> AtsResponse {
    AtsResponse {
        ats_score: 73,
        readability: 82,
        issues: AtsIssues {
            missing_sections: strings(&["summary"]),
            keyword_gaps: strings(&["leadership", "strategy"]),
            format_warnings: vec![],
        },
        missing_keywords: strings(&["leadership", "strategy"]),
    }
}

pub fn mock_tailor_response() -> Value {
    to_value(tailor_mock())
}

pub fn mock_ats_response() -> Value {
    to_value(ats_mock())
}

// Plain data structs with string keys always serialize.
fn to_value<T: serde::Serialize>(payload: T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}
