//! Local development upstream. Mounted under `/api/v1` when `STUB_UPSTREAM=true`, so
//! `API_BASE_URL` can point back at this server and exercise the relay end to end.
//!
//! Canned, deterministic data apart from the generation id. There is no ATS endpoint;
//! `/api/v1/ats/check` falls through to the JSON 404.

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::tailor::{
    Bullet, EducationItem, ExperienceItem, ProjectItem, TailorRequest, TailorResponse, TailoredCv,
};
use crate::state::AppState;

const COVER_LETTER: &str = "Dear Hiring Manager,\n\n\
    I am excited to apply for this role. My experience building full-stack applications with Next.js and FastAPI, \
    combined with a focus on measurable outcomes and clear communication, aligns strongly with your needs. \
    I have delivered features end-to-end, collaborated with stakeholders, and optimized performance to improve user experience.\n\n\
    I would welcome the opportunity to contribute and learn more about your priorities.\n\n\
    Sincerely,\nYour Name";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(handle_stub_health))
        .route("/api/v1/tailor", post(handle_stub_tailor))
}

/// GET /api/v1/health
async fn handle_stub_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /api/v1/tailor
async fn handle_stub_tailor(
    payload: Result<Json<TailorRequest>, JsonRejection>,
) -> Result<Json<TailorResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::UnprocessableEntity(e.body_text()))?;
    info!(tone = ?request.tone, role = ?request.role, "Stub tailor request");
    Ok(Json(stub_tailor_response(Uuid::new_v4())))
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn stub_tailor_response(generation_id: Uuid) -> TailorResponse {
    TailorResponse {
        generation_id: generation_id.to_string(),
        match_score: 78,
        keywords: to_strings(&["stakeholder management", "typescript", "fastapi", "resume parsing"]),
        missing_keywords: Some(to_strings(&["OKRs", "A/B testing"])),
        suggested_keywords: Some(to_strings(&["cross-functional", "ownership"])),
        tailored_cv: TailoredCv {
            summary: "Results-driven professional aligning experience to the target role. \
                Highlights keywords and optimizes impact with measurable outcomes."
                .to_string(),
            skills: to_strings(&["Python", "TypeScript", "FastAPI", "Next.js"]),
            experience: vec![ExperienceItem {
                company: Some("Acme Corp".to_string()),
                title: Some("Software Engineer".to_string()),
                start: Some("2022".to_string()),
                end: Some("Present".to_string()),
                bullets: vec![
                    Bullet {
                        text: "Built a resume tailoring tool using FastAPI and Next.js, reducing edit time by 60%"
                            .to_string(),
                        source_id: Some("exp_1_b1".to_string()),
                    },
                    Bullet {
                        text: "Implemented keyword extraction to improve match scores by 25%".to_string(),
                        source_id: Some("exp_1_b2".to_string()),
                    },
                ],
            }],
            education: vec![EducationItem {
                school: "Tech University".to_string(),
                degree: Some("BSc Computer Science".to_string()),
                year: Some("2020".to_string()),
            }],
            projects: vec![ProjectItem {
                name: "Resumind MVP".to_string(),
                description: "MVP for resume tailoring and cover letter generation".to_string(),
            }],
        },
        cover_letter: COVER_LETTER.to_string(),
    }
}
