use axum::{extract::State, Extension, Json};
use lmi_core::{CanonicalReport, ReportSubject};
use lmi_report::{render, RenderedReport, ReportTier};
use lmi_sources::{DeepDiveRequest, SourceFailure};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct CreateReportBody {
    job_title: String,
    location: String,
    /// `http(s)` URL of a report document. Local paths are not accepted here.
    #[serde(default)]
    document: Option<String>,
    #[serde(default)]
    tier: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ReportData {
    report: CanonicalReport,
    rendered: RenderedReport,
    failures: Vec<SourceFailure>,
}

/// `POST /api/v1/reports`: run a deep dive and render it.
pub(super) async fn create_report(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateReportBody>,
) -> Result<Json<ApiResponse<ReportData>>, ApiError> {
    let job_title = body.job_title.trim();
    let location = body.location.trim();
    if job_title.is_empty() || location.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "job_title and location are required",
        ));
    }

    let tier = match body.tier.as_deref() {
        Some(raw) => raw
            .parse::<ReportTier>()
            .map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.to_string()))?,
        None => ReportTier::default(),
    };

    let document = body.document.filter(|d| !d.trim().is_empty());
    if let Some(locator) = document.as_deref() {
        if !(locator.starts_with("http://") || locator.starts_with("https://")) {
            return Err(ApiError::new(
                req_id.0,
                "validation_error",
                "document must be an http(s) URL",
            ));
        }
    }

    let request = DeepDiveRequest {
        subject: ReportSubject::new(job_title, location),
        document,
    };
    let outcome = state.sources.deep_dive(&request).await;
    let rendered = render(&outcome.report, tier);

    Ok(Json(ApiResponse {
        data: ReportData {
            report: outcome.report,
            rendered,
            failures: outcome.failures,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
