use std::collections::BTreeMap;

use axum::{http::StatusCode, response::IntoResponse, Form, Json};
use serde_json::json;

use crate::submission::Submission;

/// `POST /webhook/jotform`: accept a form-builder submission.
///
/// With a `rawRequest` field the embedded JSON is decoded and echoed back as
/// a flat record. Without one the raw form fields are echoed.
pub(super) async fn jotform(Form(form): Form<BTreeMap<String, String>>) -> impl IntoResponse {
    tracing::info!(keys = ?form.keys().collect::<Vec<_>>(), "received form webhook");

    let Some(raw) = form.get("rawRequest").filter(|raw| !raw.is_empty()) else {
        tracing::warn!("webhook has no rawRequest; echoing form fields");
        return (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Webhook received (no rawRequest)",
                "form_data": form,
            })),
        );
    };

    match Submission::from_raw_request(raw) {
        Ok(submission) => {
            tracing::info!(
                submission_id = submission.submission_id.as_deref().unwrap_or("-"),
                answers = submission.answers.len(),
                "decoded submission"
            );
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "submission_id": submission.submission_id,
                    "message": "Submission received successfully",
                    "data_received": submission.data_received(),
                })),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "could not decode rawRequest");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": "Invalid JSON in rawRequest",
                })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    use super::*;
    use crate::api::tests::{body_json, test_app};

    async fn post_form(body: &str) -> axum::response::Response {
        test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook/jotform")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("response")
    }

    #[tokio::test]
    async fn decodes_raw_request() {
        // rawRequest={"submissionID":"123","formID":"9","answers":{"3":{"name":"functie","answer":"Monteur"}}}
        let body = "formID=9&rawRequest=%7B%22submissionID%22%3A%22123%22%2C%22formID%22%3A%229%22%2C\
%22answers%22%3A%7B%223%22%3A%7B%22name%22%3A%22functie%22%2C%22answer%22%3A%22Monteur%22%7D%7D%7D";
        let response = post_form(body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["submission_id"], "123");
        assert_eq!(json["message"], "Submission received successfully");
        assert_eq!(json["data_received"]["form_id"], "9");
        assert_eq!(json["data_received"]["functie"], "Monteur");
        assert!(json["data_received"]["submission_date"].is_null());
    }

    #[tokio::test]
    async fn invalid_raw_request_is_bad_request() {
        let response = post_form("rawRequest=%7Bnot+json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid JSON in rawRequest");
    }

    #[tokio::test]
    async fn missing_raw_request_echoes_form() {
        let response = post_form("name=Jan&regio=Arnhem").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Webhook received (no rawRequest)");
        assert_eq!(json["form_data"]["name"], "Jan");
        assert_eq!(json["form_data"]["regio"], "Arnhem");
    }
}
