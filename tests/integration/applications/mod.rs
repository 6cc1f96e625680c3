//! Applications domain integration tests

use axum::http::{Method, StatusCode};
use devheaven_store::Collection;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{inserted_id, request, TestApp};

const CANDIDATE: &str = "candidate@example.com";
const HR: &str = "hr@example.com";

async fn apply(app: &TestApp, job_id: &str) -> crate::common::TestResponse {
    app.send(request(
        Method::POST,
        "/applyJobs",
        Some(&app.cookie_for(CANDIDATE)),
        Some(json!({
            "jobId": job_id,
            "email": CANDIDATE,
            "companyName": "Acme",
            "position": "Rust Engineer",
            "status": "pending"
        })),
    ))
    .await
}

mod candidate_tests {
    use super::*;

    #[tokio::test]
    async fn test_apply_increments_apply_count() {
        let app = TestApp::new();
        let job_id = app.seed_job(json!({ "title": "Rust Engineer" })).await;

        let first = apply(&app, &job_id.to_string()).await;
        assert_eq!(first.status, StatusCode::OK);
        assert_eq!(first.body["acknowledged"], true);
        assert_eq!(app.job(job_id).await.unwrap()["applyCount"], 1);

        let second = apply(&app, &job_id.to_string()).await;
        assert_eq!(second.status, StatusCode::OK);
        assert_eq!(app.job(job_id).await.unwrap()["applyCount"], 2);

        let stored = app.application(inserted_id(&first.body)).await.unwrap();
        assert_eq!(stored["jobId"], job_id.to_string());
        assert_eq!(stored["status"], "pending");
    }

    #[tokio::test]
    async fn test_apply_to_job_with_fractional_count_keeps_counting() {
        let app = TestApp::new();
        let created = app
            .send(request(
                Method::POST,
                "/newJob",
                Some(&app.cookie_for(HR)),
                Some(json!({ "title": "Rust Engineer", "applyCount": 1.5 })),
            ))
            .await;
        let job_id = inserted_id(&created.body);

        let response = apply(&app, &job_id.to_string()).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["acknowledged"], true);
        assert_eq!(app.job(job_id).await.unwrap()["applyCount"], 2);
        assert_eq!(app.store.count(Collection::Applications).await, 1);
    }

    #[tokio::test]
    async fn test_apply_to_job_with_non_numeric_count_restarts_it() {
        let app = TestApp::new();
        let job_id = app
            .seed_job(json!({ "title": "Rust Engineer", "applyCount": "lots" }))
            .await;

        let response = apply(&app, &job_id.to_string()).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(app.job(job_id).await.unwrap()["applyCount"], 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_apply_to_unknown_job_is_not_found_but_stored() {
        let app = TestApp::new();

        let response = apply(&app, &Uuid::new_v4().to_string()).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["error"]["code"], "NOT_FOUND");

        let response = apply(&app, "not-a-job-id").await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);

        assert_eq!(app.store.count(Collection::Applications).await, 2);
    }

    #[tokio::test]
    async fn test_my_applications_lists_own_only() {
        let app = TestApp::new();
        app.seed(Collection::Applications, json!({ "email": CANDIDATE, "position": "A" }))
            .await;
        app.seed(Collection::Applications, json!({ "email": "someone@example.com" }))
            .await;
        app.seed(Collection::Applications, json!({ "email": CANDIDATE, "position": "B" }))
            .await;

        let response = app
            .send(request(
                Method::GET,
                &format!("/myApplications?email={}", CANDIDATE),
                Some(&app.cookie_for(CANDIDATE)),
                None,
            ))
            .await;

        assert_eq!(response.status, StatusCode::OK);
        let positions: Vec<&str> = response
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["position"].as_str().unwrap())
            .collect();
        assert_eq!(positions, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_my_applications_forbidden_for_other_email() {
        let app = TestApp::new();
        app.seed(Collection::Applications, json!({ "email": "victim@example.com" }))
            .await;

        let response = app
            .send(request(
                Method::GET,
                "/myApplications?email=victim@example.com",
                Some(&app.cookie_for(CANDIDATE)),
                None,
            ))
            .await;

        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.body["error"]["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_my_applications_forbidden_without_email_param() {
        let app = TestApp::new();
        let response = app
            .send(request(
                Method::GET,
                "/myApplications",
                Some(&app.cookie_for(CANDIDATE)),
                None,
            ))
            .await;

        assert_eq!(response.status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_get_application_or_null() {
        let app = TestApp::new();
        let id = app
            .seed(Collection::Applications, json!({ "email": CANDIDATE }))
            .await;
        let cookie = app.cookie_for(CANDIDATE);

        let found = app
            .send(request(
                Method::GET,
                &format!("/application/{}", id),
                Some(&cookie),
                None,
            ))
            .await;
        assert_eq!(found.body["_id"], id.to_string());
        assert_eq!(found.body["email"], CANDIDATE);

        let missing = app
            .send(request(
                Method::GET,
                &format!("/application/{}", Uuid::new_v4()),
                Some(&cookie),
                None,
            ))
            .await;
        assert_eq!(missing.status, StatusCode::OK);
        assert_eq!(missing.body, Value::Null);
    }

    #[tokio::test]
    async fn test_update_application_whitelist() {
        let app = TestApp::new();
        let id = app
            .seed(
                Collection::Applications,
                json!({ "email": CANDIDATE, "github": "gh/old", "status": "pending" }),
            )
            .await;

        let response = app
            .send(request(
                Method::PATCH,
                &format!("/updateApplication/{}", id),
                Some(&app.cookie_for(CANDIDATE)),
                Some(json!({ "email": CANDIDATE, "resume": "cv.pdf", "status": "accepted" })),
            ))
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["matchedCount"], 1);

        let stored = app.application(id).await.unwrap();
        assert_eq!(stored["resume"], "cv.pdf");
        assert_eq!(stored["github"], Value::Null);
        assert_eq!(stored["status"], "pending");
    }

    #[tokio::test]
    async fn test_delete_application_twice() {
        let app = TestApp::new();
        let id = app
            .seed(Collection::Applications, json!({ "email": CANDIDATE }))
            .await;
        let cookie = app.cookie_for(CANDIDATE);
        let uri = format!("/delete-application/{}", id);

        let first = app
            .send(request(Method::DELETE, &uri, Some(&cookie), None))
            .await;
        let second = app
            .send(request(Method::DELETE, &uri, Some(&cookie), None))
            .await;

        assert_eq!(first.body["deletedCount"], 1);
        assert_eq!(second.body["deletedCount"], 0);
    }
}

mod recruiter_tests {
    use super::*;

    #[tokio::test]
    async fn test_view_candidates_for_job() {
        let app = TestApp::new();
        let job_id = app.seed_job(json!({ "title": "Rust Engineer" })).await;
        apply(&app, &job_id.to_string()).await;
        apply(&app, &job_id.to_string()).await;
        app.seed(Collection::Applications, json!({ "jobId": "some-other-job" }))
            .await;

        let response = app
            .send(request(
                Method::GET,
                &format!("/view-candidate/jobs/{}", job_id),
                Some(&app.cookie_for(HR)),
                None,
            ))
            .await;

        assert_eq!(response.status, StatusCode::OK);
        let candidates = response.body.as_array().unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates
            .iter()
            .all(|c| c["jobId"] == job_id.to_string()));
    }

    #[tokio::test]
    async fn test_view_candidates_accepts_any_job_reference() {
        let app = TestApp::new();
        app.seed(Collection::Applications, json!({ "jobId": "legacy-42" }))
            .await;

        let response = app
            .send(request(
                Method::GET,
                "/view-candidate/jobs/legacy-42",
                Some(&app.cookie_for(HR)),
                None,
            ))
            .await;

        assert_eq!(response.body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_review_sets_status_only() {
        let app = TestApp::new();
        let id = app
            .seed(
                Collection::Applications,
                json!({ "email": CANDIDATE, "status": "pending" }),
            )
            .await;

        let response = app
            .send(request(
                Method::PATCH,
                &format!("/review-application/{}", id),
                Some(&app.cookie_for(HR)),
                Some(json!({ "status": "interview", "email": "changed@example.com" })),
            ))
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["modifiedCount"], 1);

        let stored = app.application(id).await.unwrap();
        assert_eq!(stored["status"], "interview");
        assert_eq!(stored["email"], CANDIDATE);
    }

    #[tokio::test]
    async fn test_review_with_same_status_modifies_nothing() {
        let app = TestApp::new();
        let id = app
            .seed(Collection::Applications, json!({ "status": "pending" }))
            .await;

        let response = app
            .send(request(
                Method::PATCH,
                &format!("/review-application/{}", id),
                Some(&app.cookie_for(HR)),
                Some(json!({ "status": "pending" })),
            ))
            .await;

        assert_eq!(response.body["matchedCount"], 1);
        assert_eq!(response.body["modifiedCount"], 0);
    }
}
