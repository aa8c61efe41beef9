pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::applications::handlers as applications;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Matching
        .route("/api/v1/matches", get(matching::handle_list_matches))
        .route("/api/v1/matches/score", post(matching::handle_score_match))
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        .route(
            "/api/v1/profile/dream-jobs",
            post(profile::handle_add_dream_job),
        )
        .route(
            "/api/v1/profile/dream-jobs/:id",
            put(profile::handle_update_dream_job).delete(profile::handle_delete_dream_job),
        )
        .route(
            "/api/v1/profile/dream-jobs/:id/activate",
            post(profile::handle_activate_dream_job),
        )
        .route("/api/v1/profile/resumes", post(profile::handle_add_resume))
        .route(
            "/api/v1/profile/resumes/:id",
            put(profile::handle_update_resume).delete(profile::handle_delete_resume),
        )
        .route(
            "/api/v1/profile/resumes/:id/scan",
            post(profile::handle_scan_resume),
        )
        .route(
            "/api/v1/profile/saved-jobs/:job_id",
            post(profile::handle_toggle_saved_job),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications)
                .post(applications::handle_create_application),
        )
        .route(
            "/api/v1/applications/stats",
            get(applications::handle_application_stats),
        )
        .route(
            "/api/v1/applications/:id",
            patch(applications::handle_update_application)
                .delete(applications::handle_delete_application),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::jobs::source::StaticJobSource;
    use crate::matching::matcher::KeywordJobMatcher;
    use crate::matching::scoring::MatchWeighting;
    use crate::profile::store::InMemoryProfileStore;

    fn test_app() -> Router {
        let config = Config {
            redis_url: None,
            database_url: None,
            match_weighting: MatchWeighting::Standard,
            port: 0,
            rust_log: "debug".to_string(),
        };
        build_router(AppState {
            profiles: Arc::new(InMemoryProfileStore::new()),
            jobs: Arc::new(StaticJobSource::sample()),
            matcher: Arc::new(KeywordJobMatcher::default()),
            config,
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Profile with an active "Software Engineer" dream job and one resume.
    async fn seed_profile(app: &Router, user_id: Uuid) {
        let (status, _) = send(
            app,
            Method::PUT,
            "/api/v1/profile",
            Some(json!({
                "user_id": user_id,
                "name": "Ada",
                "preferences": { "location": "San Francisco, CA" }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, profile) = send(
            app,
            Method::POST,
            "/api/v1/profile/dream-jobs",
            Some(json!({
                "user_id": user_id,
                "title": "Software Engineer",
                "description": "Build web apps"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let dream_id = profile["dream_jobs"][0]["id"].as_i64().unwrap();

        let (status, _) = send(
            app,
            Method::POST,
            &format!("/api/v1/profile/dream-jobs/{dream_id}/activate"),
            Some(json!({ "user_id": user_id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            app,
            Method::POST,
            "/api/v1/profile/resumes",
            Some(json!({
                "user_id": user_id,
                "name": "Software Engineer Resume",
                "keywords": ["React", "Node.js", "Python"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "jobfit-api");
    }

    #[tokio::test]
    async fn test_job_search_and_lookup() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/v1/jobs?employment_type=contract", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], 5);

        let (status, body) = send(&app, Method::GET, "/api/v1/jobs?min_salary=lots", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send(&app, Method::GET, "/api/v1/jobs/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_matches_require_dream_job() {
        let app = test_app();
        let uri = format!("/api/v1/matches?user_id={}", Uuid::new_v4());
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_matches_sorted_by_score() {
        let app = test_app();
        let user_id = Uuid::new_v4();
        seed_profile(&app, user_id).await;

        let uri = format!("/api/v1/matches?user_id={user_id}&sort=score");
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "keyword");
        assert_eq!(body["weighting"], "standard");
        assert_eq!(body["dream_job"], "Software Engineer");

        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 8);
        let scores: Vec<u64> = matches.iter().map(|m| m["score"].as_u64().unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        let senior = matches.iter().find(|m| m["job_id"] == 1).unwrap();
        assert_eq!(senior["score"], 60);
        assert_eq!(senior["resume_id"], 1);
    }

    #[tokio::test]
    async fn test_score_unknown_resume_is_not_found() {
        let app = test_app();
        let user_id = Uuid::new_v4();
        seed_profile(&app, user_id).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/matches/score",
            Some(json!({ "user_id": user_id, "job_id": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 60);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/matches/score",
            Some(json!({ "user_id": user_id, "job_id": 1, "resume_id": 42 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_scan_updates_resume() {
        let app = test_app();
        let user_id = Uuid::new_v4();
        seed_profile(&app, user_id).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/profile/resumes/1/scan",
            Some(json!({
                "user_id": user_id,
                "text": "Software engineer shipping TypeScript web apps to 3M users"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let score = body["report"]["score"].as_u64().unwrap();
        assert!(score > 0);
        assert_eq!(body["resume"]["score"].as_u64().unwrap(), score);
        let keywords = body["resume"]["keywords"].as_array().unwrap();
        assert!(keywords.iter().any(|k| k.as_str() == Some("typescript")));
        assert_eq!(keywords[0], "React");
    }

    #[tokio::test]
    async fn test_scanned_keywords_raise_match_score() {
        let app = test_app();
        let user_id = Uuid::new_v4();
        seed_profile(&app, user_id).await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/profile/resumes/1/scan",
            Some(json!({
                "user_id": user_id,
                "text": "Shipped AWS Lambda and TypeScript services"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        // title 20 + skills 60 (all four tools) + location 10
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/matches/score",
            Some(json!({ "user_id": user_id, "job_id": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 90);

        let stats_uri = format!("/api/v1/applications/stats?user_id={user_id}");
        let (_, stats) = send(&app, Method::GET, &stats_uri, None).await;
        assert_eq!(stats["resumes_scanned"], 1);
    }

    #[tokio::test]
    async fn test_saved_job_toggle() {
        let app = test_app();
        let user_id = Uuid::new_v4();
        let body = Some(json!({ "user_id": user_id }));

        let (status, saved) = send(&app, Method::POST, "/api/v1/profile/saved-jobs/3", body.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["saved"], true);

        let (_, unsaved) = send(&app, Method::POST, "/api/v1/profile/saved-jobs/3", body.clone()).await;
        assert_eq!(unsaved["saved"], false);

        let (status, _) = send(&app, Method::POST, "/api/v1/profile/saved-jobs/999", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_application_lifecycle() {
        let app = test_app();
        let user_id = Uuid::new_v4();
        seed_profile(&app, user_id).await;

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/v1/applications",
            Some(json!({ "user_id": user_id, "job_id": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["position"], "Senior Software Engineer");
        assert_eq!(created["status"], "Applied");
        assert_eq!(created["match_score"], 60);
        let id = created["id"].as_str().unwrap().to_string();

        let uri = format!("/api/v1/applications/{id}");
        let (status, _) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "user_id": user_id, "status": "Rejected" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "user_id": user_id, "status": "Offer" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let stats_uri = format!("/api/v1/applications/stats?user_id={user_id}");
        let (status, stats) = send(&app, Method::GET, &stats_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stats["applications_submitted"], 1);
        assert_eq!(stats["rejections"], 1);
        assert_eq!(stats["offers"], 0);

        let (status, _) = send(&app, Method::DELETE, &format!("{uri}?user_id={user_id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let list_uri = format!("/api/v1/applications?user_id={user_id}");
        let (_, list) = send(&app, Method::GET, &list_uri, None).await;
        assert!(list.as_array().unwrap().is_empty());
    }
}
