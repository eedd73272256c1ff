//! Service-level tests for the trail HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use crate::domain::ports::{
    Authenticator, FixtureAuthenticator, FixtureTrailLogRepository, FixtureTrailRepository,
    FixtureWaypointRepository, MockAuthenticator, MockTrailLogRepository, MockTrailRepository,
    TrailLogRepository, TrailLogRepositoryError, TrailRepository,
};
use crate::domain::{AuthenticatedUser, Trail, TrailLog};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::trails::{
    create_trail, delete_trail, get_trail, list_trails, update_trail,
};

fn sample_trail(id: i32) -> Trail {
    Trail {
        id,
        title: "Loop".to_owned(),
        overview: Some("Around the reservoir".to_owned()),
        distance: Some(5.2),
        complexity: "easy".to_owned(),
        date_created: chrono::Utc::now(),
        author_id: 7,
    }
}

fn sample_log(trail_id: i32, author_id: i32) -> TrailLog {
    TrailLog {
        id: 1,
        trail_id,
        author_id,
        recorded_at: chrono::Utc::now(),
    }
}

fn state_with(
    trails: Arc<dyn TrailRepository>,
    trail_logs: Arc<dyn TrailLogRepository>,
    authenticator: Arc<dyn Authenticator>,
) -> HttpState {
    HttpState::new(
        trails,
        Arc::new(FixtureWaypointRepository),
        trail_logs,
        authenticator,
    )
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(list_trails)
        .service(get_trail)
        .service(create_trail)
        .service(update_trail)
        .service(delete_trail)
}

fn valid_create_payload() -> Value {
    json!({
        "email": "a@x.com",
        "password": "p",
        "title": "Loop",
        "complexity": "easy",
    })
}

#[actix_web::test]
async fn get_absent_trail_returns_404_with_literal_message() {
    let state = state_with(
        Arc::new(FixtureTrailRepository),
        Arc::new(FixtureTrailLogRepository),
        Arc::new(FixtureAuthenticator),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::get().uri("/trails/99").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Trail not found" }));
}

#[actix_web::test]
async fn put_absent_trail_returns_404_with_literal_message() {
    let mut trails = MockTrailRepository::new();
    trails.expect_update().returning(|_, _| Ok(None));
    let state = state_with(
        Arc::new(trails),
        Arc::new(FixtureTrailLogRepository),
        Arc::new(FixtureAuthenticator),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::put()
        .uri("/trails/99")
        .set_json(json!({ "title": "New" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Trail not found" }));
}

#[actix_web::test]
async fn delete_absent_trail_returns_404_with_literal_message() {
    let state = state_with(
        Arc::new(FixtureTrailRepository),
        Arc::new(FixtureTrailLogRepository),
        Arc::new(FixtureAuthenticator),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::delete()
        .uri("/trails/99")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Trail not found" }));
}

#[actix_web::test]
async fn create_with_valid_credentials_persists_the_authenticated_author() {
    let mut authenticator = MockAuthenticator::new();
    authenticator
        .expect_authenticate()
        .times(1)
        .returning(|_| Ok(AuthenticatedUser { user_id: 7 }));

    let mut trails = MockTrailRepository::new();
    trails
        .expect_create()
        .times(1)
        .withf(|new_trail| new_trail.author_id == 7 && new_trail.title == "Loop")
        .returning(|_| Ok(sample_trail(42)));

    let mut logs = MockTrailLogRepository::new();
    logs.expect_record()
        .times(1)
        .withf(|trail_id, author_id| *trail_id == 42 && *author_id == 7)
        .returning(|trail_id, author_id| Ok(sample_log(trail_id, author_id)));

    let state = state_with(Arc::new(trails), Arc::new(logs), Arc::new(authenticator));
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/trails")
        .set_json(valid_create_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Trail created", "trailID": 42 }));
}

#[actix_web::test]
async fn create_with_rejected_credentials_returns_401_and_persists_nothing() {
    let mut trails = MockTrailRepository::new();
    trails.expect_create().times(0);
    let mut logs = MockTrailLogRepository::new();
    logs.expect_record().times(0);

    let state = state_with(
        Arc::new(trails),
        Arc::new(logs),
        // Fixture rejects anything that is not a@x.com / p.
        Arc::new(FixtureAuthenticator),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/trails")
        .set_json(json!({
            "email": "a@x.com",
            "password": "wrong",
            "title": "Loop",
            "complexity": "easy",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Authentication failed" }));
}

#[actix_web::test]
async fn create_with_missing_title_returns_400_before_authentication() {
    let mut authenticator = MockAuthenticator::new();
    authenticator.expect_authenticate().times(0);
    let mut trails = MockTrailRepository::new();
    trails.expect_create().times(0);

    let state = state_with(
        Arc::new(trails),
        Arc::new(FixtureTrailLogRepository),
        Arc::new(authenticator),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/trails")
        .set_json(json!({ "email": "a@x.com", "password": "p", "complexity": "easy" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "missing required field: title");
}

#[actix_web::test]
async fn create_succeeds_even_when_the_log_append_fails() {
    let mut authenticator = MockAuthenticator::new();
    authenticator
        .expect_authenticate()
        .returning(|_| Ok(AuthenticatedUser { user_id: 7 }));
    let mut trails = MockTrailRepository::new();
    trails.expect_create().returning(|_| Ok(sample_trail(42)));
    let mut logs = MockTrailLogRepository::new();
    logs.expect_record()
        .returning(|_, _| Err(TrailLogRepositoryError::query("append failed")));

    let state = state_with(Arc::new(trails), Arc::new(logs), Arc::new(authenticator));
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/trails")
        .set_json(valid_create_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn put_with_only_distance_forwards_a_distance_only_change() {
    let mut trails = MockTrailRepository::new();
    trails
        .expect_update()
        .times(1)
        .withf(|id, changes| {
            *id == 3
                && changes.distance == Some(5.2)
                && changes.title.is_none()
                && changes.overview.is_none()
                && changes.complexity.is_none()
        })
        .returning(|id, _| {
            Ok(Some(Trail {
                distance: Some(5.2),
                ..sample_trail(id)
            }))
        });

    let state = state_with(
        Arc::new(trails),
        Arc::new(FixtureTrailLogRepository),
        Arc::new(FixtureAuthenticator),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::put()
        .uri("/trails/3")
        .set_json(json!({ "distance": 5.2 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Trail updated successfully" }));
}

#[actix_web::test]
async fn listing_twice_without_mutations_returns_identical_arrays() {
    let mut trails = MockTrailRepository::new();
    let fixed = sample_trail(1);
    let fixed_clone = fixed.clone();
    trails
        .expect_list()
        .times(2)
        .returning(move || Ok(vec![fixed_clone.clone()]));

    let state = state_with(
        Arc::new(trails),
        Arc::new(FixtureTrailLogRepository),
        Arc::new(FixtureAuthenticator),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let first_request = actix_test::TestRequest::get().uri("/trails").to_request();
    let first: Value =
        actix_test::read_body_json(actix_test::call_service(&app, first_request).await).await;
    let second_request = actix_test::TestRequest::get().uri("/trails").to_request();
    let second: Value =
        actix_test::read_body_json(actix_test::call_service(&app, second_request).await).await;

    assert_eq!(first, second);
    assert_eq!(first[0]["trailID"], 1);
    assert_eq!(first[0]["authorID"], fixed.author_id);
}

#[actix_web::test]
async fn get_trail_serialises_the_documented_shape() {
    let mut trails = MockTrailRepository::new();
    trails
        .expect_find()
        .returning(|id| Ok(Some(sample_trail(id))));

    let state = state_with(
        Arc::new(trails),
        Arc::new(FixtureTrailLogRepository),
        Arc::new(FixtureAuthenticator),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::get().uri("/trails/3").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    for key in [
        "trailID",
        "title",
        "overview",
        "distance",
        "complexity",
        "dateCreated",
        "authorID",
    ] {
        assert!(body.get(key).is_some(), "response should carry {key}");
    }
    assert_eq!(body["trailID"], 3);
}
