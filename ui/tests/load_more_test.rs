//! Integration tests for pagination: load-more appends and advances pages.

mod common;

use common::{TestCtx, user_json, users_payload};
use kittest::Queryable;
use roster_business::{UsersState, ViewParams};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn load_more_appends_next_page() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_payload(&[user_json(
            "a-1", "Jane", "Berg", "Norway",
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_payload(&[user_json(
            "b-2", "John", "Olsen", "Iceland",
        )])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = roster_ui::state::State::test(mock_server.uri());
    let app = roster_ui::RosterApp::new(state);
    let harness = egui_kittest::Harness::new_eframe(|_| app);
    let mut ctx = TestCtx::from_parts(mock_server, harness);

    ctx.settle().await;
    assert!(ctx.harness_mut().query_by_label_contains("Jane").is_some());

    ctx.click_label("Load more results");
    ctx.settle().await;

    let harness = ctx.harness_mut();
    // Both pages are on screen.
    assert!(harness.query_by_label_contains("Jane").is_some());
    assert!(harness.query_by_label_contains("John").is_some());

    let state = harness.state_mut().state_mut();
    assert_eq!(state.ctx.state::<ViewParams>().current_page, 2);
    assert_eq!(state.ctx.state::<UsersState>().users().len(), 2);
}

#[tokio::test]
async fn reset_after_load_more_keeps_only_last_batch() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_payload(&[user_json(
            "a-1", "Jane", "Berg", "Norway",
        )])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_payload(&[user_json(
            "b-2", "John", "Olsen", "Iceland",
        )])))
        .mount(&mock_server)
        .await;

    let state = roster_ui::state::State::test(mock_server.uri());
    let app = roster_ui::RosterApp::new(state);
    let harness = egui_kittest::Harness::new_eframe(|_| app);
    let mut ctx = TestCtx::from_parts(mock_server, harness);

    ctx.settle().await;
    ctx.click_label("Load more results");
    ctx.settle().await;

    // The pristine baseline is the page-2 batch only.
    ctx.click_label("Reset users");
    ctx.harness_mut().step();

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label_contains("Jane").is_none());
    assert!(harness.query_by_label_contains("John").is_some());
}
