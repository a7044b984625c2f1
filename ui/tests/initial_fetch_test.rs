//! Integration tests for the automatic first-page fetch on app start.

mod common;

use common::TestCtx;
use kittest::Queryable;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn initial_fetch_displays_users() {
    let mut ctx = TestCtx::new().await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label_contains("Jane").is_some());
    assert!(harness.query_by_label_contains("Olsen").is_some());
    assert!(harness.query_by_label_contains("Iceland").is_some());
}

#[tokio::test]
async fn loading_state_shows_before_response() {
    let template = ResponseTemplate::new(200)
        .set_body_json(common::default_users_payload())
        .set_delay(std::time::Duration::from_millis(500));
    let mut ctx = TestCtx::with_response(template).await;

    // One frame to dispatch the command, a beat for the task to mark the
    // cache Loading, one frame to render it. The response itself is still
    // half a second away.
    ctx.harness_mut().step();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    ctx.harness_mut().step();

    assert!(
        ctx.harness_mut()
            .query_by_label_contains("Loading...")
            .is_some()
    );
}

#[tokio::test]
async fn empty_batch_shows_no_users_hint() {
    let template = ResponseTemplate::new(200).set_body_json(common::users_payload(&[]));
    let mut ctx = TestCtx::with_response(template).await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label_contains("No users").is_some());
    assert!(harness.query_by_label_contains("Load more results").is_some());
}
