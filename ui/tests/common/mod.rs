use std::time::Duration;

use egui_kittest::Harness;
use kittest::Queryable;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    pub mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    #[allow(unused)]
    /// App wired against a mock server answering every fetch with the
    /// default three-user payload.
    pub async fn new() -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(default_users_payload())).await
    }

    #[allow(unused)]
    pub async fn with_status(status_code: u16) -> Self {
        Self::with_response(ResponseTemplate::new(status_code)).await
    }

    #[allow(unused)]
    pub async fn with_response(template: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    #[allow(unused)]
    /// Wrap an externally prepared server/harness pair, for tests that
    /// need per-page mocks.
    pub fn from_parts(mock_server: MockServer, harness: Harness<'a, RosterApp>) -> Self {
        Self {
            mock_server,
            harness,
        }
    }

    #[allow(unused)]
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    /// Click the widget whose accessibility label contains `label`.
    pub fn click_label(&mut self, label: &str) {
        self.harness
            .query_by_label_contains(label)
            .unwrap_or_else(|| panic!("no widget labelled {label:?}"))
            .click();
        self.harness.step();
    }

    #[allow(unused)]
    /// Click the first of several widgets sharing a label, in render order.
    pub fn click_first_label(&mut self, label: &str) {
        self.harness
            .query_all_by_label_contains(label)
            .next()
            .unwrap_or_else(|| panic!("no widget labelled {label:?}"))
            .click();
        self.harness.step();
    }

    #[allow(unused)]
    /// Run frames until in-flight fetches have been applied.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(Duration::from_millis(200)).await;
        for _ in 0..10 {
            self.harness.step();
        }
    }
}

#[allow(unused)]
pub fn user_json(uuid: &str, first: &str, last: &str, country: &str) -> serde_json::Value {
    serde_json::json!({
        "name": {"title": "Ms", "first": first, "last": last},
        "location": {"country": country},
        "email": format!("{first}.{last}@example.com").to_lowercase(),
        "login": {"uuid": uuid},
        "picture": {"large": "l.jpg", "medium": "m.jpg", "thumbnail": "t.jpg"}
    })
}

#[allow(unused)]
pub fn users_payload(users: &[serde_json::Value]) -> serde_json::Value {
    serde_json::json!({ "results": users })
}

#[allow(unused)]
pub fn default_users_payload() -> serde_json::Value {
    users_payload(&[
        user_json("a-1", "Jane", "Berg", "Norway"),
        user_json("b-2", "John", "Olsen", "Iceland"),
        user_json("c-3", "Mia", "Dahl", "Norway"),
    ])
}
