//! Mock endpoint registry backed by [`wiremock`].
//!
//! [`StubServer`] owns the listener: starting it binds the port, dropping
//! it releases the port and every registered rule, so each test gets an
//! empty registry by construction. Matching is exact-path and
//! case-sensitive; requests that match no rule answer 404.

use std::net::TcpListener;

use tracing::debug;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::HarnessError;
use crate::fixture::FixtureStore;
use crate::model::{LOCATION_CODES, paths};

/// A canned response: status code, content type, body bytes.
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    content_type: String,
    body: Vec<u8>,
}

impl StubResponse {
    /// A 200 response with a JSON content type and the given body.
    pub fn json(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: mime::APPLICATION_JSON.to_string(),
            body: body.into(),
        }
    }

    /// A 200 JSON response whose body is read from a named fixture file.
    ///
    /// Fails immediately if the fixture does not resolve to an existing
    /// file, rather than registering a stub that serves nothing.
    pub fn from_fixture(store: &FixtureStore, name: &str) -> Result<Self, HarnessError> {
        Ok(Self::json(store.read_json_fixture(name)?))
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_content_type(mut self, content_type: &mime::Mime) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// A running stub HTTP listener with its rule table.
pub struct StubServer {
    inner: MockServer,
}

impl StubServer {
    /// Start a listener on an OS-assigned free port.
    pub async fn start() -> Self {
        let inner = MockServer::builder().start().await;
        Self { inner }
    }

    /// Start a listener on a fixed port.
    pub async fn start_on_port(port: u16) -> Result<Self, HarnessError> {
        let listener = TcpListener::bind(("127.0.0.1", port))?;
        let inner = MockServer::builder().listener(listener).start().await;
        Ok(Self { inner })
    }

    /// Base URI of the listener, e.g. `http://127.0.0.1:49321`.
    pub fn uri(&self) -> String {
        self.inner.uri()
    }

    /// Base URL of the listener.
    pub fn base_url(&self) -> Url {
        Url::parse(&self.inner.uri()).expect("stub server URL should be valid")
    }

    /// Port the listener is bound to.
    pub fn port(&self) -> u16 {
        self.inner.address().port()
    }

    /// Register one matching rule: exact method and path to a canned
    /// response. Rules that are never exercised are silently unused.
    pub async fn register(&self, rule_method: &str, rule_path: &str, response: StubResponse) {
        debug!(method = rule_method, path = rule_path, status = response.status, "registering stub");
        Mock::given(method(rule_method))
            .and(path(rule_path))
            .respond_with(
                ResponseTemplate::new(response.status)
                    .set_body_raw(response.body, &response.content_type),
            )
            .mount(&self.inner)
            .await;
    }
}

/// Mount the default location stub set from a fixture store:
/// the list-all GET and POST rules plus one GET rule per location code
/// with a same-named body fixture.
pub async fn mount_location_stubs(
    server: &StubServer,
    store: &FixtureStore,
) -> Result<(), HarnessError> {
    let list_all = StubResponse::from_fixture(store, "locations")?;
    server
        .register("GET", paths::LIST_ALL, list_all.clone())
        .await;
    server.register("POST", paths::LIST_ALL, list_all).await;

    for code in LOCATION_CODES {
        if !store.json_fixture_path(code).is_file() {
            continue;
        }
        let response = StubResponse::from_fixture(store, code)?;
        server
            .register("GET", &paths::location(code), response)
            .await;
    }
    Ok(())
}
