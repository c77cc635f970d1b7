//! Full custom-field lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every endpoint
//! operation through a `RequestExecutor` backed by ureq, so request building,
//! URL resolution and response parsing are checked end-to-end.

use serde_json::json;
use ticketmatic_core::types::customfield::{field_type, value_type};
use ticketmatic_core::{
    customfields, ApiError, ClientConfig, CustomField, CustomFieldQuery, HttpMethod, HttpRequest,
    HttpResponse, RequestExecutor, Translations,
};

struct UreqExecutor {
    config: ClientConfig,
    agent: ureq::Agent,
}

impl UreqExecutor {
    /// Disables ureq's status-code-as-error behavior so 4xx/5xx responses
    /// come back as data for the parse step to interpret.
    fn new(config: ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { config, agent }
    }
}

impl RequestExecutor for UreqExecutor {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.config.url_for(req)?;
        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&url).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&url).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&url).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

#[test]
fn custom_field_lifecycle() {
    // Step 1: start mock server and point an executor at it.
    let addr = start_server();
    let client = UreqExecutor::new(ClientConfig::new(&format!("http://{addr}"), "demo"));

    // Step 2: list — should be empty.
    let list = customfields::getlist(&client, CustomFieldQuery::default()).unwrap();
    assert!(list.records().is_empty(), "expected empty list");
    assert_eq!(list.nbrofresults, Some(0));

    // Step 3: create from a raw mapping; the numeric string is coerced.
    let raw = json!({
        "typeid": "13002",
        "identifier": "shoesize",
        "caption": "Shoe size",
        "fieldtypeid": value_type::INTEGER,
        "required": false
    });
    let created = customfields::create(&client, raw.as_object().cloned().unwrap()).unwrap();
    let id = created.id.expect("server assigns an id");
    assert_eq!(created.typeid, Some(field_type::CONTACT));
    assert_eq!(created.caption.as_deref(), Some("Shoe size"));
    assert_eq!(created.isarchived, Some(false));

    // Step 4: create a second field from a typed record.
    let other = customfields::create(
        &client,
        CustomField {
            typeid: Some(field_type::ORDER),
            identifier: Some("giftwrap".to_string()),
            caption: Some("Gift wrap".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    // Step 5: get the first field.
    let fetched = customfields::get(&client, id).unwrap();
    assert_eq!(fetched, created);

    // Step 6: partial update — only description changes.
    let updated = customfields::update(
        &client,
        id,
        CustomField {
            description: Some("EU sizes".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.description.as_deref(), Some("EU sizes"));
    assert_eq!(updated.caption.as_deref(), Some("Shoe size"));
    assert_eq!(updated.identifier, created.identifier);

    // Step 7: filters are sent as query parameters.
    let by_type = customfields::getlist(
        &client,
        CustomFieldQuery {
            typeid: Some(field_type::ORDER),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(by_type.records().len(), 1);
    assert_eq!(by_type.records()[0].id, other.id);

    let by_text = customfields::getlist(
        &client,
        CustomFieldQuery {
            filter: Some("shoe".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(by_text.records().len(), 1);
    assert_eq!(by_text.records()[0].id, Some(id));

    // Step 8: translations.
    let mut data = Translations::new();
    data.set("caption", "nl", "Schoenmaat");
    let result = customfields::translate(&client, id, &data).unwrap();
    assert_eq!(result.get("caption", "nl"), Some("Schoenmaat"));
    let fetched = customfields::translations(&client, id).unwrap();
    assert_eq!(fetched, result);

    // Step 9: delete archives the field.
    customfields::delete(&client, id).unwrap();

    let visible = customfields::getlist(&client, CustomFieldQuery::default()).unwrap();
    assert!(visible.records().iter().all(|f| f.id != Some(id)));

    let all = customfields::getlist(
        &client,
        CustomFieldQuery {
            includearchived: Some(true),
            ..Default::default()
        },
    )
    .unwrap();
    let archived = all
        .records()
        .iter()
        .find(|f| f.id == Some(id))
        .expect("archived field is still listed");
    assert_eq!(archived.isarchived, Some(true));

    // Step 10: an archived field is still readable.
    let fetched = customfields::get(&client, id).unwrap();
    assert_eq!(fetched.isarchived, Some(true));

    // Step 11: unknown ids surface as client errors.
    let err = customfields::get(&client, 9999).unwrap_err();
    assert!(err.is_not_found());
    let err = customfields::delete(&client, 9999).unwrap_err();
    assert!(matches!(err, ApiError::Client { status: 404, .. }));

    // Step 12: server-side validation failures carry status and body.
    let err = customfields::create(&client, CustomField::default()).unwrap_err();
    match err {
        ApiError::Client { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("typeid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = UreqExecutor::new(ClientConfig::new(&format!("http://{addr}"), "demo"));

    let err = customfields::get(&client, 1).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
