//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, stubs the endpoint under test,
//! then drives the client through the default ureq transport. Assertions
//! cover both the decoded value and the request the mock recorded, so
//! request building, dispatch and response parsing are checked together.

mod common;

use std::collections::BTreeMap;

use common::{start_mock, API_KEY};
use knock_core::{
    CancellationToken, EntityRef, KnockError, ListOptions, MethodOptions, Properties,
    TriggerWorkflow,
};
use serde_json::{json, Value};
use url::form_urlencoded;

fn trigger_options() -> TriggerWorkflow {
    let mut data = Properties::new();
    data.insert("foo".into(), json!("bar"));
    TriggerWorkflow {
        recipients: vec![EntityRef::from("user_12345")],
        actor: Some("user_12345".into()),
        data: Some(data),
        tenant: Some("tenant_12345".into()),
        cancellation_key: Some("some-cancellation-key".into()),
    }
}

fn expected_trigger_body() -> Value {
    json!({
        "recipients": ["user_12345"],
        "actor": "user_12345",
        "data": {"foo": "bar"},
        "tenant": "tenant_12345",
        "cancellation_key": "some-cancellation-key"
    })
}

#[test]
fn get_user_returns_mocked_record() {
    let mock = start_mock();
    let stubbed = json!({"id": "chris", "email": "chris@knock.app", "name": "Chris Bell"});
    mock.stub("GET", "/v1/users/chris", 200, stubbed.clone());

    let user = mock.client().users().get("chris").unwrap();

    assert_eq!(serde_json::to_value(&user).unwrap(), stubbed);
    let recorded = mock.last_request();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.path, "/v1/users/chris");
    assert!(recorded.query.is_none());
}

#[test]
fn trigger_workflow_sends_options_as_body() {
    let mock = start_mock();
    let run_id = "e6cb6f9b-2f2c-4c2e-8f6f-3b8e1d9c8a11";
    mock.stub(
        "POST",
        "/v1/workflows/some-workflow/trigger",
        200,
        json!({"workflow_run_id": run_id}),
    );

    let response = mock
        .client()
        .workflows()
        .trigger("some-workflow", &trigger_options(), None)
        .unwrap();

    assert_eq!(response.workflow_run_id, run_id);
    let recorded = mock.last_request();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/v1/workflows/some-workflow/trigger");
    assert_eq!(recorded.json_body(), Some(expected_trigger_body()));
    assert_eq!(recorded.header("content-type"), Some("application/json"));
    assert!(recorded.header("idempotency-key").is_none());
}

#[test]
fn trigger_workflow_with_idempotency_key_sends_header() {
    let mock = start_mock();
    mock.stub(
        "POST",
        "/v1/workflows/some-workflow/trigger",
        200,
        json!({"workflow_run_id": "run_1"}),
    );

    mock.client()
        .workflows()
        .trigger(
            "some-workflow",
            &trigger_options(),
            Some(&MethodOptions::with_idempotency_key("some-idempotency-key")),
        )
        .unwrap();

    let recorded = mock.last_request();
    assert_eq!(recorded.header("Idempotency-Key"), Some("some-idempotency-key"));
    assert_eq!(recorded.json_body(), Some(expected_trigger_body()));
}

#[test]
fn set_workflow_preferences_forms_share_path_with_different_bodies() {
    let mock = start_mock();
    let path = "/v1/users/user_1/preferences/default/workflows/some-workflow";
    mock.stub(
        "PUT",
        path,
        200,
        json!({"id": "default", "workflows": {"some-workflow": true}}),
    );

    let client = mock.client();
    client
        .users()
        .set_workflow_preferences("user_1", "some-workflow", true, None)
        .unwrap();
    client
        .users()
        .set_workflow_preferences(
            "user_1",
            "some-workflow",
            BTreeMap::from([("email".to_string(), true)]),
            None,
        )
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    for recorded in &requests {
        assert_eq!(recorded.method, "PUT");
        assert_eq!(recorded.path, path);
    }
    assert_eq!(requests[0].json_body(), Some(json!({"subscribed": true})));
    assert_eq!(requests[1].json_body(), Some(json!({"email": true})));
}

#[test]
fn requests_carry_auth_and_user_agent() {
    let mock = start_mock();
    mock.stub("GET", "/v1/tenants/acme", 200, json!({"id": "acme", "properties": {}}));

    let client = mock.client();
    client.tenants().get("acme").unwrap();

    let recorded = mock.last_request();
    assert_eq!(
        recorded.header("authorization"),
        Some(format!("Bearer {API_KEY}").as_str())
    );
    assert_eq!(recorded.header("user-agent"), Some(client.user_agent()));
    assert!(client.user_agent().starts_with("knock-rust/"));
}

#[test]
fn list_query_reaches_server() {
    let mock = start_mock();
    mock.stub(
        "GET",
        "/v1/messages",
        200,
        json!({
            "page_info": {"page_size": 1, "before": null, "after": "next"},
            "items": [{"id": "msg_1", "status": "delivered"}]
        }),
    );

    let mut trigger_data = Properties::new();
    trigger_data.insert("order_id".into(), json!(42));
    let options = ListOptions::new()
        .page_size(1)
        .trigger_data(trigger_data.clone())
        .filter("status", "delivered");
    let page = mock.client().messages().list(Some(&options)).unwrap();

    assert_eq!(page.next_cursor(), Some("next"));
    assert_eq!(page.results()[0].id, "msg_1");

    let recorded = mock.last_request();
    let pairs: Vec<(String, String)> =
        form_urlencoded::parse(recorded.query.as_deref().unwrap().as_bytes())
            .into_owned()
            .collect();
    assert!(pairs.contains(&("page_size".to_string(), "1".to_string())));
    assert!(pairs.contains(&("status".to_string(), "delivered".to_string())));
    let encoded = &pairs.iter().find(|(k, _)| k == "trigger_data").unwrap().1;
    assert_eq!(serde_json::from_str::<Properties>(encoded).unwrap(), trigger_data);
    assert!(recorded.body.is_none());
}

#[test]
fn delete_with_body_reaches_server() {
    let mock = start_mock();
    mock.stub(
        "DELETE",
        "/v1/schedules",
        200,
        json!([{"id": "sched_1", "workflow": "digest", "repeats": []}]),
    );

    let deleted = mock.client().workflows().delete_schedules(["sched_1"]).unwrap();

    assert_eq!(deleted[0].id, "sched_1");
    let recorded = mock.last_request();
    assert_eq!(recorded.method, "DELETE");
    assert_eq!(recorded.json_body(), Some(json!({"schedule_ids": ["sched_1"]})));
}

#[test]
fn delete_accepts_no_content() {
    let mock = start_mock();
    mock.stub("DELETE", "/v1/users/chris", 204, Value::Null);
    mock.client().users().delete("chris").unwrap();
    assert_eq!(mock.last_request().method, "DELETE");
}

#[test]
fn missing_resource_maps_to_not_found() {
    let mock = start_mock();

    let err = mock.client().users().get("nobody").unwrap_err();

    assert!(err.is_not_found(), "{err:?}");
    assert_eq!(err.status(), Some(404));
    let envelope = err.api_error_body().unwrap();
    assert_eq!(envelope.code.as_deref(), Some("resource_missing"));
    assert_eq!(envelope.error_type.as_deref(), Some("api_error"));
}

#[test]
fn server_error_maps_to_api_error_with_body() {
    let mock = start_mock();
    mock.stub(
        "POST",
        "/v1/workflows/broken/trigger",
        500,
        json!({"code": "internal_error", "message": "boom", "status": 500}),
    );

    let err = mock
        .client()
        .workflows()
        .trigger("broken", &trigger_options(), None)
        .unwrap_err();

    match &err {
        KnockError::Api { status, body } => {
            assert_eq!(*status, 500);
            assert!(body.contains("internal_error"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.api_error_body().unwrap().message.as_deref(), Some("boom"));
}

#[test]
fn send_raw_returns_error_status_as_data() {
    let mock = start_mock();
    mock.stub("GET", "/v1/users/teapot", 418, json!({"code": "teapot"}));

    let response = mock
        .client()
        .send_raw(&knock_core::KnockRequest::get("/users/teapot"))
        .unwrap();

    assert_eq!(response.status, 418);
    assert_eq!(
        serde_json::from_str::<Value>(&response.body).unwrap(),
        json!({"code": "teapot"})
    );
}

#[test]
fn cancelled_call_never_reaches_server() {
    let mock = start_mock();
    mock.stub("GET", "/v1/users/chris", 200, json!({"id": "chris"}));

    let token = CancellationToken::new();
    let client = mock.client().with_cancellation(&token);
    client.users().get("chris").unwrap();

    token.cancel();
    let err = client.users().get("chris").unwrap_err();

    assert!(matches!(err, KnockError::Cancelled));
    assert_eq!(mock.requests().len(), 1);
}

#[test]
fn unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = knock_core::KnockClient::with_config(
        knock_core::ClientConfig::new(API_KEY).with_base_url(format!("http://{addr}/v1")),
    )
    .unwrap();
    let err = client.users().get("chris").unwrap_err();

    assert!(matches!(err, KnockError::Transport(_)), "{err:?}");
}
