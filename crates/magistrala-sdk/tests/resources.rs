use magistrala_sdk::{
    Alarm, AlarmStatus, BootstrapConfig, Client, ConnectionType, Error, Group,
    JournalsPageMetadata, PageMetadata, RuleStatus, Sdk, SdkConfig, Service, Status, User,
    UserCredentials,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOMAIN: &str = "d0b1c6f4-domain";
const TOKEN: &str = "user-token";

fn sdk_for(server: &MockServer) -> Sdk {
    Sdk::new(SdkConfig::with_base_url(&server.uri())).unwrap()
}

#[tokio::test]
async fn create_client_returns_server_assigned_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/{DOMAIN}/clients")))
        .and(header("authorization", "Bearer user-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "name": "dev1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "c1a2b3",
            "name": "dev1",
            "status": "enabled",
            "credentials": { "secret": "s3cr3t" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = sdk_for(&server);
    let created = sdk
        .clients
        .create(&Client::named("dev1"), DOMAIN, TOKEN)
        .await
        .unwrap();

    assert_eq!(created.id.as_deref(), Some("c1a2b3"));
    assert_eq!(created.status, Some(Status::Enabled));
}

#[tokio::test]
async fn missing_role_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{DOMAIN}/clients/c1/roles/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "entity not found",
            "error": "role missing"
        })))
        .mount(&server)
        .await;

    let sdk = sdk_for(&server);
    let err = sdk
        .clients
        .roles(DOMAIN)
        .view("c1", "missing", TOKEN)
        .await
        .unwrap_err();

    assert!(err.is_status(404));
    match err {
        Error::Api {
            status,
            message,
            detail,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "entity not found");
            assert_eq!(detail.as_deref(), Some("role missing"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_without_json_body_uses_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(409).set_body_string("email already taken"))
        .mount(&server)
        .await;

    let user = User {
        first_name: Some("Ada".to_string()),
        credentials: Some(UserCredentials {
            username: Some("ada".to_string()),
            secret: Some("12345678".to_string()),
        }),
        ..Default::default()
    };
    let err = sdk_for(&server).users.create(&user, None).await.unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("email already taken"));
}

#[tokio::test]
async fn list_query_fields_appear_once_and_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{DOMAIN}/clients")))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .and(query_param("name", "dev 1&2"))
        .and(query_param("tag", "a,b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clients": [{ "id": "c1", "name": "dev 1&2" }],
            "total": 1,
            "offset": 0,
            "limit": 10
        })))
        .mount(&server)
        .await;

    let pm = PageMetadata {
        name: Some("dev 1&2".to_string()),
        tag: Some("a,b".to_string()),
        ..PageMetadata::paged(0, 10)
    };
    let page = sdk_for(&server)
        .clients
        .clients(&pm, DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.clients.len(), 1);

    let requests = server.received_requests().await.unwrap();
    let url = &requests[0].url;
    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys.len(), 4);
    for key in ["offset", "limit", "name", "tag"] {
        assert_eq!(keys.iter().filter(|k| *k == key).count(), 1, "{key}");
    }
    let raw = url.query().unwrap();
    assert!(!raw.contains(' '));
    assert!(!raw.contains("1&2"));
}

#[tokio::test]
async fn ids_are_single_path_segments() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/{DOMAIN}/clients/a%2Fb")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let res = sdk_for(&server)
        .clients
        .delete("a/b", DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(res.status, 204);
}

#[tokio::test]
async fn update_without_id_is_rejected_locally() {
    let server = MockServer::start().await;
    let err = sdk_for(&server)
        .clients
        .update(&Client::named("dev1"), DOMAIN, TOKEN)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn health_check_sends_no_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "pass",
            "version": "0.15.0",
            "commit": "abc123",
            "description": "users service",
            "build_time": "2024-01-01_00:00:00",
            "instance_id": "i-1"
        })))
        .mount(&server)
        .await;

    let info = sdk_for(&server).health.health(Service::Users).await.unwrap();
    assert_eq!(info.status, "pass");
    assert_eq!(info.version, "0.15.0");

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn group_update_replaces_with_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/{DOMAIN}/groups/g1")))
        .and(header("authorization", "Bearer user-token"))
        .and(body_json(json!({ "id": "g1", "name": "floor-2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "g1",
            "name": "floor-2",
            "status": "enabled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let group = Group {
        id: Some("g1".to_string()),
        name: Some("floor-2".to_string()),
        ..Default::default()
    };
    let updated = sdk_for(&server)
        .groups
        .update(&group, DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(updated.name.as_deref(), Some("floor-2"));
}

#[tokio::test]
async fn remove_children_sends_ids_in_delete_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/{DOMAIN}/groups/g1/children")))
        .and(body_json(json!({ "children_ids": ["g2", "g3"] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let res = sdk_for(&server)
        .groups
        .remove_children("g1", &["g2".to_string(), "g3".to_string()], DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(res.status, 204);
    assert_eq!(res.message, "Children removed successfully");
}

#[tokio::test]
async fn channel_connect_posts_ids_and_types() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/{DOMAIN}/channels/connect")))
        .and(header("authorization", "Bearer user-token"))
        .and(body_json(json!({
            "client_ids": ["c1", "c2"],
            "channel_ids": ["ch1"],
            "types": ["publish", "subscribe"]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let res = sdk_for(&server)
        .channels
        .connect(
            &["c1".to_string(), "c2".to_string()],
            &["ch1".to_string()],
            &ConnectionType::BOTH,
            DOMAIN,
            TOKEN,
        )
        .await
        .unwrap();
    assert_eq!(res.status, 201);
}

#[tokio::test]
async fn send_invitation_omits_unset_resend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/domains/{DOMAIN}/invitations")))
        .and(body_json(json!({ "invitee_user_id": "u2", "role_id": "r1" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let res = sdk_for(&server)
        .domains
        .send_invitation(DOMAIN, "u2", "r1", None, TOKEN)
        .await
        .unwrap();
    assert_eq!(res.message, "Invitation sent successfully");
}

#[tokio::test]
async fn delete_scopes_patches_scope_ids() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/pats/p1/scope/remove"))
        .and(body_json(json!({ "scopes_id": ["s1", "s2"] })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let res = sdk_for(&server)
        .pats
        .delete_scopes("p1", &["s1".to_string(), "s2".to_string()], TOKEN)
        .await
        .unwrap();
    assert_eq!(res.message, "Scopes removed successfully");
}

#[tokio::test]
async fn whitelist_puts_only_state() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/{DOMAIN}/clients/state/c1")))
        .and(body_json(json!({ "state": 1 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = BootstrapConfig {
        client_id: Some("c1".to_string()),
        name: Some("gateway".to_string()),
        state: Some(1),
        ..Default::default()
    };
    let res = sdk_for(&server)
        .bootstrap
        .whitelist(&config, DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn update_template_puts_template_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/{DOMAIN}/reports/configs/rc1/template")))
        .and(body_json(json!({ "report_template": "<h1>{{.Title}}</h1>" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let res = sdk_for(&server)
        .reports
        .update_template("rc1", "<h1>{{.Title}}</h1>", DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(res.message, "Report template updated successfully");
}

#[tokio::test]
async fn reset_request_sends_referer_without_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/password/reset-request"))
        .and(header("referer", "https://console.example.com"))
        .and(body_json(json!({ "email": "ada@example.com" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    sdk_for(&server)
        .users
        .reset_password_request("ada@example.com", "https://console.example.com")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn entity_journals_are_scoped_by_domain_and_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{DOMAIN}/journal/client/c1")))
        .and(query_param("operation", "client.create"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "journals": [{
                "id": "j1",
                "operation": "client.create",
                "occurred_at": "2024-05-01T10:00:00Z"
            }],
            "total": 1,
            "offset": 0,
            "limit": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pm = JournalsPageMetadata {
        page: PageMetadata::paged(0, 10),
        operation: Some("client.create".to_string()),
        ..Default::default()
    };
    let page = sdk_for(&server)
        .journals
        .entity_journals("client", "c1", &pm, DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.journals[0].operation.as_deref(), Some("client.create"));
}

#[tokio::test]
async fn client_telemetry_reads_counters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{DOMAIN}/journal/client/c1/telemetry")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "client_id": "c1",
            "domain_id": DOMAIN,
            "inbound_messages": 42,
            "first_seen": "2024-05-01T10:00:00Z",
            "last_seen": "2024-05-02T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let telemetry = sdk_for(&server)
        .journals
        .client_telemetry("c1", DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(telemetry.inbound_messages, 42);
    assert_eq!(telemetry.outbound_messages, 0);
}

#[tokio::test]
async fn rule_enable_posts_to_enable_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/{DOMAIN}/rules/r1/enable")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "r1",
            "name": "overheat",
            "status": "enabled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let rule = sdk_for(&server)
        .rules
        .enable("r1", DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(rule.status, Some(RuleStatus::Enabled));
}

#[tokio::test]
async fn issue_cert_posts_client_and_ttl() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/{DOMAIN}/certs")))
        .and(body_json(json!({ "client_id": "c1", "ttl": "10h" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "client_id": "c1",
            "cert_serial": "6f:2a",
            "client_cert": "-----BEGIN CERTIFICATE-----"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cert = sdk_for(&server)
        .certs
        .issue("c1", "10h", DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(cert.cert_serial.as_deref(), Some("6f:2a"));
}

#[tokio::test]
async fn alarm_update_puts_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/{DOMAIN}/alarms/a1")))
        .and(body_json(json!({ "id": "a1", "status": "cleared", "assignee_id": "u1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "a1",
            "status": "cleared",
            "assignee_id": "u1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let alarm = Alarm {
        id: Some("a1".to_string()),
        status: Some(AlarmStatus::Cleared),
        assignee_id: Some("u1".to_string()),
        ..Default::default()
    };
    let updated = sdk_for(&server)
        .alarms
        .update(&alarm, DOMAIN, TOKEN)
        .await
        .unwrap();
    assert_eq!(updated.status, Some(AlarmStatus::Cleared));
}

#[tokio::test]
async fn group_role_actions_are_nested_under_group() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/{DOMAIN}/groups/g1/roles/r1/actions")))
        .and(body_json(json!({ "actions": ["read", "update"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "actions": ["read", "update"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let actions = sdk_for(&server)
        .groups
        .roles(DOMAIN)
        .add_actions("g1", "r1", &["read".to_string(), "update".to_string()], TOKEN)
        .await
        .unwrap();
    assert_eq!(actions, vec!["read", "update"]);
}
