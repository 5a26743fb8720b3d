use magistrala_proto::cipher;
use magistrala_sdk::{MessagesPageMetadata, PageMetadata, Sdk, SdkConfig, SenMLRecord};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOMAIN: &str = "dom-1";

fn sdk_for(server: &MockServer) -> Sdk {
    Sdk::new(SdkConfig::with_base_url(&server.uri())).unwrap()
}

#[tokio::test]
async fn senml_send_splits_dotted_topic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/m/dom-1/c/chan-1/room/temp"))
        .and(header("authorization", "Client client-secret"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let records = [SenMLRecord::value("temperature", 21.5).with_unit("Cel")];
    let res = sdk_for(&server)
        .messages
        .send_senml(DOMAIN, "chan-1.room.temp", &records, "client-secret")
        .await
        .unwrap();
    assert_eq!(res.status, 202);
    assert_eq!(res.message, "Message sent successfully");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!([{ "n": "temperature", "u": "Cel", "v": 21.5 }]));
}

#[tokio::test]
async fn malformed_topic_never_reaches_server() {
    let server = MockServer::start().await;
    let err = sdk_for(&server)
        .messages
        .send(DOMAIN, "chan-1..temp", "[]", "client-secret")
        .await
        .unwrap_err();

    assert!(matches!(err, magistrala_sdk::Error::Topic(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn read_moves_subtopic_into_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dom-1/channels/chan-1/messages"))
        .and(header("authorization", "Bearer user-token"))
        .and(query_param("subtopic", "room.temp"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [{
                "channel": "chan-1",
                "subtopic": "room.temp",
                "publisher": "client-1",
                "protocol": "http",
                "name": "temperature",
                "value": 21.5,
                "time": 1715000000.0
            }],
            "total": 1,
            "offset": 0,
            "limit": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pm = MessagesPageMetadata {
        page: PageMetadata::paged(0, 5),
        ..Default::default()
    };
    let page = sdk_for(&server)
        .messages
        .read("chan-1.room.temp", &pm, DOMAIN, "user-token")
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.messages[0].value, Some(21.5));
}

#[tokio::test]
async fn secure_bootstrap_decrypts_response() {
    let crypto_key = "shared-crypto-key";
    let config = json!({
        "client_id": "client-1",
        "external_id": "ext-1",
        "name": "gateway",
        "content": "{\"mqtt\":\"tcp://broker:1883\"}"
    });
    let encrypted = cipher::encrypt(&config.to_string(), crypto_key).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients/bootstrap/secure/ext-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(encrypted))
        .expect(1)
        .mount(&server)
        .await;

    let fetched = sdk_for(&server)
        .bootstrap
        .secure_bootstrap("ext-1", "ext-key", crypto_key)
        .await
        .unwrap();
    assert_eq!(fetched.client_id.as_deref(), Some("client-1"));
    assert_eq!(fetched.name.as_deref(), Some("gateway"));

    let requests = server.received_requests().await.unwrap();
    let auth = requests[0]
        .headers
        .get("authorization")
        .unwrap()
        .to_str()
        .unwrap();
    let sent_key = auth.strip_prefix("Client ").unwrap();
    assert_eq!(cipher::decrypt(sent_key, crypto_key).unwrap(), "ext-key");
}
