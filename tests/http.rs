use rand::{SeedableRng, rngs::StdRng};
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use ypbank_stress::console::SharedBuffer;
use ypbank_stress::payload::build_payload;
use ypbank_stress::types::TxKind;
use ypbank_stress::{Console, EndpointMap, HttpTransport, LoadDriver, Transport};

async fn bank_stub(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn non_success_status_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/transacciones/retiro"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let endpoints = EndpointMap::new(&server.uri());
    let transport = HttpTransport::new(None).unwrap();
    let payload = build_payload(TxKind::Withdrawal, 1, &mut StdRng::seed_from_u64(1));

    let status = transport
        .post(endpoints.url_for(TxKind::Withdrawal), &payload)
        .await
        .unwrap();
    assert_eq!(status, 422);
}

#[tokio::test]
async fn run_posts_json_to_kind_endpoint() {
    let server = bank_stub(201).await;
    let buffer = SharedBuffer::new();
    let driver = LoadDriver::new(
        HttpTransport::new(None).unwrap(),
        EndpointMap::new(&server.uri()),
        Console::new(buffer.clone()),
    )
    .with_seed(3);

    driver.run(5, 2).await.unwrap();

    let lines: Vec<String> = buffer
        .lines()
        .into_iter()
        .filter(|l| l.starts_with('['))
        .collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l.ends_with("=> Código: 201")));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
    for request in requests {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let kind = body["tipoTransaccion"].as_str().unwrap();
        let expected_path = match kind {
            "TRANSFERENCIA" => "/api/v1/transacciones/transferencia",
            "RETIRO" => "/api/v1/transacciones/retiro",
            "DEPOSITO" => "/api/v1/transacciones/deposito",
            other => panic!("unexpected kind {other}"),
        };
        assert_eq!(request.url.path(), expected_path);
        assert!(body["monto"].is_f64());
        assert!(body["descripcion"].is_string());
    }
}

#[tokio::test]
async fn unreachable_service_is_reported_per_request() {
    let buffer = SharedBuffer::new();
    let driver = LoadDriver::new(
        HttpTransport::new(Some(std::time::Duration::from_secs(2))).unwrap(),
        EndpointMap::new("http://127.0.0.1:1"),
        Console::new(buffer.clone()),
    );

    let elapsed = driver.run(4, 4).await.unwrap();

    let lines = buffer.lines();
    let results: Vec<_> = lines.iter().filter(|l| l.starts_with('[')).collect();
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|l| l.contains("=> Error: ")));
    assert!(
        results
            .iter()
            .all(|l| l.to_lowercase().contains("connection refused")),
        "{results:?}"
    );
    assert!(lines.last().unwrap().starts_with("Completadas en "));
    assert!(elapsed.as_secs_f64() >= 0.0);
}
