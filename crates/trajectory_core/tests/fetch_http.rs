use std::io::Cursor;
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Response, Server, StatusCode};
use trajectory_core::{
    color_for, ChartData, FetchController, FetchError, GroupedBarChart, HttpSource, LineChart,
    PayloadSource, ViewState,
};

const SAMPLE_PAYLOAD: &str = r#"{
    "probabilities": [[0.7, 0.3], [0.4, 0.6]],
    "trainingHistory": [
        {"epoch": 0, "loss": 0.9, "weights": []},
        {"epoch": 1, "loss": 0.5, "weights": []}
    ]
}"#;

/// Serves exactly one request with the given status and body, then exits.
fn serve_once(status: u16, body: &'static str) -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();

    thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let bytes = body.as_bytes().to_vec();
            let len = bytes.len();
            let response = Response::new(
                StatusCode(status),
                vec![Header::from_bytes(b"Content-Type", b"application/json").unwrap()],
                Cursor::new(bytes),
                Some(len),
                None,
            );
            let _ = request.respond(response);
        }
    });

    format!("http://{}/", addr)
}

fn source(url: String) -> HttpSource {
    HttpSource::new(url, Duration::from_secs(5))
}

#[test]
fn test_end_to_end_series_and_colors() {
    let result = source(serve_once(200, SAMPLE_PAYLOAD)).fetch().unwrap();
    let data = ChartData::from_result(&result);

    let loss: Vec<_> = data.loss.iter().map(|p| (p.epoch, p.loss)).collect();
    assert_eq!(loss, vec![(0, 0.9), (1, 0.5)]);

    let rows: Vec<_> = data
        .probabilities
        .rows
        .iter()
        .map(|row| (row.epoch, row.fields().collect::<Vec<_>>()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, vec![("Class 0".to_string(), 0.7), ("Class 1".to_string(), 0.3)]),
            (2, vec![("Class 0".to_string(), 0.4), ("Class 1".to_string(), 0.6)]),
        ]
    );

    let bars = GroupedBarChart::probabilities(&data.probabilities);
    assert_eq!(bars.series.len(), 2);
    assert_eq!(bars.series[0].color, color_for(0));
    assert_eq!(bars.series[1].color, color_for(1));
    assert_eq!(bars.series[0].color.to_string(), "#FF0000");

    let line = LineChart::loss(&data.loss);
    assert_eq!(line.series[0].points, vec![[0.0, 0.9], [1.0, 0.5]]);
}

#[test]
fn test_server_error_is_status_failure() {
    let err = source(serve_once(500, "{}")).fetch().unwrap_err();
    assert!(matches!(err, FetchError::Status(500)));
}

#[test]
fn test_malformed_body_is_payload_failure() {
    let err = source(serve_once(200, r#"{"probabilities": "nope"}"#))
        .fetch()
        .unwrap_err();
    assert!(matches!(err, FetchError::Payload(_)));
}

#[test]
fn test_unreachable_backend_is_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(format!("http://{}/", addr)).fetch().unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_http_500_leaves_view_empty() {
    let controller = FetchController::activate(
        &tokio::runtime::Handle::current(),
        source(serve_once(500, "Internal Server Error")),
        || {},
    );
    let state = controller.settled().await;
    assert!(matches!(state, ViewState::Empty));
    assert!(state.result().is_none());
}

#[tokio::test]
async fn test_zero_epoch_payload_loads() {
    let controller = FetchController::activate(
        &tokio::runtime::Handle::current(),
        source(serve_once(200, r#"{"probabilities": [], "trainingHistory": []}"#)),
        || {},
    );
    let state = controller.settled().await;
    let result = state.result().expect("empty payload should load");
    let data = ChartData::from_result(result);
    assert!(data.loss.is_empty());
    assert!(GroupedBarChart::probabilities(&data.probabilities)
        .series
        .is_empty());
}
