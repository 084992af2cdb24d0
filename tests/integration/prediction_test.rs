//! Prediction client and feed against a canned HTTP server

use parlay_desk::catalog::{Position, StatKey};
use parlay_desk::prediction::{
    HttpPredictionClient, PredictionClientConfig, PredictionError, PredictionFeed,
    PredictionSource, Selection,
};
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Serves `body` with `status` to every connection, forwarding each request line
async fn serve(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel(8);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(line).await;

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}/api"), rx)
}

fn client(base_url: String) -> HttpPredictionClient {
    HttpPredictionClient::with_config(PredictionClientConfig {
        base_url,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn selection(stat: StatKey, position: Position) -> Selection {
    Selection {
        player_id: 4035,
        position,
        stat,
        opponent: "SF".to_string(),
    }
}

const YARDAGE: &str = r#"{"success": true, "prediction": {"player_id": 4035, "stat_type": "receiving_yards", "projected_value": 71.2, "probabilities": {"50": 72.5, "75": 48.0, "100": 21.0}}}"#;

const TOUCHDOWN: &str = r#"{"success": true, "prediction": {"player_id": 4035, "avg_tds_per_game": 0.6, "td_probabilities": {"1": 45.0, "2": 12.5}}}"#;

#[tokio::test]
async fn test_yardage_table() {
    let (base, mut requests) = serve("200 OK", YARDAGE).await;
    let table = client(base)
        .fetch_table(&selection(StatKey::ReceivingYards, Position::WR))
        .await
        .unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.first(), Some((dec!(50), dec!(72.5))));

    let line = requests.recv().await.unwrap();
    assert!(line.starts_with("GET /api/predictions/yardage/4035?"));
    assert!(line.contains("opponent=SF"));
    assert!(line.contains("stat_type=receiving_yards"));
}

#[tokio::test]
async fn test_touchdown_table_keyed_by_count() {
    let (base, mut requests) = serve("200 OK", TOUCHDOWN).await;
    let table = client(base)
        .fetch_table(&selection(StatKey::RushingTds, Position::RB))
        .await
        .unwrap();

    assert_eq!(table.first(), Some((dec!(1), dec!(45))));
    assert_eq!(table.last(), Some((dec!(2), dec!(12.5))));

    let line = requests.recv().await.unwrap();
    assert!(line.starts_with("GET /api/predictions/touchdown/4035?"));
    assert!(line.contains("position=RB"));
}

#[tokio::test]
async fn test_receptions_use_receiving_yards_table() {
    let (base, mut requests) = serve("200 OK", YARDAGE).await;
    client(base)
        .fetch_table(&selection(StatKey::Receptions, Position::TE))
        .await
        .unwrap();

    let line = requests.recv().await.unwrap();
    assert!(line.contains("stat_type=receiving_yards"));
}

#[tokio::test]
async fn test_service_error_is_unavailable() {
    let (base, _requests) =
        serve("404 Not Found", r#"{"success": false, "error": "Player not found"}"#).await;
    let result = client(base)
        .fetch(&selection(StatKey::PassingYards, Position::QB))
        .await;

    match result {
        Err(PredictionError::Unavailable(message)) => assert!(message.contains("Player not found")),
        other => panic!("expected unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_table_is_unavailable() {
    let (base, _requests) =
        serve("200 OK", r#"{"success": true, "prediction": {"probabilities": {}}}"#).await;
    let result = client(base)
        .fetch_table(&selection(StatKey::RushingYards, Position::RB))
        .await;
    assert!(matches!(result, Err(PredictionError::Unavailable(_))));
}

#[tokio::test]
async fn test_feed_delivers_latest_selection() {
    let (base, _requests) = serve("200 OK", YARDAGE).await;
    let (mut feed, mut rx) =
        PredictionFeed::new(Arc::new(client(base)), Duration::from_secs(5));

    feed.select(selection(StatKey::ReceivingYards, Position::WR));
    let latest = feed.select(selection(StatKey::Receptions, Position::WR));

    let resolved = loop {
        let resolved = rx.recv().await.unwrap();
        if let Some(resolved) = feed.accept(resolved) {
            break resolved;
        }
    };
    assert_eq!(resolved.generation, latest);
    assert_eq!(resolved.selection.stat, StatKey::Receptions);
    assert!(resolved.outcome.is_ok());
}

#[tokio::test]
async fn test_unreachable_service() {
    // Nothing listens on a freshly released port
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(format!("http://{addr}/api"))
        .fetch(&selection(StatKey::PassingYards, Position::QB))
        .await;
    assert!(matches!(result, Err(PredictionError::Http(_)) | Err(PredictionError::Timeout(_))));
}
