//! Integration tests for the NDJSON TCP service loop.
//!
//! Each test binds port 0, runs the accept loop in a background task, and
//! talks to it over real sockets.

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use metrograph::server;
use metrograph::service::Service;
use metrograph::ui::Verbosity;

/// A running server plus a handle to stop it.
struct TestServer {
    addr: std::net::SocketAddr,
    task: JoinHandle<()>,
}

impl TestServer {
    async fn start(service: Service) -> Self {
        let listener = server::bind("127.0.0.1:0".parse().expect("valid addr"))
            .await
            .expect("bind failed");
        let addr = listener.local_addr().expect("local addr");
        let task = tokio::spawn(async move {
            let _ = server::serve(service, listener, Verbosity::Quiet).await;
        });
        Self { addr, task }
    }

    async fn connect(&self) -> Client {
        let stream = TcpStream::connect(self.addr).await.expect("connect failed");
        let (reader, writer) = stream.into_split();
        Client {
            reader: BufReader::new(reader),
            writer,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

struct Client {
    reader: BufReader<tokio::net::tcp::OwnedReadHalf>,
    writer: tokio::net::tcp::OwnedWriteHalf,
}

impl Client {
    /// Send one request line and read back one envelope.
    async fn round_trip(&mut self, request: &str) -> Value {
        self.writer
            .write_all(format!("{request}\n").as_bytes())
            .await
            .expect("write failed");
        let mut line = String::new();
        self.reader.read_line(&mut line).await.expect("read failed");
        serde_json::from_str(&line).expect("envelope is valid JSON")
    }
}

#[tokio::test]
async fn round_trips_mutations_and_queries() {
    let server = TestServer::start(Service::new(16)).await;
    let mut client = server.connect().await;

    let added = client
        .round_trip(r#"{"op":"add_station","id":1,"name":"Central"}"#)
        .await;
    assert_eq!(added, json!({"success": true, "replaced": null}));

    client
        .round_trip(r#"{"op":"add_station","id":2,"name":"North"}"#)
        .await;
    client
        .round_trip(r#"{"op":"add_route","source":1,"dest":2,"weight":5}"#)
        .await;

    let path = client
        .round_trip(r#"{"op":"shortest_path","start":1,"end":2}"#)
        .await;
    assert_eq!(
        path,
        json!({"success": true, "reachable": true, "path": [1, 2], "distance": 5})
    );
}

#[tokio::test]
async fn malformed_line_keeps_connection_usable() {
    let server = TestServer::start(Service::new(16)).await;
    let mut client = server.connect().await;

    let bad = client.round_trip("this is not json").await;
    assert_eq!(bad["success"], json!(false));
    assert_eq!(bad["error"]["code"], json!("bad_request"));

    let good = client.round_trip(r#"{"op":"status"}"#).await;
    assert_eq!(good["success"], json!(true));
    assert_eq!(good["stations"], json!(0));
}

#[tokio::test]
async fn connections_share_one_network() {
    let server = TestServer::start(Service::new(16)).await;

    let mut writer = server.connect().await;
    writer
        .round_trip(r#"{"op":"add_station","id":7,"name":"Shared"}"#)
        .await;

    let mut reader = server.connect().await;
    let stations = reader.round_trip(r#"{"op":"list_stations"}"#).await;
    assert_eq!(
        stations,
        json!({"success": true, "stations": [{"id": 7, "name": "Shared"}]})
    );
}

#[tokio::test]
async fn concurrent_clients_settle_consistently() {
    let server = TestServer::start(Service::new(64)).await;

    // Two clients racing disjoint station ids; all writes must land.
    let mut handles = Vec::new();
    for base in [0u64, 100] {
        let mut client = server.connect().await;
        handles.push(tokio::spawn(async move {
            for n in 0..10 {
                let id = base + n;
                let envelope = client
                    .round_trip(&format!(
                        r#"{{"op":"add_station","id":{id},"name":"S{id}"}}"#
                    ))
                    .await;
                assert_eq!(envelope["success"], json!(true));
            }
        }));
    }
    for handle in handles {
        handle.await.expect("client task failed");
    }

    let mut client = server.connect().await;
    let status = client.round_trip(r#"{"op":"status"}"#).await;
    assert_eq!(status["stations"], json!(20));
}
