//! HttpSource against an in-process stub server.
use sysglance::fetch::{FailureKind, FetchError, HttpSource, SnapshotSource};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PAYLOAD: &str = r#"{
    "cpu": {"percent": 85.0, "per_core": [80.0, 90.0], "logical_cores": 2, "physical_cores": 1},
    "memory": {"percent": 50.0, "human": {"used": "4.0 GB", "total": "8.0 GB"}},
    "disk": {"percent": 50.0, "human": {"used": "50.0 GB", "total": "100.0 GB"}},
    "network": {"upload_bps": 0, "download_bps": 0},
    "gpu": null,
    "processes_top": [{"pid": 1, "name": "init", "cpu_percent": 0.0, "memory_mb": 4.0}],
    "system": {"hostname": "stub", "os": "Linux", "platform": "Linux", "python_version": "3.11",
               "uptime_seconds": 5}
}"#;

// Serves exactly one response and returns the request line it saw
async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let n = sock.read(&mut buf).await.unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(resp.as_bytes()).await.unwrap();
        sock.shutdown().await.ok();
        request.lines().next().unwrap_or_default().to_string()
    });
    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn fetches_and_decodes_snapshot() {
    let (base, server) = serve_once("200 OK", PAYLOAD).await;
    let source = HttpSource::new(&base, None).unwrap();
    let snap = source.fetch().await.expect("snapshot");
    assert_eq!(snap.cpu.percent, 85.0);
    assert_eq!(snap.system.hostname, "stub");
    assert_eq!(snap.system.runtime_version, "3.11");
    assert!(snap.gpu.is_none());
    assert_eq!(server.await.unwrap(), "GET /api/stats HTTP/1.1");
}

#[tokio::test]
async fn non_success_status_is_transport_failure() {
    let (base, server) = serve_once("503 Service Unavailable", "{}").await;
    let source = HttpSource::new(&base, None).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 503), "{err}");
    assert_eq!(err.kind(), FailureKind::Transport);
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let (base, server) = serve_once("200 OK", r#"{"cpu": "lots"}"#).await;
    let source = HttpSource::new(&base, None).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Decode, "{err}");
    server.await.unwrap();
}

#[tokio::test]
async fn refused_connection_is_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let source = HttpSource::new(&format!("http://{addr}"), None).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "{err}");
}

#[test]
fn missing_ca_file_is_reported() {
    let err = HttpSource::new("https://box", Some(std::path::Path::new("/nonexistent/ca.pem")))
        .unwrap_err();
    assert!(err.to_string().contains("reading CA certificate"), "{err}");
}
