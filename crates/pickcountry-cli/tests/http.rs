//! Drives a real listener over TCP.

use pickcountry_cli::server::PickServer;
use pickcountry_core::{Config, Directory, Session, Snapshot};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const WORKERS: usize = 2;

fn request(addr: SocketAddr, method: &str, path: &str, body: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    write!(
        stream,
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .unwrap();

    let mut raw = String::new();
    stream.read_to_string(&mut raw).unwrap();
    let status = raw
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap();
    let body = raw
        .split_once("\r\n\r\n")
        .map(|(_, b)| b.to_string())
        .unwrap_or_default();
    (status, body)
}

#[test]
fn picks_a_country_over_http() {
    let directory = Directory::load_default().unwrap();
    let session = Arc::new(Session::new(Arc::new(directory), Config::default()));
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");

    let server = PickServer::bind("127.0.0.1:0".parse().unwrap(), session, static_dir).unwrap();
    let addr = server.local_addr().unwrap();
    let shutdown = server.shutdown_handle();
    let running = thread::spawn(move || server.run(WORKERS));

    let (status, body) = request(addr, "GET", "/api/state", "");
    assert_eq!(status, 200);
    let snap: Snapshot = serde_json::from_str(&body).unwrap();
    assert_eq!(snap.list.len(), 26);

    for key in ["c", "a", "n"] {
        let (status, _) = request(addr, "POST", "/api/input", &format!(r#"{{"key":"{key}"}}"#));
        assert_eq!(status, 200);
    }
    let (_, body) = request(addr, "POST", "/api/input", r#"{"key":"Enter","code":"Enter"}"#);
    let snap: Snapshot = serde_json::from_str(&body).unwrap();
    assert!(snap.is_final);
    assert_eq!(snap.filter, "Canada");
    assert_eq!(snap.selected_code.map(|c| c.to_string()).as_deref(), Some("CA"));

    let (status, body) = request(addr, "GET", "/", "");
    assert_eq!(status, 200);
    assert!(body.contains("/api/input"));

    let (status, _) = request(addr, "POST", "/api/input", "garbage");
    assert_eq!(status, 400);

    shutdown.shutdown(WORKERS);
    running.join().unwrap().unwrap();
}
