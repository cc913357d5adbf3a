//! HTTP transport for the picker session.
//!
//! Routes:
//! - `GET /api/state` - current snapshot
//! - `POST /api/input` - `{"key": "...", "code": "..."}`, returns the new snapshot
//! - `GET /` - the static client (`<static-dir>/index.html`)

use anyhow::{anyhow, Context};
use pickcountry_core::{Key, Session, Snapshot};
use serde::Deserialize;
use std::io::Read;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{debug, info, warn};

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

/// Largest request body read; input events are a few dozen bytes.
pub const MAX_BODY: u64 = 4 * 1024;

/// Body of `POST /api/input`: a DOM `KeyboardEvent`'s `key` and `code`.
#[derive(Debug, Deserialize)]
pub struct InputRequest {
    pub key: String,
    #[serde(default)]
    pub code: String,
}

/// A response, independent of the HTTP library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Vec<u8>,
}

impl Reply {
    fn new(status: u16, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type", content_type)],
            body: body.into(),
        }
    }

    fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    fn cors(self) -> Self {
        self.with_header("Access-Control-Allow-Origin", "*")
    }

    fn snapshot(snapshot: &Snapshot) -> Self {
        match serde_json::to_vec(snapshot) {
            Ok(body) => Self::new(200, JSON, body),
            Err(e) => Self::new(500, TEXT, e.to_string()),
        }
    }

    fn not_found() -> Self {
        Self::new(404, TEXT, "404 page not found\n")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

/// Maps one request onto the session. No I/O besides reading the static
/// client from `static_dir`.
pub fn route(
    session: &Session,
    static_dir: &Path,
    method: &Method,
    path: &str,
    body: &[u8],
) -> Reply {
    let path = path.split('?').next().unwrap_or_default();
    match path {
        "/api/state" => state_handler(session, method),
        "/api/input" => input_handler(session, method, body),
        "/" => index_handler(static_dir),
        _ => Reply::not_found(),
    }
}

fn state_handler(session: &Session, method: &Method) -> Reply {
    if *method == Method::Options {
        return Reply::new(200, JSON, Vec::new()).cors();
    }
    Reply::snapshot(&session.snapshot()).cors()
}

fn input_handler(session: &Session, method: &Method, body: &[u8]) -> Reply {
    let reply = match method {
        Method::Options => Reply::new(200, JSON, Vec::new()),
        Method::Post => match serde_json::from_slice::<InputRequest>(body) {
            Ok(req) => {
                let key = Key::from_browser(&req.key, &req.code);
                debug!(key = %req.key, code = %req.code, parsed = ?key, "input");
                Reply::snapshot(&session.submit(key))
            }
            Err(e) => {
                warn!(error = %e, "rejecting malformed input request");
                Reply::new(400, TEXT, format!("{e}\n"))
            }
        },
        _ => Reply::new(405, TEXT, "Method not allowed\n"),
    };
    reply
        .cors()
        .with_header("Access-Control-Allow-Methods", "POST, OPTIONS")
}

fn index_handler(static_dir: &Path) -> Reply {
    let path = static_dir.join("index.html");
    match std::fs::read(&path) {
        Ok(body) => Reply::new(200, HTML, body),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "static client not found");
            Reply::not_found()
        }
    }
}

/// Bound listener plus the shared session.
pub struct PickServer {
    server: Arc<Server>,
    session: Arc<Session>,
    static_dir: PathBuf,
}

impl PickServer {
    pub fn bind(addr: SocketAddr, session: Arc<Session>, static_dir: PathBuf) -> anyhow::Result<Self> {
        let server = Server::http(addr)
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("failed to bind {addr}"))?;
        Ok(Self {
            server: Arc::new(server),
            session,
            static_dir,
        })
    }

    /// Actual bound address (useful with port 0).
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serves requests on `workers` threads until the listener shuts down.
    pub fn run(self, workers: usize) -> anyhow::Result<()> {
        if let Some(addr) = self.local_addr() {
            info!("Server listening on http://localhost:{}", addr.port());
        }

        let handles: Vec<_> = (0..workers.max(1))
            .map(|id| {
                let server = Arc::clone(&self.server);
                let session = Arc::clone(&self.session);
                let static_dir = self.static_dir.clone();
                thread::Builder::new()
                    .name(format!("http-worker-{id}"))
                    .spawn(move || worker(&server, &session, &static_dir))
            })
            .collect::<std::io::Result<_>>()
            .context("failed to spawn worker threads")?;

        for handle in handles {
            if handle.join().is_err() {
                warn!("worker thread panicked");
            }
        }
        Ok(())
    }

    /// Unblocks the workers so [`PickServer::run`] returns.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            server: Arc::clone(&self.server),
        }
    }
}

/// Handle for stopping a running [`PickServer`].
#[derive(Clone)]
pub struct ShutdownHandle {
    server: Arc<Server>,
}

impl ShutdownHandle {
    /// Wakes every blocked worker; each then exits.
    pub fn shutdown(&self, workers: usize) {
        for _ in 0..workers.max(1) {
            self.server.unblock();
        }
    }
}

fn worker(server: &Server, session: &Session, static_dir: &Path) {
    while let Ok(mut request) = server.recv() {
        let reply = match read_body(request.as_reader()) {
            Ok(body) => route(session, static_dir, request.method(), request.url(), &body),
            Err(reply) => reply,
        };
        respond(request, reply);
    }
}

/// Reads at most [`MAX_BODY`] bytes. Anything longer, or a failed read,
/// becomes the reply to send instead.
fn read_body(reader: impl Read) -> Result<Vec<u8>, Reply> {
    let mut body = Vec::new();
    if let Err(e) = reader.take(MAX_BODY + 1).read_to_end(&mut body) {
        warn!(error = %e, "failed to read request body");
        return Err(Reply::new(400, TEXT, "failed to read request body\n").cors());
    }
    if body.len() as u64 > MAX_BODY {
        warn!(limit = MAX_BODY, "request body too large");
        return Err(Reply::new(413, TEXT, "request body too large\n").cors());
    }
    Ok(body)
}

fn respond(request: Request, reply: Reply) {
    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    for (name, value) in reply.headers {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response = response.with_header(header);
        }
    }
    if let Err(e) = request.respond(response) {
        debug!(error = %e, "client went away");
    }
}
