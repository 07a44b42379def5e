//! Shared test fixtures: sample payloads, temp dirs, and a canned HTTP server.

use serde_json::json;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("linkboard-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn sample_link(url_id: i64, title: &str, clicks: i64, times_ago: &str) -> serde_json::Value {
    json!({
        "url_id": url_id,
        "web_link": format!("https://short.example/{url_id}"),
        "smart_link": format!("short.example/s{url_id}"),
        "title": title,
        "times_ago": times_ago,
        "created_at": "2024-01-02T10:00:00.000Z",
        "total_clicks": clicks,
        "original_image": "https://cdn.example/original.png",
        "thumbnail": "https://cdn.example/thumb.png",
        "times": "10:00",
        "url_prefix": "https://",
        "url_suffix": format!("s{url_id}"),
        "app": "instagram"
    })
}

/// A complete, valid dashboard payload.
pub fn sample_dashboard_value() -> serde_json::Value {
    json!({
        "status": true,
        "statusCode": 200,
        "message": "success",
        "support_whatsapp_number": null,
        "extra_income": 12.5,
        "total_links": 42,
        "total_clicks": 1337,
        "today_clicks": 5,
        "top_source": "Instagram",
        "top_location": "Mumbai",
        "startTime": "09:00",
        "links_created_today": 2,
        "applied_campaign": 0,
        "data": {
            "recent_links": [sample_link(3, "New arrivals", 1, "2 hours ago")],
            "top_links": [
                sample_link(1, "Spring sale", 120, "3 days ago"),
                sample_link(2, "Newsletter", 45, "1 week ago")
            ],
            "overall_url_chart": {
                "2024-01-01": 3,
                "2024-01-02": 7,
                "2024-01-03": 12
            },
            "today_clicks": 5
        }
    })
}

pub fn sample_dashboard_json() -> String {
    sample_dashboard_value().to_string()
}

/// One canned reply served by [`spawn_http_fixture`].
#[derive(Debug, Clone)]
pub struct FixtureReply {
    pub status_line: &'static str,
    pub body: String,
}

impl FixtureReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_line: "200 OK",
            body: body.into(),
        }
    }

    pub fn status(status_line: &'static str, body: impl Into<String>) -> Self {
        Self {
            status_line,
            body: body.into(),
        }
    }
}

/// Serve `replies` in order, one per connection, on an ephemeral port.
///
/// The join handle resolves to the raw request heads received, so tests can
/// assert on method and headers.
pub async fn spawn_http_fixture(replies: Vec<FixtureReply>) -> (SocketAddr, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        let mut heads = Vec::new();
        for reply in replies {
            let (mut stream, _) = listener.accept().await.expect("accept");
            heads.push(read_request_head(&mut stream).await);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.status_line,
                reply.body.len(),
                reply.body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
        heads
    });
    (addr, handle)
}

/// An address nothing is listening on.
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}

async fn read_request_head(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Collects formatted `tracing` output for the current thread.
///
/// Events are captured while the guard returned by [`LogCapture::install`] is
/// alive. `#[tokio::test]` runs on a current-thread runtime, so spawned tasks
/// are captured too.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let capture = Self::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        (capture, tracing::subscriber::set_default(subscriber))
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Lines this crate logged at WARN.
    pub fn warnings(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(" WARN linkboard"))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
