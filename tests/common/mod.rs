//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// What a mock server received on one connection.
#[derive(Debug, Clone)]
pub struct Captured {
    /// Request line and headers, without the blank line.
    pub head: String,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl Captured {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    /// First value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }
}

/// Start a server on an ephemeral port that records every request and
/// answers each with the fixed raw `response`.
///
/// Serves plain HTTP origin servers and HTTP proxies alike: a proxy sees
/// absolute-form request lines, which are recorded as they arrive.
pub async fn start_recording_server(
    response: &'static str,
) -> (SocketAddr, mpsc::UnboundedReceiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        if let Some(captured) = read_request(&mut socket).await {
                            let _ = tx.send(captured);
                        }
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, rx)
}

/// An address nothing listens on.
#[allow(dead_code)]
pub fn closed_port() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

async fn read_request(socket: &mut TcpStream) -> Option<Captured> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let mut captured = Captured {
        head,
        body: buf[head_end + 4..].to_vec(),
    };

    let expected = captured
        .header("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    while captured.body.len() < expected {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        captured.body.extend_from_slice(&chunk[..n]);
    }

    Some(captured)
}
