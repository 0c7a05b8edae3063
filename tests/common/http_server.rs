//! Minimal HTTP/1.1 server for image download tests.
//!
//! Answers every request with the same canned reply and keeps the raw
//! request heads so tests can inspect what the client sent.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with the full body
    Body(Vec<u8>),
    /// Given status with a short text body
    Status(u16),
    /// 200 announcing `declared` bytes but closing after `body`
    Truncated { declared: usize, body: Vec<u8> },
}

pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start serving `reply` on an ephemeral port. Runs until the runtime stops.
pub async fn start(reply: Reply) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let seen = Arc::clone(&requests);
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let seen = Arc::clone(&seen);
            let reply = reply.clone();
            tokio::spawn(async move { handle(stream, reply, seen).await });
        }
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

async fn handle(mut stream: TcpStream, reply: Reply, seen: Arc<Mutex<Vec<String>>>) {
    let mut head = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    seen.lock()
        .unwrap()
        .push(String::from_utf8_lossy(&head).into_owned());

    let (status_line, declared, body) = match reply {
        Reply::Body(body) => ("200 OK".to_string(), body.len(), body),
        Reply::Status(code) => {
            let body = b"nope".to_vec();
            (format!("{} Error", code), body.len(), body)
        }
        Reply::Truncated { declared, body } => ("200 OK".to_string(), declared, body),
    };

    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line, declared
    );
    let _ = stream.write_all(header.as_bytes()).await;
    let _ = stream.write_all(&body).await;
    let _ = stream.shutdown().await;
}
