//! Minimal HTTP/1.1 server with scripted failures for integration tests.
//!
//! Serves a single static body. Behavior per request is scripted so tests can
//! simulate servers that error a few times before recovering, always error,
//! stall past the client timeout, or hang up without responding.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// First `failures` requests get `status`, later ones 200 with the body.
    FailThenSucceed { failures: usize, status: u16 },
    /// Every request gets `status`.
    AlwaysStatus(u16),
    /// Read the request, then never respond (client should hit its
    /// per-attempt timeout).
    Stall,
    /// Close the connection without writing a response.
    Hangup,
}

/// Server handle: base URL plus the request counter.
pub struct FlakyServer {
    pub url: String,
    requests: Arc<AtomicUsize>,
}

impl FlakyServer {
    /// Requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body` with the given
/// behavior. The server runs until the process exits.
pub fn start(behavior: Behavior, body: &[u8]) -> FlakyServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_vec());
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let n = counter.fetch_add(1, Ordering::SeqCst);
            thread::spawn(move || handle(stream, &body, behavior, n));
        }
    });
    FlakyServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, body: &[u8], behavior: Behavior, request_index: usize) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    // Read the request head; content is irrelevant, every path is served the
    // same way.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    match behavior {
        Behavior::FailThenSucceed { failures, status } => {
            if request_index < failures {
                write_status(&mut stream, status);
            } else {
                write_ok(&mut stream, body);
            }
        }
        Behavior::AlwaysStatus(status) => write_status(&mut stream, status),
        Behavior::Stall => {
            // Hold the socket open well past any per-attempt timeout a test
            // would configure.
            thread::sleep(Duration::from_secs(10));
        }
        Behavior::Hangup => {}
    }
}

fn write_ok(stream: &mut TcpStream, body: &[u8]) {
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}

fn write_status(stream: &mut TcpStream, status: u16) {
    let diag = format!("scripted error {status}");
    let response = format!(
        "HTTP/1.1 {status} Error\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{diag}",
        diag.len()
    );
    let _ = stream.write_all(response.as_bytes());
}
