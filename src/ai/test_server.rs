//! One-request-per-connection HTTP server with canned replies, for driving the
//! inference client over a real socket.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::core::config::AppConfig;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

pub struct CannedServer {
    base_url: String,
    handle: JoinHandle<Vec<CapturedRequest>>,
}

impl CannedServer {
    /// Serves `replies` in order, one connection each, then stops.
    pub fn start(replies: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

        let handle = thread::spawn(move || {
            let mut captured = Vec::with_capacity(replies.len());
            for (status, body) in replies {
                let (mut stream, _) = listener.accept().expect("accept connection");
                captured.push(read_request(&stream));
                let reply = format!(
                    "HTTP/1.1 {status} Canned\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(reply.as_bytes()).expect("write reply");
            }
            captured
        });

        Self { base_url, handle }
    }

    /// Points both the hub and inference endpoints at this server.
    pub fn config(&self, token: Option<&str>) -> AppConfig {
        AppConfig {
            hf_api_token: token.map(str::to_string),
            inference_url: self.base_url.clone(),
            hub_url: self.base_url.clone(),
            request_timeout: Some(Duration::from_secs(5)),
            ..AppConfig::default()
        }
    }

    /// Waits for every reply to go out and returns what was received.
    pub fn finish(self) -> Vec<CapturedRequest> {
        self.handle.join().expect("server thread panicked")
    }
}

fn read_request(stream: &TcpStream) -> CapturedRequest {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("read request line");

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("read header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).expect("read request body");

    CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}
