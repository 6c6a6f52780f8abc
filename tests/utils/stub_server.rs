/// Minimal HTTP/1.1 upstream stub for exercising the real adapters
///
/// Serves canned JSON bodies keyed by request target and records every
/// target it was asked for. Unknown targets answer 404.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Clone, Default)]
struct Routes {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct StubServer {
    base_url: String,
    routes: Routes,
}

impl StubServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        let routes = Routes::default();

        let accept_routes = routes.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = accept_routes.clone();
                tokio::spawn(async move {
                    let _ = handle(stream, routes).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            routes,
        }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Answer `target` (path plus optional query) with a 200 JSON body
    pub fn json(&self, target: &str, body: impl Into<String>) -> &Self {
        self.respond(target, 200, body)
    }

    pub fn respond(&self, target: &str, status: u16, body: impl Into<String>) -> &Self {
        self.routes
            .responses
            .lock()
            .unwrap()
            .insert(target.to_string(), (status, body.into()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.routes.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.routes.requests.lock().unwrap().len()
    }

    pub fn was_requested(&self, target: &str) -> bool {
        self.requests().iter().any(|r| r == target)
    }
}

async fn handle(mut stream: TcpStream, routes: Routes) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        buffer.extend_from_slice(&chunk[..read]);
    }

    let head = String::from_utf8_lossy(&buffer);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    routes.requests.lock().unwrap().push(target.clone());

    let (status, body) = {
        let responses = routes.responses.lock().unwrap();
        let path = target.split('?').next().unwrap_or("/");
        responses
            .get(&target)
            .or_else(|| responses.get(path))
            .cloned()
            .unwrap_or((404, r#"{"message":"Not Found"}"#.to_string()))
    };

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
