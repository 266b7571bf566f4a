#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Plain HTTP/1.1 server on loopback answering every request with one
/// canned response. Records the request line of each request it sees.
pub struct MockHttpServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockHttpServer {
    pub async fn start(status: u16, body: Vec<u8>) -> Result<Self, std::io::Error> {
        Self::spawn(Some((status, body))).await
    }

    /// Accepts connections and reads requests but never answers.
    pub async fn start_silent() -> Result<Self, std::io::Error> {
        Self::spawn(None).await
    }

    async fn spawn(reply: Option<(u16, Vec<u8>)>) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else {
                            continue;
                        };
                        let seen = Arc::clone(&seen);
                        let reply = reply.clone();
                        tokio::spawn(async move {
                            let head = read_request_head(&mut stream).await;
                            if let Some(line) = head.lines().next() {
                                seen.lock().unwrap().push(line.to_string());
                            }

                            match reply {
                                Some((status, body)) => {
                                    let header = format!(
                                        "HTTP/1.1 {} Mock\r\nContent-Type: application/dns-json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                                        status,
                                        body.len()
                                    );
                                    let _ = stream.write_all(header.as_bytes()).await;
                                    let _ = stream.write_all(&body).await;
                                    let _ = stream.shutdown().await;
                                }
                                None => {
                                    tokio::time::sleep(std::time::Duration::from_secs(30)).await;
                                }
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL for sending requests to this server.
    pub fn url(&self, path_and_query: &str) -> reqwest::Url {
        reqwest::Url::parse(&format!("http://{}{}", self.addr, path_and_query)).unwrap()
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn read_request_head(stream: &mut tokio::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];

    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    String::from_utf8_lossy(&head).into_owned()
}
