#![cfg(test)]
use std::time::Duration;

use asnlookup_common::ClientConfig;
use asnlookup_core::WhoisClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

pub const BANNER: &str = "Bulk mode; whois.cymru.com [2024-01-15 12:00:00 +0000]";

/// How the mock server answers each connection.
#[derive(Clone)]
pub enum Behavior {
    /// Writes a fixed reply after reading the request.
    Reply(Vec<u8>),
    /// Answers every requested address except `skip` with a well-formed record.
    Echo { skip: Vec<String> },
    /// Reads the request, then holds the connection open without answering
    /// until the client goes away.
    Silent,
    /// Reads the request, then closes without writing anything.
    Hangup,
}

impl Behavior {
    pub fn reply(body: impl Into<Vec<u8>>) -> Self {
        Behavior::Reply(body.into())
    }

    pub fn echo() -> Self {
        Behavior::Echo { skip: Vec::new() }
    }

    pub fn echo_except(skip: &[&str]) -> Self {
        Behavior::Echo {
            skip: skip.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A whois server on `127.0.0.1` that accepts connections until dropped.
///
/// Every request it reads, and every client hang-up it sees afterwards,
/// is reported back to the test.
pub struct MockWhois {
    pub port: u16,
    requests: UnboundedReceiver<Vec<u8>>,
    hangups: UnboundedReceiver<()>,
    handle: JoinHandle<()>,
}

impl MockWhois {
    pub async fn spawn(behavior: Behavior) -> Self {
        let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port: u16 = listener.local_addr().unwrap().port();
        let (tx, requests) = mpsc::unbounded_channel();
        let (hangup_tx, hangups) = mpsc::unbounded_channel();

        let handle: JoinHandle<()> = tokio::spawn(async move {
            loop {
                let Ok((conn, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(handle_conn(
                    conn,
                    behavior.clone(),
                    tx.clone(),
                    hangup_tx.clone(),
                ));
            }
        });

        Self {
            port,
            requests,
            hangups,
            handle,
        }
    }

    /// Client aimed at this server.
    pub fn client(&self, timeout: Duration) -> WhoisClient {
        WhoisClient::new(
            ClientConfig::new()
                .with_host("127.0.0.1")
                .with_port(self.port)
                .with_timeout(timeout),
        )
    }

    /// Next request payload the server received, as text.
    pub async fn next_request(&mut self) -> String {
        let raw: Vec<u8> = tokio::time::timeout(Duration::from_secs(5), self.requests.recv())
            .await
            .expect("no request within 5s")
            .expect("server task ended");
        String::from_utf8(raw).unwrap()
    }

    /// Waits until the client has released a connection to this server.
    pub async fn client_hung_up(&mut self) {
        tokio::time::timeout(Duration::from_secs(5), self.hangups.recv())
            .await
            .expect("client kept the connection open for 5s")
            .expect("server task ended");
    }
}

impl Drop for MockWhois {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A port with nothing listening on it.
pub async fn closed_port() -> u16 {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn handle_conn(
    mut conn: TcpStream,
    behavior: Behavior,
    tx: UnboundedSender<Vec<u8>>,
    hangup_tx: UnboundedSender<()>,
) {
    let request: Vec<u8> = read_request(&mut conn).await;
    let _ = tx.send(request.clone());
    let silent: bool = matches!(behavior, Behavior::Silent);

    match behavior {
        Behavior::Reply(body) => {
            let _ = conn.write_all(&body).await;
        }
        Behavior::Echo { skip } => {
            let body: String = echo_body(&request, &skip);
            let _ = conn.write_all(body.as_bytes()).await;
        }
        Behavior::Silent => {}
        Behavior::Hangup => {
            let _ = conn.shutdown().await;
            return;
        }
    }

    if !silent {
        let _ = conn.shutdown().await;
    }

    if wait_for_eof(&mut conn, Duration::from_secs(10)).await {
        let _ = hangup_tx.send(());
    }
}

/// True once the peer closed or reset the connection within `limit`.
async fn wait_for_eof(conn: &mut TcpStream, limit: Duration) -> bool {
    let mut buf: [u8; 1024] = [0u8; 1024];
    let drained = tokio::time::timeout(limit, async {
        loop {
            match conn.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(_) => continue,
            }
        }
    });
    drained.await.is_ok()
}

async fn read_request(conn: &mut TcpStream) -> Vec<u8> {
    let mut request: Vec<u8> = Vec::new();
    let mut buf: [u8; 4096] = [0u8; 4096];
    while !request.ends_with(b"end\n") {
        match conn.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    request
}

fn echo_body(request: &[u8], skip: &[String]) -> String {
    let text = String::from_utf8_lossy(request);
    let mut body: String = format!("{BANNER}\n");

    let addrs = text
        .lines()
        .filter(|l| !matches!(*l, "begin" | "prefix" | "countrycode" | "end"))
        .filter(|l| !skip.iter().any(|s| s == l));

    for (idx, addr) in addrs.enumerate() {
        let asn: usize = 64500 + idx;
        body.push_str(&format!("{asn:<7} | {addr:<16} | 192.0.2.0/24     | ZZ | MOCK-{idx}, ZZ\n"));
    }
    body
}
