#![allow(dead_code)]

use std::net::SocketAddr;

use ipfs_rpc::{Config, IpfsClient};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use url::Url;

pub const HASH: &str = "QmXarR6rgkQ2fDSHjSY5nM2kuCXKYGViky5nohtwgF65Ec";
pub const PEER_A: &str = "QmZTR5bcpQD7cFgTorqxZDYaew1Wqgfbd2ud9QqGPAkK2V";
pub const PEER_B: &str = "QmYCvbfNbCwFR45HiNP45rwJgvatpiW38D961L5qAhUM5Y";

/// Client pointed at a mock server.
pub fn client_for(server: &mockito::ServerGuard) -> IpfsClient {
    let remote = Url::parse(&server.url()).unwrap();
    IpfsClient::new(&Config::new(remote)).unwrap()
}

/// A listener that accepts connections and never answers them.
pub async fn silent_daemon() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    addr
}

/// A listener that sends response headers and the first part of a
/// body, then stalls with the connection open.
pub async fn stalling_daemon(first_chunk: &'static [u8]) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((mut socket, _)) = listener.accept().await {
            let head = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/octet-stream\r\ncontent-length: {}\r\n\r\n",
                first_chunk.len() * 4
            );
            if socket.write_all(head.as_bytes()).await.is_err() {
                continue;
            }
            let _ = socket.write_all(first_chunk).await;
            let _ = socket.flush().await;
            held.push(socket);
        }
    });
    addr
}

pub fn client_at(addr: SocketAddr) -> IpfsClient {
    let remote = Url::parse(&format!("http://{}", addr)).unwrap();
    IpfsClient::new(&Config::new(remote)).unwrap()
}
