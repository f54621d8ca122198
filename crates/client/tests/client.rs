mod common;

use std::collections::HashSet;
use std::time::Duration;

use bytes::Bytes;
use mockito::{Matcher, Server};
use reqwest::StatusCode;

use ipfs_rpc::api::v0::object::ObjectEncoding;
use ipfs_rpc::api::v0::diag::DiagVis;
use ipfs_rpc::api::v0::pin::PinType;
use ipfs_rpc::{ApiError, CancellationToken};

use common::{client_at, client_for, silent_daemon, stalling_daemon, HASH, PEER_A, PEER_B};

fn api_path(endpoint: &str) -> Matcher {
    Matcher::Regex(format!(r"^/api/v0/{}(\?|$)", endpoint))
}

#[tokio::test]
async fn test_commands_hits_root_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/commands")
        .with_status(200)
        .with_body(r#"{"Name":"ipfs","Subcommands":[{"Name":"ls","Subcommands":null,"Options":null}],"Options":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let root = client.commands(&CancellationToken::new()).await.unwrap();

    assert_eq!(root.name, "ipfs");
    assert_eq!(root.subcommands.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ls_sends_path_as_arg() {
    let mut server = Server::new_async().await;
    let body = format!(
        r#"{{"Objects":[{{"Hash":"{}","Links":[{{"Name":"about","Hash":"{}","Size":1688,"Type":2}}]}}]}}"#,
        HASH, PEER_A
    );
    let mock = server
        .mock("GET", api_path("ls"))
        .match_query(Matcher::UrlEncoded("arg".into(), HASH.into()))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let client = client_for(&server);
    let objects = client.ls(HASH, &CancellationToken::new()).await.unwrap();

    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].links[0].link.name, "about");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bitswap_stat_round_trip() {
    let mut server = Server::new_async().await;
    let body = format!(
        r#"{{"ProvideBufLen":0,"Wantlist":["k2","k1"],"Peers":["{}","{}"],"BlocksReceived":4,"DupBlksReceived":1,"DupDataReceived":256}}"#,
        PEER_A, PEER_B
    );
    server
        .mock("GET", "/api/v0/bitswap/stat")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let client = client_for(&server);
    let stat = client
        .bitswap()
        .stat(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(stat.wantlist, vec!["k2", "k1"]);
    let peers: HashSet<&str> = stat.peers.iter().map(|p| p.as_str()).collect();
    assert_eq!(peers, [PEER_A, PEER_B].into_iter().collect());
}

#[tokio::test]
async fn test_wantlist_omits_absent_peer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/bitswap/wantlist")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"Keys":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let body = client
        .bitswap()
        .wantlist(None, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(body, Bytes::from_static(br#"{"Keys":[]}"#));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_dht_query_verbose_flag() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", api_path("dht/query"))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("arg".into(), PEER_A.into()),
            Matcher::UrlEncoded("verbose".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body("{}\n")
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .dht()
        .query(PEER_A, true, &CancellationToken::new())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_name_publish_sends_both_args() {
    let mut server = Server::new_async().await;
    let path = format!("/ipfs/{}", HASH);
    let mock = server
        .mock("GET", api_path("name/publish"))
        .match_query(Matcher::Regex(format!(
            "^arg=self&arg=%2Fipfs%2F{}$",
            HASH
        )))
        .with_status(200)
        .with_body(format!(r#"{{"Name":"{}","Value":"{}"}}"#, PEER_A, path))
        .create_async()
        .await;

    let client = client_for(&server);
    let published = client
        .name()
        .publish(Some("self"), &path, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(published.name, PEER_A);
    assert_eq!(published.value.as_str(), HASH);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_object_put_is_multipart_post() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", api_path("object/put"))
        .match_query(Matcher::UrlEncoded("encoding".into(), "json".into()))
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::Regex(r#"name="file""#.to_string()))
        .with_status(200)
        .with_body(format!(r#"{{"Hash":"{}","Links":[]}}"#, HASH))
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .object()
        .put(
            Bytes::from_static(br#"{"Data":"hello"}"#),
            ObjectEncoding::Json,
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_uploads_named_file() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", api_path("add"))
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file""#.to_string()),
            Matcher::Regex(r#"filename="MyHello""#.to_string()),
            Matcher::Regex("hello world".to_string()),
        ]))
        .with_status(200)
        .with_body(format!(r#"{{"Name":"MyHello","Hash":"{}","Size":"19"}}"#, HASH))
        .create_async()
        .await;

    let client = client_for(&server);
    let hash = client
        .add("MyHello", &b"hello world"[..], &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(hash.as_str(), HASH);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unsupported_encoding_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client
        .object()
        .get(HASH, ObjectEncoding::Xml, &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_repo_gc_empty_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v0/repo/gc")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = client_for(&server);
    let removed = client
        .repo()
        .gc(false, &CancellationToken::new())
        .await
        .unwrap();
    assert!(removed.is_empty());
}

#[tokio::test]
async fn test_stats_bw_flags() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", api_path("stats/bw"))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("proto".into(), "/ipfs/bitswap".into()),
            Matcher::UrlEncoded("interval".into(), "1s".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"TotalIn":10,"TotalOut":20,"RateIn":1.5,"RateOut":2.5}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let bw = client
        .stats()
        .bw(
            None,
            Some("/ipfs/bitswap"),
            false,
            Some("1s"),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(bw.total_in, 10);
    assert_eq!(bw.total_out, 20);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_pin_ls_type_flag() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", api_path("pin/ls"))
        .match_query(Matcher::UrlEncoded("type".into(), "recursive".into()))
        .with_status(200)
        .with_body(format!(r#"{{"Keys":{{"{}":{{"Type":"recursive"}}}}}}"#, HASH))
        .create_async()
        .await;

    let client = client_for(&server);
    let pins = client
        .pin()
        .ls(Some(PinType::Recursive), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0].hash.as_str(), HASH);
    assert_eq!(pins[0].kind, "recursive");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_swarm_peers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", api_path("swarm/peers"))
        .with_status(200)
        .with_body(format!(
            r#"{{"Peers":[{{"Addr":"/ip4/10.0.0.1/tcp/4001","Peer":"{}"}},{{"Addr":"/ip4/10.0.0.2/tcp/4001","Peer":"{}"}}]}}"#,
            PEER_A, PEER_B
        ))
        .create_async()
        .await;

    let client = client_for(&server);
    let peers = client
        .swarm()
        .peers(&CancellationToken::new())
        .await
        .unwrap();

    let ids: Vec<&str> = peers.iter().map(|peer| peer.peer.as_str()).collect();
    assert_eq!(ids, vec![PEER_A, PEER_B]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_diag_net_flags() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/diag/net?timeout=1&vis=d3")
        .with_status(200)
        .with_body(r#"{"nodes":[],"links":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let body = client
        .diag()
        .net(Some("1"), Some(DiagVis::D3), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(&body[..], br#"{"nodes":[],"links":[]}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_carries_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", api_path("object/stat"))
        .with_status(500)
        .with_body(r#"{"Message":"invalid ipfs ref path","Code":0}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .object()
        .stat("nonsense", &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        ApiError::HttpStatus(status, body) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(body.contains("invalid ipfs ref path"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v0/version")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.version(&CancellationToken::new()).await;
    assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_cancelled_before_dispatch_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = client.commands(&cancel).await;
    assert!(matches!(result, Err(ApiError::Cancelled)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_cancelled_while_waiting_for_response() {
    let addr = silent_daemon().await;
    let client = client_at(addr);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(Duration::from_secs(5), client.commands(&cancel))
        .await
        .expect("cancellation did not interrupt the call");
    assert!(matches!(result, Err(ApiError::Cancelled)));
}

#[tokio::test]
async fn test_cancelled_during_multipart_post() {
    let addr = silent_daemon().await;
    let client = client_at(addr);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let object = client.object();
    let put = object.put(
        Bytes::from_static(br#"{"Data":"hello"}"#),
        ObjectEncoding::Json,
        &cancel,
    );
    let result = tokio::time::timeout(Duration::from_secs(5), put)
        .await
        .expect("cancellation did not interrupt the upload");
    assert!(matches!(result, Err(ApiError::Cancelled)));

    let add = client.add("MyHello", &b"hello"[..], &cancel);
    let result = tokio::time::timeout(Duration::from_secs(5), add)
        .await
        .expect("cancelled token did not stop the upload");
    assert!(matches!(result, Err(ApiError::Cancelled)));
}

#[tokio::test]
async fn test_cancelled_while_reading_body() {
    let addr = stalling_daemon(b"partial").await;
    let client = client_at(addr);
    let cancel = CancellationToken::new();

    let mut response = client.cat_stream(HASH, &cancel).await.unwrap();
    let first = response.chunk().await.unwrap();
    assert_eq!(first.as_deref(), Some(&b"partial"[..]));

    cancel.cancel();
    let result = tokio::time::timeout(Duration::from_secs(5), response.chunk())
        .await
        .expect("cancellation did not interrupt the read");
    assert!(matches!(result, Err(ApiError::Cancelled)));
}

#[tokio::test]
async fn test_closed_client_fails_every_group() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let repo = client.repo();
    client.close();

    let cancel = CancellationToken::new();
    assert!(matches!(repo.gc(true, &cancel).await, Err(ApiError::Closed)));
    assert!(matches!(
        client.dht().find_peer(PEER_A, &cancel).await,
        Err(ApiError::Closed)
    ));
    assert!(matches!(client.cat(HASH, &cancel).await, Err(ApiError::Closed)));
    mock.assert_async().await;
}
