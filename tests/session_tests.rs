mod support;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use aave_toolkit::adapter::outbound::toolkit::ToolkitSession;
use aave_toolkit::app::Toolkit;
use aave_toolkit::domain::TokenRegistry;
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::Message;

use support::transaction::{RecordingTransactionApi, StalledTransactionApi};

#[derive(Debug, Default)]
struct Seen {
    authorization: Option<String>,
    query: Option<String>,
}

async fn next_json<S>(ws: &mut S) -> Value
where
    S: futures_util::Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    loop {
        match ws.next().await.expect("frame").expect("ws ok") {
            Message::Text(text) => return serde_json::from_str(&text).expect("json frame"),
            _ => continue,
        }
    }
}

#[tokio::test]
async fn session_registers_and_answers_invocations() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let seen = Arc::new(Mutex::new(Seen::default()));

    let server_seen = Arc::clone(&seen);
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let callback = |request: &Request, response: Response| -> Result<Response, ErrorResponse> {
            let mut seen = server_seen.lock().expect("lock seen");
            seen.authorization = request
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            seen.query = request.uri().query().map(str::to_string);
            Ok(response)
        };
        let mut ws = tokio_tungstenite::accept_hdr_async(stream, callback)
            .await
            .expect("handshake");

        let register = next_json(&mut ws).await;

        let invoke = json!({
            "type": "action",
            "data": {
                "action": "supply",
                "actionID": 77,
                "agentID": 5,
                "payload": "{\"tokenSymbol\":\"usdc\",\"amount\":100}",
            },
        });
        ws.send(Message::Text(invoke.to_string())).await.expect("send action");
        ws.send(Message::Text(r#"{"type":"heartbeat"}"#.into()))
            .await
            .expect("send heartbeat");
        let unknown = json!({
            "type": "action",
            "data": {"action": "stake", "actionID": 78, "agentID": 5, "payload": {}},
        });
        ws.send(Message::Text(unknown.to_string())).await.expect("send unknown");

        let first = next_json(&mut ws).await;
        let second = next_json(&mut ws).await;

        ws.close(None).await.expect("close");
        while ws.next().await.is_some() {}

        (register, first, second)
    });

    let api = RecordingTransactionApi::responding(json!({"txHash": "0xabc"}));
    let toolkit = Arc::new(Toolkit::lending(
        Arc::new(TokenRegistry::sepolia()),
        Arc::new(api.clone()),
        "Aave",
    ));
    let session = ToolkitSession::new(format!("ws://{addr}/ws"), "test-key", toolkit);

    tokio::time::timeout(Duration::from_secs(10), session.run())
        .await
        .expect("session finished in time")
        .expect("session ended cleanly");

    let (register, first, second) = server.await.expect("server task");

    let seen = seen.lock().expect("lock seen");
    assert_eq!(seen.authorization.as_deref(), Some("test-key"));
    assert_eq!(seen.query.as_deref(), Some("type=toolkit"));

    assert_eq!(register["type"], "registerActions");
    let actions = register["data"]["actions"].as_object().expect("actions");
    assert_eq!(actions.len(), 4);
    assert!(actions.contains_key("withdraw"));

    // Invocations run concurrently, so results may arrive in either order.
    let mut results = [first, second];
    results.sort_by_key(|frame| frame["data"]["actionID"].as_u64());
    let [supply, stake] = results;

    assert_eq!(supply["type"], "actionResult");
    assert_eq!(
        supply["data"],
        json!({"action": "supply", "actionID": 77, "agentID": 5, "payload": {"txHash": "0xabc"}})
    );
    assert_eq!(stake["data"]["payload"], json!({"error": "Unknown action: stake"}));

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].ctx.action_id, 77);
    assert_eq!(
        calls[0].payload,
        json!({
            "transactionType": "supply",
            "amount": 100,
            "tokenAddress": "0x94a9D9AC8a22534E3FaCa9F4e7F2E2cf85d5E4C8",
        })
    );
}

fn lending_toolkit(api: Arc<dyn aave_toolkit::port::TransactionApi>) -> Arc<Toolkit> {
    Arc::new(Toolkit::lending(Arc::new(TokenRegistry::sepolia()), api, "Aave"))
}

#[tokio::test]
async fn session_answers_host_pings() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(stream).await.expect("handshake");

        next_json(&mut ws).await;
        ws.send(Message::Ping(b"heartbeat".to_vec())).await.expect("send ping");

        let pong = loop {
            match ws.next().await.expect("frame").expect("ws ok") {
                Message::Pong(data) => break data,
                _ => continue,
            }
        };

        ws.close(None).await.expect("close");
        while ws.next().await.is_some() {}
        pong
    });

    let toolkit = lending_toolkit(Arc::new(RecordingTransactionApi::new()));
    let session = ToolkitSession::new(format!("ws://{addr}/ws"), "key", toolkit);

    tokio::time::timeout(Duration::from_secs(10), session.run())
        .await
        .expect("session finished in time")
        .expect("session ended cleanly");

    let pong = server.await.expect("server task");
    assert_eq!(pong, b"heartbeat".to_vec());
}

#[tokio::test]
async fn session_returns_when_host_closes_during_a_stalled_action() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let api = StalledTransactionApi::default();

    let server_api = api.clone();
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(stream).await.expect("handshake");

        next_json(&mut ws).await;
        let invoke = json!({
            "type": "action",
            "data": {
                "action": "borrow",
                "actionID": 9,
                "agentID": 1,
                "payload": {"tokenSymbol": "DAI", "amount": 1},
            },
        });
        ws.send(Message::Text(invoke.to_string())).await.expect("send action");

        server_api.call_started().await;
        ws.close(None).await.expect("close");
        while ws.next().await.is_some() {}
    });

    let session = ToolkitSession::new(format!("ws://{addr}/ws"), "key", lending_toolkit(Arc::new(api)));

    tokio::time::timeout(Duration::from_secs(5), session.run())
        .await
        .expect("session returned after the host closed")
        .expect("session ended cleanly");

    server.await.expect("server task");
}

#[tokio::test]
async fn session_fails_when_host_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let toolkit = Arc::new(Toolkit::new());
    let session = ToolkitSession::new(format!("ws://{addr}/ws"), "key", toolkit);
    assert!(session.run().await.is_err());
}
