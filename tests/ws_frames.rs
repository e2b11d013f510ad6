//! End-to-end check of the frame adapter over a real websocket.
//!
//! The test server answers each command with one `UPDATE_BLOCK` per
//! requested block id, or with an error frame if the command is rejected.

#![allow(clippy::panic)]

use std::net::SocketAddr;

use axum::Router;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use futures_util::{SinkExt, Stream, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as ClientMessage;

use boards_ws::config::ProtocolConfig;
use boards_ws::domain::{Block, WorkspaceId};
use boards_ws::ws::{Update, UpdateMsg, WebsocketCommand, WsCodec, error_frame};

async fn ws_handler(ws: WebSocketUpgrade, State(codec): State<WsCodec>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| echo_updates(socket, codec))
}

async fn echo_updates(mut socket: WebSocket, codec: WsCodec) {
    while let Some(Ok(frame)) = socket.recv().await {
        let replies = match codec.decode_command_frame(&frame) {
            Ok(Some(cmd)) => updates_for(&codec, &cmd),
            Ok(None) => continue,
            Err(err) => vec![error_frame(&err)],
        };
        for reply in replies {
            if socket.send(reply).await.is_err() {
                return;
            }
        }
    }
}

fn updates_for(codec: &WsCodec, cmd: &WebsocketCommand) -> Vec<Message> {
    cmd.block_ids
        .iter()
        .map(|id| {
            let block = Block::new(id.clone(), cmd.workspace_id.clone(), "card");
            UpdateMsg::from(Update::Block(block))
        })
        .filter_map(|msg| codec.update_frame(&msg).ok())
        .collect()
}

async fn spawn_server(config: ProtocolConfig) -> SocketAddr {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("boards_ws=debug")
        .with_test_writer()
        .try_init();

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .with_state(WsCodec::new(config));
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind test listener");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener has no local address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn next_text<S>(stream: &mut S) -> String
where
    S: Stream<Item = Result<ClientMessage, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    let Some(Ok(msg)) = stream.next().await else {
        panic!("connection closed before a reply arrived");
    };
    let Ok(text) = msg.to_text() else {
        panic!("expected a text frame");
    };
    text.to_string()
}

#[tokio::test]
async fn subscribe_yields_one_update_per_block() {
    let addr = spawn_server(ProtocolConfig::default()).await;
    let Ok((socket, _)) = connect_async(format!("ws://{addr}/ws")).await else {
        panic!("websocket handshake failed");
    };
    let (mut tx, mut rx) = socket.split();

    let subscribe = r#"{"action":"SUBSCRIBE_BLOCKS","workspaceId":"ws1","token":"t1","readToken":"","blockIds":["b1","b2"]}"#;
    if tx.send(ClientMessage::text(subscribe.to_string())).await.is_err() {
        panic!("failed to send command");
    }

    let codec = WsCodec::default();
    for expected in ["b1", "b2"] {
        let text = next_text(&mut rx).await;
        let Ok(Update::Block(block)) = codec.decode_typed_update(&text) else {
            panic!("expected a block update, got {text}");
        };
        assert_eq!(block.id.as_str(), expected);
        assert_eq!(block.workspace_id, WorkspaceId::new("ws1"));
    }
}

#[tokio::test]
async fn malformed_command_yields_error_frame() {
    let addr = spawn_server(ProtocolConfig::default()).await;
    let Ok((mut socket, _)) = connect_async(format!("ws://{addr}/ws")).await else {
        panic!("websocket handshake failed");
    };

    if socket.send(ClientMessage::text(r#"{"action":42}"#.to_string())).await.is_err() {
        panic!("failed to send command");
    }

    let text = next_text(&mut socket).await;
    let value: serde_json::Value = serde_json::from_str(&text).unwrap_or_default();
    assert_eq!(value.pointer("/error/code"), Some(&serde_json::Value::from(1001)));
}

#[tokio::test]
async fn strict_server_rejects_unknown_action() {
    let addr = spawn_server(ProtocolConfig {
        strict_actions: true,
        ..ProtocolConfig::default()
    })
    .await;
    let Ok((mut socket, _)) = connect_async(format!("ws://{addr}/ws")).await else {
        panic!("websocket handshake failed");
    };

    let cmd = r#"{"action":"SUBSCRIBE_EVERYTHING","blockIds":["b1"]}"#;
    if socket.send(ClientMessage::text(cmd.to_string())).await.is_err() {
        panic!("failed to send command");
    }

    let text = next_text(&mut socket).await;
    let value: serde_json::Value = serde_json::from_str(&text).unwrap_or_default();
    assert_eq!(value.pointer("/error/code"), Some(&serde_json::Value::from(2001)));
}
