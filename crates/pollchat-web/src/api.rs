//! HTTP fetch calls to the chat server (same origin).

use gloo_net::http::Request;

use pollchat_core::types::{Message, MessageList, NewMessage, MESSAGES_PATH};

pub async fn fetch_messages() -> Result<Vec<Message>, String> {
    let resp = Request::get(MESSAGES_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("status {}", resp.status()));
    }
    let list: MessageList = resp.json().await.map_err(|e| e.to_string())?;
    Ok(list.into_messages())
}

pub async fn post_message(msg: &NewMessage) -> Result<(), String> {
    let body = serde_json::to_string(msg).map_err(|e| e.to_string())?;
    let resp = Request::post(MESSAGES_PATH)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("status {}", resp.status()));
    }
    Ok(())
}
