//! WebSocket server bridging browser clients and the dashboard loop.

use super::protocol::{encode_change, parse_command};
use crate::core::controller::{SimulationAction, StateChange};
use crate::error::Result;
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{broadcast, mpsc, Mutex};
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

/// Serialized state changes fanned out to every client
pub type UpdateSender = broadcast::Sender<String>;

pub type CommandReceiver = mpsc::Receiver<SimulationAction>;
pub type CommandSender = mpsc::Sender<SimulationAction>;

const CHANNEL_CAPACITY: usize = 100;

pub struct WebServer {
    pub updates_tx: UpdateSender,
    command_rx: Mutex<CommandReceiver>,
    pub command_tx: CommandSender,
    /// Most recent snapshot, sent to clients as soon as they connect
    latest: StdMutex<Option<String>>,
}

impl WebServer {
    pub fn new() -> Self {
        let (updates_tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (command_tx, command_rx) = mpsc::channel(CHANNEL_CAPACITY);

        Self {
            updates_tx,
            command_rx: Mutex::new(command_rx),
            command_tx,
            latest: StdMutex::new(None),
        }
    }

    /// Broadcasts a state change to connected clients.
    pub fn publish(&self, change: &StateChange) -> Result<()> {
        let json = encode_change(change)?;
        if let Ok(mut latest) = self.latest.lock() {
            *latest = Some(json.clone());
        }
        // No connected clients is fine
        let _ = self.updates_tx.send(json);
        Ok(())
    }

    /// Non-blocking receive for the dashboard loop.
    pub fn try_recv_command(&self) -> Option<SimulationAction> {
        let mut rx = self.command_rx.try_lock().ok()?;
        rx.try_recv().ok()
    }

    fn latest_snapshot(&self) -> Option<String> {
        self.latest.lock().ok().and_then(|latest| latest.clone())
    }
}

impl Default for WebServer {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn start_web_server(port: u16, server: Arc<WebServer>) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "web control surface listening");

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                let server = Arc::clone(&server);
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, peer, server).await {
                        warn!(%peer, error = %e, "connection error");
                    }
                });
            }
            Err(e) => warn!(error = %e, "accept failed"),
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    server: Arc<WebServer>,
) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Plain GET without an upgrade header gets the control page
    let mut peek_buf = [0u8; 512];
    let n = stream.peek(&mut peek_buf).await?;
    let request = String::from_utf8_lossy(&peek_buf[..n]);
    if request.starts_with("GET / ") && !request.to_ascii_lowercase().contains("upgrade: websocket")
    {
        serve_html(stream).await?;
        return Ok(());
    }

    let ws_stream = tokio_tungstenite::accept_async(stream).await?;
    info!(%peer, "client connected");

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let mut updates_rx = server.updates_tx.subscribe();
    let command_tx = server.command_tx.clone();

    if let Some(snapshot) = server.latest_snapshot() {
        ws_sender.send(Message::Text(snapshot)).await?;
    }

    let send_task = tokio::spawn(async move {
        loop {
            match updates_rx.recv().await {
                Ok(json) => {
                    if ws_sender.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "client lagging behind updates");
                }
            }
        }
    });

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match parse_command(&text) {
                Ok(action) => {
                    debug!(%peer, ?action, "command received");
                    if command_tx.send(action).await.is_err() {
                        break;
                    }
                }
                Err(e) => warn!(%peer, error = %e, "ignoring malformed command"),
            },
            Ok(Message::Close(_)) | Err(_) => break,
            _ => {}
        }
    }

    send_task.abort();
    info!(%peer, "client disconnected");
    Ok(())
}

async fn serve_html(mut stream: TcpStream) -> std::io::Result<()> {
    use tokio::io::AsyncWriteExt;

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        CONTROL_PAGE.len(),
        CONTROL_PAGE
    );
    stream.write_all(response.as_bytes()).await?;
    Ok(())
}

const CONTROL_PAGE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>RailOps</title></head>
<body style="font-family: monospace; background: #111; color: #ddd">
<h2>RailOps simulation</h2>
<p id="status">connecting...</p>
<p>
  <button onclick="send({action:'start'})">Start</button>
  <button onclick="send({action:'pause'})">Pause</button>
  <button onclick="send({action:'stop'})">Stop</button>
  <button onclick="send({action:'reset'})">Reset</button>
  speed <input id="speed" type="number" min="1" max="5" value="1"
    onchange="send({action:'set',parameter:'speed',value:Number(this.value)})">
</p>
<pre id="state"></pre>
<script>
const ws = new WebSocket(`ws://${location.host}/ws`);
function send(msg) { ws.send(JSON.stringify(msg)); }
ws.onopen = () => document.getElementById('status').textContent = 'connected';
ws.onclose = () => document.getElementById('status').textContent = 'disconnected';
ws.onmessage = (ev) => {
  const change = JSON.parse(ev.data);
  document.getElementById('status').textContent =
    `${change.kind}: ${change.state.status} ${change.state.progress}%`;
  document.getElementById('state').textContent = JSON.stringify(change.state, null, 2);
};
</script>
</body>
</html>
"#;
