//! Browser control surface for the simulation.
//!
//! A WebSocket server lets a browser drive the same simulation the
//! terminal shows. The dashboard loop stays the only owner of the
//! controller: commands arrive over a channel and are applied on the next
//! frame, and every state change is broadcast back as JSON.
//!
//! ```sh
//! cargo build --features web
//! ./target/debug/railops --serve        # port from config (3000)
//! ./target/debug/railops --serve=8080
//! ```

mod protocol;
mod server;

pub use protocol::{encode_change, parse_command};
pub use server::{start_web_server, WebServer};
