#![warn(missing_debug_implementations, rust_2018_idioms)]

//! Connection options for clients of a Hubiquitus hNode gateway.
//!
//! [`ConnectionOptions`] holds the server host and port, the transport, the gateway endpoints and
//! the message history limit a client needs to open a session. Options are built from defaults,
//! copied from another instance, or read from a JSON document:
//!
//! ```rust
//! use hapi::{ConnectionOptions, TransportType};
//! use serde_json::json;
//!
//! let parsed = ConnectionOptions::from_json(&json!({
//!     "serverHost": "hnode.example.com",
//!     "transport": "socketio",
//!     "endpoints": ["http://gateway.example.com:8080/"],
//! }))
//! .unwrap();
//!
//! assert!(parsed.is_complete());
//! assert_eq!(parsed.options.transport(), TransportType::SocketIo);
//! assert_eq!(parsed.options.server_port(), 5222);
//! ```

pub mod constants;
pub mod document;

mod hubiquitus_connection_option;
mod hubiquitus_transport_type;

pub use document::{DocumentError, FieldError, FieldErrorKind, ParsedOptions};
pub use hubiquitus_connection_option::ConnectionOptions;
pub use hubiquitus_transport_type::{IntoTransportType, ParseTransportTypeError, TransportType};
