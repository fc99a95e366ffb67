use serde::{Deserialize, Serialize};

use crate::constants::{SOCKETIO_TRANSPORT, XMPP_TRANSPORT};

/// The transport used to reach the hNode gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// XMPP over the server host and port
    #[default]
    Xmpp,

    /// Socket.IO over one of the gateway endpoints
    SocketIo,
}

/// Error returned when a string is neither `"xmpp"` nor `"socketio"`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown transport {0:?}, expecting \"xmpp\" or \"socketio\"")]
pub struct ParseTransportTypeError(pub String);

impl TransportType {
    /// The literal used for this transport in option documents
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Xmpp => XMPP_TRANSPORT,
            TransportType::SocketIo => SOCKETIO_TRANSPORT,
        }
    }

    /// Parses a transport literal, falling back to [`TransportType::Xmpp`] for `None` and for
    /// anything that isn't a known literal.
    pub fn from_str_or_default(value: Option<&str>) -> Self {
        match value.map(str::parse::<TransportType>) {
            Some(Ok(transport)) => transport,
            Some(Err(err)) => {
                log::debug!("{}, using default transport", err);
                Self::default()
            }
            None => Self::default(),
        }
    }
}

impl std::str::FromStr for TransportType {
    type Err = ParseTransportTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            XMPP_TRANSPORT => Ok(TransportType::Xmpp),
            SOCKETIO_TRANSPORT => Ok(TransportType::SocketIo),
            _ => Err(ParseTransportTypeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Values accepted by [`crate::ConnectionOptions::set_transport`].
///
/// Strings are matched against the transport literals. Unknown literals and `None` resolve to
/// the default transport.
pub trait IntoTransportType {
    /// Resolves `self` to a transport
    fn into_transport_type(self) -> TransportType;
}

impl IntoTransportType for TransportType {
    fn into_transport_type(self) -> TransportType {
        self
    }
}

impl IntoTransportType for &str {
    fn into_transport_type(self) -> TransportType {
        TransportType::from_str_or_default(Some(self))
    }
}

impl IntoTransportType for String {
    fn into_transport_type(self) -> TransportType {
        TransportType::from_str_or_default(Some(&self))
    }
}

impl IntoTransportType for &String {
    fn into_transport_type(self) -> TransportType {
        TransportType::from_str_or_default(Some(self))
    }
}

impl IntoTransportType for Option<&str> {
    fn into_transport_type(self) -> TransportType {
        TransportType::from_str_or_default(self)
    }
}

impl IntoTransportType for Option<String> {
    fn into_transport_type(self) -> TransportType {
        TransportType::from_str_or_default(self.as_deref())
    }
}

impl IntoTransportType for Option<TransportType> {
    fn into_transport_type(self) -> TransportType {
        self.unwrap_or_default()
    }
}
