//! Default values and document keys

use const_format::concatcp;

/// Port used when none (or `0`) is given. This is the standard XMPP client port.
pub const DEFAULT_SERVER_PORT: i32 = 5222;

/// Number of messages returned by a history request when none (or a non-positive count) is given
pub const DEFAULT_NB_LAST_MESSAGE: i32 = 10;

/// Name of the hNode the client talks to
pub const DEFAULT_HSERVER: &str = "hnode";

pub(crate) const DEFAULT_GATEWAY_HOST: &str = "localhost";
pub(crate) const DEFAULT_GATEWAY_PORT: u16 = 8080;

/// Gateway endpoint used when the endpoint list is empty
pub const DEFAULT_ENDPOINT: &str =
    concatcp!("http://", DEFAULT_GATEWAY_HOST, ":", DEFAULT_GATEWAY_PORT, "/");

pub(crate) const XMPP_TRANSPORT: &str = "xmpp";
pub(crate) const SOCKETIO_TRANSPORT: &str = "socketio";

pub(crate) const SERVER_HOST_KEY: &str = "serverHost";
pub(crate) const SERVER_PORT_KEY: &str = "serverPort";
pub(crate) const TRANSPORT_KEY: &str = "transport";
pub(crate) const ENDPOINTS_KEY: &str = "endpoints";
pub(crate) const NB_LAST_MESSAGE_KEY: &str = "nbLastMessage";
pub(crate) const HSERVER_KEY: &str = "hserver";
