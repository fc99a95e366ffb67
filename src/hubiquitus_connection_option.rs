use url::Url;

use crate::{
    constants::{DEFAULT_ENDPOINT, DEFAULT_HSERVER, DEFAULT_NB_LAST_MESSAGE, DEFAULT_SERVER_PORT},
    hubiquitus_transport_type::{IntoTransportType, TransportType},
};

/// The set of options used to open a session with an hNode gateway.
///
/// Every setter normalizes its input, so an instance never holds a port of `0`, a
/// non-positive message count, an empty endpoint list, or an empty host name.
///
/// # Example
///
/// ```rust
/// use hapi::{ConnectionOptions, TransportType};
///
/// let mut options = ConnectionOptions::new();
/// options.set_server_port(0);
/// options.set_transport("websocket");
///
/// assert_eq!(options.server_port(), 5222);
/// assert_eq!(options.transport(), TransportType::Xmpp);
/// assert_eq!(options.endpoints(), ["http://localhost:8080/"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionOptions {
    server_host: Option<String>,
    server_port: i32,
    transport: TransportType,
    endpoints: Vec<String>,
    nb_last_message: i32,
    hserver: String,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            server_host: None,
            server_port: DEFAULT_SERVER_PORT,
            transport: TransportType::default(),
            endpoints: vec![DEFAULT_ENDPOINT.to_string()],
            nb_last_message: DEFAULT_NB_LAST_MESSAGE,
            hserver: DEFAULT_HSERVER.to_string(),
        }
    }
}

impl ConnectionOptions {
    /// Create a new instance of [`ConnectionOptions`] with default values
    pub fn new() -> Self {
        Default::default()
    }

    /// Copies `other` field by field through the setters.
    ///
    /// The result is equal to `other.clone()`; this exists for callers that hold options built
    /// elsewhere and want every field re-normalized on the way in.
    pub fn from_options(other: &ConnectionOptions) -> Self {
        let mut options = Self::new();
        options.set_server_host(other.server_host.clone());
        options.set_server_port(other.server_port);
        options.set_transport(other.transport);
        options.set_endpoints(other.endpoints.clone());
        options.set_nb_last_message(other.nb_last_message);
        options.set_hserver(other.hserver.clone());
        options
    }

    /// Host name of the XMPP server, if any
    pub fn server_host(&self) -> Option<&str> {
        self.server_host.as_deref()
    }

    /// Sets the server host. An empty host is stored as `None`.
    pub fn set_server_host(&mut self, server_host: impl Into<Option<String>>) {
        self.server_host = server_host.into().filter(|host| !host.is_empty());
    }

    /// Port of the XMPP server (5222 by default)
    pub fn server_port(&self) -> i32 {
        self.server_port
    }

    /// Sets the server port. `0` selects the default port, any other value is kept as is.
    pub fn set_server_port(&mut self, server_port: i32) {
        self.server_port = match server_port {
            0 => DEFAULT_SERVER_PORT,
            port => port,
        };
    }

    /// Sets the server port from its textual form. Text that isn't an integer selects the
    /// default port.
    pub fn set_server_port_str(&mut self, server_port: &str) {
        match server_port.parse::<i32>() {
            Ok(port) => self.set_server_port(port),
            Err(err) => {
                log::debug!("Invalid server port {:?} ({}), using default", server_port, err);
                self.set_server_port(0)
            }
        }
    }

    /// Transport used to reach the gateway
    pub fn transport(&self) -> TransportType {
        self.transport
    }

    /// Sets the transport. Only `"xmpp"` and `"socketio"` are accepted, anything else
    /// (including `None`) selects [`TransportType::Xmpp`].
    pub fn set_transport(&mut self, transport: impl IntoTransportType) {
        self.transport = transport.into_transport_type();
    }

    /// Gateway endpoints, in the order they were given. Only used with
    /// [`TransportType::SocketIo`].
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Sets the gateway endpoints. `None` or an empty list resets to
    /// [`DEFAULT_ENDPOINT`](crate::constants::DEFAULT_ENDPOINT).
    pub fn set_endpoints(&mut self, endpoints: impl Into<Option<Vec<String>>>) {
        self.endpoints = match endpoints.into() {
            Some(endpoints) if !endpoints.is_empty() => endpoints,
            _ => vec![DEFAULT_ENDPOINT.to_string()],
        };
    }

    /// Parses every endpoint as a [`Url`].
    ///
    /// Endpoints are stored unvalidated, so this returns the first parse failure.
    pub fn endpoint_urls(&self) -> Result<Vec<Url>, url::ParseError> {
        self.endpoints.iter().map(|endpoint| Url::parse(endpoint)).collect()
    }

    /// Max number of messages returned by a request for the last messages of a channel
    pub fn nb_last_message(&self) -> i32 {
        self.nb_last_message
    }

    /// Sets the message history limit. Values below `1` select the default of 10.
    pub fn set_nb_last_message(&mut self, nb_last_message: i32) {
        self.nb_last_message = if nb_last_message >= 1 {
            nb_last_message
        } else {
            DEFAULT_NB_LAST_MESSAGE
        };
    }

    /// Name of the hNode
    pub fn hserver(&self) -> &str {
        &self.hserver
    }

    pub fn set_hserver(&mut self, hserver: impl Into<String>) {
        self.hserver = hserver.into();
    }
}

impl std::fmt::Display for ConnectionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ConnectionOptions [serverHost={}, serverPort={}, transport={}, endpoints=[{}], nbLastMessage={}, hserver={}]",
            self.server_host.as_deref().unwrap_or("null"),
            self.server_port,
            self.transport,
            self.endpoints.join(", "),
            self.nb_last_message,
            self.hserver
        )
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use super::ConnectionOptions;
    use crate::TransportType;

    fn hash_of(options: &ConnectionOptions) -> u64 {
        let mut hasher = DefaultHasher::new();
        options.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn defaults() {
        let options = ConnectionOptions::new();
        assert_eq!(options.server_host(), None);
        assert_eq!(options.server_port(), 5222);
        assert_eq!(options.transport(), TransportType::Xmpp);
        assert_eq!(options.endpoints(), ["http://localhost:8080/"]);
        assert_eq!(options.nb_last_message(), 10);
        assert_eq!(options.hserver(), "hnode");
    }

    #[test]
    fn empty_server_host_is_none() {
        let mut options = ConnectionOptions::new();
        options.set_server_host("hnode.example.com".to_string());
        assert_eq!(options.server_host(), Some("hnode.example.com"));

        options.set_server_host(String::new());
        assert_eq!(options.server_host(), None);

        options.set_server_host("h".to_string());
        options.set_server_host(None);
        assert_eq!(options.server_host(), None);
    }

    #[test]
    fn server_port_zero_selects_default() {
        let mut options = ConnectionOptions::new();
        for port in [1, 80, 5223, 65535, 70000, -1, i32::MIN, i32::MAX] {
            options.set_server_port(port);
            assert_eq!(options.server_port(), port);
        }
        options.set_server_port(0);
        assert_eq!(options.server_port(), 5222);
    }

    #[test]
    fn server_port_from_text() {
        let mut options = ConnectionOptions::new();
        options.set_server_port_str("1234");
        assert_eq!(options.server_port(), 1234);

        options.set_server_port_str("-7");
        assert_eq!(options.server_port(), -7);

        for text in ["", "abc", "12ab", "1.5", "99999999999"] {
            options.set_server_port(1);
            options.set_server_port_str(text);
            assert_eq!(options.server_port(), 5222, "input {:?}", text);
        }
    }

    #[test]
    fn transport_only_accepts_known_literals() {
        let mut options = ConnectionOptions::new();
        options.set_transport("socketio");
        assert_eq!(options.transport(), TransportType::SocketIo);
        options.set_transport("xmpp");
        assert_eq!(options.transport(), TransportType::Xmpp);

        for value in ["", "bosh", "Socketio"] {
            options.set_transport(TransportType::SocketIo);
            options.set_transport(value);
            assert_eq!(options.transport(), TransportType::Xmpp, "input {:?}", value);
        }

        options.set_transport(TransportType::SocketIo);
        options.set_transport(None::<String>);
        assert_eq!(options.transport(), TransportType::Xmpp);
    }

    #[test]
    fn empty_or_missing_endpoints_reset_to_default() {
        let mut options = ConnectionOptions::new();
        options.set_endpoints(vec!["http://a/".to_string()]);
        options.set_endpoints(Vec::new());
        assert_eq!(options.endpoints(), ["http://localhost:8080/"]);

        options.set_endpoints(vec!["http://a/".to_string()]);
        options.set_endpoints(None);
        assert_eq!(options.endpoints(), ["http://localhost:8080/"]);
    }

    #[test]
    fn endpoints_keep_order_and_duplicates() {
        let mut options = ConnectionOptions::new();
        let input = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        options.set_endpoints(input.clone());
        assert_eq!(options.endpoints(), input.as_slice());
    }

    #[test]
    fn endpoints_are_isolated_from_caller_copies() {
        let mut options = ConnectionOptions::new();
        let mut input = vec!["a".to_string(), "b".to_string()];
        options.set_endpoints(input.clone());
        input.push("c".to_string());

        let mut out = options.endpoints().to_vec();
        out.clear();

        assert_eq!(options.endpoints(), ["a", "b"]);
    }

    #[test]
    fn endpoint_urls_parse_each_endpoint() {
        let mut options = ConnectionOptions::new();
        let urls = options.endpoint_urls().unwrap();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].host_str(), Some("localhost"));
        assert_eq!(urls[0].port(), Some(8080));

        options.set_endpoints(vec!["http://gw:8080/".to_string(), "not a url".to_string()]);
        assert!(options.endpoint_urls().is_err());
    }

    #[test]
    fn nb_last_message_below_one_selects_default() {
        let mut options = ConnectionOptions::new();
        for n in [1, 2, 500, i32::MAX] {
            options.set_nb_last_message(n);
            assert_eq!(options.nb_last_message(), n);
        }
        for n in [0, -1, i32::MIN] {
            options.set_nb_last_message(3);
            options.set_nb_last_message(n);
            assert_eq!(options.nb_last_message(), 10);
        }
    }

    #[test]
    fn hserver_is_stored_verbatim() {
        let mut options = ConnectionOptions::new();
        options.set_hserver("");
        assert_eq!(options.hserver(), "");
        options.set_hserver("hnode2");
        assert_eq!(options.hserver(), "hnode2");
    }

    #[test]
    fn equality_covers_every_field() {
        let base = ConnectionOptions::new();
        assert_eq!(base, ConnectionOptions::new());
        assert_eq!(hash_of(&base), hash_of(&ConnectionOptions::new()));

        let mut other = base.clone();
        other.set_server_host("h".to_string());
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_server_port(1);
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_transport("socketio");
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_endpoints(vec!["http://localhost:8080/".to_string(), "x".to_string()]);
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_nb_last_message(11);
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_hserver("other");
        assert_ne!(base, other);
    }

    #[test]
    fn endpoint_order_matters_for_equality() {
        let mut a = ConnectionOptions::new();
        a.set_endpoints(vec!["x".to_string(), "y".to_string()]);
        let mut b = ConnectionOptions::new();
        b.set_endpoints(vec!["y".to_string(), "x".to_string()]);
        assert_ne!(a, b);
    }

    #[test]
    fn from_options_copies_every_field() {
        let mut original = ConnectionOptions::new();
        original.set_server_host("h".to_string());
        original.set_server_port(1234);
        original.set_transport("socketio");
        original.set_endpoints(vec!["e1".to_string(), "e2".to_string()]);
        original.set_nb_last_message(3);
        original.set_hserver("hnode2");

        let mut copy = ConnectionOptions::from_options(&original);
        assert_eq!(copy, original);
        assert_eq!(hash_of(&copy), hash_of(&original));

        copy.set_endpoints(vec!["e3".to_string()]);
        copy.set_hserver("hnode3");
        assert_eq!(original.endpoints(), ["e1", "e2"]);
        assert_eq!(original.hserver(), "hnode2");
    }

    #[test]
    fn display_lists_every_field() {
        let mut options = ConnectionOptions::new();
        assert_eq!(
            options.to_string(),
            "ConnectionOptions [serverHost=null, serverPort=5222, transport=xmpp, \
             endpoints=[http://localhost:8080/], nbLastMessage=10, hserver=hnode]"
        );

        options.set_server_host("h".to_string());
        options.set_transport("socketio");
        options.set_endpoints(vec!["e1".to_string(), "e2".to_string()]);
        assert_eq!(
            options.to_string(),
            "ConnectionOptions [serverHost=h, serverPort=5222, transport=socketio, \
             endpoints=[e1, e2], nbLastMessage=10, hserver=hnode]"
        );
    }
}
