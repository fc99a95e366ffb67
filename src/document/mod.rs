//! Reading and writing [`ConnectionOptions`] as a JSON document.
//!
//! The document recognises `serverHost`, `serverPort`, `transport`, `endpoints` and
//! `nbLastMessage`. Keys are read in that order. The first key holding a value of the wrong shape
//! stops the read: keys before it are applied, that key and every key after it keep their
//! defaults, and the rejection is reported as a [`FieldError`].

use serde_json::{Map, Value};

use crate::{
    constants::{
        ENDPOINTS_KEY, HSERVER_KEY, NB_LAST_MESSAGE_KEY, SERVER_HOST_KEY, SERVER_PORT_KEY,
        TRANSPORT_KEY,
    },
    ConnectionOptions,
};

mod error;

pub use error::{DocumentError, FieldError, FieldErrorKind};

/// Options read from a document, along with the fields that were rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptions {
    /// Options built from every field read before the first rejection
    pub options: ConnectionOptions,

    /// Rejected fields. Empty if the whole document was applied.
    pub errors: Vec<FieldError>,
}

impl ParsedOptions {
    /// Whether every recognised key in the document was applied
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the options, discarding the field errors
    pub fn into_options(self) -> ConnectionOptions {
        self.options
    }
}

impl ConnectionOptions {
    /// Reads options from a JSON document.
    ///
    /// Returns `Err(_)` only if `document` is not an object. Field-level problems are reported
    /// in [`ParsedOptions::errors`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use hapi::ConnectionOptions;
    /// use serde_json::json;
    ///
    /// let parsed = ConnectionOptions::from_json(&json!({
    ///     "serverPort": "5223",
    ///     "nbLastMessage": "many",
    /// }))
    /// .unwrap();
    ///
    /// assert!(!parsed.is_complete());
    /// assert_eq!(parsed.options.server_port(), 5223);
    /// assert_eq!(parsed.options.nb_last_message(), 10);
    /// ```
    pub fn from_json(document: &Value) -> Result<ParsedOptions, DocumentError> {
        let object = document
            .as_object()
            .ok_or_else(|| DocumentError::NotAnObject(type_name(document)))?;

        let mut options = ConnectionOptions::new();
        let errors = match apply_object(&mut options, object) {
            Ok(()) => Vec::new(),
            Err(err) => vec![err],
        };
        Ok(ParsedOptions { options, errors })
    }

    /// Parses `text` as JSON and reads options from it with [`ConnectionOptions::from_json`]
    pub fn from_json_str(text: &str) -> Result<ParsedOptions, DocumentError> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_json(&document)
    }

    /// Renders the options as a JSON document.
    ///
    /// A missing server host is left out. `hserver` is included even though
    /// [`ConnectionOptions::from_json`] does not read it.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        if let Some(host) = self.server_host() {
            object.insert(SERVER_HOST_KEY.to_string(), Value::from(host));
        }
        object.insert(SERVER_PORT_KEY.to_string(), Value::from(self.server_port()));
        object.insert(TRANSPORT_KEY.to_string(), Value::from(self.transport().as_str()));
        object.insert(ENDPOINTS_KEY.to_string(), Value::from(self.endpoints().to_vec()));
        object.insert(NB_LAST_MESSAGE_KEY.to_string(), Value::from(self.nb_last_message()));
        object.insert(HSERVER_KEY.to_string(), Value::from(self.hserver()));
        Value::Object(object)
    }
}

/// Reads options leniently: anything that can't be used is logged and left at its default.
impl From<&Value> for ConnectionOptions {
    fn from(document: &Value) -> Self {
        match ConnectionOptions::from_json(document) {
            Ok(parsed) => {
                for err in &parsed.errors {
                    log::warn!("{}, remaining options left at defaults", err);
                }
                parsed.options
            }
            Err(err) => {
                log::warn!("{}, using default options", err);
                ConnectionOptions::new()
            }
        }
    }
}

fn apply_object(
    options: &mut ConnectionOptions,
    object: &Map<String, Value>,
) -> Result<(), FieldError> {
    if let Some(value) = object.get(SERVER_HOST_KEY) {
        options.set_server_host(read_optional_string(SERVER_HOST_KEY, value)?);
    }

    if let Some(value) = object.get(SERVER_PORT_KEY) {
        if !is_empty_string(value) {
            options.set_server_port(read_int(SERVER_PORT_KEY, value)?);
        }
    }

    if let Some(value) = object.get(TRANSPORT_KEY) {
        options.set_transport(read_optional_string(TRANSPORT_KEY, value)?);
    }

    if let Some(value) = object.get(ENDPOINTS_KEY) {
        options.set_endpoints(read_string_array(ENDPOINTS_KEY, value)?);
    }

    if let Some(value) = object.get(NB_LAST_MESSAGE_KEY) {
        options.set_nb_last_message(read_int(NB_LAST_MESSAGE_KEY, value)?);
    }

    Ok(())
}

fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

/// `null` reads as `None`, which the setters treat as "use the default"
fn read_optional_string(key: &'static str, value: &Value) -> Result<Option<String>, FieldError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(wrong_type(key, "string", other)),
    }
}

/// Accepts integral numbers and strings holding an integer
fn read_int(key: &'static str, value: &Value) -> Result<i32, FieldError> {
    match value {
        Value::Number(number) => {
            let int = number.as_i64().ok_or_else(|| {
                let kind = if number.is_u64() {
                    FieldErrorKind::OutOfRange(number.to_string())
                } else {
                    FieldErrorKind::NotAnInteger(number.to_string())
                };
                FieldError::new(key, kind)
            })?;
            i32::try_from(int)
                .map_err(|_| FieldError::new(key, FieldErrorKind::OutOfRange(int.to_string())))
        }
        Value::String(s) => {
            let int = s
                .trim()
                .parse::<i64>()
                .map_err(|_| FieldError::new(key, FieldErrorKind::NotAnInteger(s.clone())))?;
            i32::try_from(int)
                .map_err(|_| FieldError::new(key, FieldErrorKind::OutOfRange(s.clone())))
        }
        other => Err(wrong_type(key, "integer", other)),
    }
}

fn read_string_array(key: &'static str, value: &Value) -> Result<Vec<String>, FieldError> {
    let array = value
        .as_array()
        .ok_or_else(|| wrong_type(key, "array", value))?;

    array
        .iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::String(s) => Ok(s.clone()),
            other => Err(FieldError::new(
                key,
                FieldErrorKind::WrongElementType {
                    index,
                    found: type_name(other),
                },
            )),
        })
        .collect()
}

fn wrong_type(key: &'static str, expected: &'static str, found: &Value) -> FieldError {
    FieldError::new(
        key,
        FieldErrorKind::WrongType {
            expected,
            found: type_name(found),
        },
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
