use crate::error::{Error, Result};

mod display;
mod parse;
mod port;

pub use port::Port;

/// A parsed connection string ("DSN").
///
/// Every field is independently optional; see the crate docs for the
/// grammar. A value can be parsed from a string or assembled manually:
///
/// ```rust
/// use tasty_dsn::Dsn;
///
/// // Parsed from a compact connection string
/// let dsn = Dsn::parse("admin@db.internal:5432/metrics");
///
/// // Manually-constructed descriptor
/// let dsn = Dsn::new()
///     .host("db.internal")
///     .port(5432)
///     .database("metrics");
/// ```
///
/// Absent fields stay `None`; an empty string is a real (if unusual) value,
/// not a stand-in for absence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dsn {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) user: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) password: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) host: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) port: Option<Port>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) database: Option<String>,
}

impl Default for Dsn {
    fn default() -> Self {
        Self::new()
    }
}

impl Dsn {
    /// Creates an empty descriptor with every field absent.
    pub fn new() -> Self {
        Self {
            user: None,
            password: None,
            host: None,
            port: None,
            database: None,
        }
    }

    /// Sets the user to connect as.
    pub fn user(mut self, user: &str) -> Self {
        self.user = Some(user.to_owned());
        self
    }

    /// Sets the password to connect with.
    pub fn password(mut self, password: &str) -> Self {
        self.password = Some(password.to_owned());
        self
    }

    /// Sets the name of the host to connect to.
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_owned());
        self
    }

    /// Sets the port to connect to at the server host.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(Port::Number(port));
        self
    }

    /// Sets the database name.
    pub fn database(mut self, database: &str) -> Self {
        self.database = Some(database.to_owned());
        self
    }
}

impl Dsn {
    /// Get the user, if one was supplied.
    pub fn get_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Get the password, if one was supplied.
    pub fn get_password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Get the host, if one was supplied.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use tasty_dsn::Dsn;
    /// let dsn = Dsn::parse("127.0.0.1/db");
    /// assert_eq!(dsn.get_host(), Some("127.0.0.1"));
    /// ```
    pub fn get_host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Get the port segment, if one was supplied.
    ///
    /// A segment that was present but not numeric comes back as
    /// [`Port::Invalid`]; see [`port_number`](Self::port_number) for the
    /// validating accessor.
    pub fn get_port(&self) -> Option<&Port> {
        self.port.as_ref()
    }

    /// Get the database name, if one was supplied.
    pub fn get_database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Returns the port as a number, if one was supplied.
    ///
    /// Distinguishes the two ways a descriptor can lack a usable port:
    /// `Ok(None)` means no port segment was present at all, while a segment
    /// that held no number is an [`Error::InvalidPort`].
    ///
    /// # Example
    ///
    /// ```rust
    /// # use tasty_dsn::Dsn;
    /// assert_eq!(Dsn::parse("host:5432").port_number().unwrap(), Some(5432));
    /// assert_eq!(Dsn::parse("host").port_number().unwrap(), None);
    /// assert!(Dsn::parse("host:fivefour").port_number().is_err());
    /// ```
    pub fn port_number(&self) -> Result<Option<u16>> {
        match &self.port {
            None => Ok(None),
            Some(Port::Number(n)) => Ok(Some(*n)),
            Some(Port::Invalid(raw)) => Err(Error::InvalidPort(raw.clone())),
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn it_skips_absent_fields_when_serialized() {
    let json = serde_json::to_value(Dsn::parse("host:5432")).unwrap();

    assert_eq!(serde_json::json!({"host": "host", "port": 5432}), json);
}

#[cfg(feature = "serde")]
#[test]
fn it_deserializes_missing_fields_as_absent() {
    let dsn: Dsn = serde_json::from_str(r#"{"host":"h"}"#).unwrap();

    assert_eq!(Dsn::new().host("h"), dsn);
}

#[cfg(feature = "serde")]
#[test]
fn it_deserializes_an_invalid_port_from_a_string() {
    let dsn: Dsn = serde_json::from_str(r#"{"port":"x"}"#).unwrap();

    assert_eq!(Some(&Port::Invalid("x".to_owned())), dsn.get_port());
}
