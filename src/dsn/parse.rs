use std::convert::Infallible;
use std::str::FromStr;

use memchr::memrchr;

use super::{Dsn, Port};

impl Dsn {
    /// Parses a compact connection string.
    ///
    /// Never fails: unrecognized shapes leave fields unpopulated rather
    /// than erroring. The last `@` splits credentials from the host, and
    /// the last `/` to the right of it splits off the database name, so an
    /// `@` in a user name or a `/` in a password parse as credential text.
    /// A database name containing `@` cannot be expressed alongside
    /// credentials; that is a limitation of the grammar itself.
    pub fn parse(s: &str) -> Self {
        let mut dsn = Self::new();

        let at_pos = memrchr(b'@', s.as_bytes());

        // A slash only delimits the database name when it occurs after the
        // credentials; one buried in a password is credential text.
        let host_start = at_pos.map_or(0, |at| at + 1);
        let slash_pos =
            memrchr(b'/', &s.as_bytes()[host_start..]).map(|idx| host_start + idx);

        if let Some(at) = at_pos {
            let (user, password) = split_segment(&s[..at]);
            dsn.user = user.map(str::to_owned);
            dsn.password = password.map(str::to_owned);
        }

        let boundary = slash_pos.unwrap_or(s.len());
        let (host, port) = split_segment(&s[host_start..boundary]);
        dsn.host = host.map(str::to_owned);
        dsn.port = port.map(Port::from_segment);

        if let Some(slash) = slash_pos {
            let database = &s[slash + 1..];
            if !database.is_empty() {
                dsn.database = Some(database.to_owned());
            }
        }

        tracing::trace!(
            user = dsn.user.is_some(),
            host = dsn.host.is_some(),
            port = dsn.port.is_some(),
            database = dsn.database.is_some(),
            "parsed connection string"
        );

        dsn
    }
}

impl FromStr for Dsn {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Splits a credentials or host/port segment on its first `:`.
///
/// An empty segment means both halves are absent; a non-empty one always
/// has a first half, even if that half is the empty string (`":pass"`).
fn split_segment(segment: &str) -> (Option<&str>, Option<&str>) {
    if segment.is_empty() {
        return (None, None);
    }

    let mut parts = segment.splitn(2, ':');
    (parts.next(), parts.next())
}

#[test]
fn it_parses_a_fully_populated_dsn() {
    let dsn = Dsn::parse("user:pass@host:5432/db");

    assert_eq!(Some("user"), dsn.get_user());
    assert_eq!(Some("pass"), dsn.get_password());
    assert_eq!(Some("host"), dsn.get_host());
    assert_eq!(Some(&Port::Number(5432)), dsn.get_port());
    assert_eq!(Some("db"), dsn.get_database());
}

#[test]
fn it_parses_a_dsn_without_credentials() {
    let dsn = Dsn::parse("host:5432/db");

    assert_eq!(None, dsn.get_user());
    assert_eq!(None, dsn.get_password());
    assert_eq!(Some("host"), dsn.get_host());
    assert_eq!(Some(&Port::Number(5432)), dsn.get_port());
    assert_eq!(Some("db"), dsn.get_database());
}

#[test]
fn it_parses_a_dsn_without_a_database() {
    let dsn = Dsn::parse("user:pass@host:5432");

    assert_eq!(Some("user"), dsn.get_user());
    assert_eq!(Some("pass"), dsn.get_password());
    assert_eq!(Some("host"), dsn.get_host());
    assert_eq!(Some(&Port::Number(5432)), dsn.get_port());
    assert_eq!(None, dsn.get_database());
}

#[test]
fn it_parses_a_bare_host() {
    let dsn = Dsn::parse("host");

    assert_eq!(Dsn::new().host("host"), dsn);
}

#[test]
fn it_parses_the_empty_string_to_an_empty_descriptor() {
    assert_eq!(Dsn::new(), Dsn::parse(""));
}

#[test]
fn it_splits_a_delimiter_free_string_on_the_colon_only() {
    let dsn = Dsn::parse("host:5432");

    assert_eq!(Dsn::new().host("host").port(5432), dsn);
}

#[test]
fn it_keeps_an_unparseable_port_distinct_from_an_absent_one() {
    let dsn = Dsn::parse("user:pass@host:notaport/db");

    assert_eq!(Some(&Port::Invalid("notaport".to_owned())), dsn.get_port());
    assert_eq!(Some("db"), dsn.get_database());
    assert!(dsn.port_number().is_err());
}

#[test]
fn it_parses_an_empty_port_segment_as_invalid() {
    let dsn = Dsn::parse("host:");

    assert_eq!(Some("host"), dsn.get_host());
    assert_eq!(Some(&Port::Invalid(String::new())), dsn.get_port());
}

#[test]
fn it_parses_user_only_credentials() {
    let dsn = Dsn::parse("admin@host/db");

    assert_eq!(Some("admin"), dsn.get_user());
    assert_eq!(None, dsn.get_password());
    assert_eq!(Some("host"), dsn.get_host());
    assert_eq!(Some("db"), dsn.get_database());
}

#[test]
fn it_parses_a_username_with_an_at_sign() {
    let dsn = Dsn::parse("user@hostname:password@hostname:5432/database");

    assert_eq!(Some("user@hostname"), dsn.get_user());
    assert_eq!(Some("password"), dsn.get_password());
    assert_eq!(Some("hostname"), dsn.get_host());
}

#[test]
fn it_parses_a_password_containing_an_at_sign() {
    let dsn = Dsn::parse("username:p@ssw0rd@hostname:5432/database");

    assert_eq!(Some("p@ssw0rd"), dsn.get_password());
    assert_eq!(Some("hostname"), dsn.get_host());
}

#[test]
fn it_treats_a_slash_in_the_password_as_credential_text() {
    let dsn = Dsn::parse("user:pa/ss@host:5432");

    assert_eq!(Some("pa/ss"), dsn.get_password());
    assert_eq!(Some("host"), dsn.get_host());
    assert_eq!(Some(&Port::Number(5432)), dsn.get_port());
    assert_eq!(None, dsn.get_database());
}

#[test]
fn it_takes_the_last_slash_as_the_database_delimiter() {
    let dsn = Dsn::parse("host/dir/db");

    assert_eq!(Some("host/dir"), dsn.get_host());
    assert_eq!(Some("db"), dsn.get_database());
}

#[test]
fn it_leaves_an_empty_database_segment_absent() {
    let dsn = Dsn::parse("host:5432/");

    assert_eq!(Some(&Port::Number(5432)), dsn.get_port());
    assert_eq!(None, dsn.get_database());
}

#[test]
fn it_leaves_credentials_absent_for_a_leading_at_sign() {
    let dsn = Dsn::parse("@host");

    assert_eq!(None, dsn.get_user());
    assert_eq!(None, dsn.get_password());
    assert_eq!(Some("host"), dsn.get_host());
}

#[test]
fn it_keeps_an_empty_user_before_a_password() {
    let dsn = Dsn::parse(":pass@host");

    assert_eq!(Some(""), dsn.get_user());
    assert_eq!(Some("pass"), dsn.get_password());
}

#[test]
fn it_parses_a_database_with_no_host() {
    let dsn = Dsn::parse("/db");

    assert_eq!(None, dsn.get_host());
    assert_eq!(Some("db"), dsn.get_database());
}

#[test]
fn it_takes_leading_digits_of_a_port_with_trailing_garbage() {
    let dsn = Dsn::parse("host:5432x");

    assert_eq!(Some(&Port::Number(5432)), dsn.get_port());
}

#[test]
fn it_can_be_parsed_through_from_str() {
    let dsn: Dsn = "host:5432/db".parse().unwrap();

    assert_eq!(Some("host"), dsn.get_host());
}
