use std::fmt::{self, Display, Formatter};

use super::Dsn;

// Canonical `user[:password]@host[:port][/database]` form, omitting absent
// segments. An invalid port writes its preserved raw text, so re-parsing
// the output reproduces the descriptor.
impl Display for Dsn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.user.is_some() || self.password.is_some() {
            if let Some(user) = &self.user {
                f.write_str(user)?;
            }

            if let Some(password) = &self.password {
                write!(f, ":{password}")?;
            }

            f.write_str("@")?;
        }

        if let Some(host) = &self.host {
            f.write_str(host)?;
        }

        if let Some(port) = &self.port {
            write!(f, ":{port}")?;
        }

        if let Some(database) = &self.database {
            write!(f, "/{database}")?;
        }

        Ok(())
    }
}

#[test]
fn it_writes_the_canonical_form() {
    let dsn = Dsn::new()
        .user("user")
        .password("pass")
        .host("host")
        .port(5432)
        .database("db");

    assert_eq!("user:pass@host:5432/db", dsn.to_string());
}

#[test]
fn it_omits_absent_segments() {
    assert_eq!("", Dsn::new().to_string());
    assert_eq!("host", Dsn::new().host("host").to_string());
    assert_eq!("host:5432", Dsn::new().host("host").port(5432).to_string());
    assert_eq!("user@host", Dsn::new().user("user").host("host").to_string());
    assert_eq!("/db", Dsn::new().database("db").to_string());
}

#[test]
fn a_parsed_dsn_round_trips_through_its_canonical_form() {
    for dsn in [
        "user:pass@host:5432/db",
        "host:5432/db",
        "user:pass@host:5432",
        "host",
        "",
        "user:pass@host:notaport/db",
        "user@hostname:password@hostname:5432/database",
        ":pass@host",
        "user:pa/ss@host:5432",
        "host:",
        "host:70000",
        "host/dir/db",
        "/db",
        "@host",
    ] {
        let parsed = Dsn::parse(dsn);

        assert_eq!(parsed, Dsn::parse(&parsed.to_string()), "for input {dsn:?}");
    }
}
