// Connection parameters for one device.
//
// These types describe *how* to reach a device. They carry credential
// data and the TLS choice, but never touch disk and never dial: a
// validated `Config` is handed to whatever implements `Connection`,
// and the layers above never look inside it again.

use std::net::Ipv4Addr;

use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Whether the transport should wrap the session in TLS.
///
/// Carried opaquely -- certificate handling belongs to the transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// Plain TCP (the classic API port, usually 8728).
    #[default]
    Plain,
    /// TLS-wrapped session (usually port 8729).
    Tls,
}

/// Parameters for connecting to a single device.
#[derive(Debug, Clone)]
pub struct Config {
    /// Device address as `ipv4:port`, e.g. `192.168.88.1:8728`.
    pub address: String,
    /// API username.
    pub username: String,
    /// API password.
    pub password: SecretString,
    /// TLS choice for the session.
    pub tls: TlsMode,
}

impl Config {
    /// Check that the parameters are usable before handing them to a
    /// transport: the address must be an `ipv4:port` pair with a
    /// non-zero port, and both credentials must be non-empty.
    pub fn validate(&self) -> Result<(), Error> {
        let Some((host, port)) = self.address.rsplit_once(':') else {
            return Err(Error::InvalidAddress(format!(
                "`{}` is not a host:port pair",
                self.address
            )));
        };

        if host.parse::<Ipv4Addr>().is_err() {
            return Err(Error::InvalidAddress(format!(
                "`{host}` is not an IPv4 address"
            )));
        }

        if !port.parse::<u16>().is_ok_and(|p| p > 0) {
            return Err(Error::InvalidAddress(format!("`{port}` is not a valid port")));
        }

        if self.username.is_empty() {
            return Err(Error::MissingCredentials("username"));
        }

        if self.password.expose_secret().is_empty() {
            return Err(Error::MissingCredentials("password"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(address: &str) -> Config {
        Config {
            address: address.to_owned(),
            username: "vagrant".to_owned(),
            password: SecretString::from("vagrant".to_owned()),
            tls: TlsMode::Plain,
        }
    }

    #[test]
    fn accepts_ipv4_host_port() {
        assert!(config("127.0.0.1:8728").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_port() {
        assert!(config("127.0.0.1:8728a").validate().is_err());
    }

    #[test]
    fn rejects_zero_port() {
        assert!(config("127.0.0.1:0").validate().is_err());
    }

    #[test]
    fn rejects_hostname() {
        assert!(config("router.lan:8728").validate().is_err());
    }

    #[test]
    fn rejects_missing_port() {
        assert!(config("127.0.0.1").validate().is_err());
    }

    #[test]
    fn rejects_empty_username() {
        let mut conf = config("127.0.0.1:8728");
        conf.username = String::new();
        assert!(matches!(
            conf.validate(),
            Err(Error::MissingCredentials("username"))
        ));
    }

    #[test]
    fn rejects_empty_password() {
        let mut conf = config("127.0.0.1:8728");
        conf.password = SecretString::from(String::new());
        assert!(matches!(
            conf.validate(),
            Err(Error::MissingCredentials("password"))
        ));
    }
}
