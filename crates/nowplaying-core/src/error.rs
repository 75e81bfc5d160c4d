use std::fmt;

/// Result type for nowplaying-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can abort a report
#[derive(Debug)]
pub enum Error {
    /// The server rejected the request
    Unauthorized { host: String, token_supplied: bool },

    /// Writing to the output sink failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unauthorized {
                host,
                token_supplied: false,
            } => write!(
                f,
                "{} requires authentication, but no access token was supplied (set `token` in the config file or pass --token)",
                host
            ),
            Error::Unauthorized {
                host,
                token_supplied: true,
            } => write!(f, "{} rejected the supplied access token", host),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Unauthorized { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message_distinguishes_token_state() {
        let missing = Error::Unauthorized {
            host: "nas".to_string(),
            token_supplied: false,
        };
        let rejected = Error::Unauthorized {
            host: "nas".to_string(),
            token_supplied: true,
        };

        assert!(missing.to_string().contains("no access token was supplied"));
        assert!(rejected.to_string().contains("rejected the supplied access token"));
    }
}
