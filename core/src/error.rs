use std::io;

use asnlookup_protocols::response::ResponseError;

/// A failure that aborts the whole lookup. No partial response is returned.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("timed out connecting to {addr}")]
    ConnectTimeout { addr: String },

    #[error("failed to set deadline: deadline already elapsed")]
    Deadline,

    #[error("failed to send request: {0}")]
    Write(#[source] io::Error),

    #[error("failed to read response: {0}")]
    Read(#[source] io::Error),

    #[error("response exceeded maximum size of {limit} bytes")]
    ResponseTooLarge { limit: usize },

    #[error("lookup cancelled")]
    Cancelled,

    #[error("failed to close connection: {0}")]
    Close(#[source] io::Error),

    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl ClientError {
    /// True when the call ran out of time, in any phase.
    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::ConnectTimeout { .. } | ClientError::Deadline => true,
            ClientError::Write(e) | ClientError::Read(e) => e.kind() == io::ErrorKind::TimedOut,
            _ => false,
        }
    }
}

pub(crate) fn deadline_exceeded() -> io::Error {
    io::Error::new(io::ErrorKind::TimedOut, "deadline exceeded")
}
