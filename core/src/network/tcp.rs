//! TCP transport for a single whois round trip.
//!
//! Every blocking step here is bounded by the same [`Instant`]; there is no
//! separate timeout per phase.

use std::io::ErrorKind;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{Instant, timeout_at};
use tracing::debug;

use crate::error::{ClientError, deadline_exceeded};

/// Opens the connection, giving up at `deadline`.
pub async fn connect(addr: &str, deadline: Instant) -> Result<TcpStream, ClientError> {
    match timeout_at(deadline, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => {
            debug!(addr, "connected");
            Ok(stream)
        }
        Ok(Err(source)) => Err(ClientError::Connect {
            addr: addr.to_string(),
            source,
        }),
        Err(_elapsed) => Err(ClientError::ConnectTimeout {
            addr: addr.to_string(),
        }),
    }
}

/// Rejects a deadline that has already passed before any I/O was attempted.
pub fn apply_deadline(deadline: Instant) -> Result<Instant, ClientError> {
    if deadline <= Instant::now() {
        return Err(ClientError::Deadline);
    }
    Ok(deadline)
}

/// Writes `request` in full, then reads until EOF.
///
/// Reads at most `limit + 1` bytes; seeing that extra byte means the reply
/// is too large and nothing is returned.
pub async fn exchange<S>(
    stream: &mut S,
    request: &[u8],
    deadline: Instant,
    limit: usize,
) -> Result<Vec<u8>, ClientError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    timeout_at(deadline, stream.write_all(request))
        .await
        .map_err(|_| ClientError::Write(deadline_exceeded()))?
        .map_err(ClientError::Write)?;
    debug!(bytes = request.len(), "request sent");

    let mut response: Vec<u8> = Vec::new();
    let mut limited = (&mut *stream).take(limit as u64 + 1);
    timeout_at(deadline, limited.read_to_end(&mut response))
        .await
        .map_err(|_| ClientError::Read(deadline_exceeded()))?
        .map_err(ClientError::Read)?;

    if response.len() > limit {
        return Err(ClientError::ResponseTooLarge { limit });
    }

    debug!(bytes = response.len(), "response received");
    Ok(response)
}

/// Shuts the write side down and drops the stream.
///
/// A peer that already tore the connection down is not an error.
pub async fn close<S: AsyncWrite + Unpin>(mut stream: S) -> Result<(), ClientError> {
    match stream.shutdown().await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
        Err(e) => Err(ClientError::Close(e)),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
