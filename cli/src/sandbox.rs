//! Drops privileges the process does not need before any input is touched.
//!
//! Only OpenBSD has a mechanism wired up (`pledge(2)`). Elsewhere this is a no-op.

use std::io;

#[cfg(target_os = "openbsd")]
pub fn restrict() -> io::Result<()> {
    // stdio for the pipes, dns to resolve the server, inet for the connection.
    let promises = c"stdio dns inet";

    // SAFETY: `promises` is a NUL-terminated string that outlives the call,
    // and a null execpromises pointer leaves exec promises unchanged.
    let rc: libc::c_int = unsafe { libc::pledge(promises.as_ptr(), std::ptr::null()) };
    if rc == -1 {
        return Err(io::Error::last_os_error());
    }

    tracing::debug!("pledged: stdio dns inet");
    Ok(())
}

#[cfg(not(target_os = "openbsd"))]
pub fn restrict() -> io::Result<()> {
    tracing::trace!("no sandbox available on this platform");
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
