#![cfg_attr(not(unix), allow(dead_code))]

use std::fmt;
use std::io;

/// Soft and hard `RLIMIT_NOFILE` values for this process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NofileLimits {
    pub soft: u64,
    pub hard: u64,
}

impl fmt::Display for NofileLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{soft: {}, hard: {}}}", self.soft, self.hard)
    }
}

/// The two kernel calls the negotiator needs. Implementations must not cache:
/// every `get` reads the live process limits.
pub trait NofileKernel {
    fn get(&self) -> io::Result<NofileLimits>;
    fn set(&self, limits: NofileLimits) -> io::Result<()>;
}

#[derive(Debug)]
pub enum NofilesError {
    QueryFailed(io::Error),
    RaiseFailed {
        want: u64,
        attempted: NofileLimits,
        e: io::Error,
    },
}

impl fmt::Display for NofilesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NofilesError::QueryFailed(e) => {
                write!(f, "failed to read rlimit for max file descriptors: {}", e)
            }
            NofilesError::RaiseFailed { want, attempted, e } => write!(
                f,
                "failed to set rlimit {} for max file descriptors (wanted {}): {}",
                attempted, want, e
            ),
        }
    }
}

impl std::error::Error for NofilesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NofilesError::QueryFailed(e) => Some(e),
            NofilesError::RaiseFailed { e, .. } => Some(e),
        }
    }
}

/// Make sure the process may hold at least `want` open file descriptors.
///
/// If the hard limit is below `want` we first try to lift both limits, which
/// only works with CAP_SYS_RESOURCE (or the platform's equivalent). Without it
/// we fall back to raising the soft limit under the existing hard limit.
pub fn ensure_nofiles<K: NofileKernel>(kernel: &K, want: u64) -> Result<(), NofilesError> {
    let current = kernel.get().map_err(NofilesError::QueryFailed)?;

    if current.soft >= want {
        info!(
            "Current NOFILES soft limit is {}, wanted {}. Nothing to do.",
            current.soft, want
        );
        return Ok(());
    }

    if current.hard < want {
        let privileged = NofileLimits {
            soft: want,
            hard: want,
        };

        match kernel.set(privileged) {
            Ok(()) => {
                info!("NOFILES limits set to {}", privileged);
                return Ok(());
            }
            Err(e) => debug!(
                "Raising the NOFILES hard limit to {} failed ({}), trying the soft limit only",
                want, e
            ),
        }
    }

    let attempted = NofileLimits {
        soft: want,
        hard: current.hard,
    };
    kernel
        .set(attempted)
        .map_err(|e| NofilesError::RaiseFailed { want, attempted, e })?;

    info!("NOFILES limits set to {}", attempted);
    Ok(())
}

#[cfg(unix)]
pub fn set_nofiles(want: u64) -> Result<(), NofilesError> {
    ensure_nofiles(&crate::kernel::RlimitKernel, want)
}

#[cfg(not(unix))]
pub fn set_nofiles(want: u64) -> Result<(), NofilesError> {
    info!(
        "Not adjusting NOFILES ({} wanted): no rlimit support on this platform.",
        want
    );
    Ok(())
}

#[cfg(unix)]
pub fn current_nofiles() -> io::Result<NofileLimits> {
    crate::kernel::RlimitKernel.get()
}

#[cfg(not(unix))]
pub fn current_nofiles() -> io::Result<NofileLimits> {
    Err(io::Error::new(
        io::ErrorKind::Other,
        "no rlimit support on this platform",
    ))
}
