use std::io;

use rlimit::Resource;

use crate::nofiles::{NofileKernel, NofileLimits};

/// `RLIMIT_NOFILE` of the calling process, via getrlimit(2) and setrlimit(2).
#[derive(Clone, Copy, Debug, Default)]
pub struct RlimitKernel;

impl NofileKernel for RlimitKernel {
    fn get(&self) -> io::Result<NofileLimits> {
        let (soft, hard) = Resource::NOFILE.get()?;

        Ok(NofileLimits { soft, hard })
    }

    fn set(&self, limits: NofileLimits) -> io::Result<()> {
        trace!("setrlimit(RLIMIT_NOFILE, {})", limits);
        Resource::NOFILE.set(limits.soft, limits.hard)
    }
}
