use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "nofile-negotiator",
    about = "Make sure this process can hold enough open files"
)]
pub struct Opt {
    /// Minimum number of open file descriptors the process needs
    #[structopt(long, default_value = "8500")]
    pub fd_rlimit: u64,

    /// Print the resulting soft and hard limits after negotiating
    #[structopt(long)]
    pub report: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_expected_fds() {
        let opt = Opt::from_iter(&["nofile-negotiator"]);
        assert_eq!(opt.fd_rlimit, 8500);
        assert!(!opt.report);
    }

    #[test]
    fn parses_fd_rlimit() {
        let opt = Opt::from_iter(&["nofile-negotiator", "--fd-rlimit", "65536", "--report"]);
        assert_eq!(opt.fd_rlimit, 65536);
        assert!(opt.report);
    }

    #[test]
    fn rejects_negative_fd_rlimit() {
        assert!(Opt::from_iter_safe(&["nofile-negotiator", "--fd-rlimit", "-1"]).is_err());
    }
}
