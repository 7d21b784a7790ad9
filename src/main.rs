use structopt::StructOpt;

#[macro_use]
extern crate log;

#[cfg(unix)]
mod kernel;
mod nofiles;
mod options;
use crate::nofiles::{current_nofiles, set_nofiles};
use crate::options::Opt;

fn main() {
    pretty_env_logger::init();

    let opt = Opt::from_args();

    if let Err(e) = set_nofiles(opt.fd_rlimit) {
        error!("Failed to set ulimit for the number of open files: {}", e);
        std::process::exit(1);
    }

    if opt.report {
        match current_nofiles() {
            Ok(limits) => println!("{} {}", limits.soft, limits.hard),
            Err(e) => {
                error!("Failed to read ulimit for the number of open files: {}", e);
                std::process::exit(1);
            }
        }
    }
}
