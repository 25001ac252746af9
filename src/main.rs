// Print the GPIO and SPI ioctl request codes for the target this was built for

use std::io;
use std::process::exit;

use ioctl_codes::report::write_report;
use log::{error, info};

/// Exits 0 once every line is written. A failed write to stdout is logged
/// and exits 1; this includes EPIPE when the reader closes early
/// (`ioctl-codes | head -1`), since Rust ignores SIGPIPE and the process
/// is not killed by the signal.
fn main() {
    env_logger::init();
    info!("Reporting ioctl codes for {}", std::env::consts::ARCH);

    let stdout = io::stdout();
    if let Err(err) = write_report(&mut stdout.lock()) {
        error!("{err}");
        exit(1);
    }
}
