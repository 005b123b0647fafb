mod benchmark;
mod error;
mod hasher;

use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::filter;

use benchmark::{HardwareChecker, available_cores};
use hasher::HashPrimitive;


// Use release build, the hashes are VERY slow in debug builds
fn main() -> ExitCode {

    // logs go to stderr, stdout is the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_level(true)
        .with_max_level(filter::LevelFilter::WARN)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    check_hardware(build_hasher(), &mut out, available_cores())
}


// the hash is fixed at build time, `--features scrypt` swaps it
#[cfg(not(feature = "scrypt"))]
fn build_hasher() -> hasher::Argon2id {
    hasher::Argon2id
}

#[cfg(feature = "scrypt")]
fn build_hasher() -> hasher::Scrypt {
    hasher::Scrypt
}


/// Runs both benchmark phases and maps the outcome to the process exit code.
fn check_hardware<H: HashPrimitive, W: Write>(hasher: H, out: &mut W, cores: u32) -> ExitCode {
    match HardwareChecker::new(hasher).run(out, cores) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Hardware check aborted: {}", err);
            ExitCode::FAILURE
        }
    }
}
