use std::process::exit;

use tracing_subscriber::EnvFilter;

fn main() {
    setup_logging();

    match cthunk::emit_host() {
        Ok(errors) => exit(i32::try_from(errors).unwrap_or(i32::MAX)),
        Err(err) => {
            tracing::error!("failed to write generated module: {err}");
            exit(1);
        }
    }
}

// stdout carries the generated module, so logs go to stderr
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
