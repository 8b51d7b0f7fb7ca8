//! Reads HTML from stdin and writes the cleaned result to stdout.
//!
//! Prints `{"content": ..., "stats": {...}}` as JSON, or the bare cleaned
//! markup with `--html`. Set `RUST_LOG=debug` to see per-pass counts on stderr.

use feed_sanitizer::{clean_with_report, CleanResult, Options};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Cleaned(CleanResult),
    Failed { error: String },
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();

    let html_only = std::env::args().skip(1).any(|arg| arg == "--html");

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        std::process::exit(1);
    }

    let html = feed_sanitizer::encoding::transcode_to_utf8(&html);
    let (output, failed) = match clean_with_report(&html, &Options::default()) {
        Ok(result) => (Output::Cleaned(result), false),
        Err(err) => (Output::Failed { error: err.to_string() }, true),
    };

    match output {
        Output::Cleaned(result) if html_only => println!("{}", result.content),
        Output::Failed { error } if html_only => eprintln!("{error}"),
        output => println!("{}", serde_json::to_string(&output).unwrap_or_default()),
    }

    if failed {
        std::process::exit(1);
    }
}
