use clap::Parser;
use std::path::PathBuf;
use thumbor_url::logging::{init_subscriber, LogFormat};
use thumbor_url::{Call, ThumborConfig};

/// thumbor-url - build (and sign) a Thumbor image URL
#[derive(Parser, Debug)]
#[command(name = "thumbor-url")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Thumbor server base URL (overrides the config file)
    #[arg(short, long)]
    server: Option<String>,

    /// Signing secret (overrides the config file; empty for unsafe URLs)
    #[arg(long)]
    secret: Option<String>,

    /// Operation as name[:arg,arg...], e.g. fit-in:320,240 or filter:brightness,42
    #[arg(short, long = "op")]
    ops: Vec<Call>,

    /// Log output format (plain or json)
    #[arg(long, default_value = "plain")]
    log_format: LogFormat,

    /// Original image URL or path
    original: String,
}

fn main() {
    let args = Args::parse();

    init_subscriber(args.log_format, "warn").expect("Failed to initialize logging subsystem");

    let mut config = match &args.config {
        Some(path) => ThumborConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }),
        None => ThumborConfig::new(String::new(), String::new()),
    };

    if let Some(server) = args.server {
        config.server = server;
    }
    if let Some(secret) = args.secret {
        config.secret = secret;
    }

    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut builder = config.url(args.original);
    for op in &args.ops {
        builder = builder.call(op).unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });
    }

    tracing::info!(
        server = %config.server,
        signed = !config.secret.is_empty(),
        operations = args.ops.len(),
        "Building Thumbor URL"
    );

    println!("{}", builder.render());
}
