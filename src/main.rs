use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use watch_scope::{build_runtime_options, CapabilityRegistry, RuntimeConfig, RuntimeOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Resolve a namespace scope declaration into cache options.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Comma-separated namespaces to watch; empty watches all namespaces
    #[arg(long, env = "WATCH_NAMESPACE", default_value = "")]
    watch_namespace: String,
    /// Reject namespace names that are not DNS-1123 labels
    #[arg(long)]
    validate_namespaces: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn render_text(opts: &RuntimeOptions) -> String {
    match &opts.cache.default_namespaces {
        None => "all namespaces".to_owned(),
        Some(map) if map.is_empty() => "no namespaces".to_owned(),
        Some(map) => {
            let mut names: Vec<&str> = map.keys().map(String::as_str).collect();
            names.sort_unstable();
            names.join("\n")
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let cfg = RuntimeConfig {
        watch_namespace: args.watch_namespace,
        validate_namespaces: args.validate_namespaces,
    };

    let opts = match build_runtime_options(&cfg, &CapabilityRegistry::with_core_kinds()) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Failed to build runtime options: {e}");
            std::process::exit(1);
        }
    };

    match args.format {
        Format::Text => println!("{}", render_text(&opts)),
        Format::Json => match serde_json::to_string_pretty(&opts) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode options: {e}");
                std::process::exit(1);
            }
        },
    }
}
