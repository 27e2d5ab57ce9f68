mod handlers;
mod router;
mod state;

use std::io::Write;

use clap::Parser;
use log::info;
use log::LevelFilter;

use crate::router::build_router;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// The address the server binds to.
    #[arg(long = "host", default_value = "127.0.0.1")]
    host: String,

    /// The port the server listens on.
    #[arg(short = 'p', long = "port", default_value_t = 5000)]
    port: u16,

    /// Enables log message output from the solver
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    configure_logging(args.verbose);

    let state = AppState::default();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!("listening on {}:{}", args.host, args.port);

    axum::serve(listener, router).await
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
}
