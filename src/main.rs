use std::io::{self, BufReader, BufWriter};
use std::net::TcpStream;
use std::path::PathBuf;

use clap::Parser;

use jtail::{load_defaults, Action, Filter, FilterSet, Pipeline, TailError};

#[derive(Parser)]
#[command(name = "jtail")]
#[command(about = "Tail JSON log events from a logstash TCP output")]
#[command(version)]
struct Args {
    /// What to do with the event stream
    #[arg(value_name = "ACTION")]
    action: Action,

    /// Logstash host (default: localhost, or the configured value)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Logstash TCP port (default: 9999, or the configured value)
    #[arg(short = 'P', long)]
    port: Option<u16>,

    /// Fields to display
    #[arg(short = 'f', long = "fields", value_name = "FIELD", num_args = 1..)]
    fields: Option<Vec<String>>,

    /// Include filter (OR), example: host=example.com
    #[arg(short = 'i', long = "include", value_name = "FILTER", num_args = 1..)]
    includes: Vec<Filter>,

    /// Exclude filter (OR, applied after include), example: severity=debug
    #[arg(short = 'x', long = "exclude", value_name = "FILTER", num_args = 1..)]
    excludes: Vec<Filter>,

    /// Display a single result and exit
    #[arg(short = 's', long)]
    single: bool,

    /// Config file with default host/port (also: $JTAIL_CONFIG)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let defaults = load_defaults(args.config.as_deref())?;
    let host = args.host.unwrap_or(defaults.host);
    let port = args.port.unwrap_or(defaults.port);

    let socket = TcpStream::connect((host.as_str(), port)).map_err(|source| {
        TailError::Connection {
            addr: format!("{}:{}", host, port),
            source,
        }
    })?;

    let input = BufReader::new(socket);
    let mut output = BufWriter::new(io::stdout());

    let pipeline = Pipeline::new(
        args.action,
        FilterSet::new(args.includes, args.excludes),
        args.fields,
        args.single,
    );
    pipeline.run(input, &mut output)?;

    Ok(())
}
