//! wiredis CLI Client
//!
//! One-shot or interactive command-line client for RESP servers.

use std::io::{self, BufRead, Write};
use std::net::TcpStream;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wiredis::{Client, Config, ProtocolError};

/// wiredis CLI
#[derive(Parser, Debug)]
#[command(name = "wiredis-cli")]
#[command(about = "Command-line client for RESP servers")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:6379")]
    server: String,

    /// Command to run once; with no command an interactive prompt starts
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() {
    // Initialize tracing/logging (stderr, quiet unless RUST_LOG says otherwise)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::debug!("wiredis-cli v{}", wiredis::VERSION);
    tracing::debug!("Server address: {}", args.server);

    let config = Config::builder().addr(&args.server).build();

    let mut client = match Client::connect_with(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Could not connect to {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    if args.command.is_empty() {
        repl(&mut client);
    } else {
        run_once(&mut client, &args.command);
    }
}

/// Execute a single command given on the command line.
fn run_once(client: &mut Client<TcpStream>, words: &[String]) {
    match client.execute(words) {
        Ok(value) => println!("{}", value),
        Err(ProtocolError::Remote(msg)) => println!("(error) {}", msg),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Interactive prompt.
///
/// Server error replies and rejected input keep the session alive; transport
/// and decode errors end it, since the stream state is no longer known.
fn repl(client: &mut Client<TcpStream>) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("stdin error: {}", e);
                std::process::exit(1);
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        match client.execute_line(line) {
            Ok(value) => println!("{}", value),
            Err(ProtocolError::Remote(msg)) => println!("(error) {}", msg),
            Err(e @ (ProtocolError::EmptyCommand | ProtocolError::CommandTooLarge { .. })) => {
                println!("{}", e)
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
