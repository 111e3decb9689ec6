use actix_web::{web, App, HttpServer};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use clap::{value_parser, Arg, ArgMatches, Command};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hangman::models::AppState;
use hangman::services::catalog_loader::{builtin_catalog, load_catalog, Catalog};
use hangman::session::Session;
use hangman::{handlers, terminal};

const DEFAULT_LISTEN_HOST: &str = "0.0.0.0:2345";

// Function to initialize logging
fn init_logging(log_file: Option<&String>) -> io::Result<()> {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)?;

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
    Ok(())
}

fn cli() -> Command {
    Command::new("hangman")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ron Straight <straightre@gmail.com>")
        .about("Guess the word one letter at a time before the figure is complete")
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .num_args(1)
                .global(true)
                .help("JSON word/hint catalog to play from (defaults to the built-in F1 teams)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .num_args(1)
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Seed for word selection, for reproducible sessions"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .global(true)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .subcommand(Command::new("play").about("Play in the terminal (default)"))
        .subcommand(
            Command::new("serve")
                .about("Serve a single game session as JSON over HTTP")
                .arg(
                    Arg::new("listen-host")
                        .long("listen-host")
                        .num_args(1)
                        .default_value(DEFAULT_LISTEN_HOST)
                        .help("Specify the listen address (e.g., 0.0.0.0:2345)"),
                ),
        )
}

fn open_catalog(matches: &ArgMatches) -> io::Result<Catalog> {
    let result = match matches.get_one::<String>("catalog") {
        Some(path) => load_catalog(path),
        None => builtin_catalog(),
    };

    result.map_err(|e| {
        error!("Catalog rejected: {}", e);
        io::Error::new(io::ErrorKind::InvalidData, e)
    })
}

async fn serve(session: Session, listen_host: String) -> io::Result<()> {
    let shared_state = web::Data::new(AppState {
        session: Mutex::new(session),
    });

    info!("Listening on {}", listen_host);

    // One worker: the session is a single game, driven one event at a time
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .configure(handlers::configure)
    })
    .workers(1)
    .bind(&listen_host)?
    .run()
    .await
}

fn main() -> io::Result<()> {
    let matches = cli().get_matches();

    init_logging(matches.get_one::<String>("log-file"))?;

    let catalog = open_catalog(&matches)?;
    let rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => {
            info!("Using word selection seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(catalog, rng);

    match matches.subcommand() {
        Some(("serve", sub)) => {
            let listen_host = sub
                .get_one::<String>("listen-host")
                .cloned()
                .unwrap_or_else(|| DEFAULT_LISTEN_HOST.to_string());
            actix_web::rt::System::new().block_on(serve(session, listen_host))
        }
        _ => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            terminal::run(&mut session, stdin.lock(), &mut stdout)
        }
    }
}
