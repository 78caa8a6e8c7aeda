//! One-shot score adjustment: `curdle-score [OPTIONS] NAME DELTA`.
//!
//! Thin glue over [`curdle_store::adjust_score`]: argument parsing, tracing
//! subscriber setup, and exit-code mapping. All the design content lives in
//! the library crates.

use std::process::ExitCode;

use nix::unistd::Uid;
use tracing::error;
use tracing_subscriber::EnvFilter;

use curdle_store::{StoreConfig, adjust_score, store_owner};
use curdle_types::ScoreBounds;

const USAGE: &str = "usage: curdle-score [--store PATH] [--owner UID] [--permissive] [--json] NAME DELTA";

struct Args {
    store: Option<String>,
    owner: Option<u32>,
    permissive: bool,
    json: bool,
    name: String,
    delta: i64,
}

fn parse_args(mut args: std::env::Args) -> Result<Args, String> {
    // Skip argv[0].
    let _ = args.next();

    let mut store = None;
    let mut owner = None;
    let mut permissive = false;
    let mut json = false;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--store" => {
                store = Some(args.next().ok_or("--store requires a path")?);
            }
            "--owner" => {
                let raw = args.next().ok_or("--owner requires a uid")?;
                owner = Some(raw.parse().map_err(|_| format!("bad uid {raw:?}"))?);
            }
            "--permissive" => permissive = true,
            "--json" => json = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option {other:?}"));
            }
            _ => positional.push(arg),
        }
    }

    let [name, delta_text] = <[String; 2]>::try_from(positional)
        .map_err(|extra| format!("expected NAME and DELTA, got {} arguments", extra.len()))?;
    let delta = delta_text
        .parse()
        .map_err(|_| format!("delta {delta_text:?} is not an integer"))?;

    Ok(Args {
        store,
        owner,
        permissive,
        json,
        name,
        delta,
    })
}

fn run(args: &Args) -> curdle_error::Result<()> {
    let mut config = match &args.store {
        Some(path) => StoreConfig::new(path),
        None => StoreConfig::default(),
    };
    if args.permissive {
        config = config.with_bounds(ScoreBounds::PERMISSIVE);
    }

    let owner = match args.owner {
        Some(uid) => Uid::from_raw(uid),
        None => store_owner(config.path())?,
    };

    let outcome = adjust_score(&config, owner, &args.name, args.delta)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string(&outcome).unwrap_or_else(|_| String::from("{}"))
        );
    } else {
        println!("{}: {}", outcome.player, outcome.score);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "score adjustment failed");
            eprintln!("curdle-score: {err}");
            ExitCode::FAILURE
        }
    }
}
