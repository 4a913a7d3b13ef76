#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "mxjson", about = "Precision-preserving JSON vectors and matrices")]
struct Cli {
	/// Log decode diagnostics to stderr (overridden by `RUST_LOG`).
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode wire-format JSON and print the container.
	Decode(cmd::decode::Args),
	/// Encode plain numeric arrays into wire-format JSON.
	Encode(cmd::encode::Args),
}

fn main() {
	let cli = Cli::parse();
	cmd::util::init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> cmd::util::Result<()> {
	match command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
	}
}
