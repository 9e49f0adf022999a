//! Writes the GraphQL schema SDL for frontend tooling.

use std::path::PathBuf;

use clap::Parser;
use todo_relay_lib::graphql::schema_sdl;

#[derive(Parser, Debug)]
#[command(name = "update-schema")]
#[command(about = "Write the GraphQL schema of the todo server")]
struct Args {
    /// Output file
    #[arg(default_value = "schema.graphql", value_name = "PATH")]
    output: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    std::fs::write(&args.output, schema_sdl())?;
    println!("Wrote schema to {}", args.output.display());
    Ok(())
}
