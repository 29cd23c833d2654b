//! Print the OpenAPI document to stdout.
//!
//! ```text
//! openapi-dump          # pretty JSON
//! openapi-dump --yaml   # YAML
//! ```

use anyhow::Result;
use authors::server::ApiDoc;
use clap::Parser;
use utoipa::OpenApi;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the authors OpenAPI document",
    version
)]
struct Args {
    /// Emit YAML instead of pretty JSON
    #[arg(long, conflicts_with = "json")]
    yaml: bool,

    /// Emit pretty JSON (the default)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let doc = ApiDoc::openapi();
    let rendered = if args.yaml {
        doc.to_yaml()?
    } else {
        doc.to_pretty_json()?
    };

    println!("{rendered}");
    Ok(())
}
