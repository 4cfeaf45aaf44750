use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use knx_property_types::generate_property_types;
use knx_property_types::generator::HeaderConfig;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate property_types.h from knx_master.xml", long_about = None)]
struct Cli {
    /// KNX master data XML file
    #[arg(value_name = "KNX_MASTER_XML")]
    knx_master: Option<Utf8PathBuf>,

    /// Macro name of the include guard
    #[arg(long, value_name = "NAME", default_value = "PROPERTY_TYPES_H")]
    include_guard: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let Some(path) = cli.knx_master else {
        eprintln!("error: missing path to knx_master.xml");
        std::process::exit(1);
    };

    let config = HeaderConfig {
        include_guard: cli.include_guard,
    };
    let header = generate_property_types(&path, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(header.as_bytes())
        .context("Failed to write header to stdout")?;
    stdout.flush()?;
    Ok(())
}
