use std::path::PathBuf;

use clap::Args;
use der::{Tag, Value};

use crate::error::Result;
use crate::output::{OutputFormat, format_nodes};
use crate::utils::{program_name, read_input, to_der};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the DER file (PEM armored files are unwrapped first)
    file: Option<PathBuf>,

    /// Everything after the path, flags included, is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Try to decode OCTET STRING content as nested DER
    #[arg(long)]
    parse_octets: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let Some(path) = config.file else {
        println!("usage: {} <der file>", program_name());
        return Ok(());
    };
    if !config.ignored.is_empty() {
        log::debug!("ignoring {} extra argument(s)", config.ignored.len());
    }

    let der_bytes = to_der(read_input(&path)?)?;
    let (tags, values) = decode(&der_bytes, config.parse_octets)?;

    print!("{}", format_nodes(&tags, &values, config.output)?);

    Ok(())
}

/// Walk every node of `der_bytes`. Nothing is returned unless the whole input decodes.
fn decode(der_bytes: &[u8], parse_octets: bool) -> Result<(Vec<Tag>, Vec<Value>)> {
    let mut state = der::start(der_bytes).nested_octets(parse_octets);
    let mut tags = Vec::new();
    let mut values = Vec::new();

    while let Some(node) = state.read()? {
        let (tag, value) = node.into_parts();
        tags.push(tag);
        values.push(value);
    }
    log::debug!("decoded {} nodes", tags.len());

    Ok((tags, values))
}
