use der::{Tag, Value};
use serde::Serialize;

use crate::error::Result;

#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// `([TAG, ...], [VALUE, ...])` on one line
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

#[derive(Serialize)]
struct Listing<'a> {
    tags: &'a [Tag],
    values: &'a [Value],
}

/// Render the decoded tags and values. Index `i` of both slices is the same node.
pub(crate) fn format_nodes(
    tags: &[Tag],
    values: &[Value],
    format: OutputFormat,
) -> Result<String> {
    let output = match format {
        OutputFormat::Text => format!("({}, {})\n", join(tags), join(values)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&Listing { tags, values })?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yml::to_string(&Listing { tags, values })?,
    };
    Ok(output)
}

fn join<T: ToString>(items: &[T]) -> String {
    let items = items.iter().map(T::to_string).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}
