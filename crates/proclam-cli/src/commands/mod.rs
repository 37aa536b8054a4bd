pub mod simulate;

use std::path::Path;

use serde::de::DeserializeOwned;

/// How predictions are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of rows.
    Json,
    /// One comma-separated line per item, no header.
    Csv,
}

/// Parse an output format string into the enum.
pub fn parse_format(s: &str) -> OutputFormat {
    match s {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => {
            eprintln!("Unknown output format '{s}', using json");
            OutputFormat::Json
        }
    }
}

/// Read and deserialize a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &str, what: &str) -> Result<T, String> {
    let contents = std::fs::read_to_string(Path::new(path))
        .map_err(|e| format!("failed to read {what} from {path}: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("failed to parse {what} in {path}: {e}"))
}

/// Render a prediction matrix in the requested format.
pub fn format_predictions(prediction: &[Vec<f64>], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(prediction)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| format!("failed to serialize predictions: {e}")),
        OutputFormat::Csv => {
            let mut out = String::new();
            for row in prediction {
                let line: Vec<String> = row.iter().map(|p| p.to_string()).collect();
                out.push_str(&line.join(","));
                out.push('\n');
            }
            Ok(out)
        }
    }
}
