//! Training data loading
//!
//! Reads the two labeled CSV datasets (safe URLs, scam URLs) and concatenates
//! them into a single labeled corpus. Any missing or malformed file is fatal:
//! the server must not start without its training data.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

/// Classification label for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Scam,
    Safe,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Scam => write!(f, "Scam"),
            Label::Safe => write!(f, "Safe"),
        }
    }
}

/// One training example: a URL with its ground-truth label.
#[derive(Debug, Clone)]
pub struct LabeledExample {
    pub url: String,
    pub label: Label,
}

/// Raw CSV row. Both dataset files carry `url` and `label` columns.
#[derive(Debug, Deserialize)]
struct Record {
    url: String,
    label: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Load both dataset files and concatenate them, safe rows first, preserving
/// the row order within each file.
pub fn load_corpus(
    safe_path: impl AsRef<Path>,
    scam_path: impl AsRef<Path>,
) -> Result<Vec<LabeledExample>, DatasetError> {
    let mut corpus = load_file(safe_path.as_ref())?;
    corpus.extend(load_file(scam_path.as_ref())?);
    Ok(corpus)
}

fn load_file(path: &Path) -> Result<Vec<LabeledExample>, DatasetError> {
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_examples(file).map_err(|source| DatasetError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Parse labeled examples out of CSV data. Any label other than `Scam` is
/// treated as safe, matching the binary target mapping used in training.
fn read_examples(reader: impl Read) -> Result<Vec<LabeledExample>, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut examples = Vec::new();

    for row in csv_reader.deserialize() {
        let record: Record = row?;
        let label = if record.label == "Scam" {
            Label::Scam
        } else {
            Label::Safe
        };
        examples.push(LabeledExample {
            url: record.url,
            label,
        });
    }

    Ok(examples)
}
