//! # Reading of presolve options
//!
//! Options can be read from a TOML document with a single `[presolve]` table:
//!
//! ```toml
//! [presolve]
//! slack = "1/1000"
//! iteration_limit = 50
//! ```
//!
//! The slack is written as a string, such that it is read exactly. Integers are accepted as well.
//! Missing keys keep their default value.
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use num_traits::FromPrimitive;
use serde::Deserialize;

use crate::data::linear_program::model::options::Options;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef, Signed};
use crate::io::error::ImportError;

pub mod error;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsFile {
    #[serde(default)]
    presolve: PresolveTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
struct PresolveTable {
    #[serde(default)]
    slack: Option<Literal>,
    #[serde(default)]
    iteration_limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Literal {
    Integer(i64),
    Text(String),
}

/// Import presolve options from a file.
///
/// # Errors
///
/// When the file extension isn't `toml`, the file can't be read, its contents are not in the
/// expected shape or the slack is not a valid non negative number.
pub fn import_options<OF>(file_path: &Path) -> Result<Options<OF>, ImportError>
where
    OF: OrderedField + FromStr + FromPrimitive,
    OF::Err: Display,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    match file_path.extension().and_then(|extension| extension.to_str()) {
        Some("toml") => {
            let contents = fs::read_to_string(file_path)?;
            Options::from_toml_str(&contents)
        },
        Some(extension) => Err(ImportError::FileExtension(format!(
            "Could not recognise file extension \"{}\" of file: {:?}",
            extension, file_path,
        ))),
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }
}

impl<OF> Options<OF>
where
    OF: OrderedField + FromStr + FromPrimitive,
    OF::Err: Display,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Read options from the text of a TOML document.
    ///
    /// # Errors
    ///
    /// If the text is not valid TOML, contains unknown keys or holds an invalid slack.
    pub fn from_toml_str(text: &str) -> Result<Self, ImportError> {
        let file: OptionsFile = toml::from_str(text)?;
        let mut options = Self::default();

        if let Some(literal) = file.presolve.slack {
            options.slack = parse_slack(literal)?;
        }
        if let Some(limit) = file.presolve.iteration_limit {
            options.iteration_limit = Some(limit);
        }

        tracing::debug!(slack = %options.slack, iteration_limit = ?options.iteration_limit, "read presolve options");
        Ok(options)
    }
}

fn parse_slack<OF>(literal: Literal) -> Result<OF, ImportError>
where
    OF: OrderedField + FromStr + FromPrimitive,
    OF::Err: Display,
{
    let slack = match literal {
        Literal::Integer(value) => OF::from_i64(value).ok_or_else(|| ImportError::Slack {
            literal: value.to_string(),
            reason: "not representable".to_string(),
        })?,
        Literal::Text(text) => text.parse::<OF>().map_err(|error| ImportError::Slack {
            reason: error.to_string(),
            literal: text,
        })?,
    };

    if slack.is_negative() {
        Err(ImportError::NegativeSlack(slack.to_string()))
    } else {
        Ok(slack)
    }
}
