//! # Small models
//!
//! Models that are small enough to check presolve results by enumerating candidate points.
use std::path::{Path, PathBuf};

use relp_presolve::data::linear_program::model::Model;
use relp_presolve::data::linear_program::model::options::Options;
use relp_presolve::data::number_types::rational::RationalBig;
use relp_presolve::io::import_options;
use tracing_subscriber::EnvFilter;

/// # Construction and presolving
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the options files are stored.
///
/// The path is relative to the project root folder.
fn options_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Read the options stored next to the tests.
///
/// # Arguments
///
/// * `name`: File name without extension.
fn options(name: &str) -> Options<RationalBig> {
    let path = options_file_directory().join(name).with_extension("toml");
    import_options(&path).unwrap()
}

fn empty_model(options_name: &str) -> Model<RationalBig> {
    Model::new(options(options_name))
}

/// Show presolve logging when running with `RUST_LOG=relp_presolve=trace`.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
