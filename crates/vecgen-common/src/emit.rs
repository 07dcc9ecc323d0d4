//! Output artifact assembly and persistence.
//!
//! The artifact is the verbatim template content, followed by the generated
//! test functions, followed by the call-site statements. Everything is
//! accumulated in memory and written in one terminal write, so a failed run
//! never leaves a partially assembled file behind.

use std::fs;
use std::path::Path;

use crate::error::GenError;

/// Merge template content with generated text, in artifact order.
pub fn merge_source(template: &str, test_funcs: &str, func_calls: &str) -> String {
    let mut output =
        String::with_capacity(template.len() + test_funcs.len() + func_calls.len());
    output.push_str(template);
    output.push_str(test_funcs);
    output.push_str(func_calls);
    output
}

/// Merge and write the artifact to `path`, overwriting any existing file.
pub fn write_source_file<P: AsRef<Path>>(
    path: P,
    template: &str,
    test_funcs: &str,
    func_calls: &str,
) -> Result<(), GenError> {
    let merged = merge_source(template, test_funcs, func_calls);
    fs::write(path, merged)?;
    Ok(())
}
