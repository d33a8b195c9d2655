use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::builders::diagnostics::DiagnosticsSink;
use crate::builders::matchers::LineMatchers;
use crate::builders::nodes::{Document, Fragment};
use crate::core::config::ExtractConfig;
use crate::core::module::extract_module;
use crate::core::tunables::{KindConstraint, extract_tunables};

/// One unit of work for the aggregator.
///
/// Which files make up a policy tree is the caller's decision; this crate
/// performs no directory discovery of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Extract a module from `<base>.if` and `<base>.te`.
    Module(PathBuf),
    /// Extract a global tunable file; `gen_bool` statements in it are a
    /// fatal error.
    TunableFile(PathBuf),
    /// Extract a global boolean file; `gen_tunable` statements in it are a
    /// fatal error.
    BooleanFile(PathBuf),
    /// Include the file's content as pre-rendered markup, unexamined.
    Verbatim(PathBuf),
}

/// Runs every request in the given order and concatenates the results into
/// one document under a single `<policy>` root.
///
/// There is no deduplication and no cross-file validation; a name
/// documented twice across files appears twice. The only error that stops
/// the fold is the fatal kind mismatch from a constrained tunable/boolean
/// file.
pub fn build_document(
    requests: &[Request],
    config: &ExtractConfig,
    sink: &mut dyn DiagnosticsSink,
) -> Result<Document> {
    let matchers = LineMatchers::new()?;
    let mut fragments = Vec::new();

    for request in requests {
        match request {
            Request::Module(base) => {
                if let Some(module) = extract_module(base, config, &matchers, sink)? {
                    fragments.push(Fragment::Module(module));
                }
            }
            Request::TunableFile(path) => {
                let decls =
                    extract_tunables(path, KindConstraint::Tunable, config, &matchers, sink)?;
                fragments.push(Fragment::Tunables(decls));
            }
            Request::BooleanFile(path) => {
                let decls = extract_tunables(path, KindConstraint::Bool, config, &matchers, sink)?;
                fragments.push(Fragment::Tunables(decls));
            }
            Request::Verbatim(path) => match fs::read_to_string(path) {
                Ok(content) => fragments.push(Fragment::Verbatim(content)),
                Err(_) => sink.warning(&format!(
                    "cannot open file {} for read, assuming no data",
                    path.display()
                )),
            },
        }
    }

    Ok(Document { fragments })
}
