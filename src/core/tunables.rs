use anyhow::{Result, bail};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::builders::diagnostics::DiagnosticsSink;
use crate::builders::matchers::{LineMatchers, TunableKind};
use crate::builders::nodes::{TunableDecl, render_tunables};
use crate::core::config::ExtractConfig;

/// Which statement kinds a declaration file is allowed to contain.
///
/// Global tunable files must hold only `gen_tunable` statements and global
/// boolean files only `gen_bool`; a module's own `.te` file may hold both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindConstraint {
    Tunable,
    Bool,
    Both,
}

impl KindConstraint {
    fn accepts(self, kind: TunableKind) -> bool {
        match self {
            KindConstraint::Both => true,
            KindConstraint::Tunable => kind == TunableKind::Tunable,
            KindConstraint::Bool => kind == TunableKind::Bool,
        }
    }
}

impl fmt::Display for KindConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindConstraint::Tunable => write!(f, "tunable"),
            KindConstraint::Bool => write!(f, "bool"),
            KindConstraint::Both => write!(f, "both"),
        }
    }
}

/// Extracts every documented tunable/boolean statement from one file.
///
/// A single forward pass accumulates annotation-comment payloads and
/// attaches the buffered block to the next `gen_tunable`/`gen_bool`
/// statement reached. Statements without preceding comments get an empty
/// body, without a warning. Comments left in the buffer at end of file
/// belong to nothing and are discarded with a warning.
///
/// A statement whose kind the `constraint` rejects is a fatal error: the
/// returned error aborts the whole run, and nothing is emitted for the
/// offending file.
///
/// A file that cannot be read yields a warning and an empty sequence. When
/// the configuration carries an output directory, the extracted sequence is
/// also serialized to `<dir>/<file name>.xml`; a failed write is only a
/// warning.
pub fn extract_tunables(
    path: &Path,
    constraint: KindConstraint,
    config: &ExtractConfig,
    matchers: &LineMatchers,
    sink: &mut dyn DiagnosticsSink,
) -> Result<Vec<TunableDecl>> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(_) => {
            sink.warning(&format!(
                "cannot open file {} for read, skipping",
                path.display()
            ));
            return Ok(Vec::new());
        }
    };

    let mut decls = Vec::new();
    let mut buffer: Vec<String> = Vec::new();

    for line in source.lines() {
        if let Some(payload) = matchers.match_comment(line) {
            buffer.push(payload);
            continue;
        }

        if let Some((kind, name, default_value)) = matchers.match_tunable(line) {
            if !constraint.accepts(kind) {
                bail!(
                    "{} statement in a {} file: {}",
                    kind,
                    constraint,
                    path.display()
                );
            }
            decls.push(TunableDecl {
                kind,
                name,
                default_value,
                body: std::mem::take(&mut buffer),
            });
        }
        // Anything else is ignored; buffered comments stay pending, so a
        // blank line between a comment block and its statement does not
        // break the attachment.
    }

    if !buffer.is_empty() {
        sink.warning(&format!(
            "orphan documentation comments at bottom of file {}",
            path.display()
        ));
    }

    if let Some(output_dir) = &config.output_dir {
        write_cache(output_dir, path, &decls, sink);
    }

    Ok(decls)
}

/// Serializes one file's extracted sequence to the cache directory,
/// independent of the value returned to the caller.
fn write_cache(
    output_dir: &Path,
    source_path: &Path,
    decls: &[TunableDecl],
    sink: &mut dyn DiagnosticsSink,
) {
    let Some(file_name) = source_path.file_name() else {
        return;
    };
    let mut cache_name = file_name.to_os_string();
    cache_name.push(".xml");
    let cache_path = output_dir.join(cache_name);

    if fs::write(&cache_path, render_tunables(decls)).is_err() {
        sink.warning(&format!(
            "cannot write to file {}, skipping creation",
            cache_path.display()
        ));
    }
}
