use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::builders::diagnostics::DiagnosticsSink;
use crate::builders::matchers::LineMatchers;
use crate::builders::nodes::{DocBody, InterfaceDecl, ModuleDoc};
use crate::core::config::ExtractConfig;
use crate::core::tunables::{KindConstraint, extract_tunables};

/// Scanner state for the single forward pass over an `.if` file.
///
/// The comment buffer means different things in the two states: while
/// scanning the header it may still become the module-level summary, while
/// scanning the body it can only ever belong to the next declaration.
enum ScanState {
    /// Still inside the comment block at the very top of the file.
    Header,
    /// Past the first non-comment line.
    Body,
}

/// Extracts the documentation of one module.
///
/// The module is named by a base path `P`; its interface declarations are
/// read from `P.if` and its tunable/boolean statements from `P.te` (both
/// kinds are accepted there).
///
/// # Returns
/// `Result<Option<ModuleDoc>>`: `None`, after a warning, when the `.if`
/// file cannot be read (the paired `.te` file is not processed in that
/// case); an error only for the fatal conditions surfaced by the paired
/// declaration file.
pub fn extract_module(
    base: &Path,
    config: &ExtractConfig,
    matchers: &LineMatchers,
    sink: &mut dyn DiagnosticsSink,
) -> Result<Option<ModuleDoc>> {
    let if_path = companion_path(base, "if");
    let te_path = companion_path(base, "te");

    let source = match fs::read_to_string(&if_path) {
        Ok(source) => source,
        Err(_) => {
            sink.warning(&format!(
                "cannot open file {} for read, skipping",
                if_path.display()
            ));
            return Ok(None);
        }
    };

    let mut module = ModuleDoc {
        name: base
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
        filename: if_path.display().to_string(),
        header: Vec::new(),
        interfaces: Vec::new(),
        tunables: Vec::new(),
    };

    let lines: Vec<&str> = source.lines().collect();
    // Purely-whitespace lines at the very start precede any meaningful
    // content; line numbers count from the first retained line.
    let start = lines
        .iter()
        .take_while(|line| line.trim().is_empty())
        .count();

    let mut buffer: Vec<String> = Vec::new();
    let mut state = ScanState::Header;

    for (index, line) in lines[start..].iter().enumerate() {
        let lineno = index + 1;

        if let ScanState::Header = state {
            if let Some(payload) = matchers.match_comment(line) {
                buffer.push(payload);
                continue;
            }
            // The first non-comment line ends the header. If it opens a
            // declaration the buffer belongs to that declaration and is
            // handled below; otherwise the buffer is the module summary.
            state = ScanState::Body;
            if matchers.match_interface(line).is_none() {
                if !buffer.is_empty() {
                    module.header = std::mem::take(&mut buffer);
                }
                continue;
            }
        }

        if line.trim().is_empty() {
            continue;
        }

        if let Some(payload) = matchers.match_comment(line) {
            buffer.push(payload);
            continue;
        }

        if let Some((kind, name)) = matchers.match_interface(line) {
            let body = if buffer.is_empty() {
                sink.warning(&format!("no documentation for {kind} {name}()"));
                DocBody::Missing
            } else {
                DocBody::Lines(std::mem::take(&mut buffer))
            };
            module.interfaces.push(InterfaceDecl {
                kind,
                name,
                lineno,
                body,
            });
            continue;
        }

        // Ordinary policy code. A buffered comment block cannot attach to
        // anything past it, so it is dropped without a warning.
        buffer.clear();
    }

    match state {
        // The file held nothing but its header comments.
        ScanState::Header => module.header = buffer,
        ScanState::Body => {
            if !buffer.is_empty() {
                sink.warning(&format!(
                    "orphan documentation comments at bottom of file {}",
                    if_path.display()
                ));
            }
        }
    }

    module.tunables = extract_tunables(&te_path, KindConstraint::Both, config, matchers, sink)?;

    Ok(Some(module))
}

/// Derives a companion file path by appending `.ext` to the module base
/// path, leaving any existing extension in place.
fn companion_path(base: &Path, ext: &str) -> PathBuf {
    let mut path = base.as_os_str().to_os_string();
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}
