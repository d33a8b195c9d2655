// This file is the module declaration file for the `builders` module.
// It declares and makes public the building blocks the extraction passes
// are assembled from.

// `diagnostics` module:
// Defines the `DiagnosticsSink` trait and its two implementations, the
// `StderrSink` used by the command-line tool (which honors the warnings
// flag) and the `MemorySink` used by tests to capture warnings.
pub mod diagnostics;

// `matchers` module:
// This is a fundamental module that classifies single source lines. It
// holds the pre-compiled regular expressions recognizing annotation
// comments, `interface`/`template` headers and `gen_tunable`/`gen_bool`
// statements, plus the small kind enums the rest of the crate carries
// around.
pub mod matchers;

// `nodes` module:
// Defines the markup tree the extractors produce (`InterfaceDecl`,
// `TunableDecl`, `ModuleDoc`, `Fragment`, `Document`) and renders it into
// the line-oriented XML written to stdout and to the cache side channel.
pub mod nodes;
