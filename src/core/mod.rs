// This file is the module declaration file for the `core` module. It
// declares the orchestration layer: configuration plus the three
// extraction entry points built on top of `crate::builders`.

// `aggregate` module:
// Folds an ordered worklist of extraction requests (modules, standalone
// tunable/boolean files, verbatim includes) into one `Document` wrapped in
// a single `<policy>` root.
pub mod aggregate;

// `config` module:
// Defines `ExtractConfig`, the explicit settings value (warnings flag, XML
// cache directory) threaded into every extractor call, with optional TOML
// loading.
pub mod config;

// `module` module:
// The per-module extractor. Scans an `.if` file with a two-state
// header/body machine, attaches comment blocks to the module summary or to
// individual interface/template declarations, then pulls in the paired
// `.te` file.
pub mod module;

// `tunables` module:
// The per-file tunable/boolean extractor, including the kind constraint
// enforcement and the optional per-file XML cache side channel.
pub mod tunables;
