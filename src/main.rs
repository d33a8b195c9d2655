use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use policy_docgen::builders::diagnostics::StderrSink;
use policy_docgen::builders::matchers::LineMatchers;
use policy_docgen::builders::nodes::render_tunables;
use policy_docgen::core::config::ExtractConfig;
use policy_docgen::core::module::extract_module;
use policy_docgen::core::tunables::{KindConstraint, extract_tunables};

#[derive(Parser)]
#[command(name = "policy-docgen")]
#[command(about = "Generates XML documentation from annotated policy module sources")]
#[command(group = ArgGroup::new("target").required(true).multiple(false))]
struct Cli {
    /// Show warnings
    #[arg(short = 'w', long = "warn")]
    warn: bool,

    /// Base path of the module to process (reads <PATH>.if and <PATH>.te)
    #[arg(short = 'm', long = "module", value_name = "PATH", group = "target")]
    module: Option<PathBuf>,

    /// Global tunable file to process
    #[arg(short = 't', long = "tunable", value_name = "FILE", group = "target")]
    tunable: Option<PathBuf>,

    /// Global boolean file to process
    #[arg(short = 'b', long = "boolean", value_name = "FILE", group = "target")]
    boolean: Option<PathBuf>,

    /// Directory receiving a per-file XML cache of each processed
    /// tunable/boolean file
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// TOML file providing defaults for --warn and --output-dir
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ExtractConfig::load(path)?,
        None => ExtractConfig::default(),
    };
    if cli.warn {
        config.warn = true;
    }
    if cli.output_dir.is_some() {
        config.output_dir = cli.output_dir.clone();
    }

    let matchers = LineMatchers::new()?;
    let mut sink = StderrSink::new(config.warn);

    let output = if let Some(base) = &cli.module {
        match extract_module(base, &config, &matchers, &mut sink)? {
            Some(module) => module.render(),
            None => String::new(),
        }
    } else if let Some(path) = &cli.tunable {
        let decls = extract_tunables(path, KindConstraint::Tunable, &config, &matchers, &mut sink)?;
        render_tunables(&decls)
    } else if let Some(path) = &cli.boolean {
        let decls = extract_tunables(path, KindConstraint::Bool, &config, &matchers, &mut sink)?;
        render_tunables(&decls)
    } else {
        // The clap group guarantees one target is present.
        anyhow::bail!("no extraction target requested")
    };

    print!("{output}");
    Ok(())
}
