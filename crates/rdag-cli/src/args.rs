use std::path::PathBuf;

use clap::{Args, Parser};
use rdag_synth::ArtifactKind;

/// rdag-gen: dispatch-table and visitor source generator for librdag
///
/// Writes exactly one generated artifact per invocation.
#[derive(Debug, Parser)]
#[command(name = "rdag-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub artifact: ArtifactArgs,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Catalog file replacing the built-in reference catalogs
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Artifact selection. Exactly one flag must be given.
#[derive(Debug, Args)]
#[group(id = "artifact", required = true, multiple = false)]
pub struct ArtifactArgs {
    /// Runner class declarations
    #[arg(long = "runners-hh")]
    pub runners_hh: bool,

    /// Runner bodies for generated operations
    #[arg(long = "runners-cc")]
    pub runners_cc: bool,

    /// Dispatch base classes and dispatcher declaration
    #[arg(long = "dispatch-hh")]
    pub dispatch_hh: bool,

    /// Dispatch routing and runner registration
    #[arg(long = "dispatch-cc")]
    pub dispatch_cc: bool,

    /// Expression node class declarations
    #[arg(long = "expression-hh")]
    pub expression_hh: bool,

    /// Expression node class definitions
    #[arg(long = "expression-cc")]
    pub expression_cc: bool,

    /// OGNumeric conversion declarations
    #[arg(long = "numeric-hh")]
    pub numeric_hh: bool,

    /// OGNumeric conversion definitions
    #[arg(long = "numeric-cc")]
    pub numeric_cc: bool,

    /// C++ operation enumeration
    #[arg(long = "exprenum-hh")]
    pub exprenum_hh: bool,

    /// Java operation enumeration
    #[arg(long = "exprenum-java")]
    pub exprenum_java: bool,

    /// JSON operation manifest
    #[arg(long = "exprenum-json")]
    pub exprenum_json: bool,

    /// Terminal and expression construction table
    #[arg(long = "createexpr-cc")]
    pub createexpr_cc: bool,
}

impl ArtifactArgs {
    /// The selected artifact, if exactly one flag is set.
    pub fn selected(&self) -> Option<ArtifactKind> {
        let flags = [
            (self.runners_hh, ArtifactKind::RunnersHeader),
            (self.runners_cc, ArtifactKind::RunnersSource),
            (self.dispatch_hh, ArtifactKind::DispatchHeader),
            (self.dispatch_cc, ArtifactKind::DispatchSource),
            (self.expression_hh, ArtifactKind::ExpressionHeader),
            (self.expression_cc, ArtifactKind::ExpressionSource),
            (self.numeric_hh, ArtifactKind::NumericHeader),
            (self.numeric_cc, ArtifactKind::NumericSource),
            (self.exprenum_hh, ArtifactKind::ExprEnumHeader),
            (self.exprenum_java, ArtifactKind::ExprEnumJava),
            (self.exprenum_json, ArtifactKind::ExprEnumJson),
            (self.createexpr_cc, ArtifactKind::CreateExprSource),
        ];
        let mut chosen = flags.iter().filter(|(set, _)| *set).map(|&(_, kind)| kind);
        match (chosen.next(), chosen.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        }
    }
}

/// Default tracing filter for the requested verbosity.
pub fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
