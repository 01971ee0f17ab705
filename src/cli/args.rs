//! Command line argument parsing for Hypernet CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Hypernet - shortest ancestral paths over a WordNet-style hierarchy
#[derive(Parser, Debug, Clone)]
#[command(name = "hypernet")]
#[command(about = "Semantic distance and outcast detection over a synset hierarchy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Hypernet Contributors")]
#[command(long_about = None)]
pub struct HypernetArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HypernetArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Answer shortest ancestral path queries on a plain digraph
    Sap(SapArgs),

    /// Distance and common ancestor of two nouns
    Distance(DistanceArgs),

    /// Find the outcast of each group of nouns
    Outcast(OutcastArgs),

    /// List nouns or check membership
    Nouns(NounsArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// The two relation files every dictionary command loads
#[derive(Args, Debug, Clone)]
pub struct RelationArgs {
    /// Synset relation file
    #[arg(value_name = "SYNSETS")]
    pub synsets: PathBuf,

    /// Hypernym relation file
    #[arg(value_name = "HYPERNYMS")]
    pub hypernyms: PathBuf,

    /// Relation format file (JSON)
    #[arg(long, value_name = "FORMAT_FILE")]
    pub relation_config: Option<PathBuf>,
}

/// Arguments for digraph SAP queries
#[derive(Parser, Debug, Clone)]
pub struct SapArgs {
    /// Digraph file: vertex count, edge count, then one pair per edge
    #[arg(value_name = "DIGRAPH_FILE")]
    pub digraph: PathBuf,

    /// File of whitespace-separated vertex pairs (default: stdin)
    #[arg(long, value_name = "QUERY_FILE")]
    pub queries: Option<PathBuf>,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    #[command(flatten)]
    pub relations: RelationArgs,

    /// First noun
    #[arg(value_name = "NOUN_A")]
    pub noun_a: String,

    /// Second noun
    #[arg(value_name = "NOUN_B")]
    pub noun_b: String,
}

/// Arguments for the outcast command
#[derive(Parser, Debug, Clone)]
pub struct OutcastArgs {
    #[command(flatten)]
    pub relations: RelationArgs,

    /// Files of whitespace-separated nouns, one group per file
    #[arg(value_name = "GROUP_FILE", required = true)]
    pub groups: Vec<PathBuf>,
}

/// Arguments for the nouns command
#[derive(Parser, Debug, Clone)]
pub struct NounsArgs {
    #[command(flatten)]
    pub relations: RelationArgs,

    /// Check whether these words are nouns instead of listing all nouns
    #[arg(long = "check", value_name = "WORD")]
    pub check: Vec<String>,

    /// Maximum number of nouns to list
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub relations: RelationArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
