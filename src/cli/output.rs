//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{HypernetArgs, OutputFormat};
use crate::error::Result;
use crate::wordnet::WordNetStats;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

/// Result of one digraph SAP query.
#[derive(Debug, Serialize, Deserialize)]
pub struct SapQueryResult {
    pub v: usize,
    pub w: usize,
    pub length: Option<usize>,
    pub ancestor: Option<usize>,
}

/// Result of a noun distance query.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub noun_a: String,
    pub noun_b: String,
    pub distance: Option<usize>,
    pub ancestor: Option<String>,
}

/// Outcast of one group file.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutcastResult {
    pub group: String,
    pub outcast: String,
}

/// Membership check for one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct NounCheck {
    pub word: String,
    pub is_noun: bool,
}

/// A (possibly truncated) noun listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct NounList {
    pub total: usize,
    pub nouns: Vec<String>,
}

/// Render `-1` for "no ancestral path", matching the classic text output.
fn or_sentinel(value: Option<usize>) -> String {
    value.map_or_else(|| "-1".to_string(), |v| v.to_string())
}

impl HumanOutput for SapQueryResult {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "length = {}, ancestor = {}",
            or_sentinel(self.length),
            or_sentinel(self.ancestor)
        )
    }
}

impl HumanOutput for DistanceResult {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match (&self.distance, &self.ancestor) {
            (Some(distance), Some(ancestor)) => {
                writeln!(out, "distance({}, {}) = {distance}", self.noun_a, self.noun_b)?;
                writeln!(out, "sap({}, {}) = {ancestor}", self.noun_a, self.noun_b)
            }
            _ => writeln!(
                out,
                "{} and {} have no common ancestor",
                self.noun_a, self.noun_b
            ),
        }
    }
}

impl HumanOutput for OutcastResult {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}: {}", self.group, self.outcast)
    }
}

impl HumanOutput for NounCheck {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let verdict = if self.is_noun { "noun" } else { "not a noun" };
        writeln!(out, "{}: {verdict}", self.word)
    }
}

impl HumanOutput for NounList {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for noun in &self.nouns {
            writeln!(out, "{noun}")?;
        }
        if self.nouns.len() < self.total {
            writeln!(out, "... {} more", self.total - self.nouns.len())?;
        }
        Ok(())
    }
}

impl HumanOutput for WordNetStats {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Dictionary Statistics:")?;
        writeln!(out, "══════════════════════")?;
        writeln!(out, "Synsets:        {}", self.synsets)?;
        writeln!(out, "Hypernym edges: {}", self.hypernym_edges)?;
        writeln!(out, "Nouns:          {}", self.nouns)?;
        writeln!(out, "Roots:          {}", self.roots)
    }
}

impl<T: HumanOutput> HumanOutput for Vec<T> {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in self {
            item.write_human(out)?;
        }
        Ok(())
    }
}

/// Output a result to stdout in the format selected on the command line.
pub fn output_result<T>(message: &str, result: &T, args: &HypernetArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Write a result to `out` in the format selected on the command line.
pub fn write_result<T, W>(out: &mut W, message: &str, result: &T, args: &HypernetArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    write_header(out, message, args)?;
    write_item(out, result, args)
}

/// Write the heading shown above human output at `-vv` and higher.
pub fn write_header<W: Write>(out: &mut W, message: &str, args: &HypernetArgs) -> Result<()> {
    if matches!(args.output_format, OutputFormat::Human) && args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write one result without a heading. JSON results take one line each
/// unless `--pretty` is set.
pub fn write_item<T, W>(out: &mut W, result: &T, args: &HypernetArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            if args.pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> HypernetArgs {
        let mut argv = vec!["hypernet"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["stats", "s", "h"]);
        HypernetArgs::try_parse_from(argv).unwrap()
    }

    fn render<T: Serialize + HumanOutput>(result: &T, args: &HypernetArgs) -> String {
        let mut out = Vec::new();
        write_result(&mut out, "message", result, args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_sap_human_output() {
        let found = SapQueryResult {
            v: 3,
            w: 11,
            length: Some(4),
            ancestor: Some(1),
        };
        assert_eq!(render(&found, &args(&[])), "length = 4, ancestor = 1\n");

        let missing = SapQueryResult {
            v: 1,
            w: 6,
            length: None,
            ancestor: None,
        };
        assert_eq!(render(&missing, &args(&[])), "length = -1, ancestor = -1\n");
    }

    #[test]
    fn test_json_output() {
        let missing = SapQueryResult {
            v: 1,
            w: 6,
            length: None,
            ancestor: None,
        };
        assert_eq!(
            render(&missing, &args(&["--format", "json"])),
            "{\"v\":1,\"w\":6,\"length\":null,\"ancestor\":null}\n"
        );
    }

    #[test]
    fn test_verbose_prints_message() {
        let result = OutcastResult {
            group: "outcast5.txt".to_string(),
            outcast: "table".to_string(),
        };
        assert_eq!(render(&result, &args(&[])), "outcast5.txt: table\n");
        assert_eq!(
            render(&result, &args(&["-vv"])),
            "message\n\noutcast5.txt: table\n"
        );
    }

    #[test]
    fn test_noun_list_truncation() {
        let list = NounList {
            total: 5,
            nouns: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(render(&list, &args(&[])), "a\nb\n... 3 more\n");
    }
}
