//! Command implementations for Hypernet CLI.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{HypernetError, Result};
use crate::graph::Digraph;
use crate::outcast::Outcast;
use crate::sap::Sap;
use crate::wordnet::{RelationFormat, WordNet};

/// Execute a CLI command.
pub fn execute_command(args: HypernetArgs) -> Result<()> {
    match &args.command {
        Command::Sap(sap_args) => run_sap(sap_args.clone(), &args),
        Command::Distance(distance_args) => run_distance(distance_args.clone(), &args),
        Command::Outcast(outcast_args) => run_outcast(outcast_args.clone(), &args),
        Command::Nouns(nouns_args) => run_nouns(nouns_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load the dictionary named by the relation arguments.
fn load_wordnet(relations: &RelationArgs) -> Result<WordNet> {
    let format = match &relations.relation_config {
        Some(path) => {
            debug!("Loading relation format from: {}", path.display());
            RelationFormat::load_from_file(path)?
        }
        None => RelationFormat::default(),
    };

    let start_time = Instant::now();
    let wordnet = WordNet::open_with_format(&relations.synsets, &relations.hypernyms, &format)?;
    info!(
        "Dictionary built in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(wordnet)
}

/// Parse whitespace-separated vertex pairs.
pub fn parse_vertex_pairs(text: &str) -> Result<Vec<(usize, usize)>> {
    let values = text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| HypernetError::parse(format!("invalid vertex '{token}'")))
        })
        .collect::<Result<Vec<_>>>()?;

    if values.len() % 2 != 0 {
        return Err(HypernetError::parse("vertex pairs: odd number of vertices"));
    }
    Ok(values.chunks(2).map(|pair| (pair[0], pair[1])).collect())
}

/// Turn a count of failed queries into the command's exit status.
fn check_failures(failed: usize, total: usize, what: &str) -> Result<()> {
    if failed > 0 {
        return Err(HypernetError::invalid_argument(format!(
            "{failed} of {total} {what} failed"
        )));
    }
    Ok(())
}

/// Answer SAP queries on a plain digraph.
fn run_sap(args: SapArgs, cli_args: &HypernetArgs) -> Result<()> {
    let graph = Digraph::open(&args.digraph)?;
    info!(
        "Loaded digraph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    let sap = Sap::from_graph(graph);

    let text = match &args.queries {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text)?;
            text
        }
    };
    let pairs = parse_vertex_pairs(&text)?;

    let failed = answer_sap_queries(
        &sap,
        &pairs,
        cli_args,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    check_failures(failed, pairs.len(), "queries")
}

/// Write the answer to each vertex pair as soon as it is computed. A pair
/// that fails is reported on `err` and the remaining pairs are still
/// answered. Returns the number of failed pairs.
pub fn answer_sap_queries<W: Write, E: Write>(
    sap: &Sap,
    pairs: &[(usize, usize)],
    cli_args: &HypernetArgs,
    out: &mut W,
    err: &mut E,
) -> Result<usize> {
    write_header(out, "Shortest ancestral paths", cli_args)?;

    let mut failed = 0;
    for &(v, w) in pairs {
        match sap.path(v, w) {
            Ok(path) => {
                let result = SapQueryResult {
                    v,
                    w,
                    length: path.map(|p| p.length),
                    ancestor: path.map(|p| p.ancestor),
                };
                write_item(out, &result, cli_args)?;
                out.flush()?;
            }
            Err(e) => {
                warn!("Query ({v}, {w}) failed: {e}");
                failed += 1;
                writeln!(err, "Error: ({v}, {w}): {e}")?;
            }
        }
    }
    Ok(failed)
}

/// Distance and shortest-ancestral-path synset of two nouns.
fn run_distance(args: DistanceArgs, cli_args: &HypernetArgs) -> Result<()> {
    let wordnet = load_wordnet(&args.relations)?;

    let path = wordnet.ancestral_path(&args.noun_a, &args.noun_b)?;
    let result = DistanceResult {
        distance: path.map(|p| p.length),
        ancestor: path
            .and_then(|p| wordnet.synset(p.ancestor))
            .map(str::to_string),
        noun_a: args.noun_a,
        noun_b: args.noun_b,
    };

    output_result("Noun distance", &result, cli_args)
}

/// Read the nouns of one group file.
pub fn read_group<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut nouns = Vec::new();
    for line in reader.lines() {
        nouns.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(nouns)
}

/// Outcast of every group file.
fn run_outcast(args: OutcastArgs, cli_args: &HypernetArgs) -> Result<()> {
    let wordnet = load_wordnet(&args.relations)?;
    let outcast = Outcast::new(&wordnet);

    let failed = answer_outcast_groups(
        &outcast,
        &args.groups,
        cli_args,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    check_failures(failed, args.groups.len(), "groups")
}

/// Write the outcast of each group file as soon as it is found. A group that
/// cannot be read or contains an unknown noun is reported on `err` and the
/// remaining groups are still answered. Returns the number of failed groups.
pub fn answer_outcast_groups<W: Write, E: Write>(
    outcast: &Outcast<'_>,
    groups: &[PathBuf],
    cli_args: &HypernetArgs,
    out: &mut W,
    err: &mut E,
) -> Result<usize> {
    write_header(out, "Outcasts", cli_args)?;

    let mut failed = 0;
    for group in groups {
        let answer = read_group(group).and_then(|nouns| {
            debug!("Group {}: {} nouns", group.display(), nouns.len());
            outcast.outcast(&nouns)
        });
        match answer {
            Ok(noun) => {
                let result = OutcastResult {
                    group: group.to_string_lossy().to_string(),
                    outcast: noun,
                };
                write_item(out, &result, cli_args)?;
                out.flush()?;
            }
            Err(e) => {
                warn!("Group {} failed: {e}", group.display());
                failed += 1;
                writeln!(err, "Error: {}: {e}", group.display())?;
            }
        }
    }
    Ok(failed)
}

/// List nouns, or check whether words are nouns.
fn run_nouns(args: NounsArgs, cli_args: &HypernetArgs) -> Result<()> {
    let wordnet = load_wordnet(&args.relations)?;

    if !args.check.is_empty() {
        let checks: Vec<NounCheck> = args
            .check
            .iter()
            .map(|word| NounCheck {
                word: word.clone(),
                is_noun: wordnet.is_noun(word),
            })
            .collect();
        return output_result("Noun membership", &checks, cli_args);
    }

    let limit = args.limit.unwrap_or(usize::MAX);
    let list = NounList {
        total: wordnet.noun_count(),
        nouns: wordnet.nouns().take(limit).map(str::to_string).collect(),
    };
    output_result("Nouns", &list, cli_args)
}

/// Show dictionary statistics.
fn show_stats(args: StatsArgs, cli_args: &HypernetArgs) -> Result<()> {
    let wordnet = load_wordnet(&args.relations)?;
    output_result("Dictionary statistics", &wordnet.stats(), cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;
    use tempfile::{NamedTempFile, TempDir};

    fn cli_args(extra: &[&str]) -> HypernetArgs {
        let mut argv = vec!["hypernet"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["stats", "s", "h"]);
        HypernetArgs::try_parse_from(argv).unwrap()
    }

    fn animals() -> WordNet {
        WordNet::from_readers(
            Cursor::new("0,animal\n1,equine\n2,horse\n3,zebra\n4,cat\n"),
            Cursor::new("1,0\n2,1\n3,1\n4,0\n"),
            &RelationFormat::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_vertex_pairs() {
        let pairs = parse_vertex_pairs("3 11\n9 12\n7\t2\n").unwrap();
        assert_eq!(pairs, vec![(3, 11), (9, 12), (7, 2)]);

        assert!(parse_vertex_pairs("").unwrap().is_empty());
        assert!(matches!(
            parse_vertex_pairs("1 2 3"),
            Err(HypernetError::Parse(_))
        ));
        assert!(matches!(
            parse_vertex_pairs("1 x"),
            Err(HypernetError::Parse(_))
        ));
    }

    #[test]
    fn test_read_group() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "horse zebra cat").unwrap();
        writeln!(file, "bear\ttable").unwrap();

        let nouns = read_group(file.path()).unwrap();
        assert_eq!(nouns, vec!["horse", "zebra", "cat", "bear", "table"]);
    }

    #[test]
    fn test_load_wordnet_with_format() {
        let mut synsets = NamedTempFile::new().unwrap();
        write!(synsets, "0;a b\n1;c\n").unwrap();
        let mut hypernyms = NamedTempFile::new().unwrap();
        write!(hypernyms, "0;1\n").unwrap();
        let mut config = NamedTempFile::new().unwrap();
        write!(config, r#"{{"field_delimiter": ";"}}"#).unwrap();

        let relations = RelationArgs {
            synsets: synsets.path().to_path_buf(),
            hypernyms: hypernyms.path().to_path_buf(),
            relation_config: Some(config.path().to_path_buf()),
        };
        let wordnet = load_wordnet(&relations).unwrap();
        assert_eq!(wordnet.distance("b", "c").unwrap(), Some(1));
    }

    #[test]
    fn test_sap_queries_continue_after_failure() {
        let sap = Sap::from_graph(Digraph::new(3, [(0, 2), (1, 2)]).unwrap());
        let mut out = Vec::new();
        let mut err = Vec::new();

        let failed = answer_sap_queries(
            &sap,
            &[(0, 1), (0, 9), (1, 2)],
            &cli_args(&[]),
            &mut out,
            &mut err,
        )
        .unwrap();

        assert_eq!(failed, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "length = 2, ancestor = 2\nlength = 1, ancestor = 2\n"
        );
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Error: (0, 9):"), "{err}");
        assert!(err.contains("vertex 9"), "{err}");
    }

    #[test]
    fn test_sap_queries_json_lines() {
        let sap = Sap::from_graph(Digraph::new(3, [(0, 2)]).unwrap());
        let mut out = Vec::new();
        let mut err = Vec::new();

        let failed = answer_sap_queries(
            &sap,
            &[(0, 2), (1, 2)],
            &cli_args(&["--format", "json"]),
            &mut out,
            &mut err,
        )
        .unwrap();

        assert_eq!(failed, 0);
        assert!(err.is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"v\":0,\"w\":2,\"length\":1,\"ancestor\":2}\n\
             {\"v\":1,\"w\":2,\"length\":null,\"ancestor\":null}\n"
        );
    }

    #[test]
    fn test_outcast_groups_continue_after_failure() {
        let wordnet = animals();
        let outcast = Outcast::new(&wordnet);
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("g1.txt");
        let unknown = dir.path().join("g2.txt");
        let missing = dir.path().join("g3.txt");
        fs::write(&good, "horse zebra cat\n").unwrap();
        fs::write(&unknown, "horse unicorn\n").unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let failed = answer_outcast_groups(
            &outcast,
            &[good.clone(), unknown.clone(), missing.clone()],
            &cli_args(&[]),
            &mut out,
            &mut err,
        )
        .unwrap();

        assert_eq!(failed, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}: cat\n", good.display())
        );
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("unicorn"), "{err}");
        assert!(err.contains(&missing.display().to_string()), "{err}");
    }

    #[test]
    fn test_check_failures() {
        assert!(check_failures(0, 3, "queries").is_ok());
        match check_failures(1, 3, "queries") {
            Err(HypernetError::InvalidArgument(msg)) => assert_eq!(msg, "1 of 3 queries failed"),
            other => panic!("Expected invalid argument, got {other:?}"),
        }
    }
}
