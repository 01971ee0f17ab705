//! End-to-end dictionary scenarios over relation files on disk.

use std::fs;
use std::path::PathBuf;

use hypernet::prelude::*;
use tempfile::TempDir;

const SYNSETS: &str = "\
0,entity,that which exists
1,animal animate_being beast,a living organism
2,mammal mammalian,warm-blooded vertebrate
3,equine equid,hoofed mammals
4,horse Equus_caballus,solid-hoofed herbivorous quadruped
5,zebra,striped equine
6,feline felid,cats
7,cat true_cat,feline mammal
8,bear,massive plantigrade carnivore
9,artifact artefact,a man-made object
10,furniture piece_of_furniture,furnishings
11,table,a piece of furniture
12,mesa table,flat-topped hill
13,natural_elevation elevation,a raised mass of land
14,geological_formation formation,natural phenomenon
";

const HYPERNYMS: &str = "\
1,0
2,1
3,2
4,3
5,3
6,2
7,6
8,2
9,0
10,9
11,10
12,13
13,14
14,0
";

struct Fixture {
    _dir: TempDir,
    synsets: PathBuf,
    hypernyms: PathBuf,
}

fn fixture(synsets: &str, hypernyms: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let synsets_path = dir.path().join("synsets.txt");
    let hypernyms_path = dir.path().join("hypernyms.txt");
    fs::write(&synsets_path, synsets).unwrap();
    fs::write(&hypernyms_path, hypernyms).unwrap();
    Fixture {
        _dir: dir,
        synsets: synsets_path,
        hypernyms: hypernyms_path,
    }
}

fn open(fixture: &Fixture) -> Result<WordNet> {
    WordNet::open(&fixture.synsets, &fixture.hypernyms)
}

#[test]
fn test_open_and_query() -> Result<()> {
    let files = fixture(SYNSETS, HYPERNYMS);
    let wordnet = open(&files)?;

    assert_eq!(wordnet.synset_count(), 15);
    assert_eq!(wordnet.hypernym_graph().edge_count(), 14);
    assert!(wordnet.is_noun("Equus_caballus"));
    assert!(!wordnet.is_noun("unicorn"));

    assert_eq!(wordnet.distance("horse", "zebra")?, Some(2));
    assert_eq!(wordnet.sap("horse", "zebra")?, Some("equine equid"));
    assert_eq!(wordnet.distance("cat", "bear")?, Some(3));
    assert_eq!(wordnet.sap("cat", "bear")?, Some("mammal mammalian"));
    assert_eq!(wordnet.gloss(5), Some("striped equine"));

    Ok(())
}

#[test]
fn test_polysemous_table() -> Result<()> {
    let files = fixture(SYNSETS, HYPERNYMS);
    let wordnet = open(&files)?;

    // "table" is furniture (11) and a mesa (12)
    assert_eq!(wordnet.synsets_of("table"), Some(&[11, 12][..]));
    assert_eq!(wordnet.distance("table", "artifact")?, Some(2));
    assert_eq!(wordnet.distance("table", "formation")?, Some(2));
    assert_eq!(wordnet.sap("table", "elevation")?, Some("natural_elevation elevation"));

    Ok(())
}

#[test]
fn test_distance_properties() -> Result<()> {
    let files = fixture(SYNSETS, HYPERNYMS);
    let wordnet = open(&files)?;
    let nouns: Vec<&str> = wordnet.nouns().collect();

    for &a in &nouns {
        assert_eq!(wordnet.distance(a, a)?, Some(0));
        for &b in &nouns {
            assert_eq!(wordnet.distance(a, b)?, wordnet.distance(b, a)?);
        }
    }

    Ok(())
}

#[test]
fn test_nouns_are_sorted_and_stable() -> Result<()> {
    let files = fixture(SYNSETS, HYPERNYMS);
    let wordnet = open(&files)?;

    let first: Vec<&str> = wordnet.nouns().collect();
    let second: Vec<&str> = wordnet.nouns().collect();
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(first, sorted);
    assert_eq!(wordnet.noun_count(), first.len());

    Ok(())
}

#[test]
fn test_outcast() -> Result<()> {
    let files = fixture(SYNSETS, HYPERNYMS);
    let wordnet = open(&files)?;
    let outcast = Outcast::new(&wordnet);

    assert_eq!(
        outcast.outcast(&["horse", "zebra", "cat", "bear", "table"])?,
        "table"
    );
    assert_eq!(outcast.outcast(&["horse", "zebra", "artifact"])?, "artifact");

    Ok(())
}

#[test]
fn test_stats() -> Result<()> {
    let files = fixture(SYNSETS, HYPERNYMS);
    let stats = open(&files)?.stats();

    assert_eq!(stats.synsets, 15);
    assert_eq!(stats.hypernym_edges, 14);
    assert_eq!(stats.roots, 1);

    Ok(())
}

#[test]
fn test_cycle_aborts_construction() {
    let files = fixture("0,a\n1,b\n2,c\n3,d\n", "0,1\n1,2\n2,3\n2,0\n");
    let error = open(&files).unwrap_err();

    assert!(matches!(error, HypernetError::Graph(_)));
    assert!(error.is_construction_error());
}

#[test]
fn test_construction_errors() {
    let out_of_range = fixture("0,a\n1,b\n", "0,1\n1,7\n");
    assert!(matches!(open(&out_of_range), Err(HypernetError::Graph(_))));

    let root_out_of_range = fixture("0,a\n", "9\n");
    assert!(matches!(open(&root_out_of_range), Err(HypernetError::Graph(_))));

    let bad_id = fixture("0,a\nb,c\n", "");
    assert!(matches!(open(&bad_id), Err(HypernetError::Parse(_))));

    let bad_parent = fixture("0,a\n1,b\n", "0,one\n");
    assert!(matches!(open(&bad_parent), Err(HypernetError::Parse(_))));

    let missing = WordNet::open("/nonexistent/synsets.txt", "/nonexistent/hypernyms.txt");
    assert!(matches!(missing, Err(HypernetError::Io(_))));
}

#[test]
fn test_unknown_noun_leaves_dictionary_usable() -> Result<()> {
    let files = fixture(SYNSETS, HYPERNYMS);
    let wordnet = open(&files)?;

    let error = wordnet.distance("horse", "unicorn").unwrap_err();
    assert!(matches!(error, HypernetError::InvalidArgument(_)));
    assert!(!error.is_construction_error());

    assert_eq!(wordnet.distance("horse", "zebra")?, Some(2));

    Ok(())
}

#[test]
fn test_multiple_roots() -> Result<()> {
    let files = fixture("0,a\n1,b\n2,c\n3,d\n", "0,1\n2,3\n");
    let wordnet = open(&files)?;

    assert_eq!(wordnet.stats().roots, 2);
    assert_eq!(wordnet.distance("a", "b")?, Some(1));
    assert_eq!(wordnet.distance("a", "c")?, None);
    assert_eq!(wordnet.sap("a", "c")?, None);

    Ok(())
}

#[test]
fn test_strict_ids() {
    let files = fixture("0,a\n5,b\n", "");

    let lenient = WordNet::open_with_format(
        &files.synsets,
        &files.hypernyms,
        &RelationFormat::default(),
    );
    assert!(lenient.is_ok());

    let strict = WordNet::open_with_format(
        &files.synsets,
        &files.hypernyms,
        &RelationFormat::default().with_strict_ids(true),
    );
    assert!(matches!(strict, Err(HypernetError::Parse(_))));
}
