use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;

/// Turns a raw, possibly messy edgelist into the sorted, deduplicated,
/// contiguously-relabeled, symmetrized form the engine's loader expects.
///
/// Mirrors the reference preprocessing pipeline's stage order exactly,
/// including a quirk worth calling out: duplicate edges and self-loops are
/// stripped *before* reverse-edge removal, so a `(u, v)` duplicate that is
/// also the reverse of some `(v, u)` only ever collides with the dedup
/// pass — by the time reverse-edge removal runs, each directed pair already
/// appears at most once.
///
/// Stages, in order:
/// 1. read lines, skipping blank lines and `#` comments
/// 2. remove duplicate `(src, dst)` pairs
/// 3. remove self-loops
/// 4. group into an adjacency map and remove reverse edges (drop `(v, u)`
///    whenever `(u, v)` was already kept)
/// 5. relabel vertex ids to a contiguous `0..n` range, scanning sources
///    first and then destination-only vertices
/// 6. optionally synthesize integer edge weights in `0..100`
/// 7. symmetrize: add the reverse of every edge (with matching weight, if
///    weighted), then sort by `(src, dst)`
pub fn preprocess<P: AsRef<Path>>(
    input_path: P,
    weighted: bool,
    seed: u64,
) -> Result<Vec<(usize, usize, i32)>, Error> {
    let raw = read_edgelist(input_path)?;
    let deduped: BTreeSet<(usize, usize)> = raw.into_iter().collect();
    let no_self_loops: BTreeSet<(usize, usize)> =
        deduped.into_iter().filter(|&(s, d)| s != d).collect();

    let adjacency = to_adjacency_map(no_self_loops);
    let adjacency = remove_reverse_edges(adjacency);
    let (adjacency, _relabel) = relabel_contiguous(adjacency);

    let edges = adjacency_to_edgelist(&adjacency);
    let weighted_edges = if weighted {
        add_weights(edges, seed)
    } else {
        edges.into_iter().map(|(s, d)| (s, d, 1)).collect()
    };

    let mut symmetrized = symmetrize(weighted_edges);
    symmetrized.sort();
    Ok(symmetrized)
}

pub fn write_edgelist<P: AsRef<Path>>(
    path: P,
    edges: &[(usize, usize, i32)],
) -> Result<(), Error> {
    let mut out = BufWriter::new(File::create(path)?);
    for &(s, d, w) in edges {
        writeln!(out, "{s}\t{d}\t{w}")?;
    }
    Ok(())
}

fn read_edgelist<P: AsRef<Path>>(path: P) -> Result<Vec<(usize, usize)>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut edges = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let malformed = || common::error::Error::MalformedLine {
            line_no,
            text: line.to_string(),
        };
        let src: usize = fields
            .next()
            .ok_or_else(malformed)?
            .parse()
            .map_err(|_| malformed())?;
        let dst: usize = fields
            .next()
            .ok_or_else(malformed)?
            .parse()
            .map_err(|_| malformed())?;
        edges.push((src, dst));
    }
    Ok(edges)
}

fn to_adjacency_map(edges: BTreeSet<(usize, usize)>) -> BTreeMap<usize, BTreeSet<usize>> {
    let mut adjacency: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for (src, dst) in edges {
        adjacency.entry(src).or_default().insert(dst);
    }
    adjacency
}

/// Drops `(v, u)` whenever `(u, v)` was already recorded, scanning sources
/// in ascending order so the lower-numbered direction always wins.
fn remove_reverse_edges(
    mut adjacency: BTreeMap<usize, BTreeSet<usize>>,
) -> BTreeMap<usize, BTreeSet<usize>> {
    let mut seen: BTreeSet<(usize, usize)> = BTreeSet::new();
    for (&src, dsts) in adjacency.iter() {
        for &dst in dsts {
            seen.insert((src, dst));
        }
    }
    for (&src, dsts) in adjacency.iter_mut() {
        dsts.retain(|&dst| src < dst || !seen.contains(&(dst, src)));
    }
    adjacency
}

fn relabel_contiguous(
    adjacency: BTreeMap<usize, BTreeSet<usize>>,
) -> (BTreeMap<usize, BTreeSet<usize>>, BTreeMap<usize, usize>) {
    let mut next_id = 0usize;
    let mut relabel: BTreeMap<usize, usize> = BTreeMap::new();

    for &src in adjacency.keys() {
        relabel.entry(src).or_insert_with(|| {
            let id = next_id;
            next_id += 1;
            id
        });
    }
    for dsts in adjacency.values() {
        for &dst in dsts {
            relabel.entry(dst).or_insert_with(|| {
                let id = next_id;
                next_id += 1;
                id
            });
        }
    }

    let mut relabeled: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for (src, dsts) in adjacency {
        let new_src = relabel[&src];
        let entry = relabeled.entry(new_src).or_default();
        for dst in dsts {
            entry.insert(relabel[&dst]);
        }
    }
    (relabeled, relabel)
}

fn adjacency_to_edgelist(adjacency: &BTreeMap<usize, BTreeSet<usize>>) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for (&src, dsts) in adjacency {
        for &dst in dsts {
            edges.push((src, dst));
        }
    }
    edges
}

fn add_weights(edges: Vec<(usize, usize)>, seed: u64) -> Vec<(usize, usize, i32)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    edges
        .into_iter()
        .map(|(s, d)| (s, d, rng.random_range(0..100)))
        .collect()
}

fn symmetrize(edges: Vec<(usize, usize, i32)>) -> Vec<(usize, usize, i32)> {
    let mut out = Vec::with_capacity(edges.len() * 2);
    for (s, d, w) in edges {
        out.push((s, d, w));
        out.push((d, s, w));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn dedups_self_loops_and_symmetrizes() {
        let f = write_temp("0 1\n1 0\n0 0\n0 1\n# comment\n\n1 2\n");
        let edges = preprocess(f.path(), false, 1).unwrap();
        // 0-1 collapses to one undirected pair, self-loop dropped, 1-2 kept.
        assert!(edges.contains(&(0, 1, 1)));
        assert!(edges.contains(&(1, 0, 1)));
        assert!(edges.contains(&(1, 2, 1)));
        assert!(edges.contains(&(2, 1, 1)));
        assert!(!edges.iter().any(|&(s, d, _)| s == d));
    }

    #[test]
    fn relabels_to_contiguous_ids() {
        let f = write_temp("5 9\n9 12\n");
        let edges = preprocess(f.path(), false, 1).unwrap();
        let max_id = edges.iter().flat_map(|&(s, d, _)| [s, d]).max().unwrap();
        assert!(max_id < 3);
    }

    #[test]
    fn weighted_reverse_edges_share_a_weight() {
        let f = write_temp("0 1\n");
        let edges = preprocess(f.path(), true, 42).unwrap();
        let forward = edges.iter().find(|&&(s, d, _)| s == 0 && d == 1).unwrap();
        let reverse = edges.iter().find(|&&(s, d, _)| s == 1 && d == 0).unwrap();
        assert_eq!(forward.2, reverse.2);
    }

    #[test]
    fn output_is_sorted() {
        let f = write_temp("2 0\n0 1\n1 2\n");
        let edges = preprocess(f.path(), false, 1).unwrap();
        let mut sorted = edges.clone();
        sorted.sort();
        assert_eq!(edges, sorted);
    }
}
