use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use common::error::Error;
use common::types::VertexId;

use crate::buffer::IntBuffer;

/// A directed graph stored in compressed sparse row form.
///
/// `row_ptr[v]..row_ptr[v + 1]` indexes into `col_idx`/`edge_weight` for the
/// out-edges of vertex `v`. `row_ptr` always has `num_vertices() + 1`
/// entries; `col_idx` and `edge_weight` are parallel and have one entry per
/// edge.
///
/// Construction assumes the invariants preprocessing is responsible for
/// (vertex ids contiguous from 0, no self-loops, no duplicate edges within a
/// row) already hold. Violating them does not corrupt the arrays but yields
/// a CSR the engine was not designed to traverse meaningfully.
#[derive(Debug, Clone)]
pub struct GraphCsr {
    row_ptr: Vec<usize>,
    col_idx: Vec<VertexId>,
    edge_weight: Vec<i32>,
}

impl GraphCsr {
    pub fn num_vertices(&self) -> usize {
        self.row_ptr.len() - 1
    }

    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.col_idx[self.row_ptr[v]..self.row_ptr[v + 1]]
    }

    pub fn weights(&self, v: VertexId) -> &[i32] {
        &self.edge_weight[self.row_ptr[v]..self.row_ptr[v + 1]]
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.row_ptr[v + 1] - self.row_ptr[v]
    }

    pub fn offset_of(&self, v: VertexId) -> usize {
        self.row_ptr[v]
    }

    pub(crate) fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub(crate) fn col_idx(&self) -> &[VertexId] {
        &self.col_idx
    }

    pub(crate) fn edge_weight(&self) -> &[i32] {
        &self.edge_weight
    }

    /// Builds a CSR directly from already-validated parallel arrays. Used by
    /// tests and by [`Self::load_adjacency_list`].
    pub fn from_parts(row_ptr: Vec<usize>, col_idx: Vec<VertexId>, edge_weight: Vec<i32>) -> Self {
        debug_assert_eq!(col_idx.len(), edge_weight.len());
        Self {
            row_ptr,
            col_idx,
            edge_weight,
        }
    }

    /// Loads a graph from a sorted, tab-separated edgelist: one edge per
    /// line, `src\tdst` or `src\tdst\tweight` (weight defaults to 1 when
    /// omitted). Lines must be non-decreasing in `src`; vertex ids are
    /// assumed contiguous from 0, with the vertex count taken from the
    /// largest id seen on either side of any edge.
    ///
    /// A single streaming pass builds `row_ptr` by noticing each time `src`
    /// advances, then pads trailing sink-only vertices (those that only ever
    /// appear as a destination) with empty rows.
    pub fn load_edgelist<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut row_ptr = IntBuffer::new();
        let mut col_idx = IntBuffer::new();
        let mut edge_weight = IntBuffer::new();

        let mut last_src: Option<i64> = None;
        let mut max_dst: i64 = -1;
        let mut edge_count: i64 = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let src_s = fields.next().ok_or_else(|| malformed(line_no, line))?;
            let dst_s = fields.next().ok_or_else(|| malformed(line_no, line))?;
            let weight_s = fields.next();

            let src: i64 = src_s.parse().map_err(|_| malformed(line_no, line))?;
            let dst: i64 = dst_s.parse().map_err(|_| malformed(line_no, line))?;
            let weight: i64 = match weight_s {
                Some(w) => w.parse().map_err(|_| malformed(line_no, line))?,
                None => 1,
            };

            if src < 0 || dst < 0 || weight < 0 {
                return Err(Error::NegativeId {
                    line_no,
                    text: line.to_string(),
                });
            }

            if let Some(last) = last_src {
                if src < last {
                    return Err(Error::UnsortedSource {
                        line_no,
                        src: src as usize,
                        last_src: last as usize,
                    });
                }
            }

            if last_src != Some(src) {
                row_ptr.push(edge_count);
                last_src = Some(src);
            }

            col_idx.push(dst);
            edge_weight.push(weight);
            edge_count += 1;
            max_dst = max_dst.max(dst);
        }

        row_ptr.push(edge_count);

        if let Some(last) = last_src {
            let highest = last.max(max_dst);
            let mut v = last;
            while v < highest {
                v += 1;
                row_ptr.push(edge_count);
            }
        }

        Ok(Self {
            row_ptr: row_ptr.into_vec().into_iter().map(|x| x as usize).collect(),
            col_idx: col_idx.into_vec().into_iter().map(|x| x as usize).collect(),
            edge_weight: edge_weight.into_vec().into_iter().map(|x| x as i32).collect(),
        })
    }

    /// Loads a graph from the legacy adjacency-list format: one line per
    /// vertex, `vertex_id neighbor1 neighbor2 ...` separated by whitespace.
    /// Lines are assumed to appear in vertex-id order (the id field itself is
    /// read but not trusted as an index — the line's position in the file is
    /// the vertex id), and every out-edge is given weight 1 since this format
    /// predates weighted graphs.
    pub fn load_adjacency_list<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut row_ptr = vec![0usize];
        let mut col_idx = Vec::new();
        let mut edge_weight = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            fields.next().ok_or_else(|| malformed(line_no, line))?; // vertex id label, unused

            for tok in fields {
                let dst: i64 = tok.parse().map_err(|_| malformed(line_no, line))?;
                if dst < 0 {
                    return Err(Error::NegativeId {
                        line_no,
                        text: line.to_string(),
                    });
                }
                col_idx.push(dst as usize);
                edge_weight.push(1);
            }

            row_ptr.push(col_idx.len());
        }

        Ok(Self::from_parts(row_ptr, col_idx, edge_weight))
    }
}

fn malformed(line_no: usize, text: &str) -> Error {
    Error::MalformedLine {
        line_no,
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_simple_edgelist() {
        let f = write_temp("0\t1\t4\n0\t2\t1\n1\t2\t2\n");
        let g = GraphCsr::load_edgelist(f.path()).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.neighbors(0), &[1, 2]);
        assert_eq!(g.weights(0), &[4, 1]);
        assert_eq!(g.neighbors(1), &[2]);
        assert_eq!(g.neighbors(2), &[]);
    }

    #[test]
    fn defaults_unweighted_edges_to_one() {
        let f = write_temp("0\t1\n1\t2\n");
        let g = GraphCsr::load_edgelist(f.path()).unwrap();
        assert_eq!(g.weights(0), &[1]);
        assert_eq!(g.weights(1), &[1]);
    }

    #[test]
    fn pads_sink_only_trailing_vertices() {
        let f = write_temp("0\t2\n1\t2\n");
        let g = GraphCsr::load_edgelist(f.path()).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.degree(2), 0);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let f = write_temp("# comment\n0\t1\n\n1\t2\n");
        let g = GraphCsr::load_edgelist(f.path()).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn rejects_unsorted_source() {
        let f = write_temp("1\t2\n0\t1\n");
        let err = GraphCsr::load_edgelist(f.path()).unwrap_err();
        assert!(matches!(err, Error::UnsortedSource { .. }));
    }

    #[test]
    fn rejects_malformed_line() {
        let f = write_temp("0\tnotanumber\n");
        let err = GraphCsr::load_edgelist(f.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { .. }));
    }

    #[test]
    fn empty_file_yields_empty_graph() {
        let f = write_temp("");
        let g = GraphCsr::load_edgelist(f.path()).unwrap();
        assert_eq!(g.num_vertices(), 0);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn loads_adjacency_list() {
        let f = write_temp("0 1 2\n1 2\n2\n");
        let g = GraphCsr::load_adjacency_list(f.path()).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.neighbors(0), &[1, 2]);
        assert_eq!(g.neighbors(1), &[2]);
        assert_eq!(g.neighbors(2), &[]);
        assert!(g.weights(0).iter().all(|&w| w == 1));
    }
}
