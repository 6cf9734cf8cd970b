use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use common::types::{Payload, VertexId};

use crate::error::Error;

/// Writes one `v_id\t<rendered value>` line per vertex, in id order, after a
/// `v_id\t<column>` header. `render` turns a payload into the algorithm's
/// column text (e.g. `UNREACHED` becomes `"unreached"` for BFS, `"inf"` for
/// SSSP, and CC renders every value as a plain integer).
pub fn write_results<P: AsRef<Path>>(
    path: P,
    column: &str,
    values: impl Iterator<Item = (VertexId, Payload)>,
    render: impl Fn(Payload) -> String,
) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "v_id\t{column}")?;
    for (id, value) in values {
        writeln!(out, "{id}\t{}", render(value))?;
    }
    Ok(())
}

/// Renders BFS hop counts, with unreached vertices as `unreached`.
pub fn render_bfs(value: Payload) -> String {
    if value == common::types::UNREACHED {
        "unreached".to_string()
    } else {
        value.to_string()
    }
}

/// Renders SSSP distances, with unreached vertices as `inf`.
pub fn render_sssp(value: Payload) -> String {
    if value == common::types::UNREACHED {
        "inf".to_string()
    } else {
        value.to_string()
    }
}

/// Renders weakly-connected-component labels as plain integers.
pub fn render_cc(value: Payload) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::NamedTempFile;

    #[test]
    fn writes_header_and_rendered_rows() {
        let f = NamedTempFile::new().unwrap();
        write_results(
            f.path(),
            "level",
            vec![(0, 0), (1, common::types::UNREACHED)].into_iter(),
            render_bfs,
        )
        .unwrap();

        let mut contents = String::new();
        File::open(f.path())
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "v_id\tlevel\n0\t0\n1\tunreached\n");
    }
}
