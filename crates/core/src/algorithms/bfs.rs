use common::error::Error;
use common::types::{Payload, VertexId, UNREACHED};

use crate::program::{Initializer, VertexProgram};
use crate::vertex::Vertex;

/// Breadth-first search: a vertex's value is its hop count from `source`,
/// ignoring edge weights.
pub struct Bfs;

impl VertexProgram<Payload> for Bfs {
    fn process_message(&self, current: Payload, incoming: Payload) -> Payload {
        incoming.min(current)
    }

    fn send_message(&self, current: Payload, _edge_weight: i32) -> Payload {
        current + 1
    }
}

/// Seeds `source` at hop 0 and active, every other vertex unreached and
/// inactive.
pub struct BfsInit {
    pub source: VertexId,
}

impl Initializer<Payload> for BfsInit {
    fn validate(&self, num_vertices: usize) -> Result<(), Error> {
        if self.source >= num_vertices {
            return Err(Error::SourceOutOfRange {
                src: self.source,
                num_vertices,
            });
        }
        Ok(())
    }

    fn seed(&self, vertices: &mut [Vertex<Payload>]) {
        for v in vertices.iter_mut() {
            if v.id == self.source {
                v.value = 0;
                v.active = true;
            } else {
                v.value = UNREACHED;
                v.active = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_message_keeps_the_smaller_hop_count() {
        assert_eq!(Bfs.process_message(5, 3), 3);
        assert_eq!(Bfs.process_message(3, 5), 3);
    }

    #[test]
    fn send_message_adds_one_hop_regardless_of_weight() {
        assert_eq!(Bfs.send_message(4, 100), 5);
        assert_eq!(Bfs.send_message(4, 0), 5);
    }
}
