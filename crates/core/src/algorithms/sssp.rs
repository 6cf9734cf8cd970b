use common::error::Error;
use common::types::{Payload, VertexId, UNREACHED};

use crate::program::{Initializer, VertexProgram};
use crate::vertex::Vertex;

/// Single-source shortest paths: a vertex's value is its least-cost distance
/// from `source` over non-negative integer edge weights.
pub struct Sssp;

impl VertexProgram<Payload> for Sssp {
    fn process_message(&self, current: Payload, incoming: Payload) -> Payload {
        incoming.min(current)
    }

    fn send_message(&self, current: Payload, edge_weight: i32) -> Payload {
        current + edge_weight
    }
}

/// Seeds `source` at distance 0 and active, every other vertex unreached
/// (`i32::MAX`) and inactive.
pub struct SsspInit {
    pub source: VertexId,
}

impl Initializer<Payload> for SsspInit {
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
    fn process_message_keeps_the_shorter_distance() {
        assert_eq!(Sssp.process_message(10, 4), 4);
        assert_eq!(Sssp.process_message(4, 10), 4);
    }

    #[test]
    fn send_message_adds_the_edge_weight() {
        assert_eq!(Sssp.send_message(3, 7), 10);
    }
}
