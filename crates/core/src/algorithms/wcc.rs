use common::error::Error;
use common::types::Payload;

use crate::program::{Initializer, VertexProgram};
use crate::vertex::Vertex;

/// Weakly connected components: a vertex's value converges on the smallest
/// vertex id reachable from it by treating every edge as undirected, which
/// only holds if the input graph is already symmetrized (the `preproc`
/// binary's final pipeline stage always symmetrizes its output).
pub struct Wcc;

impl VertexProgram<Payload> for Wcc {
    fn process_message(&self, current: Payload, incoming: Payload) -> Payload {
        incoming.min(current)
    }

    fn send_message(&self, current: Payload, _edge_weight: i32) -> Payload {
        current
    }
}

/// Seeds every vertex to its own id, active, so the first superstep
/// broadcasts every label once.
pub struct WccInit;

impl Initializer<Payload> for WccInit {
    fn validate(&self, _num_vertices: usize) -> Result<(), Error> {
        Ok(())
    }

    fn seed(&self, vertices: &mut [Vertex<Payload>]) {
        for v in vertices.iter_mut() {
            v.value = v.id as Payload;
            v.active = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_message_keeps_the_smaller_label() {
        assert_eq!(Wcc.process_message(5, 2), 2);
        assert_eq!(Wcc.process_message(2, 5), 2);
    }

    #[test]
    fn send_message_forwards_the_current_label_unchanged() {
        assert_eq!(Wcc.send_message(7, 3), 7);
    }
}
