/// Identifier of a vertex, `0..num_vertices`.
pub type VertexId = usize;

/// The engine-visible message payload. Fixed to a 32-bit signed integer in
/// the reference configuration; the superstep engine (`bsp_engine_core`)
/// keeps this generic, but every shipped vertex program uses `Payload`.
pub type Payload = i32;

/// Sentinel meaning "no finite value reached yet" for BFS/SSSP distances,
/// rendered as `inf`/`unreached` by the output writer rather than as a number.
pub const UNREACHED: Payload = i32::MAX;

/// A raw edge as read from an edgelist: `(src, dst, weight)`.
pub type RawEdge = (VertexId, VertexId, i32);
