//! Compares Array-of-Structs and Struct-of-Arrays layouts for the vertex
//! table, since the engine's design notes flag this as an open memory-layout
//! choice: a WRITE phase scan only ever reads `active` and `degree` for an
//! inactive majority, never touching `value`, which is exactly the shape
//! where SoA traversal is expected to beat AoS by skipping unread fields.

/// Array of Structs: one vertex's fields are contiguous.
pub struct VertexAos {
    pub value: i32,
    pub active: bool,
    pub degree: u32,
}

pub type VertexTableAos = Vec<VertexAos>;

/// Struct of Arrays: each field lives in its own contiguous array.
pub struct VertexTableSoa {
    pub value: Vec<i32>,
    pub active: Vec<bool>,
    pub degree: Vec<u32>,
}

impl From<VertexTableAos> for VertexTableSoa {
    fn from(aos: VertexTableAos) -> Self {
        let mut value = Vec::with_capacity(aos.len());
        let mut active = Vec::with_capacity(aos.len());
        let mut degree = Vec::with_capacity(aos.len());
        for v in aos {
            value.push(v.value);
            active.push(v.active);
            degree.push(v.degree);
        }
        VertexTableSoa {
            value,
            active,
            degree,
        }
    }
}

impl From<VertexTableSoa> for VertexTableAos {
    fn from(soa: VertexTableSoa) -> Self {
        soa.value
            .into_iter()
            .zip(soa.active)
            .zip(soa.degree)
            .map(|((value, active), degree)| VertexAos {
                value,
                active,
                degree,
            })
            .collect()
    }
}

pub const NUM_VERTICES: usize = 1_000_000;

/// Roughly one in eight vertices active, matching a sparsely-active
/// midpoint superstep rather than the dense seed/tail supersteps.
pub fn generate_benchmark_vertices_aos() -> VertexTableAos {
    (0..NUM_VERTICES)
        .map(|i| VertexAos {
            value: i as i32,
            active: i % 8 == 0,
            degree: (i % 16) as u32,
        })
        .collect()
}
