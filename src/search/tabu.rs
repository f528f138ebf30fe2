use std::collections::VecDeque;

use bit_set::BitSet;

use crate::color::VertexId;

/**
Bounded set of recently modified vertices. Vertices are evicted in insertion order
(FIFO) when the bound is exceeded.
The bitset answers membership queries, the queue keeps the insertion order; both
always contain the same vertices.
*/
#[derive(Debug, Clone)]
pub struct TabuList {
    /// vertices currently tabu
    members: BitSet,
    /// insertion order (front: oldest)
    queue: VecDeque<VertexId>,
    /// maximum number of tabu vertices
    bound: usize,
}

impl TabuList {
    /** creates an empty tabu list keeping at most `bound` vertices */
    pub fn new(bound:usize) -> Self {
        Self {
            members: BitSet::default(),
            queue: VecDeque::with_capacity(bound+1),
            bound,
        }
    }

    /** tabu bound used for a graph with n vertices: max(n/ratio, 1) */
    pub fn bound_for(n:usize, ratio:usize) -> usize {
        std::cmp::max(n / ratio, 1)
    }

    /// true iff v is tabu
    pub fn contains(&self, v:VertexId) -> bool { self.members.contains(v) }

    /// number of tabu vertices
    pub fn len(&self) -> usize { self.queue.len() }

    /// true iff no vertex is tabu
    pub fn is_empty(&self) -> bool { self.queue.is_empty() }

    /// maximum number of tabu vertices
    pub fn bound(&self) -> usize { self.bound }

    /// tabu vertices, oldest first
    pub fn iter(&self) -> impl Iterator<Item=&VertexId> { self.queue.iter() }

    /** makes v tabu (no-op if already tabu). Evicts the oldest vertex if the bound is exceeded. */
    pub fn push(&mut self, v:VertexId) {
        if !self.members.insert(v) { return; }
        self.queue.push_back(v);
        if self.queue.len() > self.bound {
            self.pop_oldest();
        }
    }

    /** removes and returns the oldest tabu vertex (None if the list is empty). */
    pub fn pop_oldest(&mut self) -> Option<VertexId> {
        let v = self.queue.pop_front()?;
        self.members.remove(v);
        Some(v)
    }
}
