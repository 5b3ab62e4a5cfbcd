//! Minimum spanning tree weight via Kruskal's algorithm.

/// Disjoint sets over `0..n` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of `v`'s set. Every node on the walked path is
    /// re-pointed at the root.
    pub fn find(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = v;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns `false` if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

/// Weight of a minimum spanning tree over vertices `0..vertex_count`.
///
/// `edges` are `(u, v, weight)`. Returns `None` when the edges do not connect
/// every vertex. Zero or one vertex needs no edges and weighs 0.
pub fn kruskal_weight(vertex_count: usize, mut edges: Vec<(usize, usize, usize)>) -> Option<usize> {
    if vertex_count <= 1 {
        return Some(0);
    }
    edges.sort_by_key(|&(_, _, weight)| weight);

    let mut sets = UnionFind::new(vertex_count);
    let mut accepted = 0;
    let mut total = 0;
    for (u, v, weight) in edges {
        if sets.union(u, v) {
            accepted += 1;
            total += weight;
            if accepted == vertex_count - 1 {
                return Some(total);
            }
        }
    }
    None
}
