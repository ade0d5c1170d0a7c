//! Disjoint-set (union-find) forest with weighted union and path compression.

/// A collection of disjoint sets over the ids `0..n`. Sets only ever merge,
/// there is no way to split one again.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`.
    pub fn new(n: usize) -> UnionFind {
        UnionFind { parent: (0..n).collect(), size: vec![1; n], count: n }
    }

    /// Number of ids in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The canonical representative of the set containing `x`. Two ids are in
    /// the same set exactly when their representatives are equal.
    ///
    /// Compresses the path from `x` to the root along the way.
    pub fn find(&mut self, x: usize) -> usize {
        let p = self.parent[x];
        if p != x {
            let root = self.find(p);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// Merges the sets containing `a` and `b`, attaching the smaller tree
    /// under the larger. Returns `true` if they were in different sets.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (small, large) = if self.size[ra] < self.size[rb] { (ra, rb) } else { (rb, ra) };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_singletons() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.count(), 5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn empty_universe() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
    }

    #[test]
    fn union_merges() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(0, 2));
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn union_same_set_is_noop() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn connected_is_transitive() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(4, 5);
        assert!(uf.connected(0, 2));
        assert!(!uf.connected(2, 4));
        uf.union(2, 4);
        assert!(uf.connected(0, 5));
    }

    #[quickcheck]
    fn qc_count_tracks_merges(n: usize, ops: Vec<(usize, usize)>) -> bool {
        let n = n % 50 + 1;
        let mut uf = UnionFind::new(n);
        let mut merges = 0;
        for (a, b) in ops {
            if uf.union(a % n, b % n) {
                merges += 1;
            }
        }
        uf.count() == n - merges
    }

    #[quickcheck]
    fn qc_union_connects(n: usize, a: usize, b: usize) -> bool {
        let n = n % 50 + 1;
        let mut uf = UnionFind::new(n);
        uf.union(a % n, b % n);
        uf.connected(a % n, b % n)
    }

    #[quickcheck]
    fn qc_find_returns_a_root(n: usize, ops: Vec<(usize, usize)>, x: usize) -> bool {
        let n = n % 50 + 1;
        let mut uf = UnionFind::new(n);
        for (a, b) in ops {
            uf.union(a % n, b % n);
        }
        let root = uf.find(x % n);
        uf.find(root) == root
    }

    #[quickcheck]
    fn qc_roots_never_outnumber_ids(n: usize, ops: Vec<(usize, usize)>) -> bool {
        let n = n % 50 + 1;
        let mut uf = UnionFind::new(n);
        for (a, b) in ops {
            uf.union(a % n, b % n);
        }
        uf.count() >= 1 && uf.count() <= n
    }
}
