//! Gruppierung disjunkter Pfad-Fragmente nach Berührung (Zusammenhangskomponenten).
//!
//! Union-Find mit Pfadkompression und Union-by-Rank; Kandidatenpaare kommen
//! aus einem Sweep über die x-sortierten Begrenzungsrechtecke.

use indexmap::IndexMap;

use crate::core::{touches, Bounds, Path, Polyline};

/// Disjunkte Mengen über Indizes `0..n`.
#[derive(Debug, Clone)]
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Pfadkompression
        let mut current = index;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Vereinigt die Mengen von `a` und `b`. `false` wenn sie schon gleich waren.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] = self.rank[root_a].saturating_add(1);
            }
        }
        true
    }
}

/// Partitioniert `paths` in Zusammenhangskomponenten und liefert Indizes.
///
/// Gruppen erscheinen in der Reihenfolge ihres ersten Mitglieds, innerhalb
/// einer Gruppe bleibt die Eingabereihenfolge erhalten.
pub fn group_indices(paths: &[Path]) -> Vec<Vec<usize>> {
    let bounds: Vec<Bounds> = paths.iter().map(Path::bounds).collect();
    let mut sweep_order: Vec<usize> = (0..paths.len()).collect();
    sweep_order.sort_by(|&a, &b| {
        bounds[a]
            .min
            .x
            .total_cmp(&bounds[b].min.x)
            .then(a.cmp(&b))
    });

    let mut sets = DisjointSet::new(paths.len());
    for (position, &i) in sweep_order.iter().enumerate() {
        for &j in &sweep_order[position + 1..] {
            if bounds[j].min.x > bounds[i].max.x {
                break;
            }
            if sets.find(i) == sets.find(j) || !bounds[i].intersects(&bounds[j]) {
                continue;
            }
            if touches(&paths[i], &paths[j]) {
                sets.union(i, j);
            }
        }
    }

    let mut groups: IndexMap<usize, Vec<usize>> = IndexMap::new();
    for index in 0..paths.len() {
        groups.entry(sets.find(index)).or_default().push(index);
    }
    log::debug!(
        "{} Fragmente in {} zusammenhängende Gruppen eingeteilt",
        paths.len(),
        groups.len()
    );
    groups.into_values().collect()
}

/// Partitioniert `paths` in Gruppen, deren Mitglieder sich (transitiv) berühren.
pub fn group_by_connectivity(paths: &[Path]) -> Vec<Vec<Path>> {
    group_indices(paths)
        .into_iter()
        .map(|group| group.into_iter().map(|i| paths[i].clone()).collect())
        .collect()
}

/// Macht aus jeder Gruppe eine mehrteilige Polylinie (Mitglieder als Parts).
pub fn merge_groups(groups: Vec<Vec<Path>>) -> Vec<Polyline> {
    groups.into_iter().map(Polyline::new).collect()
}
