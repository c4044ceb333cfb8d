//! Graph construction and path resolution over the satellite network.
//!
//! Three operations, all working from live positions:
//! - `build_mst`: Kruskal's algorithm over obstacle-viable satellite pairs
//! - `find_path`: BFS returning the unique tree path between two satellites
//! - `reachable_from`: BFS collecting every satellite reachable in the tree
//!
//! The MST is recomputed from scratch on a fixed interval and entirely
//! replaces the previous edge set; nothing here patches a tree incrementally.

use std::collections::{HashMap, HashSet, VecDeque};

use super::bodies::BodyArena;
use super::geometry::{distance, is_blocked};
use super::types::{BodyId, Disc, Edge};
use super::union_find::UnionFind;

/// Build the minimum spanning tree over the given satellites.
///
/// Every unordered satellite pair whose connecting segment clears all
/// obstacle discs becomes a candidate edge weighted by current Euclidean
/// distance. Candidates are sorted ascending by weight (the sort is stable,
/// so ties fall back to enumeration order; which tied edge wins is
/// implementation-defined and not semantically significant) and merged with
/// union-find until `|satellites| - 1` edges are accepted.
///
/// A result with fewer edges is a valid snapshot of a disconnected viable
/// graph, not an error: satellites isolated by obstacles simply cannot route
/// anywhere until the geometry changes.
pub fn build_mst(satellites: &[BodyId], arena: &BodyArena, obstacles: &[Disc]) -> Vec<Edge> {
    let mut candidates = Vec::new();
    for i in 0..satellites.len() {
        for j in (i + 1)..satellites.len() {
            let p1 = arena.position_of(satellites[i]);
            let p2 = arena.position_of(satellites[j]);
            if is_blocked(&p1, &p2, obstacles) {
                continue;
            }
            candidates.push(Edge {
                a: satellites[i],
                b: satellites[j],
                weight: distance(&p1, &p2),
            });
        }
    }

    candidates.sort_by(|x, y| x.weight.total_cmp(&y.weight));

    let mut uf = UnionFind::with_elements(satellites.iter().copied());
    let mut mst = Vec::new();
    for edge in candidates {
        if uf.union(edge.a, edge.b) {
            mst.push(edge);
            if mst.len() + 1 == satellites.len() {
                break;
            }
        }
    }
    mst
}

/// Adjacency view over a flat edge list.
fn adjacency(edges: &[Edge]) -> HashMap<BodyId, Vec<BodyId>> {
    let mut adj: HashMap<BodyId, Vec<BodyId>> = HashMap::new();
    for edge in edges {
        adj.entry(edge.a).or_default().push(edge.b);
        adj.entry(edge.b).or_default().push(edge.a);
    }
    adj
}

/// Resolve the unique tree path from `start` to `end` over the MST edges.
///
/// Returns the node sequence from `start` to `end` inclusive, or an empty
/// sequence if `end` is unreachable in the current tree (disconnected, or
/// either endpoint absent from the edge set). `start == end` yields the
/// single-element path `[start]`.
pub fn find_path(start: BodyId, end: BodyId, edges: &[Edge]) -> Vec<BodyId> {
    if start == end {
        return vec![start];
    }

    let adj = adjacency(edges);
    if !adj.contains_key(&start) || !adj.contains_key(&end) {
        return Vec::new();
    }

    let mut came_from: HashMap<BodyId, BodyId> = HashMap::new();
    let mut visited: HashSet<BodyId> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == end {
            // Walk back through the predecessor map
            let mut path = vec![end];
            let mut node = end;
            while let Some(&previous) = came_from.get(&node) {
                path.push(previous);
                node = previous;
            }
            path.reverse();
            return path;
        }
        if let Some(neighbors) = adj.get(&current) {
            for &neighbor in neighbors {
                if visited.insert(neighbor) {
                    came_from.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }
    }

    Vec::new()
}

/// Collect every satellite reachable from `start` over the MST edges.
///
/// Same traversal mechanics as `find_path`, but gathering the whole reachable
/// set. The result includes `start` itself and is in BFS visit order, which
/// keeps destination selection deterministic under a seeded RNG.
pub fn reachable_from(start: BodyId, edges: &[Edge]) -> Vec<BodyId> {
    let adj = adjacency(edges);
    let mut visited: HashSet<BodyId> = HashSet::from([start]);
    let mut order = vec![start];
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = adj.get(&current) {
            for &neighbor in neighbors {
                if visited.insert(neighbor) {
                    order.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
    }

    order
}
