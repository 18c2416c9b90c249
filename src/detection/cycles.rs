//! Directed cycle detection in the dependency graph.
//!
//! # Algorithm
//! Depth-first search with an explicit work stack over arena indices
//! (task position in the input slice), so very deep dependency chains
//! cannot overflow the call stack.
//!
//! Each node is in one of three states:
//! - `Unvisited`: not yet reached.
//! - `OnPath`: on the current DFS path.
//! - `Done`: fully explored.
//!
//! Reaching an `OnPath` node closes a cycle: the path slice from that
//! node's position to the current node. A node becomes `Done` only when
//! all of its successors are explored, and the outer loop starts a fresh
//! search from every node still `Unvisited`, so every strongly connected
//! region containing a cycle yields at least one report even when its
//! nodes are shared with other cycles.
//!
//! Cycles are deduplicated by their sorted member ids, using the same
//! length-prefixed key as circular dependency conflict ids.
//!
//! # Complexity
//! O(V + E) traversal, plus O(n log n) per reported cycle of length n.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.3 (DFS edge classification)

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::models::{canonical_key, Conflict, Dependency, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    OnPath,
    Done,
}

/// Adjacency lists over task indices.
struct DependencyGraph {
    successors: Vec<Vec<usize>>,
}

impl DependencyGraph {
    /// Builds the graph; edges with an unknown endpoint are dropped.
    fn build(tasks: &[Task], dependencies: &[Dependency]) -> Self {
        let index: HashMap<&str, usize> = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();

        let mut successors = vec![Vec::new(); tasks.len()];
        for dep in dependencies {
            if let (Some(&from), Some(&to)) = (
                index.get(dep.from_task_id.as_str()),
                index.get(dep.to_task_id.as_str()),
            ) {
                successors[from].push(to);
            }
        }
        Self { successors }
    }

    /// Cycles as index sequences, in discovery order.
    fn cycles(&self) -> Vec<Vec<usize>> {
        let n = self.successors.len();
        let mut state = vec![VisitState::Unvisited; n];
        let mut path_pos: Vec<Option<usize>> = vec![None; n];
        let mut path: Vec<usize> = Vec::new();
        // (node, next successor cursor)
        let mut frames: Vec<(usize, usize)> = Vec::new();
        let mut found = Vec::new();

        for root in 0..n {
            if state[root] != VisitState::Unvisited {
                continue;
            }
            state[root] = VisitState::OnPath;
            path_pos[root] = Some(path.len());
            path.push(root);
            frames.push((root, 0));

            while let Some(&(node, cursor)) = frames.last() {
                let Some(&next) = self.successors[node].get(cursor) else {
                    frames.pop();
                    path.pop();
                    path_pos[node] = None;
                    state[node] = VisitState::Done;
                    continue;
                };
                if let Some(top) = frames.last_mut() {
                    top.1 += 1;
                }

                match state[next] {
                    VisitState::OnPath => {
                        if let Some(pos) = path_pos[next] {
                            found.push(path[pos..].to_vec());
                        }
                    }
                    VisitState::Unvisited => {
                        state[next] = VisitState::OnPath;
                        path_pos[next] = Some(path.len());
                        path.push(next);
                        frames.push((next, 0));
                    }
                    VisitState::Done => {}
                }
            }
        }

        found
    }
}

/// Finds distinct directed cycles as task-id sequences.
///
/// Each cycle starts at the node where it was re-entered and lists its
/// members in traversal order; the closing edge back to the first member
/// is implied. A self-dependency is a cycle of one.
pub fn find_cycles(tasks: &[Task], dependencies: &[Dependency]) -> Vec<Vec<String>> {
    let graph = DependencyGraph::build(tasks, dependencies);
    let mut seen = HashSet::new();

    graph
        .cycles()
        .into_iter()
        .map(|cycle| {
            cycle
                .into_iter()
                .map(|i| tasks[i].id.clone())
                .collect::<Vec<_>>()
        })
        .filter(|ids| {
            let members: Vec<&str> = ids.iter().map(String::as_str).collect();
            seen.insert(canonical_key(&members))
        })
        .collect()
}

/// Reports each distinct dependency cycle as a critical
/// `circular_dependency` conflict.
pub fn detect_cycles(tasks: &[Task], dependencies: &[Dependency]) -> Vec<Conflict> {
    let labels: HashMap<&str, &str> = tasks.iter().map(|t| (t.id.as_str(), t.label())).collect();

    let conflicts: Vec<Conflict> = find_cycles(tasks, dependencies)
        .into_iter()
        .map(|cycle| {
            let chain: Vec<&str> = cycle
                .iter()
                .map(|id| labels.get(id.as_str()).copied().unwrap_or(id.as_str()))
                .collect();
            Conflict::circular_dependency(cycle.clone(), &chain)
        })
        .collect();

    debug!(count = conflicts.len(), "cycle detection finished");
    conflicts
}
