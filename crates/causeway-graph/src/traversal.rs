//! Breadth-first reachability queries.
//!
//! The query walks the store's adjacency lists outward from an origin node,
//! using the per-node seen marks as its visited set. A node is marked and
//! enqueued the first time it is discovered, expanded when dequeued, and
//! never enqueued again, so every node is processed at most once and every
//! edge scanned at most once: O(V + E) per query.

use std::collections::VecDeque;

use tracing::trace;

use crate::store::{GraphStore, NodeId};

/// Determine whether a directed path exists from `origin` to `destination`.
///
/// The destination is only ever matched while scanning a dequeued node's
/// neighbours, so a query where `origin == destination` returns true only if
/// a self-loop or cycle routes back to the node. There is no distance-zero
/// special case.
///
/// All seen marks are cleared on entry and again on every exit path, so
/// back-to-back queries against the same store need no caller-side cleanup.
///
/// Both ids must be live members of `store`; anything else is a contract
/// violation.
pub fn is_reachable(store: &mut GraphStore, origin: NodeId, destination: NodeId) -> bool {
    store.reset_seen();
    store.set_seen(origin, true);

    let mut frontier = VecDeque::new();
    frontier.push_back(origin);

    while let Some(current) = frontier.pop_front() {
        // Snapshot the adjacency before marking neighbours: the marks need
        // mutable access to the store while the adjacency list stays intact.
        let adjacent: Vec<NodeId> = store.neighbours(current).collect();
        trace!(
            node = store.name(current),
            neighbours = adjacent.len(),
            "expanding"
        );

        for neighbour in adjacent {
            if neighbour == destination {
                store.reset_seen();
                return true;
            }

            if !store.is_seen(neighbour) {
                store.set_seen(neighbour, true);
                frontier.push_back(neighbour);
            }
        }
    }

    store.reset_seen();
    false
}
