//! Property-based tests for the path, cycle and prime-path enumerators.
//!
//! Random edge lists are kept tiny: the enumerators are exhaustive, so the
//! result pool grows quickly with density, and small graphs already reach
//! every structural case (branches, cycles, self-loops, parallel edges).

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use primepath_core::{
    EdgeList, FlowGraph, all_cycles, all_paths, build_graph, is_subpath, prime_paths,
};

fn arb_edge_list() -> impl Strategy<Value = EdgeList> {
    (1usize..=7).prop_flat_map(|vertex_count| {
        prop::collection::vec((0..vertex_count, 0..vertex_count), 0..=12)
            .prop_map(move |edges| EdgeList {
                vertex_count,
                edges,
            })
    })
}

fn graph_of(edge_list: &EdgeList) -> FlowGraph {
    build_graph(edge_list).expect("generated endpoints are in range")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Every vertex contributes its trivial path exactly once.
    #[test]
    fn prop_trivial_paths_present(edge_list in arb_edge_list()) {
        let graph = graph_of(&edge_list);
        let paths = all_paths(&graph);
        for vertex in 0..edge_list.vertex_count {
            let trivial = vec![vertex];
            let count = paths.iter().filter(|p| **p == trivial).count();
            prop_assert_eq!(count, 1, "trivial path of {} seen {} times", vertex, count);
        }
    }

    /// Paths repeat no vertex and walk only declared edges.
    #[test]
    fn prop_paths_are_simple_and_edge_connected(edge_list in arb_edge_list()) {
        let graph = graph_of(&edge_list);
        for path in all_paths(&graph) {
            prop_assert!(!path.is_empty());
            let mut seen = vec![false; edge_list.vertex_count];
            for &vertex in &path {
                prop_assert!(!seen[vertex], "vertex {} repeats in {:?}", vertex, path);
                seen[vertex] = true;
            }
            for pair in path.windows(2) {
                prop_assert!(
                    edge_list.edges.contains(&(pair[0], pair[1])),
                    "undeclared edge {:?} in {:?}",
                    pair,
                    path
                );
            }
        }
    }

    /// Cycles close on their own start and keep interior vertices distinct.
    #[test]
    fn prop_cycles_close_on_start(edge_list in arb_edge_list()) {
        let graph = graph_of(&edge_list);
        for cycle in all_cycles(&graph) {
            prop_assert!(cycle.len() >= 2, "cycle too short: {:?}", cycle);
            prop_assert_eq!(cycle.first(), cycle.last());
            let interior = &cycle[..cycle.len() - 1];
            let mut seen = vec![false; edge_list.vertex_count];
            for &vertex in interior {
                prop_assert!(!seen[vertex], "vertex {} repeats in {:?}", vertex, cycle);
                seen[vertex] = true;
            }
            for pair in cycle.windows(2) {
                prop_assert!(
                    edge_list.edges.contains(&(pair[0], pair[1])),
                    "undeclared edge {:?} in {:?}",
                    pair,
                    cycle
                );
            }
        }
    }

    /// Prime paths are unique pool entries contained in no other entry.
    #[test]
    fn prop_prime_paths_are_maximal(edge_list in arb_edge_list()) {
        let graph = graph_of(&edge_list);
        let mut pool = all_paths(&graph);
        pool.extend(all_cycles(&graph));
        for prime in prime_paths(&graph) {
            let copies = pool.iter().filter(|entry| **entry == prime).count();
            prop_assert_eq!(copies, 1, "{:?} occurs {} times in the pool", &prime, copies);
            for entry in &pool {
                if *entry != prime {
                    prop_assert!(
                        !is_subpath(&prime, entry),
                        "{:?} is contained in {:?}",
                        prime,
                        entry
                    );
                }
            }
        }
    }

    /// Prime paths keep the pool's relative order.
    #[test]
    fn prop_prime_paths_keep_pool_order(edge_list in arb_edge_list()) {
        let graph = graph_of(&edge_list);
        let mut pool = all_paths(&graph);
        pool.extend(all_cycles(&graph));
        let mut cursor = pool.iter();
        for prime in prime_paths(&graph) {
            prop_assert!(
                cursor.any(|entry| *entry == prime),
                "{:?} out of pool order",
                prime
            );
        }
    }

    /// Rebuilding the graph and re-running yields identical results.
    #[test]
    fn prop_enumeration_is_deterministic(edge_list in arb_edge_list()) {
        let first = graph_of(&edge_list);
        let second = graph_of(&edge_list);
        prop_assert_eq!(all_paths(&first), all_paths(&second));
        prop_assert_eq!(all_cycles(&first), all_cycles(&second));
        prop_assert_eq!(prime_paths(&first), prime_paths(&second));
    }
}
