use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seampath::{
    AdjacencyListGraph, DijkstraSolver, Edge, Error, ExtrinsicMinPQ, HeapMinPQ,
    OptimizedHeapMinPQ, ShortestPathSolver, ToposortDagSolver, UnsortedArrayMinPQ,
};
use std::collections::HashMap;

// Edges only run from lower to higher numbers, so the graph is acyclic.
// Weights are whole numbers so sums compare exactly.
fn random_dag(rng: &mut StdRng, vertices: u32, edges: usize, negative: bool) -> AdjacencyListGraph<u32> {
    let low = if negative { -5 } else { 0 };
    AdjacencyListGraph::from_edges((0..edges).map(|_| {
        let from = rng.gen_range(0..vertices - 1);
        let to = rng.gen_range(from + 1..vertices);
        Edge::new(from, to, f64::from(rng.gen_range(low..=10)))
    }))
}

fn path_weight<S: ShortestPathSolver<u32>>(solver: &S, path: &[u32]) -> f64 {
    path.windows(2)
        .map(|pair| {
            let edge = solver.edge_to(&pair[1]).unwrap();
            assert_eq!(edge.from, pair[0]);
            edge.weight
        })
        .sum()
}

#[test]
fn toposort_and_dijkstra_agree_on_random_dags() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..50 {
        let negative = round % 2 == 1;
        let graph = random_dag(&mut rng, 40, 120, negative);
        let topo = ToposortDagSolver::run(&graph, 0).unwrap();
        let dijkstra = DijkstraSolver::run(&graph, 0).unwrap();
        for v in 0..40 {
            assert_eq!(topo.dist_to(&v), dijkstra.dist_to(&v), "vertex {} round {}", v, round);
            assert_eq!(topo.has_path_to(&v), dijkstra.has_path_to(&v));
        }
    }
}

#[test]
fn solutions_run_from_start_to_goal_at_their_distance() {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = random_dag(&mut rng, 60, 200, false);
    let topo = ToposortDagSolver::run(&graph, 0).unwrap();
    let dijkstra = DijkstraSolver::run(&graph, 0).unwrap();
    for goal in 0..60 {
        if !topo.has_path_to(&goal) {
            assert!(matches!(topo.solution(&goal), Err(Error::UnreachableGoal(_))));
            assert!(matches!(dijkstra.solution(&goal), Err(Error::UnreachableGoal(_))));
            continue;
        }
        let path = topo.solution(&goal).unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&goal));
        assert_eq!(path_weight(&topo, &path), topo.dist_to(&goal).unwrap());

        let path = dijkstra.solution(&goal).unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&goal));
        assert_eq!(path_weight(&dijkstra, &path), dijkstra.dist_to(&goal).unwrap());
    }
}

// Random adds, removals and re-prioritizations, checked against a
// plain map of what should be in the queue.
fn exercise<Q: ExtrinsicMinPQ<u32>>(mut pq: Q, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model: HashMap<u32, f64> = HashMap::new();
    for _ in 0..2_000 {
        match rng.gen_range(0..4) {
            0 | 1 => {
                let item = rng.gen_range(0..100);
                let priority = f64::from(rng.gen_range(0..50));
                let before = pq.size();
                match pq.add(item, priority) {
                    Ok(()) => assert!(model.insert(item, priority).is_none()),
                    Err(err) => {
                        assert!(model.contains_key(&item));
                        assert!(matches!(err, Error::DuplicateItem(_)));
                        assert_eq!(pq.size(), before);
                    }
                }
            }
            2 => {
                let item = rng.gen_range(0..100);
                let priority = f64::from(rng.gen_range(0..50));
                match pq.change_priority(&item, priority) {
                    Ok(()) => {
                        model.insert(item, priority);
                    }
                    Err(err) => {
                        assert!(!model.contains_key(&item));
                        assert!(matches!(err, Error::NotFound(_)));
                    }
                }
            }
            _ => match pq.remove_min() {
                Ok(item) => {
                    let priority = model.remove(&item).unwrap();
                    assert!(model.values().all(|p| *p >= priority));
                }
                Err(err) => {
                    assert!(model.is_empty());
                    assert_eq!(err, Error::EmptyQueue);
                }
            },
        }
        assert_eq!(pq.size(), model.len());
        if let Ok(least) = pq.peek_min_priority() {
            let expected = model.values().cloned().fold(std::f64::INFINITY, f64::min);
            assert_eq!(least, expected);
            assert_eq!(model[pq.peek_min().unwrap()], least);
        }
    }

    let mut last = std::f64::NEG_INFINITY;
    while let Ok(item) = pq.remove_min() {
        let priority = model.remove(&item).unwrap();
        assert!(priority >= last);
        last = priority;
    }
    assert!(model.is_empty());
}

#[test]
fn indexed_heap_matches_the_model() {
    exercise(OptimizedHeapMinPQ::new(), 1);
    exercise(OptimizedHeapMinPQ::new(), 2);
}

#[test]
fn plain_heap_matches_the_model() {
    exercise(HeapMinPQ::new(), 3);
}

#[test]
fn unsorted_array_matches_the_model() {
    exercise(UnsortedArrayMinPQ::new(), 4);
}
