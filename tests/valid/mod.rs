//! # Networks that can be solved
use std::path::{Path, PathBuf};

use itertools::iproduct;

use remcf::algorithm::{FlowResult, SolveMinCostMaxFlow};
use remcf::data::network::residual::Graph;
use remcf::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the network files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("txt")
}

type T = i64;

fn solve(file_name: &str) -> (Graph<T>, FlowResult<T>) {
    let mut graph = import::<T>(&get_test_file_path(file_name)).unwrap();
    let result = graph.solve().unwrap();

    check_conservation(&graph);
    check_cut(&graph, &result);
    check_no_negative_cycle(&graph);
    assert_eq!(graph.flow_cost(), Some(result.total_cost));

    (graph, result)
}

/// Flow is conserved at every vertex except the source and the sink.
fn check_conservation(graph: &Graph<T>) {
    let n = graph.vertex_count();
    let flow = |u, v| graph.original_capacity(u, v) - graph.residual_capacity(u, v);

    for v in (0..n).filter(|&v| v != graph.source() && v != graph.sink()) {
        let incoming = (0..n).map(|u| flow(u, v)).sum::<T>();
        let outgoing = (0..n).map(|w| flow(v, w)).sum::<T>();
        assert_eq!(incoming, outgoing, "vertex {}", v);
    }
}

/// The sink is out of reach, and the cut found has the capacity of the flow.
fn check_cut(graph: &Graph<T>, result: &FlowResult<T>) {
    let cut = graph.minimum_cut(graph.source()).unwrap();
    assert!(cut.contains(&graph.source()));
    assert!(!cut.contains(&graph.sink()));
    assert_eq!(graph.cut_capacity(&cut), Ok(Some(result.total_flow)));
}

/// A flow is cheapest among flows of its value exactly when its residual network has no cycle of
/// negative cost.
fn check_no_negative_cycle(graph: &Graph<T>) {
    let n = graph.vertex_count();
    let arcs = iproduct!(0..n, 0..n)
        .filter(|&(u, v)| u != v && graph.residual_capacity(u, v) > 0)
        .collect::<Vec<_>>();

    // All vertices start at zero, as if connected to an extra vertex with arcs of cost zero
    let mut label = vec![0; n];
    for _ in 0..n {
        for &(u, v) in &arcs {
            label[v] = label[v].min(label[u] + graph.edge_cost(u, v));
        }
    }
    for &(u, v) in &arcs {
        assert!(label[v] <= label[u] + graph.edge_cost(u, v), "negative cycle through {} -> {}", u, v);
    }
}
