use remcf::algorithm::{Augmentation, SolveMinCostMaxFlow};
use remcf::io::report::Summary;

use super::solve;

#[test]
fn test_diamond() {
    let (graph, result) = solve("diamond");

    assert_eq!(result.total_flow, 2);
    assert_eq!(result.total_cost, 5);
    assert_eq!(result.augmentations, vec![
        Augmentation { path: vec![0, 1, 3], bottleneck: 1, cost: 2 },
        Augmentation { path: vec![0, 2, 3], bottleneck: 1, cost: 3 },
    ]);
    assert_eq!(graph.minimum_cut(0), Ok(vec![0, 1]));
}

#[test]
fn test_transport0() {
    let (graph, result) = solve("transport0");

    assert_eq!(result.total_flow, 5);
    assert_eq!(result.total_cost, 22);
    assert_eq!(
        result.augmentations.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec![
            "0 -> 2 -> 4 -> 5 (2)  $3",
            "0 -> 1 -> 3 -> 5 (2)  $4",
            "0 -> 1 -> 4 -> 2 -> 3 -> 5 (1)  $8",
        ],
    );

    let cut = graph.minimum_cut(graph.source()).unwrap();
    let summary = Summary::new(&graph, &result, &cut).to_string();
    assert!(summary.contains("Flow 2 -> 3 (1)  $5\n"));
    assert!(summary.ends_with("TOTAL FLOW: 5\nTOTAL COST: 22\nMINIMUM CUT: {0}\n"));
}

#[test]
fn test_flow10() {
    let (mut graph, result) = solve("flow10");

    // Limited by the arcs into the sink
    assert_eq!(result.total_flow, 12);
    assert!(result.augmentations.windows(2).all(|pair| pair[0].cost <= pair[1].cost));
    assert_eq!(result.augmentations.iter().map(|a| a.bottleneck).sum::<i64>(), 12);

    let again = graph.solve().unwrap();
    assert!(again.augmentations.is_empty());
    assert_eq!((again.total_flow, again.total_cost), (result.total_flow, result.total_cost));
}

#[test]
fn test_disconnected() {
    let (graph, result) = solve("disconnected");

    assert_eq!(result.total_flow, 0);
    assert_eq!(result.total_cost, 0);
    assert!(result.augmentations.is_empty());
    assert_eq!(graph.edge_flows().count(), 0);
    assert_eq!(graph.minimum_cut(0), Ok(vec![0, 1, 2]));
}
