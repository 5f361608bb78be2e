use std::time::Duration;

use crate::equation::{Equation, Token};
use crate::solver::constants::MAX_EQUATION_LEN;
use crate::solver::{DedupPolicy, Frontier, Node, SearchStatus, Solver, SolverConfig};

#[test]
fn test_root_children_place_each_number() {
    let root = Node::root(&[3, 3, 7]);
    let children = root.children();
    assert_eq!(children.len(), 3);

    let firsts: Vec<_> = children
        .iter()
        .map(|c| c.equation().tokens().to_vec())
        .collect();
    assert_eq!(
        firsts,
        vec![
            vec![Token::Number(3)],
            vec![Token::Number(3)],
            vec![Token::Number(7)]
        ]
    );
    assert_eq!(children[0].remaining(), &[3, 7]);
    assert_eq!(children[2].remaining(), &[3, 3]);
    assert!(children.iter().all(|c| c.is_complete()));
}

#[test]
fn test_children_numbers_then_operators() {
    let node = Node::root(&[8, 2, 5])
        .children()
        .into_iter()
        .next()
        .and_then(|c| c.children().into_iter().next());
    assert!(node.is_some());

    if let Some(node) = node {
        assert_eq!(node.equation().to_string(), "8 2");
        let rendered: Vec<_> = node
            .children()
            .iter()
            .map(|c| c.equation().to_string())
            .collect();
        assert_eq!(rendered, vec!["8 2 5", "8 2 +", "8 2 -", "8 2 *", "8 2 /"]);
    }
}

#[test]
fn test_pruned_operators_are_not_children() {
    let node = Node::root(&[1, 1])
        .children()
        .into_iter()
        .next()
        .and_then(|c| c.children().into_iter().next());
    assert!(node.is_some());

    if let Some(node) = node {
        let rendered: Vec<_> = node
            .children()
            .iter()
            .map(|c| c.equation().to_string())
            .collect();
        assert_eq!(rendered, vec!["1 1 +"]);
    }
}

#[test]
fn test_partial_children_prune_eagerly() {
    // "6 4 /" is never formed even though the equation would stay incomplete
    // once the remaining 9 is pushed.
    let node = Node::root(&[6, 4, 9])
        .children()
        .into_iter()
        .next()
        .and_then(|c| c.children().into_iter().next());
    assert!(node.is_some());

    if let Some(node) = node {
        assert_eq!(node.equation().to_string(), "6 4");
        assert!(
            !node
                .children()
                .iter()
                .any(|c| c.equation().to_string() == "6 4 /")
        );
    }
}

#[test]
fn test_result_only_observable_when_complete() {
    let mut node = Node::root(&[3, 4]);
    assert_eq!(node.result(), None);

    node = node.children().remove(0);
    assert_eq!(node.result(), Some(3));

    node = node.children().remove(0);
    assert_eq!(node.equation().to_string(), "3 4");
    assert_eq!(node.result(), None);

    let sum = node
        .children()
        .into_iter()
        .find(|c| c.equation().to_string() == "3 4 +");
    assert!(sum.is_some());
    if let Some(sum) = sum {
        assert_eq!(sum.result(), Some(7));
        assert_eq!(sum.equation().evaluate(), Ok(7));
        assert!(sum.is_leaf());
        assert!(sum.children().is_empty());
    }
}

#[test]
fn test_children_never_exceed_max_length() {
    let mut layer = vec![Node::root(&[2, 3, 5, 7, 11, 13])];
    let mut deepest = 0;
    while !layer.is_empty() && deepest <= MAX_EQUATION_LEN {
        layer = layer
            .iter()
            .flat_map(Node::children)
            .take(5_000)
            .collect();
        if let Some(node) = layer.first() {
            deepest = node.equation().len();
        }
        assert!(layer.iter().all(|n| n.equation().len() <= MAX_EQUATION_LEN));
    }
    assert_eq!(deepest, MAX_EQUATION_LEN);
}

#[test]
fn test_frontier_is_fifo() {
    let mut frontier = Frontier::new(DedupPolicy::Off);
    for child in Node::root(&[1, 2, 3]).children() {
        assert!(frontier.push(child));
    }
    assert_eq!(frontier.len(), 3);
    assert_eq!(frontier.high_water(), 3);

    let order: Vec<_> = std::iter::from_fn(|| frontier.pop())
        .map(|n| n.equation().to_string())
        .collect();
    assert_eq!(order, vec!["1", "2", "3"]);
    assert!(frontier.is_empty());
}

#[test]
fn test_frontier_bounded_dedup_skips_equivalent_states() {
    let mut frontier = Frontier::new(DedupPolicy::Bounded { capacity: 10 });
    let children = Node::root(&[5, 5, 9]).children();
    assert!(frontier.push(children[0].clone()));
    assert!(!frontier.push(children[1].clone()));
    assert!(frontier.push(children[2].clone()));
    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.skipped(), 1);
}

#[test]
fn test_frontier_dedup_stops_remembering_at_capacity() {
    let mut frontier = Frontier::new(DedupPolicy::Bounded { capacity: 0 });
    let children = Node::root(&[5, 5]).children();
    assert!(frontier.push(children[0].clone()));
    assert!(frontier.push(children[1].clone()));
    assert_eq!(frontier.skipped(), 0);
}

#[test]
fn test_solves_known_game() {
    let solver = Solver::new();
    let outcome = solver.solve(&[1, 2, 3, 4, 10, 25], 156);

    assert_eq!(outcome.status, SearchStatus::Solved);
    assert!(outcome.is_solved());
    assert!(outcome.equation.is_some());
    if let Some(equation) = &outcome.equation {
        assert_eq!(equation.evaluate(), Ok(156));
        assert_eq!(equation.to_infix(), Ok("((1+25)*(2*3))".to_string()));
    }
    assert_eq!(outcome.nodes_examined, 7_880);
    assert!(outcome.elapsed < Duration::from_secs(60));
}

#[test]
fn test_impossible_game_is_exhausted() {
    let solver = Solver::new();
    let outcome = solver.solve(&[1, 1, 1, 1, 1, 1], 999);

    assert_eq!(outcome.status, SearchStatus::Exhausted);
    assert!(outcome.equation.is_none());
    assert_eq!(outcome.nodes_examined, 341_706);
}

#[test]
fn test_nodes_examined_counts_every_dequeue() {
    // [2] [3] [2 3] [3 2] then five complete leaves: 2 3 +, 2 3 *, 3 2 +, 3 2 -, 3 2 *
    let outcome = Solver::new().solve(&[2, 3], 999);
    assert_eq!(outcome.status, SearchStatus::Exhausted);
    assert_eq!(outcome.nodes_examined, 9);
}

#[test]
fn test_target_equal_to_source_number() {
    let outcome = Solver::new().solve(&[3, 7, 100, 2, 5, 9], 100);
    assert_eq!(outcome.status, SearchStatus::Solved);
    assert_eq!(outcome.nodes_examined, 0);
    assert_eq!(outcome.equation, Some(Equation::from(vec![Token::Number(100)])));
}

#[test]
fn test_solve_is_deterministic() {
    let solver = Solver::new();
    let first = solver.solve(&[100, 75, 8, 3, 6, 2], 437);
    let second = solver.solve(&[100, 75, 8, 3, 6, 2], 437);

    assert_eq!(first.status, SearchStatus::Solved);
    assert_eq!(first.status, second.status);
    assert_eq!(first.equation, second.equation);
    assert_eq!(first.nodes_examined, second.nodes_examined);
    if let Some(equation) = &first.equation {
        assert_eq!(equation.evaluate(), Ok(437));
        assert_eq!(equation.to_infix(), Ok("(((100+6)*2)+(75*3))".to_string()));
    }
}

#[test]
fn test_time_limit_stops_search() {
    let config = SolverConfig::new()
        .with_time_limit(Duration::ZERO)
        .with_check_interval(1);
    let outcome = Solver::with_config(config).solve(&[1, 2, 3, 4, 10, 25], 999);

    assert_eq!(outcome.status, SearchStatus::TimedOut);
    assert!(outcome.equation.is_none());
    assert_eq!(outcome.nodes_examined, 1);
}

#[test]
fn test_time_is_only_checked_on_interval() {
    let config = SolverConfig::new()
        .with_time_limit(Duration::ZERO)
        .with_check_interval(50);
    let outcome = Solver::with_config(config).solve(&[1, 2, 3, 4, 10, 25], 999);

    assert_eq!(outcome.status, SearchStatus::TimedOut);
    assert_eq!(outcome.nodes_examined, 50);
}

#[test]
fn test_dedup_preserves_answers_and_shrinks_search() {
    let plain = Solver::new().solve(&[1, 1, 1, 1, 1, 1], 999);
    let config = SolverConfig::new().with_dedup(DedupPolicy::Bounded {
        capacity: 1_000_000,
    });
    let deduped = Solver::with_config(config.clone()).solve(&[1, 1, 1, 1, 1, 1], 999);

    assert_eq!(deduped.status, SearchStatus::Exhausted);
    assert!(deduped.nodes_examined < plain.nodes_examined);

    let solved = Solver::with_config(config).solve(&[1, 2, 3, 4, 10, 25], 156);
    assert_eq!(solved.status, SearchStatus::Solved);
    if let Some(equation) = &solved.equation {
        assert_eq!(equation.evaluate(), Ok(156));
    }
}

#[test]
fn test_zero_check_interval_is_clamped() {
    let config = SolverConfig {
        check_interval: 0,
        ..SolverConfig::default()
    };
    let outcome = Solver::with_config(config).solve(&[2, 3], 6);
    assert_eq!(outcome.status, SearchStatus::Solved);
}
