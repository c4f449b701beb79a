// tests/unit_transition.rs
use linkrank_core::config::DiagnosticPolicy;
use linkrank_core::graph::rank::builder::{self, max_column_deviation};
use linkrank_core::graph::rank::{Diagnostic, DiagnosticLog, GoogleMatrix};
use linkrank_core::{Graph, RankError};
use nalgebra::DMatrix;
use proptest::prelude::*;

fn graph(n: usize, bits: &[bool]) -> Graph {
    let values: Vec<f64> = bits.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect();
    Graph::unnamed(DMatrix::from_row_slice(n, n, &values)).unwrap()
}

fn random_graph() -> impl Strategy<Value = Graph> {
    (1usize..9).prop_flat_map(|n| {
        prop::collection::vec(any::<bool>(), n * n).prop_map(move |bits| graph(n, &bits))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_columns_sum_to_one(g in random_graph()) {
        let m = builder::build(&g, &mut DiagnosticLog::default()).unwrap();
        prop_assert!(max_column_deviation(m.as_matrix()) < 1e-12);
        prop_assert!(m.as_matrix().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_dead_ends_spread_uniformly(g in random_graph()) {
        let m = builder::build(&g, &mut DiagnosticLog::default()).unwrap();
        let n = g.len();
        let expected = g.dead_ends();
        prop_assert_eq!(m.dead_ends(), expected.as_slice());
        for &col in m.dead_ends() {
            for row in 0..n {
                prop_assert!((m.as_matrix()[(row, col)] - 1.0 / n as f64).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn test_google_stays_stochastic(g in random_graph(), alpha in 0.01f64..0.99) {
        let m = builder::build(&g, &mut DiagnosticLog::default()).unwrap();
        let google = GoogleMatrix::assemble(&m, alpha).unwrap();
        prop_assert!(max_column_deviation(google.as_matrix()) < 1e-12);
        prop_assert!(google.as_matrix().iter().all(|&v| v > 0.0));
    }
}

#[test]
fn test_out_links_share_weight() {
    // 0 -> 1, 0 -> 2, 1 -> 2, 2 -> 0
    let g = graph(
        3,
        &[false, false, true, true, false, false, true, true, false],
    );
    let m = builder::build(&g, &mut DiagnosticLog::default()).unwrap();
    let t = m.as_matrix();
    assert_eq!(t[(1, 0)], 0.5);
    assert_eq!(t[(2, 0)], 0.5);
    assert_eq!(t[(2, 1)], 1.0);
    assert_eq!(t[(0, 2)], 1.0);
    assert!(m.dead_ends().is_empty());
}

#[test]
fn test_dead_end_reported() {
    let g = graph(2, &[false, false, true, false]);
    let mut log = DiagnosticLog::default();
    let m = builder::build(&g, &mut log).unwrap();
    assert_eq!(m.dead_ends(), &[1]);
    assert_eq!(
        log.entries(),
        &[Diagnostic::DeadEndsResolved { nodes: vec![1] }]
    );
}

#[test]
fn test_non_stochastic_strict_fails() {
    let skewed = DMatrix::from_row_slice(2, 2, &[0.5, 0.0, 0.6, 1.0]);
    let mut log = DiagnosticLog::new(DiagnosticPolicy::default());
    let err = builder::check_stochastic(&skewed, &mut log).unwrap_err();
    assert!(matches!(err, RankError::NonStochastic { .. }));
}

#[test]
fn test_non_stochastic_lenient_warns() {
    let skewed = DMatrix::from_row_slice(2, 2, &[0.5, 0.0, 0.6, 1.0]);
    let mut log = DiagnosticLog::new(DiagnosticPolicy::lenient());
    builder::check_stochastic(&skewed, &mut log).unwrap();
    assert_eq!(log.entries().len(), 1);
    assert!(log.entries()[0].is_warning());
}

#[test]
fn test_alpha_outside_unit_interval() {
    let g = graph(2, &[false, true, true, false]);
    let m = builder::build(&g, &mut DiagnosticLog::default()).unwrap();
    for alpha in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
        let err = GoogleMatrix::assemble(&m, alpha).unwrap_err();
        assert!(matches!(err, RankError::InvalidAlpha(_)));
    }
}
