//! Integration tests for the worked scenarios named in the spec's testable
//! properties: a singleton tree, a tiny 4-point 2D tree, left-balance at N=5, FCP vs
//! brute force at scale, phantom-child handling at N=2, and kNN vs a partial sort at
//! scale. Each is grounded on the corresponding unit-level test already covering the
//! module in question, exercised here through the public `flatkd` API only.

use flatkd::test_utils::{linear_fcp, linear_knn};
use flatkd::{
    build_tree, find_closest_point, find_closest_point_within, is_valid_kdtree, k_nearest,
    FixedCandidateList,
};

#[test]
fn s1_singleton_tree() {
    let mut points = [[7.0f64, -3.0]];
    build_tree::<[f64; 2], 2>(&mut points);
    assert_eq!(points, [[7.0, -3.0]]);
    assert!(is_valid_kdtree::<[f64; 2], 2>(&points));
}

#[test]
fn s2_tiny_four_point_2d_tree_is_valid_and_findable() {
    let mut points = [[2.0f64, 3.0], [5.0, 4.0], [9.0, 6.0], [4.0, 7.0]];
    build_tree::<[f64; 2], 2>(&mut points);
    assert!(is_valid_kdtree::<[f64; 2], 2>(&points));

    for original in [[2.0, 3.0], [5.0, 4.0], [9.0, 6.0], [4.0, 7.0]] {
        let idx = find_closest_point::<[f64; 2], 2>(&original, &points).unwrap();
        assert_eq!(points[idx], original);
    }
}

#[test]
fn s3_left_balance_holds_at_n5() {
    use flatkd::geometry::subtree_size;

    let mut points: Vec<[f64; 1]> = (0..5).map(|i| [i as f64]).collect();
    build_tree::<[f64; 1], 1>(&mut points);

    // Root's left subtree has 3 nodes, right subtree has 1, matching the spec's
    // worked example for a 5-element array.
    assert_eq!(subtree_size(1, 5), 3);
    assert_eq!(subtree_size(2, 5), 1);
    assert!(is_valid_kdtree::<[f64; 1], 1>(&points));
}

#[test]
fn s4_fcp_matches_brute_force_over_many_queries() {
    let n = 173;
    let mut points: Vec<[f32; 5]> = (0..n)
        .map(|i| {
            let x = ((i * 2654435761u64 as usize) % 10007) as f32;
            [x, x * 0.3, x * 1.7 % 511.0, x * 0.11, (i % 17) as f32]
        })
        .collect();
    build_tree::<[f32; 5], 5>(&mut points);

    for q in 0..10_000u64 {
        let query = [
            (q % 97) as f32,
            (q % 53) as f32 * 0.3,
            (q % 211) as f32,
            (q % 7) as f32,
            (q % 17) as f32,
        ];
        let got = find_closest_point::<[f32; 5], 5>(&query, &points).unwrap();
        let want = linear_fcp::<[f32; 5], 5>(&query, &points).unwrap();

        let got_dist = flatkd::sqr_distance::<[f32; 5], 5>(&query, &points[got]);
        let want_dist = flatkd::sqr_distance::<[f32; 5], 5>(&query, &points[want]);
        assert!((got_dist - want_dist).abs() < 1e-2, "query {q}");
    }
}

#[test]
fn s5_phantom_child_at_n2() {
    let mut points = [[0.0f64, 0.0, 0.0], [1.0, 1.0, 1.0]];
    build_tree::<[f64; 3], 3>(&mut points);
    assert!(is_valid_kdtree::<[f64; 3], 3>(&points));

    // Root has a left child but no right child; a query on the side with no child
    // must still find the only other point without touching an out-of-range index.
    let query = [2.0f64, 2.0, 2.0];
    let got = find_closest_point::<[f64; 3], 3>(&query, &points).unwrap();
    let want = linear_fcp::<[f64; 3], 3>(&query, &points).unwrap();
    assert_eq!(points[got], points[want]);

    assert_eq!(
        find_closest_point_within::<[f64; 3], 3>(&query, &points, 0.1),
        None
    );
}

#[test]
fn s6_knn_matches_a_partial_sort_at_scale() {
    let n = 10_000;
    let mut points: Vec<[f32; 3]> = (0..n)
        .map(|i| {
            let x = ((i * 48271) % 100_003) as f32;
            [x, (x * 1.41) % 997.0, (x * 0.577) % 881.0]
        })
        .collect();
    build_tree::<[f32; 3], 3>(&mut points);

    let k = 8;
    for q in 0..50u64 {
        let query = [
            (q * 233 % 100_003) as f32,
            (q * 71 % 997) as f32,
            (q * 13 % 881) as f32,
        ];

        let mut cl = FixedCandidateList::<f32, 8>::new(f32::INFINITY);
        k_nearest::<[f32; 3], 3, _>(&mut cl, &query, &points);
        let got = cl.into_sorted_vec();

        let want = linear_knn::<[f32; 3], 3>(&query, &points, k, f32::INFINITY);

        for i in 0..k {
            assert!(
                (got[i].dist_sq - want[i].1).abs() < 1e-2,
                "query {q}, rank {i}: got {} want {}",
                got[i].dist_sq,
                want[i].1
            );
        }
    }
}
