use dropline_core::DropLineError;
use dropline_geometry::demo::demo_curves;
use dropline_geometry::{
    base_plane_height, build_drop_segments, sample, sample_indices, CurveSamples,
};
use dropline_math::Plane;

fn demo_samples() -> (CurveSamples, CurveSamples) {
    let [a, b] = demo_curves(4.0);
    (
        CurveSamples::from_curve_arange(&a, 0.0, 4.0, 0.02).unwrap(),
        CurveSamples::from_curve_arange(&b, 0.0, 4.0, 0.02).unwrap(),
    )
}

#[test]
fn test_sample_example_sequence() {
    let s: Vec<i32> = (0..10).collect();
    assert_eq!(sample(&s, 4).unwrap(), vec![0, 3, 6, 9]);
}

#[test]
fn test_sample_rejects_out_of_range_counts() {
    for len in 2..8usize {
        let s: Vec<usize> = (0..len).collect();
        for n in [1, 0, -5, len as i64 + 1] {
            match sample(&s, n) {
                Err(DropLineError::InvalidArgument(msg)) => assert!(msg.contains("n must be")),
                other => panic!("len = {len}, n = {n}: expected InvalidArgument, got {other:?}"),
            }
        }
    }
}

#[test]
fn test_sample_works_on_any_clone_type() {
    let words = ["a", "b", "c", "d", "e"].map(String::from);
    assert_eq!(sample(&words, 3).unwrap(), vec!["a", "c", "e"]);
}

#[test]
fn test_demo_figure_drop_lines() {
    let (a, b) = demo_samples();
    let minz = base_plane_height(&[&a, &b], 0.5).unwrap();

    let va = a.drop_segments(minz, 10).unwrap();
    let vb = b.drop_segments(minz, 10).unwrap();
    assert_eq!(va.len(), 10);
    assert_eq!(vb.len(), 10);

    let indices = sample_indices(a.len(), 10).unwrap();
    for (segment, &i) in va.iter().zip(&indices) {
        assert_eq!(segment.base_z, minz);
        assert_eq!(segment.top(), a.point(i));
        assert!(segment.top_z > segment.base_z);
    }
}

#[test]
fn test_builder_matches_free_function() {
    let (a, _) = demo_samples();
    assert_eq!(
        a.drop_segments(-4.0, 6).unwrap(),
        build_drop_segments(a.x(), a.y(), a.z(), -4.0, 6).unwrap()
    );
}

#[test]
fn test_drop_segment_bases_lie_on_shadow() {
    let (a, _) = demo_samples();
    let minz = a.min_z() - 0.5;
    let shadow = a.project_onto(&Plane::base(minz));
    let shadow_points = shadow.points();
    for segment in a.drop_segments(minz, 8).unwrap() {
        assert!(shadow_points
            .iter()
            .any(|p| (*p - segment.base()).length() < 1e-9));
    }
}

#[test]
fn test_builder_is_deterministic() {
    let (_, b) = demo_samples();
    let first = b.drop_segments(-5.0, 17).unwrap();
    let second = b.drop_segments(-5.0, 17).unwrap();
    assert_eq!(first, second);
}
