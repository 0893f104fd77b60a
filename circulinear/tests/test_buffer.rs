mod test_utils;

use circulinear::{
    core::math::{vec2, Vector2},
    curve::{ContinuousCurve, Contour, CurveSet},
    domain::{Boundary, Domain},
    offset::BufferCalculator,
};
use std::f64::consts::PI;
use test_utils::{create_property_set, init_logging, property_sets_match, ContourProperties};

fn props(
    element_count: usize,
    area: f64,
    length: f64,
    extents: (f64, f64, f64, f64),
) -> ContourProperties {
    ContourProperties::new(
        element_count,
        area,
        length,
        extents.0,
        extents.1,
        extents.2,
        extents.3,
    )
}

/// Properties without an element count, compared through [shape_set].
fn shape(area: f64, length: f64, extents: (f64, f64, f64, f64)) -> ContourProperties {
    props(0, area, length, extents)
}

fn shape_set(domain: &Domain) -> Vec<ContourProperties> {
    create_property_set(domain.contours())
        .into_iter()
        .map(|mut p| {
            p.element_count = 0;
            p
        })
        .collect()
}

fn run_boundary_buffer_test(
    input: &ContinuousCurve,
    distance: f64,
    expected_properties_set: &[ContourProperties],
) {
    init_logging();
    let calculator = BufferCalculator::<f64>::DEFAULT;
    let boundary = Boundary::from(Contour::new(input.clone()));
    let domain = calculator
        .compute_boundary_buffer(&boundary, distance)
        .unwrap();
    let result_set = create_property_set(domain.contours());
    assert!(
        property_sets_match(&result_set, expected_properties_set),
        "boundary buffer property sets do not match, distance: {}",
        distance
    );
}

fn run_curve_buffer_test(
    input: &ContinuousCurve,
    distance: f64,
    expected_properties_set: &[ContourProperties],
) {
    init_logging();
    let calculator = BufferCalculator::<f64>::DEFAULT;
    let source = CurveSet::from(input.clone());
    let domain = calculator.compute_buffer(&source, distance).unwrap();
    let result_set = create_property_set(domain.contours());
    assert!(
        property_sets_match(&result_set, expected_properties_set),
        "curve buffer property sets do not match, distance: {}",
        distance
    );

    // the buffer does not depend on the side or the traversal direction
    let domain = calculator.compute_buffer(&source, -distance).unwrap();
    let result_set = create_property_set(domain.contours());
    assert!(
        property_sets_match(&result_set, expected_properties_set),
        "curve buffer property sets do not match for negated distance"
    );
}

fn run_curve_shape_test(
    input: &ContinuousCurve,
    distance: f64,
    expected_shapes: &[ContourProperties],
) {
    init_logging();
    let calculator = BufferCalculator::<f64>::DEFAULT;
    let source = CurveSet::from(input.clone());
    for d in [distance, -distance] {
        let domain = calculator.compute_buffer(&source, d).unwrap();
        assert!(
            property_sets_match(&shape_set(&domain), expected_shapes),
            "curve buffer shapes do not match, distance: {}",
            d
        );
    }
}

fn run_point_set_buffer_test(
    points: &[Vector2],
    distance: f64,
    expected_properties_set: &[ContourProperties],
) {
    init_logging();
    let calculator = BufferCalculator::<f64>::DEFAULT;
    let domain = calculator
        .compute_point_set_buffer(points, distance)
        .unwrap();
    let result_set = create_property_set(domain.contours());
    assert!(
        property_sets_match(&result_set, expected_properties_set),
        "point set buffer property sets do not match"
    );
}

macro_rules! declare_boundary_buffer_tests {
    ($($name:ident { $($value:expr => $expected:expr),+ $(,)? })*) => {
        $(
            #[test]
            fn $name() {
                $(
                    run_boundary_buffer_test(&$value.0, $value.1, &$expected);
                )+
            }
        )+
    };
}

macro_rules! declare_curve_buffer_tests {
    ($($name:ident { $($value:expr => $expected:expr),+ $(,)? })*) => {
        $(
            #[test]
            fn $name() {
                $(
                    run_curve_buffer_test(&$value.0, $value.1, &$expected);
                )+
            }
        )+
    };
}

mod test_boundary {
    use super::*;
    use circulinear::curve_closed;

    declare_boundary_buffer_tests!(
        square_dilation {
            (curve_closed![(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 4.0, 0.0), (0.0, 4.0, 0.0)], 1.0) =>
            [props(8, 32.0 + PI, 16.0 + 2.0 * PI, (-1.0, -1.0, 5.0, 5.0))]
        }
        square_erosion {
            (curve_closed![(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 4.0, 0.0), (0.0, 4.0, 0.0)], -1.0) =>
            [props(4, 4.0, 8.0, (1.0, 1.0, 3.0, 3.0))]
        }
        circle_dilation {
            (curve_closed![(-2.0, 0.0, 1.0), (2.0, 0.0, 1.0)], 1.0) =>
            [props(2, 9.0 * PI, 6.0 * PI, (-3.0, -3.0, 3.0, 3.0))]
        }
        circle_erosion {
            (curve_closed![(-2.0, 0.0, 1.0), (2.0, 0.0, 1.0)], -1.0) =>
            [props(2, PI, 2.0 * PI, (-1.0, -1.0, 1.0, 1.0))]
        }
        circle_collapsed_by_erosion {
            (curve_closed![(-2.0, 0.0, 1.0), (2.0, 0.0, 1.0)], -3.0) =>
            []
        }
    );

    #[test]
    fn l_shape_erosion_leaves_corner_pocket() {
        // only the corner square of the arms is farther than 1 from the border
        init_logging();
        let calculator = BufferCalculator::<f64>::DEFAULT;
        let l_shape = curve_closed![
            (0.0, 0.0, 0.0),
            (4.0, 0.0, 0.0),
            (4.0, 2.0, 0.0),
            (2.0, 2.0, 0.0),
            (2.0, 4.0, 0.0),
            (0.0, 4.0, 0.0)
        ];
        let domain = calculator
            .compute_boundary_buffer(&Boundary::from(Contour::new(l_shape)), -1.0)
            .unwrap();
        let expected = [shape(1.0 - PI / 4.0, 2.0 + PI / 2.0, (1.0, 1.0, 2.0, 2.0))];
        assert!(property_sets_match(&shape_set(&domain), &expected));
    }

    #[test]
    fn dilation_of_convex_contour_matches_steiner_formula() {
        init_logging();
        let calculator = BufferCalculator::<f64>::DEFAULT;
        let triangle = Contour::from_points(&[vec2(0.0, 0.0), vec2(6.0, 0.0), vec2(2.0, 5.0)]);
        let area0 = 15.0;
        let perimeter = 6.0 + 41.0f64.sqrt() + 29.0f64.sqrt();
        for d in [0.25, 1.0, 3.0] {
            let domain = calculator
                .compute_boundary_buffer(&Boundary::from(triangle.clone()), d)
                .unwrap();
            assert_eq!(domain.contours().len(), 1);
            let expected = area0 + perimeter * d + PI * d * d;
            assert!(
                (domain.area() - expected).abs() < 1e-6,
                "area {} expected {} at distance {}",
                domain.area(),
                expected,
                d
            );
        }
    }
}

mod test_curve {
    use super::*;
    use circulinear::{curve::Line, curve::Parametrized, curve_closed, curve_open};

    declare_curve_buffer_tests!(
        segment_band {
            (curve_open![(0.0, 0.0, 0.0), (4.0, 0.0, 0.0)], 1.0) =>
            [props(4, 8.0 + PI, 8.0 + 2.0 * PI, (-1.0, -1.0, 5.0, 1.0))]
        }
        right_angle_band {
            (curve_open![(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 4.0, 0.0)], 1.0) =>
            [props(7, 15.0 + 1.25 * PI, 14.0 + 2.5 * PI, (-1.0, -1.0, 5.0, 5.0))]
        }
        square_ring {
            (curve_closed![(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 4.0, 0.0), (0.0, 4.0, 0.0)], 1.0) =>
            [
                props(8, 32.0 + PI, 16.0 + 2.0 * PI, (-1.0, -1.0, 5.0, 5.0)),
                props(4, -4.0, 8.0, (1.0, 1.0, 3.0, 3.0)),
            ]
        }
        circle_ring {
            (curve_closed![(-2.0, 0.0, 1.0), (2.0, 0.0, 1.0)], 1.0) =>
            [
                props(2, 9.0 * PI, 6.0 * PI, (-3.0, -3.0, 3.0, 3.0)),
                props(2, -PI, 2.0 * PI, (-1.0, -1.0, 1.0, 1.0)),
            ]
        }
        circle_ring_without_hole {
            (curve_closed![(-2.0, 0.0, 1.0), (2.0, 0.0, 1.0)], 2.5) =>
            [props(2, 20.25 * PI, 9.0 * PI, (-4.5, -4.5, 4.5, 4.5))]
        }
    );

    #[test]
    fn l_shape_ring() {
        let pocket_area = 1.0 - PI / 4.0;
        run_curve_shape_test(
            &curve_closed![
                (0.0, 0.0, 0.0),
                (4.0, 0.0, 0.0),
                (4.0, 2.0, 0.0),
                (2.0, 2.0, 0.0),
                (2.0, 4.0, 0.0),
                (0.0, 4.0, 0.0)
            ],
            1.0,
            &[
                shape(27.0 + 1.25 * PI, 14.0 + 2.5 * PI, (-1.0, -1.0, 5.0, 5.0)),
                shape(-pocket_area, 2.0 + PI / 2.0, (1.0, 1.0, 2.0, 2.0)),
            ],
        );
    }

    #[test]
    fn square_ring_with_collapsed_hole() {
        // the inner parallel shrinks to the center point and leaves no hole
        run_curve_shape_test(
            &curve_closed![(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 4.0, 0.0), (0.0, 4.0, 0.0)],
            2.0,
            &[shape(48.0 + 4.0 * PI, 16.0 + 4.0 * PI, (-2.0, -2.0, 6.0, 6.0))],
        );
    }

    #[test]
    fn figure_eight_ring() {
        let sqrt2 = 2.0f64.sqrt();
        // holes are the lobe triangles scaled about their incenters
        let k = 0.75 - 0.25 * sqrt2;
        let hole_area = -4.0 * k * k;
        let hole_length = 4.0 * k * (1.0 + sqrt2);
        run_curve_shape_test(
            &curve_closed![(0.0, 0.0, 0.0), (4.0, 4.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 0.0)],
            0.5,
            &[
                shape(
                    11.5 + 4.0 * sqrt2 + 0.375 * PI,
                    6.0 + 8.0 * sqrt2 + 1.5 * PI,
                    (-0.5, -0.5, 4.5, 4.5),
                ),
                shape(
                    hole_area,
                    hole_length,
                    (0.5, 2.0 - 2.0 * k, 2.0 - 0.5 * sqrt2, 2.0 + 2.0 * k),
                ),
                shape(
                    hole_area,
                    hole_length,
                    (2.0 + 0.5 * sqrt2, 2.0 - 2.0 * k, 3.5, 2.0 + 2.0 * k),
                ),
            ],
        );
    }

    #[test]
    fn s_curve_band_past_arc_centers() {
        // distance exceeds both arc radii so the inner parallels collapse through the centers
        run_curve_shape_test(
            &curve_open![(0.0, 0.0, 1.0), (2.0, 0.0, -1.0), (4.0, 0.0, 0.0)],
            1.5,
            &[shape(
                24.971755253697474,
                19.57587104995223,
                (-1.5, -2.5, 5.5, 2.5),
            )],
        );
    }

    #[test]
    fn ray_band_keeps_open_end() {
        init_logging();
        let calculator = BufferCalculator::<f64>::DEFAULT;
        let ray: ContinuousCurve = Line::ray(vec2(1.0, 1.0), vec2(0.0, 1.0)).into();
        let domain = calculator.compute_buffer(&ray.into(), 0.5).unwrap();
        assert_eq!(domain.contours().len(), 1);
        let contour = &domain.contours()[0];
        assert!(!contour.is_bounded());
        // unbounded contours enclose no finite area
        assert_eq!(domain.area(), 0.0);
        assert!(!domain.is_bounded());
    }

    #[test]
    fn source_curves_buffered_together() {
        init_logging();
        let calculator = BufferCalculator::<f64>::DEFAULT;
        let source: CurveSet = vec![
            curve_open![(0.0, 0.0, 0.0), (4.0, 0.0, 0.0)],
            curve_open![(0.0, 10.0, 0.0), (4.0, 10.0, 0.0)],
        ]
        .into();
        let domain = calculator.compute_buffer(&source, 1.0).unwrap();
        let result_set = create_property_set(domain.contours());
        let expected = [
            props(4, 8.0 + PI, 8.0 + 2.0 * PI, (-1.0, -1.0, 5.0, 1.0)),
            props(4, 8.0 + PI, 8.0 + 2.0 * PI, (-1.0, 9.0, 5.0, 11.0)),
        ];
        assert!(property_sets_match(&result_set, &expected));
    }

    #[test]
    fn empty_source_gives_empty_domain() {
        let calculator = BufferCalculator::<f64>::DEFAULT;
        let domain = calculator.compute_buffer(&CurveSet::new(), 1.0).unwrap();
        assert!(domain.is_empty());
    }
}

mod test_point_set {
    use super::*;

    #[test]
    fn single_point_is_disk() {
        run_point_set_buffer_test(
            &[vec2(1.0, 2.0)],
            2.0,
            &[props(1, 4.0 * PI, 4.0 * PI, (-1.0, 0.0, 3.0, 4.0))],
        );
    }

    #[test]
    fn duplicate_points_collapse() {
        run_point_set_buffer_test(
            &[vec2(0.0, 0.0), vec2(0.0, 0.0)],
            -2.0,
            &[props(1, 4.0 * PI, 4.0 * PI, (-2.0, -2.0, 2.0, 2.0))],
        );
    }

    #[test]
    fn distant_points_are_separate_disks() {
        run_point_set_buffer_test(
            &[vec2(0.0, 0.0), vec2(10.0, 0.0)],
            1.0,
            &[
                props(1, PI, 2.0 * PI, (-1.0, -1.0, 1.0, 1.0)),
                props(1, PI, 2.0 * PI, (9.0, -1.0, 11.0, 1.0)),
            ],
        );
    }

    #[test]
    fn overlapping_disks_merge() {
        let lens_area = 2.0 * PI / 3.0 - 0.75f64.sqrt();
        run_point_set_buffer_test(
            &[vec2(0.0, 0.0), vec2(1.0, 0.0)],
            1.0,
            // one arc of the first circle, the second one's arc is split at its start point
            &[props(
                3,
                2.0 * PI - lens_area,
                8.0 * PI / 3.0,
                (-1.0, -1.0, 2.0, 1.0),
            )],
        );
    }

    #[test]
    fn three_overlapping_disks_merge() {
        let lens_area = 2.0 * PI / 3.0 - 0.75f64.sqrt();
        init_logging();
        let calculator = BufferCalculator::<f64>::DEFAULT;
        let domain = calculator
            .compute_point_set_buffer(&[vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(2.0, 0.0)], 1.0)
            .unwrap();
        let expected = [shape(
            3.0 * PI - 2.0 * lens_area,
            10.0 * PI / 3.0,
            (-1.0, -1.0, 3.0, 1.0),
        )];
        assert!(property_sets_match(&shape_set(&domain), &expected));
    }

    #[test]
    fn four_disks_enclose_hole() {
        init_logging();
        let calculator = BufferCalculator::<f64>::DEFAULT;
        let r = 1.2f64;
        let points = [vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(2.0, 2.0), vec2(0.0, 2.0)];
        let domain = calculator.compute_point_set_buffer(&points, r).unwrap();
        assert_eq!(domain.contours().len(), 2);

        // only side neighbors overlap, the diagonal ones are too far apart
        let lens_area = 2.0 * r * r * (1.0 / r).acos() - (4.0 * r * r - 4.0).sqrt();
        let expected = 4.0 * PI * r * r - 4.0 * lens_area;
        assert!(
            (domain.area() - expected).abs() < 1e-6,
            "area {} expected {}",
            domain.area(),
            expected
        );

        let result_set = create_property_set(domain.contours());
        let hole = result_set
            .iter()
            .find(|p| p.area < 0.0)
            .expect("buffer should have a hole");
        assert!(hole.extents.min_x > 0.0 && hole.extents.max_x < 2.0);
        assert!(hole.extents.min_y > 0.0 && hole.extents.max_y < 2.0);
    }
}
