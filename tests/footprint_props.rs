//! Property tests for footprint and wall loop construction

mod common;

use bim_envelope::units::{self, Unit};
use bim_envelope::{CreateModelCommand, CreationConfig, EdgeSide, Footprint, HostDocument, Length};
use bim_envelope::config::Dimension;
use common::reference_document;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_footprint_is_closed_rectangle(dx in 0.01f64..1000.0, dy in 0.01f64..1000.0) {
        let fp = Footprint::rectangle(Length::from_internal(dx), Length::from_internal(dy));
        let points = fp.points();

        prop_assert_eq!(points.len(), 5);
        prop_assert_eq!(points[0], points[4]);
        prop_assert!(points.iter().all(|p| p.z == 0.0));
        prop_assert!(fp.signed_area() > 0.0);

        let expected = 4.0 * dx * dy;
        prop_assert!((fp.area() - expected).abs() <= 1e-9 * expected.max(1.0));
        prop_assert!((fp.length() - 2.0 * dx).abs() <= 1e-9 * dx.max(1.0));
        prop_assert!((fp.depth() - 2.0 * dy).abs() <= 1e-9 * dy.max(1.0));
    }

    #[test]
    fn prop_edges_join_consecutive_points(dx in 0.01f64..1000.0, dy in 0.01f64..1000.0) {
        let fp = Footprint::rectangle(Length::from_internal(dx), Length::from_internal(dy));
        let points = fp.points();
        for (side, line) in fp.edges() {
            let i = side.index();
            prop_assert_eq!(line.start, points[i]);
            prop_assert_eq!(line.end, points[i + 1]);
        }
    }

    #[test]
    fn prop_front_and_back_span_the_length(dx in 0.01f64..1000.0, dy in 0.01f64..1000.0) {
        let fp = Footprint::rectangle(Length::from_internal(dx), Length::from_internal(dy));
        let tol = 1e-9 * dx.max(dy).max(1.0);
        for side in [EdgeSide::Front, EdgeSide::Back] {
            prop_assert!((fp.edge(side).length() - 2.0 * dx).abs() <= tol);
        }
        for side in [EdgeSide::Right, EdgeSide::Left] {
            prop_assert!((fp.edge(side).length() - 2.0 * dy).abs() <= tol);
        }
    }

    #[test]
    fn prop_millimeters_round_trip(value in -1.0e6f64..1.0e6) {
        let internal = units::to_internal(value, Unit::Millimeters).unwrap();
        let back = units::from_internal(internal, Unit::Millimeters).unwrap();
        prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_walls_are_centered_on_origin(length in 100.0f64..50_000.0, depth in 100.0f64..50_000.0) {
        let mut doc = reference_document();
        let config = CreationConfig {
            length: Dimension::millimeters(length),
            depth: Dimension::millimeters(depth),
            ..CreationConfig::default()
        };
        let report = CreateModelCommand::new(config).run(&mut doc).unwrap();

        let dx = units::to_internal(length, Unit::Millimeters).unwrap().value() / 2.0;
        let dy = units::to_internal(depth, Unit::Millimeters).unwrap().value() / 2.0;
        let front = doc.element(report.walls[EdgeSide::Front]).unwrap().as_wall().unwrap();
        prop_assert!((front.location.start.x + dx).abs() <= 1e-9 * dx);
        prop_assert!((front.location.start.y + dy).abs() <= 1e-9 * dy);
        prop_assert!((front.location.end.x - dx).abs() <= 1e-9 * dx);
        prop_assert_eq!(doc.family_instances().count(), 4);
    }
}
