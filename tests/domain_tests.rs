use chardot::common::DomainError;
use chardot::domains::movement::*;

#[test]
fn test_distance_is_symmetric() {
    let points = [(0, 0), (3, 4), (-7, 2), (5, 5), (-1, -9)];
    for a in points {
        for b in points {
            let p = Point::from(a);
            let q = Point::from(b);
            assert_eq!(p.distance_to(&q), q.distance_to(&p));
        }
        let p = Point::from(a);
        assert_eq!(p.distance_to(&p), 0.0);
    }
}

#[test]
fn test_path_from_origin_of_zero_delta_is_empty() {
    let path = Point::ORIGIN.path_from_origin().unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path.populated_count(), 0);
}

#[test]
fn test_path_from_origin_splits_axes() {
    let path = Point::from((3, -2)).path_from_origin().unwrap();
    let paces: Vec<&Pace> = path.paces().collect();
    assert_eq!(paces.len(), 2);

    assert_eq!(paces[0].direction(), Direction::Right);
    assert_eq!(paces[0].result().unwrap(), Coordinate::new(3));

    assert_eq!(paces[1].direction(), Direction::Backward);
    assert_eq!(paces[1].result().unwrap(), Coordinate::new(2));
    assert_eq!(paces[1].magnitude().unwrap(), Coordinate::new(2));
}

#[test]
fn test_path_from_origin_single_axis() {
    let path = Point::from((0, 7)).path_from_origin().unwrap();
    assert!(path.slot(0).is_none());
    let pace = path.slot(1).unwrap();
    assert_eq!(pace.direction(), Direction::Forward);
    assert_eq!(pace.result().unwrap(), Coordinate::new(7));

    let path = Point::from((-4, 0)).path_from_origin().unwrap();
    let pace = path.slot(0).unwrap();
    assert_eq!(pace.direction(), Direction::Left);
    assert_eq!(pace.magnitude().unwrap(), Coordinate::new(4));
    assert!(path.slot(1).is_none());
}

#[test]
fn test_displacement_classification() {
    let d = Point::from((5, 5))
        .displacement_to(&Point::from((2, 2)))
        .unwrap();
    // east side: from.x > to.x
    assert_eq!(d.direction, Direction::Northeast);
    assert!((d.quantity - 18f64.sqrt()).abs() < 1e-12);

    let d = Point::ORIGIN.displacement_to(&Point::from((3, 4))).unwrap();
    // west side: to.x > from.x
    assert_eq!(d.direction, Direction::Southwest);
    assert_eq!(d.quantity, 5.0);
    assert_eq!(d.from, Point::ORIGIN);
    assert_eq!(d.to, Point::from((3, 4)));
}

#[test]
fn test_displacement_between_origins_fails() {
    let err = Point::ORIGIN.displacement_to(&Point::ORIGIN).unwrap_err();
    assert!(matches!(err, DomainError::DegenerateDisplacement { .. }));
}

#[test]
fn test_paces_from_a_delta_recombine_into_it() {
    let path = Point::from((-3, -2)).path_from_origin().unwrap();
    let paces: Vec<&Pace> = path.paces().collect();
    let combined = paces[0].combine_with(paces[1]).unwrap();
    assert_eq!(combined, Point::from((-3, -2)));

    let path = Point::from((6, 1)).path_from_origin().unwrap();
    let paces: Vec<&Pace> = path.paces().collect();
    assert_eq!(paces[0].combine_with(paces[1]).unwrap(), Point::from((6, 1)));
}

#[test]
fn test_sign_flip_round_trip_for_non_negative_values() {
    for raw in [0, 1, 9, 12345] {
        let mut c = Coordinate::new(raw);
        c.negate().unwrap();
        assert!(c.to_int() <= 0);
        c.denegate().unwrap();
        assert_eq!(c.to_int(), raw);
    }
}
