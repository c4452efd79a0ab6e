mod closest_pair {
  use planesweep::algorithms::{closest_pair, closest_pair_naive};
  use planesweep::data::*;
  use planesweep::*;

  fn points(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
    coords.iter().map(|&c| Point::from(c)).collect()
  }

  #[test]
  fn nine_points() -> Result<(), Error> {
    let pts = points(&[
      (1.0, 0.0),
      (2.0, 0.5),
      (3.0, 7.0),
      (4.0, 4.0),
      (5.0, 2.0),
      (6.0, 3.0),
      (7.0, 1.0),
      (8.0, 5.0),
      (9.0, 5.0),
    ]);
    let (a, b, dist) = closest_pair(&pts)?;
    let (na, nb, naive_dist) = closest_pair_naive(&pts)?;
    assert_eq!((a, b), (na, nb));
    assert_eq!(dist, naive_dist);
    assert_eq!(dist, 1.0);
    Ok(())
  }

  #[test]
  fn first_points_only() -> Result<(), Error> {
    let pts = points(&[(1.0, 0.0), (2.0, 0.5), (3.0, 7.0), (4.0, 4.0), (5.0, 2.0)]);
    let (a, b, dist) = closest_pair(&pts)?;
    assert_eq!((a, b), (&pts[0], &pts[1]));
    assert_eq!(dist, 1.25f64.sqrt());
    assert_eq!(closest_pair_naive(&pts)?.2, dist);
    Ok(())
  }

  #[test]
  fn exactly_two_points() -> Result<(), Error> {
    let pts = points(&[(-1.0, 2.0), (2.0, -2.0)]);
    assert_eq!(closest_pair(&pts)?, (&pts[0], &pts[1], 5.0));
    assert_eq!(closest_pair_naive(&pts)?, (&pts[0], &pts[1], 5.0));
    Ok(())
  }

  #[test]
  fn all_coincident() -> Result<(), Error> {
    let pts = vec![Point::new([3.0, 3.0]); 12];
    let (a, b, dist) = closest_pair(&pts)?;
    assert_eq!(dist, 0.0);
    assert_eq!(a, b);
    assert_eq!(closest_pair_naive(&pts)?.2, 0.0);
    Ok(())
  }

  #[test]
  fn rejects_bad_input() {
    let one = points(&[(0.0, 0.0)]);
    let err = closest_pair(&one).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.to_string(), "Insufficient points");
    let nan = points(&[(0.0, 0.0), (f64::NAN, 0.0)]);
    assert_eq!(closest_pair_naive(&nan), Err(Error::NonFiniteCoordinate));
  }
}

mod segment_intersections {
  use planesweep::algorithms::intersection::bentley_ottmann::{BentleyOttmann, Phase};
  use planesweep::algorithms::{segment_intersections, segment_intersections_naive};
  use planesweep::data::*;
  use planesweep::*;

  #[test]
  fn crossing_example() -> Result<(), Error> {
    let segments = vec![
      LineSegment::from((1.0, 2.0)..(2.0, 2.0)),
      LineSegment::from((1.9, 1.0)..(2.1, 3.0)),
      LineSegment::from((1.8, 1.1)..(2.2, 3.1)),
      LineSegment::from((0.0, 0.0)..(6.0, 5.0)),
    ];
    let sweep = segment_intersections(&segments)?;
    let naive = segment_intersections_naive(&segments)?;
    assert_eq!(sweep.len(), naive.len());
    for ((i, j, a), (k, l, b)) in sweep.iter().zip(naive.iter()) {
      assert_eq!((i, j), (k, l));
      assert!(a.approx_eq(b, 1e-4));
    }
    let pairs: Vec<(usize, usize)> = sweep.iter().map(|&(i, j, _)| (i, j)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
    Ok(())
  }

  #[test]
  fn single_segment() -> Result<(), Error> {
    let segments = vec![LineSegment::from((0.0, 0.0)..(1.0, 1.0))];
    assert!(segment_intersections(&segments)?.is_empty());
    assert!(segment_intersections_naive(&segments)?.is_empty());
    Ok(())
  }

  #[test]
  fn accepts_point_ranges() -> Result<(), Error> {
    let segments = vec![
      Point::new([0.0, 0.0])..Point::new([2.0, 2.0]),
      Point::new([0.0, 2.0])..Point::new([2.0, 0.0]),
    ];
    assert_eq!(
      segment_intersections(&segments)?,
      vec![(0, 1, Point::new([1.0, 1.0]))]
    );
    Ok(())
  }

  #[test]
  fn colinear_overlap_is_a_known_gap() -> Result<(), Error> {
    let segments = vec![
      LineSegment::from((0.0, 0.0)..(3.0, 0.0)),
      LineSegment::from((1.0, 0.0)..(4.0, 0.0)),
    ];
    assert!(segment_intersections(&segments)?.is_empty());
    assert!(segment_intersections_naive(&segments)?.is_empty());
    Ok(())
  }

  #[test]
  fn stepping() -> Result<(), Error> {
    let segments = vec![
      LineSegment::from((0.0, 0.0)..(4.0, 4.0)),
      LineSegment::from((0.0, 4.0)..(4.0, 0.0)),
      LineSegment::from((2.0, -1.0)..(2.0, 5.0)),
    ];
    let mut sweep = BentleyOttmann::new(&segments)?;
    assert_eq!(sweep.phase(), Phase::Idle);
    let mut last = f64::NEG_INFINITY;
    while sweep.step() {
      let x = sweep.sweep_x().unwrap();
      assert!(x >= last);
      last = x;
    }
    assert_eq!(sweep.phase(), Phase::Done);
    assert_eq!(sweep.intersections().len(), 3);
    Ok(())
  }

  #[test]
  fn rejects_bad_input() {
    let none: Vec<LineSegment> = vec![];
    let err = segment_intersections(&none).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err, Error::NoSegments);
    let inf = vec![LineSegment::from((0.0, 0.0)..(f64::INFINITY, 1.0))];
    assert_eq!(
      segment_intersections_naive(&inf),
      Err(Error::NonFiniteCoordinate)
    );
  }
}
