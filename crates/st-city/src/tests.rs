//! Unit tests for st-city.

#[cfg(test)]
mod spiral {
    use crate::spiral_layout;

    #[test]
    fn seats_ring_the_center() {
        let seats = spiral_layout(10, (400.0, 400.0), 20.0, 0.0);
        assert_eq!(seats.len(), 10);
        for seat in &seats {
            let r = (seat.x - 400.0).hypot(seat.y - 400.0);
            assert!((39.9..=44.1).contains(&r), "radius {r} outside the ring");
        }
    }

    #[test]
    fn first_seat_follows_offset() {
        let seats = spiral_layout(5, (0.0, 0.0), 20.0, 0.0);
        // sin(0) = 0, cos(0) = 1: city 0 heads straight down +y.
        assert!(seats[0].vx.abs() < 1e-12);
        assert!((seats[0].vy - 20.0).abs() < 1e-12);
        assert!((seats[0].y - 40.0).abs() < 1e-12);
    }

    #[test]
    fn speed_grows_along_the_spiral() {
        let seats = spiral_layout(50, (0.0, 0.0), 20.0, 1.0);
        let speeds: Vec<f64> = seats.iter().map(|s| s.vx.hypot(s.vy)).collect();
        assert!(speeds.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn empty_population() {
        assert!(spiral_layout(0, (0.0, 0.0), 20.0, 0.0).is_empty());
    }
}

#[cfg(test)]
mod friends {
    use st_core::{CityId, SimRng};

    use crate::{CityError, CityStore, assign_friends, pick_friend};

    #[test]
    fn never_self() {
        let mut rng = SimRng::new(3);
        for n in [2_usize, 5, 10, 400] {
            for i in 0..n as u32 {
                let f = pick_friend(CityId(i), n, &mut rng).unwrap();
                assert_ne!(f, CityId(i));
                assert!(f.index() < n);
            }
        }
    }

    #[test]
    fn friends_are_a_short_hop_forward() {
        let mut rng = SimRng::new(11);
        let n = 10;
        for i in 0..n {
            let f = pick_friend(CityId(i as u32), n, &mut rng).unwrap();
            let hop = (f.index() + n - i) % n;
            assert!((1..=2).contains(&hop), "hop {hop} for N = {n}");
        }
    }

    #[test]
    fn lone_city_has_no_friend() {
        let mut rng = SimRng::new(1);
        let err = pick_friend(CityId(0), 1, &mut rng).unwrap_err();
        assert!(matches!(err, CityError::NoValidFriend { city: CityId(0), .. }));
    }

    #[test]
    fn assign_fills_every_slot() {
        let mut store = CityStore::new(25);
        let mut rng = SimRng::new(5);
        assign_friends(&mut store, &mut rng).unwrap();
        for city in store.city_ids() {
            let f = store.friend_of(city);
            assert_ne!(f, CityId::INVALID);
            assert_ne!(f, city);
        }
    }
}

#[cfg(test)]
mod store {
    use st_core::CityId;

    use crate::CityStore;

    #[test]
    fn new_is_at_rest_without_friends() {
        let store = CityStore::new(4);
        assert_eq!(store.count, 4);
        assert!(!store.is_empty());
        assert_eq!(store.city_ids().count(), 4);
        assert!(store.friend.iter().all(|f| *f == CityId::INVALID));
        assert_eq!(store.velocity(CityId(2)), (0.0, 0.0));
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let mut store = CityStore::new(2);
        store.x[1] = 3.0;
        store.y[1] = 4.0;
        assert_eq!(store.distance(CityId(0), CityId(1)), 5.0);
        assert_eq!(store.distance(CityId(1), CityId(0)), 5.0);
        assert_eq!(store.distance(CityId(1), CityId(1)), 0.0);
    }

    #[test]
    fn positions_copy() {
        let mut store = CityStore::new(2);
        store.x[0] = 1.0;
        store.y[1] = 2.0;
        assert_eq!(store.positions(), vec![(1.0, 0.0), (0.0, 2.0)]);
    }
}

#[cfg(test)]
mod motion {
    use st_core::{BlendMode, CityId, CityRng, Color, FieldConfig};
    use st_paint::{DABS_PER_STROKE, GrainPainter, PainterStyle, TravelerStyle};
    use st_surface::PixelBuffer;

    use crate::{CityBrushes, CityStore, DAMPING};

    fn one_brush(painters: usize) -> CityBrushes {
        let style = PainterStyle::for_mode(BlendMode::Normal);
        CityBrushes {
            painters:  vec![vec![GrainPainter::new(Color::WHITE, style, 0.5, 0.05); painters]],
            travelers: vec![TravelerStyle { mode: BlendMode::Normal, color: Color::WHITE, alpha: 255.0 }],
            rngs:      vec![CityRng::new(9, CityId(0))],
        }
    }

    fn quiet() -> FieldConfig {
        FieldConfig { use_sand_painters: false, draw_travelers: false, ..FieldConfig::default() }
    }

    #[test]
    fn spring_then_damp_then_integrate() {
        let mut store = CityStore::new(1);
        let mut brushes = one_brush(0);
        let mut surface = PixelBuffer::new(10, 10, Color::BLACK).unwrap();

        let landed = store.advance(CityId(0), (1000.0, 0.0), &mut brushes, &mut surface, &quiet());

        assert_eq!(landed, 0);
        assert!((store.vx[0] - DAMPING).abs() < 1e-12);
        assert!((store.x[0] - DAMPING).abs() < 1e-12);
        assert_eq!(store.vy[0], 0.0);
        assert_eq!(surface.count_not(Color::BLACK), 0);
    }

    #[test]
    fn velocity_decays_without_pull() {
        let mut store = CityStore::new(1);
        store.vx[0] = 10.0;
        let mut brushes = one_brush(0);
        let mut surface = PixelBuffer::new(10, 10, Color::BLACK).unwrap();

        store.advance(CityId(0), (0.0, 0.0), &mut brushes, &mut surface, &quiet());

        // Friend sits at the origin, the city too: no spring, only damping.
        assert!((store.vx[0] - 10.0 * DAMPING).abs() < 1e-12);
    }

    #[test]
    fn close_pair_paints_every_painter() {
        let config = FieldConfig { draw_travelers: false, draw_perpendicular: false, ..FieldConfig::default() };
        let mut store = CityStore::new(1);
        store.x[0] = 50.0;
        store.y[0] = 50.0;
        let mut brushes = one_brush(3);
        let mut surface = PixelBuffer::new(100, 100, Color::BLACK).unwrap();

        let landed = store.advance(CityId(0), (60.0, 50.0), &mut brushes, &mut surface, &config);

        assert_eq!(landed, 3 * DABS_PER_STROKE);
        assert!(surface.count_not(Color::BLACK) > 0);
    }

    #[test]
    fn close_pair_paints_crosswise() {
        let config = FieldConfig { draw_travelers: false, draw_perpendicular: true, ..FieldConfig::default() };
        let mut store = CityStore::new(1);
        store.x[0] = 50.0;
        store.y[0] = 50.0;
        let mut brushes = one_brush(1);
        let mut surface = PixelBuffer::new(100, 100, Color::BLACK).unwrap();

        let landed = store.advance(CityId(0), (60.0, 50.0), &mut brushes, &mut surface, &config);

        assert_eq!(landed, DABS_PER_STROKE);
    }

    #[test]
    fn distant_pair_paints_nothing() {
        let config = FieldConfig { draw_travelers: false, distance_minimum: 5.0, ..FieldConfig::default() };
        let mut store = CityStore::new(1);
        store.x[0] = 10.0;
        store.y[0] = 10.0;
        let mut brushes = one_brush(3);
        let mut surface = PixelBuffer::new(100, 100, Color::BLACK).unwrap();

        let landed = store.advance(CityId(0), (90.0, 90.0), &mut brushes, &mut surface, &config);

        assert_eq!(landed, 0);
        assert_eq!(surface.count_not(Color::BLACK), 0);
    }

    #[test]
    fn travelers_paint_regardless_of_distance() {
        let config = FieldConfig {
            draw_travelers: true,
            use_sand_painters: false,
            distance_minimum: 5.0,
            ..FieldConfig::default()
        };
        let mut store = CityStore::new(1);
        store.x[0] = 10.0;
        store.y[0] = 10.0;
        let mut brushes = one_brush(3);
        let mut surface = PixelBuffer::new(100, 100, Color::BLACK).unwrap();

        let landed = store.advance(CityId(0), (90.0, 90.0), &mut brushes, &mut surface, &config);

        assert!(landed > 0);
        assert!(surface.count_not(Color::BLACK) > 0);
    }
}

#[cfg(test)]
mod builder {
    use st_core::{CityId, FieldConfig, SimRng};

    use crate::CityStoreBuilder;

    fn config(n: usize) -> FieldConfig {
        FieldConfig { city_count: n, ..FieldConfig::default() }
    }

    #[test]
    fn ten_cities_ring_the_center_with_valid_friends() {
        let config = config(10);
        let mut rng = SimRng::new(42);
        let (store, brushes) = CityStoreBuilder::new(&config, 42).build(&mut rng).unwrap();

        assert_eq!(store.count, 10);
        assert_eq!(brushes.len(), 10);
        let (cx, cy) = config.center();
        for city in store.city_ids() {
            let (x, y) = store.position(city);
            let r = (x - cx).hypot(y - cy);
            assert!((39.9..=44.1).contains(&r));
            let f = store.friend_of(city);
            assert_ne!(f, city);
            assert!(f.index() < 10);
        }
    }

    #[test]
    fn every_city_gets_its_painters() {
        let config = FieldConfig { sand_painter_count: 4, ..config(7) };
        let mut rng = SimRng::new(1);
        let (_, brushes) = CityStoreBuilder::new(&config, 1).build(&mut rng).unwrap();
        for i in 0..7 {
            let painters = brushes.painters_of(CityId(i));
            assert_eq!(painters.len(), 4);
            for p in painters {
                assert!(config.palette.colors().contains(&p.color()));
                assert!((0.01..0.1).contains(&p.grain_distance()));
                assert!((0.0..1.0).contains(&p.p()));
            }
        }
    }

    #[test]
    fn same_seeds_same_cities() {
        let config = config(30);
        let mut a_rng = SimRng::new(77);
        let mut b_rng = SimRng::new(77);
        let (a, a_brushes) = CityStoreBuilder::new(&config, 5).build(&mut a_rng).unwrap();
        let (b, b_brushes) = CityStoreBuilder::new(&config, 5).build(&mut b_rng).unwrap();
        assert_eq!(a, b);
        assert_eq!(a_brushes.painters, b_brushes.painters);
        assert_eq!(a_brushes.travelers, b_brushes.travelers);
    }

    #[test]
    fn zero_painters_is_allowed() {
        let config = FieldConfig { sand_painter_count: 0, ..config(5) };
        let mut rng = SimRng::new(2);
        let (_, brushes) = CityStoreBuilder::new(&config, 2).build(&mut rng).unwrap();
        assert!(brushes.painters.iter().all(Vec::is_empty));
    }
}
