//! Unit tests for sweep-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CleanerId, MarkerId};

    #[test]
    fn index_roundtrip() {
        let id = CleanerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CleanerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CleanerId(0) < CleanerId(1));
        assert!(MarkerId(100) > MarkerId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CleanerId::INVALID.0, u32::MAX);
        assert_eq!(MarkerId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(CleanerId(7).to_string(), "CleanerId(7)");
    }
}

#[cfg(test)]
mod pos {
    use crate::GridPos;

    #[test]
    fn offset_within_range() {
        let p = GridPos::new(3, 4);
        assert_eq!(p.offset(1, -1), Some(GridPos::new(4, 3)));
        assert_eq!(p.offset(0, 0), Some(p));
    }

    #[test]
    fn offset_underflow_is_none() {
        let origin = GridPos::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
    }

    #[test]
    fn display() {
        assert_eq!(GridPos::new(2, 5).to_string(), "(2, 5)");
    }

    #[test]
    fn from_tuple() {
        assert_eq!(GridPos::from((2, 5)), GridPos::new(2, 5));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn dirty_cell_count_floors() {
        // 3x3 grid at 50% → floor(4.5) = 4 dirty cells.
        let cfg = SimConfig::new(1, 3, 3, 0.5, 10, 42);
        assert_eq!(cfg.cell_count(), 9);
        assert_eq!(cfg.dirty_cell_count(), 4);
    }

    #[test]
    fn dirty_cell_count_extremes() {
        let all = SimConfig::new(1, 4, 4, 1.0, 10, 42);
        assert_eq!(all.dirty_cell_count(), 16);
        let none = SimConfig::new(1, 4, 4, 0.0, 10, 42);
        assert_eq!(none.dirty_cell_count(), 0);
    }

    #[test]
    fn validate_accepts_sane_config() {
        assert!(SimConfig::new(2, 10, 10, 0.3, 100, 42).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        assert!(SimConfig::new(1, 0, 5, 0.5, 10, 42).validate().is_err());
        assert!(SimConfig::new(1, 5, 0, 0.5, 10, 42).validate().is_err());
    }

    #[test]
    fn validate_rejects_fraction_out_of_range() {
        assert!(SimConfig::new(1, 5, 5, 1.5, 10, 42).validate().is_err());
        assert!(SimConfig::new(1, 5, 5, -0.1, 10, 42).validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_cleaners() {
        assert!(SimConfig::new(0, 5, 5, 0.5, 10, 42).validate().is_err());
    }

    #[test]
    fn end_tick() {
        assert_eq!(SimConfig::new(1, 5, 5, 0.5, 25, 42).end_tick(), Tick(25));
    }
}

#[cfg(test)]
mod rng {
    use crate::{CleanerId, CleanerRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = CleanerRng::new(12345, CleanerId(0));
        let mut r2 = CleanerRng::new(12345, CleanerId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_cleaners_differ() {
        let mut r0 = CleanerRng::new(1, CleanerId(0));
        let mut r1 = CleanerRng::new(1, CleanerId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent cleaners should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = CleanerRng::new(0, CleanerId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = CleanerRng::new(0, CleanerId(0));
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = CleanerRng::new(0, CleanerId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn shuffle_is_deterministic() {
        let mut a = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut b = a;
        SimRng::new(7).shuffle(&mut a);
        SimRng::new(7).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn sample_indices_distinct_and_in_range() {
        let mut rng = SimRng::new(42);
        let mut sampled = rng.sample_indices(100, 30);
        assert_eq!(sampled.len(), 30);
        assert!(sampled.iter().all(|&i| i < 100));
        sampled.sort_unstable();
        sampled.dedup();
        assert_eq!(sampled.len(), 30, "indices must be sampled without replacement");
    }

    #[test]
    fn sample_indices_full_population() {
        let mut rng = SimRng::new(42);
        let mut sampled = rng.sample_indices(10, 10);
        sampled.sort_unstable();
        assert_eq!(sampled, (0..10).collect::<Vec<_>>());
    }
}
