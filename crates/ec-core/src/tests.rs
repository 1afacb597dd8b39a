//! Unit tests for ec-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AttractivenessClass, DeviceId, PlaceId};

    #[test]
    fn index_and_try_from() {
        let id = DeviceId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(DeviceId::try_from(42usize).unwrap(), id);
        assert!(AttractivenessClass::try_from(300usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(DeviceId(7).to_string(), "DeviceId(7)");
        assert_eq!(PlaceId(3).to_string(), "PlaceId(3)");
        assert_eq!(AttractivenessClass(1).to_string(), "AttractivenessClass(1)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, SimTime};

    #[test]
    fn arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t + 2.5, SimTime(12.5));
        assert_eq!(t.after(0.0), t);
        assert_eq!(SimTime(15.0) - SimTime(10.0), 5.0);
    }

    #[test]
    fn total_order() {
        let mut v = vec![SimTime(3.0), SimTime(0.5), SimTime(2.0), SimTime::ZERO];
        v.sort();
        assert_eq!(v, vec![SimTime::ZERO, SimTime(0.5), SimTime(2.0), SimTime(3.0)]);
        assert!(SimTime(1.0) < SimTime(1.000_001));
    }

    #[test]
    fn try_from_secs_rejects_bad_values() {
        assert!(SimTime::try_from_secs(0.0).is_ok());
        assert!(SimTime::try_from_secs(3600.0).is_ok());
        assert!(SimTime::try_from_secs(-1.0).is_err());
        assert!(SimTime::try_from_secs(f64::NAN).is_err());
        assert!(SimTime::try_from_secs(f64::INFINITY).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(SimTime(1.5).to_string(), "t=1.500s");
    }

    #[test]
    fn config_validation() {
        let ok = SimConfig::new(10, 42, SimTime(100.0));
        assert!(ok.validate().is_ok());

        let no_devices = SimConfig::new(0, 42, SimTime(100.0));
        assert!(no_devices.validate().is_err());

        let bad_end = SimConfig::new(1, 42, SimTime(f64::NAN));
        assert!(bad_end.validate().is_err());

        let mut bad_snapshot = SimConfig::new(1, 42, SimTime(100.0));
        bad_snapshot.snapshot_interval = Some(0.0);
        assert!(bad_snapshot.validate().is_err());
        bad_snapshot.snapshot_interval = Some(10.0);
        assert!(bad_snapshot.validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use rand::RngCore;

    use crate::SimRng;

    fn draw(rng: &mut SimRng) -> u64 {
        rng.inner().next_u64()
    }

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(draw(&mut r1), draw(&mut r2));
        }
    }

    #[test]
    fn children_differ_from_each_other_and_parent() {
        let root = SimRng::new(1);
        let p = draw(&mut root.clone());
        let a = draw(&mut root.child(0));
        let b = draw(&mut root.child(1));
        assert_ne!(a, b, "adjacent child streams should diverge");
        assert_ne!(a, p);
    }

    #[test]
    fn child_does_not_depend_on_parent_consumption() {
        let mut root = SimRng::new(9);
        let before = draw(&mut root.child(3));
        for _ in 0..10 {
            draw(&mut root);
        }
        let after = draw(&mut root.child(3));
        assert_eq!(before, after);
    }

    #[test]
    fn index_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(rng.index(3) < 3);
        }
    }
}
