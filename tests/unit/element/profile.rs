//! Tests for profile defaults and identity

#[cfg(test)]
mod tests {
    use gridstash::element::profile::same_profile;
    use gridstash::element::{
        BasicProfile, CombineOutcome, Element, ElementProfile, ProfileRef, RuntimeData,
    };
    use gridstash::math::Size;
    use std::cell::Cell;
    use std::rc::Rc;

    // Tests the trait defaults a minimal profile inherits
    #[test]
    fn test_basic_profile_defaults() {
        let profile = BasicProfile::shared(3, 2);

        assert_eq!(profile.size(), Size::new(3, 2));
        assert_eq!(profile.default_runtime(), RuntimeData::Empty);
        assert_eq!(profile.reference(), None);

        let mut existing = Element::new(Rc::clone(&profile));
        let mut incoming = Element::new(Rc::clone(&profile));
        assert_eq!(
            profile.combine(&mut existing, &mut incoming),
            CombineOutcome::Rejected
        );
    }

    // Tests that profile identity is by instance, not by content
    // Verified by comparing sizes in same_profile
    #[test]
    fn test_same_profile_compares_instances() {
        let a = BasicProfile::shared(1, 1);
        let b = BasicProfile::shared(1, 1);
        let a_again: ProfileRef = Rc::clone(&a);

        assert!(same_profile(&a, &a_again));
        assert!(!same_profile(&a, &b));
    }

    #[test]
    fn test_updated_notifies_listeners() {
        let profile = BasicProfile::new(1, 1);
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        profile.updates().subscribe(move |_| seen.set(seen.get() + 1));

        profile.updated();
        profile.updated();

        assert_eq!(hits.get(), 2);
    }
}
