//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::MacAddress;
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_hex_octets_create_address(octets in prop::collection::vec("[0-9a-fA-F]{2}", 6)) {
        let colon_form = octets.join(":");
        let mac = MacAddress::new(&colon_form);
        prop_assert!(mac.is_ok());

        let mac = mac.unwrap();
        prop_assert_eq!(mac.as_str(), colon_form.to_ascii_uppercase());
    }

    #[test]
    fn hyphen_and_colon_forms_normalize_identically(
        octets in prop::collection::vec("[0-9a-f]{2}", 6)
    ) {
        let colon = MacAddress::new(octets.join(":")).unwrap();
        let hyphen = MacAddress::new(octets.join("-")).unwrap();
        prop_assert_eq!(colon, hyphen);
    }

    #[test]
    fn wrong_octet_count_is_rejected(
        octets in prop::collection::vec("[0-9a-f]{2}", 0..12usize)
            .prop_filter("six octets are valid", |v| v.len() != 6)
    ) {
        prop_assert!(MacAddress::new(octets.join(":")).is_err());
    }

    #[test]
    fn normalization_is_idempotent(octets in prop::collection::vec("[0-9a-fA-F]{2}", 6)) {
        let once = MacAddress::new(octets.join(":")).unwrap();
        let twice = MacAddress::new(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
