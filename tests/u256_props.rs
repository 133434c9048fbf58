//! Property-based tests for `U256` arithmetic, rotation and hex text.
//!
//! Random values are built from eight random words so that carries,
//! borrows and cross-word rotations get exercised at every position.

use proptest::prelude::*;
use uint256::U256;

fn any_u256() -> impl Strategy<Value = U256> {
    any::<[u32; 8]>().prop_map(U256::from_words)
}

proptest! {
    #[test]
    fn zero_is_additive_identity(v in any_u256()) {
        prop_assert_eq!(v + U256::ZERO, v);
        prop_assert_eq!(U256::ZERO + v, v);
    }

    #[test]
    fn add_is_commutative(a in any_u256(), b in any_u256()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn add_is_associative(a in any_u256(), b in any_u256(), c in any_u256()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn negation_is_additive_inverse(v in any_u256()) {
        prop_assert_eq!(v + v.wrapping_neg(), U256::ZERO);
        prop_assert_eq!(-(-v), v);
    }

    #[test]
    fn sub_undoes_add(a in any_u256(), b in any_u256()) {
        prop_assert_eq!((a + b) - b, a);
        prop_assert_eq!(a - b, a + (-b));
    }

    #[test]
    fn checked_ops_agree_with_ordering(a in any_u256(), b in any_u256()) {
        prop_assert_eq!(a.checked_sub(b).is_some(), a >= b);

        let (sum, overflowed) = a.overflowing_add(b);
        prop_assert_eq!(overflowed, sum < a);
    }

    #[test]
    fn rotation_amount_is_taken_mod_256(v in any_u256(), n in any::<u32>()) {
        prop_assert_eq!(v.rotate_left(n), v.rotate_left(n % 256));
        prop_assert_eq!(v.rotate_right(n), v.rotate_right(n % 256));
    }

    #[test]
    fn rotate_right_undoes_rotate_left(v in any_u256(), n in any::<u32>()) {
        prop_assert_eq!(v.rotate_left(n).rotate_right(n), v);
        prop_assert_eq!(v.rotate_right(n).rotate_left(n), v);
    }

    #[test]
    fn rotate_left_is_rotate_right_by_complement(v in any_u256(), n in 0u32..256) {
        prop_assert_eq!(v.rotate_left(n), v.rotate_right(256 - n));
    }

    #[test]
    fn rotate_by_one_composes(v in any_u256(), n in 0u32..64) {
        let stepped = (0..n).fold(v, |acc, _| acc.rotate_left(1));
        prop_assert_eq!(stepped, v.rotate_left(n));
    }

    #[test]
    fn rotation_preserves_bit_count(v in any_u256(), n in any::<u32>()) {
        let ones = |x: U256| x.words().iter().map(|w| w.count_ones()).sum::<u32>();
        prop_assert_eq!(ones(v.rotate_left(n)), ones(v));
    }

    #[test]
    fn hex_round_trips_value(v in any_u256()) {
        prop_assert_eq!(U256::from_hex(&v.to_hex()).unwrap(), v);
    }

    #[test]
    fn hex_round_trips_text(hex in "[1-9a-f][0-9a-f]{0,63}") {
        prop_assert_eq!(U256::from_hex(&hex).unwrap().to_hex(), hex);
    }

    #[test]
    fn hex_parsing_is_case_insensitive(hex in "[0-9a-fA-F]{1,64}") {
        prop_assert_eq!(
            U256::from_hex(&hex).unwrap(),
            U256::from_hex(&hex.to_ascii_lowercase()).unwrap()
        );
    }

    #[test]
    fn hex_matches_native_formatting_for_u128(x in any::<u128>()) {
        prop_assert_eq!(U256::from(x).to_hex(), format!("{x:x}"));
        prop_assert_eq!(U256::from_hex(&format!("{x:x}")).unwrap(), U256::from(x));
    }

    #[test]
    fn add_matches_native_u128(a in any::<u64>(), b in any::<u64>()) {
        let sum = U256::from(a) + U256::from(b);
        prop_assert_eq!(u128::try_from(sum).unwrap(), a as u128 + b as u128);
    }

    #[test]
    fn byte_conversions_round_trip(v in any_u256()) {
        prop_assert_eq!(U256::from_be_bytes(v.to_be_bytes()), v);
        prop_assert_eq!(U256::from_le_bytes(v.to_le_bytes()), v);
    }
}
