use packhub_domain::constants::{DEFAULT_PACK_SIZES, ITEM_COUNT_PARAM, PACKING_TAG, SYSTEM_TAG};

#[test]
fn default_pack_sizes_are_sorted_and_positive() {
    assert_eq!(DEFAULT_PACK_SIZES, [250, 500, 1000, 2000, 5000]);
    assert!(DEFAULT_PACK_SIZES.windows(2).all(|w| w[0] < w[1]));
    assert!(DEFAULT_PACK_SIZES.iter().all(|&s| s > 0));
}

#[test]
fn constants_match_wire_strings() {
    assert_eq!(ITEM_COUNT_PARAM, "itemCount");
    assert_eq!(SYSTEM_TAG, "System");
    assert_eq!(PACKING_TAG, "Packing");
}
