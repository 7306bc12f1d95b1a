#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdev_core::{AlgorithmRegistry, DefaultRegistry, Variant, MAX_INDEX};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let k = u64::from(u16::from_le_bytes([data[0], data[1]])) % (MAX_INDEX.unsigned_abs() + 1);

    let registry = DefaultRegistry::new();
    let exact = registry.get(Variant::SegmentedLinear).compute(k).unwrap().to_decimal();
    let wrapped = registry.get(Variant::Linear).compute(k).unwrap();

    for variant in Variant::ALL {
        let value = registry.get(variant).compute(k).unwrap();
        if variant.is_big_integer() {
            assert_eq!(value.to_decimal(), exact, "{variant} at k={k}");
        } else {
            assert_eq!(value, wrapped, "{variant} at k={k}");
        }
    }
});
