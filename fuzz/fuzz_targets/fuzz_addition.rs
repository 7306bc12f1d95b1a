#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibdev_core::{BigNumber, DigitString, FibError, SegmentList};

fn sum<B: BigNumber>(a: &str, b: &str) -> Result<String, FibError> {
    let a = B::from_decimal(a)?;
    let mut b = B::from_decimal(b)?;
    a.add_into(&mut b)?;
    b.to_decimal_string()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte splits the rest into two digit strings.
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let to_digits = |bytes: &[u8]| -> String {
        let s: String = bytes.iter().map(|b| char::from(b'0' + b % 10)).collect();
        if s.is_empty() {
            "0".to_string()
        } else {
            s
        }
    };
    let a = to_digits(&data[1..split]);
    let b = to_digits(&data[split..]);

    let expected: BigUint = a.parse::<BigUint>().unwrap() + b.parse::<BigUint>().unwrap();
    let expected = expected.to_string();

    assert_eq!(sum::<SegmentList>(&a, &b).unwrap(), expected, "segmented {a} + {b}");
    match sum::<DigitString>(&a, &b) {
        Ok(s) => assert_eq!(s, expected, "digit string {a} + {b}"),
        Err(FibError::CapacityExceeded { .. }) => {
            assert!(expected.len() > 1024 || a.len() > 1024 || b.len() > 1024);
        }
        Err(e) => panic!("digit string {a} + {b}: {e}"),
    }
});
