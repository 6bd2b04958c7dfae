#![no_main]

use libfuzzer_sys::fuzz_target;

use paysplit_operations::Operation;
use paysplit_types::FeeSchedule;

// Decoding arbitrary bytes never panics, and anything that decodes
// re-encodes to bytes that decode to the same operation.
fuzz_target!(|data: &[u8]| {
    let Ok(op) = Operation::decode(data) else {
        return;
    };
    let encoded = op.encode().expect("decoded operation must re-encode");
    let again = Operation::decode(&encoded).expect("re-encoded operation must decode");
    assert_eq!(again, op);

    // Stateless checks must not panic on decoded garbage either.
    let _ = op.validate();
    let _ = op.calculate_fee(&FeeSchedule::genesis_defaults());
});
