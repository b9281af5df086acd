#![no_main]

use airdrop::utils::{verify_ed25519_data, ClaimMessage, Ed25519SignatureOffsets};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 40 + 64 {
        return;
    }

    let (expected, instruction_data) = data.split_at(40 + 64);
    let (message, signature) = expected.split_at(40);

    // Arbitrary instruction data must never panic the checker.
    let _ = verify_ed25519_data(instruction_data, &message[..32], message, signature);
    let _ = Ed25519SignatureOffsets::parse(instruction_data.get(2..16).unwrap_or(&[]));

    // Any 40-byte message decodes and re-encodes to itself.
    if let Some(decoded) = ClaimMessage::from_bytes(message) {
        assert_eq!(&decoded.to_bytes()[..], message);
    }
});
