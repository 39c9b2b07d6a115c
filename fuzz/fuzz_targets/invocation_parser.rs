#![no_main]

use libfuzzer_sys::fuzz_target;
use test_vm::{emitter, Invocation};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // NUL-separated tokens stand in for argv
        let args: Vec<&str> = input.split('\0').collect();
        if let Ok(mut inv) = Invocation::from_args(args) {
            // Bound the work so large counts don't stall the fuzzer
            inv.iterations = inv.iterations.min(64);
            let lines = emitter::measurements(&inv).count() as u64;
            assert_eq!(lines, inv.expected_line_count());
        }
    }
});
