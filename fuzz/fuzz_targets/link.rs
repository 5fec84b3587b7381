#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(input) => input,
        Err(_) => return,
    };

    if let Ok(link) = http_rfcx::link::parse(input) {
        let rendered = link.to_string();
        // escaped quotes and empty values in the middle don't read back
        if let Ok(reparsed) = http_rfcx::link::parse(&rendered) {
            assert_eq!(reparsed.href, link.href);
        }
    }
});
