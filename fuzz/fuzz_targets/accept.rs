#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(input) => input,
        Err(_) => return,
    };

    if let Ok(accept) = http_rfcx::accept::parse(input) {
        let rendered = accept.to_string();
        let reparsed = http_rfcx::accept::parse(&rendered).expect("rendered accept reparses");
        assert_eq!(reparsed.media_ranges().len(), accept.media_ranges().len());
        accept.most_acceptable(&["text/html", "application/json"]);
    }
});
