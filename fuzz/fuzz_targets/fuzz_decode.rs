#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Bound allocations so hostile headers can't request gigabytes.
    let limits = bmpview::Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };

    // Decode must never panic, whatever the input bytes.
    let decoded = bmpview::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);

    // Neither must the downstream pipeline on any grid that decodes.
    if let Ok(decoded) = decoded {
        let state = bmpview::TransformState {
            brightness: 150,
            green: false,
            ..Default::default()
        };
        let adjusted = bmpview::adjust(decoded.grid(), &state);
        let scaled = bmpview::resize(&adjusted, 37);
        let _ = bmpview::encode_ppm(&scaled, enough::Unstoppable);
    }
});
