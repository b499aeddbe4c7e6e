/// Seed drawn from JavaScript's `Math.random`, 32 bits at a time.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    const HALF: f64 = 4_294_967_296.0;
    let high = (HALF * random()) as u64;
    let low = (HALF * random()) as u64;
    (high << 32) | low
}

/// Words of the page's URL hash, e.g. `#-vv&--seed=7` gives `["", "-vv", "--seed=7"]`.
pub(crate) fn location_hash_words(location: &web_sys::Location) -> Vec<String> {
    location
        .hash()
        .unwrap_or_default()
        .split(['#', '&'])
        .map(str::to_owned)
        .collect()
}
