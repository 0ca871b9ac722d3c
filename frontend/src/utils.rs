use web_sys::window;

/// Get the base HTTP URL (e.g., "http://localhost:3000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let window = window().expect("no global window");
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/api/gamification/stats")
pub fn api_url(path: &str) -> String {
    format!("{}{}", get_base_url(), path)
}

/// Current wall clock, epoch milliseconds.
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Path component of the current location, `/` when unavailable.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
