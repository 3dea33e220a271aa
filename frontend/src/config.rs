use shared::constants::{API_BASE_URL, DEFAULT_WHEEL_ID};
use web_sys::window;

pub fn get_api_base_url() -> String {
    API_BASE_URL.clone()
}

/// Wheel to load, taken from `?ruleta=<id>` on the page URL.
pub fn get_wheel_id() -> u32 {
    window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| parse_wheel_id(&search))
        .unwrap_or(DEFAULT_WHEEL_ID)
}

pub fn parse_wheel_id(search: &str) -> Option<u32> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "ruleta")
        .and_then(|(_, value)| value.parse().ok())
}

/// Logos from the API are absolute; bundled assets are served next to the app.
pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wheel_id() {
        assert_eq!(parse_wheel_id("?ruleta=5"), Some(5));
        assert_eq!(parse_wheel_id("?lang=es&ruleta=12"), Some(12));
        assert_eq!(parse_wheel_id("?ruleta=abc"), None);
        assert_eq!(parse_wheel_id(""), None);
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(get_asset_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
        assert_eq!(get_asset_url("/images/d3.jpg"), "/images/d3.jpg");
        assert_eq!(get_asset_url("images/d3.jpg"), "/images/d3.jpg");
    }
}
