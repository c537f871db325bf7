use url::Url;

/// Turns the `video_path` returned by the service into something playable.
///
/// Absolute URLs are returned as-is; paths are resolved against the
/// endpoint, the way a browser resolves a relative `src`. When the endpoint
/// itself does not parse, the reference is returned unchanged.
pub fn resolve_media_ref(endpoint: &str, media_ref: &str) -> String {
    let media_ref = media_ref.trim();
    if media_ref.is_empty() {
        return String::new();
    }
    if let Ok(url) = Url::parse(media_ref) {
        return url.into();
    }
    match Url::parse(endpoint).and_then(|base| base.join(media_ref)) {
        Ok(url) => url.into(),
        Err(_) => media_ref.to_string(),
    }
}
