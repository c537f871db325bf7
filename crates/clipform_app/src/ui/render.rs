use clipform_core::AppViewModel;
use clipform_engine::resolve_media_ref;

/// Renders the outcome area of the form as terminal lines.
///
/// The field values are not echoed; the prompts already show them.
pub fn render(view: &AppViewModel, endpoint: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if !view.submit_enabled {
        lines.push(view.submit_label.to_string());
    }
    if let Some(status) = &view.status_line {
        lines.push(status.clone());
    }
    if let Some(media_ref) = &view.media_ref {
        lines.push(format!(
            "Processed video: {}",
            resolve_media_ref(endpoint, media_ref)
        ));
    }

    lines
}
