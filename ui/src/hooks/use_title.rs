use yew::prelude::*;

/// Sets the document title, suffixed with the `APP_NAME` the ui was built
/// with. No cleanup on unmount since each page sets its own title, and
/// unmount/mount ordering isn't guaranteed during route transitions.
#[hook]
pub fn use_title(page: &str) {
    let title = document_title(page, option_env!("APP_NAME"));
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}

fn document_title(page: &str, app_name: Option<&str>) -> String {
    match app_name.map(str::trim) {
        Some(app_name) if !app_name.is_empty() => {
            format!("{page} - {app_name}")
        }
        _ => page.to_string(),
    }
}
