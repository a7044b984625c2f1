use egui::{Color32, Response, Ui};
use roster_utils::version_info;

/// Displays the build channel and version in the top bar.
///
/// Display format varies by channel:
/// - stable: `stable:{version}`
/// - nightly: `nightly:{date}`
/// - dev: `dev:{commit}`
pub fn env_version(ui: &mut Ui) -> Response {
    let display_text = version_info::format_env_version();
    let (env_name, _) = version_info::env_version_info();

    let color = match env_name {
        "stable" => Color32::GREEN,
        "nightly" => Color32::from_rgb(255, 165, 0), // Orange
        "dev" => Color32::from_rgb(200, 200, 200),   // Light gray
        _ => Color32::WHITE,
    };

    ui.colored_label(color, display_text)
}
