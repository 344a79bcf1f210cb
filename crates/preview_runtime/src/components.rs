//! Minimal DOM glue shared by preview renderers.

use leptos::*;
use preview_core::{PreviewAction, PreviewState};

use crate::runtime_context::use_preview_runtime;

/// Accessible label describing the stage and platform a frame currently shows.
pub fn preview_frame_label(state: &PreviewState) -> String {
    format!(
        "{} ({}) preview on {}",
        state.stage.title(),
        state.stage.manifest_member(),
        state.platform.label()
    )
}

#[component]
/// Fullscreen target that wraps a platform mockup.
///
/// Clicking the frame requests (or leaves) fullscreen. The current zoom factor is exposed as the
/// `--preview-scale` custom property; stage, previewed member, and platform are mirrored into
/// `data-*` attributes for styling.
pub fn PreviewFrame(children: Children) -> impl IntoView {
    let runtime = use_preview_runtime();
    let frame_id = runtime.target_dom_id();
    let scale_style = move || {
        runtime
            .view_model
            .with(|view_model| format!("--preview-scale: {}", view_model.fullscreen_scale))
    };

    view! {
        <div
            id=frame_id
            class="pwa-preview-frame"
            data-platform=move || runtime.state.with(|state| state.platform.id())
            data-stage=move || runtime.state.with(|state| state.stage.id())
            data-member=move || runtime.state.with(|state| state.stage.manifest_member())
            aria-label=move || runtime.state.with(preview_frame_label)
            data-fullscreen=move || runtime.state.with(|state| state.is_full_screen.to_string())
            style=scale_style
            on:click=move |_| runtime.dispatch_action(PreviewAction::RequestEnlarge)
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use preview_core::{Platform, PreviewStage};

    use super::*;

    #[test]
    fn frame_label_names_stage_member_and_platform() {
        assert_eq!(
            preview_frame_label(&PreviewState::new(PreviewStage::ThemeColor, Platform::Ios)),
            "Theme color (theme_color) preview on iOS"
        );
        assert_eq!(
            preview_frame_label(&PreviewState::new(
                PreviewStage::Splashscreen,
                Platform::Windows
            )),
            "Splash screen (background_color) preview on Windows"
        );
    }
}
