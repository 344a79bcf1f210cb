//! Preview actions, side-effect intents, and transition logic.

use crate::model::{Platform, PreviewStage, PreviewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_preview`] to mutate [`PreviewState`].
pub enum PreviewAction {
    /// Switch the previewed platform; the stage is kept.
    SelectPlatform {
        /// Platform to preview.
        platform: Platform,
    },
    /// Jump straight to a stage.
    SelectStage {
        /// Stage to preview.
        stage: PreviewStage,
    },
    /// Advance to the next stage, wrapping after the last one.
    NavigateNext,
    /// Go back to the previous stage, wrapping before the first one.
    NavigatePrevious,
    /// The host reported a fullscreen change.
    FullscreenChanged {
        /// Whether the preview is now fullscreen.
        is_full_screen: bool,
    },
    /// The user asked to enlarge (or shrink back) the preview.
    RequestEnlarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_preview`] for the runtime to execute.
pub enum PreviewEffect {
    /// Ask the host to put the preview into fullscreen.
    RequestFullscreen,
    /// Ask the host to leave fullscreen.
    ExitFullscreen,
}

/// Applies a [`PreviewAction`] to `state` and returns the effects the runtime must perform.
///
/// Every action is valid in every state. Fullscreen requests only emit an effect: the state
/// changes when the host later reports [`PreviewAction::FullscreenChanged`].
pub fn reduce_preview(state: &mut PreviewState, action: PreviewAction) -> Vec<PreviewEffect> {
    let mut effects = Vec::new();
    match action {
        PreviewAction::SelectPlatform { platform } => state.select_platform(platform),
        PreviewAction::SelectStage { stage } => state.select_stage(stage),
        PreviewAction::NavigateNext => state.navigate_next(),
        PreviewAction::NavigatePrevious => state.navigate_previous(),
        PreviewAction::FullscreenChanged { is_full_screen } => {
            state.toggle_full_screen(is_full_screen)
        }
        PreviewAction::RequestEnlarge => effects.push(if state.is_full_screen {
            PreviewEffect::ExitFullscreen
        } else {
            PreviewEffect::RequestFullscreen
        }),
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::PREVIEW_STAGE_COUNT;

    #[test]
    fn next_applied_stage_count_times_is_identity() {
        for start in PreviewStage::ALL {
            let mut state = PreviewState::new(start, Platform::Ios);
            for _ in 0..PREVIEW_STAGE_COUNT {
                reduce_preview(&mut state, PreviewAction::NavigateNext);
            }
            assert_eq!(state.stage, start);
        }
    }

    #[test]
    fn previous_inverts_next() {
        for start in PreviewStage::ALL {
            let mut state = PreviewState::new(start, Platform::Windows);
            reduce_preview(&mut state, PreviewAction::NavigateNext);
            reduce_preview(&mut state, PreviewAction::NavigatePrevious);
            assert_eq!(state.stage, start);

            reduce_preview(&mut state, PreviewAction::NavigatePrevious);
            reduce_preview(&mut state, PreviewAction::NavigateNext);
            assert_eq!(state.stage, start);
        }
    }

    #[test]
    fn selecting_platform_keeps_stage() {
        let mut state = PreviewState::new(PreviewStage::ThemeColor, Platform::Android);
        let effects = reduce_preview(
            &mut state,
            PreviewAction::SelectPlatform {
                platform: Platform::Ios,
            },
        );
        assert!(effects.is_empty());
        assert_eq!(
            state,
            PreviewState::new(PreviewStage::ThemeColor, Platform::Ios)
        );
    }

    #[test]
    fn enlarge_requests_fullscreen_without_entering_it() {
        let mut state = PreviewState::default();
        let effects = reduce_preview(&mut state, PreviewAction::RequestEnlarge);
        assert_eq!(effects, vec![PreviewEffect::RequestFullscreen]);
        assert!(!state.is_full_screen);

        reduce_preview(
            &mut state,
            PreviewAction::FullscreenChanged {
                is_full_screen: true,
            },
        );
        assert!(state.is_full_screen);
        assert_eq!(
            reduce_preview(&mut state, PreviewAction::RequestEnlarge),
            vec![PreviewEffect::ExitFullscreen]
        );
    }

    #[test]
    fn default_session_starts_on_android_install() {
        let state = PreviewState::default();
        assert_eq!(state.stage, PreviewStage::Install);
        assert_eq!(state.platform, Platform::Android);
        assert!(!state.is_full_screen);
    }
}
