//! Reducer for the summary panel.

use crate::ui::mvi::Reducer;

use super::intent::PanelIntent;
use super::state::SummaryPanelState;

pub struct PanelReducer;

impl Reducer for PanelReducer {
    type State = SummaryPanelState;
    type Intent = PanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PanelIntent::SetLoading(loading) => SummaryPanelState {
                loading,
                animation_tick: 0,
                ..state
            },

            PanelIntent::ShowResult(result_visible) => SummaryPanelState {
                result_visible,
                ..state
            },

            PanelIntent::SetResultText(result_text) => SummaryPanelState {
                result_text,
                ..state
            },

            PanelIntent::SetCopyFeedback(copy_feedback) => SummaryPanelState {
                copy_feedback,
                ..state
            },

            PanelIntent::Notify(notice) => SummaryPanelState {
                notice: Some(notice),
                ..state
            },

            PanelIntent::DismissNotice => SummaryPanelState {
                notice: None,
                ..state
            },

            PanelIntent::AnimationTick if state.loading => SummaryPanelState {
                animation_tick: state.animation_tick.wrapping_add(1),
                ..state
            },
            PanelIntent::AnimationTick => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{CopyFeedback, Notice};

    fn reduce_all(intents: Vec<PanelIntent>) -> SummaryPanelState {
        intents
            .into_iter()
            .fold(SummaryPanelState::default(), PanelReducer::reduce)
    }

    #[test]
    fn loading_disables_submit() {
        let state = reduce_all(vec![PanelIntent::SetLoading(true)]);
        assert!(state.loading);
        assert!(!state.can_submit());

        let state = PanelReducer::reduce(state, PanelIntent::SetLoading(false));
        assert!(state.can_submit());
    }

    #[test]
    fn tick_only_animates_while_loading() {
        let idle = PanelReducer::reduce(SummaryPanelState::default(), PanelIntent::AnimationTick);
        assert_eq!(idle.animation_tick, 0);

        let busy = reduce_all(vec![
            PanelIntent::SetLoading(true),
            PanelIntent::AnimationTick,
            PanelIntent::AnimationTick,
        ]);
        assert_eq!(busy.animation_tick, 2);
    }

    #[test]
    fn result_text_and_visibility_are_independent() {
        let state = reduce_all(vec![
            PanelIntent::SetResultText("summary".into()),
            PanelIntent::ShowResult(true),
            PanelIntent::ShowResult(false),
        ]);
        assert_eq!(state.result_text, "summary");
        assert!(!state.result_visible);
    }

    #[test]
    fn copy_feedback_round_trip() {
        let state = reduce_all(vec![PanelIntent::SetCopyFeedback(CopyFeedback::Copied)]);
        assert_eq!(state.copy_feedback, CopyFeedback::Copied);
        let state = PanelReducer::reduce(state, PanelIntent::SetCopyFeedback(CopyFeedback::Idle));
        assert_eq!(state.copy_feedback, CopyFeedback::Idle);
    }

    #[test]
    fn notice_replaces_and_dismisses() {
        let state = reduce_all(vec![
            PanelIntent::Notify(Notice::warning("first")),
            PanelIntent::Notify(Notice::error("second")),
        ]);
        assert_eq!(state.notice.as_ref().map(|n| n.message.as_str()), Some("second"));

        let state = PanelReducer::reduce(state, PanelIntent::DismissNotice);
        assert!(state.notice.is_none());
    }
}
