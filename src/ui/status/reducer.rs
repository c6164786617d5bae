use crate::ui::mvi::Reducer;

use super::intent::StatusIntent;
use super::state::{ModelBadge, StatusMonitorState};

pub struct StatusReducer;

impl Reducer for StatusReducer {
    type State = StatusMonitorState;
    type Intent = StatusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StatusIntent::Apply(status) => StatusMonitorState {
                badge: if status.model_loaded {
                    ModelBadge::Ready
                } else {
                    ModelBadge::NotLoaded
                },
                device: Some(status.device),
                model_dir: status.model_dir.or(state.model_dir),
                model_loaded: status.model_loaded,
            },
            StatusIntent::Loading => StatusMonitorState {
                badge: ModelBadge::Loading,
                ..state
            },
            StatusIntent::Failed => StatusMonitorState {
                badge: ModelBadge::Error,
                ..state
            },
        }
    }
}
