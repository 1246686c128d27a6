use crate::ui::editor::InputBuffer;
use crate::ui::mvi::Reducer;
use crate::ui::panel::{PanelIntent, PanelReducer, SummaryPanelState};
use parking_lot::Mutex;
use std::sync::Arc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($target:expr, $reducer:ty, $intent:expr) => {
        $target = <$reducer>::reduce(std::mem::take(&mut $target), $intent);
    };
}

/// Everything the screen shows, shared between the UI loop and the host.
#[derive(Debug, Default)]
pub struct UiModel {
    pub editor: InputBuffer,
    pub panel: SummaryPanelState,
}

impl UiModel {
    pub fn dispatch(&mut self, intent: PanelIntent) {
        dispatch_mvi!(self.panel, PanelReducer, intent);
    }
}

pub type SharedModel = Arc<Mutex<UiModel>>;

pub struct App {
    should_quit: bool,
    model: SharedModel,
    endpoint: String,
}

impl App {
    pub fn new(model: SharedModel, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            model,
            endpoint: endpoint.into(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn on_tick(&mut self) {
        self.model.lock().dispatch(PanelIntent::AnimationTick);
    }

    pub fn on_paste(&mut self, text: &str) {
        let mut model = self.model.lock();
        if model.panel.notice.is_none() {
            model.editor.insert_str(text);
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.model.lock().dispatch(PanelIntent::DismissNotice);
    }

    pub fn has_notice(&self) -> bool {
        self.model.lock().panel.notice.is_some()
    }

    /// Run `f` against the editor.
    pub fn edit(&mut self, f: impl FnOnce(&mut InputBuffer)) {
        f(&mut self.model.lock().editor);
    }
}
