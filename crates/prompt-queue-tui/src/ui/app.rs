use prompt_queue_core::{
    Clock, ClipboardWriter, Item, ItemId, JsonFileStore, KeyValueStore,
    LifecycleController, Snapshot, SystemClock,
};

use crate::ui::notifications::Notification;
use crate::ui::services::{AnimationClock, NotificationManager};
use crate::ui::text_editor::TextEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating the list; single keys trigger actions
    Normal,
    /// Typing into the new-prompt input
    Editing,
}

/// UI state wrapped around the lifecycle controller.
///
/// The controller owns the items; the app only tracks what is on screen:
/// the input line, the selected item and the toast queue.
pub struct App<S = JsonFileStore, C = SystemClock> {
    controller: LifecycleController<S, C>,
    clipboard: Box<dyn ClipboardWriter>,
    pub editor: TextEditor,
    pub input_mode: InputMode,
    /// Selection follows the item, not the row, so removals above it
    /// leave it in place
    selected: Option<ItemId>,
    pub running: bool,
    /// First Ctrl+C arms quit, the second one quits
    pub pending_quit: bool,
    notifications: NotificationManager,
    animation_clock: AnimationClock,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    pub fn new(controller: LifecycleController<S, C>, clipboard: Box<dyn ClipboardWriter>) -> Self {
        let selected = controller.items().first().map(|item| item.id.clone());
        let mut app = Self {
            controller,
            clipboard,
            editor: TextEditor::new(),
            input_mode: InputMode::Editing,
            selected,
            running: true,
            pending_quit: false,
            notifications: NotificationManager::new(),
            animation_clock: AnimationClock::new(),
        };
        // Surface anything the controller reported while loading
        app.process_controller_events(None);
        app
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    pub fn items(&self) -> &[Item] {
        self.controller.items()
    }

    /// Row of the selected item, 0 when nothing is selected
    pub fn selected_index(&self) -> usize {
        self.selected_position().unwrap_or(0)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.as_ref().and_then(|id| self.controller.item(id))
    }

    fn selected_position(&self) -> Option<usize> {
        let id = self.selected.as_ref()?;
        self.items().iter().position(|item| &item.id == id)
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn pulse_on(&self) -> bool {
        self.animation_clock.pulse_on()
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Add the input line as a new prompt; blank input is ignored
    pub fn submit_input(&mut self) {
        let anchor = self.selected_position();
        let text = self.editor.take();
        if let Some(id) = self.controller.add_item(&text) {
            self.selected = Some(id);
        }
        self.process_controller_events(anchor);
    }

    pub fn copy_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id.clone()) {
            let anchor = self.selected_position();
            self.controller.copy_item(&id, self.clipboard.as_mut());
            self.process_controller_events(anchor);
        }
    }

    pub fn complete_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id.clone()) {
            let anchor = self.selected_position();
            self.controller.complete_item(&id);
            self.process_controller_events(anchor);
        }
    }

    pub fn cancel_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id.clone()) {
            let anchor = self.selected_position();
            self.controller.cancel_completion(&id);
            self.process_controller_events(anchor);
        }
    }

    pub fn toggle_animated_deletion(&mut self) {
        let anchor = self.selected_position();
        let enabled = self.controller.settings().animated_deletion_enabled;
        self.controller.set_animated_deletion_enabled(!enabled);
        self.process_controller_events(anchor);
    }

    pub fn select_next(&mut self) {
        let index = match self.selected_position() {
            Some(index) => index + 1,
            None => 0,
        };
        self.select_at(index);
    }

    pub fn select_previous(&mut self) {
        let index = self.selected_position().unwrap_or(0).saturating_sub(1);
        self.select_at(index);
    }

    pub fn select_first(&mut self) {
        self.select_at(0);
    }

    pub fn select_last(&mut self) {
        self.select_at(self.items().len().saturating_sub(1));
    }

    /// Select the item at `index`; out-of-range indexes keep the selection
    fn select_at(&mut self, index: usize) {
        if let Some(item) = self.items().get(index) {
            self.selected = Some(item.id.clone());
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Advance timers: countdowns, hints, toasts and the pulse
    pub fn tick(&mut self) {
        let anchor = self.selected_position();
        if self.controller.tick() {
            self.process_controller_events(anchor);
        }
        self.notifications.tick();
        self.animation_clock.tick();
    }

    /// `anchor` is the selected row before the controller call; if the
    /// selected item is gone, the item now at that row (or the last one)
    /// takes its place.
    fn process_controller_events(&mut self, anchor: Option<usize>) {
        for event in self.controller.drain_events() {
            self.notifications.on_controller_event(&event);
        }
        if self.selected_item().is_some() {
            return;
        }
        let len = self.items().len();
        self.selected = if len == 0 {
            None
        } else {
            let index = anchor.unwrap_or(0).min(len - 1);
            Some(self.items()[index].id.clone())
        };
    }
}
