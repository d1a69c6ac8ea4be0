//! Item lifecycle controller.
//!
//! Owns the ordered item list, the per-item countdown timers and the two
//! ephemeral display hints. Every mutation goes through an intent method;
//! timers advance only when [`LifecycleController::tick`] is called, which the
//! UI does from its event loop.
//!
//! ```text
//!   add ──► Active ──complete (animated)──► PendingDeletion ──0──► removed
//!             ▲  └──complete (immediate)────────────────────────► removed
//!             └────────────cancel──────────────┘
//! ```

mod ids;
mod snapshot;
mod timers;

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use crate::clipboard::ClipboardWriter;
use crate::clock::{Clock, SystemClock};
use crate::config::CoreConfig;
use crate::events::{ControllerEvent, HintKind};
use crate::models::{Item, ItemId, LifecycleState, PersistedItem, Settings};
use crate::store::{KeyValueStore, StoreAdapter};

pub use ids::IdGenerator;
pub use snapshot::Snapshot;
pub use timers::{TimerKey, Timers};

pub struct LifecycleController<S, C = SystemClock> {
    config: CoreConfig,
    store: StoreAdapter<S>,
    clock: C,
    items: Vec<Item>,
    settings: Settings,
    timers: Timers,
    copied_item_id: Option<ItemId>,
    newly_added_item_id: Option<ItemId>,
    ids: IdGenerator,
    events: VecDeque<ControllerEvent>,
    revision: u64,
}

impl<S: KeyValueStore, C: Clock> LifecycleController<S, C> {
    /// Load persisted items and settings and return a ready controller.
    ///
    /// Missing or corrupt data falls back to an empty list / default settings;
    /// corruption is queued as [`ControllerEvent::RecoveredFromCorruptData`].
    /// Nothing is written to the store here.
    pub fn initialize(store: S, clock: C, config: CoreConfig) -> Self {
        let store = StoreAdapter::new(store);
        let mut events = VecDeque::new();

        let (settings, settings_error) = store.load_settings();
        let (entries, items_error) = store.load_items();
        for error in [items_error, settings_error].into_iter().flatten() {
            events.push_back(ControllerEvent::RecoveredFromCorruptData(error));
        }

        // Observe every stored id first so freshly minted ids sort after them
        let mut ids = IdGenerator::new();
        for id in entries.iter().filter_map(|e| e.id.as_ref()) {
            ids.observe(id);
        }

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = match entry.id {
                Some(id) if !seen.contains(&id) => id,
                _ => ids.next(clock.epoch_millis()),
            };
            seen.insert(id.clone());
            if let Some(item) = Item::new(id, &entry.text) {
                items.push(item);
            }
        }

        tracing::info!(
            items = items.len(),
            animated_deletion = settings.animated_deletion_enabled,
            "prompt queue loaded"
        );

        Self {
            config,
            store,
            clock,
            items,
            settings,
            timers: Timers::new(),
            copied_item_id: None,
            newly_added_item_id: None,
            ids,
            events,
            revision: 0,
        }
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Append a new active item. Blank text is ignored and returns `None`.
    pub fn add_item(&mut self, raw_text: &str) -> Option<ItemId> {
        if raw_text.trim().is_empty() {
            return None;
        }
        let id = self.ids.next(self.clock.epoch_millis());
        let item = Item::new(id.clone(), raw_text)?;

        tracing::debug!(id = %id, "add item");
        self.items.push(item);

        self.newly_added_item_id = Some(id.clone());
        let expires = self.clock.now() + self.config.new_item_hint_duration;
        self.timers.schedule(TimerKey::NewlyAddedHint, expires);

        self.emit(ControllerEvent::ItemAdded { id: id.clone() });
        self.persist_items();
        Some(id)
    }

    /// Copy an active item's text to the clipboard. Returns true on success.
    ///
    /// Items counting down are not copyable. Failures are logged and reported
    /// as an event; they never change state.
    pub fn copy_item<W>(&mut self, id: &ItemId, clipboard: &mut W) -> bool
    where
        W: ClipboardWriter + ?Sized,
    {
        let Some(text) = self
            .item(id)
            .filter(|item| item.is_active())
            .map(|item| item.text().to_string())
        else {
            return false;
        };

        match clipboard.copy_text(&text) {
            Ok(()) => {
                self.copied_item_id = Some(id.clone());
                let expires = self.clock.now() + self.config.copied_hint_duration;
                self.timers.schedule(TimerKey::CopiedHint, expires);
                self.emit(ControllerEvent::ItemCopied { id: id.clone() });
                true
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "failed to copy item");
                self.events.push_back(ControllerEvent::CopyFailed {
                    id: id.clone(),
                    reason: e.to_string(),
                });
                false
            }
        }
    }

    /// Complete an item using the configured policy: start the countdown when
    /// animated deletion is on, otherwise remove it right away.
    pub fn complete_item(&mut self, id: &ItemId) -> bool {
        if self.settings.animated_deletion_enabled {
            self.begin_completion(id)
        } else {
            self.remove_now(id)
        }
    }

    /// Move an active item into its deletion countdown.
    ///
    /// No-op (returns false) for unknown ids and items already counting down.
    pub fn begin_completion(&mut self, id: &ItemId) -> bool {
        let steps = self.config.countdown_steps.max(1);
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        if !item.is_active() {
            return false;
        }
        item.state = LifecycleState::PendingDeletion { remaining: steps };

        let next_step = self.clock.now() + self.config.tick_interval;
        self.timers.schedule(TimerKey::Countdown(id.clone()), next_step);

        tracing::debug!(id = %id, steps, "countdown started");
        self.emit(ControllerEvent::CountdownStarted {
            id: id.clone(),
            remaining: steps,
        });
        true
    }

    /// Stop a running countdown and restore the item to active.
    ///
    /// No-op when no countdown is running for `id` or cancelling is disabled.
    pub fn cancel_completion(&mut self, id: &ItemId) -> bool {
        if !self.config.allow_cancel {
            return false;
        }
        // Stop the timer before touching state so no stale step can fire
        if !self.timers.cancel(&TimerKey::Countdown(id.clone())) {
            return false;
        }
        if let Some(item) = self.item_mut(id) {
            item.state = LifecycleState::Active;
        }

        tracing::debug!(id = %id, "countdown cancelled");
        self.emit(ControllerEvent::CompletionCancelled { id: id.clone() });
        true
    }

    /// Change the deletion policy and persist it. Running countdowns continue.
    pub fn set_animated_deletion_enabled(&mut self, enabled: bool) {
        self.settings.animated_deletion_enabled = enabled;
        if let Err(e) = self.store.save_settings(&self.settings) {
            tracing::error!(error = %e, "failed to save settings");
            self.events.push_back(ControllerEvent::PersistFailed(e));
        }
        self.emit(ControllerEvent::SettingsChanged(self.settings));
    }

    /// Fire every timer due by now. Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;

        while let Some((key, due_at)) = self.timers.pop_due(now) {
            changed = true;
            match key {
                TimerKey::Countdown(id) => self.countdown_step(id, due_at),
                TimerKey::CopiedHint => {
                    self.copied_item_id = None;
                    self.emit(ControllerEvent::HintExpired(HintKind::Copied));
                }
                TimerKey::NewlyAddedHint => {
                    self.newly_added_item_id = None;
                    self.emit(ControllerEvent::HintExpired(HintKind::NewlyAdded));
                }
            }
        }
        changed
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.clone(),
            copied_item_id: self.copied_item_id.clone(),
            newly_added_item_id: self.newly_added_item_id.clone(),
            settings: self.settings,
            revision: self.revision,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn copied_item_id(&self) -> Option<&ItemId> {
        self.copied_item_id.as_ref()
    }

    pub fn newly_added_item_id(&self) -> Option<&ItemId> {
        self.newly_added_item_id.as_ref()
    }

    /// True while a countdown timer is associated with `id`
    pub fn has_countdown(&self, id: &ItemId) -> bool {
        self.timers.is_scheduled(&TimerKey::Countdown(id.clone()))
    }

    /// The records a store write would contain: active items only, in order
    pub fn persisted_items(&self) -> Vec<PersistedItem> {
        self.items
            .iter()
            .filter(|item| item.is_active())
            .map(Item::to_persisted)
            .collect()
    }

    /// When the next timer is due, if any is scheduled
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        self.events.drain(..).collect()
    }

    pub fn store(&self) -> &S {
        self.store.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.store.store_mut()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    fn countdown_step(&mut self, id: ItemId, due_at: Instant) {
        // The item may have been cancelled or removed since this was scheduled
        let Some(item) = self.item_mut(&id) else {
            return;
        };
        let LifecycleState::PendingDeletion { remaining } = item.state else {
            return;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.remove_item(&id);
            return;
        }

        item.state = LifecycleState::PendingDeletion { remaining };
        // Next step counts from this step's deadline, so a late tick catches up
        let next_step = due_at + self.config.tick_interval;
        self.timers.schedule(TimerKey::Countdown(id.clone()), next_step);
        self.emit(ControllerEvent::CountdownTicked { id, remaining });
    }

    fn remove_now(&mut self, id: &ItemId) -> bool {
        if self.item(id).is_none() {
            return false;
        }
        self.remove_item(id);
        true
    }

    fn remove_item(&mut self, id: &ItemId) {
        self.timers.cancel(&TimerKey::Countdown(id.clone()));
        self.items.retain(|item| &item.id != id);

        if self.copied_item_id.as_ref() == Some(id) {
            self.copied_item_id = None;
            self.timers.cancel(&TimerKey::CopiedHint);
        }
        if self.newly_added_item_id.as_ref() == Some(id) {
            self.newly_added_item_id = None;
            self.timers.cancel(&TimerKey::NewlyAddedHint);
        }

        tracing::debug!(id = %id, "item removed");
        self.emit(ControllerEvent::ItemRemoved { id: id.clone() });
        self.persist_items();
    }

    fn persist_items(&mut self) {
        let records = self.persisted_items();
        if let Err(e) = self.store.save_items(&records) {
            tracing::error!(error = %e, "failed to save items");
            self.events.push_back(ControllerEvent::PersistFailed(e));
        }
    }

    fn emit(&mut self, event: ControllerEvent) {
        self.revision += 1;
        self.events.push_back(event);
    }
}
