//! State for the gadget grid panel.

#[cfg(test)]
#[path = "gadgets_test.rs"]
mod gadgets_test;

use crate::net::types::Gadget;

/// How long a seed confirmation/error message stays on screen.
pub const MESSAGE_TTL_SECS: u64 = 4;

/// Gadget panel state: the fetched list plus load/seed bookkeeping.
///
/// The component performs the actual HTTP calls; these transitions only
/// describe how each outcome changes the panel.
#[derive(Clone, Debug)]
pub struct GadgetsState {
    pub items: Vec<Gadget>,
    pub loading: bool,
    pub seeding: bool,
    pub message: Option<String>,
    /// Bumped whenever a new message is set, so a deferred clear scheduled
    /// for an older message cannot wipe a newer one.
    pub message_epoch: u64,
}

impl Default for GadgetsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            seeding: false,
            message: None,
            message_epoch: 0,
        }
    }
}

impl GadgetsState {
    /// Mark a list fetch as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch outcome: replace the list wholesale on success, leave
    /// it unchanged on failure.
    pub fn finish_load(&mut self, fetched: Option<Vec<Gadget>>) {
        if let Some(items) = fetched {
            self.items = items;
        }
        self.loading = false;
    }

    /// Try to start a seed request. Returns `false` if one is already in
    /// flight, in which case the caller must not issue a request.
    pub fn begin_seed(&mut self) -> bool {
        if self.seeding {
            return false;
        }
        self.seeding = true;
        true
    }

    /// Record a seed outcome and surface a user-visible message. Returns
    /// the message epoch the caller should pass to [`Self::clear_message`]
    /// once the display window elapses.
    pub fn finish_seed(&mut self, inserted: Option<u64>) -> u64 {
        self.seeding = false;
        self.message = Some(match inserted {
            Some(n) => format!("Added {n} gadgets with images."),
            None => "Seeding failed. Try again.".to_owned(),
        });
        self.message_epoch += 1;
        self.message_epoch
    }

    /// Clear the message, but only if no newer message replaced it since
    /// `epoch` was issued.
    pub fn clear_message(&mut self, epoch: u64) {
        if self.message_epoch == epoch {
            self.message = None;
        }
    }

    /// True when the panel should show the seed prompt instead of a grid.
    pub fn is_empty_idle(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}
