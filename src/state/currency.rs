//! Simulated currency generation and its local history log.
//!
//! DESIGN
//! ======
//! Grants are immutable log entries kept newest first and persisted as one
//! JSON array. Nothing is sent anywhere; "generating" only records the grant.
//! Entries are never edited or removed individually, only cleared together.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, ValidationError, with_storage_note};
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Fictional game a grant is generated for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    #[default]
    GameA,
    GameB,
}

impl Game {
    pub const ALL: [Self; 2] = [Self::GameA, Self::GameB];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::GameA => "Game A",
            Self::GameB => "Game B",
        }
    }

    /// Name of the simulated in-game currency.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::GameA => "Crystals",
            Self::GameB => "Diamonds",
        }
    }
}

/// One simulated generation, as stored in the history log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyGrant {
    pub game: Game,
    pub user_id: String,
    pub amount: u64,
    /// Local creation time, already formatted for display.
    pub timestamp: String,
}

impl CurrencyGrant {
    /// One-line description for the history list, without the timestamp.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}: {} {} for ID {}", self.game.display_name(), self.amount, self.game.unit(), self.user_id)
    }
}

/// Parse an amount field the way a browser numeric input is read: optional
/// leading whitespace and sign, then as many decimal digits as are present.
/// Anything without leading digits reads as 0.
#[must_use]
pub fn parse_amount(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else {
            break;
        };
        value = value.saturating_mul(10).saturating_add(i64::from(d));
    }
    if negative { -value } else { value }
}

/// Generator view state: form inputs plus the history log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrencyState {
    pub selected_game: Game,
    pub user_id: String,
    /// Parsed amount input; 0 means the field is empty.
    pub amount: i64,
    pub status: String,
    /// Newest first.
    pub history: Vec<CurrencyGrant>,
    pub storage_key: String,
}

impl CurrencyState {
    /// Load the history stored under `storage_key`; absent or corrupt data
    /// starts an empty log.
    pub fn initialize<S>(store: &S, storage_key: impl Into<String>) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        let storage_key = storage_key.into();
        let history: Vec<CurrencyGrant> = load_json(store, &storage_key).unwrap_or_default();
        log::debug!("loaded {} history entries from {storage_key}", history.len());
        Self { history, storage_key, ..Self::default() }
    }

    /// Switch the target game. Inputs and history are left alone.
    pub fn select_game(&mut self, game: Game) {
        self.selected_game = game;
        self.status.clear();
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = user_id.into();
        self.status.clear();
    }

    pub fn set_amount_input(&mut self, raw: &str) {
        self.amount = parse_amount(raw);
        self.status.clear();
    }

    /// Amount as shown in the input: blank while zero.
    #[must_use]
    pub fn amount_display(&self) -> String {
        if self.amount == 0 { String::new() } else { self.amount.to_string() }
    }

    /// Record a grant for the current inputs, newest first, and persist.
    ///
    /// On success the user id and amount inputs are reset.
    pub fn generate<S>(&mut self, store: &mut S, timestamp: impl Into<String>) -> Result<CurrencyGrant, ValidationError>
    where
        S: KeyValueStore + ?Sized,
    {
        let amount = match u64::try_from(self.amount) {
            Ok(amount) if amount > 0 && !self.user_id.is_empty() => amount,
            _ => {
                let err = ValidationError::MissingUserOrAmount;
                self.status = err.to_string();
                return Err(err);
            }
        };

        let grant = CurrencyGrant {
            game: self.selected_game,
            user_id: std::mem::take(&mut self.user_id),
            amount,
            timestamp: timestamp.into(),
        };
        self.history.insert(0, grant.clone());
        self.amount = 0;
        log::info!("generated {amount} {} for {:?}", grant.game.unit(), grant.user_id);

        let saved = self.persist(store);
        self.status = with_storage_note(
            format!(
                "Simulated generation of {amount} {} for ID {} completed successfully!",
                grant.game.unit(),
                grant.user_id
            ),
            &saved,
        );
        Ok(grant)
    }

    /// Drop the whole log and its stored entry.
    pub fn clear_history<S>(&mut self, store: &mut S)
    where
        S: KeyValueStore + ?Sized,
    {
        self.history.clear();
        let removed = store.delete(&self.storage_key);
        if let Err(e) = &removed {
            log::warn!("failed to remove {}: {e}", self.storage_key);
        }
        log::info!("cleared generation history");
        self.status = with_storage_note("Generation history cleared.".to_owned(), &removed);
    }

    fn persist<S>(&self, store: &mut S) -> Result<(), StorageError>
    where
        S: KeyValueStore + ?Sized,
    {
        let result = save_json(store, &self.storage_key, &self.history);
        if let Err(e) = &result {
            log::warn!("generation history held in memory only: {e}");
        }
        result
    }
}
