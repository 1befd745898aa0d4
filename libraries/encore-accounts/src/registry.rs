//! Catalog, accounts and the global clock
//!
//! The registry is the single owner of shared state. Command handlers get an
//! account together with the catalog through [`Registry::with_account`], so an
//! account can change catalog counters (likes, followers) without any global.

use crate::account::{Account, AccountKind};
use crate::error::{AccountError, Result};
use encore_core::{Artist, Catalog};
use encore_playback::PlaybackConfig;
use std::time::Duration;
use tracing::{debug, info};

/// Number of entries in the top charts
pub const TOP_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct Registry {
    catalog: Catalog,

    /// Accounts in registration order
    accounts: Vec<Account>,

    /// Timestamp of the last clock advance
    clock: i64,

    /// Engine settings for newly added accounts
    playback: PlaybackConfig,
}

impl Registry {
    /// Create a registry around `catalog` with the clock at 0
    pub fn new(catalog: Catalog, playback: PlaybackConfig) -> Self {
        Self {
            catalog,
            accounts: Vec::new(),
            clock: 0,
            playback,
        }
    }

    // ===== Accounts =====

    /// Register a new listener account
    pub fn add_user(&mut self, name: &str) -> Result<()> {
        self.add_account(name, AccountKind::User)
    }

    /// Register a new account of `kind`
    ///
    /// Artists get a fresh page in the catalog. The account's playlists are
    /// listed after those of every earlier account.
    pub fn add_account(&mut self, name: &str, kind: AccountKind) -> Result<()> {
        if self.find(name).is_some() {
            return Err(AccountError::UsernameTaken(name.to_string()));
        }

        let account = match kind {
            AccountKind::User => Account::new(name, self.playback.clone()),
            AccountKind::Artist => {
                let page = self.catalog.add_artist(Artist::new(name));
                Account::artist(name, page, self.playback.clone())
            }
        };
        self.catalog.register_owner(name);
        self.accounts.push(account);
        info!("Added {:?} account {:?}", kind, name);
        Ok(())
    }

    /// Register a new account and describe the outcome
    pub fn add_user_message(&mut self, name: &str, kind: AccountKind) -> String {
        match self.add_account(name, kind) {
            Ok(()) => format!("The username {} has been added successfully.", name),
            Err(err) => err.to_string(),
        }
    }

    pub fn account(&self, name: &str) -> Result<&Account> {
        self.find(name)
            .map(|index| &self.accounts[index])
            .ok_or_else(|| AccountError::UnknownUser(name.to_string()))
    }

    /// Run `f` with the named account and the catalog borrowed side by side
    pub fn with_account<R>(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Account, &mut Catalog) -> R,
    ) -> Result<R> {
        let index = self
            .find(name)
            .ok_or_else(|| AccountError::UnknownUser(name.to_string()))?;
        Ok(f(&mut self.accounts[index], &mut self.catalog))
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Names of online listeners, in registration order; artists are not listed
    pub fn online_users(&self) -> Vec<String> {
        self.accounts
            .iter()
            .filter(|account| account.is_online() && account.kind() == AccountKind::User)
            .map(|account| account.name().to_string())
            .collect()
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.accounts.iter().position(|account| account.name() == name)
    }

    // ===== Clock =====

    /// Move the clock to `timestamp` and let every account play for the delta
    ///
    /// A timestamp at or before the current clock moves the clock without
    /// playing anything.
    pub fn advance_clock(&mut self, timestamp: i64) {
        let delta = timestamp - self.clock;
        self.clock = timestamp;
        if delta <= 0 {
            return;
        }

        let elapsed = Duration::from_secs(delta.unsigned_abs());
        debug!("Clock advanced by {:?} to {}", elapsed, timestamp);
        for account in &mut self.accounts {
            account.advance(elapsed);
        }
    }

    pub fn now(&self) -> i64 {
        self.clock
    }

    // ===== Catalog =====

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Most liked track names
    pub fn top_tracks(&self) -> Vec<String> {
        self.catalog.top_tracks(TOP_LIMIT)
    }

    /// Most followed playlist names
    pub fn top_playlists(&self) -> Vec<String> {
        self.catalog.top_playlists(TOP_LIMIT)
    }
}
