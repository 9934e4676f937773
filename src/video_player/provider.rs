// SPDX-License-Identifier: MPL-2.0
//! Explicit player provider for skin components.
//!
//! Skins never reach for a global player. Whatever renders a skin hands it a
//! [`PlayerProvider`]; a skin rendered without one fails loudly and names
//! itself, so a misplaced component is caught on first render.

use super::state::PlayerControls;
use crate::error::{Error, Result};

/// Scoped access to the mounted player.
pub struct PlayerProvider<'a> {
    player: Option<&'a mut dyn PlayerControls>,
}

impl<'a> PlayerProvider<'a> {
    pub fn new(player: &'a mut dyn PlayerControls) -> Self {
        Self {
            player: Some(player),
        }
    }

    /// A provider with no player mounted.
    pub fn empty() -> Self {
        Self { player: None }
    }

    pub fn is_mounted(&self) -> bool {
        self.player.is_some()
    }

    /// The mounted player, or [`Error::MissingProvider`] naming `component`.
    pub fn try_use_player(&mut self, component: &str) -> Result<&mut (dyn PlayerControls + 'a)> {
        match self.player.as_deref_mut() {
            Some(player) => Ok(player),
            None => Err(Error::MissingProvider {
                component: component.to_string(),
            }),
        }
    }

    /// The mounted player.
    ///
    /// # Panics
    ///
    /// Panics with a message naming `component` when no player is mounted.
    pub fn use_player(&mut self, component: &str) -> &mut (dyn PlayerControls + 'a) {
        match self.try_use_player(component) {
            Ok(player) => player,
            Err(err) => panic!("{err}"),
        }
    }
}

impl std::fmt::Debug for PlayerProvider<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerProvider")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
