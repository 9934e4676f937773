// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcut routing.
//!
//! | Key          | Action                       |
//! |--------------|------------------------------|
//! | Space        | play/pause                   |
//! | F            | fullscreen                   |
//! | M            | mute                         |
//! | C            | cycle captions               |
//! | ArrowUp/Down | volume ± step                |
//! | ArrowLeft/Right | seek ∓/± step             |
//!
//! Keys typed into editable fields are never intercepted. A handled key
//! suppresses the default browser/OS action and counts as activity.

use super::listeners::{ListenerGuard, ListenerKind, ListenerRegistry, ListenerTarget};
use super::state::PlayerControls;
use crate::domain::video::{KeyboardSeekStep, VolumeStep};
use serde::{Deserialize, Serialize};

/// Where the player listens for shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardScope {
    /// Only while focus is inside the player.
    #[default]
    Focused,
    /// Anywhere in the window.
    Global,
    /// Shortcuts disabled.
    None,
}

/// Logical key of a key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Character(char),
    Other,
}

/// Kind of element the key event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetKind {
    Input,
    TextArea,
    ContentEditable,
    #[default]
    Other,
}

impl TargetKind {
    /// Whether typing into this target must reach it unmodified.
    pub fn is_editable(self) -> bool {
        !matches!(self, TargetKind::Other)
    }
}

/// A key-down event as seen by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub target: TargetKind,
    /// Whether the event target lies inside the player root.
    pub inside_player: bool,
}

impl KeyEvent {
    /// A key pressed with focus inside the player, on a non-editable element.
    pub fn in_player(key: Key) -> Self {
        Self {
            key,
            target: TargetKind::Other,
            inside_player: true,
        }
    }

    /// A key pressed elsewhere on the page.
    pub fn outside(key: Key) -> Self {
        Self {
            key,
            target: TargetKind::Other,
            inside_player: false,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetKind) -> Self {
        self.target = target;
        self
    }
}

/// Player action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlayback,
    ToggleFullscreen,
    ToggleMute,
    CycleCaptions,
    VolumeUp,
    VolumeDown,
    SeekBackward,
    SeekForward,
}

impl Shortcut {
    /// The shortcut bound to `key`, if any. Letters match case-insensitively.
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Space => Some(Shortcut::TogglePlayback),
            Key::ArrowUp => Some(Shortcut::VolumeUp),
            Key::ArrowDown => Some(Shortcut::VolumeDown),
            Key::ArrowLeft => Some(Shortcut::SeekBackward),
            Key::ArrowRight => Some(Shortcut::SeekForward),
            Key::Character(c) => match c.to_ascii_lowercase() {
                'f' => Some(Shortcut::ToggleFullscreen),
                'm' => Some(Shortcut::ToggleMute),
                'c' => Some(Shortcut::CycleCaptions),
                _ => None,
            },
            Key::Other => None,
        }
    }
}

/// Result of routing one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The event passes through untouched.
    Ignored,
    /// The event triggered a shortcut.
    Handled(Shortcut),
}

impl KeyOutcome {
    /// Whether the host must suppress the key's default action.
    pub fn prevent_default(self) -> bool {
        matches!(self, KeyOutcome::Handled(_))
    }
}

/// Maps key-down events to player actions within a scope.
#[derive(Debug)]
pub struct KeyboardRouter {
    scope: KeyboardScope,
    seek_step: KeyboardSeekStep,
    volume_step: VolumeStep,
    registry: ListenerRegistry,
    listener: Option<ListenerGuard>,
}

impl KeyboardRouter {
    /// Creates a router and registers its key-down listener for `scope`.
    pub fn new(
        registry: ListenerRegistry,
        scope: KeyboardScope,
        seek_step: KeyboardSeekStep,
        volume_step: VolumeStep,
    ) -> Self {
        let mut router = Self {
            scope,
            seek_step,
            volume_step,
            registry,
            listener: None,
        };
        router.attach();
        router
    }

    pub fn scope(&self) -> KeyboardScope {
        self.scope
    }

    /// Switches scope, moving the listener to the matching target.
    pub fn set_scope(&mut self, scope: KeyboardScope) {
        if scope != self.scope {
            self.scope = scope;
            self.attach();
        }
    }

    /// Decides whether `event` triggers a shortcut, without acting on it.
    pub fn route(&self, event: &KeyEvent) -> KeyOutcome {
        let in_scope = match self.scope {
            KeyboardScope::None => false,
            KeyboardScope::Focused => event.inside_player,
            KeyboardScope::Global => true,
        };
        if !in_scope || event.target.is_editable() {
            return KeyOutcome::Ignored;
        }
        Shortcut::for_key(event.key).map_or(KeyOutcome::Ignored, KeyOutcome::Handled)
    }

    /// Routes `event` and performs the bound action on `player`.
    pub fn dispatch(&self, event: &KeyEvent, player: &mut impl PlayerControls) -> KeyOutcome {
        let outcome = self.route(event);
        let KeyOutcome::Handled(shortcut) = outcome else {
            return outcome;
        };

        let step = self.seek_step.value();
        let volume_step = self.volume_step.value();
        match shortcut {
            Shortcut::TogglePlayback => player.toggle(),
            Shortcut::ToggleFullscreen => player.toggle_fullscreen(),
            Shortcut::ToggleMute => player.toggle_mute(),
            Shortcut::CycleCaptions => player.cycle_caption_track(),
            Shortcut::VolumeUp => {
                let volume = player.state().volume().offset(volume_step);
                player.set_volume(volume.value());
            }
            Shortcut::VolumeDown => {
                let volume = player.state().volume().offset(-volume_step);
                player.set_volume(volume.value());
            }
            Shortcut::SeekBackward => {
                let time = player.state().current_time() - step;
                player.seek(time);
            }
            Shortcut::SeekForward => {
                let time = player.state().current_time() + step;
                player.seek(time);
            }
        }
        player.reset_idle();
        tracing::debug!(?shortcut, "keyboard shortcut");
        outcome
    }

    fn attach(&mut self) {
        // Release the old listener before registering the new one.
        self.listener = None;
        self.listener = match self.scope {
            KeyboardScope::Focused => Some(
                self.registry.register(ListenerTarget::PlayerRoot, ListenerKind::KeyDown),
            ),
            KeyboardScope::Global => Some(
                self.registry.register(ListenerTarget::Window, ListenerKind::KeyDown),
            ),
            KeyboardScope::None => None,
        };
    }
}
