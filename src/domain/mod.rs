// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`IdleTimeout`](ui::IdleTimeout),
//!   [`ActivationOffset`](ui::ActivationOffset))
//! - [`video`]: Video playback types ([`PlayerStatus`](video::PlayerStatus),
//!   [`Volume`](video::Volume), [`PlaybackRate`](video::PlaybackRate))

pub mod ui;
pub mod video;
