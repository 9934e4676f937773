// SPDX-License-Identifier: MPL-2.0
//! User interface for the player controls.
//!
//! - [`skins`] - Interchangeable control bars built on the player contract
//! - [`styles`] - Container, slider and tooltip styles
//! - [`design_tokens`] - Colors, spacing and sizes shared by the skins
//! - [`widgets`] - The seek timeline widget

pub mod design_tokens;
pub mod skins;
pub mod styles;
pub mod widgets;
