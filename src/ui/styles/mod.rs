// SPDX-License-Identifier: MPL-2.0
//! Style functions shared by the player skins.

pub mod container;
pub mod slider;
pub mod tooltip;
