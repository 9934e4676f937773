// SPDX-License-Identifier: MPL-2.0
//! Custom widgets used by the skins.

pub mod timeline;

pub use timeline::{timeline, Timeline};
