// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! mural-schema: node-kind type model for Mural diagrams.
//!
//! Pure value types shared by every component that classifies diagram nodes:
//! the `(type, subtype, variant?)` kind triple, UI capability flags, config
//! field descriptors, and the platform token set. No I/O, no registry logic —
//! that lives in `mural-registry`.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod capabilities;
mod field;
mod kind;
mod platform;

pub use capabilities::{Capabilities, MessageProtocol};
pub use field::{ConfigField, FieldKind};
pub use kind::{NodeKind, CUSTOM_SUBTYPE, GENERIC_TYPE};
pub use platform::{is_platform_token, platform_label, PLATFORM_TOKENS};
