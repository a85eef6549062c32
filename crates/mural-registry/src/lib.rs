// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! mural-registry: node-kind classification and capability registry.
//!
//! The one shared implementation of Mural's resource-type engine, embedded by
//! both the client and the server so the two sides can never disagree about
//! how a diagram node classifies. Five parts, leaves first:
//!
//! - the frozen, validated collection of [`KindEntry`] records
//!   ([`KindRegistry`], built through [`RegistryBuilder`]);
//! - the historical flat-string alias table and its parser ([`LegacyTable`]);
//! - the only public query surface ([`Resolver`]);
//! - provider-specific resource-ID grammars (fed by [`ResourceData`]);
//! - the builtin entry and alias tables ([`catalog`]).
//!
//! Everything is a pure read over data frozen at construction: no interior
//! mutability, no hot reload, `Send + Sync` throughout. Unknown inputs
//! degrade to the `generic`/`custom` sentinel instead of failing, so one
//! unrecognized node renders as a plain box rather than crashing a diagram.
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

pub mod catalog;
mod custom;
pub mod fields;
mod legacy;
mod resolver;
mod resource;
mod store;
mod wire;

pub use custom::{parse_defs, CustomDefError, CustomKindDef};
pub use legacy::LegacyTable;
pub use resolver::{InvalidKind, Resolver};
pub use resource::ResourceData;
pub use store::{KindEntry, KindRegistry, RegistryBuilder, RegistryError, ResourceMapping};
pub use wire::{KindField, StoredKind};
