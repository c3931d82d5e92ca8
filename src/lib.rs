//! Keyed in-memory collections: hash tables with a choice of collision policy and ordered search
//! trees with optional AVL balancing.
//!
//! # Purpose
//! These types exist to make the behaviour of the classic collision policies and tree rotations
//! observable. The default hash function is deliberately weak ("lose lose") so that collisions
//! are easy to produce and inspect, and the slot space of every table is sparse and unbounded:
//! there is no resizing, no wrapping and no load factor.
//!
//! # Error Handling
//! Operations report failure through sentinels rather than panics: lookups return [`Option`]s and
//! mutations return `bool`. Where there is more than one reason for a mutation to fail, a typed
//! error is available underneath the sentinel, such as
//! [`PutError`](collections::hash::PutError) behind `try_put`.
//!
//! # Dependencies
//! Errors derive their boilerplate through `derive_more`, logging goes through the `log` facade
//! and [`Dictionary`](collections::hash::Dictionary) keeps insertion order with `indexmap`.
//!
//! # Features
//! Each collection family sits behind a cargo feature (`hash`, `tree`, `linked`, `compare`), all
//! of which are enabled by the default `collections-all` feature.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

#[allow(unused)]
pub(crate) mod util;
