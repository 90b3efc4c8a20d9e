//! Flex message model library.
//!
//! A small builder-constructed model in the style of messaging-platform
//! SDKs: immutable component and container types assembled through fluent
//! builders. Each builder-capable class ships with a generated shadow
//! companion (the `*_shadow` modules), produced by `shadow-gen` from
//! `schema/flex.json` and checked in.

pub mod flex;
