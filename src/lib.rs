// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap and panic freely
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

//! Scroll-reactive animation registry.
//!
//! Finn lets a host page attach reusable animation behaviors to elements
//! whose presentation reacts to scroll position. Behaviors are registered
//! as factories under a string key; each registered resource gets its own
//! behavior instance that is fed a fresh [`animation::ActStateSnapshot`] on
//! every scroll tick.
//!
//! # Key entry points
//!
//! - [`registry::AnimationRegistry`] - registration, fan-out and teardown
//! - [`animation::behaviors::AnimationBehavior`] - the behavior contract
//! - [`resource::AnimationResource`] - element plus measurement config
//! - [`host`] - element and scroll-source contracts, with in-memory and
//!   (feature `web`) DOM implementations
//! - [`options::Options`] - TOML/JSON configuration
//!
//! # Architecture
//!
//! Each registry owns one [`signal::ScrollSignal`]: a single native scroll
//! listener feeding a replaying [`signal::Signal`]. Every registration
//! derives an [`animation::ActStream`] from it that maps the offset through
//! the pure functions in [`geometry`]. All delivery is synchronous and in
//! registration order.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod host;
pub mod options;
pub mod registry;
pub mod resource;
pub mod signal;

pub use error::{FinnError, Result};
pub use registry::{AnimationRef, AnimationRegistry};
