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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
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

//! Session layer for crystallographic structure viewers.
//!
//! Xtalview owns the state a structure viewer mutates at runtime (loaded
//! model, representation, background, camera view, overlays, chat panel) and
//! turns a typed command vocabulary into primitive drawing calls against an
//! external rendering engine. The engine itself stays behind the
//! [`render::RenderBackend`] trait; the crate ships
//! [`render::RecordingBackend`] for tests and headless hosts.
//!
//! # Key entry points
//!
//! - [`session::ViewerSession`] - the viewer state machine driving a backend
//! - [`session::ViewerCommand`] - the serializable command vocabulary
//! - [`lattice::parse_cryst1`] - fixed-column CRYST1 record extraction
//! - [`cell::UnitCellWireframe`] - triclinic unit-cell wireframe geometry
//! - [`view::ViewState`] - serializable camera state with face presets
//! - [`options::ViewerOptions`] - runtime configuration (display, overlays)
//!
//! # Architecture
//!
//! Everything is synchronous and single-threaded: a host feeds commands (or
//! calls session methods directly), the session updates its own state and
//! issues backend calls, and the backend renders however it likes. The one
//! structured piece of file parsing done here is the CRYST1 lattice record;
//! model content is otherwise passed to the backend opaquely.

pub mod cell;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod lattice;
pub mod options;
pub mod render;
pub mod session;
pub mod view;
