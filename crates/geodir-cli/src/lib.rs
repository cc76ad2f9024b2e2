//! geodir-cli
//! ==========
//!
//! Command-line shell for the `geodir-core` country directory.
//!
//! This crate primarily provides a binary (`geodir-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geodir-cli
//! geodir-cli --help
//! geodir-cli suggest ger
//! geodir-cli show "United States"
//! geodir-cli browse
//! ```
//!
//! For programmatic access to the search session and detail aggregator, use
//! the [`geodir-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/holg/geodir-rs>
//! - Core crate: <https://docs.rs/geodir-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
