//! gazetteer-cli
//! =============
//!
//! Command-line interface for the `gazetteer-core` location knowledge base.
//!
//! This crate primarily provides a binary (`gazetteer`). The library target
//! only carries this overview so the documentation renders.
//!
//! Basic usage:
//!
//! ```text
//! gazetteer --help
//! gazetteer --config gazetteer.toml stats
//! gazetteer --lat 47.37 --lon 8.54 --data-dir ./data where Bern
//! gazetteer --lat 47.37 --lon 8.54 score 35.69 139.69 8336599
//! ```
//!
//! For programmatic access use the [`gazetteer-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
