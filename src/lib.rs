//! strpo - Localizable.strings <-> gettext catalog converter
//!
//! Converts Apple `Localizable.strings` tables into gettext `.po` catalogs
//! for translation tooling, and converts translated catalogs back into
//! `Localizable.strings` tables.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `table`: Ordered in-memory translation table
//! - `catalog`: Catalog model and `.po` writer
//! - `parsers`: Readers for `.strings` and `.po` files
//! - `strings_writer`: `.strings` writer
//! - `convert`: The two conversion operations

pub mod catalog;
pub mod cli;
pub mod config;
pub mod convert;
pub mod parsers;
pub mod strings_writer;
pub mod table;
