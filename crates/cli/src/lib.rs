//! FormCase CLI
//!
//! Terminal host for the form submission controller: submit HTML to the
//! generation endpoint, print the highlighted JSON, then copy or save it.

pub mod clipboard;
pub mod commands;
pub mod output;
pub mod saver;
pub mod terminal;
