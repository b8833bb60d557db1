//! This module acts as a central hub for all ledger-store access.
//! It declares the per-collection submodules so they can be reached from
//! elsewhere in the application via their full path, e.g.,
//! `database::catalog::find_entries`.

pub mod catalog;
pub mod init;
pub mod models;
pub mod requests;
pub mod users;
