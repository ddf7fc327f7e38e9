//! Host-side adapters for the menu shim core.

pub mod action;
