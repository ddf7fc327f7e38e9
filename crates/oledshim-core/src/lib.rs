//! Platform-independent menu shim logic for the E5372 OLED firmware.
//!
//! Everything that touches the real device goes through the injected
//! seams: [`firmware::FirmwareProbe`] for screen observation,
//! [`event::EventSink`] for delivery to the real notify handler, and
//! [`action::ActionRunner`] for the script-backed feature toggles.

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod event;
pub mod firmware;
pub mod interceptor;
pub mod menu;
pub mod registry;
pub mod text_policy;
pub mod tracker;
