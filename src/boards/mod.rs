//! Board presets.
//!
//! A preset bundles the address-generation constants and property names a
//! board family ships with, so bring-up code does not repeat them.
//!
//! # Supported Boards
//!
//! - Trio Flex-7 (serial-number based MAC generation, 2 MACs per unit)

pub mod trio_flex7;

pub use trio_flex7::TrioFlex7;
