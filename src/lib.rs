//! Bannerforge - library for Minecraft banner designs
//!
//! This library provides functionality to:
//! - Model a banner as a base color plus ordered pattern layers
//! - Encode/decode banners to the in-game font text, the compact banner
//!   code, and the banner-writer/planetminecraft URL formats
//! - Compose messages from named banner sets under configurable writing
//!   and newline directions, and render them as images
//! - Derive the compact writer-URL and anvil-optimized exports

pub mod banner;
pub mod cli;
pub mod error;
pub mod layer;
pub mod message;
pub mod output;
pub mod palette;
pub mod set;
pub mod split;
pub mod sprites;
pub mod store;
