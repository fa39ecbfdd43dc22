//! Defines fixed-height monochrome bitmap fonts and the routines that rasterize their glyphs.
//!
//! A [`FontDescriptor`][fd] borrows immutable font tables, [`FontDescriptor::lookup`][lk] locates
//! a [`Glyph`][g] and the glyph's rows unpack into pixels. The [`render`] module prints glyphs
//! onto a character-cell text stream.
//!
//! Includes both read-only and writable interfaces; the writable interfaces require the `std`
//! feature.
//!
//! [fd]: crate::descriptor::FontDescriptor
//! [lk]: crate::descriptor::FontDescriptor::lookup
//! [g]: crate::glyph::Glyph
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
pub mod builder;
pub mod descriptor;
pub mod dump;
pub mod error;
pub mod glyph;
pub mod render;
