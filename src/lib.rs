//! Carousel - browse a directory of images as a sliding carousel.
//!
//! The heart of the crate is [`controller::SlideController`], which owns the
//! current slide index and pushes panel offsets and dot state out through the
//! traits in [`surface`]. The [`stage`] module implements those traits on top
//! of raylib, and [`app::App`] ties input, animation and drawing together for
//! the binary.

pub mod app;
pub mod constants;
pub mod controller;
pub mod error;
pub mod input;
pub mod stage;
pub mod state;
pub mod surface;
pub mod texture_loader;

pub use controller::SlideController;
pub use error::CarouselError;
