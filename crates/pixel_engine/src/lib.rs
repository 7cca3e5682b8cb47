#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
mod error;
pub use error::*;

mod color;
pub use color::*;

mod cell;
pub use cell::*;

mod confirm;
pub use confirm::*;

mod grid;
pub use grid::*;


mod surface;
pub use surface::*;

pub mod formats;
pub use formats::*;
