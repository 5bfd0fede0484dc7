//! CSS presentation for image-styling directives.
//!
//! Turns the directives parsed by [`ois_syntax`] into what the host applies
//! to an image container:
//!
//! - a class per directive: `w-100` adds `ois-w`
//! - a custom property per argument: `--ois-w-num: 100px`
//!
//! Unitless numbers get a per-directive default unit ([`default_unit`]), so
//! `w-100` and `w-100px` are the same.

mod image;
mod styled;
mod units;

pub use image::{IMAGE_EXTENSIONS, is_styleable_image, parse_extension};
pub use styled::{
    CssProperty, DEFAULT_OBJECT_FIT_PROPERTY, Dimensions, ObjectFit, ROOT_CLASS, StyleSettings,
    StyledImage, UnknownObjectFit, class_name, property_name, property_value,
};
pub use units::default_unit;
