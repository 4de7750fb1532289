// Code generated by cssgen; DO NOT EDIT.
// Source: spec version 2024.1 at 2024-06-01T09:00:00+00:00

//! Property constants for CSS properties in `css`.

#![allow(non_upper_case_globals)]

use crate::Property;

pub const AlignItems: Property = Property::new("align-items");
pub const BackgroundColor: Property = Property::new("background-color");
pub const BackgroundRepeat: Property = Property::new("background-repeat");
pub const Display: Property = Property::new("display");
pub const FlexDirection: Property = Property::new("flex-direction");
pub const FontWeight: Property = Property::new("font-weight");
pub const JustifyContent: Property = Property::new("justify-content");
pub const Position: Property = Property::new("position");
pub const TextAlign: Property = Property::new("text-align");
