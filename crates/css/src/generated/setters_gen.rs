// Code generated by cssgen; DO NOT EDIT.
// Source: spec version 2024.1 at 2024-06-01T09:00:00+00:00

//! Type-safe setter functions for CSS properties in `css`.

#![allow(non_snake_case)]

use super::keywords_gen::*;
use super::properties_gen::*;
use crate::{Decl, Keyword, set};

/// SetAlignItems creates a declaration for the align-items property.
pub fn SetAlignItems(v: AlignItemsVal) -> Decl {
    set(AlignItems, Keyword::new(v.as_str()))
}

/// SetBackgroundRepeat creates a declaration for the background-repeat property.
pub fn SetBackgroundRepeat(v: BackgroundRepeatVal) -> Decl {
    set(BackgroundRepeat, Keyword::new(v.as_str()))
}

/// SetDisplay creates a declaration for the display property.
pub fn SetDisplay(v: DisplayVal) -> Decl {
    set(Display, Keyword::new(v.as_str()))
}

/// SetFlexDirection creates a declaration for the flex-direction property.
pub fn SetFlexDirection(v: FlexDirectionVal) -> Decl {
    set(FlexDirection, Keyword::new(v.as_str()))
}

/// SetFontWeight creates a declaration for the font-weight property.
pub fn SetFontWeight(v: FontWeightVal) -> Decl {
    set(FontWeight, Keyword::new(v.as_str()))
}

/// SetJustifyContent creates a declaration for the justify-content property.
pub fn SetJustifyContent(v: JustifyContentVal) -> Decl {
    set(JustifyContent, Keyword::new(v.as_str()))
}

/// SetPosition creates a declaration for the position property.
pub fn SetPosition(v: PositionVal) -> Decl {
    set(Position, Keyword::new(v.as_str()))
}

/// SetTextAlign creates a declaration for the text-align property.
pub fn SetTextAlign(v: TextAlignVal) -> Decl {
    set(TextAlign, Keyword::new(v.as_str()))
}
