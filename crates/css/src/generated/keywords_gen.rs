// Code generated by cssgen; DO NOT EDIT.
// Source: spec version 2024.1 at 2024-06-01T09:00:00+00:00

//! Keyword types and constants for CSS property values in `css`.

#![allow(non_upper_case_globals)]

/// AlignItemsVal represents values for the align-items property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignItemsVal(&'static str);

impl AlignItemsVal {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for AlignItemsVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const AlignItemsValBaseline: AlignItemsVal = AlignItemsVal("baseline");
pub const AlignItemsValCenter: AlignItemsVal = AlignItemsVal("center");
pub const AlignItemsValFlexEnd: AlignItemsVal = AlignItemsVal("flex-end");
pub const AlignItemsValFlexStart: AlignItemsVal = AlignItemsVal("flex-start");
pub const AlignItemsValNormal: AlignItemsVal = AlignItemsVal("normal");
pub const AlignItemsValStretch: AlignItemsVal = AlignItemsVal("stretch");

/// BackgroundRepeatVal represents values for the background-repeat property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundRepeatVal(&'static str);

impl BackgroundRepeatVal {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for BackgroundRepeatVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const BackgroundRepeatValNoRepeat: BackgroundRepeatVal = BackgroundRepeatVal("no-repeat");
pub const BackgroundRepeatValRepeat: BackgroundRepeatVal = BackgroundRepeatVal("repeat");
pub const BackgroundRepeatValRepeatX: BackgroundRepeatVal = BackgroundRepeatVal("repeat-x");
pub const BackgroundRepeatValRepeatY: BackgroundRepeatVal = BackgroundRepeatVal("repeat-y");
pub const BackgroundRepeatValRound: BackgroundRepeatVal = BackgroundRepeatVal("round");
pub const BackgroundRepeatValSpace: BackgroundRepeatVal = BackgroundRepeatVal("space");

/// DisplayVal represents values for the display property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayVal(&'static str);

impl DisplayVal {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for DisplayVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const DisplayValBlock: DisplayVal = DisplayVal("block");
pub const DisplayValContents: DisplayVal = DisplayVal("contents");
pub const DisplayValFlex: DisplayVal = DisplayVal("flex");
pub const DisplayValGrid: DisplayVal = DisplayVal("grid");
pub const DisplayValInline: DisplayVal = DisplayVal("inline");
pub const DisplayValInlineBlock: DisplayVal = DisplayVal("inline-block");
pub const DisplayValNone: DisplayVal = DisplayVal("none");

/// FlexDirectionVal represents values for the flex-direction property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlexDirectionVal(&'static str);

impl FlexDirectionVal {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for FlexDirectionVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const FlexDirectionValColumn: FlexDirectionVal = FlexDirectionVal("column");
pub const FlexDirectionValColumnReverse: FlexDirectionVal = FlexDirectionVal("column-reverse");
pub const FlexDirectionValRow: FlexDirectionVal = FlexDirectionVal("row");
pub const FlexDirectionValRowReverse: FlexDirectionVal = FlexDirectionVal("row-reverse");

/// FontWeightVal represents values for the font-weight property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeightVal(&'static str);

impl FontWeightVal {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for FontWeightVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const FontWeightVal100: FontWeightVal = FontWeightVal("100");
pub const FontWeightVal200: FontWeightVal = FontWeightVal("200");
pub const FontWeightVal300: FontWeightVal = FontWeightVal("300");
pub const FontWeightVal400: FontWeightVal = FontWeightVal("400");
pub const FontWeightVal500: FontWeightVal = FontWeightVal("500");
pub const FontWeightVal600: FontWeightVal = FontWeightVal("600");
pub const FontWeightVal700: FontWeightVal = FontWeightVal("700");
pub const FontWeightVal800: FontWeightVal = FontWeightVal("800");
pub const FontWeightVal900: FontWeightVal = FontWeightVal("900");
pub const FontWeightValBold: FontWeightVal = FontWeightVal("bold");
pub const FontWeightValBolder: FontWeightVal = FontWeightVal("bolder");
pub const FontWeightValLighter: FontWeightVal = FontWeightVal("lighter");
pub const FontWeightValNormal: FontWeightVal = FontWeightVal("normal");

/// JustifyContentVal represents values for the justify-content property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JustifyContentVal(&'static str);

impl JustifyContentVal {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for JustifyContentVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const JustifyContentValCenter: JustifyContentVal = JustifyContentVal("center");
pub const JustifyContentValEnd: JustifyContentVal = JustifyContentVal("end");
pub const JustifyContentValFlexEnd: JustifyContentVal = JustifyContentVal("flex-end");
pub const JustifyContentValFlexStart: JustifyContentVal = JustifyContentVal("flex-start");
pub const JustifyContentValNormal: JustifyContentVal = JustifyContentVal("normal");
pub const JustifyContentValSpaceAround: JustifyContentVal = JustifyContentVal("space-around");
pub const JustifyContentValSpaceBetween: JustifyContentVal = JustifyContentVal("space-between");
pub const JustifyContentValSpaceEvenly: JustifyContentVal = JustifyContentVal("space-evenly");
pub const JustifyContentValStart: JustifyContentVal = JustifyContentVal("start");

/// PositionVal represents values for the position property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionVal(&'static str);

impl PositionVal {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for PositionVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PositionValAbsolute: PositionVal = PositionVal("absolute");
pub const PositionValFixed: PositionVal = PositionVal("fixed");
pub const PositionValRelative: PositionVal = PositionVal("relative");
pub const PositionValStatic: PositionVal = PositionVal("static");
pub const PositionValSticky: PositionVal = PositionVal("sticky");

/// TextAlignVal represents values for the text-align property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextAlignVal(&'static str);

impl TextAlignVal {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for TextAlignVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const TextAlignValCenter: TextAlignVal = TextAlignVal("center");
pub const TextAlignValEnd: TextAlignVal = TextAlignVal("end");
pub const TextAlignValJustify: TextAlignVal = TextAlignVal("justify");
pub const TextAlignValLeft: TextAlignVal = TextAlignVal("left");
pub const TextAlignValMatchParent: TextAlignVal = TextAlignVal("match-parent");
pub const TextAlignValRight: TextAlignVal = TextAlignVal("right");
pub const TextAlignValStart: TextAlignVal = TextAlignVal("start");
