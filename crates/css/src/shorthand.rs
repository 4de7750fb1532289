use crate::generated::{
    AlignItemsValCenter, DisplayValFlex, FlexDirectionValColumn, FlexDirectionValRow,
    JustifyContentValCenter, SetAlignItems, SetDisplay, SetFlexDirection, SetJustifyContent,
};
use crate::{Decl, Keyword, Raw, Value};

/// `pad_xy(x, y)` renders as `y x`, matching the two-value box shorthand.
pub fn pad_xy(x: impl Into<Value>, y: impl Into<Value>) -> Raw {
    multiple([y.into(), x.into()])
}

pub fn margin_xy(x: impl Into<Value>, y: impl Into<Value>) -> Raw {
    pad_xy(x, y)
}

/// Top, right, bottom, left.
pub fn box_sides(
    top: impl Into<Value>,
    right: impl Into<Value>,
    bottom: impl Into<Value>,
    left: impl Into<Value>,
) -> Raw {
    multiple([top.into(), right.into(), bottom.into(), left.into()])
}

pub fn border(width: impl Into<Value>, style: Keyword, color: impl Into<Value>) -> Raw {
    multiple([width.into(), style.into(), color.into()])
}

/// Space-separated list.
pub fn multiple(values: impl IntoIterator<Item = Value>) -> Raw {
    join(values, " ")
}

/// Comma-separated list.
pub fn comma(values: impl IntoIterator<Item = Value>) -> Raw {
    join(values, ", ")
}

fn join(values: impl IntoIterator<Item = Value>, separator: &str) -> Raw {
    let parts = values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>();
    Raw::new(parts.join(separator))
}

pub fn flex_center() -> Vec<Decl> {
    vec![
        SetDisplay(DisplayValFlex),
        SetJustifyContent(JustifyContentValCenter),
        SetAlignItems(AlignItemsValCenter),
    ]
}

pub fn flex_column() -> Vec<Decl> {
    vec![
        SetDisplay(DisplayValFlex),
        SetFlexDirection(FlexDirectionValColumn),
    ]
}

pub fn flex_row() -> Vec<Decl> {
    vec![SetDisplay(DisplayValFlex), SetFlexDirection(FlexDirectionValRow)]
}
