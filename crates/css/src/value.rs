use crate::Raw;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Length(String);

impl Length {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn px(n: i64) -> Length {
    Length(format!("{}px", n))
}

pub fn rem(x: f64) -> Length {
    Length(format!("{}rem", trim_zeros(&format!("{:.4}", x))))
}

pub fn em(x: f64) -> Length {
    Length(format!("{}em", trim_zeros(&format!("{:.4}", x))))
}

pub fn percent(x: f64) -> Length {
    Length(format!("{}%", trim_zeros(&format!("{:.6}", x))))
}

/// Taken as written, `#` included.
pub fn hex(value: &str) -> Color {
    Color(value.to_string())
}

pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color(format!("rgb({} {} {})", r, g, b))
}

/// Alpha is scaled from `0..=255` to `0..=1` with three decimals.
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color(format!(
        "rgba({} {} {} / {:.3})",
        r,
        g,
        b,
        f64::from(a) / 255.0
    ))
}

/// `var(--name)`
pub fn var(name: &str) -> Raw {
    Raw::new(format!("var({})", name))
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
