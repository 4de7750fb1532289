//! CSS values, declarations and rules as typed Rust values.
//!
//! Generated property, keyword and setter modules build on these types:
//! a setter pairs a [`Property`] with a [`Keyword`] into a [`Decl`].

use std::fmt::{self, Write as _};

pub mod generated;
pub mod shorthand;
pub mod value;

pub use value::{Color, Length, em, hex, percent, px, rem, rgb, rgba, var};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Property(&'static str);

impl Property {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raw(String);

impl Raw {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Keyword(Keyword),
    Length(Length),
    Color(Color),
    Raw(Raw),
}

impl Value {
    pub fn as_str(&self) -> &str {
        match self {
            Value::Keyword(keyword) => keyword.as_str(),
            Value::Length(length) => length.as_str(),
            Value::Color(color) => color.as_str(),
            Value::Raw(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Keyword> for Value {
    fn from(value: Keyword) -> Self {
        Value::Keyword(value)
    }
}

impl From<Length> for Value {
    fn from(value: Length) -> Self {
        Value::Length(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl From<Raw> for Value {
    fn from(value: Raw) -> Self {
        Value::Raw(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decl {
    pub property: Property,
    pub value: Value,
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

pub fn set(property: Property, value: impl Into<Value>) -> Decl {
    Decl {
        property,
        value: value.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub decls: Vec<Decl>,
}

pub fn rule_set(selector: impl Into<String>, decls: impl IntoIterator<Item = Decl>) -> Rule {
    Rule {
        selector: selector.into(),
        decls: decls.into_iter().collect(),
    }
}

/// `@media`, `@supports` and friends. Without a body it renders as a
/// statement (`@import url(x.css);`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    pub name: String,
    pub params: String,
    pub body: Vec<Item>,
}

pub fn at_rule(
    name: impl Into<String>,
    params: impl Into<String>,
    body: impl IntoIterator<Item = Item>,
) -> AtRule {
    AtRule {
        name: name.into(),
        params: params.into(),
        body: body.into_iter().collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Rule(Rule),
    AtRule(AtRule),
}

impl From<Rule> for Item {
    fn from(rule: Rule) -> Self {
        Item::Rule(rule)
    }
}

impl From<AtRule> for Item {
    fn from(at_rule: AtRule) -> Self {
        Item::AtRule(at_rule)
    }
}

impl Item {
    /// Compact form: `a{display:block;color:red}`.
    pub fn minified(&self) -> String {
        let mut out = String::new();
        write_minified(self, &mut out);
        out
    }
}

fn write_pretty(item: &Item, indent: usize, out: &mut String) {
    match item {
        Item::Rule(rule) => write_pretty_rule(rule, indent, out),
        Item::AtRule(at_rule) => write_pretty_at_rule(at_rule, indent, out),
    }
}

fn write_pretty_rule(rule: &Rule, indent: usize, out: &mut String) {
    if rule.decls.is_empty() {
        return;
    }
    let pad = "  ".repeat(indent);
    let _ = writeln!(out, "{}{} {{", pad, rule.selector);
    for decl in &rule.decls {
        let _ = writeln!(out, "{}  {};", pad, decl);
    }
    out.push_str(&pad);
    out.push('}');
}

fn write_pretty_at_rule(at_rule: &AtRule, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    out.push_str(&pad);
    write_at_rule_head(at_rule, out);
    if at_rule.body.is_empty() {
        out.push(';');
        return;
    }
    out.push_str(" {\n");
    for item in &at_rule.body {
        write_pretty(item, indent + 1, out);
        out.push('\n');
    }
    out.push_str(&pad);
    out.push('}');
}

fn write_at_rule_head(at_rule: &AtRule, out: &mut String) {
    out.push('@');
    out.push_str(&at_rule.name);
    if !at_rule.params.is_empty() {
        out.push(' ');
        out.push_str(&at_rule.params);
    }
}

fn write_minified(item: &Item, out: &mut String) {
    match item {
        Item::Rule(rule) => {
            if rule.decls.is_empty() {
                return;
            }
            out.push_str(&rule.selector);
            out.push('{');
            for (idx, decl) in rule.decls.iter().enumerate() {
                if idx > 0 {
                    out.push(';');
                }
                let _ = write!(out, "{}:{}", decl.property, decl.value);
            }
            out.push('}');
        }
        Item::AtRule(at_rule) => {
            write_at_rule_head(at_rule, out);
            if at_rule.body.is_empty() {
                out.push(';');
                return;
            }
            out.push('{');
            for item in &at_rule.body {
                write_minified(item, out);
            }
            out.push('}');
        }
    }
}

/// Indented form with two spaces per level; empty rules render as nothing.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_pretty(self, 0, &mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_pretty_rule(self, 0, &mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for AtRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_pretty_at_rule(self, 0, &mut out);
        f.write_str(&out)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub items: Vec<Item>,
}

impl Stylesheet {
    pub fn add(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    pub fn minified(&self) -> String {
        self.items.iter().map(Item::minified).collect()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
