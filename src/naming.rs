pub fn pascal_case(name: &str) -> String {
    name.split('-').map(title_case).collect()
}

pub fn property_const_name(property: &str) -> String {
    pascal_case(property)
}

pub fn keyword_type_name(property: &str) -> String {
    format!("{}Val", pascal_case(property))
}

pub fn setter_name(property: &str) -> String {
    format!("Set{}", pascal_case(property))
}

pub fn keyword_const_suffix(keyword: &str) -> String {
    pascal_case(keyword)
}

pub fn keyword_const_name(property: &str, keyword: &str) -> String {
    format!("{}{}", keyword_type_name(property), keyword_const_suffix(keyword))
}

/// Inverse of [`pascal_case`] for names whose segments start with a letter:
/// `BackgroundColor` -> `background-color`.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (idx, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if idx > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
