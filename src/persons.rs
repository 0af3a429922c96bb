//! Person names inferred from image filenames.
//!
//! Photos are named after the people in them, e.g. `John_Doe.jpg` or
//! `mary-anne, bob.png`. This module turns such a filename into an ordered,
//! duplicate-free list of display names. The parsing is purely lexical:
//!
//! - `John_Doe.jpg` → `["John", "Doe"]`
//! - `mary-anne, bob.png` → `["Mary", "Anne", "Bob"]`
//! - `2023.jpg` → `["Unknown"]`  (numeric tokens are serial numbers, not people)
//! - `bob+BOB.gif` → `["Bob"]`  (duplicates collapse after normalization)
//!
//! Names are title-cased one token at a time, so `McDonald` becomes
//! `Mcdonald` and a two-word first name becomes two persons.

/// Sentinel returned when no token in the filename looks like a name.
pub const UNKNOWN_PERSON: &str = "Unknown";

/// Extract the persons named in `filename`.
///
/// Always returns at least one entry; [`UNKNOWN_PERSON`] when nothing survives.
pub fn extract_persons(filename: &str) -> Vec<String> {
    let cleaned: String = strip_extension(filename)
        .chars()
        .map(|c| if is_allowed(c) { c } else { ' ' })
        .collect();

    let mut persons: Vec<String> = Vec::new();
    for token in cleaned.split(is_separator) {
        let token = token.trim();
        if token.is_empty() || !token.chars().any(is_letter) {
            continue;
        }
        let name = title_case(token);
        if !persons.contains(&name) {
            persons.push(name);
        }
    }

    if persons.is_empty() {
        persons.push(UNKNOWN_PERSON.to_string());
    }
    persons
}

/// Drop a trailing `.ext` whose extension contains no `.` or `/`.
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) => {
            let ext = &filename[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                filename
            } else {
                &filename[..dot]
            }
        }
        None => filename,
    }
}

/// ASCII letters plus the Latin-1 range `À`..=`ÿ`.
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FF}').contains(&c)
}

fn is_allowed(c: char) -> bool {
    is_letter(c) || c.is_ascii_digit() || matches!(c, ' ' | ',' | '-' | '_' | '.' | '/')
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | ',' | '_' | '-' | '+' | '.' | '/')
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
