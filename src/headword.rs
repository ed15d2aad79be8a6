//! Headword shape check.

/// Whether `headword` has the accepted shape: an uppercase ASCII letter,
/// followed by lowercase ASCII letters and single interior hyphens.
///
/// A hyphen may not end the word and may not be followed by another hyphen.
/// The empty string is not well-formed.
pub fn is_well_formed(headword: &str) -> bool {
    let bytes = headword.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    if !first.is_ascii_uppercase() {
        return false;
    }
    for (i, &b) in rest.iter().enumerate() {
        match b {
            b'a'..=b'z' => {}
            b'-' => match rest.get(i + 1) {
                None | Some(b'-') => return false,
                Some(_) => {}
            },
            _ => return false,
        }
    }
    true
}
