// Morekeys Key-Spec Wire Codec
// Escaped comma-joined token lists exchanged with the layout pipeline

/// Escape one token for the joined wire form. Backslashes must be doubled
/// before commas are escaped, or the escape character itself would be
/// ambiguous on the consuming side.
fn escape_spec(spec: &str) -> String {
    spec.replace('\\', "\\\\").replace(',', "\\,")
}

/// Join popup tokens into the single comma-separated string consumed by the
/// layout pipeline, escaping backslashes and commas inside each token.
pub fn join_key_specs(specs: &[String]) -> String {
    let escaped: Vec<String> = specs.iter().map(|spec| escape_spec(spec)).collect();
    escaped.join(",")
}

/// Split a joined key-spec string back into tokens, undoing the escaping
/// applied by [`join_key_specs`].
///
/// A backslash makes the following character literal; an unpaired trailing
/// backslash is kept as-is. An empty input yields an empty list.
pub fn split_key_specs(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }

    let mut specs = Vec::new();
    let mut current = String::new();
    let mut chars = joined.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => current.push('\\'),
            },
            ',' => specs.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    specs.push(current);
    specs
}
