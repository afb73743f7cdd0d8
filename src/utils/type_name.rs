use std::borrow::Cow;

/// Returns the unqualified name of a type, dropping any namespace or module path.
///
/// Path separators are `.`, `+` (nested types) and `::`, and are only honoured
/// outside generic argument lists. A closed generic such as
/// `Shop.ILogger<Shop.Orders.Order>` is reduced to its backtick-arity form
/// `` ILogger`1 ``, so it matches the name the host reports for the generic
/// service type. Returns `None` when nothing is left.
pub fn simple_name(type_name: &str) -> Option<Cow<'_, str>> {
    let trimmed = type_name.trim();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in trimmed.char_indices() {
        match c {
            '<' | '[' => depth += 1,
            '>' | ']' => depth = depth.saturating_sub(1),
            '.' | '+' | ':' if depth == 0 => start = i + c.len_utf8(),
            _ => {}
        }
    }

    let name = trimmed[start..].trim();
    if name.is_empty() {
        return None;
    }

    match (name.find('<'), name.ends_with('>')) {
        (Some(open), true) => {
            let base = name[..open].trim();
            if base.is_empty() {
                return None;
            }
            let arity = generic_arity(&name[open + 1..name.len() - 1]);
            Some(Cow::Owned(format!("{}`{}", base, arity)))
        }
        _ => Some(Cow::Borrowed(name)),
    }
}

/// Number of top-level arguments in a generic argument list.
fn generic_arity(arguments: &str) -> usize {
    let mut depth = 0usize;
    let mut commas = 0usize;

    for c in arguments.chars() {
        match c {
            '<' | '[' => depth += 1,
            '>' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => commas += 1,
            _ => {}
        }
    }

    commas + 1
}
