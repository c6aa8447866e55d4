#![allow(dead_code)]

/// The markup from the first occurrence of `marker` onwards.
pub fn section_from<'a>(html: &'a str, marker: &str) -> &'a str {
    let start = html
        .find(marker)
        .unwrap_or_else(|| panic!("{marker:?} not in {html}"));
    &html[start..]
}

/// Whether every needle occurs, each after the previous one.
pub fn in_order(html: &str, needles: &[&str]) -> bool {
    let mut rest = html;
    for needle in needles {
        match rest.find(needle) {
            Some(i) => rest = &rest[i + needle.len()..],
            None => return false,
        }
    }
    true
}

/// Text between `>` and `<` for each opening tag that starts with `open`.
pub fn texts_after(html: &str, open: &str) -> Vec<String> {
    html.match_indices(open)
        .map(|(i, _)| {
            let rest = &html[i..];
            let start = rest.find('>').map(|j| j + 1).unwrap_or(rest.len());
            let end = rest[start..].find('<').map(|j| start + j).unwrap_or(rest.len());
            rest[start..end].to_string()
        })
        .collect()
}
