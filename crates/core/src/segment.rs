//! Declaration segmentation — split a class body into candidate member declarations.
//!
//! The body is cut at `;`, `}` and lone `:` characters. Only segments that look
//! like function declarations (contain both `(` and `)`) survive, which drops
//! fields, access specifiers and stray `};`.
//!
//! Known limitations, kept deliberately:
//! - a lone `:` also splits base-class lists and ternary operators inside default
//!   arguments;
//! - an inline body containing `;` is cut at its first statement.

/// Position and byte of the next segment delimiter at or after `from`.
///
/// A `::` pair is a scope-resolution token, never a delimiter.
fn next_delimiter(bytes: &[u8], from: usize) -> Option<(usize, u8)> {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b';' | b'}' => return Some((i, bytes[i])),
            b':' => {
                if bytes.get(i + 1) == Some(&b':') {
                    i += 2;
                    continue;
                }
                return Some((i, b':'));
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn looks_like_function(segment: &str) -> bool {
    !segment.is_empty() && segment.contains('(') && segment.contains(')')
}

/// Split `body` into raw member declarations, in source order.
///
/// A segment ending at `}` keeps the brace, so `int size() const {}` stays whole.
pub fn segment(body: &str) -> Vec<String> {
    let bytes = body.as_bytes();
    let mut declarations = Vec::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let (end, next) = match next_delimiter(bytes, cursor) {
            Some((pos, b'}')) => (pos + 1, pos + 1),
            Some((pos, _)) => (pos, pos + 1),
            None => (bytes.len(), bytes.len()),
        };

        let candidate = body[cursor..end].trim();
        if looks_like_function(candidate) {
            declarations.push(candidate.to_string());
        }
        cursor = next;
    }

    declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_semicolons_and_drops_fields() {
        let body = "void a();\nint count;\nint b(int x);";
        assert_eq!(segment(body), vec!["void a()", "int b(int x)"]);
    }

    #[test]
    fn access_specifiers_are_cut_away() {
        let body = "public:\n  virtual double area() = 0;\nprivate:\n  int x;";
        assert_eq!(segment(body), vec!["virtual double area() = 0"]);
    }

    #[test]
    fn scope_resolution_does_not_split() {
        let body = "virtual void setName(std::string name) = 0;";
        assert_eq!(segment(body), vec!["virtual void setName(std::string name) = 0"]);
    }

    #[test]
    fn nested_scopes_do_not_split() {
        let body = "std::vector<ns::detail::Item> items(const std::map<int, ns::Key>& m);";
        assert_eq!(
            segment(body),
            vec!["std::vector<ns::detail::Item> items(const std::map<int, ns::Key>& m)"]
        );
    }

    #[test]
    fn empty_inline_body_keeps_closing_brace() {
        let body = "int size() const {}\nvoid clear();";
        assert_eq!(segment(body), vec!["int size() const {}", "void clear()"]);
    }

    #[test]
    fn trailing_text_without_delimiter_is_a_segment() {
        assert_eq!(segment("void last()"), vec!["void last()"]);
    }

    #[test]
    fn lone_colon_splits_base_list_like_text() {
        // Ternary in a default argument is cut at the colon.
        let body = "void f(int x = a ? 1 : 2);";
        assert_eq!(segment(body), Vec::<String>::new());
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert!(segment("").is_empty());
        assert!(segment("   \n ").is_empty());
    }
}
