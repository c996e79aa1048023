use super::scanner::{is_inline_space, Scanner};
use super::{TokenKind, TokenSpan};

pub(super) fn tokenize(src: &str) -> Vec<TokenSpan> {
    let mut sc = Scanner::new(src);
    let mut depth = 0usize;

    while let Some(b) = sc.peek() {
        let pos = sc.pos();

        if sc.starts_with("/*") {
            let end = sc.end_after(pos + 2, "*/");
            sc.push(TokenKind::Comment, pos, end);
            sc.set_pos(end);
            continue;
        }

        match b {
            b'{' => {
                sc.push(TokenKind::Punctuation, pos, pos + 1);
                sc.bump(1);
                depth += 1;
            }
            b'}' => {
                sc.push(TokenKind::Punctuation, pos, pos + 1);
                sc.bump(1);
                depth = depth.saturating_sub(1);
            }
            b'@' if sc.peek_at(1).is_some_and(is_property_start) => {
                sc.bump(1);
                sc.bump_while(is_property_byte);
                sc.push(TokenKind::Keyword, pos, sc.pos());
            }
            _ if is_property_start(b) && declaration_ahead(sc.rest()) => lex_declaration(&mut sc),
            _ if depth > 0 && is_property_start(b) => lex_selector(&mut sc),
            _ if depth == 0 && !b.is_ascii_whitespace() && b != b';' => lex_selector(&mut sc),
            _ => sc.bump(1),
        }
    }

    sc.finish()
}

fn lex_selector(sc: &mut Scanner<'_>) {
    let start = sc.pos();
    let mut end = start;
    while let Some(b) = sc.peek() {
        if matches!(b, b'{' | b'}' | b';') || sc.starts_with("/*") {
            break;
        }
        sc.bump(1);
        if !b.is_ascii_whitespace() {
            end = sc.pos();
        }
    }
    sc.push(TokenKind::Tag, start, end);
}

/// `name\s*:` whose value ends at `;`, `}` or end of input rather than at `{`.
///
/// `a:hover {` stays a selector; `color: red;` is a declaration at any depth.
fn declaration_ahead(rest: &[u8]) -> bool {
    let name_len = rest.iter().take_while(|&&b| is_property_byte(b)).count();
    let after_name = &rest[name_len..];
    let space = after_name.iter().take_while(|&&b| is_inline_space(b)).count();
    if after_name.get(space) != Some(&b':') {
        return false;
    }
    let value = &after_name[space + 1..];
    memchr::memchr3(b';', b'{', b'}', value).map_or(true, |idx| value[idx] != b'{')
}

/// `name : value ;?`, after `declaration_ahead` found the colon. The value may span lines
/// and ends at `;`, `{`, `}` or a comment.
fn lex_declaration(sc: &mut Scanner<'_>) {
    let name_start = sc.pos();
    sc.bump_while(is_property_byte);
    let name_end = sc.pos();

    sc.bump_while(is_inline_space);
    sc.bump(1);
    sc.bump_while(is_inline_space);
    let op_end = sc.pos();

    sc.push(TokenKind::AttrName, name_start, name_end);
    sc.push(TokenKind::Operator, name_end, op_end);

    let value_start = sc.pos();
    let mut value_end = value_start;
    while let Some(b) = sc.peek() {
        if matches!(b, b';' | b'{' | b'}') || sc.starts_with("/*") {
            break;
        }
        sc.bump(1);
        if !b.is_ascii_whitespace() {
            value_end = sc.pos();
        }
    }
    sc.push(TokenKind::AttrValue, value_start, value_end);

    if sc.peek() == Some(b';') {
        let pos = sc.pos();
        sc.push(TokenKind::Punctuation, pos, pos + 1);
        sc.bump(1);
    }
}

fn is_property_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'-'
}

fn is_property_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}
