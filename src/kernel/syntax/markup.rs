use super::scanner::Scanner;
use super::{TokenKind, TokenSpan};

pub(super) fn tokenize(src: &str) -> Vec<TokenSpan> {
    let mut sc = Scanner::new(src);

    while !sc.is_eof() {
        if sc.starts_with("<!--") {
            let start = sc.pos();
            let end = sc.end_after(start + 4, "-->");
            sc.push(TokenKind::Comment, start, end);
            sc.set_pos(end);
            continue;
        }

        if sc.peek() == Some(b'<') {
            let open_len = if sc.peek_at(1) == Some(b'/') { 2 } else { 1 };
            if sc.peek_at(open_len).is_some_and(is_tag_name_byte) {
                lex_tag(&mut sc, open_len);
                continue;
            }
        }

        sc.bump(1);
        // Nothing outside comments and tags is classified.
        sc.bump_while(|b| b != b'<');
    }

    sc.finish()
}

fn lex_tag(sc: &mut Scanner<'_>, open_len: usize) {
    let start = sc.pos();
    sc.push(TokenKind::Punctuation, start, start + open_len);
    sc.bump(open_len);

    let name_start = sc.pos();
    sc.bump_while(is_tag_name_byte);
    sc.push(TokenKind::Tag, name_start, sc.pos());

    loop {
        let Some(b) = sc.peek() else {
            return;
        };
        match b {
            b'>' => {
                let pos = sc.pos();
                sc.push(TokenKind::Punctuation, pos, pos + 1);
                sc.bump(1);
                return;
            }
            b'/' if sc.peek_at(1) == Some(b'>') => {
                let pos = sc.pos();
                sc.push(TokenKind::Punctuation, pos, pos + 2);
                sc.bump(2);
                return;
            }
            // A new tag starts before this one closed; let the outer loop take it.
            b'<' => return,
            b if is_attr_name_start(b) => lex_attribute(sc),
            _ => sc.bump(1),
        }
    }
}

fn lex_attribute(sc: &mut Scanner<'_>) {
    let name_start = sc.pos();
    sc.bump_while(is_attr_name_byte);
    let name_end = sc.pos();
    sc.push(TokenKind::AttrName, name_start, name_end);

    sc.bump_while(|b| b.is_ascii_whitespace());
    if sc.peek() != Some(b'=') {
        sc.set_pos(name_end);
        return;
    }
    sc.bump(1);
    sc.bump_while(|b| b.is_ascii_whitespace());
    let op_end = sc.pos();
    sc.push(TokenKind::Operator, name_end, op_end);

    let value_start = sc.pos();
    match sc.peek() {
        Some(quote @ (b'"' | b'\'')) => {
            sc.bump(1);
            sc.bump_while(|b| b != quote);
            // Closing quote; an unterminated value runs to end of input.
            sc.bump(1);
            sc.push(TokenKind::AttrValue, value_start, sc.pos());
        }
        Some(_) => {
            sc.bump_while(|b| {
                !b.is_ascii_whitespace() && !matches!(b, b'"' | b'\'' | b'>' | b'<')
            });
            sc.push(TokenKind::AttrValue, value_start, sc.pos());
        }
        None => {}
    }
}

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_attr_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b':' || b == b'@'
}

fn is_attr_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b':' | b'-' | b'.' | b'@')
}
