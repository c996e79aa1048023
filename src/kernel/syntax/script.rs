use super::scanner::{is_ident_continue, is_ident_start, Scanner};
use super::{TokenKind, TokenSpan};

// Longest first so `===` wins over `==` and `=`.
const OPERATORS: &[&str] = &[
    "===", "!==", "==", "!=", "<=", ">=", "=>", "&&", "||", "+=", "-=", "*=", "/=", "=", "+", "-",
    "*", "/", "<", ">", "!",
];

pub(super) fn tokenize(src: &str) -> Vec<TokenSpan> {
    let mut sc = Scanner::new(src);

    while let Some(b) = sc.peek() {
        let pos = sc.pos();

        if sc.starts_with("//") {
            sc.bump_while(|b| b != b'\n');
            sc.push(TokenKind::Comment, pos, sc.pos());
            continue;
        }
        if sc.starts_with("/*") {
            let end = sc.end_after(pos + 2, "*/");
            sc.push(TokenKind::Comment, pos, end);
            sc.set_pos(end);
            continue;
        }

        match b {
            b'"' | b'\'' | b'`' => lex_string(&mut sc, b),
            b if b.is_ascii_digit() => lex_number(&mut sc),
            b if is_ident_start(b) => {
                sc.bump_while(is_ident_continue);
                let word = &src[pos..sc.pos()];
                if is_keyword(word) {
                    sc.push(TokenKind::Keyword, pos, sc.pos());
                }
            }
            _ => match OPERATORS.iter().find(|op| sc.starts_with(op)) {
                Some(op) => {
                    sc.push(TokenKind::Operator, pos, pos + op.len());
                    sc.bump(op.len());
                }
                None => sc.bump(1),
            },
        }
    }

    sc.finish()
}

fn lex_string(sc: &mut Scanner<'_>, quote: u8) {
    let start = sc.pos();
    sc.bump(1);
    while let Some(b) = sc.peek() {
        if b == b'\\' {
            sc.bump(2);
            continue;
        }
        sc.bump(1);
        if b == quote {
            break;
        }
    }
    sc.push(TokenKind::String, start, sc.pos());
}

/// `\d+(\.\d+)?` standing alone; digits glued to letters (`12px`, `0x1f`) stay plain.
fn lex_number(sc: &mut Scanner<'_>) {
    let start = sc.pos();
    sc.bump_while(|b| b.is_ascii_digit());
    if sc.peek() == Some(b'.') && sc.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
        sc.bump(1);
        sc.bump_while(|b| b.is_ascii_digit());
    }
    if sc.peek().is_some_and(is_ident_continue) {
        sc.bump_while(is_ident_continue);
        return;
    }
    sc.push(TokenKind::Number, start, sc.pos());
}

pub(super) fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "async"
            | "await"
            | "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "export"
            | "extends"
            | "false"
            | "finally"
            | "for"
            | "from"
            | "function"
            | "if"
            | "import"
            | "in"
            | "instanceof"
            | "let"
            | "new"
            | "null"
            | "of"
            | "return"
            | "static"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "true"
            | "try"
            | "typeof"
            | "undefined"
            | "var"
            | "void"
            | "while"
            | "yield"
    )
}
