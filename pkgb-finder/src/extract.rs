//! Textual scan for namespace and type declarations.
//!
//! This is not a parser. Comments, attributes and string literals are masked
//! out first, then a declaration is recognized only where a statement can
//! begin: at the start of a line, after the open tag, or after `;`, `{` or
//! `}`. That keeps `Foo::class` references and anonymous classes out of the
//! results.

use std::{iter::Peekable, str::Chars, sync::LazyLock};

use regex::Regex;

static NAMESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(?:^|<\?php|[;{}])\s*namespace\s+\\?([A-Za-z_][A-Za-z0-9_]*(?:\\[A-Za-z_][A-Za-z0-9_]*)*)\s*[;{]",
    )
    .expect("namespace pattern is valid")
});

static TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(?:^|<\?php|[;{}])\s*(?:(?:abstract|final|readonly)\s+)*(?:class|interface|trait|enum)\s+([A-Za-z_][A-Za-z0-9_]*)",
    )
    .expect("type pattern is valid")
});

/// The first namespace and type declared by a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared namespace, `None` for the global namespace
    pub namespace: Option<String>,
    /// Declared class, interface, trait or enum name
    pub name: String,
}

/// First namespace declaration in `source`, without a leading `\`.
pub fn namespace(source: &str) -> Option<String> {
    first_capture(&NAMESPACE, &mask(source))
}

/// First class, interface, trait or enum name declared in `source`.
pub fn type_name(source: &str) -> Option<String> {
    first_capture(&TYPE, &mask(source))
}

/// Extract the declaration of a source file.
///
/// Returns `None` when the file declares no type, such as a bootstrap script.
pub fn declaration(source: &str) -> Option<Declaration> {
    let code = mask(source);
    let name = first_capture(&TYPE, &code)?;
    Some(Declaration {
        namespace: first_capture(&NAMESPACE, &code),
        name,
    })
}

fn first_capture(pattern: &Regex, code: &str) -> Option<String> {
    pattern.captures(code).map(|caps| caps[1].to_string())
}

/// `source` without comments, `#[...]` attributes and string literals.
///
/// Newlines inside removed text are kept so line starts stay line starts.
fn mask(source: &str) -> String {
    let mut code = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        match (c, next) {
            ('/', Some('/')) => skip_line(&mut chars, &mut code),
            ('#', Some('[')) => {
                chars.next();
                skip_attribute(&mut chars, &mut code);
            }
            ('#', _) => skip_line(&mut chars, &mut code),
            ('/', Some('*')) => {
                chars.next();
                skip_block_comment(&mut chars, &mut code);
            }
            ('\'' | '"', _) => skip_string(c, &mut chars, &mut code),
            _ => code.push(c),
        }
    }

    code
}

fn skip_line(chars: &mut Peekable<Chars<'_>>, code: &mut String) {
    for c in chars.by_ref() {
        if c == '\n' {
            code.push('\n');
            return;
        }
    }
}

fn skip_block_comment(chars: &mut Peekable<Chars<'_>>, code: &mut String) {
    code.push(' ');
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'/') => {
                chars.next();
                return;
            }
            '\n' => code.push('\n'),
            _ => {}
        }
    }
}

/// Skips up to the `]` closing an attribute, counting nested brackets.
fn skip_attribute(chars: &mut Peekable<Chars<'_>>, code: &mut String) {
    let mut depth = 1;
    while let Some(c) = chars.next() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    code.push(' ');
                    return;
                }
            }
            '\'' | '"' => skip_string(c, chars, code),
            '\n' => code.push('\n'),
            _ => {}
        }
    }
}

/// Skips the rest of a literal opened by `quote`.
fn skip_string(quote: char, chars: &mut Peekable<Chars<'_>>, code: &mut String) {
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next() == Some('\n') {
                    code.push('\n');
                }
            }
            '\n' => code.push('\n'),
            c if c == quote => break,
            _ => {}
        }
    }
}
