//! Scanner and parser for declaration sources
//!
//! ```text
//! unit    := package? import* class*
//! package := "package" name ";"
//! import  := "import" name ";"
//! class   := "class" ident ("uses" name ("," name)*)? ";"
//! name    := ident ("." ident)*
//! ```
//!
//! `//` starts a comment that runs to the end of the line.

use std::path::{Path, PathBuf};

use crate::error::{Location, SyntaxError};

use super::unit::{ClassDecl, DeclUnit, NameRef};

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Ident(String),
    Dot,
    Comma,
    Semi,
    Eof,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    line: u32,
    column: u32,
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn scan(path: &Path, text: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    let (mut line, mut column) = (1u32, 1u32);

    while let Some(&c) = chars.peek() {
        let (start_line, start_column) = (line, column);
        match c {
            '\n' => {
                chars.next();
                line += 1;
                column = 1;
                continue;
            }
            c if c.is_whitespace() => {
                chars.next();
                column += 1;
                continue;
            }
            '/' => {
                chars.next();
                column += 1;
                if chars.peek() != Some(&'/') {
                    return Err(SyntaxError::new(
                        Location::new(path, start_line, start_column),
                        "unexpected '/'",
                    ));
                }
                while let Some(&c) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                    column += 1;
                }
                continue;
            }
            '.' | ',' | ';' => {
                chars.next();
                column += 1;
                let kind = match c {
                    '.' => TokenKind::Dot,
                    ',' => TokenKind::Comma,
                    _ => TokenKind::Semi,
                };
                tokens.push(Token {
                    kind,
                    line: start_line,
                    column: start_column,
                });
            }
            c if is_ident_start(c) => {
                let mut ident = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_ident_part(c) {
                        break;
                    }
                    ident.push(c);
                    chars.next();
                    column += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(ident),
                    line: start_line,
                    column: start_column,
                });
            }
            other => {
                return Err(SyntaxError::new(
                    Location::new(path, start_line, start_column),
                    format!("unexpected character '{}'", other),
                ));
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        line,
        column,
    });
    Ok(tokens)
}

struct Parser<'a> {
    path: &'a Path,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn error(&self, token: &Token, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(
            Location::new(self.path, token.line, token.column),
            message,
        )
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        matches!(&self.peek().kind, TokenKind::Ident(s) if s == keyword)
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, SyntaxError> {
        let token = self.bump();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.error(&token, format!("expected {}", what)))
        }
    }

    fn ident(&mut self) -> Result<(String, Token), SyntaxError> {
        let token = self.bump();
        let ident = match &token.kind {
            TokenKind::Ident(s) if !is_keyword(s) => s.clone(),
            _ => return Err(self.error(&token, "expected identifier")),
        };
        Ok((ident, token))
    }

    fn name(&mut self) -> Result<NameRef, SyntaxError> {
        let (mut name, first) = self.ident()?;
        while self.peek().kind == TokenKind::Dot {
            self.bump();
            let (part, _) = self.ident()?;
            name.push('.');
            name.push_str(&part);
        }
        Ok(NameRef {
            name,
            location: Location::new(self.path, first.line, first.column),
        })
    }

    fn unit(mut self) -> Result<DeclUnit, SyntaxError> {
        let mut package = None;
        if self.at_keyword("package") {
            self.bump();
            package = Some(self.name()?.name);
            self.expect(TokenKind::Semi, "';' after package declaration")?;
        }

        let mut imports = Vec::new();
        while self.at_keyword("import") {
            self.bump();
            imports.push(self.name()?);
            self.expect(TokenKind::Semi, "';' after import")?;
        }

        let mut classes = Vec::new();
        loop {
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::Eof => break,
                TokenKind::Ident(k) if k == "class" => {
                    self.bump();
                    classes.push(self.class(package.as_deref(), &token)?);
                }
                TokenKind::Ident(k) if k == "package" || k == "import" => {
                    return Err(self.error(&token, format!("'{}' must precede class declarations", k)));
                }
                _ => return Err(self.error(&token, "expected 'class'")),
            }
        }

        Ok(DeclUnit::new(
            PathBuf::from(self.path),
            package,
            imports,
            classes,
        ))
    }

    fn class(&mut self, package: Option<&str>, keyword: &Token) -> Result<ClassDecl, SyntaxError> {
        let (simple, _) = self.ident()?;
        let mut uses = Vec::new();
        if self.at_keyword("uses") {
            self.bump();
            uses.push(self.name()?);
            while self.peek().kind == TokenKind::Comma {
                self.bump();
                uses.push(self.name()?);
            }
        }
        self.expect(TokenKind::Semi, "';' after class declaration")?;

        let name = match package {
            Some(pkg) => format!("{}.{}", pkg, simple),
            None => simple,
        };
        Ok(ClassDecl {
            name,
            uses,
            location: Location::new(self.path, keyword.line, keyword.column),
        })
    }
}

fn is_keyword(s: &str) -> bool {
    matches!(s, "package" | "import" | "class" | "uses")
}

/// Parse one source file.
pub fn parse(path: &Path, text: &str) -> Result<DeclUnit, SyntaxError> {
    let tokens = scan(path, text)?;
    Parser {
        path,
        tokens,
        pos: 0,
    }
    .unit()
}
