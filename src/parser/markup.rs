//! Tokenizer for the image markup review bots embed in comment bodies.
//!
//! Bodies are split into three token kinds: plain text, markdown images
//! (`![alt](url)`) and HTML `<img>` tags. Cleaning works on tokens rather
//! than substring probes so that the two stripping rules compose and
//! re-applying them is a no-op.

use regex::Regex;
use std::sync::LazyLock;

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[(?P<alt>[^\]\n]*)\]\([^)\n]*\)|(?P<html>(?i:<img\b[^>]*>))")
        .expect("image pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Image { alt: &'a str },
    HtmlImage,
}

impl Token<'_> {
    pub fn is_image(&self) -> bool {
        !matches!(self, Token::Text(_))
    }
}

pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for caps in IMAGE_RE.captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > cursor {
            tokens.push(Token::Text(&input[cursor..whole.start()]));
        }

        let token = match caps.name("html") {
            Some(_) => Token::HtmlImage,
            None => Token::Image {
                alt: caps.name("alt").map_or("", |m| m.as_str()),
            },
        };
        tokens.push(token);
        cursor = whole.end();
    }

    if cursor < input.len() {
        tokens.push(Token::Text(&input[cursor..]));
    }
    tokens
}

/// True when the line holds at least one image and nothing but whitespace besides.
pub fn is_image_only(line: &str) -> bool {
    let tokens = tokenize(line);
    tokens.iter().any(Token::is_image)
        && tokens.iter().all(|t| match t {
            Token::Text(text) => text.trim().is_empty(),
            _ => true,
        })
}

/// Byte offset just past the last image token, if any.
fn last_image_end(input: &str) -> Option<usize> {
    IMAGE_RE.find_iter(input).last().map(|m| m.end())
}

/// Strip image-only lines, then drop everything up to the last inline image.
pub fn clean_body(body: &str) -> String {
    let kept = body
        .lines()
        .filter(|line| !is_image_only(line))
        .collect::<Vec<_>>()
        .join("\n");

    let residual = match last_image_end(&kept) {
        Some(end) => &kept[end..],
        None => kept.as_str(),
    };
    residual.trim().to_string()
}
