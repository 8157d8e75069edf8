//! Lexer for tokenizing Markdown source.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, not_line_ending, space0, space1},
    combinator::{map, opt, peek, recognize, value},
    multi::many0,
    sequence::{delimited, pair, tuple},
    IResult,
};

/// A token from the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    // Block-level tokens
    Heading(u8, &'a str),     // Level, content
    FencedCodeStart(&'a str), // Language
    ThematicBreak,
    ListItemMarker(ListMarker),

    // Inline tokens
    Emphasis(&'a str), // * or _
    Strong(&'a str),   // ** or __
    InlineCode(&'a str),
    FootnoteMarker(&'a str), // digit id between brackets
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListMarker {
    Unordered,
    Ordered(u32),
    Checkbox(bool),
}

/// Parse a heading (ATX style: # Heading).
pub fn heading(input: &str) -> IResult<&str, Token> {
    let (input, hashes) = take_while1(|c| c == '#')(input)?;
    let level = hashes.len().min(6) as u8;
    let (input, _) = space1(input)?;
    let (input, content) = not_line_ending(input)?;
    // Trim trailing # and spaces
    let content = content.trim_end_matches(|c| c == '#' || c == ' ');
    Ok((input, Token::Heading(level, content)))
}

/// Parse a thematic break (---, ***, ___).
pub fn thematic_break(input: &str) -> IResult<&str, Token> {
    let (input, _) = alt((
        recognize(tuple((tag("-"), tag("-"), tag("-"), many0(char('-'))))),
        recognize(tuple((tag("*"), tag("*"), tag("*"), many0(char('*'))))),
        recognize(tuple((tag("_"), tag("_"), tag("_"), many0(char('_'))))),
    ))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Token::ThematicBreak))
}

/// Parse a fenced code block start.
pub fn fenced_code_start(input: &str) -> IResult<&str, Token> {
    let (input, _) = alt((tag("```"), tag("~~~")))(input)?;
    let (input, lang) =
        opt(take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_'))(input)?;
    let (input, _) = not_line_ending(input)?;
    Ok((input, Token::FencedCodeStart(lang.unwrap_or(""))))
}

/// Parse a list item marker.
pub fn list_item_marker(input: &str) -> IResult<&str, Token> {
    alt((
        // Checkbox
        map(
            tuple((
                alt((char('-'), char('*'), char('+'))),
                space1,
                char('['),
                alt((
                    value(true, char('x')),
                    value(true, char('X')),
                    value(false, char(' ')),
                )),
                char(']'),
                space0,
            )),
            |(_, _, _, checked, _, _)| Token::ListItemMarker(ListMarker::Checkbox(checked)),
        ),
        // Unordered
        map(tuple((alt((char('-'), char('*'), char('+'))), space1)), |_| {
            Token::ListItemMarker(ListMarker::Unordered)
        }),
        // Ordered
        map(
            tuple((
                take_while1(|c: char| c.is_ascii_digit()),
                alt((char('.'), char(')'))),
                space1,
            )),
            |(num, _, _): (&str, _, _)| {
                Token::ListItemMarker(ListMarker::Ordered(num.parse().unwrap_or(1)))
            },
        ),
    ))(input)
}

/// Parse a caret footnote marker (^[3]).
pub fn caret_marker(input: &str) -> IResult<&str, Token> {
    let (input, _) = tag("^[")(input)?;
    let (input, id) = take_while1(|c: char| c.is_ascii_digit())(input)?;
    let (input, _) = char(']')(input)?;
    Ok((input, Token::FootnoteMarker(id)))
}

/// Parse a bracket footnote marker ([3]).
///
/// Whether a bracket run is a marker at all depends on the active dialect;
/// that decision belongs to the caller.
pub fn bracket_marker(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('[')(input)?;
    let (input, id) = take_while1(|c: char| c.is_ascii_digit())(input)?;
    let (input, _) = char(']')(input)?;
    Ok((input, Token::FootnoteMarker(id)))
}

/// Parse inline code (`code`).
pub fn inline_code(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('`')(input)?;
    let (input, _) = peek(nom::combinator::not(char('`')))(input)?; // Not fenced code
    let (input, content) = take_until("`")(input)?;
    let (input, _) = char('`')(input)?;
    Ok((input, Token::InlineCode(content)))
}

/// Parse emphasis (*text* or _text_).
pub fn emphasis(input: &str) -> IResult<&str, Token> {
    alt((
        delimited(
            pair(char('*'), peek(nom::combinator::not(char('*')))),
            map(take_until("*"), Token::Emphasis),
            char('*'),
        ),
        delimited(
            pair(char('_'), peek(nom::combinator::not(char('_')))),
            map(take_until("_"), Token::Emphasis),
            char('_'),
        ),
    ))(input)
}

/// Parse strong (**text** or __text__).
pub fn strong(input: &str) -> IResult<&str, Token> {
    alt((
        delimited(tag("**"), map(take_until("**"), Token::Strong), tag("**")),
        delimited(tag("__"), map(take_until("__"), Token::Strong), tag("__")),
    ))(input)
}
