use crate::ast::{Filter, FilterKey, Term};

use log::debug;
use nom::{
    bytes::complete::{take_until, take_while, take_while1},
    character::complete::char,
    combinator::{map_opt, opt, rest, verify},
    multi::many0,
    sequence::preceded,
    IResult,
};
use std::cell::Cell;

pub const QUOTE: char = '"';
pub const EXCLUDE_TAG: char = '-';
pub const FIELD_SEPARATOR: char = ':';

pub fn is_whitespace(nxt: char) -> bool {
    return nxt == ' ' || is_tab(nxt);
}

pub fn is_tab(nxt: char) -> bool {
    return nxt == '\t';
}

pub fn is_quote(nxt: char) -> bool {
    return nxt == QUOTE;
}

// Skips any run of spaces and tabs, possibly empty
pub fn parse_whitespace(nxt: &str) -> IResult<&str, &str> {
    take_while(is_whitespace)(nxt)
}

/// Reads one raw token, up to the first space or tab that is not inside
/// double quotes. Quotes are kept in the output; an unterminated quote
/// simply runs to the end of the input.
pub fn parse_raw_token(nxt: &str) -> IResult<&str, &str> {
    let inside_quote = Cell::new(false);

    take_while1(move |c: char| {
        if is_quote(c) {
            inside_quote.set(!inside_quote.get());
            true
        } else {
            inside_quote.get() || !is_whitespace(c)
        }
    })(nxt)
}

/// Removes a single enclosing pair of quotes, if the token both starts and
/// ends with one. A lone `"` is left alone.
pub fn strip_quotes(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with(QUOTE) && raw.ends_with(QUOTE) {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

pub fn parse_token(nxt: &str) -> IResult<&str, String> {
    preceded(parse_whitespace, parse_raw_token)(nxt)
        .map(|(nxt, raw)| (nxt, strip_quotes(raw).to_string()))
}

pub fn tokenize(query: &str) -> Vec<String> {
    // many0 stops at the first failing token, which can only be trailing whitespace
    many0(parse_token)(query)
        .map(|(_nxt, tokens)| tokens)
        .unwrap_or_default()
}

pub fn parse_filter_key(nxt: &str) -> IResult<&str, FilterKey> {
    map_opt(take_until(":"), FilterKey::from_field)(nxt)
}

// `[-]<title|category>:<value>`
pub fn parse_filter_term(nxt: &str) -> IResult<&str, Filter> {
    let (nxt, exclude) = opt(char(EXCLUDE_TAG))(nxt)?;
    let (nxt, key) = parse_filter_key(nxt)?;
    let (nxt, _) = char(FIELD_SEPARATOR)(nxt)?;
    let (nxt, value) = verify(rest, |v: &str| !v.is_empty())(nxt)?;

    // every quote goes, not only an enclosing pair
    let value = value.replace(QUOTE, "");

    Ok((nxt, Filter::new(exclude.is_some(), key, &value)))
}

pub fn parse_filter(token: &str) -> Option<Filter> {
    parse_filter_term(token).ok().map(|(_nxt, filter)| filter)
}

pub fn parse_term(token: &str) -> Term {
    match parse_filter(token) {
        Some(filter) => Term::Filter(filter),
        None => {
            debug!("Token {:?} is not a field filter, matching it against titles", token);
            Term::Plain(token.to_string())
        }
    }
}

pub fn parse_terms(query: &str) -> Vec<Term> {
    tokenize(query).iter().map(|t| parse_term(t)).collect()
}

pub fn parse_query(query: &str) -> Vec<Filter> {
    let filters: Vec<Filter> = parse_terms(query)
        .into_iter()
        .map(Term::into_filter)
        .collect();

    debug!("Parsed query {:?} into {} filter(s)", query, filters.len());
    filters
}
