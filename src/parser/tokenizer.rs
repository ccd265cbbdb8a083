use nom::{
    branch::alt,
    bytes::complete::{take_till, take_till1, take_while},
    character::complete::char as nom_char,
    combinator::recognize,
    multi::{many0, separated_list1},
    sequence::{pair, preceded, tuple},
};

use super::result::{IResult, Span};
use crate::error::{Error, Result};

/// Minimum number of `;` separated fields in a metric. A metric without
/// semicolons is a single field.
pub const MIN_FIELDS: usize = 1;

/// Maximum number of `;` separated fields in a metric: the label/value pair
/// followed by warn, crit, min and max.
pub const MAX_FIELDS: usize = 5;

/// Splits a batch into metric tokens on runs of whitespace.
///
/// A token starting with a single-quoted label keeps the whitespace inside
/// the quotes, e.g. `'response time'=120ms`. The quoted run must hold no `=`
/// and its closing quote must be followed by `=`; otherwise the token ends at
/// the first whitespace like any other.
pub fn metric_tokens(input: Span) -> Result<Vec<Span>> {
    let (rest, tokens) = many0(preceded(take_while(is_space), metric_token))(input)?;

    if !rest.fragment().trim().is_empty() {
        return Err(Error::invalid_format(format!(
            "unexpected input {:?} at offset {}",
            rest.fragment(),
            rest.location_offset()
        )));
    }

    Ok(tokens)
}

fn metric_token(input: Span) -> IResult<Span> {
    alt((
        recognize(tuple((
            nom_char('\''),
            take_till(|c: char| c == '\'' || c == '='),
            nom_char('\''),
            nom_char('='),
            take_till(is_space),
        ))),
        take_till1(is_space),
    ))(input)
}

/// Splits one metric on `;` and checks the field count bounds.
pub fn metric_fields(input: Span) -> Result<Vec<Span>> {
    let split: IResult<Vec<Span>> =
        separated_list1(nom_char(';'), take_till(|c: char| c == ';'))(input);
    let (_, fields) = split?;

    match fields.len() {
        n if n < MIN_FIELDS => Err(Error::invalid_format(format!(
            "input appears to be empty; after processing {} fields found; expected minimum of {}",
            n, MIN_FIELDS
        ))),
        n if n > MAX_FIELDS => Err(Error::invalid_format(format!(
            "input contains {} semicolon separated fields; expected no more than {}",
            n, MAX_FIELDS
        ))),
        _ => Ok(fields),
    }
}

/// Splits the first field of a metric on the first `=` into the raw label
/// and the raw value (value and unit of measurement).
pub fn label_and_raw_value(input: Span) -> Result<(Span, Span)> {
    let split: IResult<(Span, char)> = pair(take_till(|c: char| c == '='), nom_char('='))(input);
    let (raw_value, (raw_label, _)) = split?;
    Ok((raw_label, raw_value))
}

fn is_space(c: char) -> bool {
    c.is_whitespace()
}
