use nom_locate::LocatedSpan;

use crate::error::Error;

pub type Span<'a> = LocatedSpan<&'a str>;

pub type IResult<'a, O> = nom::IResult<Span<'a>, O, ParseError<'a>>;

#[derive(Debug, PartialEq)]
pub struct ParseError<'a> {
    message: String,
    wherein: Span<'a>,
}

impl<'a> ParseError<'a> {
    pub fn new(message: String, wherein: Span<'a>) -> Self {
        Self { message, wherein }
    }

    pub fn message(&self) -> &String {
        &self.message
    }

    pub fn offset(&self) -> usize {
        self.wherein.location_offset()
    }
}

impl<'a> nom::error::ParseError<Span<'a>> for ParseError<'a> {
    fn from_error_kind(input: Span<'a>, kind: nom::error::ErrorKind) -> Self {
        Self::new(format!("parse error {:?}", kind), input)
    }

    fn append(_input: Span<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: Span<'a>, c: char) -> Self {
        Self::new(format!("expected '{}'", c), input)
    }
}

impl<'a> From<ParseError<'a>> for Error {
    fn from(err: ParseError<'a>) -> Self {
        Error::invalid_format(format!("{} at offset {}", err.message(), err.offset()))
    }
}

impl<'a> From<nom::Err<ParseError<'a>>> for Error {
    fn from(err: nom::Err<ParseError<'a>>) -> Self {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.into(),
            nom::Err::Incomplete(_) => Error::invalid_format("unexpected end of input"),
        }
    }
}
