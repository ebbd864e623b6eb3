use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::combinator::{all_consuming, map, rest, verify};
use nom::multi::many0;
use nom::sequence::delimited;
use crate::prompt::{PromptTemplate, PromptTemplatePart};

pub fn parse_template(input: &str) -> IResult<&str, PromptTemplate> {
    all_consuming(map(many0(parse_element), |parts| PromptTemplate { parts })).parse(input)
}

pub fn parse_element(input: &str) -> IResult<&str, PromptTemplatePart> {
    alt((
        map(parse_variable, |name| PromptTemplatePart::Variable(name.to_string())),
        map(parse_literal_text, |text| PromptTemplatePart::Literal(text.to_string())),
    )).parse(input)
}

pub fn parse_literal_text(input: &str) -> IResult<&str, &str> {
    verify(
        alt((
            take_until("{{"),
            rest,
        )),
        |s: &&str| !s.is_empty(),
    ).parse(input)
}

/// Parses `{{ name }}`, yielding the trimmed name.
///
/// Names are free text (the built-in prompts use CJK names) but must not be blank or span lines.
pub fn parse_variable(input: &str) -> IResult<&str, &str> {
    map(
        verify(
            delimited(tag("{{"), take_until("}}"), tag("}}")),
            |s: &&str| !s.trim().is_empty() && !s.contains('\n'),
        ),
        str::trim,
    ).parse(input)
}
