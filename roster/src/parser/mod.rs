use crate::accessor::MemberCall;
use crate::ast::Span;
use crate::enumeration::EnumerationType;
use crate::error::RosterError;
use crate::resource_limits::ResourceLimits;
use crate::value::Value;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod declarations;
pub mod literals;

#[derive(Parser)]
#[grammar = "src/parser/roster.pest"]
pub struct RosterParser;

/// Parse every enumeration declared in `content`.
///
/// Member names must be unique within an enumeration; names across
/// enumerations are checked by the [`Catalog`](crate::Catalog).
pub fn parse(
    content: &str,
    source_id: Option<String>,
    limits: &ResourceLimits,
) -> Result<Vec<EnumerationType>, RosterError> {
    if content.len() > limits.max_source_bytes {
        return Err(RosterError::ResourceLimitExceeded {
            limit_name: "max_source_bytes".to_string(),
            limit_value: format!("{} bytes", limits.max_source_bytes),
            actual_value: format!("{} bytes", content.len()),
            suggestion: "Split the declarations into multiple files".to_string(),
        });
    }

    let source_id = source_id.unwrap_or_else(|| "<input>".to_string());
    let source_text: Arc<str> = Arc::from(content);

    let pairs = RosterParser::parse(Rule::roster_file, content)
        .map_err(|e| pest_error(&e, &source_id, Arc::clone(&source_text)))?;

    let mut enumerations = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::roster_file {
            for inner_pair in pair.into_inner() {
                if inner_pair.as_rule() == Rule::enumeration {
                    enumerations.push(declarations::parse_enumeration(
                        inner_pair,
                        &source_id,
                        &source_text,
                        limits,
                    )?);
                }
            }
        }
    }
    Ok(enumerations)
}

/// Parse a single value literal: `0`, `-3`, `1.5`, `"text"`, `true`
pub fn parse_value(input: &str) -> Result<Value, RosterError> {
    let source_text: Arc<str> = Arc::from(input);
    let pairs = RosterParser::parse(Rule::value_input, input)
        .map_err(|e| pest_error(&e, "<value>", Arc::clone(&source_text)))?;

    let literal = first_inner(pairs, Rule::value_input)
        .and_then(|mut inner| inner.find(|p| p.as_rule() != Rule::EOI))
        .ok_or_else(|| {
            RosterError::parse(
                "Expected a value literal",
                Span::default(),
                "<value>",
                Arc::clone(&source_text),
            )
        })?;

    literals::parse_literal(literal, "<value>", &source_text)
}

pub(crate) fn parse_member_call(input: &str) -> Result<MemberCall, RosterError> {
    let source_text: Arc<str> = Arc::from(input);
    let pairs = RosterParser::parse(Rule::member_call, input)
        .map_err(|e| pest_error(&e, "<call>", Arc::clone(&source_text)))?;

    let mut enumeration = None;
    let mut member = None;
    if let Some(inner) = first_inner(pairs, Rule::member_call) {
        for pair in inner {
            match pair.as_rule() {
                Rule::enumeration_name => enumeration = Some(pair.as_str().to_string()),
                Rule::member_name => member = Some(pair.as_str().to_string()),
                _ => {}
            }
        }
    }

    match (enumeration, member) {
        (Some(enumeration), Some(member)) => Ok(MemberCall::new(enumeration, member)),
        _ => Err(RosterError::parse(
            "Expected a member call such as Animal.Horse()",
            Span::default(),
            "<call>",
            source_text,
        )),
    }
}

fn first_inner(
    pairs: pest::iterators::Pairs<'_, Rule>,
    rule: Rule,
) -> Option<pest::iterators::Pairs<'_, Rule>> {
    pairs
        .into_iter()
        .find(|pair: &Pair<Rule>| pair.as_rule() == rule)
        .map(Pair::into_inner)
}

fn pest_error(e: &pest::error::Error<Rule>, source_id: &str, source_text: Arc<str>) -> RosterError {
    let (line, col) = match e.line_col {
        pest::error::LineColLocation::Pos(pos) => pos,
        pest::error::LineColLocation::Span(start, _) => start,
    };
    let (start, end) = match e.location {
        pest::error::InputLocation::Pos(pos) => (pos, pos),
        pest::error::InputLocation::Span(span) => span,
    };

    RosterError::parse(
        e.variant.message().to_string(),
        Span {
            start,
            end,
            line,
            col,
        },
        source_id,
        source_text,
    )
}
