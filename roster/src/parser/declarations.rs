use crate::ast::Span;
use crate::enumeration::EnumerationType;
use crate::error::RosterError;
use crate::member::Member;
use crate::parser::literals::parse_literal;
use crate::parser::Rule;
use crate::resource_limits::ResourceLimits;
use pest::iterators::Pair;
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) fn parse_enumeration(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
    limits: &ResourceLimits,
) -> Result<EnumerationType, RosterError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut name = None;
    let mut members = Vec::new();
    let mut declared_at: HashMap<String, Span> = HashMap::new();

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::enumeration_name => {
                let text = inner_pair.as_str();
                check_name_length(text, limits)?;
                name = Some(text.to_string());
            }
            Rule::member => {
                let (member, member_span) = parse_member(inner_pair, source_id, source_text, limits)?;

                if let Some(first) = declared_at.get(member.name()) {
                    return Err(RosterError::declaration_with_suggestion(
                        format!(
                            "Member '{}' is declared more than once in enumeration '{}'",
                            member.name(),
                            name.as_deref().unwrap_or("<unnamed>")
                        ),
                        member_span,
                        source_id,
                        Arc::clone(source_text),
                        format!(
                            "'{}' was first declared at line {}; rename or remove one of them",
                            member.name(),
                            first.line
                        ),
                    ));
                }

                if members.len() >= limits.max_members {
                    return Err(RosterError::ResourceLimitExceeded {
                        limit_name: "max_members".to_string(),
                        limit_value: limits.max_members.to_string(),
                        actual_value: format!("more than {}", limits.max_members),
                        suggestion: "Split the enumeration into smaller ones".to_string(),
                    });
                }

                declared_at.insert(member.name().to_string(), member_span);
                members.push(member);
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| {
        RosterError::parse(
            "Grammar error: enumeration missing its name",
            span.clone(),
            source_id,
            Arc::clone(source_text),
        )
    })?;

    Ok(EnumerationType::declare(name, members)?.with_origin(source_id, span))
}

fn parse_member(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
    limits: &ResourceLimits,
) -> Result<(Member, Span), RosterError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut name = None;
    let mut value = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::member_name => {
                let text = inner_pair.as_str();
                check_name_length(text, limits)?;
                name = Some(text.to_string());
            }
            _ => value = Some(parse_literal(inner_pair, source_id, source_text)?),
        }
    }

    match (name, value) {
        (Some(name), Some(value)) => Ok((Member::new(name, value), span)),
        _ => Err(RosterError::parse(
            "Grammar error: member needs a name and a value",
            span,
            source_id,
            Arc::clone(source_text),
        )),
    }
}

fn check_name_length(name: &str, limits: &ResourceLimits) -> Result<(), RosterError> {
    if name.len() > limits.max_name_length {
        return Err(RosterError::ResourceLimitExceeded {
            limit_name: "max_name_length".to_string(),
            limit_value: limits.max_name_length.to_string(),
            actual_value: name.len().to_string(),
            suggestion: format!("Shorten the name '{}...'", &name[..16.min(name.len())]),
        });
    }
    Ok(())
}
