use crate::ast::Span;
use crate::error::RosterError;
use crate::parser::Rule;
use crate::value::Value;
use pest::iterators::Pair;
use std::sync::Arc;

pub(crate) fn parse_literal(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
) -> Result<Value, RosterError> {
    let span = Span::from_pest_span(pair.as_span());
    let invalid = |message: String| {
        RosterError::parse(message, span.clone(), source_id, Arc::clone(source_text))
    };

    match pair.as_rule() {
        Rule::integer_literal => pair
            .as_str()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| invalid(format!("Integer '{}' does not fit in 64 bits", pair.as_str()))),
        Rule::float_literal => pair
            .as_str()
            .parse::<f64>()
            .map_err(|e| invalid(format!("Invalid float '{}': {}", pair.as_str(), e)))
            .and_then(|f| {
                if f.is_finite() {
                    Ok(Value::Float(f))
                } else {
                    Err(invalid(format!("Float '{}' is out of range", pair.as_str())))
                }
            }),
        Rule::string_literal => {
            let content = pair
                .into_inner()
                .find(|p| p.as_rule() == Rule::string_content)
                .map(|p| p.as_str())
                .unwrap_or_default();
            Ok(Value::from(unescape(content)))
        }
        Rule::boolean_literal => match pair.as_str() {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            other => Err(invalid(format!("Invalid boolean: '{}'", other))),
        },
        other => Err(invalid(format!("Unsupported literal type: {:?}", other))),
    }
}

/// Resolve the escapes the grammar accepts inside text literals
fn unescape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
