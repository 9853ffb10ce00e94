use ariadne::{Color, Label, Report, ReportKind, Source};
use roster::RosterError;

/// Format a RosterError with fancy terminal output using Ariadne
pub fn format_error(error: &RosterError) -> String {
    match error {
        RosterError::Parse(details) | RosterError::Declaration(details) => {
            let mut output = Vec::new();

            let error_type = match error {
                RosterError::Parse(_) => "Parse error",
                _ => "Declaration error",
            };

            let enhanced_message = format!(
                "{}: {} ({}:{})",
                error_type, details.message, details.source_id, details.span.line
            );

            let mut report =
                Report::build(ReportKind::Error, &details.source_id, details.span.start)
                    .with_message(enhanced_message)
                    .with_label(
                        Label::new((&details.source_id, details.span.start..details.span.end))
                            .with_message("")
                            .with_color(Color::Red),
                    );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (
                    &details.source_id,
                    Source::from(details.source_text.as_ref()),
                ),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => format!("{}", error),
            }
        }
        RosterError::UndefinedMember { .. } | RosterError::UnknownEnumeration(_) => {
            format!("Lookup error: {}", error)
        }
        RosterError::InvalidMember(msg) => format!("Invalid member: {}", msg),
        RosterError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
    }
}
