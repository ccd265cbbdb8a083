use super::metric::parse_metric;
use super::result::Span;
use super::tokenizer::metric_tokens;
use crate::error::{Error, Result};
use crate::model::Metric;

/// Parses a raw performance data string into metrics. The expected format of
/// every whitespace separated metric is:
///
/// ```text
/// 'label'=value[UoM];[warn];[crit];[min];[max]
/// ```
///
/// Quotes around the label are only needed when it contains spaces. The
/// whole string may be wrapped in double quotes. The first malformed metric
/// fails the whole call.
pub fn parse_perfdata(raw: &str) -> Result<Vec<Metric>> {
    if raw.trim().is_empty() {
        return Err(Error::invalid_format(
            "missing input performance data string",
        ));
    }

    let unquoted = raw.trim_matches('"');
    let quote_offset = raw.len() - raw.trim_start_matches('"').len();

    let tokens = metric_tokens(Span::new(unquoted))?;

    let mut metrics = Vec::with_capacity(tokens.len());
    for token in tokens {
        let metric = parse_metric(token).map_err(|e| {
            e.context(format!(
                "failed to parse metric {:?} at offset {}",
                token.fragment(),
                quote_offset + token.location_offset()
            ))
        })?;
        metrics.push(metric);
    }

    Ok(metrics)
}
