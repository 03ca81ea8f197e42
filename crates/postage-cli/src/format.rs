//! Output formatting for rated pieces

use anyhow::Result;
use postage_common::{Postage, PostageQuote};

use crate::config::{CliConfig, OutputFormat};

/// Render postage as printed to the user
///
/// With `strip_leading_zero`, amounts under a dollar lose their leading
/// zero: `0.29` prints as `.29`.
pub fn format_postage(postage: &Postage, strip_leading_zero: bool) -> String {
    let text = postage.to_string();
    if strip_leading_zero && !postage.is_unmailable() {
        text.trim_start_matches('0').to_string()
    } else {
        text
    }
}

/// Render a quote in the configured output format
pub fn format_quote(quote: &PostageQuote, config: &CliConfig) -> Result<String> {
    match config.output {
        OutputFormat::Text => Ok(format_postage(&quote.postage, config.strip_leading_zero)),
        OutputFormat::Json => Ok(serde_json::to_string(quote)?),
    }
}
