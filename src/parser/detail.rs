use scraper::Html;
use tracing::info;

use super::schema::{element_text, Field, ListField};
use super::text::strip_variable_name;
use crate::error::{Result, ScrapeError};
use crate::fetch::Fetch;
use crate::model::{FunctionDescriptor, FunctionDetail, FunctionRecord, SyntaxVariable};

const CONTENT: ListField = ListField::new(".article-content-container > .cc");
const SAMPLE_USAGE: ListField = ListField::new(".article-content-container > .cc > p > code");
const SYNTAX_VARIABLES: ListField =
    ListField::new(".article-content-container > .cc > ul:nth-of-type(1) > li");
const VARIABLE_NAME: Field = Field::text("code", 0);
const NOTES: ListField = ListField::new(".article-content-container > .cc > ul:nth-of-type(2) li");
const RELATED: ListField = ListField::new(".article-content-container > .cc > p > a > code");
const OTHER_RELATED: ListField =
    ListField::new(".article-content-container > .cc > ul:last-of-type > li > a > code");

/// Fetch a function's help page and merge it with its index row.
pub async fn fetch_record<F: Fetch>(
    fetcher: &F,
    descriptor: FunctionDescriptor,
) -> Result<FunctionRecord> {
    info!("fetching {}", descriptor.link);
    let html = fetcher.fetch(&descriptor.link).await?;
    let detail = parse_detail(&descriptor.link, &html)?;
    Ok(FunctionRecord::merge(descriptor, detail))
}

pub fn parse_detail(url: &str, html: &str) -> Result<FunctionDetail> {
    let doc = Html::parse_document(html);
    if CONTENT.elements(&doc)?.is_empty() {
        return Err(ScrapeError::structure(url, "no article content container"));
    }

    // The last `p > code` on the page is the syntax line, not a sample.
    let mut sample_usage = SAMPLE_USAGE.extract(&doc)?;
    sample_usage.pop();

    let mut syntax_variables = Vec::new();
    for item in SYNTAX_VARIABLES.elements(&doc)? {
        let name = VARIABLE_NAME.extract(item)?.unwrap_or_default();
        let description = strip_variable_name(&element_text(item), &name);
        syntax_variables.push(SyntaxVariable { name, description });
    }

    Ok(FunctionDetail {
        sample_usage,
        syntax_variables,
        notes: NOTES.extract(&doc)?,
        related: RELATED.extract(&doc)?,
        other_related: OTHER_RELATED.extract(&doc)?,
    })
}
