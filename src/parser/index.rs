use std::collections::HashSet;

use scraper::Html;
use tracing::{info, warn};

use super::schema::{Field, ListField};
use super::text::{absolutize, strip_learn_more};
use crate::error::{Result, ScrapeError};
use crate::fetch::Fetch;
use crate::model::FunctionDescriptor;

const ROWS: ListField = ListField::new("table tbody tr");
const KIND: Field = Field::text("td", 0);
const NAME: Field = Field::text("td", 1);
const SYNTAX: Field = Field::text("td", 2);
const DESCRIPTION: Field = Field::text("td", 3).convert(strip_learn_more);
const LINK: Field = Field::text("td a", 0).attr("href").convert(absolutize);

/// Fetch the function list page and return one descriptor per table row.
pub async fn fetch_index<F: Fetch>(fetcher: &F, url: &str) -> Result<Vec<FunctionDescriptor>> {
    info!("Fetching function index: {}", url);
    let html = fetcher.fetch(url).await?;
    let list = parse_index(url, &html)?;
    info!("Index lists {} functions", list.len());
    Ok(list)
}

pub fn parse_index(url: &str, html: &str) -> Result<Vec<FunctionDescriptor>> {
    let doc = Html::parse_document(html);
    let rows = ROWS.elements(&doc)?;
    if rows.is_empty() {
        return Err(ScrapeError::structure(url, "no rows in function table"));
    }

    let mut seen = HashSet::new();
    let mut list = Vec::with_capacity(rows.len());

    for (i, row) in rows.into_iter().enumerate() {
        let cell = |field: &Field, what: &str| -> Result<String> {
            field
                .extract(row)?
                .ok_or_else(|| ScrapeError::structure(url, format!("row {}: missing {}", i, what)))
        };

        let descriptor = FunctionDescriptor {
            kind: cell(&KIND, "type")?,
            name: cell(&NAME, "name")?,
            syntax: cell(&SYNTAX, "syntax")?,
            description: cell(&DESCRIPTION, "description")?,
            link: cell(&LINK, "link")?,
        };

        if !seen.insert(descriptor.name.clone()) {
            warn!("Duplicate function name in index: {}", descriptor.name);
        }
        list.push(descriptor);
    }

    Ok(list)
}
