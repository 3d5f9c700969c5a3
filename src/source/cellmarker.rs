use std::time::Duration;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::model::RawMarker;
use crate::source::{MarkerSource, SourceError};

pub const DEFAULT_BASE_URL: &str = "https://www.cellmarker.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const MARKER_PREFIX: &str = "CD";
const ITEM_SEPARATOR: char = '\u{2013}';

/// Scrapes the CellMarker search page.
pub struct CellMarkerSource {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl CellMarkerSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let base_url =
            Url::parse(base_url).map_err(|e| SourceError::Url(format!("{base_url}: {e}")))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("kira-flowpanel/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn search_url(&self, cell_type: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().clear().append_pair("s", cell_type);
        url
    }
}

impl MarkerSource for CellMarkerSource {
    fn name(&self) -> &str {
        "cellmarker"
    }

    fn fetch(&self, cell_type: &str) -> Result<Vec<RawMarker>, SourceError> {
        let url = self.search_url(cell_type);
        tracing::debug!(%url, "fetching marker page");
        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;
        parse_marker_page(&body)
    }
}

/// Extracts markers from the first `<h2>` mentioning "Marker" and the list
/// that follows it.
pub fn parse_marker_page(html: &str) -> Result<Vec<RawMarker>, SourceError> {
    let h2_sel = selector("h2")?;
    let li_sel = selector("li")?;
    let doc = Html::parse_document(html);

    let Some(heading) = doc
        .select(&h2_sel)
        .find(|h2| h2.text().collect::<String>().contains("Marker"))
    else {
        return Ok(Vec::new());
    };

    let Some(list) = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "ul")
    else {
        return Ok(Vec::new());
    };

    let mut markers = Vec::new();
    for li in list.select(&li_sel) {
        let text = li.text().collect::<String>();
        if let Some(raw) = parse_marker_item(&text) {
            markers.push(raw);
        }
    }
    Ok(markers)
}

fn parse_marker_item(text: &str) -> Option<RawMarker> {
    let parts: Vec<&str> = text.split(ITEM_SEPARATOR).collect();
    if parts.len() != 2 {
        return None;
    }
    let marker = parts[0].trim();
    if !marker.starts_with(MARKER_PREFIX) {
        return None;
    }
    Some(RawMarker::new(marker, parts[1].trim()))
}

fn selector(css: &'static str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|e| SourceError::Parse(format!("selector {css}: {e:?}")))
}

#[cfg(test)]
#[path = "../../tests/src_inline/source/cellmarker.rs"]
mod tests;
