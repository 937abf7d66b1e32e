use crate::error::Result;
use jobscout_core::SearchQuery;
use url::Url;

/// Build the search endpoint URL for one page of `query`.
///
/// `f_TPR` is always sent; it is empty when no time filter is set.
pub fn build_search_url(base_url: &str, query: &SearchQuery, offset: u32) -> Result<Url> {
    let time_filter = query.time_range.map_or("", |range| range.as_param());
    let start = offset.to_string();

    let url = Url::parse_with_params(
        base_url,
        [
            ("keywords", query.keywords.as_str()),
            ("location", query.location.as_str()),
            ("start", start.as_str()),
            ("f_TPR", time_filter),
        ],
    )?;

    Ok(url)
}
