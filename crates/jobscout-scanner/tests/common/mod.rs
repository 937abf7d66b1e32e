//! Shared fixtures for scanner integration tests.

#![allow(dead_code)]

/// Markup for one search-result card with listing number `n`.
pub fn card(n: u32) -> String {
    format!(
        r#"<li>
          <div class="base-card base-search-card job-search-card">
            <a class="base-card__full-link" href="https://www.linkedin.com/jobs/view/{n}"></a>
            <h3 class="base-search-card__title">Rust Developer {n}</h3>
            <h4 class="base-search-card__subtitle">
              <a href="https://www.linkedin.com/company/company-{company}">Company {company}</a>
            </h4>
            <span class="job-search-card__location">Warsaw, Poland</span>
            <time class="job-search-card__listdate" datetime="2025-06-02">1 day ago</time>
          </div>
        </li>"#,
        company = n % 3
    )
}

/// Markup for the cards in `range`.
pub fn cards(range: std::ops::Range<u32>) -> String {
    range.map(card).collect()
}
