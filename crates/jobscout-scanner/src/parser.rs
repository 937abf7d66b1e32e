use chrono::NaiveDate;
use jobscout_core::Listing;
use scraper::{ElementRef, Html, Selector};

const CARD: &str = "div.base-search-card";
const TITLE: &str = "h3.base-search-card__title";
const COMPANY_LINK: &str = "h4.base-search-card__subtitle a";
const LOCATION: &str = "span.job-search-card__location";
const LISTING_LINK: &str = "a.base-card__full-link";
const LIST_DATE: &str = "time.job-search-card__listdate, time.job-search-card__listdate--new";
const LOGO: &str = "img.artdeco-entity-image";

/// Extracts listings from search-result markup.
///
/// Missing elements become `None` fields. A card without a listing link has
/// no identity and is skipped.
pub struct ListingParser {
    card: Selector,
    title: Selector,
    company_link: Selector,
    location: Selector,
    listing_link: Selector,
    list_date: Selector,
    logo: Selector,
}

impl ListingParser {
    pub fn new() -> Self {
        Self {
            card: Selector::parse(CARD).expect("valid card selector"),
            title: Selector::parse(TITLE).expect("valid title selector"),
            company_link: Selector::parse(COMPANY_LINK).expect("valid company selector"),
            location: Selector::parse(LOCATION).expect("valid location selector"),
            listing_link: Selector::parse(LISTING_LINK).expect("valid listing link selector"),
            list_date: Selector::parse(LIST_DATE).expect("valid date selector"),
            logo: Selector::parse(LOGO).expect("valid logo selector"),
        }
    }

    pub fn parse(&self, html: &str) -> Vec<Listing> {
        let document = Html::parse_fragment(html);

        document
            .select(&self.card)
            .filter_map(|card| {
                let listing = self.parse_card(&card);
                if listing.is_none() {
                    tracing::debug!("Skipping job card without a listing link");
                }
                listing
            })
            .collect()
    }

    fn parse_card(&self, card: &ElementRef) -> Option<Listing> {
        let url = card
            .select(&self.listing_link)
            .next()
            .and_then(|el| el.value().attr("href"))
            .and_then(non_empty)?;

        let company = card.select(&self.company_link).next();
        let date = card.select(&self.list_date).next();
        let logo = card.select(&self.logo).next();

        Some(Listing {
            title: self.text_of(card, &self.title),
            company_name: company.and_then(|el| non_empty(&element_text(&el))),
            company_url: company
                .and_then(|el| el.value().attr("href"))
                .and_then(non_empty),
            location: self.text_of(card, &self.location),
            url,
            date_posted_text: date.and_then(|el| non_empty(&element_text(&el))),
            date_posted: date
                .and_then(|el| el.value().attr("datetime"))
                .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()),
            company_logo_url: logo
                .and_then(|el| {
                    el.value()
                        .attr("data-delayed-url")
                        .or_else(|| el.value().attr("src"))
                })
                .and_then(non_empty),
            followers: None,
        })
    }

    fn text_of(&self, card: &ElementRef, selector: &Selector) -> Option<String> {
        card.select(selector)
            .next()
            .and_then(|el| non_empty(&element_text(&el)))
    }
}

impl Default for ListingParser {
    fn default() -> Self {
        Self::new()
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
