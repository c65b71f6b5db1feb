//! Page-number bounds checking for list endpoints.

use serde::Serialize;

/// Status line reported when a requested resource page does not exist.
pub const NOT_FOUND_STATUS: &str = "404 Ressource introuvable";
/// Message reported when the requested list page is out of range.
pub const LIST_NOT_FOUND_MESSAGE: &str = "Liste introuvable !";

/// Body returned alongside a `404 Not Found` response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NotFoundPayload {
    pub status: String,
    pub message: String,
}

impl NotFoundPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: NOT_FOUND_STATUS.to_string(),
            message: message.into(),
        }
    }

    /// Payload for a list page past the last available page.
    pub fn list() -> Self {
        Self::new(LIST_NOT_FOUND_MESSAGE)
    }
}

/// A page number that passed [`check_page`]. Always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Page(usize);

impl Page {
    pub const FIRST: Page = Page(1);

    pub const fn get(self) -> usize {
        self.0
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(self, page_size: usize) -> usize {
        (self.0 - 1).saturating_mul(page_size)
    }
}

/// Outcome of validating a requested page against a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCheck {
    Valid(Page),
    NotFound(NotFoundPayload),
}

/// Number of pages needed to hold `total_items` with `page_size` items each.
///
/// A zero `page_size` yields zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Parses a raw `page` query value. Missing, non-numeric and non-positive
/// values all fall back to the first page.
pub fn requested_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .and_then(|page| usize::try_from(page).ok())
        .unwrap_or(1)
}

/// Validates `requested` against the number of pages available.
///
/// Page 1 is always valid, so an empty result set answers with an empty first
/// page instead of a not-found payload. Any other page past the last one is
/// not found.
pub fn check_page(requested: Option<&str>, total_items: usize, page_size: usize) -> PageCheck {
    let page = requested_page(requested);
    let last_page = total_pages(total_items, page_size).max(1);

    if page > last_page {
        return PageCheck::NotFound(NotFoundPayload::list());
    }

    PageCheck::Valid(Page(page))
}

/// One page of items together with the numbers needed to navigate the set.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
    pub limit: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: Page, total: usize, limit: usize) -> Self {
        Self {
            items,
            page: page.get(),
            pages: total_pages(total, limit),
            total,
            limit,
        }
    }

    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            pages: self.pages,
            total: self.total,
            limit: self.limit,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(25, 0), 0);
    }

    #[test]
    fn requested_page_defaults_to_first() {
        assert_eq!(requested_page(None), 1);
        assert_eq!(requested_page(Some("0")), 1);
        assert_eq!(requested_page(Some("-4")), 1);
        assert_eq!(requested_page(Some("abc")), 1);
        assert_eq!(requested_page(Some(" 3 ")), 3);
    }

    #[test]
    fn page_past_the_last_is_not_found() {
        assert_eq!(check_page(Some("3"), 25, 10), PageCheck::Valid(Page(3)));
        assert_eq!(
            check_page(Some("4"), 25, 10),
            PageCheck::NotFound(NotFoundPayload::list())
        );
    }

    #[test]
    fn first_page_of_empty_set_is_valid() {
        assert_eq!(check_page(None, 0, 10), PageCheck::Valid(Page::FIRST));
        assert_eq!(check_page(Some("1"), 0, 10), PageCheck::Valid(Page::FIRST));
    }

    #[test]
    fn second_page_of_empty_set_is_not_found() {
        assert_eq!(
            check_page(Some("2"), 0, 10),
            PageCheck::NotFound(NotFoundPayload::list())
        );
    }

    #[test]
    fn not_found_iff_page_exceeds_total_pages() {
        for total in 1..=45 {
            let pages = total_pages(total, 10);
            for page in 1..=pages + 2 {
                let raw = page.to_string();
                let valid = matches!(check_page(Some(&raw), total, 10), PageCheck::Valid(_));
                assert_eq!(valid, page <= pages, "total={total} page={page}");
            }
        }
    }

    #[test]
    fn not_found_payload_matches_wire_format() {
        let payload = serde_json::to_value(NotFoundPayload::list()).expect("serializable");
        assert_eq!(
            payload,
            serde_json::json!({
                "status": "404 Ressource introuvable",
                "message": "Liste introuvable !"
            })
        );
    }

    #[test]
    fn page_offset_and_navigation() {
        let page = Page(3);
        assert_eq!(page.offset(10), 20);
        let paginated = Paginated::new(vec![1, 2, 3, 4, 5], page, 25, 10);
        assert_eq!(paginated.pages, 3);
        assert!(!paginated.has_next());
        assert!(paginated.has_prev());
        let doubled = paginated.map(|n| n * 2);
        assert_eq!(doubled.items, vec![2, 4, 6, 8, 10]);
    }
}
