use serde::Serialize;

/// One entry of a page-link strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// Page links to show for `current` out of `total_pages`.
///
/// The first page, the last page and the neighbours of the current page are
/// always listed; a skipped run next to either end collapses into one gap.
pub fn page_strip(current: usize, total_pages: usize) -> Vec<PageLink> {
    let mut links = Vec::new();

    for page in 1..=total_pages {
        if is_visible(page, current, total_pages) {
            links.push(PageLink::Page(page));
        } else if page == 2 || page + 1 == total_pages {
            links.push(PageLink::Gap);
        }
    }

    links
}

fn is_visible(page: usize, current: usize, total_pages: usize) -> bool {
    page == 1 || page == total_pages || (page + 1 >= current && page <= current + 1)
}

#[cfg(test)]
mod tests {
    use super::PageLink::{Gap, Page};
    use super::*;

    #[test]
    fn test_short_strip_has_no_gaps() {
        assert_eq!(page_strip(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_middle_page_has_gaps_on_both_sides() {
        assert_eq!(
            page_strip(5, 9),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(9)]
        );
    }

    #[test]
    fn test_first_page_has_trailing_gap() {
        assert_eq!(page_strip(1, 6), vec![Page(1), Page(2), Gap, Page(6)]);
    }

    #[test]
    fn test_no_pages_no_links() {
        assert!(page_strip(1, 0).is_empty());
    }
}
