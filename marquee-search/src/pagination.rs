//! Pagination display algorithm.
//!
//! Turns (current page, total pages) into the sequence of controls a
//! pager renders: the first and last page always, a window of two
//! pages around the current one, and an ellipsis wherever the skipped
//! run is longer than a single page.

/// One slot in a rendered pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    /// A directly selectable page number.
    Number(u32),
    /// A collapsed run of skipped pages.
    Ellipsis,
}

/// Window of pages kept visible on each side of the current page.
const WINDOW: u32 = 2;

/// Computes the visible page marks for a pager.
///
/// Returns an empty sequence when there is at most one page, since a
/// pager with a single page renders nothing.
pub fn page_marks(current: u32, total: u32) -> Vec<PageMark> {
    if total <= 1 {
        return Vec::new();
    }

    let window_start = (current.saturating_sub(WINDOW)).max(2);
    let window_end = (current + WINDOW).min(total - 1);

    let mut marks = Vec::new();

    marks.push(PageMark::Number(1));
    // A gap of exactly one page is shown as the page itself; only
    // longer gaps collapse.
    if current > WINDOW + 2 {
        marks.push(PageMark::Ellipsis);
    }

    for page in window_start..=window_end {
        marks.push(PageMark::Number(page));
    }

    if current + WINDOW < total - 1 {
        marks.push(PageMark::Ellipsis);
    }
    marks.push(PageMark::Number(total));

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMark::{Ellipsis, Number};

    fn numbers(marks: &[PageMark]) -> Vec<u32> {
        marks
            .iter()
            .filter_map(|mark| match mark {
                Number(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn single_page_renders_nothing() {
        assert!(page_marks(1, 0).is_empty());
        assert!(page_marks(1, 1).is_empty());
    }

    #[test]
    fn mid_range_window_collapses_both_sides() {
        let marks = page_marks(5, 20);
        assert_eq!(
            marks,
            vec![
                Number(1),
                Ellipsis,
                Number(3),
                Number(4),
                Number(5),
                Number(6),
                Number(7),
                Ellipsis,
                Number(20),
            ]
        );
    }

    #[test]
    fn small_page_counts_show_every_page() {
        assert_eq!(numbers(&page_marks(1, 3)), vec![1, 2, 3]);
        assert_eq!(numbers(&page_marks(2, 3)), vec![1, 2, 3]);
        assert_eq!(numbers(&page_marks(3, 3)), vec![1, 2, 3]);
    }

    #[test]
    fn one_page_gap_is_shown_not_collapsed() {
        // Window for page 4 starts at 2, so nothing is skipped before it.
        let marks = page_marks(4, 10);
        assert_eq!(
            marks,
            vec![
                Number(1),
                Number(2),
                Number(3),
                Number(4),
                Number(5),
                Number(6),
                Ellipsis,
                Number(10),
            ]
        );
    }

    #[test]
    fn window_clips_at_the_far_end() {
        let marks = page_marks(19, 20);
        assert_eq!(
            marks,
            vec![
                Number(1),
                Ellipsis,
                Number(17),
                Number(18),
                Number(19),
                Number(20),
            ]
        );
    }

    #[test]
    fn first_page_of_many_keeps_leading_run() {
        let marks = page_marks(1, 10);
        assert_eq!(
            marks,
            vec![Number(1), Number(2), Number(3), Ellipsis, Number(10)]
        );
    }
}
