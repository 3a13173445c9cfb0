//! Pagination bar rendering.

use marquee_search::pagination::{PageMark, page_marks};

/// Renders the pagination bar.
///
/// Empty when there is at most one page. Number controls and prev/next
/// are disabled while a fetch is in flight; prev and next are also
/// disabled at their respective boundaries.
pub fn pagination_bar(current: u32, total: u32, loading: bool) -> String {
    let marks = page_marks(current, total);
    if marks.is_empty() {
        return String::new();
    }

    let mut controls = String::new();

    let prev_disabled = current == 1 || loading;
    controls.push_str(&nav_control("Previous", current.saturating_sub(1), prev_disabled));

    for mark in marks {
        match mark {
            PageMark::Ellipsis => {
                controls.push_str(r#"<span class="px-3 py-2 text-sm text-gray-500">•••</span>"#);
            }
            PageMark::Number(page) => {
                controls.push_str(&page_control(page, page == current, loading));
            }
        }
    }

    let next_disabled = current == total || loading;
    controls.push_str(&nav_control("Next", current + 1, next_disabled));

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-4 mt-8 flex items-center justify-between">
            <div class="text-sm text-gray-400">Page {current} of {total}</div>
            <div class="flex items-center space-x-1">{controls}</div>
        </div>"#
    )
}

fn nav_control(label: &str, target: u32, disabled: bool) -> String {
    if disabled {
        format!(
            r#"<span class="px-4 py-2 text-sm font-medium text-gray-600 bg-gray-800 border border-gray-700 rounded-lg opacity-50 cursor-not-allowed">{label}</span>"#
        )
    } else {
        format!(
            r#"<a href="/page/{target}" class="px-4 py-2 text-sm font-medium text-gray-300 bg-gray-800 border border-gray-600 rounded-lg hover:bg-gray-700">{label}</a>"#
        )
    }
}

fn page_control(page: u32, active: bool, loading: bool) -> String {
    if active {
        format!(
            r#"<span class="px-4 py-2 text-sm font-medium rounded-lg bg-indigo-600 text-white">{page}</span>"#
        )
    } else if loading {
        format!(
            r#"<span class="px-4 py-2 text-sm font-medium rounded-lg text-gray-500 opacity-50 cursor-not-allowed">{page}</span>"#
        )
    } else {
        format!(
            r#"<a href="/page/{page}" class="px-4 py-2 text-sm font-medium rounded-lg text-gray-300 bg-gray-800 border border-gray-600 hover:bg-gray-700">{page}</a>"#
        )
    }
}
