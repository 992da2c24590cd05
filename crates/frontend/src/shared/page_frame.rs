//! PageFrame — корневая обёртка каждого экрана.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_job--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Ставит `id`, `data-page-category` и BEM-модификатор по категории.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, например `"a001_job--list"`.
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*.
    category: &'static str,
    /// Дополнительные CSS классы.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
