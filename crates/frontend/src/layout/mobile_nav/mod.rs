//! Нижняя панель вкладок для мобильных

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::shared::navigation::{NavItem, NAV_ITEMS};
use leptos::prelude::*;

/// Короткая подпись: первое слово метки ("VISION LINK" -> "VISION")
fn short_label(item: &NavItem) -> &'static str {
    item.label.split(' ').next().unwrap_or(item.label)
}

#[component]
pub fn MobileNav() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="mobile-nav">
            {NAV_ITEMS
                .into_iter()
                .map(|item| {
                    view! {
                        <button
                            class="mobile-nav__item"
                            class:mobile-nav__item--active=move || ctx.active_view.get() == item.view
                            on:click=move |_| ctx.set_view(item.view)
                        >
                            {icon(item.icon)}
                            <span>{short_label(&item)}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_takes_first_word() {
        let labels: Vec<&str> = NAV_ITEMS.iter().map(short_label).collect();
        assert_eq!(
            labels,
            vec!["DASHBOARD", "JOBS", "MATERIALS", "VISION", "FUTURE", "AI", "SETTINGS"]
        );
    }
}
