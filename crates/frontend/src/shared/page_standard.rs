//! Категории страниц.
//!
//! Каждый экран объявляет:
//!   - HTML `id` в формате `{entity}--{category}` (например `"a001_job--list"`)
//!   - `data-page-category` с одной из констант ниже
//!
//! По части до `--` экран находится поиском в IDE.

/// Список записей с фильтрами.
pub const PAGE_CAT_LIST: &str = "list";

/// Форма одной записи / терминал.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Дашборд.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Экран сценария (сканирование, AR-хаб).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Системная страница.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Свободная вёрстка (маркетинговые страницы).
pub const PAGE_CAT_CUSTOM: &str = "custom";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_CUSTOM,
];

/// Проверка формата `{entity}--{category}`.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_job--list"));
        assert!(is_valid_page_id("d400_shift_dashboard--dashboard"));
        assert!(!is_valid_page_id("a001_job"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_job--grid"));
    }
}
