pub const DEFAULT_PAGE: &str = "a001_product";

/// Все ключи, для которых в registry есть страница
pub const PAGE_KEYS: [&str; 5] = [
    "a001_product",
    "a002_order",
    "a003_customer",
    "d400_sales_overview",
    "sys_settings",
];

/// Читаемый заголовок страницы; для неизвестного ключа сам ключ
pub fn page_label_for_key(key: &str) -> &str {
    match key {
        "a001_product" => "Products",
        "a002_order" => "Orders",
        "a003_customer" => "Customers",
        "d400_sales_overview" => "Analytics",
        "sys_settings" => "Settings",
        other => other,
    }
}

pub fn is_known_page(key: &str) -> bool {
    PAGE_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_label() {
        for key in PAGE_KEYS {
            assert_ne!(page_label_for_key(key), key);
        }
        assert!(is_known_page(DEFAULT_PAGE));
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(page_label_for_key("p999_missing"), "p999_missing");
        assert!(!is_known_page("p999_missing"));
        assert!(!is_known_page(""));
    }
}
