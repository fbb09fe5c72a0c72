//! Постраничная нарезка списков. Страницы нумеруются с 1.

/// Количество страниц; для пустого списка страниц нет
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Приводит номер страницы к диапазону `[1, total_pages]` (или 1, если страниц нет)
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages).max(1)
}

/// Срез `[(page - 1) * size, page * size)`; вне диапазона возвращается пустой срез
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_is_zero_for_empty() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(45, 10), 5);
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn slices_are_bounded() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
    }

    #[test]
    fn pages_cover_collection_exactly_once() {
        let items: Vec<u32> = (1..=47).collect();
        for size in [1, 5, 8, 10, 47, 100] {
            let pages = total_pages(items.len(), size);
            let rebuilt: Vec<u32> = (1..=pages)
                .flat_map(|p| paginate(&items, p, size).to_vec())
                .collect();
            assert_eq!(rebuilt, items, "page size {}", size);
        }
    }
}
