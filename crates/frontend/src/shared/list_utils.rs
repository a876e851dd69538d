//! Поиск по спискам: трейт `Searchable`, фильтрация и подсветка совпадений
use leptos::prelude::*;

/// Minimum filter length for list pages (the global search has no minimum).
pub const MIN_FILTER_LEN: usize = 3;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Значения полей, участвующих в поиске; `None` - поле не заполнено
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Case-insensitive substring test; `needle` must already be lower-cased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(needle))
    }

    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_lowercase(&filter.trim().to_lowercase())
    }
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().chars().count() < MIN_FILTER_LEN {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Byte ranges of case-insensitive occurrences of `filter` in `text`.
///
/// Lower-casing may change the byte width of single characters (`K` (Kelvin
/// sign) shrinks, `İ` grows), so matches are found in a lower-cased copy and
/// mapped back through a per-character span table. A match that does not
/// start and end on whole original characters is skipped.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    // (offset in lower-cased copy, original start, original end) per character
    let mut spans: Vec<(usize, usize, usize)> = Vec::with_capacity(text.len());
    let mut haystack = String::with_capacity(text.len());
    for (orig_start, c) in text.char_indices() {
        spans.push((haystack.len(), orig_start, orig_start + c.len_utf8()));
        haystack.extend(c.to_lowercase());
    }

    let to_original = |lower_start: usize, lower_end: usize| -> Option<(usize, usize)> {
        let first = spans.binary_search_by_key(&lower_start, |span| span.0).ok()?;
        let last = match spans.binary_search_by_key(&lower_end, |span| span.0) {
            Ok(next) => next.checked_sub(1)?,
            Err(_) if lower_end == haystack.len() => spans.len().checked_sub(1)?,
            Err(_) => return None,
        };
        Some((spans[first].1, spans[last].2))
    };

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = haystack[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        if let Some(range) = to_original(start, end) {
            ranges.push(range);
        }
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле фильтра списка с кнопкой очистки
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "فیلتر (حداقل ۳ حرف)...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || value.get().trim().chars().count() >= MIN_FILTER_LEN;

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="پاک کردن"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        note: Option<&'static str>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![Some(self.name), self.note]
        }
    }

    #[test]
    fn test_matches_any_field_and_skips_absent() {
        let row = Row { name: "Sara", note: None };
        assert!(row.matches_filter("  SAR "));
        assert!(!row.matches_filter("note"));

        let row = Row { name: "Sara", note: Some("VIP client") };
        assert!(row.matches_filter("vip"));
    }

    #[test]
    fn test_filter_list_requires_min_length() {
        let rows = vec![
            Row { name: "Ali", note: None },
            Row { name: "Reza", note: None },
        ];
        assert_eq!(filter_list(&rows, "al").len(), 2);
        assert_eq!(filter_list(&rows, "rez"), vec![rows[1].clone()]);
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Ali and ALI", "ali"), vec![(0, 3), (8, 11)]);
        assert!(match_ranges("Ali", "  ").is_empty());
        assert!(match_ranges("Ali", "x").is_empty());
    }

    #[test]
    fn test_match_ranges_persian_text() {
        let text = "سارا محمدی";
        let ranges = match_ranges(text, "محمد");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "محمد");
    }

    #[test]
    fn test_match_ranges_when_lowercasing_changes_char_width() {
        // Kelvin sign: 3 bytes -> 1; dotted I and A with stroke: 2 bytes -> 3
        let text = "\u{212A}\u{0130}\u{023A}ab";

        let ranges = match_ranges(text, "\u{023A}");
        assert_eq!(ranges, vec![(5, 7)]);
        assert_eq!(&text[5..7], "\u{023A}");

        assert_eq!(match_ranges(text, "k"), vec![(0, 3)]);
        assert_eq!(match_ranges(text, "AB"), vec![(7, 9)]);

        // "i" is only half of the lower-cased dotted I: not highlighted
        assert!(match_ranges(text, "i").is_empty());

        for filter in ["\u{023A}", "k", "i", "ab", "\u{0307}"] {
            for (start, end) in match_ranges(text, filter) {
                assert!(text.get(start..end).is_some());
            }
        }
    }
}
