//! Title search over an in-memory catalog listing.

use crate::types::Book;

/// Books whose title contains `query`, ignoring case.
///
/// A blank query matches everything. Catalog order is kept.
///
/// ```rust
/// use folio_core::search::filter_by_title;
/// use folio_core::types::Book;
///
/// let books = vec![
///     Book { title: "Dune".into(), ..Book::default() },
///     Book { title: "Dune Messiah".into(), ..Book::default() },
///     Book { title: "Solaris".into(), ..Book::default() },
/// ];
/// assert_eq!(filter_by_title(&books, "dUnE").len(), 2);
/// ```
pub fn filter_by_title<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return books.iter().collect();
    }
    books
        .iter()
        .filter(|book| book.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Book {
        Book {
            title: title.to_string(),
            ..Book::default()
        }
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let books = vec![titled("A"), titled("B")];
        assert_eq!(filter_by_title(&books, "   ").len(), 2);
    }

    #[test]
    fn test_matches_substring_case_insensitively() {
        let books = vec![titled("The Master and Margarita"), titled("Ion"), titled("Master")];
        let found: Vec<&str> = filter_by_title(&books, " master ")
            .into_iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(found, vec!["The Master and Margarita", "Master"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let books = vec![titled("Ion")];
        assert!(filter_by_title(&books, "zzz").is_empty());
    }
}
