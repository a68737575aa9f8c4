//! Wire types for the Gutendex book catalog

use serde::{Deserialize, Serialize};

/// One catalog entry. Gutendex returns many more fields (subjects,
/// formats, download counts); anything the reader does not use is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

/// Top-level shape of `GET /books/`.
#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<Book>,
}

impl Book {
    /// Menu label: `"<title> by <author>, <author>"`, or the bare title
    /// when the catalog lists no authors.
    pub fn label(&self) -> String {
        if self.authors.is_empty() {
            return self.title.clone();
        }
        let names: Vec<&str> = self.authors.iter().map(|a| a.name.as_str()).collect();
        format!("{} by {}", self.title, names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_gutendex_page_and_ignores_unknown_fields() {
        let body = r#"{
            "count": 75999,
            "next": "https://gutendex.com/books/?page=2",
            "previous": null,
            "results": [
                {
                    "id": 84,
                    "title": "Frankenstein; Or, The Modern Prometheus",
                    "authors": [
                        {
                            "name": "Shelley, Mary Wollstonecraft",
                            "birth_year": 1797,
                            "death_year": 1851
                        }
                    ],
                    "subjects": ["Science fiction"],
                    "languages": ["en"],
                    "download_count": 104393
                },
                {
                    "id": 2701,
                    "title": "Moby Dick; Or, The Whale",
                    "authors": [{"name": "Melville, Herman"}]
                }
            ]
        }"#;

        let page: CatalogPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].id, 84);
        assert_eq!(page.results[0].authors[0].name, "Shelley, Mary Wollstonecraft");
        assert_eq!(page.results[1].title, "Moby Dick; Or, The Whale");
    }

    #[test]
    fn decodes_a_book_without_authors() {
        let book: Book = serde_json::from_str(r#"{"id": 1, "title": "Anonymous Work"}"#).unwrap();
        assert!(book.authors.is_empty());
    }

    #[test]
    fn label_joins_author_names() {
        let book = Book {
            id: 1342,
            title: "Pride and Prejudice".into(),
            authors: vec![
                Author {
                    name: "Austen, Jane".into(),
                },
                Author {
                    name: "Someone, Else".into(),
                },
            ],
        };
        assert_eq!(book.label(), "Pride and Prejudice by Austen, Jane, Someone, Else");
    }

    #[test]
    fn label_without_authors_is_the_bare_title() {
        let book = Book {
            id: 1,
            title: "Anonymous Work".into(),
            authors: Vec::new(),
        };
        assert_eq!(book.label(), "Anonymous Work");
    }
}
