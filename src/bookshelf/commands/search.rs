use crate::commands::{number_books, CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::SearchField;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    library: &Library<S>,
    field: SearchField,
    keyword: &str,
) -> Result<CmdResult> {
    let matches = library.search(field, keyword);
    let mut result = CmdResult::default().with_listed_books(number_books(matches));

    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info("No matching books found."));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::memory::fixtures::StoreFixture;

    fn library() -> Library<crate::store::memory::InMemoryStore> {
        let store = StoreFixture::new()
            .with_book(Book::new("Dune", "Frank Herbert", 1965, "SciFi", false))
            .with_book(Book::new("The Hobbit", "J.R.R. Tolkien", 1937, "Fantasy", true))
            .with_book(Book::new("The Two Towers", "J.R.R. Tolkien", 1954, "Fantasy", true))
            .build();
        Library::open(store).unwrap()
    }

    #[test]
    fn numbers_matches_in_collection_order() {
        let result = run(&library(), SearchField::Author, "tolkien").unwrap();
        assert_eq!(result.listed_books.len(), 2);
        assert_eq!(result.listed_books[0].index, 1);
        assert_eq!(result.listed_books[0].book.title, "The Hobbit");
        assert_eq!(result.listed_books[1].index, 2);
        assert_eq!(result.listed_books[1].book.title, "The Two Towers");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn reports_no_matches() {
        let result = run(&library(), SearchField::Title, "Neuromancer").unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No matching books found.");
    }
}
