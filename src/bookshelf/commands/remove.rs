use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::{Library, RemoveOutcome};
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &mut Library<S>, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match library.remove(title)? {
        RemoveOutcome::Removed(book) => {
            result.add_message(CmdMessage::success(format!("Removed '{}'.", book.title)));
            result.affected_books.push(book);
        }
        RemoveOutcome::NotFound => {
            result.add_message(CmdMessage::error("Book not found."));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Book;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_and_reports_stored_title() {
        let store = StoreFixture::new()
            .with_book(Book::new("Dune", "Herbert", 1965, "SciFi", true))
            .build();
        let mut library = Library::open(store).unwrap();

        let result = run(&mut library, "dune").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Removed 'Dune'.");
        assert_eq!(result.affected_books[0].title, "Dune");
        assert!(library.books().is_empty());
    }

    #[test]
    fn missing_title_is_reported_not_raised() {
        let mut library = Library::open(StoreFixture::new().with_books(1).build()).unwrap();

        let result = run(&mut library, "Nonexistent").unwrap();
        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, "Book not found.");
        assert!(result.affected_books.is_empty());
        assert_eq!(library.books().len(), 1);
        assert_eq!(library.store().save_count(), 0);
    }
}
