use bookshelf::api::{CmdMessage, DisplayBook, MessageLevel};
use bookshelf::config::BookshelfConfig;
use bookshelf::model::{Book, LibraryStats};
use colored::Colorize;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_books(books: &[DisplayBook]) {
    for db in books {
        let status = if db.book.read {
            "Read".green()
        } else {
            "Unread".red()
        };
        println!("{} {} - {}", format!("{}.", db.index).yellow(), book_line(&db.book), status);
    }
}

pub(crate) fn book_line(book: &Book) -> String {
    format!(
        "{} by {} ({}) - {}",
        book.title, book.author, book.year, book.genre
    )
}

pub(crate) fn print_stats(stats: &LibraryStats) {
    println!("Total Books: {}", stats.total);
    println!("Read: {}", stats.read);
    println!("Completion: {}", format_percent(stats.percent_read).bold());
}

pub(crate) fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

pub(crate) fn print_config(config: &BookshelfConfig) {
    for key in BookshelfConfig::keys() {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
