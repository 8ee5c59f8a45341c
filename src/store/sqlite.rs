use crate::api::APIError;
use crate::{models::*, trace_handler};
use actix::prelude::*;
use sqlite::State;
use tracing_batteries::prelude::*;

const BOOK_NOT_FOUND: &str = "The book you requested could not be found in the database.";

pub struct SqliteStore {
    started_at: chrono::DateTime<chrono::Utc>,
    connection: sqlite::Connection,
}

impl SqliteStore {
    pub fn new<P: AsRef<str>>(path: P) -> Result<Self, sqlite::Error> {
        let instance = Self {
            started_at: chrono::Utc::now(),
            connection: sqlite::Connection::open(path.as_ref())?,
        };

        super::migrations::run_migrations(&instance.connection)?;

        Ok(instance)
    }

    fn get_book(&self, id: i64) -> Result<Book, APIError> {
        let mut query = self
            .connection
            .prepare("SELECT id, title, author, year FROM books WHERE id = ? LIMIT 1")?;
        query.bind((1, id))?;

        if query.next()? == State::Row {
            Ok(read_book(&query)?)
        } else {
            Err(APIError::not_found(BOOK_NOT_FOUND))
        }
    }
}

fn read_book(statement: &sqlite::Statement<'_>) -> Result<Book, sqlite::Error> {
    Ok(Book {
        id: statement.read::<i64, _>("id")? as u64,
        title: statement.read("title")?,
        author: statement.read("author")?,
        year: statement.read("year")?,
    })
}

/// Book identifiers are stored as SQLite integers, anything beyond their
/// range cannot refer to a stored book.
fn row_id(id: u64) -> Result<i64, APIError> {
    i64::try_from(id).map_err(|_| APIError::not_found(BOOK_NOT_FOUND))
}

impl Actor for SqliteStore {
    type Context = Context<Self>;
}

trace_handler!(SqliteStore, GetHealth, Result<Health, APIError>);

impl Handler<GetHealth> for SqliteStore {
    type Result = Result<Health, APIError>;

    fn handle(&mut self, _: GetHealth, _: &mut Self::Context) -> Self::Result {
        Ok(Health {
            ok: true,
            started_at: self.started_at,
        })
    }
}

trace_handler!(SqliteStore, PingDatabase, Result<String, APIError>);

impl Handler<PingDatabase> for SqliteStore {
    type Result = Result<String, APIError>;

    fn handle(&mut self, _: PingDatabase, _: &mut Self::Context) -> Self::Result {
        let mut query = self
            .connection
            .prepare("SELECT 'Database connected successfully' AS result")?;

        if query.next()? == State::Row {
            Ok(query.read("result")?)
        } else {
            Err(APIError::new(
                500,
                "Internal Server Error",
                "The database did not respond to our ping.",
            ))
        }
    }
}

trace_handler!(SqliteStore, ListBooks, Result<Vec<Book>, APIError>);

impl Handler<ListBooks> for SqliteStore {
    type Result = Result<Vec<Book>, APIError>;

    fn handle(&mut self, _: ListBooks, _: &mut Self::Context) -> Self::Result {
        let mut query = self
            .connection
            .prepare("SELECT id, title, author, year FROM books ORDER BY id")?;

        let mut books = Vec::new();
        while query.next()? == State::Row {
            books.push(read_book(&query)?);
        }

        debug!("Loaded {} books from the database", books.len());
        Ok(books)
    }
}

trace_handler!(SqliteStore, GetBook, Result<Book, APIError>);

impl Handler<GetBook> for SqliteStore {
    type Result = Result<Book, APIError>;

    fn handle(&mut self, msg: GetBook, _: &mut Self::Context) -> Self::Result {
        self.get_book(row_id(msg.id)?)
    }
}

trace_handler!(SqliteStore, CreateBook, Result<Book, APIError>);

impl Handler<CreateBook> for SqliteStore {
    type Result = Result<Book, APIError>;

    fn handle(&mut self, msg: CreateBook, _: &mut Self::Context) -> Self::Result {
        let mut query = self.connection.prepare(
            "INSERT INTO books (title, author, year)
              VALUES (?, ?, ?)
              RETURNING id, title, author, year",
        )?;
        query.bind((1, msg.title.as_str()))?;
        query.bind((2, msg.author.as_str()))?;
        query.bind((3, msg.year))?;

        if query.next()? == State::Row {
            let book = read_book(&query)?;
            info!(
                { book.id = book.id },
                "Added '{}' by {} to the library", book.title, book.author
            );
            Ok(book)
        } else {
            Err(APIError::new(
                500,
                "Internal Server Error",
                "An error occurred while adding the book to the database.",
            ))
        }
    }
}

trace_handler!(SqliteStore, UpdateBook, Result<Book, APIError>);

impl Handler<UpdateBook> for SqliteStore {
    type Result = Result<Book, APIError>;

    fn handle(&mut self, msg: UpdateBook, _: &mut Self::Context) -> Self::Result {
        let id = row_id(msg.id)?;
        let current = self.get_book(id)?;

        let mut query = self.connection.prepare(
            "UPDATE books
              SET title = ?, author = ?, year = ?
              WHERE id = ?
              RETURNING id, title, author, year",
        )?;
        query.bind((1, msg.title.as_deref().unwrap_or(&current.title)))?;
        query.bind((2, msg.author.as_deref().unwrap_or(&current.author)))?;
        query.bind((3, msg.year.unwrap_or(current.year)))?;
        query.bind((4, id))?;

        if query.next()? == State::Row {
            Ok(read_book(&query)?)
        } else {
            Err(APIError::not_found(BOOK_NOT_FOUND))
        }
    }
}

trace_handler!(SqliteStore, DeleteBook, Result<(), APIError>);

impl Handler<DeleteBook> for SqliteStore {
    type Result = Result<(), APIError>;

    fn handle(&mut self, msg: DeleteBook, _: &mut Self::Context) -> Self::Result {
        let mut query = self
            .connection
            .prepare("DELETE FROM books WHERE id = ? RETURNING id")?;
        query.bind((1, row_id(msg.id)?))?;

        if query.next()? == State::Row {
            info!({ book.id = msg.id }, "Removed a book from the library");
            Ok(())
        } else {
            Err(APIError::not_found(BOOK_NOT_FOUND))
        }
    }
}
