use crate::api::APIError;
use serde::{de, Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i64,
}

actor_message!(ListBooks() -> Vec<Book>);
actor_message!(GetBook(id: u64) -> Book);
actor_message!(CreateBook(title: String, author: String, year: i64) -> Book);
actor_message!(UpdateBook(id: u64, title: Option<String>, author: Option<String>, year: Option<i64>) -> Book);
actor_message!(DeleteBook(id: u64) -> ());

#[derive(Debug, Serialize, Deserialize)]
pub struct BookV1 {
    #[serde(rename = "SSID", alias = "id")]
    pub id: u64,
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
    #[serde(rename = "Author", alias = "author")]
    pub author: String,
    #[serde(rename = "Year", alias = "year")]
    pub year: i64,
}

json_responder!(BookV1);

impl From<Book> for BookV1 {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
        }
    }
}

/// The body of a request to add a book to the library.
///
/// Any `SSID` provided by the client is ignored; identifiers are always
/// assigned by the store.
#[derive(Debug, Deserialize)]
pub struct NewBookV1 {
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
    #[serde(rename = "Author", alias = "author")]
    pub author: String,
    #[serde(rename = "Year", alias = "year", deserialize_with = "deserialize_year")]
    pub year: i64,
}

impl NewBookV1 {
    pub fn into_message(self) -> Result<CreateBook, APIError> {
        Ok(CreateBook {
            title: required("Title", self.title)?,
            author: required("Author", self.author)?,
            year: self.year,
        })
    }
}

/// The body of a request to update a book, only the fields which are
/// present will be changed.
#[derive(Debug, Default, Deserialize)]
pub struct BookPatchV1 {
    #[serde(default, rename = "Title", alias = "title")]
    pub title: Option<String>,
    #[serde(default, rename = "Author", alias = "author")]
    pub author: Option<String>,
    #[serde(
        default,
        rename = "Year",
        alias = "year",
        deserialize_with = "deserialize_optional_year"
    )]
    pub year: Option<i64>,
}

impl BookPatchV1 {
    pub fn into_message(self, id: u64) -> Result<UpdateBook, APIError> {
        Ok(UpdateBook {
            id,
            title: self.title.map(|t| required("Title", t)).transpose()?,
            author: self.author.map(|a| required("Author", a)).transpose()?,
            year: self.year,
        })
    }
}

fn required(field: &str, value: String) -> Result<String, APIError> {
    if value.trim().is_empty() {
        Err(APIError::new(
            400,
            "Bad Request",
            &format!("The {field} of a book cannot be empty."),
        ))
    } else {
        Ok(value)
    }
}

/// Older clients sent the year as a string, so both `1955` and `"1955"` are
/// accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum Year {
    Number(i64),
    Text(String),
}

impl Year {
    fn into_number<E: de::Error>(self) -> Result<i64, E> {
        match self {
            Year::Number(year) => Ok(year),
            Year::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid year '{text}', expected an integer"))),
        }
    }
}

fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Year::deserialize(deserializer)?.into_number()
}

fn deserialize_optional_year<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    Option::<Year>::deserialize(deserializer)?
        .map(Year::into_number)
        .transpose()
}
