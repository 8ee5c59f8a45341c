#[macro_use]
mod macros;

mod book;
mod health;
mod message;
mod url;

use actix::prelude::*;

pub use book::*;
pub use health::*;
pub use message::*;
pub use url::*;

#[derive(Clone)]
pub struct GlobalState {
    pub store: Addr<crate::store::Store>,
}

impl GlobalState {
    pub fn new<P: AsRef<str>>(database_path: P) -> Result<Self, sqlite::Error> {
        Ok(Self {
            store: crate::store::Store::new(database_path)?.start(),
        })
    }
}
