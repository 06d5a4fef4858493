//! ドメイン型（Newtype、enum、エラー）

pub mod command;
pub mod error;
pub mod joke;

pub use command::ScreenCommand;
pub use error::{FetchError, StorageError};
pub use joke::{Joke, JokeId, NewJoke};
