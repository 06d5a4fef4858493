pub(crate) mod screen;

pub(crate) use screen::{JokeScreen, ViewState};
