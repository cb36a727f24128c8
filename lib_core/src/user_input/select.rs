use std::fmt;

use strum::IntoEnumIterator;

use crate::{cli_error::short_type_name, define_cli_error, CliError};

define_cli_error!(SelectionError, "Selection failed.");
define_cli_error!(NoItemsError, "No {type_name} items to select from.", { type_name: &str });

pub trait Selectable {
    type Item;

    fn select(self) -> Result<Self::Item, CliError>;
    fn select_with_prompt(self, prompt: &str) -> Result<Self::Item, CliError>;
}

impl<T: fmt::Display, Iter> Selectable for Iter
where
    Iter: IntoIterator<Item = T>,
{
    type Item = T;

    fn select(self) -> Result<T, CliError> {
        prompt_select(short_type_name::<T>(), self.into_iter().collect())
    }

    fn select_with_prompt(self, prompt: &str) -> Result<T, CliError> {
        prompt_select(prompt, self.into_iter().collect())
    }
}

pub trait SelectableEnum {
    type Item;

    fn select() -> Result<Self::Item, CliError>;
}

impl<T> SelectableEnum for T
where
    T: IntoEnumIterator + fmt::Display,
{
    type Item = T;

    fn select() -> Result<Self::Item, CliError> {
        prompt_select(short_type_name::<T>(), T::iter().collect())
    }
}

fn prompt_select<T: fmt::Display>(prompt: &str, items: Vec<T>) -> Result<T, CliError> {
    if items.is_empty() {
        return Err(NoItemsError::new(short_type_name::<T>()));
    }
    inquire::Select::new(prompt, items)
        .with_vim_mode(true)
        .prompt()
        .map_err(|e| SelectionError::with_debug(&e))
}
