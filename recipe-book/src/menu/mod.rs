//! Interactive text menu
//!
//! Reads choices and recipe fields line by line, calls exactly one store
//! operation per action and prints the outcome. Store errors are reported
//! and the loop carries on; only console I/O errors end it early.

mod choice;

pub use choice::MenuChoice;

use crate::error::StoreError;
use crate::repositories::RecipeRepository;
use crate::services::RecipeStore;
use recipe_book_shared::validation::require_non_empty;
use recipe_book_shared::RecipeChanges;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu session over a line-based input and a text output
pub struct Menu<'a, R, I, O> {
    store: &'a RecipeStore<R>,
    input: I,
    output: O,
}

impl<'a, R, I, O> Menu<'a, R, I, O>
where
    R: RecipeRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(store: &'a RecipeStore<R>, input: I, output: O) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the user exits or the input ends
    pub async fn run(mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                writeln!(self.output)?;
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(choice = ?choice, "Menu choice");
                    self.dispatch(choice).await?
                }
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_recipe().await,
            MenuChoice::Update => self.update_recipe().await,
            MenuChoice::Delete => self.delete_recipe().await,
            MenuChoice::List => self.list_recipes().await,
            MenuChoice::View => self.view_recipe().await,
            MenuChoice::Exit => {
                writeln!(self.output, "Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    async fn add_recipe(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter recipe name: ")? else {
            return Ok(Flow::Exit);
        };
        if self.reject_blank("name", &name)? {
            return Ok(Flow::Continue);
        }
        let Some(ingredients) = self.prompt("Enter ingredients (comma-separated): ")? else {
            return Ok(Flow::Exit);
        };
        if self.reject_blank("ingredients", &ingredients)? {
            return Ok(Flow::Continue);
        }
        let Some(steps) = self.prompt("Enter steps (separated by periods): ")? else {
            return Ok(Flow::Exit);
        };
        if self.reject_blank("steps", &steps)? {
            return Ok(Flow::Continue);
        }

        match self.store.create(&name, &ingredients, &steps).await {
            Ok(_) => writeln!(self.output, "Recipe added successfully.")?,
            Err(err) => self.report(MenuChoice::Add, &err)?,
        }
        Ok(Flow::Continue)
    }

    async fn update_recipe(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the recipe to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(new_name) = self.prompt("Enter new recipe name (leave blank to keep current): ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(new_ingredients) =
            self.prompt("Enter new ingredients (leave blank to keep current): ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(new_steps) = self.prompt("Enter new steps (leave blank to keep current): ")? else {
            return Ok(Flow::Exit);
        };

        let changes = RecipeChanges {
            name: Some(new_name),
            ingredients: Some(new_ingredients),
            steps: Some(new_steps),
        };

        match self.store.update(&name, changes).await {
            Ok(_) => writeln!(self.output, "Recipe updated successfully.")?,
            Err(err) => self.report(MenuChoice::Update, &err)?,
        }
        Ok(Flow::Continue)
    }

    async fn delete_recipe(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the recipe to delete: ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.delete(&name).await {
            Ok(()) => writeln!(self.output, "Recipe deleted successfully.")?,
            Err(err) => self.report(MenuChoice::Delete, &err)?,
        }
        Ok(Flow::Continue)
    }

    async fn list_recipes(&mut self) -> io::Result<Flow> {
        match self.store.list_names().await {
            Ok(names) if names.is_empty() => writeln!(self.output, "No recipes found.")?,
            Ok(names) => {
                writeln!(self.output, "\nList of Recipes:")?;
                for name in names {
                    writeln!(self.output, "- {}", name)?;
                }
            }
            Err(err) => self.report(MenuChoice::List, &err)?,
        }
        Ok(Flow::Continue)
    }

    async fn view_recipe(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the recipe to view: ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.view_details(&name).await {
            Ok(details) => {
                writeln!(self.output, "\nIngredients:")?;
                writeln!(self.output, "{}", details.ingredients)?;
                writeln!(self.output, "\nSteps:")?;
                writeln!(self.output, "{}", details.steps)?;
            }
            Err(err) => self.report(MenuChoice::View, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nRecipe Book")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    /// Print a prompt and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print the validation message for a blank answer. Returns whether
    /// the answer was rejected.
    fn reject_blank(&mut self, field: &str, value: &str) -> io::Result<bool> {
        match require_non_empty(field, value) {
            Ok(_) => Ok(false),
            Err(err) => {
                debug!(field = %err.field, "Blank answer");
                writeln!(self.output, "{}", err.user_message())?;
                Ok(true)
            }
        }
    }

    fn report(&mut self, action: MenuChoice, err: &StoreError) -> io::Result<()> {
        match err {
            StoreError::Validation(message) => {
                debug!(code = err.code(), "{}", message);
                writeln!(self.output, "{}", message)
            }
            StoreError::NotFound(name) => {
                debug!(code = err.code(), name = %name, "Recipe not found");
                writeln!(self.output, "Recipe not found.")
            }
            StoreError::DuplicateName(name) => {
                warn!(code = err.code(), name = %name, "Duplicate recipe name");
                writeln!(self.output, "{}.", err)
            }
            StoreError::Storage(cause) => {
                error!(code = err.code(), "Error while {}: {:?}", action.activity(), cause);
                writeln!(self.output, "Error while {}: {}", action.activity(), err)
            }
        }
    }
}

/// Run the menu on the process's stdin and stdout
pub async fn run_stdio<R: RecipeRepository>(store: &RecipeStore<R>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(store, stdin.lock(), stdout.lock()).run().await
}
