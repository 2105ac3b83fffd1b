//! The interactive loop: menu display, dispatch, and one handler per option.

use crate::format::Formatter;
use crate::inventory::{Product, Store};
use crate::session::menu::{self, MenuChoice};
use crate::session::prompt;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// One interactive session over a store.
///
/// Holds the store, the input reader, the output writer, and the display
/// formatter as an explicit context object, so tests can run a whole
/// session from a scripted buffer.
pub struct Session<R, W> {
    store: Store,
    threshold: f64,
    formatter: Formatter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given store and I/O endpoints.
    pub fn new(store: Store, threshold: f64, formatter: Formatter, input: R, output: W) -> Self {
        Self { store, threshold, formatter, input, output }
    }

    /// Consumes the session, returning the store.
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Runs the menu loop until exit is chosen or input ends.
    ///
    /// Only I/O errors on the output propagate; every inventory error is
    /// reported as a message and the loop returns to the menu.
    pub fn run(&mut self) -> io::Result<()> {
        info!("starting session with {} products", self.store.len());

        loop {
            writeln!(self.output, "\n{}", menu::MENU)?;
            let Some(selection) =
                prompt::prompt_i64(&mut self.input, &mut self.output, "Select an option: ")?
            else {
                debug!("input ended, closing session");
                break;
            };

            match MenuChoice::from_number(selection) {
                Some(MenuChoice::ShowInventory) => self.show_inventory()?,
                Some(MenuChoice::FindByCode) => self.find_by_code()?,
                Some(MenuChoice::FindByName) => self.find_by_name()?,
                Some(MenuChoice::AddProduct) => self.add_product()?,
                Some(MenuChoice::RemoveProduct) => self.remove_product()?,
                Some(MenuChoice::UpdatePrice) => self.update_price()?,
                Some(MenuChoice::Aggregates) => self.aggregates()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting. Goodbye!")?;
                    break;
                }
                None => writeln!(self.output, "Invalid option, try again.")?,
            }
        }

        Ok(())
    }

    fn show_inventory(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- INVENTORY ---")?;
        if self.store.is_empty() {
            writeln!(self.output, "The inventory is empty.")?;
            return Ok(());
        }

        let products: Vec<Product> = self.store.list().cloned().collect();
        writeln!(self.output, "{}", self.formatter.format_products(&products))
    }

    fn find_by_code(&mut self) -> io::Result<()> {
        let Some(code) = prompt::prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter the product code to find: ",
        )?
        else {
            return Ok(());
        };

        match self.store.find_by_code(&code) {
            Some(product) => {
                let rendered = self.formatter.format_product(product);
                writeln!(self.output, "Product found:\n{}", rendered)
            }
            None => writeln!(self.output, "No product found with that code."),
        }
    }

    fn find_by_name(&mut self) -> io::Result<()> {
        let Some(name) = prompt::prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter the product name to find: ",
        )?
        else {
            return Ok(());
        };

        let matches: Vec<Product> = self.store.find_all_by_name(&name).into_iter().cloned().collect();
        if matches.is_empty() {
            writeln!(self.output, "No product found with that name.")
        } else {
            writeln!(self.output, "{}", self.formatter.format_products(&matches))
        }
    }

    fn add_product(&mut self) -> io::Result<()> {
        let Some(code) = prompt::prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter the new product code: ",
        )?
        else {
            return Ok(());
        };

        // Check before prompting for the rest, so a duplicate code aborts early
        if self.store.find_by_code(&code).is_some() {
            writeln!(self.output, "Error: a product with code '{}' already exists.", code)?;
            return Ok(());
        }

        let Some(name) =
            prompt::prompt_line(&mut self.input, &mut self.output, "Enter the product name: ")?
        else {
            return Ok(());
        };

        let Some(price) =
            prompt::prompt_f64(&mut self.input, &mut self.output, "Enter the product price: ")?
        else {
            return Ok(());
        };

        match self.store.insert(&code, &name, price) {
            Ok(()) => writeln!(self.output, "Product added."),
            Err(err) => writeln!(self.output, "Error: {}.", err),
        }
    }

    fn remove_product(&mut self) -> io::Result<()> {
        let Some(code) = prompt::prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter the product code to remove: ",
        )?
        else {
            return Ok(());
        };

        if self.store.remove(&code) {
            writeln!(self.output, "Product removed.")
        } else {
            writeln!(self.output, "No product found with that code.")
        }
    }

    fn update_price(&mut self) -> io::Result<()> {
        let Some(code) = prompt::prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter the product code to update: ",
        )?
        else {
            return Ok(());
        };

        // Report a missing code without asking for the new price
        if self.store.find_by_code(&code).is_none() {
            writeln!(self.output, "No product found with that code.")?;
            return Ok(());
        }

        let Some(new_price) =
            prompt::prompt_f64(&mut self.input, &mut self.output, "Enter the new price: ")?
        else {
            return Ok(());
        };

        match self.store.update_price(&code, new_price) {
            Ok(()) => writeln!(self.output, "Price updated."),
            Err(err) => writeln!(self.output, "Error: {}.", err),
        }
    }

    fn aggregates(&mut self) -> io::Result<()> {
        match self.store.aggregate(self.threshold) {
            Some(report) => {
                let rendered = self.formatter.format_report(&report);
                writeln!(self.output, "\n{}", rendered)
            }
            None => writeln!(self.output, "The inventory is empty."),
        }
    }
}
