//! The numbered main menu and its dispatch choices.

/// Menu text shown before every selection prompt.
pub const MENU: &str = "\
--- INVENTORY MENU ---
1. Show inventory
2. Find product by code
3. Find product by name
4. Add product
5. Remove product
6. Update product price
7. Aggregate report
8. Exit";

/// One of the eight menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowInventory,
    FindByCode,
    FindByName,
    AddProduct,
    RemoveProduct,
    UpdatePrice,
    Aggregates,
    Exit,
}

impl MenuChoice {
    /// Maps an entered menu number to its operation. `None` for anything
    /// outside 1-8.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::ShowInventory),
            2 => Some(Self::FindByCode),
            3 => Some(Self::FindByName),
            4 => Some(Self::AddProduct),
            5 => Some(Self::RemoveProduct),
            6 => Some(Self::UpdatePrice),
            7 => Some(Self::Aggregates),
            8 => Some(Self::Exit),
            _ => None,
        }
    }
}
