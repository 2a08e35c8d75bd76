//! Standard built-ins registered into every new symbol table

pub mod io_basic;
pub mod numeric;
pub mod variables;

use crate::runtime::SymbolTable;

/// Register all standard built-ins
pub fn register_all(symbols: &mut SymbolTable) {
    io_basic::register(symbols);
    variables::register(symbols);
    numeric::register(symbols);
}
