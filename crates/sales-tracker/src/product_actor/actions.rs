//! Custom actions for the Product actor.
//!
//! Stock is never written through `update`; these actions are the ledger. Both run
//! inside the product actor, so reading the level and committing the change happen
//! in one message with nothing interleaved.

/// Stock operations on a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Adds a signed delta to the stock: negative to reserve, positive to release
    /// or restock.
    ///
    /// # Errors
    /// Fails without changing anything if the result would be negative or would
    /// not fit in a `u32`.
    ApplyDelta(i64),
}

/// Results from `ProductAction`s; variants match 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductActionResult {
    /// Current stock level.
    CheckStock(u32),
    /// Stock level after the delta was applied.
    ApplyDelta(u32),
}
