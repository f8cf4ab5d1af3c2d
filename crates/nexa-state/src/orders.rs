//! # Order History Store
//!
//! Completed invoices, newest first, mirrored into `order_history`.
//! Invoices are only ever prepended; the history is emptied as a whole on
//! logout.

use std::sync::Arc;

use nexa_core::{Invoice, Money, OrderHistory};
use nexa_store::{LocalStorage, StorageKey};
use tracing::debug;

use crate::persisted::{LoadPhase, PersistedCell};
use crate::writer::WriterHandle;

/// Shared handle to the order history.
#[derive(Clone)]
pub struct OrderStore {
    cell: Arc<PersistedCell<OrderHistory>>,
}

impl OrderStore {
    pub fn new(writer: WriterHandle) -> Self {
        OrderStore {
            cell: Arc::new(PersistedCell::new(StorageKey::OrderHistory, writer)),
        }
    }

    pub async fn load(&self, storage: &LocalStorage) {
        self.cell.load(storage).await;
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.phase() == LoadPhase::Loaded
    }

    /// Prepends an invoice.
    pub fn add_order(&self, invoice: Invoice) {
        debug!(order_id = %invoice.order_id, total = %invoice.total_amount, "Order added");
        self.cell.update(|history| history.add(invoice));
    }

    /// Looks up an invoice. Absent ids are `None`.
    pub fn get_order(&self, order_id: &str) -> Option<Invoice> {
        self.cell.read(|history| history.get(order_id).cloned())
    }

    /// All invoices, newest first.
    pub fn orders(&self) -> Vec<Invoice> {
        self.cell.read(|history| history.orders().to_vec())
    }

    pub fn count(&self) -> usize {
        self.cell.read(OrderHistory::count)
    }

    /// Sum of invoice totals.
    pub fn total_spent(&self) -> Money {
        self.cell.read(OrderHistory::total_spent)
    }

    pub(crate) fn reset(&self) {
        self.cell.reset();
    }
}
