//! Scoped host transaction
//!
//! A [`Transaction`] borrows the document for its whole lifetime. Every
//! mutation goes through the guard (it derefs to the document), and the guard
//! rolls the host transaction back when dropped unless [`Transaction::commit`]
//! succeeded first.

use crate::error::Result;
use crate::host::HostDocument;
use std::ops::{Deref, DerefMut};

/// State of a transaction guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Started,
    Committed,
    RolledBack,
}

/// Guard over an open host transaction
pub struct Transaction<'a, D: HostDocument + ?Sized> {
    doc: &'a mut D,
    name: String,
    status: TransactionStatus,
}

impl<'a, D: HostDocument + ?Sized> Transaction<'a, D> {
    /// Open a named transaction on `doc`
    pub fn start(doc: &'a mut D, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        doc.begin_transaction(&name)?;
        tracing::debug!(target: "bim_envelope::transaction", name = %name, "transaction started");
        Ok(Transaction {
            doc,
            name,
            status: TransactionStatus::Started,
        })
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    /// Commit; on failure the guard is dropped and the changes are rolled back
    pub fn commit(mut self) -> Result<()> {
        self.doc.commit_transaction()?;
        self.status = TransactionStatus::Committed;
        tracing::debug!(target: "bim_envelope::transaction", name = %self.name, "transaction committed");
        Ok(())
    }

    /// Discard all changes made in this transaction
    pub fn rollback(mut self) {
        self.rollback_open();
    }

    fn rollback_open(&mut self) {
        if self.status == TransactionStatus::Started {
            self.doc.rollback_transaction();
            self.status = TransactionStatus::RolledBack;
            tracing::warn!(target: "bim_envelope::transaction", name = %self.name, "transaction rolled back");
        }
    }
}

impl<D: HostDocument + ?Sized> Deref for Transaction<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.doc
    }
}

impl<D: HostDocument + ?Sized> DerefMut for Transaction<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.doc
    }
}

impl<D: HostDocument + ?Sized> Drop for Transaction<'_, D> {
    fn drop(&mut self) {
        self.rollback_open();
    }
}
