//! Unit of work shared by the repositories of one wrapper
//!
//! Staged writes are kept in order and flushed inside one transaction by
//! [`UnitOfWork::commit`]. A failed commit rolls back and discards the batch.

use async_trait::async_trait;
use parking_lot::Mutex;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityName, EntityTrait, IntoActiveModel, PrimaryKeyTrait, TransactionTrait,
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Insert,
    Update,
    Delete,
}

/// A type-erased staged write
#[async_trait]
pub trait PendingWrite: Send + Sync {
    fn op(&self) -> WriteOp;

    fn table(&self) -> String;

    async fn apply(&self, txn: &DatabaseTransaction) -> Result<(), DbErr>;
}

/// Primary key value of the entity behind an active model
pub type KeyOf<A> =
    <<<A as ActiveModelTrait>::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Receives the primary key of an applied insert
pub type KeySink<A> = Box<dyn Fn(KeyOf<A>) + Send + Sync>;

/// Staged write of one active model
pub struct StagedWrite<A: ActiveModelTrait> {
    op: WriteOp,
    model: A,
    key_sink: Option<KeySink<A>>,
}

impl<A: ActiveModelTrait> StagedWrite<A> {
    pub fn new(op: WriteOp, model: A) -> Self {
        Self {
            op,
            model,
            key_sink: None,
        }
    }

    /// Insert whose primary key is handed to `sink` once applied
    pub fn insert_with_key(model: A, sink: KeySink<A>) -> Self {
        Self {
            op: WriteOp::Insert,
            model,
            key_sink: Some(sink),
        }
    }
}

#[async_trait]
impl<A> PendingWrite for StagedWrite<A>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + Sync + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    fn op(&self) -> WriteOp {
        self.op
    }

    fn table(&self) -> String {
        A::Entity::default().table_name().to_string()
    }

    async fn apply(&self, txn: &DatabaseTransaction) -> Result<(), DbErr> {
        let model = self.model.clone();
        match self.op {
            WriteOp::Insert => {
                let inserted = A::Entity::insert(model).exec(txn).await?;
                if let Some(sink) = &self.key_sink {
                    sink(inserted.last_insert_id);
                }
            }
            WriteOp::Update => {
                A::Entity::update(model).exec(txn).await?;
            }
            WriteOp::Delete => {
                let result = A::Entity::delete(model).exec(txn).await?;
                if result.rows_affected == 0 {
                    return Err(DbErr::RecordNotFound(format!(
                        "no {} row to delete",
                        self.table()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Pending-change set plus the connection it is flushed to
#[derive(Clone)]
pub struct UnitOfWork {
    db: Arc<DatabaseConnection>,
    pending: Arc<Mutex<Vec<Box<dyn PendingWrite>>>>,
}

impl UnitOfWork {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Connection used for reads
    pub fn conn(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn stage(&self, write: Box<dyn PendingWrite>) {
        self.pending.lock().push(write);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Apply every staged write in one transaction; returns how many were applied
    pub async fn commit(&self) -> Result<usize, DbErr> {
        let pending = std::mem::take(&mut *self.pending.lock());
        if pending.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;
        for write in &pending {
            tracing::debug!(table = %write.table(), op = ?write.op(), "applying staged write");
            // Dropping `txn` on error rolls the whole batch back
            write.apply(&txn).await?;
        }
        txn.commit().await?;

        Ok(pending.len())
    }
}
