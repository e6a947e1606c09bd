//! Generic repository primitives over one SeaORM entity
//!
//! Reads return lazy [`Select`] queries that the caller finishes and executes
//! against [`RepositoryBase::conn`]. Writes are staged in the unit of work.

use super::unit_of_work::{KeyOf, StagedWrite, UnitOfWork, WriteOp};
use sea_orm::{
    sea_query::IntoCondition, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Select,
};

pub trait RepositoryBase<E>
where
    E: EntityTrait,
    E::ActiveModel: Send + Sync + 'static,
    E::Model: IntoActiveModel<E::ActiveModel>,
{
    fn unit_of_work(&self) -> &UnitOfWork;

    fn conn(&self) -> &DatabaseConnection {
        self.unit_of_work().conn()
    }

    /// Every row of the entity, unordered
    fn find_all(&self) -> Select<E> {
        E::find()
    }

    /// Rows matching `condition`
    fn find_by_condition<F>(&self, condition: F) -> Select<E>
    where
        F: IntoCondition,
    {
        E::find().filter(condition)
    }

    fn create(&self, model: E::ActiveModel) {
        self.unit_of_work()
            .stage(Box::new(StagedWrite::new(WriteOp::Insert, model)));
    }

    /// Stage an insert and report the primary key it receives
    fn create_with_key<F>(&self, model: E::ActiveModel, on_inserted: F)
    where
        F: Fn(KeyOf<E::ActiveModel>) + Send + Sync + 'static,
    {
        self.unit_of_work().stage(Box::new(StagedWrite::insert_with_key(
            model,
            Box::new(on_inserted),
        )));
    }

    fn update(&self, model: E::ActiveModel) {
        self.unit_of_work()
            .stage(Box::new(StagedWrite::new(WriteOp::Update, model)));
    }

    fn delete(&self, model: E::ActiveModel) {
        self.unit_of_work()
            .stage(Box::new(StagedWrite::new(WriteOp::Delete, model)));
    }
}
