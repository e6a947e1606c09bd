use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Developers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Developers::DeveloperId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Developers::Name).string_len(60).not_null())
                    .col(ColumnDef::new(Developers::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Developers::Address).string_len(100).not_null())
                    .col(ColumnDef::new(Developers::DepartmentId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_developers_department")
                            .from(Developers::Table, Developers::DepartmentId)
                            .to(Departments::Table, Departments::DepartmentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_developers_department_id")
                    .table(Developers::Table)
                    .col(Developers::DepartmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Developers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Developers {
    #[sea_orm(iden = "Developers")]
    Table,
    #[sea_orm(iden = "DeveloperId")]
    DeveloperId,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "DateOfBirth")]
    DateOfBirth,
    #[sea_orm(iden = "Address")]
    Address,
    #[sea_orm(iden = "DepartmentId")]
    DepartmentId,
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "Departments")]
    Table,
    #[sea_orm(iden = "DepartmentId")]
    DepartmentId,
}
