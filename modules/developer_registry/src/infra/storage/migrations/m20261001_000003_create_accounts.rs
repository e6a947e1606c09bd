use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::AccountId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Accounts::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Accounts::AccountType).string().not_null())
                    .col(ColumnDef::new(Accounts::DeveloperId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accounts_developer")
                            .from(Accounts::Table, Accounts::DeveloperId)
                            .to(Developers::Table, Developers::DeveloperId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_accounts_developer_id")
                    .table(Accounts::Table)
                    .col(Accounts::DeveloperId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Accounts {
    #[sea_orm(iden = "Accounts")]
    Table,
    #[sea_orm(iden = "AccountId")]
    AccountId,
    #[sea_orm(iden = "DateCreated")]
    DateCreated,
    #[sea_orm(iden = "AccountType")]
    AccountType,
    #[sea_orm(iden = "DeveloperId")]
    DeveloperId,
}

#[derive(DeriveIden)]
enum Developers {
    #[sea_orm(iden = "Developers")]
    Table,
    #[sea_orm(iden = "DeveloperId")]
    DeveloperId,
}
