//! SeaORM entities for database tables

/// Departments table entity
pub mod department {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "Departments")]
    pub struct Model {
        /// Store-assigned identifier
        #[sea_orm(primary_key, column_name = "DepartmentId")]
        pub id: i32,

        #[sea_orm(column_name = "Name")]
        pub name: String,

        #[sea_orm(column_name = "Description", column_type = "Text", nullable)]
        pub description: Option<String>,

        /// Soft delete flag
        #[sea_orm(column_name = "Deleted")]
        pub deleted: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with developers
        #[sea_orm(has_many = "super::developer::Entity")]
        Developers,
    }

    impl Related<super::developer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Developers.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Developers table entity
pub mod developer {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "Developers")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "DeveloperId")]
        pub id: Uuid,

        #[sea_orm(column_name = "Name")]
        pub name: String,

        #[sea_orm(column_name = "DateOfBirth")]
        pub date_of_birth: Date,

        #[sea_orm(column_name = "Address")]
        pub address: String,

        /// Foreign key to Departments
        #[sea_orm(column_name = "DepartmentId")]
        pub department_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::department::Entity",
            from = "Column::DepartmentId",
            to = "super::department::Column::Id"
        )]
        Department,
        #[sea_orm(has_many = "super::account::Entity")]
        Accounts,
    }

    impl Related<super::department::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Department.def()
        }
    }

    impl Related<super::account::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Accounts.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Accounts table entity
pub mod account {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "Accounts")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "AccountId")]
        pub id: Uuid,

        #[sea_orm(column_name = "DateCreated")]
        pub date_created: DateTimeUtc,

        #[sea_orm(column_name = "AccountType")]
        pub account_type: String,

        /// Foreign key to Developers
        #[sea_orm(column_name = "DeveloperId")]
        pub developer_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::developer::Entity",
            from = "Column::DeveloperId",
            to = "super::developer::Column::Id"
        )]
        Developer,
    }

    impl Related<super::developer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Developer.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
