//! Migration: Create staff table with a cascading link to businesses.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Staff::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Staff::FirstName).string_len(150).not_null())
                    .col(ColumnDef::new(Staff::LastName).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Staff::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Staff::JobPosition).string_len(20).not_null())
                    .col(ColumnDef::new(Staff::PhoneNumber).string_len(255).null())
                    .col(ColumnDef::new(Staff::BusinessId).integer().not_null())
                    .col(
                        ColumnDef::new(Staff::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Staff::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_business_id")
                            .from(Staff::Table, Staff::BusinessId)
                            .to(Businesses::Table, Businesses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Staff listings are always scoped to one business
        manager
            .create_index(
                Index::create()
                    .name("idx_staff_business_id")
                    .table(Staff::Table)
                    .col(Staff::BusinessId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Staff {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    JobPosition,
    PhoneNumber,
    BusinessId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Businesses {
    Table,
    Id,
}
