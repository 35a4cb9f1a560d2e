//! Migration: Create the students table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::Surname).string().not_null())
                    .col(ColumnDef::new(Students::MiddleNames).string().null())
                    .col(ColumnDef::new(Students::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Students::YearOfAdmission).integer().not_null())
                    .col(ColumnDef::new(Students::Programme).string().not_null())
                    .col(ColumnDef::new(Students::PreviousSchool).string().null())
                    .col(ColumnDef::new(Students::BeceAggregate).integer().not_null())
                    .col(ColumnDef::new(Students::MotherName).string().null())
                    .col(ColumnDef::new(Students::MotherContact).string().null())
                    .col(ColumnDef::new(Students::FatherName).string().null())
                    .col(ColumnDef::new(Students::FatherContact).string().null())
                    .col(ColumnDef::new(Students::BeceResultFile).string().null())
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Directory filters and the default sort
        for (name, column) in [
            ("idx_students_year_of_admission", Students::YearOfAdmission),
            ("idx_students_programme", Students::Programme),
            ("idx_students_created_at", Students::CreatedAt),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Students::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    FirstName,
    Surname,
    MiddleNames,
    DateOfBirth,
    YearOfAdmission,
    Programme,
    PreviousSchool,
    BeceAggregate,
    MotherName,
    MotherContact,
    FatherName,
    FatherContact,
    BeceResultFile,
    CreatedAt,
    UpdatedAt,
}
