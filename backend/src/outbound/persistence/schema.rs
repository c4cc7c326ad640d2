//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Company catalogue table.
    ///
    /// Stores validated companies. The `name` column carries a UNIQUE
    /// constraint (declared in the migration) so duplicate names surface as
    /// unique-violation errors rather than silent overwrites.
    companies (id) {
        /// Primary key: UUID v4 identifier assigned by the service.
        id -> Uuid,
        /// Company name, unique across the table (max 15 characters).
        name -> Varchar,
        /// Optional free-text description (max 3000 characters).
        description -> Nullable<Text>,
        /// Headcount, non-negative.
        amount_of_employees -> Int4,
        /// Whether the company is registered.
        registered -> Bool,
        /// Company type, one of the closed set of type names.
        company_type -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// User accounts table.
    ///
    /// Stores registered users with their password hashes. The `username`
    /// column carries a UNIQUE constraint declared in the migration.
    users (id) {
        /// Primary key: UUID v4 identifier assigned by the service.
        id -> Uuid,
        /// Login name, unique across the table.
        username -> Text,
        /// Salted password hash. Never leaves the persistence layer
        /// unredacted.
        password_hash -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}
