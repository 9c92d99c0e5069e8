// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Column, ColumnType, ForeignKey, Realm, ReferenceOption, Schema, Table, TableRef};

pub fn users_table(schema: &str) -> Table {
	Table::new(schema, "users")
		.with_column(Column::new("id", ColumnType::BigInt))
		.with_column(Column::new("email", ColumnType::Varchar(255)))
		.with_primary_key(["id"])
}

/// `orders` with a foreign key `orders_user_fk` to `users(id)` in `users_schema`.
pub fn orders_table(schema: &str, users_schema: &str) -> Table {
	Table::new(schema, "orders")
		.with_column(Column::new("id", ColumnType::BigInt))
		.with_column(Column::new("user_id", ColumnType::BigInt))
		.with_primary_key(["id"])
		.with_foreign_key(
			ForeignKey::new("orders_user_fk", ["user_id"], TableRef::new(users_schema, "users"), ["id"])
				.on_delete(ReferenceOption::Cascade),
		)
}

/// `s1` and `s2` both own `users`; `s1.orders` references `s2.users(id)`.
pub fn orders_users_realm() -> Realm {
	Realm::new()
		.with_schema(Schema::new("s1").with_table(users_table("s1")).with_table(orders_table("s1", "s2")))
		.with_schema(Schema::new("s2").with_table(users_table("s2")))
}

/// No name collides: `s1.users` and `s2.orders` referencing `s1.users(id)`.
pub fn disjoint_realm() -> Realm {
	Realm::new()
		.with_schema(Schema::new("s1").with_table(users_table("s1")))
		.with_schema(Schema::new("s2").with_table(orders_table("s2", "s1")))
}
