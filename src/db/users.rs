use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::{PatchUser, User};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    email: &str,
    name: Option<&str>,
    phone: Option<&str>,
    address: Option<&str>,
    birth_date: Option<DateTime<Utc>>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (email, name, phone, address, birth_date)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(email)
    .bind(name)
    .bind(phone)
    .bind(address)
    .bind(birth_date)
    .fetch_one(pool)
    .await
}

/// Full replace of every updatable column. `None` when the id matched no row.
pub async fn replace(
    pool: &PgPool,
    id: i64,
    email: &str,
    name: Option<&str>,
    phone: Option<&str>,
    address: Option<&str>,
    birth_date: Option<DateTime<Utc>>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET email = $2, name = $3, phone = $4, address = $5, birth_date = $6
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(email)
    .bind(name)
    .bind(phone)
    .bind(address)
    .bind(birth_date)
    .fetch_optional(pool)
    .await
}

/// Updates only the columns present in `patch`. The column list comes from
/// the fixed `PatchUser` fields, never from raw request keys, and every
/// value is a bound parameter with the id predicate last.
///
/// Callers must reject an empty patch before getting here.
pub async fn update_partial(
    pool: &PgPool,
    id: i64,
    patch: &PatchUser,
) -> Result<Option<User>, sqlx::Error> {
    debug_assert!(!patch.is_empty());

    let mut qb = QueryBuilder::<Postgres>::new("UPDATE users SET ");
    let mut set = qb.separated(", ");
    if let Some(email) = &patch.email {
        set.push("email = ");
        set.push_bind_unseparated(email.as_deref());
    }
    if let Some(name) = &patch.name {
        set.push("name = ");
        set.push_bind_unseparated(name.as_deref());
    }
    if let Some(phone) = &patch.phone {
        set.push("phone = ");
        set.push_bind_unseparated(phone.as_deref());
    }
    if let Some(address) = &patch.address {
        set.push("address = ");
        set.push_bind_unseparated(address.as_deref());
    }
    if let Some(birth_date) = &patch.birth_date {
        set.push("birth_date = ");
        set.push_bind_unseparated(*birth_date);
    }
    qb.push(" WHERE id = ");
    qb.push_bind(id);
    qb.push(" RETURNING *");

    qb.build_query_as::<User>().fetch_optional(pool).await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
