use sqlx::{query, query_as, query_scalar, SqlitePool};

use crate::db::models::{ExpenseRow, NewExpense};

/// Retrieves every expense in arrival order.
pub async fn get_expenses(pool: &SqlitePool) -> Result<Vec<ExpenseRow>, sqlx::Error> {
    let rows = query_as::<_, ExpenseRow>(
        "SELECT id, name, cost, created, seq FROM expense ORDER BY seq",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Retrieves a single expense by its identifier.
#[allow(dead_code)]
pub async fn get_expense_by_id(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<ExpenseRow>, sqlx::Error> {
    let row = query_as::<_, ExpenseRow>(
        "SELECT id, name, cost, created, seq FROM expense WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn count_expenses(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    query_scalar("SELECT COUNT(*) FROM expense")
        .fetch_one(pool)
        .await
}

pub async fn total_cost(pool: &SqlitePool) -> Result<f64, sqlx::Error> {
    query_scalar("SELECT COALESCE(SUM(cost), 0.0) FROM expense")
        .fetch_one(pool)
        .await
}

/// Inserts a new expense, assigning the next arrival sequence number.
#[allow(dead_code)]
pub async fn insert_expense(pool: &SqlitePool, params: &NewExpense) -> Result<(), sqlx::Error> {
    let seq: i64 = query_scalar("SELECT COALESCE(MAX(seq), 0) + 1 FROM expense")
        .fetch_one(pool)
        .await?;

    query("INSERT INTO expense (id, name, cost, created, seq) VALUES (?, ?, ?, ?, ?)")
        .bind(&params.id)
        .bind(&params.name)
        .bind(params.cost)
        .bind(&params.created)
        .bind(seq)
        .execute(pool)
        .await?;

    Ok(())
}

/// Replaces an expense's mutable fields; identity, creation time and
/// arrival order are untouched.
#[allow(dead_code)]
pub async fn update_expense(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    cost: f64,
) -> Result<bool, sqlx::Error> {
    let result = query("UPDATE expense SET name = ?, cost = ? WHERE id = ?")
        .bind(name)
        .bind(cost)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Deletes an expense by identifier. Returns whether a row was removed;
/// callers treat a missing row as a no-op, not an error.
pub async fn delete_expense(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let result = query("DELETE FROM expense WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::setup_database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> Result<SqlitePool, sqlx::Error> {
        // A single connection keeps the in-memory database alive and shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        setup_database(&pool).await?;

        Ok(pool)
    }

    fn new_expense(id: &str, name: &str, cost: f64) -> NewExpense {
        NewExpense {
            id: id.to_string(),
            name: name.to_string(),
            cost,
            created: "2026-08-05".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_preserves_arrival_order() -> Result<(), Box<dyn std::error::Error>> {
        let pool = setup_test_db().await?;

        insert_expense(&pool, &new_expense("a", "Food", 30.0)).await?;
        insert_expense(&pool, &new_expense("b", "Rent", 70.0)).await?;
        insert_expense(&pool, &new_expense("c", "Fun", 15.0)).await?;

        let rows = get_expenses(&pool).await?;
        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(rows[2].seq, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields() -> Result<(), Box<dyn std::error::Error>> {
        let pool = setup_test_db().await?;

        insert_expense(&pool, &new_expense("a", "Food", 30.0)).await?;
        let changed = update_expense(&pool, "a", "Groceries", 42.0).await?;
        assert!(changed);

        let row = get_expense_by_id(&pool, "a").await?.ok_or("row missing")?;
        assert_eq!(row.name, "Groceries");
        assert!((row.cost - 42.0).abs() < f64::EPSILON);
        assert_eq!(row.seq, 1); // Arrival order is untouched.

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_existed() -> Result<(), Box<dyn std::error::Error>> {
        let pool = setup_test_db().await?;

        insert_expense(&pool, &new_expense("a", "Food", 30.0)).await?;

        assert!(delete_expense(&pool, "a").await?);
        assert!(!delete_expense(&pool, "a").await?);
        assert_eq!(count_expenses(&pool).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_total_cost_sums_all_rows() -> Result<(), Box<dyn std::error::Error>> {
        let pool = setup_test_db().await?;

        insert_expense(&pool, &new_expense("a", "Food", 30.0)).await?;
        insert_expense(&pool, &new_expense("b", "Rent", 70.0)).await?;

        let total = total_cost(&pool).await?;
        assert!((total - 100.0).abs() < 1e-9);

        Ok(())
    }
}
