use crate::domain::Expense;
use sqlx::FromRow;

/// Represents an expense row in the ledger database.
#[derive(Debug, FromRow, Clone)]
#[allow(dead_code)]
pub struct ExpenseRow {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub created: String,
    pub seq: i64,
}

impl ExpenseRow {
    pub fn into_expense(self) -> Expense {
        Expense {
            id: self.id,
            name: self.name,
            cost: self.cost,
        }
    }
}

/// Parameters for inserting a new expense.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct NewExpense {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub created: String,
}
