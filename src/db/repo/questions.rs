//! Question operations for the repository.

use crate::domain::{CategoryId, NewQuestion, Page, Question, QuestionId};

use super::{question_from_row, Repository};

impl Repository {
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// One page of questions ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_questions(&self, page: Page) -> Result<Vec<Question>, sqlx::Error> {
        if !page.is_valid() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(question_from_row).collect())
    }

    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count_questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions WHERE category = ?")
            .bind(category)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// One page of the questions in `category`, ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_questions_in_category(
        &self,
        category: CategoryId,
        page: Page,
    ) -> Result<Vec<Question>, sqlx::Error> {
        if !page.is_valid() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(category)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(question_from_row).collect())
    }

    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(question_from_row))
    }

    /// Insert a validated question and return the stored record.
    ///
    /// # Errors
    /// Returns a foreign key violation if the category does not exist.
    pub async fn insert_question(&self, new: NewQuestion) -> Result<Question, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(new.question.as_str())
        .bind(new.answer.as_str())
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(new.into_question(result.last_insert_rowid()))
    }

    /// Delete a question by id. Returns `false` if no such question exists.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_question(&self, id: QuestionId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Questions whose text contains `term` exactly as given, ignoring case.
    ///
    /// Case folding happens here rather than in SQL: SQLite's `LIKE` and
    /// `lower()` only fold ASCII letters.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .iter()
            .map(question_from_row)
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    /// Every question a quiz may draw from: one category, or all when `category` is `None`.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let rows = match category {
            Some(category) => {
                sqlx::query(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE category = ?
                    ORDER BY id ASC
                    "#,
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows.iter().map(question_from_row).collect())
    }
}
