use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{District, DistrictInput, State, StateStats, User};

/// Find a login user by username
pub async fn find_user_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>("SELECT username, password FROM user WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Insert a user, replacing the password hash if the username already exists
pub async fn upsert_user(pool: &SqlitePool, username: &str, password_hash: &str) -> Result<(), DatabaseError> {
    sqlx::query(
        "INSERT INTO user (username, password) VALUES (?, ?)
         ON CONFLICT(username) DO UPDATE SET password = excluded.password",
    )
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn list_states(pool: &SqlitePool) -> Result<Vec<State>, DatabaseError> {
    let states = sqlx::query_as::<_, State>(
        "SELECT state_id, state_name, population FROM state ORDER BY state_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(states)
}

pub async fn find_state(pool: &SqlitePool, state_id: i64) -> Result<Option<State>, DatabaseError> {
    let state = sqlx::query_as::<_, State>(
        "SELECT state_id, state_name, population FROM state WHERE state_id = ?",
    )
    .bind(state_id)
    .fetch_optional(pool)
    .await?;

    Ok(state)
}

/// Insert a state, replacing name and population if the id already exists
pub async fn upsert_state(pool: &SqlitePool, state: &State) -> Result<(), DatabaseError> {
    sqlx::query(
        "INSERT INTO state (state_id, state_name, population) VALUES (?, ?, ?)
         ON CONFLICT(state_id) DO UPDATE SET state_name = excluded.state_name, population = excluded.population",
    )
    .bind(state.state_id)
    .bind(&state.state_name)
    .bind(state.population)
    .execute(pool)
    .await?;

    Ok(())
}

/// Sum the case counters of every district in a state
pub async fn state_stats(pool: &SqlitePool, state_id: i64) -> Result<StateStats, DatabaseError> {
    let stats = sqlx::query_as::<_, StateStats>(
        "SELECT
            SUM(cases) AS total_cases,
            SUM(cured) AS total_cured,
            SUM(active) AS total_active,
            SUM(deaths) AS total_deaths
         FROM district
         WHERE state_id = ?",
    )
    .bind(state_id)
    .fetch_one(pool)
    .await?;

    Ok(stats)
}

/// Insert a district and return its new id
pub async fn create_district(pool: &SqlitePool, input: &DistrictInput) -> Result<i64, DatabaseError> {
    let result = sqlx::query(
        "INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&input.district_name)
    .bind(input.state_id)
    .bind(input.cases)
    .bind(input.cured)
    .bind(input.active)
    .bind(input.deaths)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn find_district(pool: &SqlitePool, district_id: i64) -> Result<Option<District>, DatabaseError> {
    let district = sqlx::query_as::<_, District>(
        "SELECT district_id, district_name, state_id, cases, cured, active, deaths
         FROM district
         WHERE district_id = ?",
    )
    .bind(district_id)
    .fetch_optional(pool)
    .await?;

    Ok(district)
}

/// Replace every column of a district. Returns the number of rows matched.
pub async fn update_district(pool: &SqlitePool, district_id: i64, input: &DistrictInput) -> Result<u64, DatabaseError> {
    let result = sqlx::query(
        "UPDATE district
         SET district_name = ?, state_id = ?, cases = ?, cured = ?, active = ?, deaths = ?
         WHERE district_id = ?",
    )
    .bind(&input.district_name)
    .bind(input.state_id)
    .bind(input.cases)
    .bind(input.cured)
    .bind(input.active)
    .bind(input.deaths)
    .bind(district_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a district. Returns the number of rows removed.
pub async fn delete_district(pool: &SqlitePool, district_id: i64) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM district WHERE district_id = ?")
        .bind(district_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
