use crate::models::DbAppointment;
use chrono::{NaiveDate, Utc};
use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};
use uuid::Uuid;
use washbook_core::models::appointment::{AppointmentStatus, NewAppointment};

const APPOINTMENT_COLUMNS: &str = "id, customer_email, name, phone, vehicle_make, vehicle_model, \
     date, time_slot, comment, vehicle_type, plan_price, extra_features, status, created_at";

/// Inserts an appointment unless its (date, time_slot) is already taken.
///
/// Returns `None` when the unique constraint swallowed the insert.
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
) -> Result<Option<DbAppointment>> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let plan_price = i32::try_from(appointment.plan_price)
        .map_err(|_| eyre!("Plan price {} out of range", appointment.plan_price))?;

    tracing::debug!(
        "Creating appointment: id={}, date={}, slot={}, email={}",
        id,
        appointment.date,
        appointment.time_slot,
        appointment.customer_email
    );

    let created = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        INSERT INTO appointments (
            id, customer_email, name, phone, vehicle_make, vehicle_model,
            date, time_slot, comment, vehicle_type, plan_price, extra_features,
            status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        ON CONFLICT (date, time_slot) DO NOTHING
        RETURNING {APPOINTMENT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&appointment.customer_email)
    .bind(&appointment.name)
    .bind(&appointment.phone)
    .bind(&appointment.vehicle_make)
    .bind(&appointment.vehicle_model)
    .bind(appointment.date)
    .bind(&appointment.time_slot)
    .bind(appointment.comment.as_deref())
    .bind(appointment.vehicle.as_str())
    .bind(plan_price)
    .bind(appointment.extra_feature_names())
    .bind(AppointmentStatus::Booked.as_str())
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if created.is_none() {
        tracing::debug!(
            "Slot {} on {} already taken, insert skipped",
            appointment.time_slot,
            appointment.date
        );
    }

    Ok(created)
}

pub async fn get_booked_slots_by_date(pool: &Pool<Postgres>, date: NaiveDate) -> Result<Vec<String>> {
    let slots = sqlx::query_scalar::<_, String>(
        r#"
        SELECT time_slot
        FROM appointments
        WHERE date = $1
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// All appointments, or only those in `status` when given.
pub async fn list_appointments(
    pool: &Pool<Postgres>,
    status: Option<AppointmentStatus>,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments
        WHERE $1::TEXT IS NULL OR status = $1
        ORDER BY date ASC, created_at ASC
        "#
    ))
    .bind(status.map(|s| s.as_str()))
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn get_appointments_by_email(
    pool: &Pool<Postgres>,
    email: &str,
    limit: i64,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments
        WHERE customer_email = $1
        ORDER BY date DESC, created_at DESC
        LIMIT $2
        "#
    ))
    .bind(email)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn mark_appointment_completed(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        UPDATE appointments
        SET status = $2
        WHERE id = $1
        RETURNING {APPOINTMENT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(AppointmentStatus::Completed.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

pub async fn delete_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
